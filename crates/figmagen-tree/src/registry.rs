//! Annotation parsing and the handler registry.
//!
//! Instance nodes name their component in the main component's description
//! (`Fluent component: CheckBox`). The name resolves to a [`ComponentKind`],
//! and the kind selects a [`Handler`] from a [`Registry`].

use std::collections::HashMap;
use std::sync::{LazyLock, OnceLock};

use regex::Regex;

use crate::extract::RuleContext;
use crate::kind::ComponentKind;
use crate::rules;
use crate::tag::Tag;

/// Turns a built tag into its classified replacement.
pub type Handler = fn(&RuleContext<'_>, &Tag) -> Tag;

/// Annotation spellings that do not match a kind name.
const SYNONYMS: &[(&str, ComponentKind)] = &[("Pivot stack", ComponentKind::Stack)];

static ANNOTATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Fluent component: (.*)").expect("annotation regex"));

/// Resolve a component description to a kind.
pub fn resolve_annotation(description: &str) -> Option<ComponentKind> {
    let captures = ANNOTATION_REGEX.captures(description)?;
    let name = captures.get(1)?.as_str().trim();
    ComponentKind::from_name(name).or_else(|| {
        SYNONYMS
            .iter()
            .find(|(synonym, _)| *synonym == name)
            .map(|(_, kind)| *kind)
    })
}

/// Mapping from component kind to handler.
#[derive(Default)]
pub struct Registry {
    handlers: HashMap<ComponentKind, Handler>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, kind: ComponentKind, handler: Handler) -> &mut Self {
        self.handlers.insert(kind, handler);
        self
    }

    pub fn handler(&self, kind: ComponentKind) -> Option<Handler> {
        self.handlers.get(&kind).copied()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// The built-in handlers, populated on first use.
    pub fn standard() -> &'static Registry {
        static STANDARD: OnceLock<Registry> = OnceLock::new();
        STANDARD.get_or_init(|| {
            let mut registry = Registry::new();
            rules::register_all(&mut registry);
            registry
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resolve_plain_name() {
        assert_eq!(
            resolve_annotation("Fluent component: CheckBox"),
            Some(ComponentKind::CheckBox)
        );
    }

    #[test]
    fn test_resolve_trims_and_ignores_prefix_text() {
        assert_eq!(
            resolve_annotation("Checkbox with label.\nFluent component:  Toggle  "),
            Some(ComponentKind::Toggle)
        );
    }

    #[test]
    fn test_resolve_only_first_line_after_marker() {
        assert_eq!(
            resolve_annotation("Fluent component: Slider\nSee docs"),
            Some(ComponentKind::Slider)
        );
    }

    #[test]
    fn test_resolve_synonym() {
        assert_eq!(
            resolve_annotation("Fluent component: Pivot stack"),
            Some(ComponentKind::Stack)
        );
    }

    #[test]
    fn test_resolve_unknown() {
        assert_eq!(resolve_annotation("Fluent component: Carousel"), None);
        assert_eq!(resolve_annotation("A checkbox"), None);
        assert_eq!(resolve_annotation(""), None);
    }

    #[test]
    fn test_standard_registry_covers_every_kind() {
        let registry = Registry::standard();
        for kind in ComponentKind::ALL {
            assert!(registry.handler(kind).is_some(), "no handler for {kind}");
        }
        assert_eq!(registry.len(), ComponentKind::ALL.len());
    }

    #[test]
    fn test_custom_registration() {
        fn noop(_: &RuleContext<'_>, tag: &Tag) -> Tag {
            tag.clone()
        }
        let mut registry = Registry::new();
        assert!(registry.is_empty());
        registry.register(ComponentKind::Slider, noop);
        assert!(registry.handler(ComponentKind::Slider).is_some());
        assert!(registry.handler(ComponentKind::Rating).is_none());
    }
}
