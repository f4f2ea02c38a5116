//! Tag tree builder.
//!
//! Walks the scene bottom-up: a node's children are built (and classified)
//! before the node itself, so classification rules can inspect
//! already-classified children. Invisible nodes are pruned with their whole
//! subtree; image leaves never descend.

use figmagen_scene::{
    is_image_leaf, DefaultStyleExtractor, GenerateConfig, NodeId, NodeKind, Scene, SceneNode,
    StyleExtractor,
};
use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::extract::{collapse, Identifiers, RuleContext};
use crate::kind::ComponentKind;
use crate::registry::{resolve_annotation, Registry};
use crate::tag::{PropValue, Property, Tag};

/// Builds the canonical [`Tag`] tree for one generation request.
pub struct TreeBuilder<'a> {
    scene: &'a Scene,
    config: GenerateConfig,
    styles: &'a dyn StyleExtractor,
    registry: &'a Registry,
    idents: Identifiers,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(scene: &'a Scene, config: GenerateConfig) -> Self {
        Self {
            scene,
            config,
            styles: &DefaultStyleExtractor,
            registry: Registry::standard(),
            idents: Identifiers::new(),
        }
    }

    pub fn with_styles(mut self, styles: &'a dyn StyleExtractor) -> Self {
        self.styles = styles;
        self
    }

    pub fn with_registry(mut self, registry: &'a Registry) -> Self {
        self.registry = registry;
        self
    }

    /// Build from the scene root. `None` when the root is invisible.
    pub fn build(mut self) -> Option<Tag> {
        let mut root = self.build_node(self.scene.root_id())?;
        assign_identifiers(&mut root, &mut self.idents);
        Some(root)
    }

    fn build_node(&mut self, id: NodeId) -> Option<Tag> {
        let scene = self.scene;
        let node = scene.node(id);
        if !node.visible {
            trace!(name = %node.name, "pruned invisible node");
            return None;
        }

        let is_img = is_image_leaf(scene, node);
        let children = if is_img {
            Vec::new()
        } else {
            node.children
                .iter()
                .filter_map(|child| self.build_node(*child))
                .collect()
        };

        let mut properties = Vec::new();
        if is_img {
            properties.push(Property::string("src", ""));
        }

        let tag = Tag {
            name: if is_img {
                "img".to_string()
            } else {
                node.name.clone()
            },
            text: node
                .is_text()
                .then(|| node.characters.clone().unwrap_or_default()),
            is_img,
            properties,
            style: self.styles.extract(node, self.config.unit_type),
            children,
            source: id,
            is_component: matches!(node.kind, NodeKind::Component | NodeKind::ComponentSet),
            kind: None,
            variables: IndexMap::new(),
        };

        if is_img {
            return Some(tag);
        }
        Some(self.classify(node, tag))
    }

    /// Structural trigger first (auto-layout frames), then the annotation
    /// trigger (component instances).
    fn classify(&self, node: &SceneNode, tag: Tag) -> Tag {
        let kind = if node.kind == NodeKind::Frame && node.has_auto_layout() {
            ComponentKind::Stack
        } else if node.kind == NodeKind::Instance {
            match node.annotation().and_then(resolve_annotation) {
                Some(kind) => kind,
                None => return tag,
            }
        } else {
            return tag;
        };

        if !self.config.style_mode.runs_variant_handlers() {
            if kind == ComponentKind::Stack && node.kind == NodeKind::Frame {
                return tag;
            }
            debug!(name = %node.name, %kind, "collapsed component");
            return collapse(&tag, kind);
        }

        let Some(handler) = self.registry.handler(kind) else {
            debug!(name = %node.name, %kind, "no handler registered");
            return tag;
        };
        debug!(name = %node.name, %kind, "classified component");
        let cx = RuleContext::new(self.scene, node, kind);
        handler(&cx, &tag)
    }
}

/// Give every surviving hoisted variable a unique name, in pre-order, and
/// point the owning tag's expressions at it.
fn assign_identifiers(tag: &mut Tag, idents: &mut Identifiers) {
    let variables = std::mem::take(&mut tag.variables);
    for (base, value) in variables {
        let ident = idents.claim(&base);
        if ident != base {
            trace!(%base, %ident, "renamed hoisted variable");
            let stale = PropValue::Expr(base);
            for property in &mut tag.properties {
                if property.value == stale {
                    property.value = PropValue::Expr(ident.clone());
                }
            }
        }
        tag.variables.insert(ident, value);
    }
    for child in &mut tag.children {
        assign_identifiers(child, idents);
    }
}

/// Build the tag tree with the default collaborators.
pub fn build_tag_tree(scene: &Scene, config: GenerateConfig) -> Option<Tag> {
    TreeBuilder::new(scene, config).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use figmagen_scene::{StyleMode, StyleRecord, UnitType};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn build(value: serde_json::Value) -> Option<Tag> {
        let scene = Scene::from_value(value).unwrap();
        build_tag_tree(&scene, GenerateConfig::default())
    }

    fn build_semantic(value: serde_json::Value) -> Option<Tag> {
        let scene = Scene::from_value(value).unwrap();
        build_tag_tree(
            &scene,
            GenerateConfig::new(StyleMode::SemanticMarkup, UnitType::Px),
        )
    }

    fn names(tag: &Tag) -> Vec<&str> {
        tag.walk().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_invisible_root() {
        let tag = build(json!({ "name": "Caption", "type": "TEXT", "visible": false, "characters": "Hi" }));
        assert!(tag.is_none());
    }

    #[test]
    fn test_invisible_subtree_pruned() {
        let tag = build(json!({
            "name": "Card", "type": "FRAME", "children": [
                { "name": "Hidden", "type": "FRAME", "visible": false, "children": [
                    { "name": "Inner", "type": "TEXT", "characters": "x" }
                ] },
                { "name": "Shown", "type": "TEXT", "characters": "y" }
            ]
        }))
        .unwrap();
        assert_eq!(names(&tag), vec!["Card", "Shown"]);
    }

    #[test]
    fn test_text_leaf() {
        let tag = build(json!({ "name": "Title", "type": "TEXT", "characters": "Hello" })).unwrap();
        assert_eq!(tag.text.as_deref(), Some("Hello"));
        assert!(tag.children.is_empty());
    }

    #[test]
    fn test_text_without_characters_is_empty_text() {
        let tag = build(json!({ "name": "Title", "type": "TEXT" })).unwrap();
        assert_eq!(tag.text.as_deref(), Some(""));
    }

    #[test]
    fn test_image_collapse() {
        let tag = build(json!({
            "name": "Logo", "type": "GROUP", "children": [
                { "name": "path1", "type": "VECTOR" },
                { "name": "path2", "type": "VECTOR" }
            ]
        }))
        .unwrap();
        assert!(tag.is_img);
        assert_eq!(tag.name, "img");
        assert!(tag.children.is_empty());
        assert_eq!(tag.properties, vec![Property::string("src", "")]);
    }

    #[test]
    fn test_image_instance_is_not_classified() {
        let tag = build(json!({
            "name": "Icon", "type": "INSTANCE",
            "mainComponent": { "name": "Icon", "description": "Fluent component: IconButton" },
            "children": [ { "name": "glyph", "type": "VECTOR" } ]
        }))
        .unwrap();
        assert!(tag.is_img);
        assert_eq!(tag.kind, None);
        assert_eq!(tag.properties.len(), 1);
    }

    #[test]
    fn test_component_definition_flag() {
        let tag = build(json!({ "name": "Card Header", "type": "COMPONENT" })).unwrap();
        assert!(tag.is_component);
    }

    #[test]
    fn test_unannotated_instance_is_generic() {
        let tag = build(json!({
            "name": "Widget", "type": "INSTANCE",
            "mainComponent": { "name": "Widget", "description": "Just a widget" },
            "children": [ { "name": "Label", "type": "TEXT", "characters": "x" } ]
        }))
        .unwrap();
        assert_eq!(tag.kind, None);
        assert_eq!(tag.children.len(), 1);
    }

    #[test]
    fn test_style_record_attached() {
        let tag = build(json!({ "name": "Main Card", "type": "FRAME", "width": 32 })).unwrap();
        assert_eq!(tag.style.class_name, "main-card");
        assert_eq!(tag.style.properties.len(), 1);
    }

    #[test]
    fn test_custom_style_extractor() {
        struct Fixed;
        impl StyleExtractor for Fixed {
            fn extract(&self, _: &SceneNode, unit: UnitType) -> StyleRecord {
                StyleRecord {
                    class_name: format!("{unit:?}").to_lowercase(),
                    properties: Vec::new(),
                }
            }
        }
        let scene = Scene::from_value(json!({ "name": "Box", "type": "FRAME" })).unwrap();
        let tag = TreeBuilder::new(&scene, GenerateConfig::new(StyleMode::ComponentLibrary, UnitType::Rem))
            .with_styles(&Fixed)
            .build()
            .unwrap();
        assert_eq!(tag.style.class_name, "rem");
    }

    #[test]
    fn test_semantic_mode_skips_stack() {
        let tag = build_semantic(json!({
            "name": "Row", "type": "FRAME", "layoutMode": "HORIZONTAL", "itemSpacing": 8,
            "children": [ { "name": "a", "type": "TEXT", "characters": "a" } ]
        }))
        .unwrap();
        assert_eq!(tag.kind, None);
        assert!(tag.variables.is_empty());
        assert_eq!(tag.children.len(), 1);
    }

    #[test]
    fn test_semantic_mode_collapses_without_properties() {
        let tag = build_semantic(json!({
            "name": "Accept", "type": "INSTANCE",
            "mainComponent": { "name": "Checkbox", "description": "Fluent component: CheckBox" },
            "variantProperties": { "Checked": "True" },
            "children": [ { "name": "String", "type": "TEXT", "characters": "Accept terms" } ]
        }))
        .unwrap();
        assert_eq!(tag.kind, Some(ComponentKind::CheckBox));
        assert!(tag.properties.is_empty());
        assert!(tag.children.is_empty());
    }

    #[test]
    fn test_semantic_mode_pivot_stack_keeps_children() {
        let tag = build_semantic(json!({
            "name": "Tabs row", "type": "INSTANCE",
            "mainComponent": { "name": "Pivot stack", "description": "Fluent component: Pivot stack" },
            "children": [
                { "name": "a", "type": "TEXT", "characters": "a" },
                { "name": "Box", "type": "FRAME" }
            ]
        }))
        .unwrap();
        assert_eq!(tag.kind, Some(ComponentKind::Stack));
        assert!(tag.properties.is_empty());
        assert!(tag.variables.is_empty());
        assert_eq!(names(&tag), vec!["Tabs row", "a", "Box"]);
    }

    #[test]
    fn test_semantic_mode_pivot_keeps_items() {
        let item = |name: &str| {
            json!({
                "name": name, "type": "INSTANCE",
                "mainComponent": { "name": "Pivot item", "description": "Fluent component: PivotItem" },
                "children": [
                    { "name": "String-auto-layout", "type": "FRAME", "children": [
                        { "name": "String", "type": "TEXT", "characters": name }
                    ] }
                ]
            })
        };
        let tag = build_semantic(json!({
            "name": "Tabs", "type": "INSTANCE",
            "mainComponent": { "name": "Pivot", "description": "Fluent component: Pivot" },
            "children": [
                item("Home"),
                { "name": "Underline", "type": "RECTANGLE" },
                item("Settings")
            ]
        }))
        .unwrap();
        assert_eq!(tag.kind, Some(ComponentKind::Pivot));
        assert_eq!(names(&tag), vec!["Tabs", "Home", "Settings"]);
        for item in &tag.children {
            assert_eq!(item.kind, Some(ComponentKind::PivotItem));
            assert!(item.properties.is_empty());
            assert!(item.children.is_empty());
        }
    }

    #[test]
    fn test_custom_registry() {
        fn stamp(cx: &RuleContext<'_>, tag: &Tag) -> Tag {
            let mut out = crate::extract::Classified::new(tag, cx.kind);
            out.push(Property::flag("stamped"));
            out.finish()
        }
        let mut registry = Registry::new();
        registry.register(ComponentKind::Slider, stamp);
        let scene = Scene::from_value(json!({
            "name": "Volume", "type": "INSTANCE",
            "mainComponent": { "name": "Slider", "description": "Fluent component: Slider" }
        }))
        .unwrap();
        let tag = TreeBuilder::new(&scene, GenerateConfig::default())
            .with_registry(&registry)
            .build()
            .unwrap();
        assert_eq!(tag.properties, vec![Property::flag("stamped")]);

        let mut empty = Registry::new();
        let tag = TreeBuilder::new(&scene, GenerateConfig::default())
            .with_registry(empty.register(ComponentKind::Rating, stamp))
            .build()
            .unwrap();
        assert_eq!(tag.kind, None);
    }

    #[test]
    fn test_dropped_anatomy_takes_no_identifier() {
        let tag = build(json!({
            "name": "Card", "type": "FRAME", "children": [
                { "name": "Save", "type": "INSTANCE",
                  "mainComponent": { "name": "Button", "description": "Fluent component: PrimaryButton" },
                  "children": [
                      { "name": "Content", "type": "FRAME", "layoutMode": "HORIZONTAL", "itemSpacing": 4 }
                  ] },
                { "name": "Content", "type": "FRAME", "layoutMode": "VERTICAL", "itemSpacing": 8 }
            ]
        }))
        .unwrap();
        let content = &tag.children[1];
        assert_eq!(
            content.properties,
            vec![Property::expr("tokens", "contentStackTokens")]
        );
        assert_eq!(
            content.variables.get("contentStackTokens").map(String::as_str),
            Some("{ childrenGap: 8 }")
        );
        assert!(tag.children[0].variables.is_empty());
    }

    #[test]
    fn test_depth_never_grows() {
        fn depth(tag: &Tag) -> usize {
            1 + tag.children.iter().map(depth).max().unwrap_or(0)
        }
        let tag = build(json!({
            "name": "A", "type": "FRAME", "children": [
                { "name": "B", "type": "FRAME", "children": [
                    { "name": "C", "type": "FRAME", "children": [ { "name": "v", "type": "VECTOR" } ] }
                ] }
            ]
        }))
        .unwrap();
        assert_eq!(depth(&tag), 3);
    }
}
