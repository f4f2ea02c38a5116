//! Shape-extraction primitives shared by every variant handler.
//!
//! Handlers read an immutable, fully built [`Tag`] (whose children are
//! already classified) and describe the replacement through a
//! [`Classified`] builder. Nothing here fails: a missing child or variant
//! field simply contributes nothing.

use std::collections::HashSet;

use figmagen_scene::naming::{capitalize_first, small_camel};
use figmagen_scene::{NodeKind, Scene, SceneNode, VariantMatch};

use crate::kind::ComponentKind;
use crate::tag::{find, PropValue, Property, Tag};

/// Emitted wherever a value cannot be recovered from the design.
pub const PLACEHOLDER: &str = "TODO";

// ---------------------------------------------------------------------------
// Identifier scope
// ---------------------------------------------------------------------------

/// Hands out hoisted-variable identifiers that are unique within one build.
///
/// The first claim of a name gets it verbatim; later claims get a numeric
/// suffix (`fooItems`, `fooItems2`, ...). Claims are made over the finished
/// tree, so anatomy dropped during classification never takes a name.
#[derive(Debug, Default)]
pub struct Identifiers {
    used: HashSet<String>,
}

impl Identifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn claim(&mut self, base: &str) -> String {
        if self.used.insert(base.to_string()) {
            return base.to_string();
        }
        let mut n = 2;
        loop {
            let candidate = format!("{base}{n}");
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}

// ---------------------------------------------------------------------------
// Rule context
// ---------------------------------------------------------------------------

/// Everything a handler may consult besides the tag itself.
pub struct RuleContext<'a> {
    pub scene: &'a Scene,
    /// The design node the tag was built from.
    pub node: &'a SceneNode,
    /// The registry key that selected the handler.
    pub kind: ComponentKind,
}

impl<'a> RuleContext<'a> {
    pub fn new(scene: &'a Scene, node: &'a SceneNode, kind: ComponentKind) -> Self {
        Self { scene, node, kind }
    }

    pub fn variant(&self, key: &str) -> Option<&'a str> {
        self.node.variant(key)
    }

    pub fn variant_is(&self, key: &str, expected: &str) -> VariantMatch {
        self.node.variant_is(key, expected)
    }

    /// The design node behind an already-built tag.
    pub fn source(&self, tag: &Tag) -> &'a SceneNode {
        self.scene.node(tag.source)
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// The classified replacement for a tag.
///
/// Starts from the base tag's identity, text and properties with no
/// children: anything the component keeps must be retained explicitly.
#[derive(Debug)]
pub struct Classified {
    tag: Tag,
}

impl Classified {
    pub fn new(base: &Tag, kind: ComponentKind) -> Self {
        Self {
            tag: Tag {
                name: base.name.clone(),
                text: base.text.clone(),
                is_img: base.is_img,
                properties: base.properties.clone(),
                style: base.style.clone(),
                children: Vec::new(),
                source: base.source,
                is_component: base.is_component,
                kind: Some(kind),
                variables: base.variables.clone(),
            },
        }
    }

    pub fn push(&mut self, property: Property) {
        self.tag.properties.push(property);
    }

    pub fn push_opt(&mut self, property: Option<Property>) {
        if let Some(property) = property {
            self.push(property);
        }
    }

    /// Variant-flag extraction: push `property` when the variant field matches.
    pub fn when(&mut self, found: VariantMatch, property: Property) {
        if found.is_match() {
            self.push(property);
        }
    }

    /// Conventional-child lookup: `prop="<text of child named child_name>"`.
    pub fn text_from(&mut self, children: &[Tag], child_name: &str, prop: &str) {
        if let Some(text) = text_of(children, child_name) {
            self.push(Property::string(prop, text));
        }
    }

    /// Copy a property of an already-classified tag onto this one.
    pub fn copy_from(&mut self, other: &Tag, prop: &str) {
        if let Some(found) = other.property(prop) {
            self.push(found.clone());
        }
    }

    /// Declare a variable under its base name; the builder makes names
    /// unique once the tree is final.
    pub fn hoist(&mut self, ident: String, value: String) {
        self.tag.variables.insert(ident, value);
    }

    /// Turn the tag into a text leaf.
    pub fn make_text(&mut self, text: String) {
        self.tag.text = Some(text);
    }

    pub fn retain(&mut self, child: &Tag) {
        self.tag.children.push(child.clone());
    }

    pub fn retain_all<'t>(&mut self, children: impl IntoIterator<Item = &'t Tag>) {
        self.tag.children.extend(children.into_iter().cloned());
    }

    pub fn finish(self) -> Tag {
        self.tag
    }
}

/// Record `kind` on a tag without running its handler.
///
/// Used when variant handlers are disabled: the component's anatomy is still
/// dropped, but layout containers keep their content.
pub fn collapse(base: &Tag, kind: ComponentKind) -> Tag {
    let mut out = Classified::new(base, kind);
    match kind {
        ComponentKind::Stack => out.retain_all(&base.children),
        ComponentKind::Pivot => out.retain_all(
            base.children
                .iter()
                .filter(|c| c.kind == Some(ComponentKind::PivotItem)),
        ),
        _ => {}
    }
    out.finish()
}

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

/// Text of the child named `name`; empty when that child is not a text leaf.
pub fn text_of(children: &[Tag], name: &str) -> Option<String> {
    find(children, name).map(|t| t.text.clone().unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Repeated items
// ---------------------------------------------------------------------------

/// Render a tag's own properties as an object literal: `{ key: "a", checked: true }`.
pub fn item_literal(properties: &[Property]) -> Option<String> {
    if properties.is_empty() {
        return None;
    }
    let fields: Vec<String> = properties
        .iter()
        .map(|p| match &p.value {
            PropValue::Flag => format!("{}: true", p.name),
            PropValue::Str(v) => format!("{}: \"{}\"", p.name, escape_double(v)),
            PropValue::Expr(v) => format!("{}: {}", p.name, v),
        })
        .collect();
    Some(format!("{{ {} }}", fields.join(", ")))
}

pub fn array_literal(items: &[String]) -> String {
    format!("[{}]", items.join(", "))
}

/// Repeated-item extraction.
///
/// Each item is either a direct child or, when the child is a plain frame,
/// one of that frame's children. The array is hoisted as
/// `<smallCamel(node name)><PropName>` and referenced from `prop`.
pub fn nested_items(cx: &RuleContext<'_>, out: &mut Classified, items: &[Tag], prop: &str) {
    let mut literals = Vec::new();
    for item in items {
        if cx.source(item).kind == NodeKind::Frame {
            literals.extend(item.children.iter().filter_map(|o| item_literal(&o.properties)));
        } else {
            literals.extend(item_literal(&item.properties));
        }
    }

    let base = format!("{}{}", small_camel(&cx.node.name), capitalize_first(prop));
    out.push(Property::expr(prop, base.clone()));
    out.hoist(base, array_literal(&literals));
}

/// Escape a value for a single-quoted JS string literal.
pub fn escape_single(value: &str) -> String {
    escape_line_breaks(&value.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// Escape a value for a double-quoted JS string literal.
pub fn escape_double(value: &str) -> String {
    escape_line_breaks(&value.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Line terminators are not allowed inside a JS string literal. Backslashes
/// must already be escaped.
fn escape_line_breaks(value: &str) -> String {
    value
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}
