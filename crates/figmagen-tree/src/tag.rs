//! The canonical intermediate tree.
//!
//! A [`Tag`] is built once per design node, refined by classification, and
//! then handed read-only to the code synthesizer.

use figmagen_scene::{NodeId, StyleRecord};
use indexmap::IndexMap;

use crate::kind::ComponentKind;

/// One node of the canonical tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    /// Display name of the source node (`img` for image leaves).
    pub name: String,
    /// Text payload. `Some` exactly when the tag is a text leaf.
    pub text: Option<String>,
    /// Opaque image leaf: no children, a single `src` property.
    pub is_img: bool,
    /// Output attributes, in output order.
    pub properties: Vec<Property>,
    pub style: StyleRecord,
    pub children: Vec<Tag>,
    /// Back-reference into the scene for read-only lookups during classification.
    pub source: NodeId,
    /// Component definitions render under their own name.
    pub is_component: bool,
    pub kind: Option<ComponentKind>,
    /// Declarations to hoist above the rendered tree.
    pub variables: IndexMap<String, String>,
}

impl Tag {
    pub fn is_text(&self) -> bool {
        self.text.is_some()
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// First child whose name equals `name`.
    pub fn child(&self, name: &str) -> Option<&Tag> {
        find(&self.children, name)
    }

    /// First child whose name contains `part`.
    pub fn child_containing(&self, part: &str) -> Option<&Tag> {
        find_containing(&self.children, part)
    }

    /// Pre-order walk over this tag and all its descendants.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }
}

pub fn find<'t>(tags: &'t [Tag], name: &str) -> Option<&'t Tag> {
    tags.iter().find(|t| t.name == name)
}

pub fn find_containing<'t>(tags: &'t [Tag], part: &str) -> Option<&'t Tag> {
    tags.iter().find(|t| t.name.contains(part))
}

pub fn first_text(tags: &[Tag]) -> Option<&Tag> {
    tags.iter().find(|t| t.is_text())
}

pub struct Walk<'t> {
    stack: Vec<&'t Tag>,
}

impl<'t> Iterator for Walk<'t> {
    type Item = &'t Tag;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.stack.pop()?;
        self.stack.extend(tag.children.iter().rev());
        Some(tag)
    }
}

/// An output attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub value: PropValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropValue {
    /// Presence-only attribute: `disabled`
    Flag,
    /// Quoted string literal: `label="Name"`
    Str(String),
    /// Raw code expression: `checked={true}`
    Expr(String),
}

impl Property {
    pub fn flag(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: PropValue::Flag,
        }
    }

    pub fn string(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: PropValue::Str(value.into()),
        }
    }

    pub fn expr(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: PropValue::Expr(value.into()),
        }
    }

    /// The literal value, if any.
    pub fn value(&self) -> Option<&str> {
        match &self.value {
            PropValue::Flag => None,
            PropValue::Str(v) | PropValue::Expr(v) => Some(v),
        }
    }

    pub fn is_expr(&self) -> bool {
        matches!(self.value, PropValue::Expr(_))
    }
}
