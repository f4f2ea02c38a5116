//! figmagen Tree
//!
//! Builds the canonical [`Tag`] tree from a [`Scene`](figmagen_scene::Scene)
//! and classifies subtrees as known UI components.
//!
//! ```text
//! Scene → TreeBuilder (prune, detect images, extract style)
//!       → classification (layout trigger, annotation registry, rules)
//!       → Tag
//! ```
//!
//! Classification never fails. Unrecognized structure stays a generic
//! container or text leaf, missing structure just omits a property.

pub mod builder;
pub mod extract;
pub mod kind;
pub mod registry;
pub mod rules;
pub mod tag;

pub use builder::{build_tag_tree, TreeBuilder};
pub use extract::{Classified, Identifiers, RuleContext, PLACEHOLDER};
pub use kind::ComponentKind;
pub use registry::{resolve_annotation, Handler, Registry};
pub use tag::{PropValue, Property, Tag};
