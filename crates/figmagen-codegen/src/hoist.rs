//! Variable hoisting.
//!
//! Handlers attach object and array literals to tags as named variables.
//! They are collected from the whole tree and declared once, above the
//! rendered markup.

use figmagen_tree::Tag;
use indexmap::IndexMap;
use tracing::warn;

/// Every hoisted variable in the tree, in pre-order.
///
/// Identifiers are unique per build, so a repeat means two handlers agreed
/// on a name outside the identifier scope; the first declaration is kept.
pub fn collect(root: &Tag) -> IndexMap<String, String> {
    let mut variables = IndexMap::new();
    for tag in root.walk() {
        for (name, value) in &tag.variables {
            if variables.contains_key(name) {
                warn!(name = %name, tag = %tag.name, "duplicate hoisted variable, keeping the first");
                continue;
            }
            variables.insert(name.clone(), value.clone());
        }
    }
    variables
}

/// `  const name = value` lines separated by blank lines.
pub fn declarations(variables: &IndexMap<String, String>) -> String {
    variables
        .iter()
        .map(|(name, value)| format!("  const {name} = {value}\n"))
        .collect::<Vec<_>>()
        .join("\n")
}
