//! Stylesheet builder.
//!
//! One rule per class name referenced by the markup, in tree order. Run
//! [`disambiguate`] first so that a class name never stands for two
//! different sets of properties.

use std::collections::{HashMap, HashSet};

use figmagen_scene::{StyleMode, StyleProperty};
use figmagen_tree::Tag;
use tracing::debug;

use crate::jsx::class_name;

/// Rename classes whose name is already taken by a differently styled tag.
///
/// The first tag in tree order keeps the name; later ones get `-2`, `-3`,
/// ... Tags with identical properties share one class.
pub fn disambiguate(root: &mut Tag, mode: StyleMode) {
    let mut claimed = HashMap::new();
    disambiguate_tag(root, mode, &mut claimed);
}

fn disambiguate_tag(
    tag: &mut Tag,
    mode: StyleMode,
    claimed: &mut HashMap<String, Vec<StyleProperty>>,
) {
    if let Some(base) = class_name(tag, mode).map(str::to_string) {
        let properties = &tag.style.properties;
        let mut class = base.clone();
        let mut n = 1;
        while claimed.get(&class).is_some_and(|taken| taken != properties) {
            n += 1;
            class = format!("{base}-{n}");
        }
        if class != base {
            debug!(%base, %class, "renamed conflicting class");
            tag.style.class_name = class.clone();
        }
        claimed.entry(class).or_insert_with(|| properties.clone());
    }
    for child in &mut tag.children {
        disambiguate_tag(child, mode, claimed);
    }
}

pub fn stylesheet(root: &Tag, mode: StyleMode) -> String {
    let mut seen = HashSet::new();
    let mut rules = Vec::new();

    for tag in root.walk() {
        let Some(class) = class_name(tag, mode) else {
            continue;
        };
        if tag.style.properties.is_empty() || !seen.insert(class) {
            continue;
        }
        let body: String = tag
            .style
            .properties
            .iter()
            .map(|p| format!("  {}: {};\n", p.name, p.value))
            .collect();
        rules.push(format!(".{class} {{\n{body}}}"));
    }

    rules.join("\n\n")
}
