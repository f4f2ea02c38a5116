//! JSX synthesis.
//!
//! Renders the tag tree as the body of a React function component. Hoisted
//! variables are declared above the `return`; the tree is indented four
//! spaces plus two per depth.

use figmagen_scene::naming::upper_camel;
use figmagen_scene::StyleMode;
use figmagen_tree::extract::escape_double;
use figmagen_tree::{PropValue, Property, Tag};
use indexmap::IndexMap;

use crate::hoist;

/// The whole component: declarations, then the rendered tree.
pub fn component(root: &Tag, variables: &IndexMap<String, String>, mode: StyleMode) -> String {
    let mut tree = String::new();
    render_tag(root, mode, 0, &mut tree);
    format!(
        "const {}: React.VFC = () => {{\n{}\n  return (\n{}\n  )\n}}",
        upper_camel(&root.name),
        hoist::declarations(variables),
        tree
    )
}

/// Element name for a tag.
///
/// Component definitions keep their own name. In component-library mode a
/// classified tag renders as its component; otherwise images, text leaves
/// and containers get plain elements, the container guessed from its name.
pub fn tag_name(tag: &Tag, mode: StyleMode) -> String {
    if tag.is_component {
        return upper_camel(&tag.name);
    }
    if mode == StyleMode::ComponentLibrary {
        if let Some(kind) = tag.kind {
            return kind.as_str().to_string();
        }
    }
    if tag.is_img {
        return "img".to_string();
    }
    if tag.is_text() {
        return "Text".to_string();
    }
    let name = tag.name.to_lowercase();
    ["button", "section", "article"]
        .into_iter()
        .find(|element| name.contains(element))
        .unwrap_or("div")
        .to_string()
}

/// The generated class name a tag references, if any.
///
/// Images and component definitions never get one. In component-library
/// mode classified tags are styled by their component instead.
pub fn class_name(tag: &Tag, mode: StyleMode) -> Option<&str> {
    if tag.is_img || tag.is_component || tag.style.class_name.is_empty() {
        return None;
    }
    if mode == StyleMode::ComponentLibrary && tag.kind.is_some() {
        return None;
    }
    Some(&tag.style.class_name)
}

/// `name`, `name="value"` or `name={value}`.
pub fn attribute(property: &Property) -> String {
    match &property.value {
        PropValue::Flag => property.name.clone(),
        PropValue::Str(value) => format!("{}=\"{}\"", property.name, value.replace('"', "&quot;")),
        PropValue::Expr(value) => format!("{}={{{}}}", property.name, value),
    }
}

/// Text content of a leaf. Plain text is emitted as-is; text JSX would
/// misread goes through a string expression.
pub fn text_content(text: &str) -> String {
    if text.contains(['<', '>', '{', '}', '\n', '\r']) {
        format!("{{\"{}\"}}", escape_double(text))
    } else {
        text.to_string()
    }
}

fn render_tag(tag: &Tag, mode: StyleMode, depth: usize, out: &mut String) {
    let indent = " ".repeat(4 + 2 * depth);
    let name = tag_name(tag, mode);

    out.push_str(&indent);
    out.push('<');
    out.push_str(&name);
    if let Some(class) = class_name(tag, mode) {
        out.push_str(&format!(" className=\"{class}\""));
    }
    for property in &tag.properties {
        out.push(' ');
        out.push_str(&attribute(property));
    }

    if !tag.children.is_empty() {
        out.push('>');
        for child in &tag.children {
            out.push('\n');
            render_tag(child, mode, depth + 1, out);
        }
        out.push('\n');
        out.push_str(&indent);
    } else if let Some(text) = &tag.text {
        out.push('>');
        out.push_str(&text_content(text));
    } else {
        out.push_str(" />");
        return;
    }

    out.push_str("</");
    out.push_str(&name);
    out.push('>');
}
