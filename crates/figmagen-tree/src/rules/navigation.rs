//! Tabs, breadcrumbs and navigation panes.

use figmagen_scene::naming::small_camel;

use crate::extract::{array_literal, escape_single, Classified, RuleContext, PLACEHOLDER};
use crate::kind::ComponentKind;
use crate::tag::{find, Property, Tag};

/// Header parts are matched on source node names: an icon made of vectors
/// has already been renamed to `img`.
pub fn pivot_item(cx: &RuleContext<'_>, tag: &Tag) -> Tag {
    let mut out = Classified::new(tag, ComponentKind::PivotItem);
    let header = tag.children.iter().find(|child| {
        matches!(
            cx.source(child).name.as_str(),
            "String-auto-layout" | "String-icon-auto-layout"
        )
    });
    if let Some(header) = header {
        out.text_from(&header.children, "String", "headerText");
        if header
            .children
            .iter()
            .any(|child| cx.source(child).name == "String-icon")
        {
            out.push(Property::string("itemIcon", PLACEHOLDER));
        }
    }
    out.finish()
}

pub fn pivot(_cx: &RuleContext<'_>, tag: &Tag) -> Tag {
    let mut out = Classified::new(tag, ComponentKind::Pivot);
    out.retain_all(
        tag.children
            .iter()
            .filter(|c| c.kind == Some(ComponentKind::PivotItem)),
    );
    out.finish()
}

/// Each crumb is an item whose label lives on a nested, already-classified
/// `Button`, optionally wrapped in an `Item-link`.
pub fn breadcrumb(cx: &RuleContext<'_>, tag: &Tag) -> Tag {
    let mut out = Classified::new(tag, ComponentKind::Breadcrumb);

    let items: Vec<String> = tag
        .children
        .iter()
        .enumerate()
        .filter_map(|(i, item)| {
            let link = find(&item.children, "Item-link").unwrap_or(item);
            let button = find(&link.children, "Button")?;
            let text = button.property("text").and_then(|p| p.value()).unwrap_or("");
            let current = if item.name.contains("Selected") {
                ", isCurrentItem: true"
            } else {
                ""
            };
            Some(format!(
                "{{ key: '{i}', text: '{}'{current} }}",
                escape_single(text)
            ))
        })
        .collect();

    let base = format!("{}Items", small_camel(&cx.node.name));
    out.push(Property::expr("items", base.clone()));
    out.hoist(base, array_literal(&items));
    out.finish()
}

pub fn nav(_cx: &RuleContext<'_>, tag: &Tag) -> Tag {
    let mut out = Classified::new(tag, ComponentKind::Nav);

    let mut links = Vec::new();
    if let Some(list) = find(&tag.children, "Navigation-list") {
        for (i, item) in list.children.iter().enumerate() {
            let name = item
                .children
                .iter()
                .find(|c| c.is_text() && c.name == "String")
                .and_then(|c| c.text.as_deref())
                .unwrap_or(PLACEHOLDER);
            let icon = if item.name.contains("NavItem-Icon") {
                format!(", icon: '{PLACEHOLDER}'")
            } else {
                String::new()
            };
            links.push(format!(
                "{{ key: 'key{i}', name: '{}', url: '{PLACEHOLDER}'{icon} }}",
                escape_single(name)
            ));
        }
    }

    out.push(Property::expr(
        "groups",
        format!("[{{ links: {} }}]", array_literal(&links)),
    ));
    out.finish()
}
