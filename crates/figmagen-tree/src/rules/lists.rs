//! Tabular lists.

use figmagen_scene::naming::{kebabize, small_camel};

use crate::extract::{array_literal, escape_single, Classified, RuleContext, PLACEHOLDER};
use crate::kind::ComponentKind;
use crate::tag::{find_containing, first_text, Property, Tag};

pub fn details_list(cx: &RuleContext<'_>, tag: &Tag) -> Tag {
    list(cx, tag, ComponentKind::DetailsList)
}

pub fn grouped_list(cx: &RuleContext<'_>, tag: &Tag) -> Tag {
    list(cx, tag, ComponentKind::GroupedList)
}

/// Columns come from the header row: each header cell holds either an icon
/// cell or a titled column header.
fn list(cx: &RuleContext<'_>, tag: &Tag, kind: ComponentKind) -> Tag {
    let mut out = Classified::new(tag, kind);
    if cx.node.name.contains("Compact") {
        out.push(Property::expr("compact", "true"));
    }

    let mut columns = Vec::new();
    let cells = find_containing(&tag.children, "DetailsHeader")
        .into_iter()
        .flat_map(|header| &header.children)
        .flat_map(|cell| &cell.children);
    for cell in cells {
        let key = format!("column{}", columns.len());
        if cell.name.contains("Cell-Icon") {
            columns.push(format!(
                "{{ key: '{key}', name: '{PLACEHOLDER}', iconName: '{PLACEHOLDER}', isIconOnly: true, fieldName: '{PLACEHOLDER}' }}"
            ));
        } else if cell.name.contains("ColumnHeader") {
            let title = cell
                .children
                .iter()
                .find(|c| c.name == "String-container" || c.name == "String-icon-container")
                .and_then(|c| first_text(&c.children))
                .and_then(|t| t.text.as_deref())
                .unwrap_or(PLACEHOLDER);
            columns.push(format!(
                "{{ key: '{key}', name: '{}', fieldName: '{}' }}",
                escape_single(title),
                kebabize(title)
            ));
        }
    }

    let base = format!("{}Columns", small_camel(&cx.node.name));
    out.push(Property::expr("columns", base.clone()));
    out.push(Property::expr("items", "[]"));
    out.hoist(base, array_literal(&columns));
    out.finish()
}
