//! Linear layout (`Stack`).

use figmagen_scene::naming::small_camel;
use figmagen_scene::units::format_number;
use figmagen_scene::{AxisAlign, LayoutMode};

use crate::extract::{Classified, RuleContext};
use crate::kind::ComponentKind;
use crate::tag::{Property, Tag};

/// Auto-layout container → `Stack`.
///
/// Gap and non-zero paddings are hoisted as `<name>StackTokens`; alignment
/// maps onto `horizontalAlign` / `verticalAlign`, whose roles swap with the
/// layout direction. Children are kept.
pub fn stack(cx: &RuleContext<'_>, tag: &Tag) -> Tag {
    let node = cx.node;
    let mut out = Classified::new(tag, ComponentKind::Stack);

    let tokens: Vec<String> = [
        ("childrenGap", node.item_spacing),
        ("paddingLeft", node.padding_left),
        ("paddingRight", node.padding_right),
        ("paddingBottom", node.padding_bottom),
        ("paddingTop", node.padding_top),
    ]
    .into_iter()
    .filter(|(_, value)| *value != 0.0)
    .map(|(name, value)| format!("{name}: {}", format_number(value)))
    .collect();

    if !tokens.is_empty() {
        let base = small_camel(&format!("{}StackTokens", node.name.replace(' ', "")));
        out.push(Property::expr("tokens", base.clone()));
        out.hoist(base, format!("{{ {} }}", tokens.join(", ")));
    }

    let horizontal = node.layout_mode == LayoutMode::Horizontal;
    let (primary, counter) = if horizontal {
        ("horizontalAlign", "verticalAlign")
    } else {
        ("verticalAlign", "horizontalAlign")
    };

    if let Some(value) = node.primary_axis_align_items.and_then(align_value) {
        out.push(Property::string(primary, value));
    }
    if let Some(value) = node
        .counter_axis_align_items
        .filter(|a| *a != AxisAlign::SpaceBetween)
        .and_then(align_value)
    {
        out.push(Property::string(counter, value));
    }

    if horizontal {
        out.push(Property::flag("horizontal"));
    }

    out.retain_all(&tag.children);
    out.finish()
}

fn align_value(align: AxisAlign) -> Option<&'static str> {
    match align {
        AxisAlign::SpaceBetween => Some("space-between"),
        AxisAlign::Center => Some("center"),
        AxisAlign::Min => Some("start"),
        AxisAlign::Max => Some("end"),
        AxisAlign::Baseline => None,
    }
}
