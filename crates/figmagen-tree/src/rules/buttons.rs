//! Buttons, links and command surfaces.

use crate::extract::{array_literal, escape_single, Classified, RuleContext, PLACEHOLDER};
use crate::kind::ComponentKind;
use crate::tag::{find, first_text, Property, Tag};

use super::{common_button, common_variants};

fn placeholder_icon() -> String {
    format!("{{ iconName: '{PLACEHOLDER}' }}")
}

/// Primary / default / action button. The `Type` variant picks the kind;
/// without one the annotated kind stands.
pub fn button(cx: &RuleContext<'_>, tag: &Tag) -> Tag {
    let kind = match cx.variant("Type") {
        Some("Primary") => ComponentKind::PrimaryButton,
        Some("Action") => ComponentKind::ActionButton,
        Some(_) => ComponentKind::DefaultButton,
        None => cx.kind,
    };
    let mut out = Classified::new(tag, kind);
    out.when(
        cx.variant_is("Icon", "True"),
        Property::expr("iconProps", placeholder_icon()),
    );
    common_button(cx, &mut out);
    out.text_from(&tag.children, "String-button", "text");
    out.finish()
}

/// Icon fonts name the glyph layer after the icon.
pub fn icon_button(cx: &RuleContext<'_>, tag: &Tag) -> Tag {
    let mut out = Classified::new(tag, ComponentKind::IconButton);
    if let Some(glyph) = first_text(&tag.children) {
        out.push(Property::expr(
            "iconProps",
            format!("{{ iconName: '{}' }}", escape_single(&glyph.name)),
        ));
    }
    common_button(cx, &mut out);
    out.finish()
}

pub fn link(cx: &RuleContext<'_>, tag: &Tag) -> Tag {
    let mut out = Classified::new(tag, ComponentKind::Link);
    common_variants(cx, &mut out);
    out.push(Property::string("href", PLACEHOLDER));
    out.push(Property::flag("underline"));
    if let Some(text) = first_text(&tag.children).and_then(|t| t.text.clone()) {
        out.make_text(text);
    }
    out.finish()
}

pub fn overflow_set(cx: &RuleContext<'_>, tag: &Tag) -> Tag {
    let mut out = Classified::new(tag, ComponentKind::OverflowSet);
    let items: Vec<String> = (0..tag.children.len())
        .map(|i| {
            format!(
                "{{ key: '{i}', icon: '{PLACEHOLDER}', name: '{PLACEHOLDER}', title: '{PLACEHOLDER}', ariaLabel: '{PLACEHOLDER}' }}"
            )
        })
        .collect();
    out.push(Property::expr("items", array_literal(&items)));
    out.when(
        cx.variant_is("Direction", "Vertical"),
        Property::flag("vertical"),
    );
    out.finish()
}

/// Command items come from already-classified `Button` / `Icon` children of
/// the primary and secondary containers.
pub fn command_bar(_cx: &RuleContext<'_>, tag: &Tag) -> Tag {
    let mut out = Classified::new(tag, ComponentKind::CommandBar);
    for (container, prop) in [
        ("primary-commands-container", "items"),
        ("secondary-commands-container", "farItems"),
    ] {
        if let Some(container) = find(&tag.children, container).filter(|c| !c.children.is_empty()) {
            out.push(Property::expr(prop, command_items(container)));
        }
    }
    out.finish()
}

fn command_items(container: &Tag) -> String {
    let items: Vec<String> = container
        .children
        .iter()
        .enumerate()
        .filter_map(|(i, command)| match command.name.as_str() {
            "Button" => {
                let text = command.property("text").and_then(|p| p.value()).unwrap_or("");
                Some(format!(
                    "{{ key: '{i}', text: '{}', iconProps: {} }}",
                    escape_single(text),
                    placeholder_icon()
                ))
            }
            "Icon" => {
                let icon = command
                    .property("iconProps")
                    .and_then(|p| p.value())
                    .map(str::to_string)
                    .unwrap_or_else(placeholder_icon);
                Some(format!(
                    "{{ key: '{i}', text: '{PLACEHOLDER}', ariaLabel: '{PLACEHOLDER}', iconOnly: true, iconProps: {icon} }}"
                ))
            }
            _ => None,
        })
        .collect();
    array_literal(&items)
}
