//! Form inputs.

use crate::extract::{nested_items, Classified, RuleContext, PLACEHOLDER};
use crate::kind::ComponentKind;
use crate::tag::{find, Property, Tag};

use super::{common_variants, label_and_placeholder, label_text};

pub fn search_box(cx: &RuleContext<'_>, tag: &Tag) -> Tag {
    let mut out = Classified::new(tag, ComponentKind::SearchBox);
    common_variants(cx, &mut out);
    out.when(cx.variant_is("Type", "Underline"), Property::flag("underlined"));
    out.text_from(&tag.children, "String", "placeholder");
    out.finish()
}

pub fn text_field(cx: &RuleContext<'_>, tag: &Tag) -> Tag {
    let mut out = Classified::new(tag, ComponentKind::TextField);
    common_variants(cx, &mut out);
    out.when(cx.variant_is("Type", "Underlined"), Property::flag("underlined"));
    out.when(cx.variant_is("Type", "Borderless"), Property::flag("borderless"));
    out.when(
        cx.variant_is("Icon", "True"),
        Property::expr("iconProps", format!("{{ iconName: '{PLACEHOLDER}' }}")),
    );
    if cx.variant_is("Multiline", "True").is_match() {
        out.push(Property::flag("multiline"));
        out.push(Property::expr("rows", "3"));
    }
    label_and_placeholder(&tag.children, &mut out, "TextField");
    out.finish()
}

pub fn dropdown(cx: &RuleContext<'_>, tag: &Tag) -> Tag {
    let mut out = Classified::new(tag, ComponentKind::Dropdown);
    common_variants(cx, &mut out);
    label_and_placeholder(&tag.children, &mut out, "Dropdown");
    out.finish()
}

pub fn spin_button(cx: &RuleContext<'_>, tag: &Tag) -> Tag {
    let mut out = Classified::new(tag, ComponentKind::SpinButton);
    common_variants(cx, &mut out);
    out.finish()
}

pub fn checkbox(cx: &RuleContext<'_>, tag: &Tag) -> Tag {
    let mut out = Classified::new(tag, ComponentKind::CheckBox);
    common_variants(cx, &mut out);
    out.when(cx.variant_is("Checked", "True"), Property::expr("checked", "true"));
    out.when(
        cx.variant_is("Indeterminate", "True"),
        Property::expr("indeterminate", "true"),
    );
    out.text_from(&tag.children, "String", "label");
    out.finish()
}

/// A single radio option. Its properties double as an item literal for the
/// enclosing [`choice_group`].
pub fn choice_group_option(cx: &RuleContext<'_>, tag: &Tag) -> Tag {
    let mut out = Classified::new(tag, ComponentKind::ChoiceGroupOption);
    common_variants(cx, &mut out);
    out.when(cx.variant_is("Checked", "True"), Property::expr("checked", "true"));
    out.when(
        cx.variant_is("Type", "Thumbnail"),
        Property::string("imageSrc", PLACEHOLDER),
    );
    out.push(Property::string("key", PLACEHOLDER));
    match find(&tag.children, "String-container") {
        Some(container) => out.text_from(&container.children, "String-option", "text"),
        None => out.text_from(&tag.children, "String", "text"),
    }
    out.finish()
}

pub fn choice_group(cx: &RuleContext<'_>, tag: &Tag) -> Tag {
    let mut out = Classified::new(tag, ComponentKind::ChoiceGroup);
    out.text_from(&tag.children, "Label", "label");
    nested_items(cx, &mut out, &tag.children, "options");
    out.finish()
}

/// Two shapes share this kind: the bare switch, and `Toggle-label`, which
/// wraps a `Label` and an already-classified bare switch.
pub fn toggle(cx: &RuleContext<'_>, tag: &Tag) -> Tag {
    let mut out = Classified::new(tag, ComponentKind::Toggle);

    if cx.node.name == "Toggle-label" {
        out.push_opt(label_text(&tag.children).map(|text| Property::string("label", text)));
        if let Some(switch) = tag
            .children
            .iter()
            .find(|c| c.kind == Some(ComponentKind::Toggle))
        {
            for property in &switch.properties {
                out.push(property.clone());
            }
        }
        return out.finish();
    }

    common_variants(cx, &mut out);
    let on = cx.variant_is("OFF | ON", "True");
    out.when(on, Property::expr("checked", "true"));

    let strings = find(&tag.children, "Toggle-container")
        .and_then(|container| find(&container.children, "String-container"));
    if let Some(strings) = strings {
        if cx.node.has_variants() {
            let prop = if on.is_match() { "onText" } else { "offText" };
            out.text_from(&strings.children, "String-toggle", prop);
        }
    }
    out.finish()
}

/// Label and placeholder come from the embedded text field.
pub fn date_picker(cx: &RuleContext<'_>, tag: &Tag) -> Tag {
    let mut out = Classified::new(tag, ComponentKind::DatePicker);
    common_variants(cx, &mut out);
    if let Some(field) = tag
        .children
        .iter()
        .find(|c| c.kind == Some(ComponentKind::TextField))
    {
        out.copy_from(field, "label");
        out.copy_from(field, "placeholder");
    }
    out.finish()
}

pub fn slider(_cx: &RuleContext<'_>, tag: &Tag) -> Tag {
    Classified::new(tag, ComponentKind::Slider).finish()
}

/// `Stars` is emitted as a number; anything else gets the placeholder.
pub fn rating(cx: &RuleContext<'_>, tag: &Tag) -> Tag {
    let mut out = Classified::new(tag, ComponentKind::Rating);
    out.push_opt(cx.variant("Stars").map(|stars| {
        let stars = stars.trim();
        if stars.parse::<f64>().is_ok_and(f64::is_finite) {
            Property::expr("rating", stars)
        } else {
            Property::string("rating", PLACEHOLDER)
        }
    }));
    out.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::testing::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_checkbox() {
        let tag = build(instance(
            "Terms",
            "CheckBox",
            json!({ "Checked": "True", "Indeterminate": "False" }),
            json!([ { "name": "Box", "type": "FRAME" }, text("String", "Accept terms") ]),
        ));
        assert_eq!(tag.kind, Some(ComponentKind::CheckBox));
        assert_eq!(
            props(&tag),
            vec![prop("checked", "{true}"), prop("label", "Accept terms")]
        );
        assert!(tag.children.is_empty());
    }

    #[test]
    fn test_checkbox_without_variants() {
        let tag = build(instance("Terms", "CheckBox", json!(null), json!([])));
        assert!(tag.properties.is_empty());
    }

    #[test]
    fn test_search_box() {
        let tag = build(instance(
            "Search",
            "SearchBox",
            json!({ "Type": "Underline", "Disable": "True" }),
            json!([ text("String", "Search") ]),
        ));
        assert_eq!(
            props(&tag),
            vec![flag("disabled"), flag("underlined"), prop("placeholder", "Search")]
        );
    }

    #[test]
    fn test_text_field_variants() {
        let tag = build(instance(
            "Notes",
            "TextField",
            json!({ "Type": "Borderless", "Icon": "True", "Multiline": "True" }),
            json!([ text("String", "Write here") ]),
        ));
        assert_eq!(
            props(&tag),
            vec![
                flag("borderless"),
                prop("iconProps", "{{ iconName: 'TODO' }}"),
                flag("multiline"),
                prop("rows", "{3}"),
                prop("placeholder", "Write here"),
            ]
        );
    }

    #[test]
    fn test_text_field_with_label() {
        let inner = instance(
            "TextField",
            "TextField",
            json!({}),
            json!([ text("String", "Jane Doe") ]),
        );
        let label = instance("Label", "Label", json!({}), json!([ text("String", "Name") ]));
        let tag = build(instance("Name field", "TextField", json!({}), json!([ label, inner ])));
        assert_eq!(
            props(&tag),
            vec![prop("label", "Name"), prop("placeholder", "Jane Doe")]
        );
        assert!(tag.children.is_empty());
    }

    #[test]
    fn test_dropdown_with_empty_label() {
        let inner = instance("Dropdown", "Dropdown", json!({}), json!([ text("String", "Pick one") ]));
        let label = instance("Label", "Label", json!({}), json!([ text("String", "") ]));
        let tag = build(instance("Choice", "Dropdown", json!({}), json!([ label, inner ])));
        assert_eq!(props(&tag), vec![prop("placeholder", "Pick one")]);
    }

    #[test]
    fn test_spin_button() {
        let tag = build(instance(
            "Amount",
            "SpinButton",
            json!({ "Disable": "True" }),
            json!([ text("String", "1") ]),
        ));
        assert_eq!(props(&tag), vec![flag("disabled")]);
        assert!(tag.children.is_empty());
    }

    #[test]
    fn test_choice_group_hoists_options() {
        let option = |label: &str, checked: &str| {
            instance(
                "Radio",
                "ChoiceGroupOption",
                json!({ "Checked": checked }),
                json!([ frame("String-container", json!([ text("String-option", label) ])) ]),
            )
        };
        let tag = build(instance(
            "PlanPicker",
            "ChoiceGroup",
            json!({}),
            json!([
                instance("Label", "Label", json!({}), json!([ text("String", "Plan") ])),
                option("Free", "True"),
                frame("More options", json!([ option("Pro", "False") ]))
            ]),
        ));
        assert_eq!(
            props(&tag),
            vec![prop("label", "Plan"), prop("options", "{planPickerOptions}")]
        );
        assert_eq!(
            tag.variables.get("planPickerOptions").map(String::as_str),
            Some(
                "[{ checked: true, key: \"TODO\", text: \"Free\" }, { key: \"TODO\", text: \"Pro\" }]"
            )
        );
        assert!(tag.children.is_empty());
    }

    #[test]
    fn test_choice_group_multiline_option() {
        let tag = build(instance(
            "Terms",
            "ChoiceGroup",
            json!({}),
            json!([ instance(
                "Radio",
                "ChoiceGroupOption",
                json!({}),
                json!([ text("String", "Free\nforever") ]),
            ) ]),
        ));
        assert_eq!(
            tag.variables.get("termsOptions").map(String::as_str),
            Some("[{ key: \"TODO\", text: \"Free\\nforever\" }]")
        );
    }

    #[test]
    fn test_choice_group_option_thumbnail() {
        let tag = build(instance(
            "Option",
            "ChoiceGroupOption",
            json!({ "Type": "Thumbnail" }),
            json!([ text("String", "Large") ]),
        ));
        assert_eq!(
            props(&tag),
            vec![prop("imageSrc", "TODO"), prop("key", "TODO"), prop("text", "Large")]
        );
    }

    #[test]
    fn test_toggle_on() {
        let tag = build(instance(
            "Toggle",
            "Toggle",
            json!({ "OFF | ON": "True" }),
            json!([ frame(
                "Toggle-container",
                json!([ frame("String-container", json!([ text("String-toggle", "On") ])) ])
            ) ]),
        ));
        assert_eq!(
            props(&tag),
            vec![prop("checked", "{true}"), prop("onText", "On")]
        );
    }

    #[test]
    fn test_toggle_off() {
        let tag = build(instance(
            "Toggle",
            "Toggle",
            json!({ "OFF | ON": "False", "Disable": "True" }),
            json!([ frame(
                "Toggle-container",
                json!([ frame("String-container", json!([ text("String-toggle", "Off") ])) ])
            ) ]),
        ));
        assert_eq!(props(&tag), vec![flag("disabled"), prop("offText", "Off")]);
    }

    #[test]
    fn test_toggle_with_label() {
        let switch = instance("Toggle", "Toggle", json!({ "OFF | ON": "True" }), json!([]));
        let label = instance("Label", "Label", json!({}), json!([ text("String", "Dark mode") ]));
        let tag = build(instance("Toggle-label", "Toggle", json!({}), json!([ label, switch ])));
        assert_eq!(
            props(&tag),
            vec![prop("label", "Dark mode"), prop("checked", "{true}")]
        );
        assert!(tag.children.is_empty());
    }

    #[test]
    fn test_toggle_and_field_skip_empty_label() {
        let empty = || instance("Label", "Label", json!({}), json!([ text("String", "") ]));
        let switch = instance("Toggle", "Toggle", json!({}), json!([]));
        let toggle = build(instance("Toggle-label", "Toggle", json!({}), json!([ empty(), switch ])));
        assert!(toggle.property("label").is_none());

        let inner = instance("TextField", "TextField", json!({}), json!([ text("String", "Jane") ]));
        let field = build(instance("Name", "TextField", json!({}), json!([ empty(), inner ])));
        assert_eq!(props(&field), vec![prop("placeholder", "Jane")]);
    }

    #[test]
    fn test_date_picker_reuses_text_field() {
        let label = instance("Label", "Label", json!({}), json!([ text("String", "Start") ]));
        let inner = instance("TextField", "TextField", json!({}), json!([ text("String", "Select a date") ]));
        let field = instance("Input", "TextField", json!({}), json!([ label, inner ]));
        let tag = build(instance("When", "DatePicker", json!({ "Disable": "False" }), json!([ field ])));
        assert_eq!(tag.kind, Some(ComponentKind::DatePicker));
        assert_eq!(
            props(&tag),
            vec![prop("label", "Start"), prop("placeholder", "Select a date")]
        );
    }

    #[test]
    fn test_slider_and_rating() {
        let slider = build(instance("Volume", "Slider", json!({}), json!([ frame("Track", json!([])) ])));
        assert_eq!(slider.kind, Some(ComponentKind::Slider));
        assert!(slider.properties.is_empty());
        assert!(slider.children.is_empty());

        let rating = build(instance("Stars", "Rating", json!({ "Stars": "3" }), json!([])));
        assert_eq!(props(&rating), vec![prop("rating", "{3}")]);
    }

    #[test]
    fn test_rating_non_numeric_stars() {
        for stars in ["3 stars", "Stars", "NaN", "inf"] {
            let rating = build(instance("Stars", "Rating", json!({ "Stars": stars }), json!([])));
            assert_eq!(props(&rating), vec![prop("rating", "TODO")], "{stars}");
        }
        let rating = build(instance("Stars", "Rating", json!({ "Stars": " 4.5 " }), json!([])));
        assert_eq!(props(&rating), vec![prop("rating", "{4.5}")]);
    }
}
