//! Per-variant classification rules.
//!
//! Each handler reads the variant fields of its design node and the
//! conventionally named parts of its (already classified) children, and
//! returns a flat component tag. Anatomy used only for extraction is
//! dropped.

mod buttons;
mod feedback;
mod inputs;
mod layout;
mod lists;
mod navigation;
mod people;

use crate::extract::{Classified, RuleContext};
use crate::kind::ComponentKind;
use crate::registry::Registry;
use crate::tag::{find, Property, Tag};

/// Register every built-in handler.
pub fn register_all(registry: &mut Registry) {
    use ComponentKind::*;

    registry
        .register(PrimaryButton, buttons::button)
        .register(DefaultButton, buttons::button)
        .register(ActionButton, buttons::button)
        .register(IconButton, buttons::icon_button)
        .register(Link, buttons::link)
        .register(OverflowSet, buttons::overflow_set)
        .register(CommandBar, buttons::command_bar)
        .register(SearchBox, inputs::search_box)
        .register(TextField, inputs::text_field)
        .register(Dropdown, inputs::dropdown)
        .register(SpinButton, inputs::spin_button)
        .register(CheckBox, inputs::checkbox)
        .register(ChoiceGroupOption, inputs::choice_group_option)
        .register(ChoiceGroup, inputs::choice_group)
        .register(Toggle, inputs::toggle)
        .register(DatePicker, inputs::date_picker)
        .register(Slider, inputs::slider)
        .register(Rating, inputs::rating)
        .register(Facepile, people::facepile)
        .register(Persona, people::persona)
        .register(NormalPeoplePicker, people::people_picker)
        .register(TagPicker, people::tag_picker)
        .register(ActivityItem, people::activity_item)
        .register(PivotItem, navigation::pivot_item)
        .register(Pivot, navigation::pivot)
        .register(Breadcrumb, navigation::breadcrumb)
        .register(Nav, navigation::nav)
        .register(DetailsList, lists::details_list)
        .register(GroupedList, lists::grouped_list)
        .register(MessageBar, feedback::message_bar)
        .register(TeachingBubble, feedback::teaching_bubble)
        .register(ProgressIndicator, feedback::progress_indicator)
        .register(Spinner, feedback::spinner)
        .register(Label, feedback::label)
        .register(Separator, feedback::separator)
        .register(Stack, layout::stack);
}

/// `Disable=True` → `disabled`
fn common_variants(cx: &RuleContext<'_>, out: &mut Classified) {
    out.when(cx.variant_is("Disable", "True"), Property::flag("disabled"));
}

/// Disabled state plus menu / split affordances.
fn common_button(cx: &RuleContext<'_>, out: &mut Classified) {
    common_variants(cx, out);
    let split = cx.variant_is("Split", "True").is_match();
    if split || cx.variant_is("Menu", "True").is_match() {
        out.push(Property::expr("menuProps", "{ items: [] }"));
        if split {
            out.push(Property::flag("split"));
        }
    }
}

/// Non-empty text of the `Label` child.
fn label_text(children: &[Tag]) -> Option<&str> {
    find(children, "Label")
        .and_then(|label| label.text.as_deref())
        .filter(|text| !text.is_empty())
}

/// A field either carries its own placeholder text (`String`) or, in its
/// "with label" form, a `Label` child plus a nested plain field whose
/// placeholder was already extracted.
fn label_and_placeholder(children: &[Tag], out: &mut Classified, nested: &str) {
    match find(children, "Label") {
        Some(_) => {
            out.push_opt(label_text(children).map(|text| Property::string("label", text)));
            if let Some(field) = find(children, nested) {
                out.copy_from(field, "placeholder");
            }
        }
        None => out.text_from(children, "String", "placeholder"),
    }
}

/// Shared fixtures for the rule tests.
#[cfg(test)]
pub(crate) mod testing {
    use figmagen_scene::{GenerateConfig, Scene};
    use serde_json::{json, Value};

    use crate::builder::build_tag_tree;
    use crate::tag::{PropValue, Tag};

    /// An instance annotated as `component`.
    pub fn instance(name: &str, component: &str, variants: Value, children: Value) -> Value {
        json!({
            "name": name,
            "type": "INSTANCE",
            "mainComponent": { "name": component, "description": format!("Fluent component: {component}") },
            "variantProperties": variants,
            "children": children,
        })
    }

    pub fn text(name: &str, characters: &str) -> Value {
        json!({ "name": name, "type": "TEXT", "characters": characters })
    }

    pub fn frame(name: &str, children: Value) -> Value {
        json!({ "name": name, "type": "FRAME", "children": children })
    }

    pub fn build(value: Value) -> Tag {
        let scene = Scene::from_value(value).unwrap();
        build_tag_tree(&scene, GenerateConfig::default()).unwrap()
    }

    /// `(name, rendered value)` pairs; flags render as `None`, expressions in braces.
    pub fn props(tag: &Tag) -> Vec<(String, Option<String>)> {
        tag.properties
            .iter()
            .map(|p| {
                let value = match &p.value {
                    PropValue::Flag => None,
                    PropValue::Str(v) => Some(v.clone()),
                    PropValue::Expr(v) => Some(format!("{{{v}}}")),
                };
                (p.name.clone(), value)
            })
            .collect()
    }

    pub fn prop(name: &str, value: &str) -> (String, Option<String>) {
        (name.to_string(), Some(value.to_string()))
    }

    pub fn flag(name: &str) -> (String, Option<String>) {
        (name.to_string(), None)
    }
}
