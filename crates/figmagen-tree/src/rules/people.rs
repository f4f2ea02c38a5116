//! People, personas and activity.

use crate::extract::{nested_items, Classified, RuleContext, PLACEHOLDER};
use crate::kind::ComponentKind;
use crate::tag::{find, Property, Tag};

use super::common_variants;

pub fn facepile(cx: &RuleContext<'_>, tag: &Tag) -> Tag {
    let mut out = Classified::new(tag, ComponentKind::Facepile);

    // The overflow button is a nested instance; its own variants pick the type.
    if let Some(overflow) = find(&tag.children, "Facepile-Overflow") {
        let button_type = match cx.source(overflow).variant("Type") {
            Some("Descriptive") => Some("descriptive"),
            Some("Chevron") => Some("downArrow"),
            Some("More") => Some("more"),
            _ => None,
        };
        out.push_opt(button_type.map(|t| {
            Property::expr("overflowButtonType", format!("OverflowButtonType.{t}"))
        }));
    }

    let personas = find(&tag.children, "Flex-container")
        .map(|c| c.children.as_slice())
        .unwrap_or_default();
    nested_items(cx, &mut out, personas, "personas");
    out.finish()
}

pub fn persona(cx: &RuleContext<'_>, tag: &Tag) -> Tag {
    let mut out = Classified::new(tag, ComponentKind::Persona);
    out.push_opt(
        cx.variant("Size")
            .map(|size| Property::expr("size", format!("PersonaSize.size{size}"))),
    );
    out.when(
        cx.variant_is("Initials", "False"),
        Property::string("imgUrl", PLACEHOLDER),
    );
    out.when(
        cx.variant_is("Details", "False"),
        Property::expr("hidePersonaDetails", "true"),
    );
    out.when(
        cx.variant_is("Status", "True"),
        Property::expr("presence", "PersonaPresence.online"),
    );

    if let Some(details) = find(&tag.children, "Details-container") {
        out.text_from(&details.children, "String-name", "text");
        out.text_from(&details.children, "String-secondary", "secondaryText");
        out.text_from(&details.children, "String-tertiary", "tertiaryText");
    }
    out.finish()
}

pub fn people_picker(cx: &RuleContext<'_>, tag: &Tag) -> Tag {
    let mut out = Classified::new(tag, ComponentKind::NormalPeoplePicker);
    common_variants(cx, &mut out);
    out.push(Property::expr(
        "onResolveSuggestions",
        "(filterText, currentPersonas) => []",
    ));
    out.finish()
}

pub fn tag_picker(cx: &RuleContext<'_>, tag: &Tag) -> Tag {
    let mut out = Classified::new(tag, ComponentKind::TagPicker);
    common_variants(cx, &mut out);
    out.push(Property::expr("onResolveSuggestions", "(filter) => []"));
    out.finish()
}

pub fn activity_item(cx: &RuleContext<'_>, tag: &Tag) -> Tag {
    let mut out = Classified::new(tag, ComponentKind::ActivityItem);
    if let Some(strings) = find(&tag.children, "String-container") {
        out.text_from(&strings.children, "String-activityDescription", "activityDescription");
        out.text_from(&strings.children, "String-comment", "comments");
        out.text_from(&strings.children, "String-timeStamp", "timestamp");
    }
    out.when(
        cx.variant_is("Icon", "True"),
        Property::expr("activityIcon", format!("<Icon iconName='{PLACEHOLDER}' />")),
    );
    out.when(
        cx.variant_is("Persona", "True"),
        Property::expr(
            "activityPersonas",
            format!("[{{ imageUrl: '{PLACEHOLDER}', text: '{PLACEHOLDER}' }}]"),
        ),
    );
    out.when(cx.variant_is("Compact", "True"), Property::expr("isCompact", "true"));
    out.finish()
}
