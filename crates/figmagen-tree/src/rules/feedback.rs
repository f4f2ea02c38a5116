//! Status, messaging and small presentational components.

use crate::extract::{escape_single, Classified, RuleContext, PLACEHOLDER};
use crate::kind::ComponentKind;
use crate::tag::{find, find_containing, first_text, Property, Tag};

pub fn message_bar(cx: &RuleContext<'_>, tag: &Tag) -> Tag {
    let mut out = Classified::new(tag, ComponentKind::MessageBar);
    if let Some(message) = find(&tag.children, "String-message") {
        out.retain(message);
    }
    out.push(Property::expr("onDismiss", "() => { return }"));

    let bar_type = match cx.variant("Type") {
        Some("Blocked") => Some("blocked"),
        Some("Error") => Some("error"),
        Some("Info") => Some("info"),
        Some("Severe-Warning") => Some("severeWarning"),
        Some("Success") => Some("success"),
        Some("Warning") => Some("warning"),
        _ => None,
    };
    out.push_opt(bar_type.map(|t| Property::expr("messageBarType", format!("MessageBarType.{t}"))));

    let actions = match cx.variant("Actions") {
        Some("Single action") => Some("<MessageBarButton>Action</MessageBarButton>"),
        Some("Multi action") => Some(
            "<div><MessageBarButton>Yes</MessageBarButton><MessageBarButton>No</MessageBarButton></div>",
        ),
        _ => None,
    };
    out.push_opt(actions.map(|a| Property::expr("actions", a)));

    if matches!(cx.variant("State"), Some("Collapsed" | "Expanded")) {
        out.push(Property::expr("truncated", "true"));
    }
    out.finish()
}

/// Most of the bubble's configuration is read off its layered body anatomy:
/// `Body-content` > `Header-large` / `Footer-content` / `String-subtext`.
pub fn teaching_bubble(cx: &RuleContext<'_>, tag: &Tag) -> Tag {
    let mut out = Classified::new(tag, ComponentKind::TeachingBubble);
    let name = &cx.node.name;
    if name.contains("Wide") {
        out.push(Property::expr("isWide", "true"));
    }
    if name.contains("Condensed") {
        out.push(Property::expr("hasCondensedHeadline", "true"));
    }
    if name.contains("Illustration") {
        out.push(Property::expr(
            "illustrationImage",
            format!("{{ src: '{PLACEHOLDER}', alt: '{PLACEHOLDER}' }}"),
        ));
    }

    let body = find(&tag.children, "Body-content")
        .or_else(|| find(&tag.children, "Body").and_then(|b| find(&b.children, "Body-content")));
    let Some(body) = body else {
        return out.finish();
    };

    if let Some(header) = find(&body.children, "Header-large") {
        out.text_from(&header.children, "String-headline", "headline");
        if find(&header.children, "Sub-components / Dismiss").is_some() {
            out.push(Property::expr("hasCloseButton", "true"));
        }
    }

    if let Some(footer) = find(&body.children, "Footer-content") {
        if let Some(actions) = find(&footer.children, "Actions-stack") {
            for (slot, prop) in [
                ("Sub-components / Primary", "primaryButtonProps"),
                ("Sub-components / Secondary", "secondaryButtonProps"),
            ] {
                let label = find_containing(&actions.children, slot)
                    .and_then(|s| find_containing(&s.children, "Sub-components / Button"))
                    .and_then(|b| find(&b.children, "Button"))
                    .and_then(|t| t.text.as_deref())
                    .unwrap_or(PLACEHOLDER);
                out.push(Property::expr(
                    prop,
                    format!("{{ children: '{}' }}", escape_single(label)),
                ));
            }
        }
        if let Some(steps) = find(&footer.children, "Multi-step") {
            out.text_from(&steps.children, "String-step", "footerContent");
        }
    }

    if let Some(subtext) = find(&body.children, "String-subtext") {
        out.retain(subtext);
    }
    out.finish()
}

pub fn progress_indicator(cx: &RuleContext<'_>, tag: &Tag) -> Tag {
    let mut out = Classified::new(tag, ComponentKind::ProgressIndicator);
    if let Some(labels) = find(&tag.children, "Label-container") {
        out.text_from(&labels.children, "String-label", "label");
    }
    out.text_from(&tag.children, "String-description", "description");
    out.when(
        cx.variant_is("Indeterminate", "False"),
        Property::expr("percentComplete", "0.2"),
    );
    out.finish()
}

pub fn spinner(cx: &RuleContext<'_>, tag: &Tag) -> Tag {
    let mut out = Classified::new(tag, ComponentKind::Spinner);
    if !cx.node.has_variants() {
        return out.finish();
    }

    let size = match cx.variant("Size") {
        Some("12") => "xSmall",
        Some("16") => "small",
        Some("28") => "large",
        _ => "medium",
    };
    out.push(Property::expr("size", format!("SpinnerSize.{size}")));

    if let Some(position) = cx.variant("Label").filter(|l| *l != "None") {
        out.push(Property::string("label", "Loading..."));
        out.push(Property::string("labelPosition", position.to_lowercase()));
    }
    out.finish()
}

pub fn label(_cx: &RuleContext<'_>, tag: &Tag) -> Tag {
    let mut out = Classified::new(tag, ComponentKind::Label);
    if let Some(text) = first_text(&tag.children).and_then(|t| t.text.clone()) {
        out.make_text(text);
    }
    out.finish()
}

/// A divider, optionally with inline content taken from `String-auto-layout`.
pub fn separator(cx: &RuleContext<'_>, tag: &Tag) -> Tag {
    let mut out = Classified::new(tag, ComponentKind::Separator);
    out.when(cx.variant_is("Vertical", "True"), Property::flag("vertical"));

    let align = match cx.variant("String") {
        Some("Center") => Some("center"),
        Some("Top" | "Left") => Some("start"),
        Some("Down" | "Right") => Some("end"),
        _ => None,
    };
    out.push_opt(align.map(|a| Property::string("alignContent", a)));

    let scope = find(&tag.children, "Separator-content")
        .map(|c| c.children.as_slice())
        .unwrap_or(tag.children.as_slice());
    if let Some(content) = find(scope, "String-auto-layout") {
        out.retain_all(&content.children);
    }
    out.finish()
}
