//! Style extraction collaborator.
//!
//! The generator never computes CSS itself; it asks a [`StyleExtractor`] for
//! a [`StyleRecord`] per node and carries it on the tag. The stylesheet
//! builder later renders those records. [`DefaultStyleExtractor`] derives a
//! record from the geometry and paint fields of the node.

use crate::naming::kebabize;
use crate::node::{AxisAlign, Color, LayoutMode, PaintKind, SceneNode};
use crate::units::{format_number, format_size, UnitType};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleRecord {
    pub class_name: String,
    pub properties: Vec<StyleProperty>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyleProperty {
    pub name: String,
    pub value: String,
}

impl StyleProperty {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Produces the style record for one node.
pub trait StyleExtractor {
    fn extract(&self, node: &SceneNode, unit: UnitType) -> StyleRecord;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStyleExtractor;

impl StyleExtractor for DefaultStyleExtractor {
    fn extract(&self, node: &SceneNode, unit: UnitType) -> StyleRecord {
        let mut props = Vec::new();
        let size = |px: f64| format_size(px, unit);

        if node.has_auto_layout() {
            props.push(StyleProperty::new("display", "flex"));
            let direction = if node.layout_mode == LayoutMode::Horizontal {
                "row"
            } else {
                "column"
            };
            props.push(StyleProperty::new("flex-direction", direction));
            if node.item_spacing != 0.0 {
                props.push(StyleProperty::new("gap", size(node.item_spacing)));
            }
            if let Some(padding) = padding_shorthand(node, &size) {
                props.push(StyleProperty::new("padding", padding));
            }
            if let Some(justify) = node.primary_axis_align_items.and_then(flex_align) {
                props.push(StyleProperty::new("justify-content", justify));
            }
            if let Some(align) = node.counter_axis_align_items.and_then(flex_align) {
                props.push(StyleProperty::new("align-items", align));
            }
        }

        if !node.is_text() {
            if let Some(width) = node.width {
                props.push(StyleProperty::new("width", size(width)));
            }
            if let Some(height) = node.height {
                props.push(StyleProperty::new("height", size(height)));
            }
        }

        let solid = node
            .fills
            .iter()
            .find(|paint| paint.visible && paint.kind == PaintKind::Solid);
        if let Some(color) = solid.and_then(|paint| paint.color.map(|c| css_color(c, paint.opacity))) {
            let name = if node.is_text() {
                "color"
            } else {
                "background-color"
            };
            props.push(StyleProperty::new(name, color));
        }

        if let Some(radius) = node.corner_radius.filter(|r| *r > 0.0) {
            props.push(StyleProperty::new("border-radius", size(radius)));
        }
        if let Some(opacity) = node.opacity.filter(|o| *o < 1.0) {
            props.push(StyleProperty::new("opacity", format_number(opacity)));
        }

        if node.is_text() {
            if let Some(font_size) = node.font_size {
                props.push(StyleProperty::new("font-size", size(font_size)));
            }
            if let Some(weight) = node.font_weight {
                props.push(StyleProperty::new("font-weight", format_number(weight)));
            }
            if let Some(align) = node.text_align_horizontal.as_deref() {
                let value = match align {
                    "CENTER" => "center",
                    "RIGHT" => "right",
                    "JUSTIFIED" => "justify",
                    _ => "left",
                };
                props.push(StyleProperty::new("text-align", value));
            }
        }

        StyleRecord {
            class_name: kebabize(&node.name),
            properties: props,
        }
    }
}

fn padding_shorthand(node: &SceneNode, size: &impl Fn(f64) -> String) -> Option<String> {
    let (top, right, bottom, left) = (
        node.padding_top,
        node.padding_right,
        node.padding_bottom,
        node.padding_left,
    );
    if top == 0.0 && right == 0.0 && bottom == 0.0 && left == 0.0 {
        return None;
    }
    if top == bottom && left == right {
        if top == left {
            return Some(size(top));
        }
        return Some(format!("{} {}", size(top), size(right)));
    }
    Some(format!(
        "{} {} {} {}",
        size(top),
        size(right),
        size(bottom),
        size(left)
    ))
}

fn flex_align(align: AxisAlign) -> Option<&'static str> {
    match align {
        AxisAlign::Min => Some("flex-start"),
        AxisAlign::Center => Some("center"),
        AxisAlign::Max => Some("flex-end"),
        AxisAlign::SpaceBetween => Some("space-between"),
        AxisAlign::Baseline => Some("baseline"),
    }
}

fn css_color(color: Color, opacity: Option<f64>) -> String {
    let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    let (r, g, b) = (channel(color.r), channel(color.g), channel(color.b));
    match opacity {
        Some(alpha) if alpha < 1.0 => format!("rgba({r}, {g}, {b}, {})", format_number(alpha)),
        _ => format!("#{r:02x}{g:02x}{b:02x}"),
    }
}
