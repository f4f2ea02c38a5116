//! Generation settings shared by every stage.

use serde::{Deserialize, Serialize};

use crate::units::UnitType;

/// Output style of the generated source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleMode {
    /// Named HTML-ish elements with generated class names. Variant handlers
    /// do not run; recognized components are only collapsed.
    SemanticMarkup,
    /// Typed component-library tags with extracted props.
    #[default]
    ComponentLibrary,
}

impl StyleMode {
    pub fn runs_variant_handlers(self) -> bool {
        self == StyleMode::ComponentLibrary
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateConfig {
    pub style_mode: StyleMode,
    pub unit_type: UnitType,
}

impl GenerateConfig {
    pub fn new(style_mode: StyleMode, unit_type: UnitType) -> Self {
        Self {
            style_mode,
            unit_type,
        }
    }
}
