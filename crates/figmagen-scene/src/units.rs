//! Pixel-to-unit formatting.

use serde::{Deserialize, Serialize};

/// Unit preference for emitted sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitType {
    #[default]
    #[serde(rename = "px")]
    Px,
    /// `1rem = 16px`
    #[serde(rename = "rem")]
    Rem,
    /// `1rem = 10px` (the `html { font-size: 62.5% }` convention)
    #[serde(rename = "rem-as-10px")]
    RemAs10px,
}

/// Format a pixel value in the requested unit: `32` → `32px` / `2rem` / `3.2rem`.
pub fn format_size(pixels: f64, unit: UnitType) -> String {
    match unit {
        UnitType::Px => format!("{}px", format_number(pixels)),
        UnitType::Rem => format!("{}rem", format_number(pixels / 16.0)),
        UnitType::RemAs10px => format!("{}rem", format_number(pixels / 10.0)),
    }
}

/// Format a number, removing `.0` for integers.
pub fn format_number(n: f64) -> String {
    // Keep the cast well inside i64, which saturates.
    if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}
