//! Emitter configuration.

use serde::{Deserialize, Serialize};

/// Cosmetic and solver attributes written after every primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeStyle {
    /// RGB color, written as `"(r g b)"`.
    pub color: [u8; 3],
    pub material: String,
    pub coordinate_system: String,
    pub solve_inside: bool,
    pub cylinder_transparency: f64,
    pub box_transparency: f64,
    pub rectangle_transparency: f64,
}

impl Default for AttributeStyle {
    fn default() -> Self {
        Self {
            color: [132, 132, 193],
            material: "vacuum".to_string(),
            coordinate_system: "Global".to_string(),
            solve_inside: true,
            cylinder_transparency: 0.0,
            box_transparency: 0.75,
            rectangle_transparency: 0.75,
        }
    }
}

/// Configuration for a [`MacroSession`](crate::MacroSession).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterConfig {
    pub style: AttributeStyle,
    /// Reject NaN and infinite inputs with `InvalidConfiguration`.
    /// Off by default: they are written verbatim.
    pub reject_non_finite: bool,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            style: AttributeStyle::default(),
            reject_non_finite: false,
        }
    }
}

impl EmitterConfig {
    /// Fail on NaN and infinite inputs instead of writing them.
    pub fn strict() -> Self {
        Self {
            reject_non_finite: true,
            ..Self::default()
        }
    }
}
