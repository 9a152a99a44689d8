use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::axis::Axis;
use crate::errors::ParseTokenError;
use crate::point::Point3;
use crate::shape::Unit;

/// Cross-section of the two dipole arms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DipoleKind {
    /// Two cylinders; `size` is the diameter.
    #[default]
    Cylindrical,
    /// Two boxes with a square `size` × `size` cross-section.
    Cuboid,
    /// Two covered rectangles of width `size`.
    Strip,
}

impl FromStr for DipoleKind {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "cylinder" | "cylindrical" => Ok(DipoleKind::Cylindrical),
            "r" | "box" | "cuboid" => Ok(DipoleKind::Cuboid),
            "s" | "strip" => Ok(DipoleKind::Strip),
            _ => Err(ParseTokenError::DipoleKind {
                token: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for DipoleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DipoleKind::Cylindrical => "cylindrical",
            DipoleKind::Cuboid => "cuboid",
            DipoleKind::Strip => "strip",
        })
    }
}

/// A center-fed dipole: two collinear arms of `(length - gap) / 2` each,
/// separated by a feed gap centered on `center`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DipoleSpec {
    /// Base name; the arms are `<name>1` and `<name>2`.
    pub name: String,
    pub axis: Axis,
    pub center: Point3,
    /// Total length including the gap.
    pub length: f64,
    /// Diameter, cuboid cross-section, or strip width depending on `kind`.
    pub size: f64,
    pub gap: f64,
    pub unit: Unit,
    #[serde(default)]
    pub kind: DipoleKind,
    /// Normal of a strip dipole. Defaults to the successor of `axis`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strip_axis: Option<Axis>,
}

impl DipoleSpec {
    pub fn new(
        name: impl Into<String>,
        axis: Axis,
        center: Point3,
        length: f64,
        size: f64,
        gap: f64,
        unit: impl Into<Unit>,
    ) -> Self {
        Self {
            name: name.into(),
            axis,
            center,
            length,
            size,
            gap,
            unit: unit.into(),
            kind: DipoleKind::Cylindrical,
            strip_axis: None,
        }
    }

    pub fn with_kind(mut self, kind: DipoleKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_strip_axis(mut self, axis: Axis) -> Self {
        self.strip_axis = Some(axis);
        self
    }

    /// Strip normal after applying the default.
    pub fn resolved_strip_axis(&self) -> Axis {
        self.strip_axis.unwrap_or_else(|| self.axis.successor())
    }

    /// Length of a single arm.
    pub fn arm_length(&self) -> f64 {
        (self.length - self.gap) / 2.0
    }

    pub fn arm_names(&self) -> [String; 2] {
        [format!("{}1", self.name), format!("{}2", self.name)]
    }

    pub fn scalars(&self) -> Vec<f64> {
        let mut v = self.center.to_array().to_vec();
        v.extend([self.length, self.size, self.gap]);
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_tokens() {
        assert_eq!("c".parse::<DipoleKind>().unwrap(), DipoleKind::Cylindrical);
        assert_eq!("R".parse::<DipoleKind>().unwrap(), DipoleKind::Cuboid);
        assert_eq!("strip".parse::<DipoleKind>().unwrap(), DipoleKind::Strip);
        assert!("q".parse::<DipoleKind>().is_err());
    }

    #[test]
    fn default_strip_axis_follows_dipole_axis() {
        let d = DipoleSpec::new("D", Axis::Z, Point3::ORIGIN, 10.0, 1.0, 0.5, "mm");
        assert_eq!(d.resolved_strip_axis(), Axis::X);
        assert_eq!(d.clone().with_strip_axis(Axis::Y).resolved_strip_axis(), Axis::Y);
        assert_eq!(d.arm_length(), 4.75);
        assert_eq!(d.arm_names(), ["D1".to_string(), "D2".to_string()]);
    }
}
