use std::fmt;

use serde::{Deserialize, Serialize};

use crate::axis::Axis;

/// A point (or extent triple) in the caller's linear unit.
/// Serialized as `[x, y, z]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const ORIGIN: Point3 = Point3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Same value on all three components.
    pub fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Component along `axis`.
    pub fn get(&self, axis: Axis) -> f64 {
        self.to_array()[axis.index()]
    }

    /// Copy with the component along `axis` replaced.
    pub fn with(self, axis: Axis, value: f64) -> Self {
        let mut c = self.to_array();
        c[axis.index()] = value;
        c.into()
    }

    /// Copy shifted by `delta` along `axis`.
    pub fn offset(self, axis: Axis, delta: f64) -> Self {
        self.with(axis, self.get(axis) + delta)
    }
}

impl From<[f64; 3]> for Point3 {
    fn from(c: [f64; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl From<Point3> for [f64; 3] {
    fn from(p: Point3) -> Self {
        p.to_array()
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_replaces_one_component() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(p.with(Axis::Y, 9.0), Point3::new(1.0, 9.0, 3.0));
        assert_eq!(p.offset(Axis::Z, -1.0), Point3::new(1.0, 2.0, 2.0));
        assert_eq!(p.get(Axis::X), 1.0);
    }

    #[test]
    fn serializes_as_array() {
        let json = serde_json::to_string(&Point3::new(0.5, 0.0, -2.0)).unwrap();
        assert_eq!(json, "[0.5,0.0,-2.0]");
        let back: Point3 = serde_json::from_str("[1, 2, 3]").unwrap();
        assert_eq!(back, Point3::new(1.0, 2.0, 3.0));
    }
}
