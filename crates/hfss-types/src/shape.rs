use std::fmt;

use serde::{Deserialize, Serialize};

use crate::axis::Axis;
use crate::point::Point3;

/// Length unit token appended verbatim to every numeric literal
/// (`"in"`, `"mm"`, `"meter"`, ...). Never validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Unit(pub String);

impl Unit {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Unit {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Unit {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A cylindrical hole to punch through a box along `axis`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoleSpec {
    pub center: Point3,
    pub radius: f64,
    pub axis: Axis,
}

/// Geometry of a drawable primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Shape {
    /// Base circle centered at `center`, extruded by `height` along `axis`.
    /// A negative height grows in the negative axis direction.
    Cylinder {
        center: Point3,
        radius: f64,
        height: f64,
        axis: Axis,
    },
    /// Axis-aligned box from `start` with signed extents `size`.
    Box {
        start: Point3,
        size: Point3,
        #[serde(default)]
        holes: Vec<HoleSpec>,
    },
    /// Covered rectangle normal to `axis`. Width runs along the axis after
    /// `axis`, height along the one after that.
    Rectangle {
        start: Point3,
        width: f64,
        height: f64,
        axis: Axis,
    },
}

impl Shape {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Cylinder { .. } => "cylinder",
            Shape::Box { .. } => "box",
            Shape::Rectangle { .. } => "rectangle",
        }
    }

    /// Every scalar the shape carries, for finiteness checks.
    pub fn scalars(&self) -> Vec<f64> {
        match self {
            Shape::Cylinder {
                center,
                radius,
                height,
                ..
            } => {
                let mut v = center.to_array().to_vec();
                v.extend([*radius, *height]);
                v
            }
            Shape::Box { start, size, holes } => {
                let mut v = start.to_array().to_vec();
                v.extend(size.to_array());
                for hole in holes {
                    v.extend(hole.center.to_array());
                    v.push(hole.radius);
                }
                v
            }
            Shape::Rectangle {
                start,
                width,
                height,
                ..
            } => {
                let mut v = start.to_array().to_vec();
                v.extend([*width, *height]);
                v
            }
        }
    }
}

/// A named primitive in a given unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeSpec {
    pub name: String,
    pub unit: Unit,
    pub shape: Shape,
}

impl ShapeSpec {
    pub fn cylinder(
        name: impl Into<String>,
        axis: Axis,
        center: Point3,
        radius: f64,
        height: f64,
        unit: impl Into<Unit>,
    ) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            shape: Shape::Cylinder {
                center,
                radius,
                height,
                axis,
            },
        }
    }

    pub fn cuboid(
        name: impl Into<String>,
        start: Point3,
        size: Point3,
        unit: impl Into<Unit>,
    ) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            shape: Shape::Box {
                start,
                size,
                holes: Vec::new(),
            },
        }
    }

    pub fn rectangle(
        name: impl Into<String>,
        axis: Axis,
        start: Point3,
        width: f64,
        height: f64,
        unit: impl Into<Unit>,
    ) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            shape: Shape::Rectangle {
                start,
                width,
                height,
                axis,
            },
        }
    }

    /// Attach holes to a box spec. No-op for other shapes.
    pub fn with_holes(mut self, new_holes: impl IntoIterator<Item = HoleSpec>) -> Self {
        if let Shape::Box { holes, .. } = &mut self.shape {
            holes.extend(new_holes);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_spec_json_is_tagged() {
        let spec = ShapeSpec::cylinder("Cyl1", Axis::Z, Point3::ORIGIN, 0.1, 10.0, "in");
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["shape"]["type"], "Cylinder");
        assert_eq!(json["shape"]["axis"], "Z");
        assert_eq!(json["unit"], "in");
    }

    #[test]
    fn box_holes_default_to_empty() {
        let json = r#"{"name":"B","unit":"mm","shape":{"type":"Box","start":[0,0,0],"size":[1,1,1]}}"#;
        let spec: ShapeSpec = serde_json::from_str(json).unwrap();
        assert_eq!(
            spec.shape,
            Shape::Box {
                start: Point3::ORIGIN,
                size: Point3::splat(1.0),
                holes: vec![],
            }
        );
    }

    #[test]
    fn with_holes_only_touches_boxes() {
        let hole = HoleSpec {
            center: Point3::ORIGIN,
            radius: 1.0,
            axis: Axis::X,
        };
        let boxed = ShapeSpec::cuboid("B", Point3::ORIGIN, Point3::splat(2.0), "mm")
            .with_holes([hole.clone()]);
        assert_eq!(boxed.shape.scalars().len(), 6 + 4);

        let rect = ShapeSpec::rectangle("R", Axis::Z, Point3::ORIGIN, 1.0, 1.0, "mm")
            .with_holes([hole]);
        assert_eq!(rect.shape.scalars().len(), 5);
    }
}
