//! Dipole arm derivation.
//!
//! A dipole of total length `L` with feed gap `g` along axis `A` becomes two
//! primitives. Arm 1 starts at `center + g/2` on `A` and grows by
//! `+(L - g)/2`; arm 2 starts at `center - g/2` and grows by `-(L - g)/2`.
//! Cross-section offsets are looked up per axis rather than spelled out per
//! case.

use hfss_types::{Axis, DipoleKind, DipoleSpec, Point3, ShapeSpec};

use crate::errors::EmitError;

/// Derive the two arm primitives of a dipole, `<name>1` then `<name>2`.
///
/// Fails when the strip normal (explicit or defaulted) equals the dipole
/// axis, whatever the dipole kind.
pub fn derive_dipole_arms(spec: &DipoleSpec) -> Result<[ShapeSpec; 2], EmitError> {
    let axis = spec.axis;
    let strip_axis = spec.resolved_strip_axis();
    let Some(cross) = axis.third(strip_axis) else {
        return Err(EmitError::invalid(format!(
            "strip axis {strip_axis} cannot equal the dipole axis {axis}"
        )));
    };

    let half_gap = spec.gap / 2.0;
    let arm = spec.arm_length();
    let half_size = spec.size / 2.0;
    let names = spec.arm_names();
    let starts = [
        spec.center.offset(axis, half_gap),
        spec.center.offset(axis, -half_gap),
    ];
    let extents = [arm, -arm];

    let arm_spec = |i: usize| -> ShapeSpec {
        let name = names[i].clone();
        let unit = spec.unit.clone();
        match spec.kind {
            DipoleKind::Cylindrical => {
                ShapeSpec::cylinder(name, axis, starts[i], half_size, extents[i], unit)
            }
            DipoleKind::Cuboid => ShapeSpec::cuboid(
                name,
                centered_cross_section(starts[i], axis, half_size),
                Point3::splat(spec.size).with(axis, extents[i]),
                unit,
            ),
            DipoleKind::Strip => {
                // Width runs along the successor of the normal, height along
                // the axis after that.
                let (width, height) = if strip_axis.successor() == axis {
                    (extents[i], spec.size)
                } else {
                    (spec.size, extents[i])
                };
                ShapeSpec::rectangle(
                    name,
                    strip_axis,
                    starts[i].offset(cross, -half_size),
                    width,
                    height,
                    unit,
                )
            }
        }
    };

    Ok([arm_spec(0), arm_spec(1)])
}

/// Shift `p` by `-half` on both axes perpendicular to `axis`.
fn centered_cross_section(p: Point3, axis: Axis, half: f64) -> Point3 {
    Axis::ALL
        .into_iter()
        .filter(|a| *a != axis)
        .fold(p, |acc, a| acc.offset(a, -half))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hfss_types::Shape;

    fn spec(axis: Axis, kind: DipoleKind) -> DipoleSpec {
        DipoleSpec::new("Dip", axis, Point3::new(1.0, 2.0, 3.0), 10.0, 0.5, 1.0, "mm")
            .with_kind(kind)
    }

    #[test]
    fn cylindrical_arms_along_z() {
        let [a, b] = derive_dipole_arms(&spec(Axis::Z, DipoleKind::Cylindrical)).unwrap();
        assert_eq!(a.name, "Dip1");
        assert_eq!(b.name, "Dip2");
        assert_eq!(
            a.shape,
            Shape::Cylinder {
                center: Point3::new(1.0, 2.0, 3.5),
                radius: 0.25,
                height: 4.5,
                axis: Axis::Z,
            }
        );
        assert_eq!(
            b.shape,
            Shape::Cylinder {
                center: Point3::new(1.0, 2.0, 2.5),
                radius: 0.25,
                height: -4.5,
                axis: Axis::Z,
            }
        );
    }

    #[test]
    fn cuboid_arms_along_x() {
        let [a, b] = derive_dipole_arms(&spec(Axis::X, DipoleKind::Cuboid)).unwrap();
        assert_eq!(
            a.shape,
            Shape::Box {
                start: Point3::new(1.5, 1.75, 2.75),
                size: Point3::new(4.5, 0.5, 0.5),
                holes: vec![],
            }
        );
        assert_eq!(
            b.shape,
            Shape::Box {
                start: Point3::new(0.5, 1.75, 2.75),
                size: Point3::new(-4.5, 0.5, 0.5),
                holes: vec![],
            }
        );
    }

    #[test]
    fn strip_along_x_default_normal_is_y() {
        let [a, b] = derive_dipole_arms(&spec(Axis::X, DipoleKind::Strip)).unwrap();
        // Normal Y: width along Z (size), height along X (arm).
        assert_eq!(
            a.shape,
            Shape::Rectangle {
                start: Point3::new(1.5, 2.0, 2.75),
                width: 0.5,
                height: 4.5,
                axis: Axis::Y,
            }
        );
        assert_eq!(
            b.shape,
            Shape::Rectangle {
                start: Point3::new(0.5, 2.0, 2.75),
                width: 0.5,
                height: -4.5,
                axis: Axis::Y,
            }
        );
    }

    #[test]
    fn strip_along_x_with_z_normal() {
        let d = spec(Axis::X, DipoleKind::Strip).with_strip_axis(Axis::Z);
        let [a, b] = derive_dipole_arms(&d).unwrap();
        // Normal Z: width along X (arm), height along Y (size).
        assert_eq!(
            a.shape,
            Shape::Rectangle {
                start: Point3::new(1.5, 1.75, 3.0),
                width: 4.5,
                height: 0.5,
                axis: Axis::Z,
            }
        );
        assert_eq!(
            b.shape,
            Shape::Rectangle {
                start: Point3::new(0.5, 1.75, 3.0),
                width: -4.5,
                height: 0.5,
                axis: Axis::Z,
            }
        );
    }

    #[test]
    fn explicit_equal_strip_axis_fails_for_every_kind() {
        for kind in [DipoleKind::Cylindrical, DipoleKind::Cuboid, DipoleKind::Strip] {
            let d = spec(Axis::Y, kind).with_strip_axis(Axis::Y);
            let err = derive_dipole_arms(&d).unwrap_err();
            assert!(err.is_invalid_configuration(), "{kind}: {err}");
        }
    }
}
