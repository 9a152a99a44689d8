//! Cylinder, box and rectangle blocks.

use hfss_types::{Axis, HoleSpec, Point3, Shape, ShapeSpec, Unit};

use crate::boolean::render_subtract;
use crate::config::AttributeStyle;
use crate::errors::EmitError;
use crate::script::{length, quoted, ScriptBuffer};

/// Render a primitive, including the cylinder and subtract blocks of any
/// box holes.
pub fn render_shape(spec: &ShapeSpec, style: &AttributeStyle) -> Result<ScriptBuffer, EmitError> {
    let mut buf = ScriptBuffer::new();
    match &spec.shape {
        Shape::Cylinder {
            center,
            radius,
            height,
            axis,
        } => render_cylinder(
            &mut buf, &spec.name, *axis, *center, *radius, *height, &spec.unit, style,
        ),
        Shape::Box { start, size, holes } => {
            render_box(&mut buf, &spec.name, *start, *size, &spec.unit, style);
            for (i, hole) in holes.iter().enumerate() {
                let cyl = derive_hole_cylinder(&spec.name, i + 1, *start, *size, hole, &spec.unit);
                buf.append(render_shape(&cyl, style)?);
                buf.append(render_subtract(
                    &[spec.name.as_str()],
                    &[cyl.name.as_str()],
                    false,
                )?);
            }
        }
        Shape::Rectangle {
            start,
            width,
            height,
            axis,
        } => render_rectangle(
            &mut buf, &spec.name, *axis, *start, *width, *height, &spec.unit, style,
        ),
    }
    Ok(buf)
}

/// The cylinder that realizes hole `index` (1-based) of a box.
///
/// The hole center is moved onto the box's start face along the hole axis
/// and the cylinder spans the box extent on that axis.
pub fn derive_hole_cylinder(
    box_name: &str,
    index: usize,
    start: Point3,
    size: Point3,
    hole: &HoleSpec,
    unit: &Unit,
) -> ShapeSpec {
    let axis = hole.axis;
    ShapeSpec::cylinder(
        format!("{box_name}_subhole{index}"),
        axis,
        hole.center.with(axis, start.get(axis)),
        hole.radius,
        size.get(axis),
        unit.clone(),
    )
}

#[allow(clippy::too_many_arguments)]
fn render_cylinder(
    buf: &mut ScriptBuffer,
    name: &str,
    axis: Axis,
    center: Point3,
    radius: f64,
    height: f64,
    unit: &Unit,
    style: &AttributeStyle,
) {
    buf.blank();
    buf.line("oEditor.CreateCylinder _");
    buf.line("Array(\"NAME:CylinderParameters\", _");
    buf.entry("XCenter", length(center.x, unit));
    buf.entry("YCenter", length(center.y, unit));
    buf.entry("ZCenter", length(center.z, unit));
    buf.entry("Radius", length(radius, unit));
    buf.entry("Height", length(height, unit));
    buf.last_entry("WhichAxis", quoted(axis.as_str()), true);
    buf.attributes(name, style.cylinder_transparency, style);
}

fn render_box(
    buf: &mut ScriptBuffer,
    name: &str,
    start: Point3,
    size: Point3,
    unit: &Unit,
    style: &AttributeStyle,
) {
    buf.blank();
    buf.line("oEditor.CreateBox _");
    buf.line("Array(\"NAME:BoxParameters\", _");
    buf.entry("XPosition", length(start.x, unit));
    buf.entry("YPosition", length(start.y, unit));
    buf.entry("ZPosition", length(start.z, unit));
    buf.entry("XSize", length(size.x, unit));
    buf.entry("YSize", length(size.y, unit));
    buf.last_entry("ZSize", length(size.z, unit), true);
    buf.attributes(name, style.box_transparency, style);
}

#[allow(clippy::too_many_arguments)]
fn render_rectangle(
    buf: &mut ScriptBuffer,
    name: &str,
    axis: Axis,
    start: Point3,
    width: f64,
    height: f64,
    unit: &Unit,
    style: &AttributeStyle,
) {
    buf.blank();
    buf.line("oEditor.CreateRectangle _");
    buf.line("Array(\"NAME:RectangleParameters\", _");
    buf.entry("IsCovered", "true");
    buf.entry("XStart", length(start.x, unit));
    buf.entry("YStart", length(start.y, unit));
    buf.entry("ZStart", length(start.z, unit));
    buf.entry("Width", length(width, unit));
    buf.entry("Height", length(height, unit));
    buf.last_entry("WhichAxis", quoted(axis.as_str()), true);
    buf.attributes(name, style.rectangle_transparency, style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hole_center_is_projected_onto_box_start() {
        let hole = HoleSpec {
            center: Point3::new(1.0, 2.0, 99.0),
            radius: 0.25,
            axis: Axis::Z,
        };
        let cyl = derive_hole_cylinder(
            "Plate",
            3,
            Point3::new(0.0, 0.0, -1.0),
            Point3::new(4.0, 4.0, 2.0),
            &hole,
            &Unit::new("mm"),
        );
        assert_eq!(cyl.name, "Plate_subhole3");
        assert_eq!(
            cyl.shape,
            Shape::Cylinder {
                center: Point3::new(1.0, 2.0, -1.0),
                radius: 0.25,
                height: 2.0,
                axis: Axis::Z,
            }
        );
    }

    #[test]
    fn cylinder_block_layout() {
        let spec = ShapeSpec::cylinder("Cyl1", Axis::Z, Point3::ORIGIN, 0.1, 10.0, "in");
        let text = render_shape(&spec, &AttributeStyle::default())
            .unwrap()
            .into_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "oEditor.CreateCylinder _");
        assert_eq!(lines[2], "Array(\"NAME:CylinderParameters\", _");
        assert_eq!(lines[3], "\"XCenter:=\", \"0in\", _");
        assert_eq!(lines[6], "\"Radius:=\", \"0.1in\", _");
        assert_eq!(lines[7], "\"Height:=\", \"10in\", _");
        assert_eq!(lines[8], "\"WhichAxis:=\", \"Z\"), _");
        assert_eq!(lines[10], "\"Name:=\", \"Cyl1\", _");
        assert_eq!(lines.last(), Some(&"\"SolveInside:=\", true)"));
    }

    #[test]
    fn box_uses_box_transparency() {
        let spec = ShapeSpec::cuboid("B", Point3::ORIGIN, Point3::splat(1.0), "mm");
        let text = render_shape(&spec, &AttributeStyle::default())
            .unwrap()
            .into_string();
        assert!(text.contains("oEditor.CreateBox _"));
        assert!(text.contains("\"ZSize:=\", \"1mm\"), _"));
        assert!(text.contains("\"Transparency:=\", 0.75, _"));
    }

    #[test]
    fn rectangle_is_covered() {
        let spec = ShapeSpec::rectangle("R", Axis::X, Point3::ORIGIN, 2.0, -3.0, "mm");
        let text = render_shape(&spec, &AttributeStyle::default())
            .unwrap()
            .into_string();
        assert!(text.contains("\"IsCovered:=\", true, _"));
        assert!(text.contains("\"Height:=\", \"-3mm\", _"));
        assert!(text.contains("\"WhichAxis:=\", \"X\"), _"));
    }
}
