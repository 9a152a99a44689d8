use std::io::Write;

use hfss_types::{Axis, DipoleSpec, HoleSpec, Point3, ShapeSpec, SolutionType, Unit};
use tracing::{debug, info, instrument, warn};

use crate::boolean::render_subtract;
use crate::config::EmitterConfig;
use crate::dipole::derive_dipole_arms;
use crate::errors::EmitError;
use crate::primitives::render_shape;
use crate::project::{render_insert_design, render_new_project};
use crate::script::ScriptBuffer;

/// Script handles bound so far in this session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// The `Dim` preamble has been written.
    pub handles_declared: bool,
    /// Number of `NewProject` calls emitted.
    pub projects_created: usize,
    /// Design currently bound to `oDesign` / `oEditor`.
    pub active_design: Option<String>,
}

/// One macro-script generation session over an append-only sink.
///
/// Every constructor validates its inputs, renders its complete block, and
/// only then writes it, so an `InvalidConfiguration` error never leaves
/// partial output behind.
#[derive(Debug)]
pub struct MacroSession<W: Write> {
    sink: W,
    config: EmitterConfig,
    state: SessionState,
    blocks_written: usize,
}

impl<W: Write> MacroSession<W> {
    pub fn new(sink: W) -> Self {
        Self::with_config(sink, EmitterConfig::default())
    }

    pub fn with_config(sink: W, config: EmitterConfig) -> Self {
        Self {
            sink,
            config,
            state: SessionState::default(),
            blocks_written: 0,
        }
    }

    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn active_design(&self) -> Option<&str> {
        self.state.active_design.as_deref()
    }

    /// Number of constructor calls committed to the sink.
    pub fn blocks_written(&self) -> usize {
        self.blocks_written
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    // ── Project / design ───────────────────────────────────────────────

    /// Create the scripting handle, restore the desktop window, create a
    /// project and bind it to `oProject`.
    #[instrument(skip(self))]
    pub fn new_project(&mut self) -> Result<(), EmitError> {
        let buf = render_new_project(!self.state.handles_declared);
        self.commit(buf)?;
        self.state.handles_declared = true;
        self.state.projects_created += 1;
        self.state.active_design = None;
        info!(projects = self.state.projects_created, "new project emitted");
        Ok(())
    }

    /// Insert a design of the given solution type and make its 3D modeler
    /// the active editor.
    #[instrument(skip(self))]
    pub fn insert_design(&mut self, name: &str, solution: SolutionType) -> Result<(), EmitError> {
        if self.state.projects_created == 0 {
            warn!(design = name, "design inserted before any project was created");
        }
        self.commit(render_insert_design(name, solution))?;
        self.state.active_design = Some(name.to_string());
        info!(design = name, solution = %solution, "design inserted");
        Ok(())
    }

    /// [`insert_design`](Self::insert_design) with the solution type given
    /// as a case-insensitive token (`"driven modal"`, `"driven terminal"`,
    /// `"eigenmode"`).
    pub fn insert_design_token(&mut self, name: &str, solution: &str) -> Result<(), EmitError> {
        let solution: SolutionType = solution.parse()?;
        self.insert_design(name, solution)
    }

    // ── Primitives ─────────────────────────────────────────────────────

    /// Emit any primitive. Box holes expand into a cylinder and a subtract
    /// block per hole, in request order.
    #[instrument(skip(self, spec), fields(name = %spec.name, kind = spec.shape.kind_name()))]
    pub fn emit_shape(&mut self, spec: &ShapeSpec) -> Result<(), EmitError> {
        self.check_finite(&spec.name, &spec.shape.scalars())?;
        self.warn_without_design(&spec.name);
        let buf = render_shape(spec, &self.config.style)?;
        self.commit(buf)?;
        debug!(unit = %spec.unit, "primitive emitted");
        Ok(())
    }

    pub fn create_cylinder(
        &mut self,
        name: &str,
        axis: Axis,
        center: Point3,
        radius: f64,
        height: f64,
        unit: impl Into<Unit>,
    ) -> Result<(), EmitError> {
        self.emit_shape(&ShapeSpec::cylinder(name, axis, center, radius, height, unit))
    }

    pub fn create_box(
        &mut self,
        name: &str,
        start: Point3,
        size: Point3,
        unit: impl Into<Unit>,
        holes: &[HoleSpec],
    ) -> Result<(), EmitError> {
        let spec = ShapeSpec::cuboid(name, start, size, unit).with_holes(holes.iter().cloned());
        self.emit_shape(&spec)
    }

    pub fn create_rectangle(
        &mut self,
        name: &str,
        axis: Axis,
        start: Point3,
        width: f64,
        height: f64,
        unit: impl Into<Unit>,
    ) -> Result<(), EmitError> {
        self.emit_shape(&ShapeSpec::rectangle(name, axis, start, width, height, unit))
    }

    /// Remove `tool` parts from `blank` parts.
    #[instrument(skip(self, blank, tool), fields(blank = blank.len(), tool = tool.len()))]
    pub fn subtract<S: AsRef<str>>(
        &mut self,
        blank: &[S],
        tool: &[S],
        keep_originals: bool,
    ) -> Result<(), EmitError> {
        let buf = render_subtract(blank, tool, keep_originals)?;
        if let Some(first) = blank.first() {
            self.warn_without_design(first.as_ref());
        }
        self.commit(buf)
    }

    /// Emit both arms of a dipole as one block.
    #[instrument(skip(self, spec), fields(name = %spec.name, axis = %spec.axis, kind = %spec.kind))]
    pub fn dipole(&mut self, spec: &DipoleSpec) -> Result<(), EmitError> {
        let arms = derive_dipole_arms(spec)?;
        self.check_finite(&spec.name, &spec.scalars())?;
        self.warn_without_design(&spec.name);

        let mut buf = ScriptBuffer::new();
        for arm in &arms {
            buf.append(render_shape(arm, &self.config.style)?);
        }
        self.commit(buf)?;
        info!(arm_length = spec.arm_length(), "dipole emitted");
        Ok(())
    }

    // ── Internals ──────────────────────────────────────────────────────

    fn check_finite(&self, name: &str, values: &[f64]) -> Result<(), EmitError> {
        if !self.config.reject_non_finite {
            return Ok(());
        }
        match values.iter().find(|v| !v.is_finite()) {
            Some(v) => Err(EmitError::invalid(format!(
                "non-finite value {v} in {name:?}"
            ))),
            None => Ok(()),
        }
    }

    fn warn_without_design(&self, name: &str) {
        if self.state.active_design.is_none() {
            warn!(name = name, "geometry emitted with no active design bound to oEditor");
        }
    }

    fn commit(&mut self, buf: ScriptBuffer) -> Result<(), EmitError> {
        self.sink.write_all(buf.as_str().as_bytes())?;
        self.blocks_written += 1;
        Ok(())
    }
}

impl MacroSession<Vec<u8>> {
    /// A session writing into memory.
    pub fn in_memory() -> Self {
        Self::new(Vec::new())
    }

    /// The text emitted so far.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.sink).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_design_insertion_keeps_project_output() {
        let mut s = MacroSession::in_memory();
        s.new_project().unwrap();
        let before = s.text();

        let err = s.insert_design_token("D1", "foobar").unwrap_err();
        assert!(err.is_invalid_configuration());
        assert_eq!(s.text(), before);
        assert_eq!(s.active_design(), None);
    }

    #[test]
    fn second_project_does_not_redeclare_handles() {
        let mut s = MacroSession::in_memory();
        s.new_project().unwrap();
        s.insert_design("A", SolutionType::DrivenModal).unwrap();
        s.new_project().unwrap();
        assert_eq!(s.text().matches("Dim oEditor").count(), 1);
        assert_eq!(s.text().matches("oDesktop.NewProject").count(), 2);
        assert_eq!(s.state().projects_created, 2);
        assert_eq!(s.active_design(), None);
    }

    #[test]
    fn strict_config_rejects_non_finite() {
        let mut s = MacroSession::with_config(Vec::new(), EmitterConfig::strict());
        let err = s
            .create_cylinder("C", Axis::Z, Point3::ORIGIN, f64::NAN, 1.0, "mm")
            .unwrap_err();
        assert!(err.is_invalid_configuration());
        assert!(s.text().is_empty());
        assert_eq!(s.blocks_written(), 0);
    }

    #[test]
    fn non_finite_passes_through_by_default() {
        let mut s = MacroSession::in_memory();
        s.create_cylinder("C", Axis::Z, Point3::ORIGIN, f64::NAN, f64::INFINITY, "mm")
            .unwrap();
        assert!(s.text().contains("\"Radius:=\", \"NaNmm\", _"));
        assert!(s.text().contains("\"Height:=\", \"infmm\", _"));
        assert_eq!(s.blocks_written(), 1);
    }

    #[test]
    fn subtract_without_design_still_emits() {
        let mut s = MacroSession::in_memory();
        s.subtract(&["Body"], &["Hole"], false).unwrap();
        assert_eq!(s.active_design(), None);
        assert!(s.text().contains("oEditor.Subtract _"));
        assert_eq!(s.blocks_written(), 1);
    }

    #[test]
    fn debug_shows_session_state() {
        let mut s = MacroSession::in_memory();
        s.new_project().unwrap();
        let dbg = format!("{s:?}");
        assert!(dbg.contains("projects_created: 1"), "{dbg}");
        assert!(dbg.contains("blocks_written: 1"), "{dbg}");
    }

    #[test]
    fn tracing_does_not_affect_output() {
        let mut s = MacroSession::in_memory();
        s.create_box("B", Point3::ORIGIN, Point3::splat(1.0), "mm", &[])
            .unwrap();
        let direct = render_shape(
            &ShapeSpec::cuboid("B", Point3::ORIGIN, Point3::splat(1.0), "mm"),
            &s.config().style,
        )
        .unwrap();
        assert_eq!(s.text(), direct.as_str());
    }
}
