//! ScriptBuilder: fluent API for scripting macro generation in tests.
//!
//! Wraps a real [`MacroSession`] writing to memory, so tests go through the
//! same path as library callers.

use std::collections::HashSet;

use hfss_types::{Axis, DipoleSpec, HoleSpec, Point3, ShapeSpec, SolutionType};
use macro_emitter::{EmitError, EmitterConfig, MacroSession};
use recipe_format::{Recipe, Step};

use crate::helpers::HarnessError;
use crate::report::ScriptReport;
use crate::statement::{tokenize, Statement};

/// A fluent builder for emitting and inspecting macro scripts in tests.
///
/// Every successful call is also recorded as a recipe step, so a test can
/// check that replaying the recipe reproduces the script.
#[derive(Debug)]
pub struct ScriptBuilder {
    session: MacroSession<Vec<u8>>,
    recipe: Recipe,
    names: HashSet<String>,
    unit: String,
}

impl ScriptBuilder {
    /// New builder with the default configuration, lengths in `unit`.
    pub fn new(unit: &str) -> Self {
        Self::with_config(unit, EmitterConfig::default())
    }

    pub fn with_config(unit: &str, config: EmitterConfig) -> Self {
        let mut recipe = Recipe::new("harness");
        recipe.config = config.clone();
        Self {
            session: MacroSession::with_config(Vec::new(), config),
            recipe,
            names: HashSet::new(),
            unit: unit.to_string(),
        }
    }

    // ── Project ─────────────────────────────────────────────────────────

    /// New project plus one design, the usual script preamble.
    pub fn project(
        &mut self,
        design: &str,
        solution: SolutionType,
    ) -> Result<&mut Self, HarnessError> {
        self.apply(Step::NewProject)?;
        self.apply(Step::InsertDesign {
            name: design.to_string(),
            solution,
        })
    }

    // ── Geometry ────────────────────────────────────────────────────────

    pub fn cylinder(
        &mut self,
        name: &str,
        axis: Axis,
        center: [f64; 3],
        radius: f64,
        height: f64,
    ) -> Result<&mut Self, HarnessError> {
        let spec =
            ShapeSpec::cylinder(name, axis, center.into(), radius, height, self.unit.as_str());
        self.shape(spec)
    }

    pub fn cuboid(
        &mut self,
        name: &str,
        start: [f64; 3],
        size: [f64; 3],
        holes: Vec<HoleSpec>,
    ) -> Result<&mut Self, HarnessError> {
        let spec = ShapeSpec::cuboid(name, start.into(), size.into(), self.unit.as_str())
            .with_holes(holes);
        self.shape(spec)
    }

    pub fn rectangle(
        &mut self,
        name: &str,
        axis: Axis,
        start: [f64; 3],
        width: f64,
        height: f64,
    ) -> Result<&mut Self, HarnessError> {
        let spec =
            ShapeSpec::rectangle(name, axis, start.into(), width, height, self.unit.as_str());
        self.shape(spec)
    }

    /// Dipole with this builder's unit; `configure` adjusts kind/strip axis.
    #[allow(clippy::too_many_arguments)]
    pub fn dipole(
        &mut self,
        name: &str,
        axis: Axis,
        center: [f64; 3],
        length: f64,
        size: f64,
        gap: f64,
        configure: impl FnOnce(DipoleSpec) -> DipoleSpec,
    ) -> Result<&mut Self, HarnessError> {
        let spec = configure(DipoleSpec::new(
            name,
            axis,
            Point3::from(center),
            length,
            size,
            gap,
            self.unit.as_str(),
        ));
        for arm in spec.arm_names() {
            self.check_name_available(&arm)?;
        }
        self.apply(Step::Dipole { spec })
    }

    pub fn subtract(&mut self, blank: &[&str], tool: &[&str]) -> Result<&mut Self, HarnessError> {
        self.apply(Step::Subtract {
            blank: blank.iter().map(|s| s.to_string()).collect(),
            tool: tool.iter().map(|s| s.to_string()).collect(),
            keep_originals: false,
        })
    }

    // ── Inspection ──────────────────────────────────────────────────────

    pub fn text(&self) -> String {
        self.session.text()
    }

    pub fn statements(&self) -> Vec<Statement> {
        tokenize(&self.text())
    }

    /// The first statement that names `name`.
    pub fn statement_for(&self, name: &str) -> Result<Statement, HarnessError> {
        self.statements()
            .into_iter()
            .find(|s| s.values("Name").iter().any(|n| n == name))
            .ok_or_else(|| HarnessError::AssertionFailed {
                detail: format!("no statement names {name:?}"),
            })
    }

    pub fn report(&self) -> ScriptReport {
        ScriptReport::from_script(&self.text())
    }

    /// Steps recorded so far.
    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    pub fn session(&self) -> &MacroSession<Vec<u8>> {
        &self.session
    }

    // ── Internals ───────────────────────────────────────────────────────

    fn shape(&mut self, spec: ShapeSpec) -> Result<&mut Self, HarnessError> {
        self.check_name_available(&spec.name)?;
        self.apply(Step::Shape { spec })
    }

    fn apply(&mut self, step: Step) -> Result<&mut Self, HarnessError> {
        step.apply(&mut self.session)
            .map_err(|source: EmitError| HarnessError::Emit {
                step: step.label(),
                source,
            })?;
        self.names.extend(step.object_names());
        self.recipe.push(step);
        Ok(self)
    }

    fn check_name_available(&self, name: &str) -> Result<(), HarnessError> {
        if self.names.contains(name) {
            return Err(HarnessError::DuplicateName {
                name: name.to_string(),
            });
        }
        Ok(())
    }
}
