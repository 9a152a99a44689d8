use std::io::Write;

use hfss_types::{DipoleSpec, ShapeSpec, SolutionType};
use macro_emitter::{EmitError, EmitterConfig, MacroSession};
use serde::{Deserialize, Serialize};

use crate::metadata::RecipeMetadata;

/// An ordered list of emitter steps plus the configuration to render them
/// with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub metadata: RecipeMetadata,
    #[serde(default)]
    pub config: EmitterConfig,
    pub steps: Vec<Step>,
}

impl Recipe {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            metadata: RecipeMetadata::new(name),
            config: EmitterConfig::default(),
            steps: Vec::new(),
        }
    }

    pub fn push(&mut self, step: Step) -> &mut Self {
        self.steps.push(step);
        self.metadata.touch();
        self
    }

    /// Names of every object the recipe creates, in emission order.
    /// Box holes contribute their `_subhole<i>` cylinders.
    pub fn object_names(&self) -> Vec<String> {
        self.steps.iter().flat_map(Step::object_names).collect()
    }
}

/// One emitter call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Step {
    NewProject,
    InsertDesign {
        name: String,
        #[serde(default)]
        solution: SolutionType,
    },
    Shape {
        spec: ShapeSpec,
    },
    Dipole {
        spec: DipoleSpec,
    },
    Subtract {
        blank: Vec<String>,
        tool: Vec<String>,
        #[serde(default)]
        keep_originals: bool,
    },
}

impl Step {
    /// Short description used in error reports.
    pub fn label(&self) -> String {
        match self {
            Step::NewProject => "new project".to_string(),
            Step::InsertDesign { name, .. } => format!("insert design {name:?}"),
            Step::Shape { spec } => format!("{} {:?}", spec.shape.kind_name(), spec.name),
            Step::Dipole { spec } => format!("dipole {:?}", spec.name),
            Step::Subtract { blank, .. } => format!("subtract from {}", blank.join(",")),
        }
    }

    /// Names of the objects this step creates, in emission order.
    pub fn object_names(&self) -> Vec<String> {
        match self {
            Step::Shape { spec } => {
                let mut names = vec![spec.name.clone()];
                if let hfss_types::Shape::Box { holes, .. } = &spec.shape {
                    names.extend((1..=holes.len()).map(|i| format!("{}_subhole{i}", spec.name)));
                }
                names
            }
            Step::Dipole { spec } => spec.arm_names().to_vec(),
            _ => Vec::new(),
        }
    }

    /// Issue this step against a session.
    pub fn apply<W: Write>(&self, session: &mut MacroSession<W>) -> Result<(), EmitError> {
        match self {
            Step::NewProject => session.new_project(),
            Step::InsertDesign { name, solution } => session.insert_design(name, *solution),
            Step::Shape { spec } => session.emit_shape(spec),
            Step::Dipole { spec } => session.dipole(spec),
            Step::Subtract {
                blank,
                tool,
                keep_originals,
            } => session.subtract(blank.as_slice(), tool.as_slice(), *keep_originals),
        }
    }
}
