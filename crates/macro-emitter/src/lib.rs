//! Emits VBScript macro text that rebuilds geometry in the HFSS 3D modeler.
//!
//! All output goes through a [`MacroSession`], which owns the sink and the
//! handles the script has bound so far. Each constructor validates first and
//! writes its whole block at once, so a failed call leaves the sink untouched.

pub mod boolean;
pub mod config;
pub mod dipole;
pub mod errors;
pub mod primitives;
pub mod project;
pub mod script;
pub mod session;

pub use boolean::render_subtract;
pub use config::{AttributeStyle, EmitterConfig};
pub use dipole::derive_dipole_arms;
pub use errors::EmitError;
pub use primitives::{derive_hole_cylinder, render_shape};
pub use project::{render_insert_design, render_new_project};
pub use script::ScriptBuffer;
pub use session::{MacroSession, SessionState};
