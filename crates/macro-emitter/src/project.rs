//! Project and design preamble.

use hfss_types::SolutionType;

use crate::script::{quoted, ScriptBuffer};

/// Script-level handles declared by the project preamble.
pub const HANDLES: [&str; 6] = [
    "oHfssApp", "oDesktop", "oProject", "oDesign", "oEditor", "oModule",
];

/// Create a new project and bind it to `oProject`.
///
/// `declare_handles` controls the `Dim` block, which may only appear once
/// per script.
pub fn render_new_project(declare_handles: bool) -> ScriptBuffer {
    let mut buf = ScriptBuffer::new();
    if declare_handles {
        for handle in HANDLES {
            buf.line(format!("Dim {handle}"));
        }
        buf.blank();
    }
    buf.line("Set oHfssApp = CreateObject(\"AnsoftHfss.HfssScriptInterface\")");
    buf.line("Set oDesktop = oHfssApp.GetAppDesktop()");
    buf.line("oDesktop.RestoreWindow");
    buf.line("oDesktop.NewProject");
    buf.line("Set oProject = oDesktop.GetActiveProject");
    buf
}

/// Insert a design into the active project and bind its 3D modeler to
/// `oEditor`.
pub fn render_insert_design(name: &str, solution: SolutionType) -> ScriptBuffer {
    let mut buf = ScriptBuffer::new();
    buf.blank();
    buf.line(format!(
        "oProject.InsertDesign \"HFSS\", {}, {}, \"\"",
        quoted(name),
        quoted(solution.script_token())
    ));
    buf.line(format!(
        "Set oDesign = oProject.SetActiveDesign({})",
        quoted(name)
    ));
    buf.line("Set oEditor = oDesign.SetActiveEditor(\"3D Modeler\")");
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_project_declares_every_handle_once() {
        let text = render_new_project(true).into_string();
        for handle in HANDLES {
            assert_eq!(text.matches(&format!("Dim {handle}\n")).count(), 1);
        }
        assert!(text.ends_with("Set oProject = oDesktop.GetActiveProject\n"));
    }

    #[test]
    fn repeated_project_skips_declarations() {
        let text = render_new_project(false).into_string();
        assert!(!text.contains("Dim "));
        assert!(text.starts_with("Set oHfssApp"));
    }

    #[test]
    fn insert_design_binds_editor() {
        let text = render_insert_design("Dipole", SolutionType::Eigenmode).into_string();
        assert_eq!(
            text,
            "\noProject.InsertDesign \"HFSS\", \"Dipole\", \"Eigenmode\", \"\"\n\
             Set oDesign = oProject.SetActiveDesign(\"Dipole\")\n\
             Set oEditor = oDesign.SetActiveEditor(\"3D Modeler\")\n"
        );
    }
}
