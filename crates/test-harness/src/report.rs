//! Plain-text summaries of emitted scripts.
//!
//! Reports are text rather than JSON so a failing test can print them as is.

use std::fmt;

use crate::statement::{tokenize, Statement, Token};

/// What an emitted script does, statement by statement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScriptReport {
    pub statement_count: usize,
    pub projects: usize,
    /// `(design name, solution token)` per `InsertDesign`.
    pub designs: Vec<(String, String)>,
    /// `(kind, object name)` per primitive.
    pub primitives: Vec<(String, String)>,
    /// `(blank parts, tool parts)` per subtract.
    pub subtracts: Vec<(String, String)>,
}

impl ScriptReport {
    pub fn from_script(script: &str) -> Self {
        let mut report = ScriptReport::default();
        for stmt in tokenize(script) {
            report.statement_count += 1;
            let Some(head) = stmt.head() else { continue };
            match head.as_str() {
                "oDesktop.NewProject" => report.projects += 1,
                "oProject.InsertDesign" => report.designs.push(design_of(&stmt)),
                "oEditor.Subtract" => report.subtracts.push((
                    stmt.value("Blank Parts").unwrap_or_default(),
                    stmt.value("Tool Parts").unwrap_or_default(),
                )),
                h => {
                    if let Some(kind) = h.strip_prefix("oEditor.Create") {
                        report
                            .primitives
                            .push((kind.to_string(), stmt.value("Name").unwrap_or_default()));
                    }
                }
            }
        }
        report
    }

    /// Format the report as text.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

/// `oProject.InsertDesign "HFSS", "<name>", "<type>", ""`
fn design_of(stmt: &Statement) -> (String, String) {
    let quoted: Vec<String> = stmt
        .tokens()
        .into_iter()
        .filter_map(|t| match t {
            Token::Quoted(q) => Some(q),
            _ => None,
        })
        .collect();
    (
        quoted.get(1).cloned().unwrap_or_default(),
        quoted.get(2).cloned().unwrap_or_default(),
    )
}

impl fmt::Display for ScriptReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Macro Script Report ===")?;
        writeln!(
            f,
            "Statements: {}, projects: {}",
            self.statement_count, self.projects
        )?;
        writeln!(f, "Designs ({}):", self.designs.len())?;
        for (name, solution) in &self.designs {
            writeln!(f, "  {} [{}]", name, solution)?;
        }
        writeln!(f, "Primitives ({}):", self.primitives.len())?;
        for (kind, name) in &self.primitives {
            writeln!(f, "  {} {}", kind, name)?;
        }
        writeln!(f, "Subtractions ({}):", self.subtracts.len())?;
        for (blank, tool) in &self.subtracts {
            writeln!(f, "  {} - {}", blank, tool)?;
        }
        Ok(())
    }
}
