use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ParseTokenError;

/// Solver setup of an inserted design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SolutionType {
    #[default]
    DrivenModal,
    DrivenTerminal,
    Eigenmode,
}

impl SolutionType {
    /// The identifier the macro language expects.
    pub fn script_token(self) -> &'static str {
        match self {
            SolutionType::DrivenModal => "DrivenModal",
            SolutionType::DrivenTerminal => "DrivenTerminal",
            SolutionType::Eigenmode => "Eigenmode",
        }
    }
}

impl fmt::Display for SolutionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SolutionType::DrivenModal => "driven modal",
            SolutionType::DrivenTerminal => "driven terminal",
            SolutionType::Eigenmode => "eigenmode",
        })
    }
}

impl FromStr for SolutionType {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "driven modal" => Ok(SolutionType::DrivenModal),
            "driven terminal" => Ok(SolutionType::DrivenTerminal),
            "eigenmode" => Ok(SolutionType::Eigenmode),
            _ => Err(ParseTokenError::SolutionType {
                token: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_round_trip_through_display() {
        for st in [
            SolutionType::DrivenModal,
            SolutionType::DrivenTerminal,
            SolutionType::Eigenmode,
        ] {
            assert_eq!(st.to_string().parse::<SolutionType>().unwrap(), st);
        }
    }

    #[test]
    fn parse_ignores_case() {
        assert_eq!(
            "Driven Terminal".parse::<SolutionType>().unwrap(),
            SolutionType::DrivenTerminal
        );
        assert_eq!("EIGENMODE".parse::<SolutionType>().unwrap(), SolutionType::Eigenmode);
    }

    #[test]
    fn unknown_token_is_rejected() {
        let err = "foobar".parse::<SolutionType>().unwrap_err();
        assert_eq!(
            err,
            ParseTokenError::SolutionType {
                token: "foobar".into()
            }
        );
    }

    #[test]
    fn default_is_driven_modal() {
        assert_eq!(SolutionType::default().script_token(), "DrivenModal");
    }
}
