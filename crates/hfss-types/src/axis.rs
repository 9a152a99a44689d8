use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ParseTokenError;

/// One of the three principal axes of the global coordinate system.
///
/// Parsed case-insensitively, always written uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    #[serde(alias = "x")]
    X,
    #[serde(alias = "y")]
    Y,
    #[serde(alias = "z")]
    Z,
}

/// Per-axis lookup entry: which component an axis addresses and which axis
/// follows it in the right-hand cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRule {
    pub index: usize,
    pub successor: Axis,
}

const AXIS_TABLE: [AxisRule; 3] = [
    AxisRule {
        index: 0,
        successor: Axis::Y,
    },
    AxisRule {
        index: 1,
        successor: Axis::Z,
    },
    AxisRule {
        index: 2,
        successor: Axis::X,
    },
];

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// The lookup-table entry for this axis.
    pub fn rule(self) -> &'static AxisRule {
        &AXIS_TABLE[self as usize]
    }

    /// Component index into `[x, y, z]`.
    pub fn index(self) -> usize {
        self.rule().index
    }

    /// Next axis in the cyclic right-hand ordering X → Y → Z → X.
    pub fn successor(self) -> Axis {
        self.rule().successor
    }

    /// The axis perpendicular to both `self` and `other`, or `None` when they
    /// coincide.
    pub fn third(self, other: Axis) -> Option<Axis> {
        if self == other {
            return None;
        }
        Axis::ALL.into_iter().find(|a| *a != self && *a != other)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "X" => Ok(Axis::X),
            "Y" => Ok(Axis::Y),
            "Z" => Ok(Axis::Z),
            _ => Err(ParseTokenError::Axis {
                token: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successor_cycles_right_handed() {
        assert_eq!(Axis::X.successor(), Axis::Y);
        assert_eq!(Axis::Y.successor(), Axis::Z);
        assert_eq!(Axis::Z.successor(), Axis::X);
    }

    #[test]
    fn table_indices_match_components() {
        for (i, axis) in Axis::ALL.into_iter().enumerate() {
            assert_eq!(axis.index(), i);
            assert_ne!(axis.successor(), axis);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("x".parse::<Axis>().unwrap(), Axis::X);
        assert_eq!("Y".parse::<Axis>().unwrap(), Axis::Y);
        assert_eq!(" z ".parse::<Axis>().unwrap(), Axis::Z);
        assert!(matches!(
            "w".parse::<Axis>(),
            Err(ParseTokenError::Axis { .. })
        ));
    }

    #[test]
    fn third_axis() {
        assert_eq!(Axis::X.third(Axis::Y), Some(Axis::Z));
        assert_eq!(Axis::Z.third(Axis::Y), Some(Axis::X));
        assert_eq!(Axis::Y.third(Axis::Y), None);
    }
}
