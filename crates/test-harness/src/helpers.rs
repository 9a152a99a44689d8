//! Helper functions: error type, hole builders, literal parsing.

use hfss_types::{Axis, HoleSpec, Point3};

// ── Error Type ──────────────────────────────────────────────────────────────

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("emit error in {step}: {source}")]
    Emit {
        step: String,
        #[source]
        source: macro_emitter::EmitError,
    },

    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },

    #[error("duplicate name: {name}")]
    DuplicateName { name: String },
}

// ── Builders ────────────────────────────────────────────────────────────────

/// A hole request.
pub fn hole(center: [f64; 3], radius: f64, axis: Axis) -> HoleSpec {
    HoleSpec {
        center: Point3::from(center),
        radius,
        axis,
    }
}

// ── Literal Parsing ─────────────────────────────────────────────────────────

/// Parse a `<number><unit>` literal (quotes already removed).
pub fn parse_length(literal: &str, unit: &str) -> Option<f64> {
    literal.strip_suffix(unit)?.parse().ok()
}

/// `[x, y, z]` read from three entries such as `XCenter`, `YCenter`,
/// `ZCenter`.
pub fn parse_triple(
    stmt: &crate::Statement,
    keys: [&str; 3],
    unit: &str,
) -> Option<[f64; 3]> {
    let mut out = [0.0; 3];
    for (slot, key) in out.iter_mut().zip(keys) {
        *slot = parse_length(&stmt.value(key)?, unit)?;
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_length_strips_unit() {
        assert_eq!(parse_length("0.1in", "in"), Some(0.1));
        assert_eq!(parse_length("-4.5mm", "mm"), Some(-4.5));
        assert_eq!(parse_length("3meter", "mm"), None);
    }
}
