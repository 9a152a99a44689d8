//! Assertion helpers with diagnostic output.
//!
//! Every failure includes the expected and actual values plus the context
//! string passed by the caller.

use crate::helpers::HarnessError;
use crate::statement::{tokenize, Statement};

/// Statements whose head equals `head`.
pub fn statements_with_head(script: &str, head: &str) -> Vec<Statement> {
    tokenize(script)
        .into_iter()
        .filter(|s| s.head().as_deref() == Some(head))
        .collect()
}

/// All `Name:=` values in the script, in emission order.
pub fn object_names(script: &str) -> Vec<String> {
    tokenize(script)
        .iter()
        .flat_map(|s| s.values("Name"))
        .collect()
}

/// Assert the script names exactly `expected`, in order.
pub fn assert_names(script: &str, expected: &[&str], ctx: &str) -> Result<(), HarnessError> {
    let actual = object_names(script);
    if actual.iter().map(String::as_str).eq(expected.iter().copied()) {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!("[{}] expected names {:?}, got {:?}", ctx, expected, actual),
        })
    }
}

/// Assert the number of statements with a given head.
pub fn assert_statement_count(
    script: &str,
    head: &str,
    expected: usize,
    ctx: &str,
) -> Result<(), HarnessError> {
    let actual = statements_with_head(script, head).len();
    if actual == expected {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] expected {} `{}` statements, got {}",
                ctx, expected, head, actual
            ),
        })
    }
}

/// Assert an entry of a statement has the given value.
pub fn assert_entry(
    stmt: &Statement,
    key: &str,
    expected: &str,
    ctx: &str,
) -> Result<(), HarnessError> {
    match stmt.value(key) {
        Some(v) if v == expected => Ok(()),
        other => Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] line {}: expected {}={:?}, got {:?}",
                ctx, stmt.line, key, expected, other
            ),
        }),
    }
}
