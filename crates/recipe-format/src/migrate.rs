use crate::errors::LoadError;
use crate::recipe::Step;

/// Apply format migrations from `from_version` to `to_version`.
///
/// Migrations are applied sequentially: v1→v2, v2→v3, etc.
/// Version 1 is the only version so far.
pub fn migrate(steps: Vec<Step>, from_version: u32, to_version: u32) -> Result<Vec<Step>, LoadError> {
    if from_version != to_version {
        return Err(LoadError::MigrationFailed {
            from: from_version,
            to: to_version,
            reason: format!("no migration path from v{from_version} to v{to_version}"),
        });
    }
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_version_is_identity() {
        let steps = vec![Step::NewProject];
        assert_eq!(migrate(steps.clone(), 1, 1).unwrap(), steps);
    }

    #[test]
    fn unknown_path_fails() {
        let err = migrate(Vec::new(), 0, 1).unwrap_err();
        assert!(matches!(err, LoadError::MigrationFailed { from: 0, to: 1, .. }));
    }
}
