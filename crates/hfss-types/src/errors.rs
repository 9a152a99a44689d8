/// A caller-supplied token did not name any known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseTokenError {
    #[error("unknown axis {token:?}, expected one of X, Y, Z")]
    Axis { token: String },

    #[error("unknown dipole type {token:?}, expected cylindrical (c), cuboid (r) or strip (s)")]
    DipoleKind { token: String },

    #[error(
        "unknown solution type {token:?}, expected \"driven modal\", \"driven terminal\" or \"eigenmode\""
    )]
    SolutionType { token: String },
}
