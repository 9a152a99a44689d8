pub mod axis;
pub mod design;
pub mod dipole;
pub mod errors;
pub mod point;
pub mod shape;

pub use axis::*;
pub use design::*;
pub use dipole::*;
pub use errors::ParseTokenError;
pub use point::*;
pub use shape::*;
