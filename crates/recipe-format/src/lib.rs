//! JSON recipes: an ordered list of emitter steps kept as data and rendered
//! to a macro script on demand.

pub mod errors;
pub mod load;
pub mod metadata;
pub mod migrate;
pub mod recipe;
pub mod render;
pub mod save;

pub use errors::{LoadError, RenderError};
pub use load::load_recipe;
pub use metadata::RecipeMetadata;
pub use recipe::{Recipe, Step};
pub use render::{render_recipe, render_to_string, write_script_file};
pub use save::{save_recipe, FORMAT_ID, FORMAT_VERSION};
