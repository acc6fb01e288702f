//! Built-in starting diagrams and `.tree` files.

mod builtin;
mod catalog;
mod store;

pub use catalog::{PresetCatalog, PresetLookupError, slugify};
pub use store::{PresetFileError, load_diagram, save_diagram};
