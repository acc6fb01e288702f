//! Turning parsed diagrams into real directories, files and archives.
//!
//! Every batch is first checked as a whole through an in-memory
//! [`tree::FilesystemNode`] plan, so entries that cannot coexist are rejected
//! before anything is written.

mod archive;
mod materialize;
mod tree;

pub use archive::{ArchiveError, ZipExporter};
pub use materialize::{MaterializeError, Materializer, RootPlacement};
