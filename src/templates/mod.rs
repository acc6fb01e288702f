//! Default file contents used when materializing a diagram.

mod registry;

pub use registry::TemplateRegistry;
