mod cli;
mod diagram_source;

pub use cli::{Cli, Command, PresetsCommand};
pub use diagram_source::DiagramSource;
