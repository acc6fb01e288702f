use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    application::data::{ColorChoice, LogLevel},
    cli::DiagramSource,
};

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Render directory trees as text diagrams and build them back")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
    #[clap(long, short, default_value = "warn", value_enum, global = true)]
    pub log_level: LogLevel,
    #[clap(long, default_value = "auto", value_enum, global = true)]
    pub color: ColorChoice,

    /// Settings file with extra templates and presets [default: ./filetree.yaml if present]
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List the entries of a directory that can be selected for rendering
    List { directory: PathBuf },

    /// Render a directory as a tree diagram
    Render {
        directory: PathBuf,
        /// Top-level entry to include, may be repeated [default: all entries]
        #[clap(long = "include", short)]
        include: Vec<String>,
        /// Also save the diagram to this file (`.tree` is added if there is no extension)
        #[clap(long, short)]
        output: Option<PathBuf>,
    },

    /// Show the files and directories a diagram describes
    Preview {
        #[command(flatten)]
        source: DiagramSource,
    },

    /// Create the directories and files a diagram describes
    Build {
        #[command(flatten)]
        source: DiagramSource,
        /// Directory to create the structure in
        #[clap(long, short)]
        dest: PathBuf,
        /// Create the diagram's root directory inside the destination
        #[clap(long)]
        nest_root: bool,
    },

    /// Pack the structure a diagram describes into a zip archive
    Export {
        #[command(flatten)]
        source: DiagramSource,
        /// Archive to write
        #[clap(long, short)]
        output: PathBuf,
        /// Put the diagram's root directory at the top of the archive
        #[clap(long)]
        nest_root: bool,
    },

    /// Work with the preset catalog
    Presets {
        #[command(subcommand)]
        action: PresetsCommand,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum PresetsCommand {
    /// List every preset with its short name
    List,
    /// Print a preset's diagram
    Show { name: String },
    /// Save a preset's diagram to a file for editing
    Save { name: String, file: PathBuf },
}
