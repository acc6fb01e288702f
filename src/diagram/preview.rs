use colored::Colorize;

use crate::diagram::{ParsedDiagram, PathEntry};

const DIRECTORY_TAG: &str = "[DIR]";
const FILE_TAG: &str = "[FILE]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Plain,
    Colored,
}

/// One `[DIR] path` / `[FILE] path` line per entry, in diagram order.
pub fn preview_lines(parsed: &ParsedDiagram, palette: Palette) -> Vec<String> {
    parsed
        .entries
        .iter()
        .map(|entry| preview_line(entry, palette))
        .collect()
}

pub fn preview_line(entry: &PathEntry, palette: Palette) -> String {
    let tag = if entry.is_directory() {
        DIRECTORY_TAG
    } else {
        FILE_TAG
    };
    match palette {
        Palette::Plain => format!("{tag} {entry}"),
        Palette::Colored if entry.is_directory() => {
            format!("{} {}", tag.blue().bold(), entry.to_string().blue().bold())
        }
        Palette::Colored => format!("{} {}", tag.green(), entry),
    }
}

pub fn summary(parsed: &ParsedDiagram) -> String {
    let directories = parsed
        .entries
        .iter()
        .filter(|entry| entry.is_directory())
        .count();
    let files = parsed.entries.len() - directories;
    format!(
        "{} {}, {} {}",
        directories,
        if directories == 1 { "directory" } else { "directories" },
        files,
        if files == 1 { "file" } else { "files" }
    )
}
