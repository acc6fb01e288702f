use std::{
    io::{self, Read, Write},
    path::Path,
};

use colored::Colorize;
use snafu::prelude::*;
use tracing::{debug, error, info};

use crate::application::application::*;
use crate::cli::DiagramSource;
use crate::diagram::{
    Palette, ParsedDiagram, RenderRequest, list_children, parse, parse_bytes, preview_lines,
    render, summary,
};
use crate::ext::BestEffortPathExt;
use crate::filesystem::{Materializer, RootPlacement, ZipExporter};
use crate::presets::{load_diagram, save_diagram, slugify};

impl Application {
    pub(super) fn list(&self, directory: &Path, out: &mut impl Write) -> Result<(), ApplicationError> {
        let children = list_children(directory).context(RenderSnafu)?;
        info!(
            "Loaded {} items from {}",
            children.len(),
            directory.best_effort_path_display()
        );
        for child in children {
            writeln!(out, "{}", child.display_name()).context(OutputSnafu)?;
        }
        Ok(())
    }

    pub(super) fn render(
        &self,
        request: &RenderRequest,
        output: Option<&Path>,
        out: &mut impl Write,
    ) -> Result<(), ApplicationError> {
        let diagram = render(request).context(RenderSnafu)?;
        writeln!(out, "{diagram}").context(OutputSnafu)?;

        if let Some(output) = output {
            let saved = save_diagram(output, &diagram).context(SaveSnafu)?;
            info!("Diagram saved to {}", saved.best_effort_path_display());
        }
        Ok(())
    }

    pub(super) fn preview(&self, source: &DiagramSource, out: &mut impl Write) -> Result<(), ApplicationError> {
        let parsed = self.read_diagram(source)?;

        for line in preview_lines(&parsed, self.config.palette) {
            writeln!(out, "{line}").context(OutputSnafu)?;
        }
        for issue in &parsed.issues {
            writeln!(out, "{}", self.warning(&issue.to_string())).context(OutputSnafu)?;
        }
        writeln!(out, "{}", summary(&parsed)).context(OutputSnafu)?;

        parsed.validated().context(InvalidDiagramSnafu)?;
        Ok(())
    }

    pub(super) fn build(
        &self,
        source: &DiagramSource,
        destination: &Path,
        placement: RootPlacement,
        out: &mut impl Write,
    ) -> Result<(), ApplicationError> {
        let parsed = self
            .read_diagram(source)?
            .validated()
            .context(InvalidDiagramSnafu)?;
        let target = placement.target(destination, parsed.root.as_deref());

        let report = Materializer::new(&self.templates)
            .materialize(&target, &parsed.entries)
            .inspect_err(|err| {
                if let Some(path) = err.path() {
                    error!(
                        "Stopped at {}{}",
                        path.best_effort_path_display(),
                        if err.is_access_denied() { " (permission denied)" } else { "" }
                    );
                }
            })
            .context(BuildSnafu {
                destination: target.clone(),
            })?;

        writeln!(
            out,
            "Created {} directories and {} files in {}",
            report.directories,
            report.files,
            target.best_effort_path_display()
        )
        .context(OutputSnafu)?;
        Ok(())
    }

    pub(super) fn export(
        &self,
        source: &DiagramSource,
        archive_path: &Path,
        placement: RootPlacement,
        out: &mut impl Write,
    ) -> Result<(), ApplicationError> {
        let parsed = self
            .read_diagram(source)?
            .validated()
            .context(InvalidDiagramSnafu)?;

        ZipExporter::new(&self.templates, placement)
            .export(parsed.root.as_deref(), &parsed.entries, archive_path)
            .context(ExportSnafu)?;

        writeln!(
            out,
            "Tree structure zipped to: {}",
            archive_path.best_effort_path_display()
        )
        .context(OutputSnafu)?;
        Ok(())
    }

    pub(super) fn list_presets(&self, out: &mut impl Write) -> Result<(), ApplicationError> {
        let width = self
            .presets
            .iter()
            .map(|(label, _)| slugify(label).len())
            .max()
            .unwrap_or_default();
        for (label, _) in self.presets.iter() {
            writeln!(out, "{:<width$}  {}", slugify(label), label).context(OutputSnafu)?;
        }
        Ok(())
    }

    pub(super) fn show_preset(&self, name: &str, out: &mut impl Write) -> Result<(), ApplicationError> {
        let diagram = self.presets.get(name).context(PresetSnafu)?;
        writeln!(out, "{diagram}").context(OutputSnafu)?;
        Ok(())
    }

    pub(super) fn save_preset(&self, name: &str, file: &Path, out: &mut impl Write) -> Result<(), ApplicationError> {
        let diagram = self.presets.get(name).context(PresetSnafu)?;
        let saved = save_diagram(file, diagram).context(SaveSnafu)?;
        writeln!(out, "Preset saved to: {}", saved.best_effort_path_display()).context(OutputSnafu)?;
        Ok(())
    }

    fn read_diagram(&self, source: &DiagramSource) -> Result<ParsedDiagram, ApplicationError> {
        if let Some(name) = &source.preset {
            debug!("Using preset '{}'", name);
            let diagram = self.presets.get(name).context(PresetSnafu)?;
            return Ok(parse(diagram));
        }

        let bytes = match source.file() {
            Some(path) => load_diagram(path).context(DiagramSourceSnafu)?,
            None => {
                debug!("Reading diagram from standard input");
                let mut bytes = Vec::new();
                io::stdin().read_to_end(&mut bytes).context(StdinSnafu)?;
                bytes
            }
        };
        let parsed = parse_bytes(&bytes);
        if !parsed.is_clean() {
            debug!("Diagram parsed with {} issue(s)", parsed.issues.len());
        }
        Ok(parsed)
    }

    fn warning(&self, message: &str) -> String {
        match self.config.palette {
            Palette::Plain => format!("warning: {message}"),
            Palette::Colored => format!("{} {}", "warning:".yellow().bold(), message),
        }
    }
}
