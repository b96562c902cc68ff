//! `wrongbook generate` command implementation.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use clap::{Args, ValueEnum};

use wrongbook_config::{CliSettings, Config};
use wrongbook_record::Notebook;
use wrongbook_renderer::{GroupingMode, RenderOptions, render_notebook};

use crate::error::CliError;
use crate::output::Output;

/// Group layout choices on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum GroupingArg {
    /// Switchable panels, one per exam, in first-seen order.
    Tabbed,
    /// Stacked sections sorted by exam label.
    Flat,
}

impl From<GroupingArg> for GroupingMode {
    fn from(arg: GroupingArg) -> Self {
        match arg {
            GroupingArg::Tabbed => Self::Tabbed,
            GroupingArg::Flat => Self::Flat,
        }
    }
}

/// Arguments for the generate command.
#[derive(Args)]
pub(crate) struct GenerateArgs {
    /// Notebook JSON record to render.
    input: PathBuf,

    /// Output HTML file (default: input path with .html extension).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Inline image bytes into the document so it has no file dependencies.
    #[arg(long)]
    embed_images: bool,

    /// Group layout (overrides config).
    #[arg(long, value_enum)]
    grouping: Option<GroupingArg>,

    /// Path to configuration file (default: auto-discover wrongbook.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl GenerateArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            embed_images: self.embed_images.then_some(true),
            grouping: self.grouping.map(Into::into),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let notebook = Notebook::load(&self.input)?;
        output.info(&format!(
            "Loaded {} question(s) from {}",
            notebook.questions.len(),
            self.input.display()
        ));
        if notebook.questions.is_empty() {
            output.warning("Notebook has no questions; generating an empty document");
        }

        let options = RenderOptions {
            embed_images: config.render.embed_images,
            grouping: config.render.grouping,
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        };
        let html = render_notebook(&notebook, &options);

        let output_path = self
            .output
            .unwrap_or_else(|| default_output_path(&self.input, config.output_dir.as_deref()));
        if let Some(parent) = output_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output_path, html)?;

        output.success(&format!("Notebook written to {}", output_path.display()));
        Ok(())
    }
}

/// Default output location: the input filename with an `.html` extension,
/// placed in the configured output directory when one is set.
fn default_output_path(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let file = input.with_extension("html");
    if let Some(dir) = output_dir
        && let Some(name) = file.file_name()
    {
        return dir.join(name);
    }
    file
}
