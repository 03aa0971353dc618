use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{error, info, warn};
use xlsx2seed_core::{SheetConfig, SheetModel};
use xlsx2seed_workbook::{SheetLoader, SpreadsheetReader};

use crate::rules::SheetRules;
use crate::writer;

/// Per-run settings that are not part of the sheet config.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub files: Vec<PathBuf>,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub stdout: bool,
    pub require_version: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetOutcome {
    NotSelected,
    Ignored,
    MissingIdColumn,
    Written(Vec<PathBuf>),
    Printed,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub sheets: Vec<(String, SheetOutcome)>,
    pub failures: Vec<(PathBuf, anyhow::Error)>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn outcome(&self, sheet: &str) -> Option<&SheetOutcome> {
        self.sheets
            .iter()
            .find(|(name, _)| name == sheet)
            .map(|(_, outcome)| outcome)
    }
}

/// Flush the seed stream and turn the run into an exit status.
///
/// A flush failure (a closed pipe in stdout mode) fails the run.
pub fn finish(summary: &RunSummary, out: &mut dyn Write) -> ExitCode {
    if let Err(err) = out.flush() {
        error!("failed to flush output: {err}");
        return ExitCode::FAILURE;
    }
    if summary.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Converts every requested workbook.
///
/// Each sheet is handled on its own: a skipped sheet or a failing file is
/// recorded and the run moves on.
pub struct Orchestrator<'a> {
    options: &'a RunOptions,
    config: &'a SheetConfig,
    rules: &'a SheetRules,
}

impl<'a> Orchestrator<'a> {
    pub fn new(options: &'a RunOptions, config: &'a SheetConfig, rules: &'a SheetRules) -> Self {
        Self {
            options,
            config,
            rules,
        }
    }

    /// Workbook paths are relative to the input directory unless absolute.
    pub fn resolve_path(&self, file: &Path) -> PathBuf {
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            self.options.input_dir.join(file)
        }
    }

    /// Run every file. `out` receives the YAML stream in stdout mode.
    pub fn run(&self, out: &mut dyn Write) -> RunSummary {
        let total = Instant::now();
        let mut summary = RunSummary::default();
        info!("output-directory: {}", self.options.output_dir.display());

        for file in &self.options.files {
            let path = self.resolve_path(file);
            info!(file = %file.display(), full_path = %path.display(), "reading workbook");
            if let Err(err) = self.run_file(&path, out, &mut summary) {
                error!("{}: {err:#}", path.display());
                summary.failures.push((path, err));
            }
        }

        info!(elapsed_ms = total.elapsed().as_millis() as u64, "total");
        summary
    }

    fn run_file(&self, path: &Path, out: &mut dyn Write, summary: &mut RunSummary) -> Result<()> {
        let mut loader = SheetLoader::open(path)
            .with_context(|| format!("failed to open workbook {}", path.display()))?;
        info!(elapsed_ms = loader.stats().open_time_ms, "parsetime");

        for sheet_name in loader.sheet_names()? {
            match self.run_sheet(&mut loader, &sheet_name, out) {
                Ok(outcome) => summary.sheets.push((sheet_name, outcome)),
                Err(err) => {
                    error!(sheet = %sheet_name, "{err:#}");
                    summary.failures.push((path.to_path_buf(), err));
                }
            }
        }

        let stats = loader.stats();
        info!(
            sheets = stats.sheets_loaded,
            rows = stats.rows_loaded,
            read_ms = stats.backend_read_time_ms,
            "readtime"
        );
        Ok(())
    }

    fn run_sheet<B>(
        &self,
        loader: &mut SheetLoader<B>,
        sheet_name: &str,
        out: &mut dyn Write,
    ) -> Result<SheetOutcome>
    where
        B: SpreadsheetReader,
    {
        if !self.rules.selects(sheet_name) {
            return Ok(SheetOutcome::NotSelected);
        }
        if self.rules.is_ignored(sheet_name) {
            info!(sheet = sheet_name, "ignore: skip");
            return Ok(SheetOutcome::Ignored);
        }

        let sheet = loader
            .load_sheet(sheet_name, self.config)
            .with_context(|| format!("failed to read sheet {sheet_name}"))?;
        self.emit(&sheet, out)
    }

    /// Map one loaded sheet and hand its groups to the writer.
    pub fn emit(&self, sheet: &SheetModel, out: &mut dyn Write) -> Result<SheetOutcome> {
        let sheet_name = sheet.sheet_name();
        if !sheet.has_id_column() {
            warn!(sheet = sheet_name, "id column not found -> skip!");
            return Ok(SheetOutcome::MissingIdColumn);
        }

        let subdivision = self.rules.subdivision(sheet_name);
        if subdivision.is_subdivided() {
            info!(
                sheet = sheet_name,
                cut_prefix = subdivision.cut_prefix.unwrap_or(0),
                cut_postfix = subdivision.cut_postfix.unwrap_or(0),
                "subdivide"
            );
        }

        let write = Instant::now();
        let data = sheet.data(self.config, &self.options.require_version);
        let outcome = if self.options.stdout {
            let text = writer::render_sheet_document(&data)?;
            out.write_all(text.as_bytes())
                .context("failed to write to stdout")?;
            SheetOutcome::Printed
        } else {
            let written =
                writer::write_single_or_separated(&self.options.output_dir, &data, subdivision)?;
            SheetOutcome::Written(written)
        };
        info!(
            sheet = sheet_name,
            records = data.len(),
            elapsed_ms = write.elapsed().as_millis() as u64,
            "writetime"
        );
        Ok(outcome)
    }
}
