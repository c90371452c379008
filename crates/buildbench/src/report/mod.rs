//! Report generation over a finished benchmark.
//!
//! Generators render one [`BenchmarkResult`] into a comparable artifact,
//! scenarios as columns in aggregate order. All access to the result is
//! read-only, so independent generators may render the same aggregate
//! concurrently.

mod csv;
mod json;

pub use self::csv::CsvGenerator;
pub use self::json::JsonGenerator;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::results::BenchmarkResult;

/// Renders a benchmark aggregate into an output artifact.
pub trait ReportGenerator {
    /// Path of the artifact this generator produces.
    fn output_file(&self) -> &Path;

    /// Render `result` into `writer` in a single forward pass.
    fn write_report(&self, result: &BenchmarkResult, writer: &mut dyn Write) -> Result<()>;

    /// Render `result` into [`output_file`](ReportGenerator::output_file).
    ///
    /// An I/O failure is fatal for this report; partial output may remain
    /// on disk.
    fn generate(&self, result: &BenchmarkResult) -> Result<()> {
        let path = self.output_file();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create report directory {}", parent.display())
                })?;
            }
        }
        let file = File::create(path)
            .with_context(|| format!("failed to create report file {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        self.write_report(result, &mut writer)?;
        writer
            .flush()
            .with_context(|| format!("failed to write report file {}", path.display()))?;
        info!(path = %path.display(), "wrote benchmark report");
        Ok(())
    }
}

/// Host name for report metadata.
///
/// Lookup failure is logged and substituted with an empty string; it never
/// aborts report generation.
fn lookup_hostname() -> String {
    match hostname::get() {
        Ok(name) => name.to_string_lossy().into_owned(),
        Err(error) => {
            warn!(%error, "could not determine hostname");
            String::new()
        }
    }
}

/// Canonical form of the report path, falling back to the configured path
/// when canonicalization fails (e.g. the file does not exist yet).
fn canonical_path(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
