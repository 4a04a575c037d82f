//! # Functional-impact annotation of single-nucleotide variants
//!
//! This library looks each variant of a CSV input up in a precomputed,
//! tabix-indexed score database and writes a tab-separated table with one
//! row per input line.
//!
//! ## Pipeline
//!
//! 1. **Query building**: validate `chromosome,position,ref,alt` lines and turn
//!    them into 1-based single-base range queries
//! 2. **Dispatch**: run lookups on a bounded worker pool
//! 3. **Reconciliation**: match returned records against the expected
//!    chromosome, position and alleles
//! 4. **Output**: malformed lines first, then query rows in input order
//!
//! Per-line and per-query problems never abort a run; they are reported in
//! the table's message column.
//!
//! ## Usage Example
//!
//! ```no_run
//! use snv_annotator::{Annotator, AnnotatorConfig};
//!
//! let config = AnnotatorConfig::new("variants.csv", "scores.tsv", "scores.tsv.gz")
//!     .with_threads(4);
//! let summary = Annotator::new(config).run()?;
//! println!("{} predictions", summary.success);
//! # Ok::<(), snv_annotator::AnnotatorError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod annotation; // Query building, lookup, reconciliation, output
pub mod config;     // Run configuration

pub use annotation::{
    build_queries, reconcile, render_results, write_results, Base, Classification,
    ClassifiedResult, CommandLookup, HtslibLookup, LookupOutcome, LookupService, Query,
    QueryBatch, QueryDispatcher, ResultRow, VariantRecord,
};
pub use config::{AnnotatorConfig, LookupBackend};

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::path::PathBuf;

use thiserror::Error;
use tracing::info;

/// Errors that stop a run before or after the lookups.
#[derive(Error, Debug)]
pub enum AnnotatorError {
    /// Input file is missing or not a regular file
    #[error("input file {} does not exist", .0.display())]
    MissingInput(PathBuf),

    /// Database file is missing or not a regular file
    #[error("database file {} does not exist", .0.display())]
    MissingDatabase(PathBuf),

    /// Reading the input failed
    #[error("failed to read {}: {source}", path.display())]
    Input {
        /// File being read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Creating or writing the output failed
    #[error("failed to write {}: {reason:#}", path.display())]
    Output {
        /// File being written
        path: PathBuf,
        /// Underlying error
        reason: anyhow::Error,
    },

    /// Worker pool could not be created
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Counts of row dispositions for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines rejected by validation
    pub malformed: usize,
    /// Lookups issued
    pub queries: usize,
    /// Queries with a matching record
    pub success: usize,
    /// Queries with no matching record
    pub no_prediction: usize,
    /// Queries classified as warnings
    pub warnings: usize,
    /// Queries classified as errors
    pub errors: usize,
}

impl RunSummary {
    /// Tally the dispositions of a finished table.
    pub fn from_rows(rows: &[ResultRow]) -> Self {
        let mut summary = Self::default();
        for row in rows {
            match row {
                ResultRow::FormatError { .. } => summary.malformed += 1,
                ResultRow::Query(result) => {
                    summary.queries += 1;
                    match result.classification {
                        Classification::Success(_) => summary.success += 1,
                        Classification::NoPredictionFound => summary.no_prediction += 1,
                        Classification::Warning(_) => summary.warnings += 1,
                        Classification::Error(_) => summary.errors += 1,
                    }
                }
            }
        }
        summary
    }

    /// Total rows written below the header.
    pub fn rows(&self) -> usize {
        self.malformed + self.queries
    }
}

/// Build the complete, ordered table for a set of input lines.
///
/// Format-error rows come first in encounter order, followed by one row per
/// valid line in input order.
pub fn annotate_lines<I, S, L>(
    lines: I,
    dispatcher: &QueryDispatcher,
    lookup: &L,
) -> Vec<ResultRow>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    L: LookupService + ?Sized,
{
    let batch = build_queries(lines);
    info!(
        queries = batch.queries.len(),
        malformed = batch.format_errors.len(),
        threads = dispatcher.threads(),
        "dispatching lookups"
    );

    let results = dispatcher.dispatch(&batch.queries, lookup);
    let mut rows = batch.format_errors;
    rows.extend(results.into_iter().map(ResultRow::Query));
    rows
}

/// Annotation run orchestrator
#[derive(Debug)]
pub struct Annotator {
    config: AnnotatorConfig,
}

impl Annotator {
    /// Create a new annotator for a configuration.
    pub fn new(config: AnnotatorConfig) -> Self {
        Self { config }
    }

    /// Configuration this annotator runs with.
    pub fn config(&self) -> &AnnotatorConfig {
        &self.config
    }

    /// Read the input, look every variant up, and write the table.
    pub fn run(&self) -> Result<RunSummary, AnnotatorError> {
        self.config.validate()?;

        let lines = self.read_input()?;
        let dispatcher = QueryDispatcher::new(self.config.threads)?;
        let lookup = self.lookup_service();
        let rows = annotate_lines(lines, &dispatcher, lookup.as_ref());

        self.write_output(&rows)?;

        let summary = RunSummary::from_rows(&rows);
        info!(
            rows = summary.rows(),
            success = summary.success,
            no_prediction = summary.no_prediction,
            warnings = summary.warnings,
            errors = summary.errors,
            malformed = summary.malformed,
            "annotation complete"
        );
        Ok(summary)
    }

    fn lookup_service(&self) -> Box<dyn LookupService> {
        match self.config.backend {
            LookupBackend::Command => Box::new(CommandLookup::new(
                &self.config.lookup_tool,
                &self.config.database,
            )),
            LookupBackend::Htslib => Box::new(HtslibLookup::new(&self.config.database)),
        }
    }

    fn read_input(&self) -> Result<Vec<String>, AnnotatorError> {
        let input_error = |source: std::io::Error| AnnotatorError::Input {
            path: self.config.input.clone(),
            source,
        };
        let reader = BufReader::new(File::open(&self.config.input).map_err(input_error)?);
        reader
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .map_err(input_error)
    }

    fn write_output(&self, rows: &[ResultRow]) -> Result<(), AnnotatorError> {
        let output_error = |reason: anyhow::Error| AnnotatorError::Output {
            path: self.config.output.clone(),
            reason,
        };
        let file = File::create(&self.config.output)
            .map_err(|err| output_error(anyhow::Error::new(err)))?;
        let mut writer = BufWriter::new(file);
        write_results(&mut writer, rows).map_err(output_error)
    }
}
