//! Run configuration
//!
//! One immutable value carries everything a run needs: the three file paths,
//! the worker count and the lookup backend.

use std::path::{Path, PathBuf};

use crate::AnnotatorError;

/// Default external lookup executable.
pub const DEFAULT_LOOKUP_TOOL: &str = "tabix";

/// How database records are fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LookupBackend {
    /// Spawn the external lookup tool once per query.
    #[default]
    Command,
    /// Read the tabix index in-process with htslib.
    Htslib,
}

/// Parameters for one annotation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatorConfig {
    /// CSV of `chromosome,position,ref,alt` lines.
    pub input: PathBuf,

    /// Destination of the TSV table.
    pub output: PathBuf,

    /// Bgzipped, tabix-indexed score database.
    pub database: PathBuf,

    /// Number of concurrent lookups (at least one).
    pub threads: usize,

    /// Executable used by the command backend.
    pub lookup_tool: PathBuf,

    /// Lookup backend.
    pub backend: LookupBackend,
}

impl AnnotatorConfig {
    /// Single-threaded configuration using the external `tabix` command.
    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        database: impl Into<PathBuf>,
    ) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            database: database.into(),
            threads: 1,
            lookup_tool: PathBuf::from(DEFAULT_LOOKUP_TOOL),
            backend: LookupBackend::Command,
        }
    }

    /// Set the worker count; zero is raised to one.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    /// Use a different lookup executable.
    pub fn with_lookup_tool(mut self, tool: impl Into<PathBuf>) -> Self {
        self.lookup_tool = tool.into();
        self
    }

    /// Select the lookup backend.
    pub fn with_backend(mut self, backend: LookupBackend) -> Self {
        self.backend = backend;
        self
    }

    /// Check that the input and database exist before any work starts.
    pub fn validate(&self) -> Result<(), AnnotatorError> {
        if !is_file(&self.input) {
            return Err(AnnotatorError::MissingInput(self.input.clone()));
        }
        if !is_file(&self.database) {
            return Err(AnnotatorError::MissingDatabase(self.database.clone()));
        }
        Ok(())
    }
}

fn is_file(path: &Path) -> bool {
    path.metadata().map(|meta| meta.is_file()).unwrap_or(false)
}
