use std::path::{Path, PathBuf};
use std::process::Command;

use rust_htslib::tbx::{self, Read};
use tracing::warn;

use super::types::{LookupOutcome, Query};

/// Source of raw database records for a single-base locus.
///
/// Implementations must not interpret record content; reconciliation happens
/// downstream. Calls are independent and may run concurrently.
pub trait LookupService: Send + Sync {
    /// Fetch the raw records overlapping the query's range.
    fn lookup(&self, query: &Query) -> LookupOutcome;
}

impl<F> LookupService for F
where
    F: Fn(&Query) -> LookupOutcome + Send + Sync,
{
    fn lookup(&self, query: &Query) -> LookupOutcome {
        self(query)
    }
}

/// Runs `<tool> <database> <range>` as a child process, one per query.
#[derive(Debug, Clone)]
pub struct CommandLookup {
    tool: PathBuf,
    database: PathBuf,
}

impl CommandLookup {
    /// Create a client for the given lookup executable and database.
    pub fn new(tool: impl Into<PathBuf>, database: impl Into<PathBuf>) -> Self {
        Self {
            tool: tool.into(),
            database: database.into(),
        }
    }

    /// Short tool name used in failure messages.
    pub fn tool_name(&self) -> String {
        display_name(&self.tool)
    }

    fn failed(&self, query: &Query, detail: String) -> LookupOutcome {
        warn!(range = query.range(), tool = %self.tool.display(), "lookup failed: {detail}");
        LookupOutcome::Failed {
            tool: self.tool_name(),
            detail,
        }
    }
}

impl LookupService for CommandLookup {
    fn lookup(&self, query: &Query) -> LookupOutcome {
        let output = match Command::new(&self.tool)
            .arg(&self.database)
            .arg(query.range())
            .output()
        {
            Ok(output) => output,
            Err(err) => return self.failed(query, format!("failed to spawn: {err}")),
        };

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            return self.failed(query, stderr.trim().to_string());
        }
        if !output.status.success() {
            return self.failed(query, format!("exited with {}", output.status));
        }

        LookupOutcome::from_stdout(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Queries the tabix-indexed database in-process through htslib.
#[derive(Debug, Clone)]
pub struct HtslibLookup {
    database: PathBuf,
}

impl HtslibLookup {
    /// Name reported when an htslib call fails.
    pub const TOOL_NAME: &'static str = "htslib";

    /// Create a reader factory for the given bgzipped, tabix-indexed file.
    pub fn new(database: impl Into<PathBuf>) -> Self {
        Self {
            database: database.into(),
        }
    }

    fn fetch(&self, query: &Query) -> Result<LookupOutcome, rust_htslib::errors::Error> {
        let mut reader = tbx::Reader::from_path(&self.database)?;
        let record = query.record();
        // Unknown contigs produce no output from the command-line tool either.
        let tid = match reader.tid(&record.chrom) {
            Ok(tid) => tid,
            Err(_) => return Ok(LookupOutcome::Empty),
        };
        reader.fetch(tid, record.position, record.one_based())?;

        let mut lines = Vec::new();
        for raw in reader.records() {
            let raw = raw?;
            lines.push(String::from_utf8_lossy(&raw).into_owned());
        }
        Ok(LookupOutcome::from_stdout(&lines.join("\n")))
    }
}

impl LookupService for HtslibLookup {
    fn lookup(&self, query: &Query) -> LookupOutcome {
        self.fetch(query).unwrap_or_else(|err| {
            warn!(range = query.range(), "htslib lookup failed: {err}");
            LookupOutcome::Failed {
                tool: Self::TOOL_NAME.to_string(),
                detail: err.to_string(),
            }
        })
    }
}

fn display_name(tool: &Path) -> String {
    tool.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| tool.display().to_string())
}
