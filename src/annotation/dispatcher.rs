use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use tracing::debug;

use super::lookup::LookupService;
use super::reconciler::reconcile;
use super::types::{ClassifiedResult, Query};

/// Fans lookups out over a fixed-size worker pool.
///
/// Results come back in submission order regardless of which worker finishes
/// first: the indexed collect writes each task into its own pre-sized slot and
/// `dispatch` returns only once every slot is filled.
#[derive(Debug)]
pub struct QueryDispatcher {
    pool: ThreadPool,
    threads: usize,
}

impl QueryDispatcher {
    /// Build a dispatcher with `threads` workers (at least one).
    pub fn new(threads: usize) -> Result<Self, ThreadPoolBuildError> {
        let threads = threads.max(1);
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("snv-lookup-{i}"))
            .build()?;
        Ok(Self { pool, threads })
    }

    /// Number of workers in the pool.
    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Look up and reconcile every query, preserving input order.
    pub fn dispatch<L>(&self, queries: &[Query], lookup: &L) -> Vec<ClassifiedResult>
    where
        L: LookupService + ?Sized,
    {
        self.pool.install(|| {
            queries
                .par_iter()
                .map(|query| {
                    let outcome = lookup.lookup(query);
                    let result = reconcile(query, &outcome);
                    debug!(range = query.range(), outcome = ?result.classification, "query reconciled");
                    result
                })
                .collect()
        })
    }
}
