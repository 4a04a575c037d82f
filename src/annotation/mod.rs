//! Variant annotation pipeline: input parsing, database lookups,
//! reconciliation and table output.

mod dispatcher;
mod lookup;
mod output;
mod query_builder;
mod reconciler;
mod types;

pub use dispatcher::QueryDispatcher;
pub use lookup::{CommandLookup, HtslibLookup, LookupService};
pub use output::{render_results, write_results};
pub use query_builder::{build_queries, QueryBatch};
pub use reconciler::reconcile;
pub use types::{
    Base, Classification, ClassifiedResult, LookupOutcome, Query, ResultRow, VariantRecord,
};
