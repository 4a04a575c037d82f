use std::collections::HashSet;

use blake3::hash;
use snv_annotator::{annotate_lines, render_results, QueryDispatcher};

mod common;
use common::{canned_lookup, MIXED_INPUT};

#[test]
fn output_is_identical_across_runs_and_thread_counts() {
    let mut fingerprints = HashSet::new();
    for threads in [1, 2, 4, 8, 1, 8] {
        let dispatcher = QueryDispatcher::new(threads).expect("pool builds");
        let rows = annotate_lines(MIXED_INPUT.iter().copied(), &dispatcher, &canned_lookup);
        let table = render_results(&rows).expect("rendering succeeds");
        fingerprints.insert(hash(table.as_bytes()));
    }

    assert_eq!(fingerprints.len(), 1, "outputs diverged across runs");
}
