//! Dispatcher throughput with an in-memory lookup

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use snv_annotator::{annotate_lines, LookupOutcome, Query, QueryDispatcher};

fn echo_lookup(query: &Query) -> LookupOutcome {
    let record = query.record();
    LookupOutcome::Records(vec![format!(
        "{}\t{}\tx\t{}\t{}\t0.5\tAEF\t0.7\tAEFB",
        record.chrom,
        record.position_field(),
        record.reference,
        record.alternate
    )])
}

fn benchmark_dispatch(c: &mut Criterion) {
    let lines: Vec<String> = (0..10_000)
        .map(|pos| format!("{},{},A,G", pos % 22 + 1, pos * 17))
        .collect();

    for threads in [1, 4] {
        let dispatcher = QueryDispatcher::new(threads).expect("pool builds");
        c.bench_function(&format!("annotate_10k_threads={threads}"), |b| {
            b.iter(|| black_box(annotate_lines(&lines, &dispatcher, &echo_lookup)));
        });
    }
}

criterion_group!(benches, benchmark_dispatch);
criterion_main!(benches);
