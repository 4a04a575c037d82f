#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use snv_annotator::{LookupOutcome, Query};

/// Input exercising every row kind.
pub const MIXED_INPUT: &[&str] = &[
    "# chromosome,position,ref,alt",
    "1,99,A,G",
    "1,abc,A,G",
    "1,199,a,g",
    "",
    "1,299,A,G",
    "2,10,A,N",
    "1,399,A,T",
    "1,499,A,G",
];

/// In-memory stand-in for the score database behind `MIXED_INPUT`.
///
/// Ranges are 1-based; record positions repeat the input's 0-based column.
pub fn canned_lookup(query: &Query) -> LookupOutcome {
    let stdout = match query.range() {
        "1:100-100" => "1\t99\tx\tA\tC\t0.1\tGrp0\t0.2\tGrp0\n1\t99\tx\tA\tG\t0.5\tGrp1\t0.7\tGrp2\n",
        "1:200-200" => "1\t199\tx\tC\tG\t0.1\tA\t0.2\tB\n",
        "1:300-300" => "2\t299\tx\tA\tG\t0.1\tA\t0.2\tB\n",
        "1:500-500" => {
            return LookupOutcome::Failed {
                tool: "tabix".to_string(),
                detail: "could not load index".to_string(),
            }
        }
        _ => "",
    };
    LookupOutcome::from_stdout(stdout)
}

fn snapshot_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("snapshots")
}

pub fn assert_snapshot(name: &str, actual: &str) {
    let path = snapshot_root().join(name);
    if std::env::var("SNV_ANNOTATOR_UPDATE_SNAPSHOTS").is_ok() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create snapshot directory");
        }
        fs::write(&path, actual).expect("write snapshot");
        return;
    }

    let expected =
        fs::read_to_string(&path).unwrap_or_else(|_| panic!("snapshot {:?} not found", path));
    if normalize(&expected) != normalize(actual) {
        panic!(
            "Snapshot mismatch for {:?}. Set SNV_ANNOTATOR_UPDATE_SNAPSHOTS=1 to regenerate.\nExpected:\n{}\nActual:\n{}",
            path,
            expected,
            actual
        );
    }
}

fn normalize(input: &str) -> String {
    input.replace("\r\n", "\n")
}
