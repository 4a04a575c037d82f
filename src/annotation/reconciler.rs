//! Matching of returned database records against the expected variant.
//!
//! Records are examined in the order the lookup returned them and the first
//! decisive record wins: a record for another chromosome or position, or one
//! whose reference base disagrees with the input, ends the scan with an error
//! or warning even if a true match follows it. Records that agree on the
//! reference but carry another mutant base are skipped, since the database
//! stores one row per alternate allele.

use super::types::{Classification, ClassifiedResult, LookupOutcome, Query};

const CHROM_COLUMN: usize = 0;
const POSITION_COLUMN: usize = 1;
const REFERENCE_COLUMN: usize = 3;
const MUTANT_COLUMN: usize = 4;
const PAYLOAD_START: usize = 5;

/// Classify a query's lookup outcome.
pub fn reconcile(query: &Query, outcome: &LookupOutcome) -> ClassifiedResult {
    let classification = match outcome {
        LookupOutcome::Failed { tool, .. } => {
            Classification::Error(format!("'{tool}' command failure"))
        }
        LookupOutcome::Empty => Classification::NoPredictionFound,
        LookupOutcome::Records(lines) => scan_records(query, lines),
    };

    ClassifiedResult {
        record: query.record().clone(),
        classification,
    }
}

fn scan_records(query: &Query, lines: &[String]) -> Classification {
    let expected = query.record();

    for line in lines {
        let columns: Vec<&str> = line.trim_end().split('\t').collect();
        if columns.len() < PAYLOAD_START {
            return Classification::Error("Malformed Record".to_string());
        }
        if columns[CHROM_COLUMN] != expected.chrom.as_ref() {
            return Classification::Error("Unexpected Chromosome".to_string());
        }
        if columns[POSITION_COLUMN] != expected.position_field() {
            return Classification::Error("Unexpected Position".to_string());
        }
        let reference = columns[REFERENCE_COLUMN];
        if reference != expected.reference.as_str() {
            return Classification::Warning(format!(
                "Inconsistent Base (Expecting '{reference}')"
            ));
        }
        if columns[MUTANT_COLUMN] == expected.alternate.as_str() {
            let payload = columns[PAYLOAD_START..]
                .iter()
                .map(|column| column.to_string())
                .collect();
            return Classification::Success(payload);
        }
    }

    Classification::NoPredictionFound
}
