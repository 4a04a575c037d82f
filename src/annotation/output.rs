use anyhow::{anyhow, Result};
use std::io::Write;

use super::types::{Classification, ClassifiedResult, ResultRow};

const HEADER: [&str; 9] = [
    "# Chromosome",
    "Position",
    "Ref. Base",
    "Mutant Base",
    "Non-Coding Score",
    "Non-Coding Groups",
    "Coding Score",
    "Coding Groups",
    "Warning",
];

const PAYLOAD_COLUMNS: usize = 4;

/// Write the header followed by every row, in the order given.
pub fn write_results<W: Write>(writer: &mut W, rows: &[ResultRow]) -> Result<()> {
    writeln!(writer, "{}", HEADER.join("\t"))?;
    for row in rows {
        writeln!(writer, "{}", render_row(row))?;
    }
    writer.flush()?;
    Ok(())
}

/// Render the table into a string (useful for tests and snapshots).
pub fn render_results(rows: &[ResultRow]) -> Result<String> {
    let mut buffer = Vec::new();
    write_results(&mut buffer, rows)?;
    String::from_utf8(buffer).map_err(|_| anyhow!("rendered table is not valid UTF-8"))
}

fn render_row(row: &ResultRow) -> String {
    match row {
        ResultRow::FormatError { fields } => {
            let mut columns = vec![String::new(); HEADER.len() - 1];
            columns.push(format!("Error: Unexpected Format '{}'", fields.join(",")));
            columns.join("\t")
        }
        ResultRow::Query(result) => render_query(result),
    }
}

fn render_query(result: &ClassifiedResult) -> String {
    let record = &result.record;
    let mut columns = vec![
        record.chrom.to_string(),
        record.position_field().to_string(),
        record.reference.to_string(),
        record.alternate.to_string(),
    ];

    if let Classification::Success(payload) = &result.classification {
        columns.extend(payload.iter().cloned());
    }
    while columns.len() < 4 + PAYLOAD_COLUMNS {
        columns.push(String::new());
    }
    columns.push(result.classification.message());
    columns.join("\t")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::types::{Base, VariantRecord};

    fn classified(classification: Classification) -> ResultRow {
        ResultRow::Query(ClassifiedResult {
            record: VariantRecord::new("chr1", 99, Base::A, Base::G),
            classification,
        })
    }

    #[test]
    fn header_has_nine_columns() {
        let table = render_results(&[]).unwrap();
        assert_eq!(table.lines().count(), 1);
        assert_eq!(table.trim_end().split('\t').count(), 9);
    }

    #[test]
    fn format_errors_fill_only_the_message_column() {
        let row = ResultRow::FormatError {
            fields: vec!["1".into(), "X".into(), "A".into()],
        };
        assert_eq!(
            render_row(&row),
            "\t\t\t\t\t\t\t\tError: Unexpected Format '1,X,A'"
        );
    }

    #[test]
    fn success_rows_carry_payload_and_empty_message() {
        let row = classified(Classification::Success(vec![
            "0.5".into(),
            "Grp1".into(),
            "0.7".into(),
            "Grp2".into(),
        ]));
        assert_eq!(render_row(&row), "chr1\t99\tA\tG\t0.5\tGrp1\t0.7\tGrp2\t");
    }

    #[test]
    fn non_success_rows_are_padded() {
        let warning = classified(Classification::Warning("Inconsistent Base (Expecting 'C')".into()));
        assert_eq!(
            render_row(&warning),
            "chr1\t99\tA\tG\t\t\t\t\tWarning: Inconsistent Base (Expecting 'C')"
        );
        let missing = classified(Classification::NoPredictionFound);
        assert_eq!(render_row(&missing), "chr1\t99\tA\tG\t\t\t\t\tNo Prediction Found");
    }

    #[test]
    fn position_is_echoed_as_written() {
        let row = ResultRow::Query(ClassifiedResult {
            record: VariantRecord::new("1", 7, Base::C, Base::T).with_position_field("007"),
            classification: Classification::NoPredictionFound,
        });
        assert_eq!(render_row(&row), "1\t007\tC\tT\t\t\t\t\tNo Prediction Found");
    }

    #[test]
    fn short_payload_is_padded_to_four_columns() {
        let row = classified(Classification::Success(vec!["0.5".into(), "Grp1".into()]));
        assert_eq!(render_row(&row).split('\t').count(), 9);
    }
}
