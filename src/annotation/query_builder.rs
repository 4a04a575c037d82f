use super::types::{Base, Query, ResultRow, VariantRecord};

const COMMENT_MARKER: char = '#';
const EXPECTED_FIELDS: usize = 4;

/// Valid queries and rejected lines produced from one input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryBatch {
    /// Queries in input order.
    pub queries: Vec<Query>,
    /// Format-error rows in the order the bad lines were met.
    pub format_errors: Vec<ResultRow>,
}

impl QueryBatch {
    /// Number of non-blank, non-comment lines consumed.
    pub fn lines_consumed(&self) -> usize {
        self.queries.len() + self.format_errors.len()
    }
}

/// Parse `chromosome,position,ref,alt` lines into lookup queries.
///
/// Blank lines and `#` comments are skipped. Every other line yields either a
/// query or a format-error row; nothing is dropped and nothing fails.
pub fn build_queries<I, S>(lines: I) -> QueryBatch
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut batch = QueryBatch::default();

    for line in lines {
        let line = line.as_ref();
        if line.trim().is_empty() || line.starts_with(COMMENT_MARKER) {
            continue;
        }

        let fields: Vec<String> = line
            .trim()
            .to_ascii_uppercase()
            .split(',')
            .map(|field| field.trim().to_string())
            .collect();

        match parse_record(&fields) {
            Some(record) => batch.queries.push(Query::from_record(record)),
            None => batch.format_errors.push(ResultRow::FormatError { fields }),
        }
    }

    batch
}

fn parse_record(fields: &[String]) -> Option<VariantRecord> {
    if fields.len() != EXPECTED_FIELDS {
        return None;
    }
    let position: u64 = fields[1].parse().ok()?;
    // The 1-based coordinate must be representable.
    position.checked_add(1)?;
    let reference: Base = fields[2].parse().ok()?;
    let alternate: Base = fields[3].parse().ok()?;
    Some(
        VariantRecord::new(fields[0].as_str(), position, reference, alternate)
            .with_position_field(fields[1].as_str()),
    )
}
