use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Nucleotide accepted in the reference and mutant columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base {
    /// Adenine.
    A,
    /// Cytosine.
    C,
    /// Guanine.
    G,
    /// Thymine.
    T,
}

impl Base {
    /// Single-letter representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Base::A => "A",
            Base::C => "C",
            Base::G => "G",
            Base::T => "T",
        }
    }
}

impl FromStr for Base {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Base::A),
            "C" => Ok(Base::C),
            "G" => Ok(Base::G),
            "T" => Ok(Base::T),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated single-nucleotide variant taken from one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantRecord {
    /// Chromosome/contig name.
    pub chrom: Arc<str>,
    /// 0-based position as given in the input.
    pub position: u64,
    position_field: Arc<str>,
    /// Expected reference base.
    pub reference: Base,
    /// Mutant base to score.
    pub alternate: Base,
}

impl VariantRecord {
    /// Construct a new record whose position text is the decimal rendering.
    ///
    /// `position` must be below `u64::MAX` so the 1-based coordinate exists.
    pub fn new(chrom: impl Into<Arc<str>>, position: u64, reference: Base, alternate: Base) -> Self {
        Self {
            chrom: chrom.into(),
            position,
            position_field: Arc::from(position.to_string()),
            reference,
            alternate,
        }
    }

    /// Keep the position exactly as written in the input (`007`, `+99`).
    pub fn with_position_field(mut self, field: impl Into<Arc<str>>) -> Self {
        self.position_field = field.into();
        self
    }

    /// Position column as given; echoed in output and matched against records.
    pub fn position_field(&self) -> &str {
        &self.position_field
    }

    /// 1-based coordinate used in the range string.
    pub fn one_based(&self) -> u64 {
        self.position + 1
    }
}

/// Lookup request for one variant's single-base locus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    range: String,
    record: VariantRecord,
}

impl Query {
    /// Build the query for a record: `chrom:(pos+1)-(pos+1)`.
    pub fn from_record(record: VariantRecord) -> Self {
        let coordinate = record.one_based();
        let range = format!("{}:{}-{}", record.chrom, coordinate, coordinate);
        Self { range, record }
    }

    /// Locus argument handed to the lookup tool.
    pub fn range(&self) -> &str {
        &self.range
    }

    /// Originating record.
    pub fn record(&self) -> &VariantRecord {
        &self.record
    }
}

/// Raw result of one lookup invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Tab-delimited record lines in the order the tool returned them.
    Records(Vec<String>),
    /// The tool ran cleanly and returned nothing.
    Empty,
    /// The invocation itself failed.
    Failed {
        /// Name of the tool or backend that failed.
        tool: String,
        /// Captured diagnostic (stderr, spawn error, htslib error).
        detail: String,
    },
}

impl LookupOutcome {
    /// Wrap raw tool output, dropping blank lines.
    pub fn from_stdout(stdout: &str) -> Self {
        let lines: Vec<String> = stdout
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect();
        if lines.is_empty() {
            LookupOutcome::Empty
        } else {
            LookupOutcome::Records(lines)
        }
    }
}

/// Disposition of a single query after reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Matching record found; score and group columns.
    Success(Vec<String>),
    /// No record matched the mutant base.
    NoPredictionFound,
    /// Data disagreed with the input in a recoverable way.
    Warning(String),
    /// Lookup failed or returned a record for another locus.
    Error(String),
}

impl Classification {
    /// Text written to the trailing message column.
    pub fn message(&self) -> String {
        match self {
            Classification::Success(_) => String::new(),
            Classification::NoPredictionFound => "No Prediction Found".to_string(),
            Classification::Warning(reason) => format!("Warning: {reason}"),
            Classification::Error(reason) => format!("Error: {reason}"),
        }
    }
}

/// Classification paired with the variant it describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedResult {
    /// Variant the lookup was issued for.
    pub record: VariantRecord,
    /// Outcome of reconciliation.
    pub classification: Classification,
}

/// One line of the output table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultRow {
    /// Input line that failed validation, echoed as its uppercased fields.
    FormatError {
        /// Fields of the rejected line.
        fields: Vec<String>,
    },
    /// Reconciled query.
    Query(ClassifiedResult),
}
