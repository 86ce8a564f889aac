use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    /// The renderer was handed something other than a sequence of records.
    #[error("input must be a list of variant records, got {0}")]
    InvalidInput(String),

    /// A VCF data line the parser could not make sense of.
    #[error("malformed VCF record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
