use thiserror::Error;

#[derive(Debug, Error)]
pub enum DensityError {
    #[error("Density table is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Density table is valid JSON in an unknown shape: {0}")]
    UnknownShape(#[source] serde_json::Error),

    #[error("Short row {row} in density table: expected 4 fields, found {found}")]
    ShortRow { row: usize, found: usize },

    #[error("Invalid {field} in row {row} of density table")]
    InvalidField { row: usize, field: &'static str },
}
