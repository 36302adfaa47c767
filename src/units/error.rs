use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("Unknown measuring system: '{0}' (expected Metric, Imperial or USCustomary)")]
    UnknownMeasuringSystem(String),
}
