use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SortError {
    #[error("unknown pivot rule: {0}")]
    UnknownPivotRule(String),
    #[error("unknown partition scheme: {0}")]
    UnknownPartitionScheme(String),
}
