use thiserror::Error;

// Construction-time failures. Evaluation itself never fails once a strategy
// and its goal index exist.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Malformed configuration: {0}")]
    MalformedConfiguration(String),
    #[error("Invalid weight {0}, expected a positive integer")]
    InvalidWeight(i64),
    #[error("Weighted strategy requires a weight")]
    MissingWeight,
}
