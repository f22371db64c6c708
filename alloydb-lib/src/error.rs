use thiserror::Error;

use crate::engine::Stage;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlloyDbError {
    #[error("No elements selected")]
    EmptyComposition,
    #[error("No elements selected (total percentage is zero)")]
    ZeroTotalPercentage,
    #[error("Calculation error occurred ({quantity} is not finite after {stage:?})")]
    CalculationFault { stage: Stage, quantity: &'static str },
    #[error("unknown element: {0}")]
    UnknownElement(String),
    #[error("invalid composition: {0}")]
    InvalidComposition(String),
    #[error("unknown preset: {0}")]
    UnknownPreset(String),
    #[error("data error: {0}")]
    DataError(String),
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AlloyDbError>;

impl AlloyDbError {
    /// Message shown to callers when a prediction is reported invalid.
    pub fn validation_message(&self) -> String {
        match self {
            Self::CalculationFault { .. } => "Calculation error occurred".to_string(),
            other => other.to_string(),
        }
    }
}
