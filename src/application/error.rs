use thiserror::Error;

use crate::domain::AnalysisError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("Malformed transaction at {location}: {reason}")]
    MalformedTransaction { location: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn malformed(location: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::MalformedTransaction {
            location: location.into(),
            reason: reason.into(),
        }
    }
}
