//! Error handling for the application

/// Application error type
///
/// Covers the console-input failures that abort a quote run. A malformed
/// time string is not represented here: it degrades to a time score of
/// zero inside the scoring functions instead of failing the run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid date '{0}': expected YYYY-MM-DD format")]
    InvalidDate(String),

    #[error("Invalid number '{0}'")]
    InvalidNumber(String),

    #[error("Number of meals must be between 1 and 4")]
    MealCountOutOfRange(i64),

    #[error("Invalid activity selection '{0}': please enter numbers only")]
    InvalidActivityToken(String),

    #[error("Failed to render quote: {0}")]
    Render(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
