use thiserror::Error;

/// Error type that captures common expense-store failures.
#[derive(Debug, Error)]
pub enum ExpenseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Unknown expense: {0}")]
    UnknownExpense(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
