//! Error types for the command-line front end.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Solver error: {0}")]
    Solver(#[from] rh_fdm::FdmError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Run file error: {0}")]
    RunFile(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid option: {what}")]
    InvalidOption { what: String },
}

pub type CliResult<T> = Result<T, CliError>;
