//! Unified application error type.
//! All modules (store, config, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Fallback-file related
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid instant: {0} (expected RFC 3339 or YYYY-MM-DDTHH:MM:SS)")]
    InvalidWhen(String),

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    #[error("Invalid area: {0}")]
    InvalidArea(String),

    #[error("Invalid intent: {0}")]
    InvalidIntent(String),

    #[error("Invalid skill: {0}")]
    InvalidSkill(String),

    // ---------------------------
    // Recording errors
    // ---------------------------
    #[error("Submission could not be stored: {0}")]
    Record(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,
}

pub type AppResult<T> = Result<T, AppError>;
