//! Error types for the Bertha client
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using BerthaError
pub type Result<T> = std::result::Result<T, BerthaError>;

/// Unified error type for Bertha client operations
#[derive(Debug, Error)]
pub enum BerthaError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Connection Errors
    // -------------------------------------------------------------------------
    #[error("could not connect to {host}:{port}")]
    Connection { host: String, port: u16 },

    // -------------------------------------------------------------------------
    // Key Errors
    // -------------------------------------------------------------------------
    #[error("invalid blob key: {0}")]
    InvalidKey(String),

    #[error("blob not found")]
    NotFound,

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("protocol error: {0}")]
    Protocol(String),
}
