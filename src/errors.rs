/*!
 * Error types for the cutalign application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur during subtitle processing
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// Error when a timestamp does not follow the HH:MM:SS,mmm form
    #[error("Invalid timestamp format: {0}")]
    InvalidTimestamp(String),

    /// Error when no usable entries survive parsing
    #[error("No valid subtitle entries were found in the SRT content")]
    NoEntries,
}

/// Errors that can occur while reading an edit decision list
#[derive(Error, Debug)]
pub enum EdlError {
    /// Error when a timecode does not follow the HH:MM:SS:FF form
    #[error("Invalid timecode format: {0}")]
    InvalidTimecode(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from subtitle processing
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

    /// Error from edit list processing
    #[error("Edit list error: {0}")]
    Edl(#[from] EdlError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
