use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

use crate::edl_processor;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Frame rate used to convert EDL timecodes to seconds
    #[serde(default = "default_frame_rate")]
    pub frame_rate: f64,

    /// Alignment policy
    #[serde(default)]
    pub mode: AlignmentMode,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Alignment policy selector
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AlignmentMode {
    // @mode: Snap every cue boundary to its nearest cut
    #[default]
    Strict,
    // @mode: Move boundaries only at one-to-one matched cuts
    Minimal,
}

impl AlignmentMode {
    // @returns: Capitalized mode name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Strict => "Strict",
            Self::Minimal => "Minimal",
        }
    }

    // @returns: Lowercase mode identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Strict => "strict".to_string(),
            Self::Minimal => "minimal".to_string(),
        }
    }
}

// Implement Display trait for AlignmentMode
impl std::fmt::Display for AlignmentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

// Implement FromStr trait for AlignmentMode
impl std::str::FromStr for AlignmentMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "minimal" => Ok(Self::Minimal),
            _ => Err(anyhow!("Invalid alignment mode: {}", s)),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_frame_rate() -> f64 {
    edl_processor::DEFAULT_FRAME_RATE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_rate: default_frame_rate(),
            mode: AlignmentMode::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if !self.frame_rate.is_finite() || self.frame_rate <= 0.0 {
            return Err(anyhow!(
                "Frame rate must be a positive finite number, got {}",
                self.frame_rate
            ));
        }

        Ok(())
    }
}
