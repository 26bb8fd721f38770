use std::collections::BTreeSet;

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::EdlError;

// @module: Edit decision list scanning and cut-point extraction

/// Frame rate used when none is supplied or the supplied value is unusable
pub const DEFAULT_FRAME_RATE: f64 = 60.0;

// @const: EDL timecode token regex (HH:MM:SS:FF, two-digit fields)
static TIMECODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{2}:\d{2}:\d{2}:\d{2}").unwrap());

/// Extract the cut points of an edit decision list, in ascending seconds.
///
/// A line counts as an edit entry only when it carries exactly four timecode
/// tokens (source in/out and record in/out). The record-side pair marks where
/// cuts land in the final timeline, so only the 3rd and 4th tokens are taken.
/// Timecodes are deduplicated and ordered as strings before conversion; the
/// fixed-width two-digit fields make lexical and numeric order coincide.
pub fn extract_cuts(content: &str, fps: f64) -> Vec<f64> {
    let mut timecodes: BTreeSet<&str> = BTreeSet::new();

    for line in content.lines() {
        let tokens: Vec<&str> = TIMECODE_REGEX.find_iter(line).map(|m| m.as_str()).collect();
        if tokens.len() == 4 {
            timecodes.insert(tokens[2]);
            timecodes.insert(tokens[3]);
        }
    }

    let cuts: Vec<f64> = timecodes
        .iter()
        .filter_map(|tc| timecode_to_secs(tc, fps).ok())
        .collect();

    debug!("Extracted {} cut points from edit list", cuts.len());
    cuts
}

/// Convert an HH:MM:SS:FF timecode to seconds at the given frame rate
pub fn timecode_to_secs(timecode: &str, fps: f64) -> Result<f64, EdlError> {
    let invalid = || EdlError::InvalidTimecode(timecode.to_string());

    let parts: Vec<&str> = timecode.split(':').collect();
    if parts.len() != 4 {
        return Err(invalid());
    }

    let hours: f64 = parts[0].parse().map_err(|_| invalid())?;
    let minutes: f64 = parts[1].parse().map_err(|_| invalid())?;
    let seconds: f64 = parts[2].parse().map_err(|_| invalid())?;
    let frames: f64 = parts[3].parse().map_err(|_| invalid())?;

    Ok(hours * 3600.0 + minutes * 60.0 + seconds + frames / fps)
}

/// Resolve a user-supplied frame rate, falling back to the default when the
/// value is missing, non-finite or not positive.
pub fn resolve_frame_rate(fps: Option<f64>) -> f64 {
    match fps {
        Some(value) if value.is_finite() && value > 0.0 => value,
        Some(value) => {
            warn!("Ignoring invalid frame rate {}, using {}", value, DEFAULT_FRAME_RATE);
            DEFAULT_FRAME_RATE
        }
        None => DEFAULT_FRAME_RATE,
    }
}
