use std::fmt;
use std::fmt::Write as _;
use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::SubtitleError;

// @module: Subtitle parsing, composition and timestamp conversion

// @const: SRT timestamp line regex
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{2}):(\d{2}):(\d{2}),(\d{3}) --> (\d{2}):(\d{2}):(\d{2}),(\d{3})").unwrap()
});

// @struct: Single subtitle entry
#[derive(Debug, Clone)]
pub struct SubtitleEntry {
    // @field: Sequence number as it appeared in the source (not necessarily contiguous)
    pub seq_num: usize,

    // @field: Start time in seconds
    pub start_secs: f64,

    // @field: End time in seconds
    pub end_secs: f64,

    // @field: Subtitle text, verbatim, possibly multi-line
    pub text: String,
}

impl SubtitleEntry {
    /// Creates a new subtitle entry
    pub fn new(seq_num: usize, start_secs: f64, end_secs: f64, text: String) -> Self {
        SubtitleEntry {
            seq_num,
            start_secs,
            end_secs,
            text,
        }
    }

    /// Copy of this entry with the timing replaced; sequence number and text
    /// are carried through unchanged.
    pub fn with_times(&self, start_secs: f64, end_secs: f64) -> Self {
        SubtitleEntry {
            seq_num: self.seq_num,
            start_secs,
            end_secs,
            text: self.text.clone(),
        }
    }

    /// Duration of the entry in seconds as it appeared in the source
    pub fn duration_secs(&self) -> f64 {
        self.end_secs - self.start_secs
    }

    /// Parse an SRT timestamp (HH:MM:SS,mmm) to seconds
    pub fn parse_timestamp(timestamp: &str) -> Result<f64, SubtitleError> {
        let invalid = || SubtitleError::InvalidTimestamp(timestamp.to_string());

        let (hms, millis) = timestamp.split_once(',').ok_or_else(invalid)?;
        let parts: Vec<&str> = hms.split(':').collect();
        if parts.len() != 3 {
            return Err(invalid());
        }

        let hours: f64 = parts[0].parse().map_err(|_| invalid())?;
        let minutes: f64 = parts[1].parse().map_err(|_| invalid())?;
        let seconds: f64 = parts[2].parse().map_err(|_| invalid())?;
        let millis: f64 = millis.parse().map_err(|_| invalid())?;

        Ok(hours * 3600.0 + minutes * 60.0 + seconds + millis / 1000.0)
    }

    /// Convert start time to formatted SRT timestamp
    pub fn format_start_time(&self) -> String {
        Self::format_timestamp(self.start_secs)
    }

    /// Convert end time to formatted SRT timestamp
    pub fn format_end_time(&self) -> String {
        Self::format_timestamp(self.end_secs)
    }

    /// Format a time in seconds to SRT format (HH:MM:SS,mmm).
    ///
    /// Hour, minute and second fields are floored, the millisecond field is
    /// rounded from the fractional remainder. Hours beyond 23 are kept as-is.
    pub fn format_timestamp(secs: f64) -> String {
        let hours = (secs / 3600.0).floor() as u64;
        let minutes = ((secs % 3600.0) / 60.0).floor() as u64;
        let seconds = (secs % 60.0).floor() as u64;
        let millis = ((secs - secs.floor()) * 1000.0).round() as u64;

        format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
    }
}

impl fmt::Display for SubtitleEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.seq_num)?;
        writeln!(f, "{} --> {}", self.format_start_time(), self.format_end_time())?;
        writeln!(f, "{}", self.text)?;
        writeln!(f)
    }
}

/// Collection of subtitle entries with their source file
#[derive(Debug)]
pub struct SubtitleCollection {
    /// Source filename
    pub source_file: PathBuf,

    /// List of subtitle entries, in source order
    pub entries: Vec<SubtitleEntry>,
}

impl SubtitleCollection {
    /// Create a new subtitle collection
    pub fn new(source_file: PathBuf) -> Self {
        SubtitleCollection {
            source_file,
            entries: Vec::new(),
        }
    }

    /// Parse an SRT file into a collection
    pub fn from_srt_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read subtitle file: {}", path.display()))?;

        let entries = Self::parse_srt_string(&content)?;
        Ok(SubtitleCollection {
            source_file: path.to_path_buf(),
            entries,
        })
    }

    /// Parse SRT format string into subtitle entries.
    ///
    /// Entries keep their source order and sequence numbers; text is carried
    /// verbatim including inner blank-free line breaks. Blocks whose timestamp
    /// line cannot be read are skipped with a warning.
    pub fn parse_srt_string(content: &str) -> Result<Vec<SubtitleEntry>> {
        let normalized = content.replace('\r', "");
        let mut entries = Vec::new();

        // State for the block currently being assembled
        let mut current_seq_num: Option<usize> = None;
        let mut current_times: Option<(f64, f64)> = None;
        let mut current_text = String::new();
        let mut line_count = 0;

        for line in normalized.lines() {
            line_count += 1;

            // A blank line terminates the current block
            if line.trim().is_empty() {
                if let (Some(seq_num), Some((start, end))) = (current_seq_num, current_times) {
                    if current_text.is_empty() {
                        warn!("Skipping subtitle entry {} with no text", seq_num);
                    } else {
                        entries.push(SubtitleEntry::new(seq_num, start, end, current_text.clone()));
                    }
                }
                current_seq_num = None;
                current_times = None;
                current_text.clear();
                continue;
            }

            // Try to parse as sequence number (only if we're starting a new block)
            if current_seq_num.is_none() && current_text.is_empty() {
                if let Ok(num) = line.trim().parse::<usize>() {
                    current_seq_num = Some(num);
                    continue;
                }
            }

            // Try to parse as timestamp line
            if current_seq_num.is_some() && current_times.is_none() {
                if let Some(caps) = TIMESTAMP_REGEX.captures(line) {
                    let start = Self::captured_time_to_secs(&caps, 1);
                    let end = Self::captured_time_to_secs(&caps, 5);
                    current_times = Some((start, end));
                    continue;
                }
                warn!(
                    "Expected timestamp line at line {}, dropping block {}: {}",
                    line_count,
                    current_seq_num.unwrap_or(0),
                    line
                );
                current_seq_num = None;
                continue;
            }

            // With sequence number and timestamps in hand, this is subtitle text
            if current_seq_num.is_some() && current_times.is_some() {
                if !current_text.is_empty() {
                    current_text.push('\n');
                }
                current_text.push_str(line);
            } else {
                warn!("Unexpected text at line {} outside a subtitle block: {}", line_count, line);
            }
        }

        // Close the final block if the file does not end with a blank line
        if let (Some(seq_num), Some((start, end))) = (current_seq_num, current_times) {
            if current_text.is_empty() {
                warn!("Skipping subtitle entry {} with no text", seq_num);
            } else {
                entries.push(SubtitleEntry::new(seq_num, start, end, current_text));
            }
        }

        if entries.is_empty() {
            warn!("No valid subtitle entries found in content");
            return Err(SubtitleError::NoEntries.into());
        }

        Ok(entries)
    }

    /// Render entries back into SRT text
    pub fn compose_srt(entries: &[SubtitleEntry]) -> String {
        let mut output = String::new();
        for entry in entries {
            // Display renders the full block including the trailing blank line
            let _ = write!(output, "{}", entry);
        }
        output
    }

    /// Write subtitles to an SRT file
    pub fn write_to_srt<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let mut file = File::create(path)
            .with_context(|| format!("Failed to create subtitle file: {}", path.display()))?;

        for entry in &self.entries {
            write!(file, "{}", entry)?;
        }

        Ok(())
    }

    /// Convert one half of a matched timestamp line to seconds
    fn captured_time_to_secs(caps: &regex::Captures, start_idx: usize) -> f64 {
        let field = |idx: usize| -> f64 {
            caps.get(idx)
                .map_or(0.0, |m| m.as_str().parse().unwrap_or(0.0))
        };

        let hours = field(start_idx);
        let minutes = field(start_idx + 1);
        let seconds = field(start_idx + 2);
        let millis = field(start_idx + 3);

        hours * 3600.0 + minutes * 60.0 + seconds + millis / 1000.0
    }
}

impl fmt::Display for SubtitleCollection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Subtitle Collection")?;
        writeln!(f, "Source: {:?}", self.source_file)?;
        writeln!(f, "Entries: {}", self.entries.len())?;
        Ok(())
    }
}
