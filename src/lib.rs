/*!
 * # cutalign - Subtitle realignment against EDL cut points
 *
 * A Rust library for realigning SRT subtitle timing to the scene cuts of
 * an edit decision list (EDL).
 *
 * ## Features
 *
 * - Extract cut points from CMX-style EDL text at a given frame rate
 * - Parse and compose SRT subtitle files
 * - Rebuild a gapless, non-overlapping cue timeline in two policies:
 *   - Strict: every cue boundary snaps to its nearest cut point
 *   - Minimal: boundaries move only where a 1:1 cue-to-cut match exists
 * - Process a single subtitle file or a whole directory against one EDL
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `subtitle_processor`: SRT file handling and timestamp conversion
 * - `edl_processor`: EDL scanning and cut-point extraction
 * - `alignment`: The alignment engine:
 *   - `alignment::matcher`: Greedy one-to-one cue-to-cut matching
 *   - `alignment::strict`: Exact-snap timeline rebuild
 *   - `alignment::minimal`: Minimal-edit timeline rebuild
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod alignment;
pub mod app_config;
pub mod app_controller;
pub mod edl_processor;
pub mod errors;
pub mod file_utils;
pub mod subtitle_processor;

// Re-export main types for easier usage
pub use alignment::{build_cut_assignment, minimal_align, strict_align};
pub use app_config::{AlignmentMode, Config};
pub use edl_processor::{extract_cuts, resolve_frame_rate};
pub use errors::{AppError, EdlError, SubtitleError};
pub use subtitle_processor::{SubtitleCollection, SubtitleEntry};
