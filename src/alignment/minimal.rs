use super::{build_cut_assignment, ONE_MS};
use crate::subtitle_processor::SubtitleEntry;

// @module: Minimal-edit timeline rebuild

/// Rebuild the cue timeline, moving boundaries only at matched cuts.
///
/// Runs the greedy one-to-one matcher first. The first cue starts on its
/// matched cut when it has one, otherwise at its original start; every later
/// cue starts where its predecessor ends. A cue ends one millisecond past the
/// next cue's matched cut when that match exists, otherwise it keeps its
/// original duration. Unmatched stretches of the timeline are therefore
/// shifted as a block rather than stretched, which keeps the edit minimal.
pub fn minimal_align(subs: &[SubtitleEntry], cuts: &[f64]) -> Vec<SubtitleEntry> {
    let assignment = build_cut_assignment(subs, cuts);

    let mut aligned: Vec<SubtitleEntry> = Vec::with_capacity(subs.len());
    for (i, sub) in subs.iter().enumerate() {
        let start = if i == 0 {
            match assignment[0] {
                Some(cut_idx) => cuts[cut_idx],
                None => sub.start_secs,
            }
        } else {
            aligned[i - 1].end_secs
        };

        let mut end = if i + 1 < subs.len() {
            match assignment[i + 1] {
                Some(next_cut_idx) => cuts[next_cut_idx] + ONE_MS,
                None => start + sub.duration_secs(),
            }
        } else {
            start + sub.duration_secs()
        };
        if end <= start {
            end = start + ONE_MS;
        }

        aligned.push(sub.with_times(start, end));
    }

    aligned
}
