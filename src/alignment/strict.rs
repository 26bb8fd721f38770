use super::{nearest_cut_index, ONE_MS};
use crate::subtitle_processor::SubtitleEntry;

// @module: Exact-snap timeline rebuild

/// Rebuild the cue timeline with every boundary snapped to a cut point.
///
/// The first cue starts on the cut nearest its original start; every later
/// cue starts exactly where its predecessor ends. A cue ends one millisecond
/// past the cut nearest the next cue's original start, so that consecutive
/// boundary timestamps stay distinct when rendered; the last cue keeps its
/// original duration. Several cues may snap to the same cut; there is no
/// one-to-one constraint in this policy.
///
/// An empty cut list leaves the entries unchanged.
pub fn strict_align(subs: &[SubtitleEntry], cuts: &[f64]) -> Vec<SubtitleEntry> {
    if cuts.is_empty() {
        return subs.to_vec();
    }

    let nearest = |t: f64| cuts[nearest_cut_index(cuts, t)];

    let mut aligned: Vec<SubtitleEntry> = Vec::with_capacity(subs.len());
    for (i, sub) in subs.iter().enumerate() {
        let start = if i == 0 {
            nearest(sub.start_secs)
        } else {
            aligned[i - 1].end_secs
        };

        let mut end = match subs.get(i + 1) {
            Some(next) => nearest(next.start_secs) + ONE_MS,
            None => start + sub.duration_secs(),
        };
        if end <= start {
            end = start + ONE_MS;
        }

        aligned.push(sub.with_times(start, end));
    }

    aligned
}
