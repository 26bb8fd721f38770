use std::collections::HashMap;

use log::debug;

use super::nearest_cut_index;
use crate::subtitle_processor::SubtitleEntry;

// @module: Greedy one-to-one cue-to-cut matching

/// Build a one-to-one assignment from cue positions to cut positions.
///
/// Every cue nominates its nearest cut (by distance from the cue's original
/// start time), then nominations are processed in ascending distance order.
/// An unowned cut goes to its nominator; an owned cut changes hands only when
/// the new nomination is strictly closer, in which case the previous owner is
/// cleared back to unmatched. A cue that loses its nomination stays unmatched
/// permanently, with no fallback to another cut.
///
/// The returned mapping is injective: no two cues share a cut. It is a greedy
/// approximation of minimum-cost bipartite assignment, not the optimum; a
/// steal never re-examines cues that lost earlier against the freed cut.
pub fn build_cut_assignment(subs: &[SubtitleEntry], cuts: &[f64]) -> Vec<Option<usize>> {
    let mut assignment: Vec<Option<usize>> = vec![None; subs.len()];
    if cuts.is_empty() {
        return assignment;
    }

    // One nomination per cue: (distance, cue position, cut position)
    let mut candidates: Vec<(f64, usize, usize)> = subs
        .iter()
        .enumerate()
        .map(|(sub_idx, sub)| {
            let cut_idx = nearest_cut_index(cuts, sub.start_secs);
            ((cuts[cut_idx] - sub.start_secs).abs(), sub_idx, cut_idx)
        })
        .collect();

    candidates.sort_by(|a, b| a.0.total_cmp(&b.0));

    // cut position -> (owning cue position, its distance)
    let mut owners: HashMap<usize, (usize, f64)> = HashMap::new();

    for (dist, sub_idx, cut_idx) in candidates {
        match owners.get(&cut_idx).copied() {
            None => {
                assignment[sub_idx] = Some(cut_idx);
                owners.insert(cut_idx, (sub_idx, dist));
            }
            Some((owner_idx, owner_dist)) => {
                if dist < owner_dist {
                    assignment[owner_idx] = None;
                    assignment[sub_idx] = Some(cut_idx);
                    owners.insert(cut_idx, (sub_idx, dist));
                }
                // An equally distant or farther cue stays unmatched
            }
        }
    }

    let matched = assignment.iter().filter(|a| a.is_some()).count();
    debug!("Matched {} of {} cues to cut points", matched, subs.len());

    assignment
}
