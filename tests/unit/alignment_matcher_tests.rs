/*!
 * Tests for greedy one-to-one cue-to-cut matching
 */

use std::collections::HashSet;

use cutalign::build_cut_assignment;

use crate::common::make_entry;

/// Test every cue gets its own cut when cuts are plentiful
#[test]
fn test_build_cut_assignment_withAmpleCuts_shouldMatchEveryCue() {
    let subs = vec![
        make_entry(1, 1.0, 2.0),
        make_entry(2, 5.0, 6.0),
        make_entry(3, 9.0, 10.0),
    ];
    let cuts = vec![1.25, 5.25, 9.25];

    let assignment = build_cut_assignment(&subs, &cuts);

    assert_eq!(assignment, vec![Some(0), Some(1), Some(2)]);
}

/// Test no two cues ever share a cut
#[test]
fn test_build_cut_assignment_withCrowdedCues_shouldStayInjective() {
    let subs = vec![
        make_entry(1, 0.0, 1.0),
        make_entry(2, 0.5, 1.5),
        make_entry(3, 1.0, 2.0),
        make_entry(4, 7.0, 8.0),
        make_entry(5, 7.25, 8.25),
    ];
    let cuts = vec![0.25, 1.25, 7.5];

    let assignment = build_cut_assignment(&subs, &cuts);

    let matched: Vec<usize> = assignment.iter().filter_map(|a| *a).collect();
    let unique: HashSet<usize> = matched.iter().copied().collect();
    assert_eq!(matched.len(), unique.len());
}

/// Test the contention scenario: the closer cue steals the only cut
#[test]
fn test_build_cut_assignment_withContention_shouldLetCloserCueWin() {
    let subs = vec![make_entry(1, 1.0, 2.0), make_entry(2, 1.2, 2.2)];
    let cuts = vec![1.1];

    let assignment = build_cut_assignment(&subs, &cuts);

    // In f64 arithmetic |1.1 - 1.2| comes out a hair below |1.1 - 1.0|,
    // so the second cue owns the cut and the first stays unmatched
    assert_eq!(assignment, vec![None, Some(0)]);
}

/// Test an exact distance tie goes to the cue processed first
#[test]
fn test_build_cut_assignment_withExactTie_shouldKeepFirstCue() {
    // Both distances are exactly 0.25, representable in binary
    let subs = vec![make_entry(1, 1.0, 2.0), make_entry(2, 1.5, 2.5)];
    let cuts = vec![1.25];

    let assignment = build_cut_assignment(&subs, &cuts);

    assert_eq!(assignment, vec![Some(0), None]);
}

/// Test a cue that loses its nearest cut does not fall back to another one
#[test]
fn test_build_cut_assignment_withLostContention_shouldNotRetryOtherCuts() {
    // Both cues nominate the cut at 2.375; the far-away cut at 5.0 stays free
    let subs = vec![make_entry(1, 2.0, 3.0), make_entry(2, 2.25, 3.25)];
    let cuts = vec![2.375, 5.0];

    let assignment = build_cut_assignment(&subs, &cuts);

    // The closer second cue wins; the loser is left unmatched even though
    // another cut remains unowned
    assert_eq!(assignment, vec![None, Some(0)]);
}

/// Test empty cut list leaves every cue unmatched
#[test]
fn test_build_cut_assignment_withEmptyCuts_shouldLeaveAllUnmatched() {
    let subs = vec![make_entry(1, 1.0, 2.0), make_entry(2, 3.0, 4.0)];
    let cuts: Vec<f64> = Vec::new();

    let assignment = build_cut_assignment(&subs, &cuts);

    assert_eq!(assignment, vec![None, None]);
}

/// Test scarcity: with fewer cuts than cues, exactly cut-count cues match
#[test]
fn test_build_cut_assignment_withScarceCuts_shouldMatchAtMostCutCount() {
    let subs = vec![
        make_entry(1, 0.0, 1.0),
        make_entry(2, 10.0, 11.0),
        make_entry(3, 10.5, 11.5),
    ];
    let cuts = vec![0.25, 10.25];

    let assignment = build_cut_assignment(&subs, &cuts);

    let matched = assignment.iter().filter(|a| a.is_some()).count();
    assert_eq!(matched, 2);
    assert_eq!(assignment[0], Some(0));
}
