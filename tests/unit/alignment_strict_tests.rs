/*!
 * Tests for the exact-snap timeline rebuild
 */

use cutalign::strict_align;

use crate::common::make_entry;

/// Test the first cue snaps to its nearest cut
#[test]
fn test_strict_align_withNearbyCut_shouldSnapToNearest() {
    let subs = vec![make_entry(1, 4.8, 6.8)];
    let cuts = vec![1.0, 5.0, 9.0];

    let aligned = strict_align(&subs, &cuts);

    assert_eq!(aligned.len(), 1);
    assert_eq!(aligned[0].start_secs, 5.0);
    // A lone cue keeps its original duration
    assert!((aligned[0].duration_secs() - 2.0).abs() < 1e-9);
}

/// Test equidistant cuts resolve to the first one found
#[test]
fn test_strict_align_withEquidistantCuts_shouldKeepFirstFound() {
    let subs = vec![make_entry(1, 2.0, 3.0)];
    let cuts = vec![1.5, 2.5];

    let aligned = strict_align(&subs, &cuts);

    assert_eq!(aligned[0].start_secs, 1.5);
}

/// Test empty cut list passes entries through unchanged
#[test]
fn test_strict_align_withEmptyCuts_shouldPassthrough() {
    let subs = vec![make_entry(1, 1.2, 3.4), make_entry(2, 5.6, 7.8)];
    let cuts: Vec<f64> = Vec::new();

    let aligned = strict_align(&subs, &cuts);

    assert_eq!(aligned.len(), 2);
    assert_eq!(aligned[0].start_secs, 1.2);
    assert_eq!(aligned[0].end_secs, 3.4);
    assert_eq!(aligned[1].start_secs, 5.6);
    assert_eq!(aligned[1].end_secs, 7.8);
}

/// Test the rebuilt timeline is contiguous with positive durations
#[test]
fn test_strict_align_withSeveralCues_shouldProduceContiguousTimeline() {
    let subs = vec![
        make_entry(1, 1.2, 3.0),
        make_entry(2, 4.8, 7.5),
        make_entry(3, 9.1, 10.0),
    ];
    let cuts = vec![1.0, 5.0, 9.0];

    let aligned = strict_align(&subs, &cuts);

    assert_eq!(aligned.len(), subs.len());
    for i in 1..aligned.len() {
        assert_eq!(aligned[i].start_secs, aligned[i - 1].end_secs);
    }
    for entry in &aligned {
        assert!(entry.end_secs > entry.start_secs);
    }
}

/// Test a cue ends one millisecond past the next cue's snapped start
#[test]
fn test_strict_align_withNextCue_shouldEndOneMillisecondPastItsCut() {
    let subs = vec![make_entry(1, 0.9, 1.8), make_entry(2, 2.1, 3.0)];
    let cuts = vec![1.0, 2.0];

    let aligned = strict_align(&subs, &cuts);

    assert_eq!(aligned[0].start_secs, 1.0);
    assert_eq!(aligned[0].end_secs, 2.0 + 0.001);
    assert_eq!(aligned[1].start_secs, aligned[0].end_secs);
    assert!((aligned[1].duration_secs() - 0.9).abs() < 1e-9);
}

/// Test several cues may snap to the same cut
#[test]
fn test_strict_align_withOneCut_shouldAllowSharedSnapping() {
    let subs = vec![
        make_entry(1, 11.0, 12.0),
        make_entry(2, 12.5, 13.5),
        make_entry(3, 13.0, 14.0),
    ];
    let cuts = vec![12.0];

    let aligned = strict_align(&subs, &cuts);

    // Every boundary derives from the single cut; the floor keeps
    // durations positive and the chain contiguous
    assert_eq!(aligned[0].start_secs, 12.0);
    for i in 1..aligned.len() {
        assert_eq!(aligned[i].start_secs, aligned[i - 1].end_secs);
    }
    for entry in &aligned {
        assert!(entry.end_secs > entry.start_secs);
    }
}

/// Test the one-millisecond floor when a computed end lands on its start
#[test]
fn test_strict_align_withCollapsedBoundaries_shouldFloorToOneMillisecond() {
    let subs = vec![
        make_entry(1, 0.0, 10.0),
        make_entry(2, 10.0, 20.0),
        make_entry(3, 10.1, 20.0),
    ];
    let cuts = vec![12.0];

    let aligned = strict_align(&subs, &cuts);

    // Both middle boundaries compute to the same 12.001; the floor pushes
    // the second cue's end a millisecond further
    assert_eq!(aligned[1].start_secs, aligned[0].end_secs);
    assert_eq!(aligned[1].end_secs, aligned[1].start_secs + 0.001);
}

/// Test payload and ordering survive the rebuild untouched
#[test]
fn test_strict_align_withAnyCues_shouldPreserveSeqNumAndText() {
    let subs = vec![make_entry(9, 1.0, 2.0), make_entry(4, 3.0, 4.0)];
    let cuts = vec![1.5];

    let aligned = strict_align(&subs, &cuts);

    assert_eq!(aligned[0].seq_num, 9);
    assert_eq!(aligned[1].seq_num, 4);
    assert_eq!(aligned[0].text, "Cue 9");
    assert_eq!(aligned[1].text, "Cue 4");
}
