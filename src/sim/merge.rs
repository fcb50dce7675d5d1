//! Segment merge engine
//!
//! Consolidates equal-valued segments within one body: the lower-index
//! segment doubles and the higher-index one is removed, then the list is
//! re-sorted by value descending.
//!
//! The scan is a single O(N²) sweep, not a repeat-until-fixed-point pass.
//! This is intended per-frame granularity: a pairing that only becomes
//! possible because of a merge earlier in the same sweep is usually picked
//! up on the next tick instead. Comparisons read the live (possibly
//! already-doubled) value at the lower index, so a segment can double more
//! than once in one sweep when later equals line up.

use super::state::Segment;

/// Run one merge sweep over a body's segment list and restore the
/// value-descending order
pub fn merge_body(segments: &mut Vec<Segment>) {
    let mut i = 0;
    while i < segments.len() {
        let mut j = i + 1;
        while j < segments.len() {
            if segments[j].value == segments[i].value {
                segments[i].value *= 2;
                segments.remove(j);
            }
            // Always step past slot j, merged or not; the element that
            // slid into a removed slot waits for the next tick's sweep.
            j += 1;
        }
        i += 1;
    }
    segments.sort_by(|a, b| b.value.cmp(&a.value));
}
