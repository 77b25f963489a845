//! Predicates describing where a stop sits relative to the diagram's branches
//!
//! These are the only inputs the direction resolver and the branch grouper
//! look at; no other stop attribute takes part in layout decisions.

use crate::models::{LaidOutStop, SegmentKind};

impl LaidOutStop {
    /// Branch lines reconnect to the main line here
    #[must_use]
    pub fn is_merge_stop(&self) -> bool {
        self.has_segment(SegmentKind::Merge)
    }

    /// Drawn on a branch line. Merge stops are drawn on the main line.
    #[must_use]
    pub fn is_on_branch_line(&self) -> bool {
        self.segments.len() > 1 && !self.is_merge_stop()
    }

    #[must_use]
    pub fn is_on_branch(&self) -> bool {
        self.is_on_branch_line() || self.stop.has_branch()
    }

    /// Dead end of a single branch
    #[must_use]
    pub fn is_branch_terminus_stop(&self) -> bool {
        self.is_on_branch() && self.stop.is_terminus
    }

    #[must_use]
    pub fn is_stop_on_main_line(&self) -> bool {
        self.segments
            .first()
            .is_some_and(|segment| matches!(segment.kind, SegmentKind::Stop | SegmentKind::Terminus))
    }

    /// Stops that belong inside a collapsible branch group: drawn on both the
    /// main line and a branch line, or sitting alone on a labelled branch
    /// without ending it.
    #[must_use]
    pub fn is_toggled_stop(&self) -> bool {
        let on_stop_and_line =
            self.has_segment(SegmentKind::Stop) && self.has_segment(SegmentKind::Line);
        let lone_branch_stop = self.segments.len() == 1
            && self.stop.has_branch()
            && self.segments[0].kind != SegmentKind::Terminus;

        on_stop_and_line || lone_branch_stop
    }
}

#[must_use]
pub fn are_on_different_branch_lines(from: &LaidOutStop, to: &LaidOutStop) -> bool {
    !from.is_merge_stop()
        && !to.is_merge_stop()
        && from.segments.len() != to.segments.len()
        && from.stop.branch != to.stop.branch
}

/// Width of the line graphic needed to draw `max_branches` parallel lines
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn diagram_width(max_branches: usize, branch_spacing: f64, base_line_width: f64) -> f64 {
    base_line_width + max_branches as f64 * branch_spacing + base_line_width
}

/// Extension trait for whole-sequence queries over laid out stops
pub trait StopSequence {
    fn has_branch_lines(&self) -> bool;

    /// Positions of every stop matching `predicate`, in sequence order
    fn indices_where(&self, predicate: impl Fn(&LaidOutStop) -> bool) -> Vec<usize>;

    fn merge_indices(&self) -> Vec<usize>;

    fn branch_terminus_indices(&self) -> Vec<usize>;

    /// Most parallel line columns any stop participates in
    fn max_branches(&self) -> usize;
}

impl StopSequence for [LaidOutStop] {
    fn has_branch_lines(&self) -> bool {
        self.iter().any(LaidOutStop::is_on_branch_line)
    }

    fn indices_where(&self, predicate: impl Fn(&LaidOutStop) -> bool) -> Vec<usize> {
        self.iter()
            .enumerate()
            .filter(|(_, stop)| predicate(stop))
            .map(|(index, _)| index)
            .collect()
    }

    fn merge_indices(&self) -> Vec<usize> {
        self.indices_where(LaidOutStop::is_merge_stop)
    }

    fn branch_terminus_indices(&self) -> Vec<usize> {
        self.indices_where(LaidOutStop::is_branch_terminus_stop)
    }

    fn max_branches(&self) -> usize {
        self.iter().map(|stop| stop.segments.len()).max().unwrap_or(0)
    }
}
