use serde::{Deserialize, Serialize};
use crate::models::LaidOutStop;
use super::direction::BranchDirection;

/// How the renderer should present a branch group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum GroupPolicy {
    /// Small group, every stop drawn individually with no collapse control
    Expanded,
    /// Large group behind a collapse control; `will_merge` draws the
    /// branch reconnecting to the trunk at the neighbouring stop
    Collapsible { will_merge: bool },
}

/// Stops drawn side by side in a branching region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchGroup {
    pub stops: Vec<LaidOutStop>,
    pub policy: GroupPolicy,
}

impl BranchGroup {
    /// Stable render key: first stop id plus group size
    #[must_use]
    pub fn key(&self) -> String {
        let first = self.stops.first().map_or("", LaidOutStop::id);
        format!("{first}-{}-stops", self.stops.len())
    }

    #[must_use]
    pub fn is_collapsible(&self) -> bool {
        matches!(self.policy, GroupPolicy::Collapsible { .. })
    }

    #[must_use]
    pub fn will_merge(&self) -> bool {
        matches!(self.policy, GroupPolicy::Collapsible { will_merge: true })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RenderUnit {
    Stop(LaidOutStop),
    Branch(BranchGroup),
}

impl RenderUnit {
    /// Stops in this unit, in sequence order
    #[must_use]
    pub fn stops(&self) -> &[LaidOutStop] {
        match self {
            Self::Stop(stop) => std::slice::from_ref(stop),
            Self::Branch(group) => &group.stops,
        }
    }
}

/// Positions of the merge stops that sit directly beside an interior stop
/// on the branching side (after it when inward, before it when outward).
#[must_use]
pub fn merge_anchor_indices(stops: &[LaidOutStop], direction: BranchDirection) -> Vec<usize> {
    let last = stops.len().saturating_sub(1);

    (1..last)
        .filter_map(|index| {
            let neighbor = match direction {
                BranchDirection::Inward => index + 1,
                BranchDirection::Outward => index - 1,
            };
            stops[neighbor].is_merge_stop().then_some(neighbor)
        })
        .collect()
}

/// Split a flat stop sequence into single stops and branch groups.
///
/// Without any merge anchor every stop stays a single unit. Otherwise
/// consecutive toggled stops are gathered into one group. Groups larger
/// than `expanded_group_max` become collapsible.
#[must_use]
pub fn group_stops(
    stops: &[LaidOutStop],
    direction: BranchDirection,
    expanded_group_max: usize,
) -> Vec<RenderUnit> {
    let anchors = merge_anchor_indices(stops, direction);

    if anchors.is_empty() {
        return stops
            .iter()
            .enumerate()
            .map(|(index, stop)| RenderUnit::Stop(stop.at(index)))
            .collect();
    }

    let mut units: Vec<RenderUnit> = Vec::new();
    for (index, stop) in stops.iter().enumerate() {
        let placed = stop.at(index);
        if !stop.is_toggled_stop() {
            units.push(RenderUnit::Stop(placed));
            continue;
        }

        if let Some(RenderUnit::Branch(group)) = units.last_mut() {
            group.stops.push(placed);
        } else {
            units.push(RenderUnit::Branch(BranchGroup {
                stops: vec![placed],
                policy: GroupPolicy::Expanded,
            }));
        }
    }

    let policies: Vec<Option<GroupPolicy>> = units
        .iter()
        .enumerate()
        .map(|(position, unit)| match unit {
            RenderUnit::Branch(group) if group.stops.len() > expanded_group_max => {
                Some(GroupPolicy::Collapsible {
                    will_merge: merges_beside(&units, position, direction, &anchors),
                })
            }
            RenderUnit::Branch(_) => Some(GroupPolicy::Expanded),
            RenderUnit::Stop(_) => None,
        })
        .collect();

    for (unit, policy) in units.iter_mut().zip(policies) {
        if let (RenderUnit::Branch(group), Some(policy)) = (unit, policy) {
            group.policy = policy;
        }
    }

    units
}

// The unit after the group (inward) or before it (outward) must be a single
// stop whose position is a merge anchor.
fn merges_beside(
    units: &[RenderUnit],
    position: usize,
    direction: BranchDirection,
    anchors: &[usize],
) -> bool {
    let adjacent = match direction {
        BranchDirection::Inward => position.checked_add(1),
        BranchDirection::Outward => position.checked_sub(1),
    };

    matches!(
        adjacent.and_then(|index| units.get(index)),
        Some(RenderUnit::Stop(stop)) if anchors.contains(&stop.index)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::direction::resolve_direction;
    use crate::diagram::StopSequence;
    use crate::diagram::test_support::{branch_stop, stop_with};
    use crate::models::SegmentKind::{Line, Merge, Stop, Terminus};

    fn unit_ids(units: &[RenderUnit]) -> Vec<Vec<&str>> {
        units
            .iter()
            .map(|unit| unit.stops().iter().map(LaidOutStop::id).collect())
            .collect()
    }

    /// Two branch dead ends, four stops shared between the branch lines,
    /// then the merge stop where both rejoin the trunk
    fn collecting_branches() -> Vec<LaidOutStop> {
        vec![
            branch_stop("b-end", "B", &[Line, Terminus], true),
            branch_stop("a-end", "A", &[Terminus], true),
            branch_stop("a-1", "A", &[Stop, Line], false),
            branch_stop("b-1", "B", &[Line, Stop], false),
            branch_stop("a-2", "A", &[Stop], false),
            branch_stop("b-2", "B", &[Line, Stop], false),
            stop_with("merge", &[Merge, Stop]),
        ]
    }

    #[test]
    fn test_empty_sequence() {
        assert!(group_stops(&[], BranchDirection::Outward, 2).is_empty());
        assert!(merge_anchor_indices(&[], BranchDirection::Inward).is_empty());
    }

    #[test]
    fn test_anchor_is_the_merge_stop_itself() {
        let stops = collecting_branches();
        assert_eq!(merge_anchor_indices(&stops, BranchDirection::Inward), vec![6]);

        let mut reversed = stops;
        reversed.reverse();
        assert_eq!(merge_anchor_indices(&reversed, BranchDirection::Outward), vec![0]);
    }

    #[test]
    fn test_first_and_last_stops_are_not_inspected() {
        // Merge stop only reachable from an end stop
        let stops = vec![stop_with("merge", &[Merge, Line]), stop_with("x", &[Stop, Line])];
        assert!(merge_anchor_indices(&stops, BranchDirection::Outward).is_empty());
    }

    #[test]
    fn test_collecting_branches_group_and_merge() {
        let stops = collecting_branches();
        let direction = resolve_direction(&stops);
        assert_eq!(direction, BranchDirection::Inward);

        let units = group_stops(&stops, direction, 2);
        assert_eq!(
            unit_ids(&units),
            vec![
                vec!["b-end"],
                vec!["a-end"],
                vec!["a-1", "b-1", "a-2", "b-2"],
                vec!["merge"],
            ]
        );

        let RenderUnit::Branch(group) = &units[2] else {
            panic!("expected a branch group");
        };
        assert_eq!(group.policy, GroupPolicy::Collapsible { will_merge: true });
        assert_eq!(group.key(), "a-1-4-stops");
        assert_eq!(group.stops[0].index, 2);
        assert_eq!(group.stops[3].index, 5);
    }

    #[test]
    fn test_fanning_branches_merge_before_group() {
        let mut stops = collecting_branches();
        stops.reverse();
        let direction = resolve_direction(&stops);
        assert_eq!(direction, BranchDirection::Outward);

        let units = group_stops(&stops, direction, 2);
        assert_eq!(unit_ids(&units)[0], vec!["merge"]);
        let RenderUnit::Branch(group) = &units[1] else {
            panic!("expected a branch group");
        };
        assert!(group.will_merge());
    }

    #[test]
    fn test_small_groups_are_expanded() {
        let stops = vec![
            stop_with("trunk", &[Terminus]),
            stop_with("merge", &[Merge, Line]),
            stop_with("shared", &[Stop, Line]),
            branch_stop("a-end", "A", &[Terminus], true),
        ];
        let units = group_stops(&stops, BranchDirection::Outward, 2);
        assert_eq!(unit_ids(&units), vec![vec!["trunk"], vec!["merge"], vec!["shared"], vec!["a-end"]]);
        let RenderUnit::Branch(group) = &units[2] else {
            panic!("expected a branch group");
        };
        assert_eq!(group.policy, GroupPolicy::Expanded);
        assert!(!group.is_collapsible());
    }

    #[test]
    fn test_collapsible_group_away_from_merge() {
        // The merge neighbour is on the wrong side of the group for this direction
        let stops = vec![
            stop_with("trunk", &[Terminus]),
            stop_with("x", &[Stop]),
            stop_with("merge", &[Merge, Line]),
            stop_with("y", &[Stop]),
            stop_with("s1", &[Stop, Line]),
            stop_with("s2", &[Stop, Line]),
            stop_with("s3", &[Stop, Line]),
            stop_with("end", &[Terminus]),
        ];
        let units = group_stops(&stops, BranchDirection::Outward, 2);
        let RenderUnit::Branch(group) = &units[4] else {
            panic!("expected a branch group");
        };
        assert_eq!(group.policy, GroupPolicy::Collapsible { will_merge: false });
    }

    #[test]
    fn test_expanded_group_limit_is_configurable() {
        let stops = collecting_branches();
        let units = group_stops(&stops, BranchDirection::Inward, 4);
        let RenderUnit::Branch(group) = &units[2] else {
            panic!("expected a branch group");
        };
        assert_eq!(group.policy, GroupPolicy::Expanded);
    }

    #[test]
    fn test_branches_without_merge_never_group() {
        let stops = vec![
            stop_with("a", &[Stop]),
            branch_stop("b", "B", &[Line, Stop], false),
            branch_stop("c", "B", &[Line, Terminus], true),
        ];
        assert!(stops.has_branch_lines());
        let units = group_stops(&stops, resolve_direction(&stops), 2);
        assert_eq!(units.len(), 3);
        assert!(units.iter().all(|unit| matches!(unit, RenderUnit::Stop(_))));
        for (index, unit) in units.iter().enumerate() {
            assert_eq!(unit.stops()[0], stops[index].at(index));
        }
    }

    #[test]
    fn test_grouping_is_idempotent() {
        let stops = collecting_branches();
        let direction = resolve_direction(&stops);
        let first = group_stops(&stops, direction, 2);
        let second = group_stops(&stops, direction, 2);
        assert_eq!(first, second);
    }

    #[test]
    fn test_input_indices_are_ignored() {
        let mut stops = collecting_branches();
        for stop in &mut stops {
            stop.index = 99;
        }
        let units = group_stops(&stops, BranchDirection::Inward, 2);
        let RenderUnit::Stop(merge) = &units[3] else {
            panic!("expected a single stop");
        };
        assert_eq!(merge.index, 6);
    }

    #[test]
    fn test_render_unit_serializes_with_kind_tag() {
        let units = group_stops(&collecting_branches(), BranchDirection::Inward, 2);
        let json = serde_json::to_value(&units[2]).expect("serialization should succeed");
        assert_eq!(json["kind"], "branch");
        assert_eq!(json["policy"]["mode"], "collapsible");
        assert_eq!(json["policy"]["will_merge"], true);
    }
}
