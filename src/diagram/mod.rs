mod branches;
mod classify;
mod direction;
mod search;
mod selection;

#[cfg(test)]
pub(crate) mod test_support;

pub use branches::{group_stops, merge_anchor_indices, BranchGroup, GroupPolicy, RenderUnit};
pub use classify::{are_on_different_branch_lines, diagram_width, StopSequence};
pub use direction::{resolve_direction, BranchDirection};
pub use search::{filter_stops, no_matches_message};
pub use selection::{select_origin, OriginSelection};

use serde::{Deserialize, Serialize};
use crate::error::LayoutError;
use crate::models::{DirectionId, LaidOutStop, Route};
use crate::settings::DiagramSettings;

/// Check every stop has segment data and stamp each with its position
///
/// # Errors
///
/// Returns `LayoutError::EmptySegments` for the first stop without segments.
pub fn lay_out(stops: &[LaidOutStop]) -> Result<Vec<LaidOutStop>, LayoutError> {
    stops
        .iter()
        .enumerate()
        .map(|(index, stop)| {
            if stop.segments.is_empty() {
                Err(LayoutError::EmptySegments {
                    index,
                    stop_id: stop.id().to_string(),
                })
            } else {
                Ok(stop.at(index))
            }
        })
        .collect()
}

/// The two mutually exclusive ways the stop list is presented
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum DiagramView {
    Branched { units: Vec<RenderUnit> },
    Filtered {
        query: String,
        stops: Vec<LaidOutStop>,
        /// Set when nothing matched
        empty_message: Option<String>,
    },
}

/// Everything the renderer needs to draw one route direction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineDiagram {
    pub direction: BranchDirection,
    pub heading: String,
    pub width: f64,
    pub view: DiagramView,
}

impl LineDiagram {
    /// Lay out `stops` for one route direction.
    ///
    /// A non-blank `query` produces the flat filtered list instead of the
    /// branch-grouped structure. Rebuilt from scratch on every input change.
    ///
    /// # Errors
    ///
    /// Returns an error if any stop has no segment entries.
    pub fn build(
        route: &Route,
        direction_id: DirectionId,
        stops: &[LaidOutStop],
        query: &str,
        settings: &DiagramSettings,
    ) -> Result<Self, LayoutError> {
        let stops = lay_out(stops)?;
        let direction = resolve_direction(&stops);
        let width = diagram_width(stops.max_branches(), settings.branch_spacing, settings.base_line_width);

        let view = if query.trim().is_empty() {
            let units = group_stops(&stops, direction, settings.expanded_group_max);
            crate::log!(
                "Laid out {} stops of {} into {} units ({})",
                stops.len(),
                route.id,
                units.len(),
                direction.as_str()
            );
            DiagramView::Branched { units }
        } else {
            let matches = filter_stops(&stops, query);
            let empty_message = matches
                .is_empty()
                .then(|| no_matches_message(route, direction_id, query));
            DiagramView::Filtered {
                query: query.to_string(),
                stops: matches,
                empty_message,
            }
        };

        Ok(Self {
            direction,
            heading: route.route_type.stop_noun().to_string(),
            width,
            view,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RouteType;
    use crate::models::SegmentKind::{Line, Merge, Stop, Terminus};
    use super::test_support::{branch_stop, stop_with};

    fn red_line() -> Route {
        Route {
            id: "Red".to_string(),
            name: "Red Line".to_string(),
            route_type: RouteType::Subway,
            color: Some("#DA291C".to_string()),
            direction_names: ["South".to_string(), "North".to_string()],
            direction_destinations: ["Ashmont/Braintree".to_string(), "Alewife".to_string()],
        }
    }

    fn southbound() -> Vec<LaidOutStop> {
        vec![
            stop_with("Alewife", &[Terminus]),
            stop_with("Park Street", &[Stop]),
            stop_with("JFK/UMass", &[Merge, Stop]),
            branch_stop("Savin Hill", "Ashmont", &[Stop, Line], false),
            branch_stop("North Quincy", "Braintree", &[Line, Stop], false),
            branch_stop("Fields Corner", "Ashmont", &[Stop], false),
            branch_stop("Quincy Center", "Braintree", &[Line, Stop], false),
            branch_stop("Ashmont", "Ashmont", &[Terminus, Line], true),
            branch_stop("Braintree", "Braintree", &[Terminus], true),
        ]
    }

    #[test]
    fn test_lay_out_rejects_empty_segments() {
        let mut stops = southbound();
        stops[4].segments.clear();
        assert_eq!(
            lay_out(&stops),
            Err(LayoutError::EmptySegments {
                index: 4,
                stop_id: "North Quincy".to_string(),
            })
        );
    }

    #[test]
    fn test_build_branched_view() {
        let diagram = LineDiagram::build(&red_line(), DirectionId::Zero, &southbound(), "", &DiagramSettings::default())
            .expect("layout should succeed");

        assert_eq!(diagram.direction, BranchDirection::Outward);
        assert_eq!(diagram.heading, "Stations");
        assert_eq!(diagram.width, 32.0);

        let DiagramView::Branched { units } = diagram.view else {
            panic!("expected branched view");
        };
        assert_eq!(units.len(), 6);
        let RenderUnit::Branch(group) = &units[3] else {
            panic!("expected a branch group");
        };
        assert_eq!(group.stops.len(), 4);
        assert!(group.will_merge());
    }

    #[test]
    fn test_build_filtered_view_excludes_groups() {
        let diagram = LineDiagram::build(&red_line(), DirectionId::Zero, &southbound(), "quincy", &DiagramSettings::default())
            .expect("layout should succeed");

        let DiagramView::Filtered { stops, empty_message, .. } = diagram.view else {
            panic!("expected filtered view");
        };
        let ids: Vec<&str> = stops.iter().map(LaidOutStop::id).collect();
        assert_eq!(ids, vec!["North Quincy", "Quincy Center"]);
        assert!(empty_message.is_none());
    }

    #[test]
    fn test_build_filtered_view_without_matches() {
        let diagram = LineDiagram::build(&red_line(), DirectionId::Zero, &southbound(), "Wonderland", &DiagramSettings::default())
            .expect("layout should succeed");

        let DiagramView::Filtered { stops, empty_message, .. } = diagram.view else {
            panic!("expected filtered view");
        };
        assert!(stops.is_empty());
        assert_eq!(
            empty_message.as_deref(),
            Some("No stops South to Ashmont/Braintree matching Wonderland. Try changing your direction or adjusting your search.")
        );
    }

    #[test]
    fn test_build_empty_route() {
        let diagram = LineDiagram::build(&red_line(), DirectionId::Zero, &[], "", &DiagramSettings::default())
            .expect("empty layout should succeed");
        assert_eq!(diagram.view, DiagramView::Branched { units: Vec::new() });
    }
}
