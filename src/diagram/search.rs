use crate::models::{DirectionId, LaidOutStop, Route};

/// Stops whose name contains `query`, ignoring case, in route order.
///
/// This bypasses branch grouping entirely. A blank query keeps every stop.
#[must_use]
pub fn filter_stops(stops: &[LaidOutStop], query: &str) -> Vec<LaidOutStop> {
    let needle = query.trim().to_lowercase();

    stops
        .iter()
        .enumerate()
        .filter(|(_, stop)| needle.is_empty() || stop.stop.name.to_lowercase().contains(&needle))
        .map(|(index, stop)| stop.at(index))
        .collect()
}

#[must_use]
pub fn no_matches_message(route: &Route, direction: DirectionId, query: &str) -> String {
    format!(
        "No stops {} to {} matching {query}. Try changing your direction or adjusting your search.",
        route.direction_name(direction),
        route.direction_destination(direction),
    )
}
