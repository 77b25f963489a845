use serde::{Deserialize, Serialize};
use crate::models::{DirectionId, Stop};

/// Origin and direction picked by clicking a stop on the diagram
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginSelection {
    pub origin: String,
    pub direction_id: DirectionId,
}

/// No trips leave a destination in the current direction, so clicking it
/// looks up departures in the opposite direction instead.
#[must_use]
pub fn select_origin(stop: &Stop, direction_id: DirectionId) -> OriginSelection {
    let direction_id = if stop.is_destination() {
        direction_id.reversed()
    } else {
        direction_id
    };

    OriginSelection {
        origin: stop.id.clone(),
        direction_id,
    }
}
