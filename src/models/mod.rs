mod live_data;
mod route;
mod stop;
mod stop_features;

pub use live_data::{
    CrowdingLevel, Headsign, LiveData, LiveDataByStop, Prediction, ScheduleRelationship, TimeData,
    TimeParts, Vehicle, VehicleStatus,
};
pub use route::{DirectionId, Route, RouteType};
pub use stop::{LaidOutStop, SegmentEntry, SegmentKind, Stop, StopCoord};
pub use stop_features::StopFeatures;
