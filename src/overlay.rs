//! Per-stop overlay: upcoming departures, feature badges and vehicle icons

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use crate::models::{CrowdingLevel, Headsign, LaidOutStop, LiveData, LiveDataByStop, RouteType, Stop, TimeData};
use crate::prediction::{
    predicted_or_scheduled_time, split_headsign_name, status_class, status_for_commuter_rail,
    time_for_commuter_rail, track_for_commuter_rail, DisplayTime, StatusClass,
};
use crate::settings::DiagramSettings;
use crate::vehicles::{vehicle_icons, CoordinateLookup, VehicleIcon};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeRow {
    pub time: DisplayTime,
    pub status: Option<String>,
    /// " track 3" or empty
    pub track: String,
    pub class: StatusClass,
    pub crowding: Option<CrowdingLevel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadsignRow {
    pub destination: String,
    pub via: Option<String>,
    pub train_label: Option<String>,
    pub times: Vec<TimeRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopOverlay {
    pub stop_id: String,
    pub features: Vec<String>,
    pub headsigns: Vec<HeadsignRow>,
    pub vehicles: Vec<VehicleIcon>,
}

/// Badges shown beside a stop name; zones only mean something on commuter rail
#[must_use]
pub fn feature_labels(stop: &Stop, route_type: RouteType) -> Vec<String> {
    let mut labels: Vec<String> = stop.features.labels().into_iter().map(str::to_string).collect();
    if route_type.is_commuter_rail() {
        if let Some(zone) = stop.zone.as_deref().filter(|zone| !zone.is_empty()) {
            labels.push(format!("Zone {zone}"));
        }
    }
    labels
}

fn commuter_rail_row(time: &TimeData, settings: &DiagramSettings) -> TimeRow {
    let status = status_for_commuter_rail(time, settings.delay_threshold_minutes);
    TimeRow {
        time: time_for_commuter_rail(time, settings.delay_threshold_minutes),
        class: status_class(status.as_deref()),
        status,
        track: track_for_commuter_rail(time),
        crowding: time.crowding,
    }
}

fn time_row(time: &TimeData) -> Option<TimeRow> {
    predicted_or_scheduled_time(time).map(|display| TimeRow {
        time: DisplayTime::Single { time: Some(display) },
        status: None,
        track: String::new(),
        class: StatusClass::Normal,
        crowding: time.crowding,
    })
}

/// Rows for one headsign. Commuter rail lists only the next departure
/// that has a time to show.
#[must_use]
pub fn headsign_row(headsign: &Headsign, route_type: RouteType, settings: &DiagramSettings) -> HeadsignRow {
    let times = if route_type.is_commuter_rail() {
        headsign
            .times
            .iter()
            .find(|time| predicted_or_scheduled_time(time).is_some())
            .map(|time| commuter_rail_row(time, settings))
            .into_iter()
            .collect()
    } else {
        headsign.times.iter().filter_map(time_row).collect()
    };

    let (destination, via) = split_headsign_name(&headsign.name);
    HeadsignRow {
        destination: destination.to_string(),
        via,
        train_label: route_type
            .is_commuter_rail()
            .then(|| headsign.train_label())
            .flatten(),
        times,
    }
}

#[must_use]
pub fn stop_overlay(
    stop: &Stop,
    live: Option<&LiveData>,
    coords: &CoordinateLookup,
    route_type: RouteType,
    settings: &DiagramSettings,
) -> StopOverlay {
    let (headsigns, vehicles) = live.map_or_else(
        || (Vec::new(), Vec::new()),
        |live| {
            let headsigns = live
                .headsigns
                .iter()
                .map(|headsign| headsign_row(headsign, route_type, settings))
                .filter(|row| !row.times.is_empty())
                .collect();
            (headsigns, vehicle_icons(stop, live, coords, Some(route_type), settings))
        },
    );

    StopOverlay {
        stop_id: stop.id.clone(),
        features: feature_labels(stop, route_type),
        headsigns,
        vehicles,
    }
}

/// Overlay for every stop, keyed by stop id in route order
#[must_use]
pub fn build_overlays(
    stops: &[LaidOutStop],
    live_data: &LiveDataByStop,
    coords: &CoordinateLookup,
    route_type: RouteType,
    settings: &DiagramSettings,
) -> IndexMap<String, StopOverlay> {
    stops
        .iter()
        .map(|stop| {
            let overlay = stop_overlay(&stop.stop, live_data.get(stop.id()), coords, route_type, settings);
            (overlay.stop_id.clone(), overlay)
        })
        .collect()
}
