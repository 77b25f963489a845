use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use crate::models::{
    CrowdingLevel, Headsign, LaidOutStop, LiveData, LiveDataByStop, RouteType, Stop, StopCoord, Vehicle,
    VehicleStatus,
};
use crate::settings::{DiagramSettings, VehicleOffsets};

/// Stop id to pixel position, as measured by the diagram geometry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoordinateLookup {
    coords: IndexMap<String, StopCoord>,
}

impl CoordinateLookup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the coordinates already attached to laid-out stops
    #[must_use]
    pub fn from_stops(stops: &[LaidOutStop]) -> Self {
        stops
            .iter()
            .filter_map(|stop| stop.stop.coordinates.map(|coord| (stop.id().to_string(), coord)))
            .collect()
    }

    pub fn insert(&mut self, stop_id: impl Into<String>, coord: StopCoord) {
        self.coords.insert(stop_id.into(), coord);
    }

    #[must_use]
    pub fn get(&self, stop_id: &str) -> Option<StopCoord> {
        self.coords.get(stop_id).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}

impl FromIterator<(String, StopCoord)> for CoordinateLookup {
    fn from_iter<I: IntoIterator<Item = (String, StopCoord)>>(iter: I) -> Self {
        Self {
            coords: iter.into_iter().collect(),
        }
    }
}

/// A positioned vehicle marker ready for the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleIcon {
    pub stop_id: String,
    pub vehicle_id: String,
    pub status: VehicleStatus,
    pub left: f64,
    pub top: f64,
    pub tooltip: String,
    pub crowding: Option<CrowdingLevel>,
}

/// How far above the stop the icon sits; unknown statuses sit on the stop
#[must_use]
pub fn vertical_offset(status: VehicleStatus, offsets: &VehicleOffsets) -> f64 {
    match status {
        VehicleStatus::InTransit => offsets.in_transit,
        VehicleStatus::Incoming => offsets.incoming,
        VehicleStatus::Stopped => offsets.stopped,
        VehicleStatus::Other => 0.0,
    }
}

#[must_use]
pub const fn status_phrase(status: VehicleStatus) -> &'static str {
    match status {
        VehicleStatus::InTransit => "is on the way to",
        VehicleStatus::Incoming => "is arriving at",
        VehicleStatus::Stopped => "has arrived at",
        VehicleStatus::Other => "",
    }
}

/// Track of the headsign this vehicle is running as, matched by trip name
#[must_use]
pub fn track_for_vehicle<'a>(vehicle: &Vehicle, headsigns: &'a [Headsign]) -> Option<&'a str> {
    let trip_name = vehicle.trip_name.as_deref()?;
    headsigns
        .iter()
        .find(|headsign| headsign.trip_name.as_deref() == Some(trip_name))
        .and_then(|headsign| headsign.track.as_deref())
        .filter(|track| !track.is_empty())
}

fn join_words(words: &[&str]) -> String {
    words
        .iter()
        .filter(|word| !word.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Hover text for a vehicle icon, e.g. "Worcester train 509 has arrived at South Station on Track 3"
#[must_use]
pub fn tooltip_text(route_type: Option<RouteType>, stop_name: &str, vehicle: &Vehicle, track: Option<&str>) -> String {
    let phrase = status_phrase(vehicle.status);

    let Some(route_type) = route_type else {
        return join_words(&["Vehicle", phrase, stop_name]);
    };

    let trip_name = if route_type.is_commuter_rail() {
        vehicle.trip_name.as_deref().unwrap_or_default()
    } else {
        ""
    };
    let base = join_words(&[route_type.vehicle_name(), trip_name]);

    match vehicle.headsign.as_deref().filter(|headsign| !headsign.is_empty()) {
        Some(headsign) => {
            let text = join_words(&[headsign, &base.to_lowercase(), phrase, stop_name]);
            match track {
                Some(track) => format!("{text} on Track {track}"),
                None => text,
            }
        }
        None => join_words(&[&base, phrase, stop_name]),
    }
}

/// Icons for the vehicles reported at one stop.
///
/// Nothing is produced when the stop has no coordinate or the feed sent no
/// vehicle list.
#[must_use]
pub fn vehicle_icons(
    stop: &Stop,
    live: &LiveData,
    coords: &CoordinateLookup,
    route_type: Option<RouteType>,
    settings: &DiagramSettings,
) -> Vec<VehicleIcon> {
    let (Some(coord), Some(vehicles)) = (coords.get(&stop.id), live.vehicles.as_ref()) else {
        return Vec::new();
    };

    vehicles
        .iter()
        .map(|vehicle| {
            let track = route_type
                .filter(|route_type| route_type.is_commuter_rail())
                .and_then(|_| track_for_vehicle(vehicle, &live.headsigns));

            VehicleIcon {
                stop_id: stop.id.clone(),
                vehicle_id: vehicle.id.clone(),
                status: vehicle.status,
                left: coord.x - settings.circle_radius,
                top: coord.y - vertical_offset(vehicle.status, &settings.vehicle_offsets),
                tooltip: tooltip_text(route_type, &stop.name, vehicle, track),
                crowding: vehicle.crowding,
            }
        })
        .collect()
}

/// Every vehicle icon along the route, in stop order
#[must_use]
pub fn map_vehicles(
    stops: &[LaidOutStop],
    live_data: &LiveDataByStop,
    coords: &CoordinateLookup,
    route_type: Option<RouteType>,
    settings: &DiagramSettings,
) -> Vec<VehicleIcon> {
    stops
        .iter()
        .filter_map(|stop| live_data.get(stop.id()).map(|live| (stop, live)))
        .flat_map(|(stop, live)| vehicle_icons(&stop.stop, live, coords, route_type, settings))
        .collect()
}
