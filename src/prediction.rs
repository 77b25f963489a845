//! Status and time labels for predicted or scheduled departures
//!
//! Commuter rail shows a status word ("On time", "Delayed 7 min", ...) next
//! to each time; other modes show only the predicted or scheduled time.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use crate::models::{Headsign, LiveDataByStop, TimeData};

/// Status label for a commuter rail departure.
///
/// Rules are tried in order and the first match wins:
/// 1. an explicit prediction status, verbatim
/// 2. "Canceled" for skipped or cancelled trips
/// 3. "Delayed {n} min" once `delay` reaches the threshold
/// 4. "On time" with both a schedule and a prediction
/// 5. "Scheduled" with only a schedule
///
/// A prediction with no scheduled time cannot be classified and gets no status.
#[must_use]
pub fn status_for_commuter_rail(data: &TimeData, delay_threshold: i64) -> Option<String> {
    let prediction = data.prediction.as_ref();

    if let Some(status) = prediction.and_then(|p| p.status_text()) {
        return Some(status.to_string());
    }

    if prediction.is_some_and(|p| p.is_skipped_or_cancelled()) {
        return Some("Canceled".to_string());
    }

    if data.delay >= delay_threshold {
        return Some(format!("Delayed {} min", data.delay));
    }

    match (&data.scheduled_time, prediction) {
        (Some(_), Some(_)) => Some("On time".to_string()),
        (Some(_), None) => Some("Scheduled".to_string()),
        (None, _) => None,
    }
}

/// What the time column shows for a commuter rail departure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DisplayTime {
    /// Scheduled time struck through above the predicted time
    Delayed {
        scheduled: Option<String>,
        predicted: Option<String>,
    },
    Single { time: Option<String> },
}

impl DisplayTime {
    #[must_use]
    pub fn is_delayed(&self) -> bool {
        matches!(self, Self::Delayed { .. })
    }
}

/// Time to show for a commuter rail departure.
///
/// Late trips show both times. Otherwise the predicted time wins, except
/// that an on-time train whose predicted clock time is earlier than the
/// schedule keeps showing the scheduled time, as does a prediction with no
/// time at all.
#[must_use]
pub fn time_for_commuter_rail(data: &TimeData, delay_threshold: i64) -> DisplayTime {
    let scheduled = data.scheduled_time.as_ref();
    let prediction = data.prediction.as_ref();

    if let Some(prediction) = prediction {
        if data.delay >= delay_threshold {
            return DisplayTime::Delayed {
                scheduled: scheduled.map(|time| time.display()),
                predicted: prediction.time.as_ref().map(|time| time.display()),
            };
        }
    }

    let time = match prediction {
        Some(prediction) => match (&prediction.time, scheduled) {
            (Some(predicted), Some(scheduled))
                if predicted.compare_clock(scheduled) == Some(Ordering::Less) =>
            {
                Some(scheduled)
            }
            (Some(predicted), _) => Some(predicted),
            (None, scheduled) => scheduled,
        },
        None => scheduled,
    };

    DisplayTime::Single {
        time: time.map(|time| time.display()),
    }
}

/// " track 3" suffix for the status line, empty without a predicted track
#[must_use]
pub fn track_for_commuter_rail(data: &TimeData) -> String {
    data.prediction
        .as_ref()
        .and_then(|p| p.track_text())
        .map(|track| format!(" track {track}"))
        .unwrap_or_default()
}

/// Time shown for non commuter rail modes: the prediction, else the schedule
#[must_use]
pub fn predicted_or_scheduled_time(data: &TimeData) -> Option<String> {
    data.prediction
        .as_ref()
        .and_then(|p| p.time.as_ref())
        .or(data.scheduled_time.as_ref())
        .map(|time| time.display())
}

/// Styling hint derived from a commuter rail status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusClass {
    Normal,
    /// Time is struck through
    Canceled,
    /// Time is dimmed; no realtime information
    Muted,
}

#[must_use]
pub fn status_class(status: Option<&str>) -> StatusClass {
    match status {
        Some("Canceled") => StatusClass::Canceled,
        Some("Scheduled") => StatusClass::Muted,
        _ => StatusClass::Normal,
    }
}

#[must_use]
pub fn headsigns_with_predictions(headsigns: &[Headsign]) -> Vec<&Headsign> {
    headsigns.iter().filter(|h| h.has_prediction_time()).collect()
}

/// Whether any predicted headsign in the feed reports crowding
#[must_use]
pub fn has_crowding(live_data: &LiveDataByStop) -> bool {
    live_data.values().any(|data| {
        headsigns_with_predictions(&data.headsigns)
            .iter()
            .any(|headsign| headsign.times.first().is_some_and(|t| t.crowding.is_some()))
    })
}

/// Split "Forge Park/495 via Fairmount" into its destination and via line
#[must_use]
pub fn split_headsign_name(name: &str) -> (&str, Option<String>) {
    match name.split_once(" via ") {
        Some((destination, via)) => (destination, Some(format!("via {via}"))),
        None => (name, None),
    }
}
