use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use crate::time::compare_clock_times;

/// A display time as sent by the feed: `["10:10", " ", "AM"]` or `["3", " ", "min"]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeParts(pub String, pub String, pub String);

impl TimeParts {
    #[must_use]
    pub fn new(value: &str, separator: &str, unit: &str) -> Self {
        Self(value.to_string(), separator.to_string(), unit.to_string())
    }

    /// Relative countdown ("3 min") rather than a clock time
    #[must_use]
    pub fn is_minutes(&self) -> bool {
        self.2 == "min"
    }

    /// Chronological order against another clock time; `None` if either is a countdown
    #[must_use]
    pub fn compare_clock(&self, other: &Self) -> Option<Ordering> {
        if self.is_minutes() || other.is_minutes() {
            return None;
        }
        compare_clock_times(&self.display(), &other.display())
    }

    #[must_use]
    pub fn display(&self) -> String {
        format!("{}{}{}", self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleRelationship {
    Added,
    Cancelled,
    NoData,
    Skipped,
    Unscheduled,
    #[serde(other)]
    Scheduled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Prediction {
    #[serde(default)]
    pub time: Option<TimeParts>,
    /// Human-entered status, shown verbatim when present
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub track: Option<String>,
    #[serde(default)]
    pub schedule_relationship: Option<ScheduleRelationship>,
}

impl Prediction {
    #[must_use]
    pub fn is_skipped_or_cancelled(&self) -> bool {
        matches!(
            self.schedule_relationship,
            Some(ScheduleRelationship::Skipped | ScheduleRelationship::Cancelled)
        )
    }

    /// Status text, ignoring blank strings
    #[must_use]
    pub fn status_text(&self) -> Option<&str> {
        self.status.as_deref().filter(|status| !status.is_empty())
    }

    #[must_use]
    pub fn track_text(&self) -> Option<&str> {
        self.track.as_deref().filter(|track| !track.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrowdingLevel {
    NotCrowded,
    SomeCrowding,
    Crowded,
}

impl CrowdingLevel {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotCrowded => "Not crowded",
            Self::SomeCrowding => "Some crowding",
            Self::Crowded => "Crowded",
        }
    }
}

/// One scheduled and/or predicted departure of a headsign
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TimeData {
    /// Minutes behind schedule
    #[serde(default)]
    pub delay: i64,
    #[serde(default)]
    pub scheduled_time: Option<TimeParts>,
    #[serde(default)]
    pub prediction: Option<Prediction>,
    #[serde(default)]
    pub crowding: Option<CrowdingLevel>,
}

impl TimeData {
    #[must_use]
    pub fn has_prediction_time(&self) -> bool {
        self.prediction.as_ref().is_some_and(|p| p.time.is_some())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Headsign {
    #[serde(alias = "headsign_name")]
    pub name: String,
    #[serde(default)]
    pub trip_name: Option<String>,
    #[serde(default)]
    pub track: Option<String>,
    #[serde(default, alias = "time_data_with_crowding_list")]
    pub times: Vec<TimeData>,
}

impl Headsign {
    #[must_use]
    pub fn has_prediction_time(&self) -> bool {
        self.times.iter().any(TimeData::has_prediction_time)
    }

    /// "Train 512" label shown beside commuter rail headsigns
    #[must_use]
    pub fn train_label(&self) -> Option<String> {
        self.trip_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(|name| format!("Train {name}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    InTransit,
    Incoming,
    Stopped,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub status: VehicleStatus,
    #[serde(default)]
    pub trip_name: Option<String>,
    #[serde(default)]
    pub crowding: Option<CrowdingLevel>,
    #[serde(default)]
    pub headsign: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LiveData {
    #[serde(default)]
    pub headsigns: Vec<Headsign>,
    /// `None` when the feed sent no vehicle list for the stop
    #[serde(default)]
    pub vehicles: Option<Vec<Vehicle>>,
}

/// Realtime payload, keyed by stop id in feed order
pub type LiveDataByStop = IndexMap<String, LiveData>;
