use serde::{Deserialize, Serialize};
use super::StopFeatures;

/// Pixel position of a stop circle, supplied by the diagram geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StopCoord {
    pub x: f64,
    pub y: f64,
}

impl StopCoord {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(rename = "is_terminus?", default)]
    pub is_terminus: bool,
    #[serde(rename = "is_beginning?", default)]
    pub is_beginning: bool,
    #[serde(default)]
    pub zone: Option<String>,
    #[serde(rename = "stop_features", default)]
    pub features: StopFeatures,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<StopCoord>,
}

impl Stop {
    /// Whether the stop carries a non-empty branch label
    #[must_use]
    pub fn has_branch(&self) -> bool {
        self.branch.as_deref().is_some_and(|branch| !branch.is_empty())
    }

    /// The last stop in this direction of travel
    #[must_use]
    pub fn is_destination(&self) -> bool {
        self.is_terminus && !self.is_beginning
    }
}

/// Role a stop plays in one of the diagram's parallel line columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Stop,
    Line,
    Merge,
    Terminus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SegmentEntry {
    #[serde(rename = "type")]
    pub kind: SegmentKind,
}

impl SegmentEntry {
    #[must_use]
    pub const fn new(kind: SegmentKind) -> Self {
        Self { kind }
    }
}

/// A stop placed in route order together with its segment data
///
/// `index` is the stop's position in the sequence it was laid out in; it is
/// reassigned by every layout pass and never trusted from input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaidOutStop {
    #[serde(rename = "route_stop")]
    pub stop: Stop,
    #[serde(rename = "stop_data")]
    pub segments: Vec<SegmentEntry>,
    #[serde(default)]
    pub index: usize,
}

impl LaidOutStop {
    #[must_use]
    pub fn new(stop: Stop, segments: Vec<SegmentEntry>) -> Self {
        Self { stop, segments, index: 0 }
    }

    /// Copy of this stop stamped with its position in a sequence
    #[must_use]
    pub fn at(&self, index: usize) -> Self {
        Self { index, ..self.clone() }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.stop.id
    }

    #[must_use]
    pub fn has_segment(&self, kind: SegmentKind) -> bool {
        self.segments.iter().any(|segment| segment.kind == kind)
    }
}
