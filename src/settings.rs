use serde::{Deserialize, Serialize};
use crate::constants::{
    BASE_LINE_WIDTH, BRANCH_SPACING, CIRC_RADIUS, DELAY_THRESHOLD_MINUTES, EXPANDED_GROUP_MAX,
    INCOMING_OFFSET, IN_TRANSIT_OFFSET, POLL_INTERVAL_MS, STOPPED_OFFSET,
};
use crate::error::LayoutError;

/// How far above its stop a vehicle icon is drawn, per motion status
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleOffsets {
    #[serde(default = "default_in_transit_offset")]
    pub in_transit: f64,
    #[serde(default = "default_incoming_offset")]
    pub incoming: f64,
    #[serde(default = "default_stopped_offset")]
    pub stopped: f64,
}

impl Default for VehicleOffsets {
    fn default() -> Self {
        Self {
            in_transit: IN_TRANSIT_OFFSET,
            incoming: INCOMING_OFFSET,
            stopped: STOPPED_OFFSET,
        }
    }
}

fn default_in_transit_offset() -> f64 {
    IN_TRANSIT_OFFSET
}

fn default_incoming_offset() -> f64 {
    INCOMING_OFFSET
}

fn default_stopped_offset() -> f64 {
    STOPPED_OFFSET
}

/// Tunables for layout, status resolution and the live feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramSettings {
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u32,
    /// Absolute prefix for the realtime endpoint; empty resolves against the page origin
    #[serde(default)]
    pub realtime_base_url: String,
    #[serde(default = "default_delay_threshold")]
    pub delay_threshold_minutes: i64,
    #[serde(default = "default_expanded_group_max")]
    pub expanded_group_max: usize,
    #[serde(default = "default_circle_radius")]
    pub circle_radius: f64,
    #[serde(default = "default_branch_spacing")]
    pub branch_spacing: f64,
    #[serde(default = "default_base_line_width")]
    pub base_line_width: f64,
    #[serde(default)]
    pub vehicle_offsets: VehicleOffsets,
}

fn default_poll_interval_ms() -> u32 {
    POLL_INTERVAL_MS
}

fn default_delay_threshold() -> i64 {
    DELAY_THRESHOLD_MINUTES
}

fn default_expanded_group_max() -> usize {
    EXPANDED_GROUP_MAX
}

fn default_circle_radius() -> f64 {
    CIRC_RADIUS
}

fn default_branch_spacing() -> f64 {
    BRANCH_SPACING
}

fn default_base_line_width() -> f64 {
    BASE_LINE_WIDTH
}

impl Default for DiagramSettings {
    fn default() -> Self {
        Self {
            poll_interval_ms: POLL_INTERVAL_MS,
            realtime_base_url: String::new(),
            delay_threshold_minutes: DELAY_THRESHOLD_MINUTES,
            expanded_group_max: EXPANDED_GROUP_MAX,
            circle_radius: CIRC_RADIUS,
            branch_spacing: BRANCH_SPACING,
            base_line_width: BASE_LINE_WIDTH,
            vehicle_offsets: VehicleOffsets::default(),
        }
    }
}

impl DiagramSettings {
    /// Create new settings with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse settings from a JSON document, filling omitted fields with defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON for this shape, if
    /// the poll interval is zero, or if a realtime base url is set but is
    /// not an absolute url.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let settings: Self = serde_json::from_str(json)
            .map_err(|e| LayoutError::InvalidSettings(format!("Failed to parse settings: {e}")))?;

        if settings.poll_interval_ms == 0 {
            return Err(LayoutError::InvalidSettings(
                "poll_interval_ms must be greater than zero".to_string(),
            ));
        }

        if !settings.realtime_base_url.is_empty() {
            reqwest::Url::parse(&settings.realtime_base_url).map_err(|e| {
                LayoutError::InvalidSettings(format!(
                    "realtime_base_url {} is not an absolute url: {e}",
                    settings.realtime_base_url
                ))
            })?;
        }

        Ok(settings)
    }
}
