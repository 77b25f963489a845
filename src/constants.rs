/// Live data refresh interval (15 seconds)
pub const POLL_INTERVAL_MS: u32 = 15_000;

/// Path of the realtime line endpoint, relative to the site root
pub const REALTIME_PATH: &str = "/schedules/line_api/realtime";

/// Version of the realtime payload this crate understands
pub const REALTIME_API_VERSION: u32 = 2;

/// Commuter rail trips this many minutes late are shown as delayed
pub const DELAY_THRESHOLD_MINUTES: i64 = 5;

/// Branch groups up to this size are always rendered expanded
pub const EXPANDED_GROUP_MAX: usize = 2;

/// Radius of a stop circle on the diagram, in pixels
pub const CIRC_RADIUS: f64 = 4.0;

/// Horizontal distance between parallel branch lines, in pixels
pub const BRANCH_SPACING: f64 = 8.0;

/// Width reserved on each side of the diagram for the trunk line, in pixels
pub const BASE_LINE_WIDTH: f64 = 8.0;

/// Vehicle icon offsets above the stop, in pixels
pub const IN_TRANSIT_OFFSET: f64 = 50.0;
pub const INCOMING_OFFSET: f64 = 25.0;
pub const STOPPED_OFFSET: f64 = 10.0;
