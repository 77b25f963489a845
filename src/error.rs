use thiserror::Error;

/// Failures raised while preparing a line diagram
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A stop arrived without any segment data, so it cannot be placed
    #[error("stop {stop_id} at position {index} has no segment entries")]
    EmptySegments { index: usize, stop_id: String },

    #[error("invalid diagram settings: {0}")]
    InvalidSettings(String),
}
