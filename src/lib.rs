#![allow(clippy::implicit_hasher)]
#![allow(unknown_lints)]

pub mod api;
pub mod constants;
pub mod diagram;
pub mod error;
pub mod live_feed;
pub mod logging;
pub mod models;
pub mod overlay;
pub mod prediction;
pub mod settings;
pub mod time;
pub mod vehicles;

#[cfg(target_arch = "wasm32")]
pub mod poller;

pub use diagram::{BranchDirection, BranchGroup, DiagramView, LineDiagram, RenderUnit};
pub use error::LayoutError;
pub use live_feed::{create_live_feed, LiveFeed, PollTarget, RequestSequence};
pub use settings::DiagramSettings;

#[cfg(target_arch = "wasm32")]
pub use poller::LiveDataPoller;
