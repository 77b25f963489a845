use leptos::{create_signal, ReadSignal, SignalSet, WriteSignal};
use std::cell::RefCell;
use std::rc::Rc;
use crate::api::realtime::realtime_endpoint;
use crate::logging::log;
use crate::models::{DirectionId, LiveDataByStop};
use crate::settings::DiagramSettings;

/// Issue order of realtime requests and the newest one applied so far.
///
/// Responses may arrive out of order. One is applied only when it was
/// issued after the last applied response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSequence {
    issued: u64,
    applied: u64,
}

impl RequestSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticket for a new request
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Record a completed request, returning false if it is stale
    pub fn accept(&mut self, ticket: u64) -> bool {
        if ticket <= self.applied {
            return false;
        }
        self.applied = ticket;
        true
    }

    #[must_use]
    pub const fn last_applied(&self) -> u64 {
        self.applied
    }
}

/// Feeds realtime responses into the live data signal, dropping stale ones
#[derive(Clone)]
pub struct LiveFeed {
    sequence: Rc<RefCell<RequestSequence>>,
    set_live_data: WriteSignal<LiveDataByStop>,
}

impl LiveFeed {
    #[must_use]
    pub fn new(set_live_data: WriteSignal<LiveDataByStop>) -> Self {
        Self {
            sequence: Rc::new(RefCell::new(RequestSequence::new())),
            set_live_data,
        }
    }

    /// Ticket to hand back to `complete` when the request finishes
    #[must_use]
    pub fn begin(&self) -> u64 {
        self.sequence.borrow_mut().issue()
    }

    /// Apply a finished request unless a later one already landed.
    ///
    /// A failed request clears the overlay rather than keeping stale data.
    /// Returns whether the signal was updated.
    pub fn complete(&self, ticket: u64, result: Result<LiveDataByStop, String>) -> bool {
        if !self.sequence.borrow_mut().accept(ticket) {
            log!("Discarding stale realtime response #{}", ticket);
            return false;
        }

        let live_data = result.unwrap_or_else(|e| {
            leptos::logging::warn!("Realtime request #{ticket} failed: {e}");
            LiveDataByStop::new()
        });
        log!("Applying realtime response #{} for {} stops", ticket, live_data.len());
        self.set_live_data.set(live_data);
        true
    }
}

/// Where and how often to poll for one route direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollTarget {
    pub url: String,
    pub interval_ms: u32,
}

impl PollTarget {
    /// Endpoint from `realtime_base_url` and interval from `poll_interval_ms`
    ///
    /// # Errors
    ///
    /// Returns an error if the realtime endpoint cannot be resolved to an
    /// absolute url.
    pub fn for_route(settings: &DiagramSettings, route_id: &str, direction_id: DirectionId) -> Result<Self, String> {
        Ok(Self {
            url: realtime_endpoint(&settings.realtime_base_url, route_id, direction_id)?,
            interval_ms: settings.poll_interval_ms,
        })
    }
}

/// Creates the live data signal and the feed that writes to it
#[must_use]
pub fn create_live_feed() -> (LiveFeed, ReadSignal<LiveDataByStop>) {
    let (live_data, set_live_data) = create_signal(LiveDataByStop::new());
    (LiveFeed::new(set_live_data), live_data)
}
