use gloo_timers::callback::Interval;
use std::future::Future;
use wasm_bindgen_futures::spawn_local;
use crate::api::realtime::fetch_live_data;
use crate::live_feed::{LiveFeed, PollTarget};
use crate::logging::log;
use crate::models::{DirectionId, LiveDataByStop};
use crate::settings::DiagramSettings;

/// Polls the realtime endpoint on a fixed interval until dropped.
///
/// Each tick fires a request without waiting for the previous one; the
/// feed discards responses that land after a newer one.
pub struct LiveDataPoller {
    _interval: Interval,
}

impl LiveDataPoller {
    /// Poll one route direction as configured by `settings`
    ///
    /// # Errors
    ///
    /// Returns an error if the realtime endpoint cannot be resolved.
    pub fn for_route(
        feed: LiveFeed,
        settings: &DiagramSettings,
        route_id: &str,
        direction_id: DirectionId,
    ) -> Result<Self, String> {
        let target = PollTarget::for_route(settings, route_id, direction_id)?;
        Ok(Self::start(feed, target))
    }

    /// Start polling `target`, with the first request sent immediately
    #[must_use]
    pub fn start(feed: LiveFeed, target: PollTarget) -> Self {
        log!("Polling {} every {}ms", target.url, target.interval_ms);
        let url = target.url;
        Self::with_fetch(feed, target.interval_ms, move || {
            let url = url.clone();
            async move { fetch_live_data(&url).await }
        })
    }

    /// Poll with a custom request function
    #[must_use]
    pub fn with_fetch<F, Fut>(feed: LiveFeed, interval_ms: u32, fetch: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<LiveDataByStop, String>> + 'static,
    {
        poll_once(&feed, &fetch);

        let interval = Interval::new(interval_ms, move || {
            poll_once(&feed, &fetch);
        });

        Self { _interval: interval }
    }
}

fn poll_once<F, Fut>(feed: &LiveFeed, fetch: &F)
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<LiveDataByStop, String>> + 'static,
{
    let ticket = feed.begin();
    let request = fetch();
    let feed = feed.clone();
    spawn_local(async move {
        let result = request.await;
        feed.complete(ticket, result);
    });
}
