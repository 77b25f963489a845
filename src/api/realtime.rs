use reqwest::Url;
use crate::constants::{REALTIME_API_VERSION, REALTIME_PATH};
use crate::models::{DirectionId, LiveDataByStop};

/// Realtime endpoint for one route direction under `base`
#[must_use]
pub fn realtime_url(base: &str, route_id: &str, direction_id: DirectionId) -> String {
    format!(
        "{}{REALTIME_PATH}?id={route_id}&direction_id={}&v={REALTIME_API_VERSION}",
        base.trim_end_matches('/'),
        direction_id.index(),
    )
}

/// Origin of the page the diagram is embedded in
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

/// Native builds have no page to resolve against
#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn page_origin() -> Option<String> {
    None
}

/// Absolute realtime endpoint for one route direction.
///
/// An empty `base` resolves against the page origin.
///
/// # Errors
///
/// Returns an error if `base` is empty and there is no page origin, or if
/// the result is not an absolute URL.
pub fn realtime_endpoint(base: &str, route_id: &str, direction_id: DirectionId) -> Result<String, String> {
    let base = if base.is_empty() {
        page_origin().ok_or_else(|| "No realtime base url and no page origin to resolve against".to_string())?
    } else {
        base.to_string()
    };

    let url = realtime_url(&base, route_id, direction_id);
    Url::parse(&url).map_err(|e| format!("Invalid realtime url {url}: {e}"))?;
    Ok(url)
}

/// Fetch the live headsigns and vehicles for every stop of a route direction
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP request fails
/// - The response status is not ok
/// - The response body cannot be deserialized
pub async fn fetch_live_data(url: &str) -> Result<LiveDataByStop, String> {
    reqwest::get(url)
        .await
        .map_err(|e| format!("Request failed: {e}"))?
        .error_for_status()
        .map_err(|e| format!("Bad response: {e}"))?
        .json::<LiveDataByStop>()
        .await
        .map_err(|e| format!("Failed to deserialize: {e}"))
}
