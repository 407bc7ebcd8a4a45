//! Page environment helpers: query-string flags and the log level they select.

#[cfg(test)]
#[path = "env_test.rs"]
mod env_test;

/// Query parameter that turns on debug logging (`?debug=1`).
pub const DEBUG_PARAM: &str = "debug";

/// Whether `search` (a `location.search` string, with or without the leading
/// `?`) sets `name` to a truthy value.
#[must_use]
pub fn query_flag(search: &str, name: &str) -> bool {
    search.trim_start_matches('?').split('&').any(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        key == name && matches!(value, "1" | "true" | "on")
    })
}

/// `Debug` when the page was opened with `?debug=1`, `Info` otherwise.
#[must_use]
pub fn log_level(search: Option<&str>) -> log::Level {
    if search.is_some_and(|s| query_flag(s, DEBUG_PARAM)) { log::Level::Debug } else { log::Level::Info }
}

/// The current page's `location.search`.
#[cfg(feature = "csr")]
pub fn location_search() -> Option<String> {
    web_sys::window().and_then(|w| w.location().search().ok())
}
