/// Conditional logging module for development builds
///
/// The `log!` macro provides informational logging that is compiled out in
/// production (release) builds by default. Warnings and errors should keep
/// using `leptos::logging::warn!` and `leptos::logging::error!` directly.
///
/// Logging is enabled when either:
/// - Building in debug mode (`cfg(debug_assertions)`)
/// - The `console_logging` feature is explicitly enabled
///
/// # Examples
///
/// ```ignore
/// use line_diagram::logging::log;
///
/// let route_id = "Red";
/// log!("Grouped {} stops for {}", 22, route_id);
/// ```
/// Conditionally log in development builds
///
/// This macro expands to `leptos::logging::log!` (browser console on wasm,
/// stdout natively) in debug builds or when the `console_logging` feature is
/// enabled. In production release builds it compiles to nothing.
#[macro_export]
macro_rules! log {
    ($($arg:expr),+ $(,)?) => {
        #[cfg(any(debug_assertions, feature = "console_logging"))]
        {
            leptos::logging::log!("{}", format!($($arg),+));
        }
    };
}

pub use log;
