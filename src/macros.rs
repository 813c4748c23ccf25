/// Debug-level log line under the `bytes_kit` target.
///
/// Forwards to `tracing`; nothing is emitted unless the application installs a subscriber.
macro_rules! debug {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "bytes_kit", $($arg)*)
    };
}
