//! Logging helpers layered on the [log] facade.
//!
//! The crate never installs a logger; whichever binary links it decides where
//! records go. Bring-up progress is reported through [debug_ex], which compiles
//! away in release builds.

/// Debug-level record emitted only when `debug_assertions` are enabled.
///
/// Bring-up traces every step it takes; in release builds those records are
/// removed entirely instead of being filtered at runtime.
#[macro_export]
macro_rules! debug_ex {
    // debug_ex!(target: "pm8018", "a {} event", "log")
    (target: $target:expr, $($arg:tt)+) => {
        #[cfg(debug_assertions)]
        {
            log::log!(target: $target, log::Level::Debug, $($arg)+)
        }
    };

    // debug_ex!("a {} event", "log")
    ($($arg:tt)+) => {
        #[cfg(debug_assertions)]
        {
            log::log!(log::Level::Debug, $($arg)+)
        }
    }
}

/// Log target shared by every record the PM8018 core emits.
pub const TARGET: &str = "pm8018";
