//! Logging facilities.
//!
//! Dropkit instruments itself with the `tracing` crate and emits nothing by
//! default; the host installs a subscriber to see logs. Every subsystem logs
//! under a stable target so output can be filtered per subsystem:
//!
//! ```
//! use tracing_subscriber::{EnvFilter, fmt};
//!
//! let filter = EnvFilter::new("dropkit_core::signal=trace,dropkit=debug");
//! let _ = fmt().with_env_filter(filter).with_test_writer().try_init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "dropkit_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "dropkit_core::signal";
    /// Deferred task queue target.
    pub const TASK: &str = "dropkit_core::task";
    /// Widget crate target.
    pub const WIDGET: &str = "dropkit";
    /// Select menu state machine target.
    pub const SELECT_MENU: &str = "dropkit::select_menu";
    /// Pointer grab registry target.
    pub const GRAB: &str = "dropkit::grab";
}

#[cfg(test)]
mod tests {
    use super::targets;

    #[test]
    fn subsystem_targets_nest_under_their_crate() {
        assert!(targets::SIGNAL.starts_with(targets::CORE));
        assert!(targets::TASK.starts_with(targets::CORE));
        assert!(targets::SELECT_MENU.starts_with(targets::WIDGET));
        assert!(targets::GRAB.starts_with(targets::WIDGET));
    }
}
