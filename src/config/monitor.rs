// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cadence settings for the monitor front-end.

use std::time::Duration;

/// Default delay between two status polls. Kept coarse to limit API load.
pub const DEFAULT_UPDATE_INTERVAL: Duration = Duration::from_secs(10);

/// Default delay before refreshing after a lifecycle action was issued.
pub const DEFAULT_ACTION_REFRESH_DELAY: Duration = Duration::from_secs(2);

/// Timing settings for the monitor front-end.
///
/// These are not read from the environment; the front-end bakes them in
/// and exposes builder-style setters for callers that need a different
/// cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorSettings {
    /// Delay between two status polls against the node.
    pub update_interval: Duration,

    /// Delay between issuing a VM/container lifecycle action and the
    /// follow-up status refresh.
    pub action_refresh_delay: Duration,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            update_interval: DEFAULT_UPDATE_INTERVAL,
            action_refresh_delay: DEFAULT_ACTION_REFRESH_DELAY,
        }
    }
}

impl MonitorSettings {
    /// Create settings with the default cadence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the poll interval.
    #[must_use]
    pub fn with_update_interval(mut self, interval: Duration) -> Self {
        self.update_interval = interval;
        self
    }

    /// Set the post-action refresh delay.
    #[must_use]
    pub fn with_action_refresh_delay(mut self, delay: Duration) -> Self {
        self.action_refresh_delay = delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monitor_settings_default() {
        let settings = MonitorSettings::default();

        assert_eq!(settings.update_interval, Duration::from_secs(10));
        assert_eq!(settings.action_refresh_delay, Duration::from_secs(2));
    }

    #[test]
    fn test_monitor_settings_builder() {
        let settings = MonitorSettings::new()
            .with_update_interval(Duration::from_secs(30))
            .with_action_refresh_delay(Duration::from_millis(500));

        assert_eq!(settings.update_interval, Duration::from_secs(30));
        assert_eq!(settings.action_refresh_delay, Duration::from_millis(500));
    }
}
