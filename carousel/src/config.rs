//! Autoplay configuration.
//!
//! Lives inside the site content file under `[hero.autoplay]`:
//!
//! ```toml
//! [hero.autoplay]
//! interval_ms = 5000
//! navigation = "rearm"
//! pause_on_hover = true
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::CarouselError;

/// Default time each slide stays active before autoplay advances.
pub const DEFAULT_INTERVAL_MS: u64 = 5000;

/// What an explicit `go_to_slide` does to the pending autoplay tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavigationPolicy {
    /// Restart the countdown so a click is never undone by a pending tick.
    #[default]
    Rearm,
    /// Leave the pending tick where it is; the new slide may be shown for
    /// less than a full interval. A countdown that is already due is
    /// restarted as with [`NavigationPolicy::Rearm`].
    KeepSchedule,
}

/// Carousel timing and interaction settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Autoplay period in milliseconds
    pub interval_ms: u64,
    /// Behaviour of manual navigation with respect to the timer
    pub navigation: NavigationPolicy,
    /// Whether pointer hover suspends autoplay
    pub pause_on_hover: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            navigation: NavigationPolicy::default(),
            pause_on_hover: true,
        }
    }
}

impl CarouselConfig {
    /// Config with the given interval and default policies.
    pub fn with_interval_ms(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            ..Self::default()
        }
    }

    /// Autoplay period as a [`Duration`].
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Reject settings the controller cannot run with.
    pub fn validate(&self) -> Result<(), CarouselError> {
        if self.interval_ms == 0 {
            return Err(CarouselError::ZeroInterval);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_five_second_rearm_with_hover_pause() {
        let config = CarouselConfig::default();
        assert_eq!(config.interval(), Duration::from_secs(5));
        assert_eq!(config.navigation, NavigationPolicy::Rearm);
        assert!(config.pause_on_hover);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_interval_is_rejected() {
        let config = CarouselConfig::with_interval_ms(0);
        assert_eq!(config.validate(), Err(CarouselError::ZeroInterval));
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: CarouselConfig =
            serde_json::from_str(r#"{"navigation":"keep-schedule"}"#).expect("parse");
        assert_eq!(config.interval_ms, DEFAULT_INTERVAL_MS);
        assert_eq!(config.navigation, NavigationPolicy::KeepSchedule);
        assert!(config.pause_on_hover);
    }
}
