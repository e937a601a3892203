//! Browser side of the hero autoplay: page clock and `setTimeout` scheduler.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use agri_carousel::{Scheduler, SchedulerError};
use leptos::prelude::{set_timeout_with_handle, TimeoutHandle};

/// Milliseconds on the page's monotonic clock (`performance.now()`).
///
/// Falls back to `Date.now()` when no window is available (workers).
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> u64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or_else(js_sys::Date::now) as u64
}

/// Milliseconds on a monotonic clock anchored at the first call.
#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> u64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static ORIGIN: OnceLock<Instant> = OnceLock::new();
    ORIGIN.get_or_init(Instant::now).elapsed().as_millis() as u64
}

/// [`Scheduler`] backed by `window.setTimeout`.
///
/// Every expiry calls the same `on_expire` callback. Only usable in a
/// browser; the hero creates it inside an effect, which never runs during
/// server rendering.
#[derive(Clone)]
pub struct BrowserScheduler {
    on_expire: Arc<dyn Fn() + Send + Sync>,
}

impl BrowserScheduler {
    /// Scheduler that runs `on_expire` whenever a timeout fires.
    pub fn new(on_expire: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            on_expire: Arc::new(on_expire),
        }
    }
}

impl Scheduler for BrowserScheduler {
    type Handle = TimeoutHandle;

    fn schedule(&mut self, after: Duration) -> Result<TimeoutHandle, SchedulerError> {
        let on_expire = Arc::clone(&self.on_expire);
        set_timeout_with_handle(move || on_expire(), after)
            .map_err(|err| SchedulerError::new(format!("setTimeout failed: {err:?}")))
    }

    fn cancel(&mut self, handle: TimeoutHandle) {
        handle.clear();
    }
}

impl fmt::Debug for BrowserScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrowserScheduler").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_never_goes_backwards() {
        let samples: Vec<u64> = (0..1000).map(|_| now_ms()).collect();
        assert!(samples.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn clock_advances_with_real_time() {
        let start = now_ms();
        std::thread::sleep(Duration::from_millis(20));
        assert!(now_ms() >= start + 20);
    }
}
