//! The carousel state machine.
//!
//! Two orthogonal dimensions:
//!
//! ```text
//! Position: ring of deck.len()       advance -> successor, go_to_slide -> direct set
//! Timer:    Running <-> Paused       pause / resume; Running emits advance on expiry
//! ```
//!
//! Time is always passed in as `now_ms`. The controller never reads a clock
//! and never schedules anything itself; each transition returns a
//! [`TimerDirective`] for the [`crate::AutoplayTimer`] that owns the real
//! timer.

use std::time::Duration;

use tracing::debug;

use crate::config::{CarouselConfig, NavigationPolicy};
use crate::deck::{Slide, SlideDeck};
use crate::error::CarouselError;
use crate::view::{CarouselView, Dot};

/// Instruction from the controller to the timer resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerDirective {
    /// Cancel whatever is pending and expire once after `after`.
    Arm {
        /// Delay until the next expiry
        after: Duration,
    },
    /// Cancel whatever is pending.
    Cancel,
    /// Leave the pending expiry alone.
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum TimerState {
    Running { cycle_start: u64, deadline: u64 },
    Paused { frozen: f64 },
}

/// Hero carousel controller: current slide, autoplay timing, hover pause.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel<T> {
    deck: SlideDeck<T>,
    config: CarouselConfig,
    index: usize,
    timer: TimerState,
    cycle: u64,
}

impl<T: Slide> Carousel<T> {
    /// Mount a carousel at slide 0 with autoplay running from `now_ms`.
    pub fn new(deck: SlideDeck<T>, config: CarouselConfig, now_ms: u64) -> Result<Self, CarouselError> {
        config.validate()?;
        debug!(
            slides = deck.len(),
            interval_ms = config.interval_ms,
            "carousel mounted"
        );
        Ok(Self {
            deck,
            config,
            index: 0,
            timer: TimerState::Running {
                cycle_start: now_ms,
                deadline: now_ms.saturating_add(config.interval_ms),
            },
            cycle: 0,
        })
    }

    /// Validate `slides` into a deck and mount it.
    pub fn from_slides(slides: Vec<T>, config: CarouselConfig, now_ms: u64) -> Result<Self, CarouselError> {
        Self::new(SlideDeck::new(slides)?, config, now_ms)
    }

    /// Active slide id.
    pub fn current_id(&self) -> &str {
        self.current().id()
    }
}

impl<T> Carousel<T> {
    /// Index of the active slide.
    pub fn current_index(&self) -> usize {
        self.index
    }

    /// The active slide.
    pub fn current(&self) -> &T {
        // index is only ever set from bounds-checked input or successor()
        &self.deck.as_slice()[self.index]
    }

    /// The slide deck.
    pub fn deck(&self) -> &SlideDeck<T> {
        &self.deck
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.deck.len()
    }

    /// Always false; see [`SlideDeck::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// Timing configuration.
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// True while a suspending interaction is active.
    pub fn is_paused(&self) -> bool {
        matches!(self.timer, TimerState::Paused { .. })
    }

    /// Progress cycle generation. Bumped on every index change and resume.
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Length of the current progress cycle.
    ///
    /// A full interval, except under [`NavigationPolicy::KeepSchedule`] where
    /// a manual jump inherits whatever is left of the running countdown.
    pub fn cycle_span(&self) -> Duration {
        match self.timer {
            TimerState::Running {
                cycle_start,
                deadline,
            } => Duration::from_millis(deadline.saturating_sub(cycle_start)),
            TimerState::Paused { .. } => self.config.interval(),
        }
    }

    /// Time left until the next autoplay advance, `None` while paused.
    pub fn remaining(&self, now_ms: u64) -> Option<Duration> {
        match self.timer {
            TimerState::Running { deadline, .. } => {
                Some(Duration::from_millis(deadline.saturating_sub(now_ms)))
            }
            TimerState::Paused { .. } => None,
        }
    }

    /// Fraction of the current cycle elapsed, in `[0, 1]`.
    ///
    /// Frozen at the value captured by [`Carousel::pause`] while paused.
    pub fn progress(&self, now_ms: u64) -> f64 {
        match self.timer {
            TimerState::Running {
                cycle_start,
                deadline,
            } => {
                let span = deadline.saturating_sub(cycle_start);
                if span == 0 {
                    return 1.0;
                }
                let elapsed = now_ms.saturating_sub(cycle_start);
                (elapsed as f64 / span as f64).min(1.0)
            }
            TimerState::Paused { frozen } => frozen,
        }
    }

    /// Directive that brings a fresh timer resource in line with this state.
    pub fn resync(&self, now_ms: u64) -> TimerDirective {
        match self.remaining(now_ms) {
            Some(after) => TimerDirective::Arm { after },
            None => TimerDirective::Cancel,
        }
    }

    /// Jump straight to `index`.
    ///
    /// Always immediate, paused or not, and always restarts the progress
    /// cycle. Out-of-range indices are rejected and leave the state as is.
    pub fn go_to_slide(&mut self, index: usize, now_ms: u64) -> Result<TimerDirective, CarouselError> {
        if index >= self.deck.len() {
            return Err(CarouselError::IndexOutOfRange {
                index,
                len: self.deck.len(),
            });
        }

        debug!(from = self.index, to = index, "carousel go_to_slide");
        self.index = index;
        self.cycle += 1;

        let directive = match self.timer {
            TimerState::Paused { .. } => {
                self.timer = TimerState::Paused { frozen: 0.0 };
                TimerDirective::Unchanged
            }
            TimerState::Running { deadline, .. } => match self.config.navigation {
                NavigationPolicy::Rearm => self.restart_cycle(now_ms),
                // A countdown already due (late host timer) cannot be inherited.
                NavigationPolicy::KeepSchedule if now_ms >= deadline => self.restart_cycle(now_ms),
                NavigationPolicy::KeepSchedule => {
                    self.timer = TimerState::Running {
                        cycle_start: now_ms,
                        deadline,
                    };
                    TimerDirective::Unchanged
                }
            },
        };
        Ok(directive)
    }

    /// Move to the next slide, wrapping after the last one.
    ///
    /// This is the autoplay step; it does nothing while paused.
    pub fn advance(&mut self, now_ms: u64) -> TimerDirective {
        if self.is_paused() {
            debug!(index = self.index, "carousel advance ignored while paused");
            return TimerDirective::Cancel;
        }

        let next = self.deck.successor(self.index);
        debug!(from = self.index, to = next, "carousel advance");
        self.index = next;
        self.cycle += 1;
        self.restart_cycle(now_ms)
    }

    /// Timer expiry entry point.
    ///
    /// Advances once the deadline is reached. An early expiry is re-armed for
    /// the remainder; a stale one that lands while paused is dropped.
    pub fn on_timer(&mut self, now_ms: u64) -> TimerDirective {
        match self.timer {
            TimerState::Paused { .. } => TimerDirective::Cancel,
            TimerState::Running { deadline, .. } if now_ms >= deadline => self.advance(now_ms),
            TimerState::Running { deadline, .. } => TimerDirective::Arm {
                after: Duration::from_millis(deadline - now_ms),
            },
        }
    }

    /// Suspend autoplay and freeze the progress fraction.
    pub fn pause(&mut self, now_ms: u64) -> TimerDirective {
        if self.is_paused() {
            return TimerDirective::Unchanged;
        }
        let frozen = self.progress(now_ms);
        debug!(index = self.index, frozen, "carousel paused");
        self.timer = TimerState::Paused { frozen };
        TimerDirective::Cancel
    }

    /// Resume autoplay with a fresh full interval and an empty progress bar.
    pub fn resume(&mut self, now_ms: u64) -> TimerDirective {
        if !self.is_paused() {
            return TimerDirective::Unchanged;
        }
        debug!(index = self.index, "carousel resumed");
        self.cycle += 1;
        self.restart_cycle(now_ms)
    }

    /// Pointer entered the carousel surface.
    pub fn hover_start(&mut self, now_ms: u64) -> TimerDirective {
        if self.config.pause_on_hover {
            self.pause(now_ms)
        } else {
            TimerDirective::Unchanged
        }
    }

    /// Pointer left the carousel surface.
    pub fn hover_end(&mut self, now_ms: u64) -> TimerDirective {
        if self.config.pause_on_hover {
            self.resume(now_ms)
        } else {
            TimerDirective::Unchanged
        }
    }

    /// Derived view state at `now_ms`.
    pub fn view(&self, now_ms: u64) -> CarouselView<'_, T> {
        let dots = self
            .deck
            .iter()
            .enumerate()
            .map(|(index, slide)| Dot {
                index,
                slide,
                active: index == self.index,
            })
            .collect();

        CarouselView {
            active: self.current(),
            active_index: self.index,
            dots,
            progress: self.progress(now_ms),
            paused: self.is_paused(),
            cycle: self.cycle,
            cycle_span: self.cycle_span(),
        }
    }

    fn restart_cycle(&mut self, now_ms: u64) -> TimerDirective {
        self.timer = TimerState::Running {
            cycle_start: now_ms,
            deadline: now_ms.saturating_add(self.config.interval_ms),
        };
        TimerDirective::Arm {
            after: self.config.interval(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::tests::{deck_of, TestSlide};
    use pretty_assertions::assert_eq;

    const INTERVAL: u64 = 5000;

    fn carousel(n: usize) -> Carousel<TestSlide> {
        Carousel::new(deck_of(n), CarouselConfig::with_interval_ms(INTERVAL), 0).expect("carousel")
    }

    fn arm(ms: u64) -> TimerDirective {
        TimerDirective::Arm {
            after: Duration::from_millis(ms),
        }
    }

    #[test]
    fn mounts_at_first_slide_running() {
        let c = carousel(5);
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.current_id(), "a");
        assert!(!c.is_paused());
        assert_eq!(c.resync(0), arm(INTERVAL));
    }

    #[test]
    fn rejects_zero_interval() {
        let result = Carousel::new(deck_of(2), CarouselConfig::with_interval_ms(0), 0);
        assert_eq!(result.unwrap_err(), CarouselError::ZeroInterval);
    }

    #[test]
    fn advance_n_times_lands_on_n_mod_len() {
        for n in 0..17u64 {
            let mut c = carousel(5);
            for step in 0..n {
                c.advance(step * INTERVAL);
            }
            assert_eq!(c.current_index() as u64, n % 5, "after {n} advances");
        }
    }

    #[test]
    fn advance_from_last_wraps_to_first() {
        let mut c = carousel(4);
        c.go_to_slide(3, 10).expect("in range");
        assert_eq!(c.advance(20), arm(INTERVAL));
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn go_to_slide_is_immediate_and_resets_progress() {
        let mut c = carousel(5);
        c.advance(INTERVAL);
        assert_eq!(c.current_index(), 1);

        let now = INTERVAL + 2500;
        assert!(c.progress(now) > 0.0);
        let directive = c.go_to_slide(4, now).expect("in range");

        assert_eq!(c.current_index(), 4);
        assert_eq!(c.progress(now), 0.0);
        assert_eq!(directive, arm(INTERVAL));
    }

    #[test]
    fn go_to_slide_out_of_range_leaves_state_untouched() {
        let mut c = carousel(3);
        c.advance(INTERVAL);
        let before = c.clone();

        let err = c.go_to_slide(3, INTERVAL + 10).unwrap_err();

        assert_eq!(err, CarouselError::IndexOutOfRange { index: 3, len: 3 });
        assert_eq!(c, before);
    }

    #[test]
    fn keep_schedule_leaves_pending_tick_in_place() {
        let config = CarouselConfig {
            navigation: NavigationPolicy::KeepSchedule,
            ..CarouselConfig::with_interval_ms(INTERVAL)
        };
        let mut c = Carousel::new(deck_of(5), config, 0).expect("carousel");

        let directive = c.go_to_slide(3, 4000).expect("in range");

        assert_eq!(directive, TimerDirective::Unchanged);
        assert_eq!(c.remaining(4000), Some(Duration::from_millis(1000)));
        assert_eq!(c.cycle_span(), Duration::from_millis(1000));
        assert_eq!(c.progress(4000), 0.0);
        assert_eq!(c.progress(4500), 0.5);

        assert_eq!(c.on_timer(5000), arm(INTERVAL));
        assert_eq!(c.current_index(), 4);
    }

    #[test]
    fn keep_schedule_restarts_when_countdown_already_due() {
        let config = CarouselConfig {
            navigation: NavigationPolicy::KeepSchedule,
            ..CarouselConfig::with_interval_ms(INTERVAL)
        };
        let mut c = Carousel::new(deck_of(5), config, 0).expect("carousel");

        // The tick due at 5000 has not been delivered yet.
        let directive = c.go_to_slide(3, 5200).expect("in range");

        assert_eq!(directive, arm(INTERVAL));
        assert_eq!(c.current_index(), 3);
        assert_eq!(c.progress(5200), 0.0);
        assert_eq!(c.cycle_span(), Duration::from_millis(INTERVAL));

        // The late tick finally lands and is treated as early.
        assert_eq!(c.on_timer(5300), arm(INTERVAL - 100));
        assert_eq!(c.current_index(), 3);
    }

    #[test]
    fn advance_resets_progress_and_bumps_cycle() {
        let mut c = carousel(5);
        assert_eq!(c.progress(INTERVAL), 1.0);
        let cycle = c.cycle();

        c.advance(INTERVAL);

        assert_eq!(c.current_index(), 1);
        assert_eq!(c.progress(INTERVAL), 0.0);
        assert_eq!(c.cycle(), cycle + 1);
        assert_eq!(c.cycle_span(), Duration::from_millis(INTERVAL));
    }

    #[test]
    fn timer_expiry_resets_progress_and_bumps_cycle() {
        let mut c = carousel(5);
        let cycle = c.cycle();

        assert_eq!(c.on_timer(INTERVAL + 40), arm(INTERVAL));

        assert_eq!(c.current_index(), 1);
        assert_eq!(c.progress(INTERVAL + 40), 0.0);
        assert_eq!(c.cycle(), cycle + 1);
        assert_eq!(c.progress(INTERVAL + 40 + INTERVAL / 2), 0.5);
    }

    #[test]
    fn pause_freezes_progress_and_cancels_timer() {
        let mut c = carousel(5);
        assert_eq!(c.pause(1250), TimerDirective::Cancel);
        assert!(c.is_paused());
        assert_eq!(c.progress(1250), 0.25);
        assert_eq!(c.progress(60_000), 0.25);
        assert_eq!(c.remaining(60_000), None);
    }

    #[test]
    fn pause_and_resume_are_idempotent() {
        let mut c = carousel(5);
        assert_eq!(c.resume(10), TimerDirective::Unchanged);
        assert_eq!(c.pause(10), TimerDirective::Cancel);
        assert_eq!(c.pause(20), TimerDirective::Unchanged);
        let cycle = c.cycle();
        assert_eq!(c.resume(30), arm(INTERVAL));
        assert_eq!(c.cycle(), cycle + 1);
        assert_eq!(c.resume(40), TimerDirective::Unchanged);
        assert_eq!(c.cycle(), cycle + 1);
    }

    #[test]
    fn advance_is_noop_while_paused() {
        let mut c = carousel(5);
        c.pause(100);
        assert_eq!(c.advance(200), TimerDirective::Cancel);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn stale_timer_while_paused_is_dropped() {
        let mut c = carousel(5);
        c.pause(4999);
        assert_eq!(c.on_timer(5000), TimerDirective::Cancel);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn early_timer_rearms_for_remainder() {
        let mut c = carousel(5);
        assert_eq!(c.on_timer(4990), arm(10));
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.on_timer(5000), arm(INTERVAL));
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn resume_starts_a_full_fresh_interval() {
        let mut c = carousel(5);
        c.pause(4000);
        c.resume(9000);
        assert_eq!(c.progress(9000), 0.0);
        assert_eq!(c.on_timer(13_999), arm(1));
        assert_eq!(c.current_index(), 0);
        c.on_timer(14_000);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn go_to_slide_while_paused_stays_paused_at_zero() {
        let mut c = carousel(5);
        c.pause(2500);
        let cycle = c.cycle();

        assert_eq!(c.go_to_slide(2, 3000), Ok(TimerDirective::Unchanged));

        assert!(c.is_paused());
        assert_eq!(c.current_index(), 2);
        assert_eq!(c.progress(3000), 0.0);
        assert_eq!(c.cycle(), cycle + 1);
    }

    #[test]
    fn progress_increases_monotonically_until_index_change() {
        let c = carousel(3);
        let samples: Vec<f64> = (0..=10).map(|i| c.progress(i * INTERVAL / 10)).collect();
        assert_eq!(samples[0], 0.0);
        assert_eq!(samples[10], 1.0);
        assert!(samples.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn hover_respects_pause_on_hover_flag() {
        let config = CarouselConfig {
            pause_on_hover: false,
            ..CarouselConfig::with_interval_ms(INTERVAL)
        };
        let mut c = Carousel::new(deck_of(3), config, 0).expect("carousel");
        assert_eq!(c.hover_start(100), TimerDirective::Unchanged);
        assert!(!c.is_paused());

        let mut c = carousel(3);
        assert_eq!(c.hover_start(100), TimerDirective::Cancel);
        assert_eq!(c.hover_end(200), arm(INTERVAL));
    }

    #[test]
    fn view_marks_exactly_one_active_dot() {
        let mut c = carousel(4);
        c.go_to_slide(2, 0).expect("in range");
        let view = c.view(0);

        let active: Vec<usize> = view.dots.iter().filter(|d| d.active).map(|d| d.index).collect();
        assert_eq!(active, vec![2]);
        assert_eq!(view.active, &TestSlide("c"));
        assert_eq!(view.active_index, 2);
        assert!(!view.paused);
    }
}
