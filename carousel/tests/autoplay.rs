//! End-to-end autoplay behaviour: controller + timer resource on a virtual clock.

use std::time::Duration;

use agri_carousel::{
    AutoplayTimer, Carousel, CarouselConfig, ManualScheduler, NavigationPolicy, Slide,
};
use pretty_assertions::assert_eq;

#[derive(Debug, Clone)]
struct Product {
    id: String,
}

impl Slide for Product {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Mounted carousel driven by a virtual clock, the way the hero drives it
/// with browser timeouts.
struct Stage {
    carousel: Carousel<Product>,
    timer: AutoplayTimer<ManualScheduler>,
}

impl Stage {
    fn mount(count: usize, config: CarouselConfig) -> Self {
        let slides = (0..count)
            .map(|i| Product {
                id: format!("product-{i}"),
            })
            .collect();
        let carousel = Carousel::from_slides(slides, config, 0).expect("carousel");
        let mut timer = AutoplayTimer::new(ManualScheduler::starting_at(0));
        timer.apply(carousel.resync(0)).expect("arm on mount");
        Self { carousel, timer }
    }

    /// Deliver every expiry due up to `now_ms`, then park the clock there.
    fn run_until(&mut self, now_ms: u64) {
        while let Some(due) = self.timer.scheduler_mut().pop_due(now_ms) {
            self.timer.scheduler_mut().set_now(due);
            self.timer.expired();
            let directive = self.carousel.on_timer(due);
            self.timer.apply(directive).expect("rearm");
        }
        self.timer.scheduler_mut().set_now(now_ms);
    }

    fn pointer_enter(&mut self, now_ms: u64) {
        self.run_until(now_ms);
        let directive = self.carousel.hover_start(now_ms);
        self.timer.apply(directive).expect("pause");
    }

    fn pointer_leave(&mut self, now_ms: u64) {
        self.run_until(now_ms);
        let directive = self.carousel.hover_end(now_ms);
        self.timer.apply(directive).expect("resume");
    }

    fn click_dot(&mut self, index: usize, now_ms: u64) {
        self.run_until(now_ms);
        let directive = self.carousel.go_to_slide(index, now_ms).expect("valid dot");
        self.timer.apply(directive).expect("navigate");
    }

    fn index(&self) -> usize {
        self.carousel.current_index()
    }
}

#[test]
fn hover_pause_then_resume_scenario() {
    let mut stage = Stage::mount(5, CarouselConfig::with_interval_ms(5000));
    assert_eq!(stage.index(), 0);

    stage.run_until(5000);
    assert_eq!(stage.index(), 1);

    stage.pointer_enter(6200);
    assert!(!stage.timer.is_armed());

    stage.run_until(15_000);
    assert_eq!(stage.index(), 1);

    stage.pointer_leave(15_000);
    stage.run_until(19_999);
    assert_eq!(stage.index(), 1);

    stage.run_until(20_000);
    assert_eq!(stage.index(), 2);
}

#[test]
fn dot_click_wins_over_pending_tick() {
    let mut stage = Stage::mount(5, CarouselConfig::with_interval_ms(5000));
    stage.run_until(5000);
    assert_eq!(stage.index(), 1);

    stage.click_dot(4, 9900);
    assert_eq!(stage.index(), 4);
    assert_eq!(stage.carousel.progress(9900), 0.0);

    // The old tick at 10000 must not undo the click.
    stage.run_until(14_899);
    assert_eq!(stage.index(), 4);

    stage.run_until(14_900);
    assert_eq!(stage.index(), 0);
}

#[test]
fn keep_schedule_lets_pending_tick_fire() {
    let config = CarouselConfig {
        navigation: NavigationPolicy::KeepSchedule,
        ..CarouselConfig::with_interval_ms(5000)
    };
    let mut stage = Stage::mount(5, config);

    stage.click_dot(3, 4900);
    stage.run_until(5000);
    assert_eq!(stage.index(), 4);
}

#[test]
fn wraps_around_after_full_rotation() {
    let mut stage = Stage::mount(3, CarouselConfig::with_interval_ms(1000));
    stage.run_until(3000);
    assert_eq!(stage.index(), 0);
    assert_eq!(stage.carousel.cycle(), 3);
}

#[test]
fn no_expiry_survives_teardown() {
    let slides = vec![
        Product { id: "coconut".into() },
        Product { id: "coco-oil".into() },
    ];
    let mut carousel =
        Carousel::from_slides(slides, CarouselConfig::with_interval_ms(5000), 0).expect("carousel");
    let mut scheduler = ManualScheduler::starting_at(0);

    {
        let mut timer = AutoplayTimer::new(&mut scheduler);
        timer.apply(carousel.resync(0)).expect("arm on mount");
        timer.apply(carousel.hover_start(1000)).expect("pause");
        timer.apply(carousel.hover_end(2000)).expect("resume");
        assert!(timer.is_armed());
        assert_eq!(timer.scheduler().pending_len(), 1);
        // unmount: the timer goes out of scope without an explicit disarm
    }

    assert_eq!(scheduler.pending_len(), 0);
    assert_eq!(scheduler.next_due(), None);
    assert_eq!(scheduler.pop_due(u64::MAX), None);
}

#[test]
fn pause_then_unmount_leaves_nothing_scheduled() {
    let mut stage = Stage::mount(2, CarouselConfig::with_interval_ms(5000));
    stage.pointer_enter(100);
    assert_eq!(stage.timer.scheduler().pending_len(), 0);
    assert_eq!(stage.carousel.remaining(100), None);
    assert_eq!(
        stage.carousel.cycle_span(),
        Duration::from_millis(5000),
        "paused carousels report a full span for the next cycle"
    );
}
