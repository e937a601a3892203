//! Derived view state. Computed on demand, never stored.

use std::time::Duration;

/// Everything a presentation layer needs to draw the carousel.
#[derive(Debug)]
pub struct CarouselView<'a, T> {
    /// The active slide
    pub active: &'a T,
    /// Index of the active slide
    pub active_index: usize,
    /// One indicator per slide, in display order
    pub dots: Vec<Dot<'a, T>>,
    /// Progress-bar fill fraction in `[0, 1]`
    pub progress: f64,
    /// Whether autoplay is suspended
    pub paused: bool,
    /// Progress cycle generation; key the progress element on this
    pub cycle: u64,
    /// Duration of one full fill of the progress bar
    pub cycle_span: Duration,
}

/// An indicator dot.
#[derive(Debug)]
pub struct Dot<'a, T> {
    /// Position in the deck
    pub index: usize,
    /// Slide this dot navigates to
    pub slide: &'a T,
    /// Rendered in the emphasized state
    pub active: bool,
}

impl<T> CarouselView<'_, T> {
    /// Progress as a CSS percentage, rounded to one decimal.
    pub fn progress_percent(&self) -> f64 {
        (self.progress * 1000.0).round() / 10.0
    }
}
