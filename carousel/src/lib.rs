//! # agri-carousel
//!
//! Timed slide-rotation controller behind the A.S. Agri hero carousel.
//!
//! The crate has no UI dependency. It owns the slide index, the autoplay
//! timing and the pause-on-hover state, and hands plain view state to
//! whatever draws it (the Leptos components in `agri-site`).
//!
//! ## Quick Start
//!
//! ```rust
//! use agri_carousel::{Carousel, CarouselConfig, Slide, TimerDirective};
//! use std::time::Duration;
//!
//! #[derive(Debug, Clone)]
//! struct Banner {
//!     id: &'static str,
//!     title: &'static str,
//! }
//!
//! impl Slide for Banner {
//!     fn id(&self) -> &str {
//!         self.id
//!     }
//! }
//!
//! let slides = vec![
//!     Banner { id: "coconut", title: "COCONUT" },
//!     Banner { id: "coco-oil", title: "VIRGIN OIL" },
//! ];
//! let mut carousel = Carousel::from_slides(slides, CarouselConfig::default(), 0).unwrap();
//!
//! // Autoplay fires after one interval and moves to the next slide.
//! let next = carousel.on_timer(5000);
//! assert_eq!(carousel.current().title, "VIRGIN OIL");
//! assert_eq!(next, TimerDirective::Arm { after: Duration::from_secs(5) });
//!
//! // Hovering freezes everything until the pointer leaves.
//! carousel.hover_start(6000);
//! assert!(carousel.is_paused());
//! ```
//!
//! ## Architecture
//!
//! - [`deck`] - validated, fixed-length slide sequences
//! - [`config`] - interval and interaction policies
//! - [`controller`] - the state machine; every transition returns a [`TimerDirective`]
//! - [`timer`] - [`AutoplayTimer`], the scoped owner of the pending expiry
//! - [`view`] - derived state for indicator dots and the progress bar
//!
//! Time is passed in explicitly (`now_ms`), which keeps the controller
//! deterministic and usable on `wasm32` where `std::time::Instant` is not.

#![warn(missing_docs)]

pub mod config;
pub mod controller;
pub mod deck;
pub mod error;
pub mod timer;
pub mod view;

pub use config::{CarouselConfig, NavigationPolicy, DEFAULT_INTERVAL_MS};
pub use controller::{Carousel, TimerDirective};
pub use deck::{Slide, SlideDeck};
pub use error::{CarouselError, SchedulerError};
pub use timer::{AutoplayTimer, ManualScheduler, Scheduler};
pub use view::{CarouselView, Dot};
