//! Leptos components for the landing page.
//!
//! Each section is a `#[component]` that takes its slice of
//! [`SiteContent`](crate::types::SiteContent) by value.
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument (static export only)
//! └── LandingPage
//!     ├── Navbar
//!     ├── Hero (carousel + autoplay timer)
//!     └── main
//!         ├── About
//!         ├── Products
//!         │   └── ProductCard
//!         ├── Certificates
//!         ├── Memberships
//!         ├── Testimonials
//!         ├── Faq (accordion)
//!         └── Footer
//! ```

mod about;
mod certificates;
mod document;
mod faq;
mod footer;
mod hero;
mod icons;
mod memberships;
mod navbar;
mod page;
mod products;
mod testimonials;

pub use about::About;
pub use certificates::Certificates;
pub use document::SiteDocument;
pub use faq::Faq;
pub use footer::Footer;
pub use hero::{progress_style, title_glyphs, Hero, TITLE_CHAR_STAGGER_MS};
pub use icons::*;
pub use memberships::Memberships;
pub use navbar::Navbar;
pub use page::LandingPage;
pub use products::{ProductCard, Products};
pub use testimonials::{avatar_tone, Testimonials, AVATAR_TONES};
