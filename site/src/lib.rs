//! # agri-site
//!
//! Landing site for A.S. Agri Exports, built with [Leptos](https://leptos.dev/).
//!
//! One crate serves both targets:
//!
//! - **Static export** (`ssr`, default) - [`render_site`] renders the whole
//!   page to a self-contained HTML document; the `agri-export` binary writes it
//!   to disk
//! - **Browser** (`csr`) - [`App`] is mounted by the `agri-landing` crate and
//!   runs the hero autoplay against real `setTimeout`s
//!
//! ## Quick Start
//!
//! ```rust
//! use agri_site::{render_site, types::SiteContent};
//!
//! let content = SiteContent::builtin().expect("embedded content is valid");
//! let html = render_site(&content);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - content model for every section
//! - [`config`] - loading and validating content (TOML or JSON)
//! - [`components`] - Leptos components, one per section
//! - [`accordion`] - single-open state behind the FAQ
//! - [`autoplay`] - browser clock and `setTimeout` scheduler for the hero
//! - [`styles`] - inlined CSS
//!
//! The carousel state machine itself lives in `agri-carousel`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod accordion;
pub mod autoplay;
pub mod components;
pub mod config;
pub mod styles;
pub mod types;

use leptos::prelude::*;

use components::LandingPage;
use styles::SITE_CSS;
use types::SiteContent;

pub use config::{ContentError, BUILTIN_CONTENT};

/// Render the complete landing page as an HTML document.
///
/// Returns `<!DOCTYPE html>` followed by the `<html>` element, with the CSS
/// inlined. The hero is rendered on its first slide; autoplay only runs in
/// the browser build.
///
/// # Example
///
/// ```rust
/// use agri_site::{render_site, types::SiteContent};
///
/// let content = SiteContent::builtin().unwrap();
/// let html = render_site(&content);
/// assert!(html.contains("id=\"contact\""));
/// ```
#[cfg(feature = "ssr")]
pub fn render_site(content: &SiteContent) -> String {
    use components::SiteDocument;
    use leptos::tachys::view::RenderHtml;

    let doc = view! { <SiteDocument content=content.clone() /> };
    let html = doc.to_html();
    tracing::debug!(bytes = html.len(), "rendered site");

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Browser root: inline styles plus the landing page.
#[component]
pub fn App(content: SiteContent) -> impl IntoView {
    view! {
        <style>{SITE_CSS}</style>
        <LandingPage content=content />
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn renders_document_shell() {
        let content = SiteContent::builtin().expect("builtin content");
        let html = render_site(&content);

        assert!(html.starts_with("<!DOCTYPE html>\n<html"));
        assert!(html.contains("lang=\"en\""));
        assert!(html.contains("<title>Agri - Agriculture Brand</title>"));
        assert!(html.contains("--brand: #0f5a36"));
    }

    #[test]
    fn renders_every_section_anchor() {
        let content = SiteContent::builtin().expect("builtin content");
        let html = render_site(&content);

        for anchor in ["hero", "about", "products", "certificates", "memberships", "testimonials", "faq", "contact"] {
            assert!(html.contains(&format!("id=\"{anchor}\"")), "missing #{anchor}");
        }
    }

    #[test]
    fn empty_hero_still_renders_page() {
        let mut content = SiteContent::builtin().expect("builtin content");
        content.hero.slides.clear();
        let html = render_site(&content);

        assert!(html.contains("id=\"hero\""));
        assert!(!html.contains("aria-label=\"Go to "));
        assert!(html.contains("id=\"contact\""));
    }
}
