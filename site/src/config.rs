//! Content loading and validation.
//!
//! The site ships with `content/site.toml` embedded at compile time
//! ([`SiteContent::builtin`]). The export binary can point at another file
//! instead; `.toml` and `.json` are accepted.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use agri_carousel::{CarouselError, SlideDeck};
use thiserror::Error;
use tracing::debug;

use crate::types::{HeroSlide, SiteContent};

/// Content compiled into the crate.
pub const BUILTIN_CONTENT: &str = include_str!("../content/site.toml");

/// Why a content file could not be used.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax or schema mismatch.
    #[error("invalid TOML content: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON syntax or schema mismatch.
    #[error("invalid JSON content: {0}")]
    Json(#[from] serde_json::Error),

    /// File extension is neither `.toml` nor `.json`.
    #[error("unsupported content format `{0}` (expected .toml or .json)")]
    UnsupportedFormat(String),

    /// Parsed fine but breaks a content rule.
    #[error("{section}: {reason}")]
    Invalid {
        /// Content section at fault
        section: &'static str,
        /// What is wrong
        reason: String,
    },

    /// The hero slides or autoplay settings cannot drive a carousel.
    #[error("hero: {0}")]
    Carousel(#[from] CarouselError),
}

impl SiteContent {
    /// The embedded default content.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_toml_str(BUILTIN_CONTENT)
    }

    /// Parse and validate TOML content.
    pub fn from_toml_str(source: &str) -> Result<Self, ContentError> {
        let content: Self = toml::from_str(source)?;
        content.validate()?;
        Ok(content)
    }

    /// Parse and validate JSON content.
    pub fn from_json_str(source: &str) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_str(source)?;
        content.validate()?;
        Ok(content)
    }

    /// Load content from a `.toml` or `.json` file.
    pub fn load_from_path(path: &Path) -> Result<Self, ContentError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let source = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = source.len(), "loaded content file");

        match extension.as_str() {
            "toml" => Self::from_toml_str(&source),
            "json" => Self::from_json_str(&source),
            other => Err(ContentError::UnsupportedFormat(other.to_string())),
        }
    }

    /// The hero slides as a validated deck.
    pub fn hero_deck(&self) -> Result<SlideDeck<HeroSlide>, CarouselError> {
        SlideDeck::new(self.hero.slides.clone())
    }

    /// Check the rules serde cannot express.
    pub fn validate(&self) -> Result<(), ContentError> {
        self.hero.autoplay.validate()?;
        self.hero_deck()?;
        for slide in &self.hero.slides {
            for color in [
                &slide.background_color,
                &slide.title_color,
                &slide.subtitle_color,
            ] {
                if !is_hex_color(color) {
                    return Err(invalid(
                        "hero",
                        format!("slide `{}` has invalid color `{}`", slide.id, color),
                    ));
                }
            }
        }

        for link in &self.nav.links {
            if !link.href.starts_with('#') {
                return Err(invalid(
                    "nav",
                    format!("link `{}` must be an in-page anchor, got `{}`", link.name, link.href),
                ));
            }
        }

        ensure_unique("products", self.products.items.iter().map(|p| p.id.as_str()))?;
        ensure_unique(
            "certificates",
            self.certificates
                .left
                .iter()
                .chain(&self.certificates.right)
                .map(|c| c.id.as_str()),
        )?;
        ensure_unique("memberships", self.memberships.items.iter().map(|m| m.id.as_str()))?;
        ensure_unique("testimonials", self.testimonials.items.iter().map(|t| t.id.as_str()))?;
        ensure_unique("faq", self.faq.items.iter().map(|f| f.id.as_str()))?;

        Ok(())
    }
}

fn invalid(section: &'static str, reason: String) -> ContentError {
    ContentError::Invalid { section, reason }
}

fn ensure_unique<'a>(
    section: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.is_empty() {
            return Err(invalid(section, "empty id".into()));
        }
        if !seen.insert(id) {
            return Err(invalid(section, format!("duplicate id `{}`", id)));
        }
    }
    Ok(())
}

/// `#rgb` or `#rrggbb`.
fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .filter(|hex| matches!(hex.len(), 3 | 6))
        .is_some_and(|hex| hex.chars().all(|c| c.is_ascii_hexdigit()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use agri_carousel::NavigationPolicy;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn builtin_content_is_valid() {
        let content = SiteContent::builtin().expect("builtin content");
        assert_eq!(content.hero.slides.len(), 5);
        assert_eq!(content.hero.autoplay.interval_ms, 5000);
        assert_eq!(content.hero.autoplay.navigation, NavigationPolicy::Rearm);
        assert_eq!(content.faq.items.len(), 7);
        assert_eq!(content.products.items.len(), 10);
    }

    #[test]
    fn hex_colors() {
        assert!(is_hex_color("#f5f0e8"));
        assert!(is_hex_color("#FFF"));
        assert!(!is_hex_color("f5f0e8"));
        assert!(!is_hex_color("#f5f0e"));
        assert!(!is_hex_color("#gggggg"));
    }

    #[test]
    fn rejects_bad_slide_color() {
        let mut content = SiteContent::builtin().expect("builtin content");
        content.hero.slides[0].title_color = "brown".into();
        let err = content.validate().unwrap_err();
        assert!(matches!(err, ContentError::Invalid { section: "hero", .. }));
    }

    #[test]
    fn rejects_empty_hero() {
        let mut content = SiteContent::builtin().expect("builtin content");
        content.hero.slides.clear();
        let err = content.validate().unwrap_err();
        assert!(matches!(err, ContentError::Carousel(CarouselError::EmptyDeck)));
    }

    #[test]
    fn rejects_off_page_nav_link() {
        let mut content = SiteContent::builtin().expect("builtin content");
        content.nav.links[0].href = "/about".into();
        let err = content.validate().unwrap_err();
        assert!(err.to_string().starts_with("nav:"));
    }

    #[test]
    fn rejects_duplicate_faq_ids() {
        let mut content = SiteContent::builtin().expect("builtin content");
        let first = content.faq.items[0].clone();
        content.faq.items.push(first);
        let err = content.validate().unwrap_err();
        assert_eq!(err.to_string(), "faq: duplicate id `1`");
    }

    #[test]
    fn rejects_certificate_id_shared_across_rows() {
        let mut content = SiteContent::builtin().expect("builtin content");
        content.certificates.right[0].id = content.certificates.left[0].id.clone();
        assert!(content.validate().is_err());
    }

    #[test]
    fn loads_json_file() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("site.json");
        let content = SiteContent::builtin().expect("builtin content");
        let mut file = std::fs::File::create(&path).expect("create");
        write!(file, "{}", serde_json::to_string(&content).expect("serialize")).expect("write");

        let loaded = SiteContent::load_from_path(&path).expect("load json");
        assert_eq!(loaded, content);
    }

    #[test]
    fn missing_file_reports_path() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("nope.toml");
        let err = SiteContent::load_from_path(&path).unwrap_err();
        assert!(matches!(err, ContentError::Read { .. }));
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("site.yaml");
        std::fs::write(&path, "meta: {}").expect("write");
        let err = SiteContent::load_from_path(&path).unwrap_err();
        assert!(matches!(err, ContentError::UnsupportedFormat(ext) if ext == "yaml"));
    }

    #[test]
    fn toml_autoplay_section_is_optional() {
        let source = BUILTIN_CONTENT.replace("[hero.autoplay]", "[hero.autoplay_unused]");
        // Unknown tables are ignored, so autoplay falls back to defaults.
        let content = SiteContent::from_toml_str(&source).expect("parse");
        assert_eq!(content.hero.autoplay, agri_carousel::CarouselConfig::default());
    }
}
