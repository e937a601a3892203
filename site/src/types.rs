//! Site content types.
//!
//! Everything the page renders comes from one [`SiteContent`] value, loaded
//! from TOML or JSON (see [`crate::config`]). The types are:
//!
//! - **Serializable** - round-trip through serde, TOML or JSON
//! - **Clone-friendly** - components take owned copies of their section
//! - **Plain data** - no behaviour beyond small view helpers
//!
//! # Example
//!
//! ```rust
//! use agri_site::types::{FaqContent, FaqItem};
//!
//! let faq = FaqContent {
//!     headline: "Wondering How We Work?".into(),
//!     description: "Answers to common questions.".into(),
//!     items: vec![FaqItem {
//!         id: "samples".into(),
//!         question: "Do you offer samples before bulk orders?".into(),
//!         answer: "Yes.".into(),
//!     }],
//! };
//! assert_eq!(faq.items.len(), 1);
//! ```

use agri_carousel::{CarouselConfig, Slide};
use serde::{Deserialize, Serialize};

/// The whole page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    /// Document metadata
    pub meta: Meta,
    /// Brand assets shared by several sections
    pub brand: Brand,
    /// Navigation bar
    pub nav: NavContent,
    /// Hero carousel
    pub hero: HeroContent,
    /// About statement
    pub about: AboutContent,
    /// Products grid
    pub products: ProductsContent,
    /// Certificates and partners
    pub certificates: CertificatesContent,
    /// Trade memberships
    pub memberships: MembershipsContent,
    /// Client testimonials
    pub testimonials: TestimonialsContent,
    /// Frequently asked questions
    pub faq: FaqContent,
    /// Footer and contact block
    pub footer: FooterContent,
}

/// `<head>` metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meta {
    /// Document title
    pub title: String,
    /// Meta description
    pub description: String,
    /// `lang` attribute of the document
    pub lang: String,
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            lang: "en".into(),
        }
    }
}

/// Brand name and logos.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    /// Company name
    pub name: String,
    /// Logo for light backgrounds
    pub logo: String,
    /// Logo for dark backgrounds
    pub logo_light: String,
}

/// A link with a label.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Visible label
    pub name: String,
    /// Target (`#anchor` for in-page links)
    pub href: String,
}

/// Navigation bar links.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NavContent {
    /// In-page anchors, in display order
    #[serde(default)]
    pub links: Vec<Link>,
}

/// One hero carousel slide.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HeroSlide {
    /// Stable id, unique within the hero
    pub id: String,
    /// Large background title, animated per character
    pub title: String,
    /// Line above the title
    pub subtitle: String,
    /// Short description next to the indicator dots
    pub description: String,
    /// Product image
    pub image: String,
    /// Section background while this slide is active
    pub background_color: String,
    /// Title, description, active dot and progress bar color
    pub title_color: String,
    /// Subtitle color
    pub subtitle_color: String,
}

impl Slide for HeroSlide {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Hero carousel content and timing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HeroContent {
    /// Autoplay settings
    #[serde(default)]
    pub autoplay: CarouselConfig,
    /// Slides in rotation order
    #[serde(default)]
    pub slides: Vec<HeroSlide>,
}

/// About statement.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutContent {
    /// Highlighted brand mark opening the statement
    pub brand_mark: String,
    /// Remainder of the statement
    pub statement: String,
}

/// A product card.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Stable id
    pub id: String,
    /// Product name
    pub name: String,
    /// One-line description
    pub description: String,
    /// Square product photo
    pub image: String,
}

/// Products grid.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductsContent {
    /// Section heading
    pub title: String,
    /// Cards in display order
    #[serde(default)]
    pub items: Vec<Product>,
}

/// A certificate badge.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    /// Stable id
    pub id: String,
    /// Certificate name, used as alt text
    pub name: String,
    /// Badge image
    pub image: String,
}

/// Certificates & partners: two hexagon rows around the brand mark.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CertificatesContent {
    /// Section heading
    pub title: String,
    /// Lead paragraph
    pub description: String,
    /// Row left of the brand mark
    #[serde(default)]
    pub left: Vec<Certificate>,
    /// Row right of the brand mark
    #[serde(default)]
    pub right: Vec<Certificate>,
}

/// A trade membership card.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Membership {
    /// Stable id
    pub id: String,
    /// Organisation name
    pub name: String,
    /// Optional logo
    #[serde(default)]
    pub image: Option<String>,
    /// Extra grid placement class (e.g. `span-2`)
    #[serde(default)]
    pub grid_class: Option<String>,
}

/// Memberships grid.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MembershipsContent {
    /// Section heading
    pub section_title: String,
    /// Cards in display order
    #[serde(default)]
    pub items: Vec<Membership>,
}

/// Which half of a standard testimonial card holds the quote.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardLayout {
    /// Avatar and name on top, quote at the bottom
    #[default]
    AvatarTop,
    /// Quote on top, avatar and name at the bottom
    QuoteTop,
}

/// Video shown by a featured testimonial.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeaturedMedia {
    /// Video source
    pub video: String,
    /// Poster frame shown before playback
    #[serde(default)]
    pub poster: Option<String>,
}

/// A client testimonial.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    /// Stable id
    pub id: String,
    /// Client name
    pub name: String,
    /// Client role
    pub role: String,
    /// Client company
    pub company: String,
    /// Quote text (empty for video testimonials)
    #[serde(default)]
    pub quote: String,
    /// Avatar image; a lettered placeholder is drawn when absent
    #[serde(default)]
    pub avatar: Option<String>,
    /// Standard card layout
    #[serde(default)]
    pub layout: CardLayout,
    /// Video testimonial; turns the entry into a featured card
    #[serde(default)]
    pub featured: Option<FeaturedMedia>,
}

impl Testimonial {
    /// "Role at Company." byline.
    pub fn byline(&self) -> String {
        format!("{} at {}.", self.role, self.company)
    }

    /// Letter shown by the avatar placeholder.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

/// Testimonials section.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TestimonialsContent {
    /// Headline, one entry per line
    #[serde(default)]
    pub headline: Vec<String>,
    /// Emphasised opening of the description
    pub lead: String,
    /// Rest of the description
    pub body: String,
    /// Cards in display order
    #[serde(default)]
    pub items: Vec<Testimonial>,
}

/// One FAQ entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FaqItem {
    /// Stable id
    pub id: String,
    /// Question, shown on the toggle button
    pub question: String,
    /// Answer, shown while open
    pub answer: String,
}

/// FAQ section.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FaqContent {
    /// Sticky left-column headline
    pub headline: String,
    /// Sticky left-column description
    pub description: String,
    /// Accordion entries
    #[serde(default)]
    pub items: Vec<FaqItem>,
}

/// Footer link column.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkGroup {
    /// Column label
    pub category: String,
    /// Links in display order
    #[serde(default)]
    pub links: Vec<Link>,
}

/// Social network icon set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    /// Facebook
    Facebook,
    /// Instagram
    Instagram,
    /// LinkedIn
    Linkedin,
}

/// A social profile link.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Network name, used as aria-label
    pub name: String,
    /// Icon to draw
    pub icon: SocialIcon,
    /// Profile URL
    pub href: String,
}

/// Footer and contact block.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FooterContent {
    /// Small uppercase badge above the headline
    pub badge: String,
    /// Headline, one entry per line
    #[serde(default)]
    pub headline: Vec<String>,
    /// Primary call to action label
    pub cta_primary: String,
    /// Secondary call to action label
    pub cta_secondary: String,
    /// Legal/top navigation links
    #[serde(default)]
    pub legal_links: Vec<Link>,
    /// Labelled link columns
    #[serde(default)]
    pub link_groups: Vec<LinkGroup>,
    /// Social profile links
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}
