//! CSS for the landing page.
//!
//! The whole stylesheet is inlined into the document by
//! [`SiteDocument`](crate::components::SiteDocument) and by [`App`](crate::App),
//! so the exported `index.html` has no external CSS.
//!
//! # Customization
//!
//! ```rust
//! use agri_site::styles::SITE_CSS;
//!
//! let brand_override = ":root { --brand: #14532d; }";
//! let combined = format!("{}\n{}", SITE_CSS, brand_override);
//! assert!(combined.ends_with("}"));
//! ```
//!
//! # Animation hooks
//!
//! - `.hero-progress-fill` - one run of `hero-progress` per autoplay cycle,
//!   frozen with `animation-play-state: paused` while hovered
//! - `.hero-title-char` - per-character rise, staggered with inline `animation-delay`
//! - `.fade-in` - entrance of each section's content container

/// Complete CSS for the landing page.
pub const SITE_CSS: &str = r#"
:root {
    --brand: #0f5a36;
    --brand-dark: #052e16;
    --page-bg: #f5f5f5;
    --card-bg: #ffffff;
    --muted: #6b7280;
    --muted-strong: #374151;
    --border: rgba(229, 231, 235, 0.5);
    --radius-lg: 1.5rem;
    --radius-md: 1rem;
    --font-display: "Bebas Neue", "Oswald", Impact, sans-serif;
    --font-body: "Inter", system-ui, -apple-system, sans-serif;
    --ease-out: cubic-bezier(0.25, 0.46, 0.45, 0.94);
}

*, *::before, *::after { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
    margin: 0;
    font-family: var(--font-body);
    color: var(--muted-strong);
    background: var(--page-bg);
    -webkit-font-smoothing: antialiased;
}

img { max-width: 100%; display: block; }

a { color: inherit; text-decoration: none; }

button { font: inherit; cursor: pointer; }

.container {
    width: 100%;
    max-width: 1280px;
    margin: 0 auto;
    padding: 0 1rem;
}

.headline-line { display: block; }

.sr-only {
    position: absolute;
    width: 1px;
    height: 1px;
    overflow: hidden;
    clip: rect(0 0 0 0);
    white-space: nowrap;
}

/* ---------------------------------------------------------------- navbar */

.navbar {
    position: fixed;
    top: 1rem;
    left: 50%;
    transform: translateX(-50%);
    z-index: 50;
    width: calc(100% - 2rem);
    max-width: 28rem;
    animation: nav-drop 0.6s var(--ease-out) both;
}

.navbar-inner {
    position: relative;
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0.75rem 1.5rem;
    border-radius: var(--radius-md);
    background: rgba(255, 255, 255, 0.1);
    backdrop-filter: blur(24px);
    border: 1px solid rgba(255, 255, 255, 0.2);
    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
}

.navbar-logo img { width: 40px; height: 40px; }

.navbar-links { display: flex; gap: 2rem; }

.navbar-links a {
    font-size: 0.875rem;
    font-weight: 500;
    color: #1f2937;
    transition: color 0.2s;
}

.navbar-links a:hover { color: var(--brand); }

.navbar-toggle {
    display: none;
    background: none;
    border: 0;
    color: #1f2937;
}

.navbar-mobile {
    margin-top: 0.5rem;
    padding: 1rem 1.5rem;
    border-radius: var(--radius-md);
    background: rgba(255, 255, 255, 0.9);
    backdrop-filter: blur(24px);
    display: flex;
    flex-direction: column;
    gap: 1rem;
    animation: fade-in 0.2s ease-out both;
}

@media (max-width: 767px) {
    .navbar-links { display: none; }
    .navbar-toggle { display: inline-flex; }
}

/* ------------------------------------------------------------------ hero */

.hero {
    position: relative;
    min-height: 100vh;
    overflow: hidden;
    transition: background-color 0.7s ease-in-out;
}

.hero-stage {
    position: relative;
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    padding: 6rem 1rem 8rem;
}

.hero-subtitle {
    font-family: var(--font-display);
    font-size: clamp(1.5rem, 4vw, 3rem);
    letter-spacing: 0.2em;
    margin: 0;
    animation: fade-up 0.5s var(--ease-out) both;
}

.hero-title {
    font-family: var(--font-display);
    font-size: clamp(4rem, 18vw, 16rem);
    line-height: 0.85;
    margin: 0;
    white-space: nowrap;
    user-select: none;
}

.hero-title-char {
    display: inline-block;
    animation: char-rise 0.5s var(--ease-out) both;
}

.hero-image {
    position: absolute;
    top: 50%;
    left: 50%;
    width: min(60vw, 32rem);
    transform: translate(-50%, -50%);
    animation: float 6s ease-in-out infinite;
    pointer-events: none;
}

.hero-image img { width: 100%; height: auto; animation: zoom-in 0.7s var(--ease-out) both; }

.hero-footer {
    position: absolute;
    left: 0;
    right: 0;
    bottom: 2.5rem;
    display: flex;
    align-items: flex-end;
    justify-content: space-between;
    gap: 2rem;
    padding: 0 2.5rem;
}

.hero-description {
    max-width: 20rem;
    font-size: 0.95rem;
    line-height: 1.5;
    margin: 0;
    animation: fade-up 0.5s var(--ease-out) both;
}

.hero-dots { display: flex; gap: 0.75rem; }

.hero-dot {
    width: 0.75rem;
    height: 0.75rem;
    padding: 0;
    border-radius: 9999px;
    border: 2px solid currentColor;
    background: transparent;
    opacity: 0.5;
    transition: transform 0.2s, opacity 0.2s, background-color 0.2s;
}

.hero-dot:hover { transform: scale(1.2); opacity: 0.8; }

.hero-dot.active { opacity: 1; background: currentColor; transform: scale(1.2); }

.hero-progress {
    position: absolute;
    left: 0;
    right: 0;
    bottom: 0;
    height: 4px;
    background: rgba(0, 0, 0, 0.06);
}

.hero-progress-fill {
    height: 100%;
    transform-origin: left center;
    animation-name: hero-progress;
    animation-timing-function: linear;
    animation-fill-mode: both;
}

/* ----------------------------------------------------------------- about */

.about { padding: 2rem 1rem; }

.about-card {
    position: relative;
    overflow: hidden;
    border-radius: var(--radius-lg);
    background: #e5e7eb;
    padding: 3rem 1.5rem;
    animation: fade-up 0.7s var(--ease-out) both;
}

.about-statement {
    max-width: 64rem;
    margin: 0 auto;
    font-size: clamp(2rem, 5vw, 3.75rem);
    line-height: 1.2;
    font-weight: 500;
}

.about-mark { font-family: var(--font-display); color: var(--brand); }

.about-text { color: var(--muted); letter-spacing: -0.05em; }

/* -------------------------------------------------------------- products */

.products { padding: 4rem 0; }

.section-title {
    font-size: clamp(2rem, 6vw, 5rem);
    font-weight: 500;
    color: var(--brand-dark);
    letter-spacing: -0.05em;
    text-align: center;
    margin: 0 0 3rem;
}

.products-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(14rem, 1fr));
    gap: 1rem;
}

.product-card {
    background: var(--card-bg);
    border-radius: var(--radius-md);
    border: 1px solid var(--border);
    padding: 1rem;
    transition: transform 0.2s var(--ease-out);
}

.product-card:hover { transform: translateY(-4px); }

.product-image { aspect-ratio: 1 / 1; overflow: hidden; border-radius: 0.75rem; background: #f3f4f6; }

.product-image img { width: 100%; height: 100%; object-fit: contain; }

.product-name { font-size: 1.125rem; font-weight: 600; margin: 1rem 0 0.25rem; color: #111827; }

.product-description { font-size: 0.875rem; color: var(--muted); margin: 0; }

/* ---------------------------------------------------------- certificates */

.certificates { padding: 4rem 0; text-align: center; }

.certificates-lead { max-width: 36rem; margin: -2rem auto 3rem; color: var(--muted); }

.certificates-row {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    justify-content: center;
    gap: 1rem;
}

.hexagon {
    width: 8rem;
    height: 9rem;
    clip-path: polygon(50% 0%, 100% 25%, 100% 75%, 50% 100%, 0% 75%, 0% 25%);
    background: var(--card-bg);
    display: flex;
    align-items: center;
    justify-content: center;
    transition: transform 0.2s var(--ease-out);
}

.hexagon:hover { transform: scale(1.05); }

.hexagon img { width: 70%; height: auto; }

.hexagon.center { width: 10rem; height: 11.5rem; background: var(--brand); }

/* ----------------------------------------------------------- memberships */

.memberships { padding: 4rem 0; }

.memberships-card {
    padding: 2rem;
    background: var(--card-bg);
    border-radius: var(--radius-lg);
    border: 1px solid var(--border);
}

.memberships-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(12rem, 1fr));
    gap: 1rem;
}

.membership-card {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 0.75rem;
    min-height: 10rem;
    padding: 1rem;
    border-radius: var(--radius-md);
    border: 1px solid var(--border);
    background: var(--card-bg);
    transition: transform 0.2s var(--ease-out);
}

.membership-card:hover { transform: translateY(-4px); background: #fefefe; }

.membership-card.span-2 { grid-column: span 2; }

.membership-card img { width: 120px; height: 120px; object-fit: contain; opacity: 0.8; }

.membership-name { font-size: 1.125rem; font-weight: 500; color: #4b5563; text-align: center; margin: 0; }

/* ---------------------------------------------------------- testimonials */

.testimonials { padding: 4rem 0; }

.testimonials-header {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 2rem;
    margin-bottom: 3rem;
}

.testimonials-headline {
    font-size: clamp(2.25rem, 5vw, 3.75rem);
    font-weight: 500;
    color: #14532d;
    letter-spacing: -0.05em;
    line-height: 1;
    margin: 0;
}

.testimonials-lead { align-self: end; max-width: 28rem; color: var(--muted); margin: 0 0 0 auto; }

.testimonials-lead strong { color: #1f2937; }

.testimonials-grid {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 1rem;
}

.testimonial-card {
    display: flex;
    flex-direction: column;
    justify-content: space-between;
    gap: 2rem;
    min-height: 22rem;
    padding: 1.5rem;
    border-radius: var(--radius-md);
    background: var(--card-bg);
    border: 1px solid var(--border);
}

.testimonial-card.quote-top { flex-direction: column-reverse; }

.testimonial-person { display: flex; align-items: center; gap: 0.75rem; }

.avatar {
    width: 3rem;
    height: 3rem;
    border-radius: 9999px;
    overflow: hidden;
    flex-shrink: 0;
}

.avatar img { width: 100%; height: 100%; object-fit: cover; }

.avatar-placeholder {
    display: flex;
    align-items: center;
    justify-content: center;
    font-weight: 600;
    color: #ffffff;
}

.avatar-tone-0 { background: #0f5a36; }
.avatar-tone-1 { background: #a67c5b; }
.avatar-tone-2 { background: #c4661f; }
.avatar-tone-3 { background: #4a5d3a; }

.testimonial-name { font-weight: 600; color: #111827; margin: 0; }

.testimonial-byline { font-size: 0.875rem; color: var(--muted); margin: 0; }

.testimonial-quote { font-size: 1.125rem; line-height: 1.5; color: #1f2937; margin: 0; }

.testimonial-featured {
    position: relative;
    overflow: hidden;
    min-height: 22rem;
    border-radius: var(--radius-md);
    background: #111827;
    color: #ffffff;
}

.testimonial-featured video {
    position: absolute;
    inset: 0;
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.testimonial-featured-caption {
    position: absolute;
    left: 1.5rem;
    right: 1.5rem;
    bottom: 1.5rem;
    display: flex;
    align-items: flex-end;
    justify-content: space-between;
}

.play-toggle {
    width: 3rem;
    height: 3rem;
    border-radius: 9999px;
    border: 0;
    background: rgba(255, 255, 255, 0.9);
    color: #111827;
    display: inline-flex;
    align-items: center;
    justify-content: center;
}

@media (max-width: 1023px) {
    .testimonials-grid { grid-template-columns: repeat(2, 1fr); }
}

@media (max-width: 767px) {
    .testimonials-header, .testimonials-grid { grid-template-columns: 1fr; }
}

/* ------------------------------------------------------------------- faq */

.faq { padding: 4rem 0; }

.faq-layout {
    display: grid;
    grid-template-columns: 2fr 3fr;
    gap: 3rem;
}

.faq-intro { position: sticky; top: 6rem; align-self: start; }

.faq-headline {
    font-size: clamp(2.25rem, 5vw, 3.75rem);
    font-weight: 500;
    color: #14532d;
    letter-spacing: -0.05em;
    margin: 0 0 1rem;
}

.faq-description { color: var(--muted); margin: 0; }

.faq-item { border-bottom: 1px solid #e5e7eb; }

.faq-question {
    width: 100%;
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
    padding: 1.5rem 0;
    background: none;
    border: 0;
    text-align: left;
    font-size: 1.125rem;
    font-weight: 500;
    color: #111827;
}

.faq-icon { transition: transform 0.3s var(--ease-out); }

.faq-item.open .faq-icon { transform: rotate(45deg); }

.faq-answer {
    padding: 0 0 1.5rem;
    color: var(--muted);
    line-height: 1.6;
    animation: fade-in 0.3s ease-out both;
}

@media (max-width: 767px) {
    .faq-layout { grid-template-columns: 1fr; }
    .faq-intro { position: static; }
}

/* ---------------------------------------------------------------- footer */

.footer { background: var(--page-bg); padding: 1rem 0; }

.footer-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1rem;
}

.footer-panel {
    border-radius: var(--radius-lg);
    background: rgba(209, 213, 219, 0.4);
    padding: 3rem;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 2rem;
}

.footer-badge {
    font-size: 0.75rem;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    color: var(--muted-strong);
}

.footer-headline {
    font-size: clamp(1.875rem, 4vw, 2.25rem);
    font-weight: 600;
    color: var(--brand-dark);
    line-height: 1;
    letter-spacing: -0.05em;
    text-align: center;
    margin: 0;
}

.footer-logo {
    width: 12rem;
    height: 12rem;
    border-radius: var(--radius-md);
    background: var(--brand);
    padding: 1rem;
}

.footer-logo img { width: 100%; height: 100%; object-fit: contain; }

.footer-ctas { display: flex; flex-wrap: wrap; gap: 1rem; }

.btn {
    border-radius: 9999px;
    padding: 0.75rem 2rem;
    font-weight: 500;
    border: 1px solid transparent;
}

.btn-primary { background: #ffffff; color: #000000; }

.btn-outline { background: transparent; border-color: #9ca3af; color: #1f2937; }

.footer-legal {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 1.5rem;
    font-size: 14px;
    text-transform: uppercase;
    color: #4b5563;
}

.footer-group {
    width: 100%;
    border-top: 1px solid #cacaca;
    padding-top: 1.25rem;
    display: flex;
    gap: 1rem;
}

.footer-group-label {
    width: 7rem;
    flex-shrink: 0;
    font-size: 12px;
    letter-spacing: 0.1em;
    text-transform: uppercase;
    color: var(--muted);
}

.footer-group-links { flex: 1; display: flex; flex-direction: column; }

.footer-group-links a {
    padding: 0.75rem 0;
    text-align: right;
    font-size: 1.125rem;
    color: var(--muted);
    border-bottom: 1px solid #9ca3af;
}

.footer-group-links a:last-child { border-bottom: 0; }

.footer-socials { display: flex; justify-content: center; gap: 0.75rem; width: 100%; }

.footer-social {
    width: 3rem;
    height: 3rem;
    border-radius: 9999px;
    background: #e1e1e1;
    border: 1px solid #7b7b7b;
    display: inline-flex;
    align-items: center;
    justify-content: center;
    color: var(--muted);
}

@media (max-width: 1023px) {
    .footer-grid { grid-template-columns: 1fr; }
}

/* ------------------------------------------------------------ animations */

.fade-in { animation: fade-in 0.5s var(--ease-out) both; }

@keyframes hero-progress {
    from { transform: scaleX(0); }
    to { transform: scaleX(1); }
}

@keyframes char-rise {
    from { opacity: 0; transform: translateY(100px) rotateX(-90deg); }
    to { opacity: 1; transform: translateY(0) rotateX(0); }
}

@keyframes fade-in {
    from { opacity: 0; }
    to { opacity: 1; }
}

@keyframes fade-up {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: translateY(0); }
}

@keyframes zoom-in {
    from { opacity: 0; transform: scale(0.8); }
    to { opacity: 1; transform: scale(1); }
}

@keyframes float {
    0%, 100% { transform: translate(-50%, -50%); }
    50% { transform: translate(-50%, calc(-50% - 10px)); }
}

@keyframes nav-drop {
    from { opacity: 0; transform: translate(-50%, -100px); }
    to { opacity: 1; transform: translate(-50%, 0); }
}

@media (prefers-reduced-motion: reduce) {
    .hero-title-char, .hero-image, .hero-image img, .fade-in, .about-card { animation: none; }
}
"#;
