//! Footer: call to action on the left, links and socials on the right.

use leptos::prelude::*;

use super::{social_icon_path, Icon};
use crate::types::{Brand, FooterContent, LinkGroup};

#[component]
fn FooterGroup(group: LinkGroup) -> impl IntoView {
    view! {
        <div class="footer-group">
            <span class="footer-group-label">{group.category}</span>
            <div class="footer-group-links">
                {group
                    .links
                    .into_iter()
                    .map(|link| view! { <a href=link.href>{link.name}</a> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// The `#contact` footer.
#[component]
pub fn Footer(footer: FooterContent, brand: Brand) -> impl IntoView {
    let headline = footer
        .headline
        .into_iter()
        .map(|line| view! { <span class="headline-line">{line}</span> })
        .collect_view();
    let logo_alt = format!("{} logo", brand.name);

    view! {
        <footer id="contact" class="footer">
            <div class="container footer-grid fade-in">
                <div class="footer-panel">
                    <span class="footer-badge">{footer.badge}</span>
                    <h2 class="footer-headline">{headline}</h2>
                    <div class="footer-logo">
                        <img src=brand.logo_light alt=logo_alt />
                    </div>
                    <div class="footer-ctas">
                        <a href="#contact" class="btn btn-primary">{footer.cta_primary}</a>
                        <a href="#contact" class="btn btn-outline">{footer.cta_secondary}</a>
                    </div>
                </div>

                <div class="footer-panel">
                    <nav class="footer-legal" aria-label="Legal">
                        {footer
                            .legal_links
                            .into_iter()
                            .map(|link| view! { <a href=link.href>{link.name}</a> })
                            .collect_view()}
                    </nav>
                    {footer
                        .link_groups
                        .into_iter()
                        .map(|group| view! { <FooterGroup group=group /> })
                        .collect_view()}
                    <div class="footer-socials">
                        {footer
                            .socials
                            .into_iter()
                            .map(|social| {
                                view! {
                                    <a
                                        href=social.href
                                        class="footer-social"
                                        aria-label=social.name
                                        target="_blank"
                                        rel="noopener noreferrer"
                                    >
                                        <Icon path=social_icon_path(social.icon) />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
