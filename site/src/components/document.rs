//! Root document component - the complete HTML page for static export.

use leptos::prelude::*;

use super::LandingPage;
use crate::styles::SITE_CSS;
use crate::types::SiteContent;

/// `<html>` with metadata, inline CSS and the landing page.
#[component]
pub fn SiteDocument(content: SiteContent) -> impl IntoView {
    let meta = content.meta.clone();

    view! {
        <html lang=meta.lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=meta.description />
                <title>{meta.title}</title>
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <LandingPage content=content />
            </body>
        </html>
    }
}
