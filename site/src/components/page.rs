//! The landing page body.

use leptos::prelude::*;

use super::{About, Certificates, Faq, Footer, Hero, Memberships, Navbar, Products, Testimonials};
use crate::types::SiteContent;

/// Every section in page order.
#[component]
pub fn LandingPage(content: SiteContent) -> impl IntoView {
    let SiteContent {
        brand,
        nav,
        hero,
        about,
        products,
        certificates,
        memberships,
        testimonials,
        faq,
        footer,
        ..
    } = content;
    let center_logo = brand.logo_light.clone();
    let brand_name = brand.name.clone();
    let footer_brand = brand.clone();

    view! {
        <div class="page">
            <Navbar nav=nav brand=brand />
            <Hero hero=hero />
            <main>
                <About about=about />
                <Products products=products />
                <Certificates
                    certificates=certificates
                    logo=center_logo
                    brand_name=brand_name
                />
                <Memberships memberships=memberships />
                <Testimonials testimonials=testimonials />
                <Faq faq=faq />
                <Footer footer=footer brand=footer_brand />
            </main>
        </div>
    }
}
