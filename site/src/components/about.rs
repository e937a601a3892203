//! About statement.

use leptos::prelude::*;

use crate::types::AboutContent;

/// Large brand statement on a grey card.
#[component]
pub fn About(about: AboutContent) -> impl IntoView {
    view! {
        <section id="about" class="about">
            <div class="about-card">
                <h2 class="about-statement">
                    <span class="about-mark">{about.brand_mark}</span>
                    " "
                    <span class="about-text">{about.statement}</span>
                </h2>
            </div>
        </section>
    }
}
