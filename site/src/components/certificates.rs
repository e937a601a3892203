//! Certificates & partners: hexagon badges around the brand mark.

use leptos::prelude::*;

use crate::types::{Certificate, CertificatesContent};

#[component]
fn HexagonCard(certificate: Certificate) -> impl IntoView {
    let Certificate { name, image, .. } = certificate;
    let alt = name.clone();
    view! {
        <div class="hexagon" title=name>
            <img src=image alt=alt loading="lazy" />
        </div>
    }
}

fn row(certificates: Vec<Certificate>) -> impl IntoView {
    certificates
        .into_iter()
        .map(|certificate| view! { <HexagonCard certificate=certificate /> })
        .collect_view()
}

/// Left row, brand mark, right row.
#[component]
pub fn Certificates(
    certificates: CertificatesContent,
    /// Logo drawn on the dark center hexagon
    logo: String,
    /// Alt text for the logo
    brand_name: String,
) -> impl IntoView {
    view! {
        <section id="certificates" class="certificates">
            <div class="container fade-in">
                <h2 class="section-title">{certificates.title}</h2>
                <p class="certificates-lead">{certificates.description}</p>
                <div class="certificates-row">
                    {row(certificates.left)}
                    <div class="hexagon center">
                        <img src=logo alt=brand_name />
                    </div>
                    {row(certificates.right)}
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn hexagon_names_badge_in_title_and_alt() {
        let certificate = Certificate {
            id: "haccp".into(),
            name: "HACCP".into(),
            image: "/images/haccp.png".into(),
        };

        let html = view! { <HexagonCard certificate=certificate /> }.to_html();

        assert!(html.contains("title=\"HACCP\""), "{html}");
        assert!(html.contains("alt=\"HACCP\""), "{html}");
        assert!(html.contains("src=\"/images/haccp.png\""), "{html}");
    }
}
