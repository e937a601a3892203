//! Trade memberships grid.

use leptos::prelude::*;

use crate::types::{Membership, MembershipsContent};

#[component]
fn MembershipCard(membership: Membership) -> impl IntoView {
    let class = match &membership.grid_class {
        Some(extra) => format!("membership-card {extra}"),
        None => "membership-card".to_string(),
    };
    let logo = membership.image.map(|src| {
        view! { <img src=src alt=membership.name.clone() width="120" height="120" loading="lazy" /> }
    });

    view! {
        <div class=class>
            {logo}
            <h3 class="membership-name">{membership.name}</h3>
        </div>
    }
}

/// Memberships section.
#[component]
pub fn Memberships(memberships: MembershipsContent) -> impl IntoView {
    view! {
        <section id="memberships" class="memberships">
            <div class="container fade-in">
                <div class="memberships-card">
                    <h2 class="section-title">{memberships.section_title}</h2>
                    <div class="memberships-grid">
                        {memberships
                            .items
                            .into_iter()
                            .map(|membership| view! { <MembershipCard membership=membership /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
