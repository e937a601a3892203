//! Floating glass navbar with a mobile menu.

use leptos::prelude::*;

use super::{Icon, ICON_LIST, ICON_X};
use crate::types::{Brand, NavContent};

/// Top navigation. On narrow screens the links move into a toggled menu
/// that closes again once a link is chosen.
#[component]
pub fn Navbar(nav: NavContent, brand: Brand) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let desktop_links = nav
        .links
        .iter()
        .cloned()
        .map(|link| view! { <a href=link.href>{link.name}</a> })
        .collect_view();
    let mobile_links = StoredValue::new(nav.links);
    let logo_alt = format!("{} logo", brand.name);

    view! {
        <header class="navbar">
            <nav class="navbar-inner" aria-label="Main">
                <a href="/" class="navbar-logo">
                    <img src=brand.logo alt=logo_alt width="40" height="40" />
                </a>
                <div class="navbar-links">{desktop_links}</div>
                <button
                    type="button"
                    class="navbar-toggle"
                    aria-label=move || if menu_open.get() { "Close menu" } else { "Open menu" }
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || {
                        if menu_open.get() {
                            view! { <Icon path=ICON_X size="24" /> }.into_any()
                        } else {
                            view! { <Icon path=ICON_LIST size="24" /> }.into_any()
                        }
                    }}
                </button>
            </nav>
            <Show when=move || menu_open.get()>
                <div class="navbar-mobile">
                    {mobile_links
                        .get_value()
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a href=link.href on:click=move |_| set_menu_open.set(false)>
                                    {link.name}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </header>
    }
}
