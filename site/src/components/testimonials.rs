//! Client testimonials: quote cards plus an optional video card.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use super::{Icon, ICON_PAUSE, ICON_PLAY};
use crate::types::{CardLayout, FeaturedMedia, Testimonial, TestimonialsContent};

/// Number of placeholder tones (`.avatar-tone-0` .. `.avatar-tone-3`).
pub const AVATAR_TONES: usize = 4;

/// Placeholder tone for a name without an avatar image.
pub fn avatar_tone(name: &str) -> usize {
    name.chars().count() % AVATAR_TONES
}

#[component]
fn Avatar(testimonial: Testimonial) -> impl IntoView {
    match testimonial.avatar.clone() {
        Some(src) => view! {
            <div class="avatar">
                <img src=src alt=testimonial.name.clone() loading="lazy" />
            </div>
        }
        .into_any(),
        None => {
            let class = format!("avatar avatar-placeholder avatar-tone-{}", avatar_tone(&testimonial.name));
            view! { <div class=class aria-hidden="true">{testimonial.initial()}</div> }.into_any()
        }
    }
}

#[component]
fn QuoteCard(testimonial: Testimonial) -> impl IntoView {
    let class = match testimonial.layout {
        CardLayout::AvatarTop => "testimonial-card avatar-top",
        CardLayout::QuoteTop => "testimonial-card quote-top",
    };
    let byline = testimonial.byline();
    let quote = testimonial.quote.clone();
    let name = testimonial.name.clone();

    view! {
        <article class=class>
            <div class="testimonial-person">
                <Avatar testimonial=testimonial />
                <div>
                    <p class="testimonial-name">{name}</p>
                    <p class="testimonial-byline">{byline}</p>
                </div>
            </div>
            <blockquote class="testimonial-quote">{quote}</blockquote>
        </article>
    }
}

#[component]
fn FeaturedCard(testimonial: Testimonial, media: FeaturedMedia) -> impl IntoView {
    let video_ref = NodeRef::<leptos::html::Video>::new();
    let (playing, set_playing) = signal(false);

    let toggle = move |_| {
        let Some(video) = video_ref.get() else {
            return;
        };
        let result = if video.paused() {
            video.play().map(|_| ())
        } else {
            video.pause()
        };
        if let Err(err) = result {
            web_sys::console::error_2(&JsValue::from_str("testimonial video:"), &err);
        }
    };

    view! {
        <article class="testimonial-featured">
            <video
                node_ref=video_ref
                src=media.video
                poster=media.poster
                preload="metadata"
                playsinline=true
                on:play=move |_| set_playing.set(true)
                on:pause=move |_| set_playing.set(false)
                on:ended=move |_| set_playing.set(false)
            ></video>
            <div class="testimonial-featured-caption">
                <div>
                    <p class="testimonial-name">{testimonial.name.clone()}</p>
                    <p class="testimonial-byline">{testimonial.byline()}</p>
                </div>
                <button
                    type="button"
                    class="play-toggle"
                    aria-label=move || if playing.get() { "Pause video" } else { "Play video" }
                    on:click=toggle
                >
                    {move || {
                        if playing.get() {
                            view! { <Icon path=ICON_PAUSE /> }.into_any()
                        } else {
                            view! { <Icon path=ICON_PLAY /> }.into_any()
                        }
                    }}
                </button>
            </div>
        </article>
    }
}

/// Testimonials section.
#[component]
pub fn Testimonials(testimonials: TestimonialsContent) -> impl IntoView {
    let headline = testimonials
        .headline
        .into_iter()
        .map(|line| view! { <span class="headline-line">{line}</span> })
        .collect_view();

    let cards = testimonials
        .items
        .into_iter()
        .map(|testimonial| match testimonial.featured.clone() {
            Some(media) => view! { <FeaturedCard testimonial=testimonial media=media /> }.into_any(),
            None => view! { <QuoteCard testimonial=testimonial /> }.into_any(),
        })
        .collect_view();

    view! {
        <section id="testimonials" class="testimonials">
            <div class="container fade-in">
                <div class="testimonials-header">
                    <h2 class="testimonials-headline">{headline}</h2>
                    <p class="testimonials-lead">
                        <strong>{testimonials.lead}</strong>
                        " "
                        {testimonials.body}
                    </p>
                </div>
                <div class="testimonials-grid">{cards}</div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_follows_name_length() {
        assert_eq!(avatar_tone("Amira D"), 3);
        assert_eq!(avatar_tone("Sam Harris"), 2);
        assert_eq!(avatar_tone(""), 0);
    }
}
