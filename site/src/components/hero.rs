//! Hero carousel: full-height slide stage, indicator dots and progress bar.
//!
//! The component owns one [`Carousel`] and one [`AutoplayTimer`]. Every DOM
//! event and every timeout goes through [`drive`]: step the controller, then
//! hand the resulting [`TimerDirective`] to the timer. The timer is created in
//! an effect (browser only) and dropped on cleanup, which clears any pending
//! timeout.

use agri_carousel::{AutoplayTimer, Carousel, TimerDirective};
use leptos::prelude::*;
use tracing::warn;
use wasm_bindgen::JsValue;

use crate::autoplay::{now_ms, BrowserScheduler};
use crate::types::{HeroContent, HeroSlide};

/// Delay between consecutive title characters.
pub const TITLE_CHAR_STAGGER_MS: u64 = 40;

type HeroCarousel = RwSignal<Carousel<HeroSlide>>;
type HeroTimer = StoredValue<Option<AutoplayTimer<BrowserScheduler>>>;

/// The hero section.
///
/// Invalid slide content (empty deck, duplicate ids, zero interval) is logged
/// and renders an empty section instead of failing the page.
#[component]
pub fn Hero(hero: HeroContent) -> impl IntoView {
    let carousel = match Carousel::from_slides(hero.slides, hero.autoplay, now_ms()) {
        Ok(carousel) => carousel,
        Err(err) => {
            warn!(%err, "hero carousel disabled");
            return view! { <section id="hero" class="hero" aria-label="Featured products"></section> }
                .into_any();
        }
    };

    let carousel: HeroCarousel = RwSignal::new(carousel);
    let timer: HeroTimer = StoredValue::new(None);

    let slide = Memo::new(move |_| carousel.with(|c| c.current().clone()));
    let index = Memo::new(move |_| carousel.with(|c| c.current_index()));
    let cycle = Memo::new(move |_| carousel.with(|c| c.cycle()));
    let paused = Memo::new(move |_| carousel.with(|c| c.is_paused()));

    Effect::new(move |_| {
        let scheduler = BrowserScheduler::new(move || {
            timer.try_update_value(|slot| {
                if let Some(timer) = slot.as_mut() {
                    timer.expired();
                }
            });
            drive(carousel, timer, Carousel::on_timer);
        });
        let directive = carousel.with_untracked(|c| c.resync(now_ms()));
        timer.set_value(Some(AutoplayTimer::new(scheduler)));
        apply(timer, directive);
    });

    on_cleanup(move || {
        // Dropping the timer clears the pending timeout.
        timer.try_update_value(|slot| slot.take());
    });

    let dots = carousel.with_untracked(|c| {
        c.deck()
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let label = format!("Go to {} slide", s.title);
                view! {
                    <button
                        type="button"
                        class="hero-dot"
                        class:active=move || index.get() == i
                        aria-label=label
                        aria-current=move || (index.get() == i).then_some("true")
                        on:click=move |_| {
                            drive(carousel, timer, move |c, now| {
                                c.go_to_slide(i, now).unwrap_or_else(|err| {
                                    warn!(%err, "dot click ignored");
                                    TimerDirective::Unchanged
                                })
                            })
                        }
                    ></button>
                }
            })
            .collect_view()
    });

    view! {
        <section
            id="hero"
            class="hero"
            aria-roledescription="carousel"
            aria-label="Featured products"
            style=move || format!("background-color: {};", slide.get().background_color)
            on:mouseenter=move |_| drive(carousel, timer, Carousel::hover_start)
            on:mouseleave=move |_| drive(carousel, timer, Carousel::hover_end)
        >
            {move || {
                let s = slide.get();
                let glyphs = title_glyphs(&s.title)
                    .into_iter()
                    .enumerate()
                    .map(|(i, glyph)| {
                        view! {
                            <span class="hero-title-char" aria-hidden="true" style=char_delay_style(i)>
                                {glyph}
                            </span>
                        }
                    })
                    .collect_view();
                let alt = format!("{} {}", s.subtitle, s.title);
                view! {
                    <div class="hero-stage" aria-live="polite">
                        <p class="hero-subtitle" style=format!("color: {};", s.subtitle_color)>
                            {s.subtitle.clone()}
                        </p>
                        <h1 class="hero-title" aria-label=s.title.clone() style=format!("color: {};", s.title_color)>
                            {glyphs}
                        </h1>
                        <div class="hero-image">
                            <img src=s.image.clone() alt=alt />
                        </div>
                    </div>
                }
            }}

            <div class="hero-footer">
                {move || {
                    let s = slide.get();
                    view! {
                        <p class="hero-description" style=format!("color: {};", s.title_color)>
                            {s.description}
                        </p>
                    }
                }}
                <div class="hero-dots" style=move || format!("color: {};", slide.get().title_color)>
                    {dots}
                </div>
            </div>

            <div class="hero-progress">
                // Re-created per cycle so the CSS animation starts from zero.
                {move || {
                    let generation = cycle.get();
                    let (span_ms, color) = carousel.with_untracked(|c| {
                        (c.cycle_span().as_millis() as u64, c.current().title_color.clone())
                    });
                    view! {
                        <div
                            class="hero-progress-fill"
                            data-cycle=generation.to_string()
                            style=move || progress_style(span_ms, &color, paused.get())
                        ></div>
                    }
                }}
            </div>
        </section>
    }
    .into_any()
}

/// Step the controller at the current time and apply the directive.
fn drive(
    carousel: HeroCarousel,
    timer: HeroTimer,
    step: impl FnOnce(&mut Carousel<HeroSlide>, u64) -> TimerDirective,
) {
    let now = now_ms();
    if let Some(directive) = carousel.try_update(|c| step(c, now)) {
        apply(timer, directive);
    }
}

fn apply(timer: HeroTimer, directive: TimerDirective) {
    timer.try_update_value(|slot| {
        let Some(timer) = slot.as_mut() else {
            return;
        };
        if let Err(err) = timer.apply(directive) {
            // The timer stays disarmed until the next hover or click re-arms it.
            web_sys::console::warn_1(&JsValue::from_str(&format!("hero autoplay stopped: {err}")));
        }
    });
}

/// Title split into per-character glyphs; spaces become non-breaking so
/// they keep their width inside inline-block spans.
pub fn title_glyphs(title: &str) -> Vec<String> {
    title
        .chars()
        .map(|ch| if ch == ' ' { '\u{00a0}' } else { ch })
        .map(String::from)
        .collect()
}

fn char_delay_style(position: usize) -> String {
    format!("animation-delay: {}ms;", position as u64 * TITLE_CHAR_STAGGER_MS)
}

/// Inline style for one progress-bar run.
pub fn progress_style(span_ms: u64, color: &str, paused: bool) -> String {
    let state = if paused { "paused" } else { "running" };
    format!("animation-duration: {span_ms}ms; animation-play-state: {state}; background-color: {color};")
}
