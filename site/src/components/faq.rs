//! FAQ: sticky intro on the left, single-open accordion on the right.

use leptos::prelude::*;

use super::{Icon, ICON_PLUS};
use crate::accordion::Accordion;
use crate::types::{FaqContent, FaqItem};

#[component]
fn FaqEntry(item: FaqItem, position: usize, accordion: RwSignal<Accordion>) -> impl IntoView {
    let is_open = Memo::new(move |_| accordion.with(|a| a.is_open(position)));
    let answer_id = format!("faq-answer-{}", item.id);
    let region_id = answer_id.clone();
    let answer = StoredValue::new(item.answer);

    view! {
        <div class="faq-item" class:open=move || is_open.get()>
            <button
                type="button"
                class="faq-question"
                aria-expanded=move || is_open.get().to_string()
                aria-controls=answer_id
                on:click=move |_| accordion.update(|a| a.toggle(position))
            >
                <span>{format!("{}. {}", position + 1, item.question)}</span>
                <Icon path=ICON_PLUS class="faq-icon" />
            </button>
            <Show when=move || is_open.get()>
                <div class="faq-answer" id=region_id.clone() role="region">
                    {answer.get_value()}
                </div>
            </Show>
        </div>
    }
}

/// The FAQ section.
#[component]
pub fn Faq(faq: FaqContent) -> impl IntoView {
    let accordion = RwSignal::new(Accordion::new(faq.items.len()));

    view! {
        <section id="faq" class="faq">
            <div class="container faq-layout fade-in">
                <div class="faq-intro">
                    <h2 class="faq-headline">{faq.headline}</h2>
                    <p class="faq-description">{faq.description}</p>
                </div>
                <div class="faq-list">
                    {faq
                        .items
                        .into_iter()
                        .enumerate()
                        .map(|(position, item)| {
                            view! { <FaqEntry item=item position=position accordion=accordion /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
