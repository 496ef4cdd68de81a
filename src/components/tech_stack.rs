//! Tech stack cards. Forward-looking groups carry a badge.

use leptos::prelude::*;

use crate::components::section_heading::SectionHeading;
use crate::page_model::TechCard;
use crate::site;

#[component]
pub fn TechStackSection(cards: Vec<TechCard>) -> impl IntoView {
    view! {
        <section id=site::TECH.id class="section section--tinted">
            <div class="section__inner">
                <SectionHeading copy=site::TECH/>
                <div class="card-grid">
                    {cards
                        .into_iter()
                        .map(|card| {
                            let class = if card.future { "card card--future" } else { "card" };
                            view! {
                                <div class=class data-future=card.future.to_string()>
                                    <div class="card__header">
                                        <h3>{card.label}</h3>
                                        {card.badge.map(|badge| view! { <span class="badge">{badge}</span> })}
                                    </div>
                                    <div class="chips">
                                        {card
                                            .items
                                            .into_iter()
                                            .map(|item| view! { <span class="chip">{item}</span> })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
