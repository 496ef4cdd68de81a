//! Landing block: title, tagline, calls to action, and focus cards.

use leptos::prelude::*;

use crate::components::nav_anchor::NavAnchor;
use crate::page_model::HeroModel;

#[component]
pub fn HeroSection(hero: HeroModel) -> impl IntoView {
    let HeroModel { eyebrow, title, tagline, actions, badges, focus, note } = hero;
    let has_note = !note.is_empty();

    view! {
        <section class="hero">
            <div class="hero__glow"></div>
            <div class="hero__inner">
                <div class="hero__intro">
                    <p class="hero__eyebrow accent-teal">{eyebrow}</p>
                    <h1 class="hero__title">{title}</h1>
                    <p class="hero__tagline">{tagline}</p>
                    <div class="hero__actions">
                        {actions
                            .iter()
                            .enumerate()
                            .map(|(i, &link)| {
                                let class = if i == 0 { "btn btn--primary" } else { "btn btn--ghost" };
                                view! { <NavAnchor link=link class=class/> }
                            })
                            .collect_view()}
                    </div>
                    <div class="chips">
                        {badges.into_iter().map(|badge| view! { <span class="chip">{badge}</span> }).collect_view()}
                    </div>
                </div>
                <div class="hero__panel card">
                    {focus
                        .into_iter()
                        .map(|card| {
                            view! {
                                <div class="hero__focus">
                                    <p class="muted">{card.caption}</p>
                                    <h2>{card.heading}</h2>
                                    <p>{card.body}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                    {has_note.then(|| view! { <span class="hero__note">{note}" ↗"</span> })}
                </div>
            </div>
        </section>
    }
}
