//! Eyebrow + heading pair shared by every content section.

use leptos::prelude::*;

use crate::site::SectionCopy;

#[component]
pub fn SectionHeading(copy: SectionCopy) -> impl IntoView {
    view! {
        <div class="section-heading">
            <p class=format!("section-heading__eyebrow {}", copy.accent.class())>{copy.eyebrow}</p>
            <h2 class="section-heading__title">{copy.heading}</h2>
        </div>
    }
}
