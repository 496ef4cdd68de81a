//! About section with the profile summary.

use leptos::prelude::*;

use crate::components::section_heading::SectionHeading;
use crate::site;

#[component]
pub fn AboutSection(summary: String) -> impl IntoView {
    view! {
        <section id=site::ABOUT.id class="section">
            <div class="section__inner section__inner--split">
                <SectionHeading copy=site::ABOUT/>
                <p class="section__lead">{summary}</p>
            </div>
        </section>
    }
}
