//! Experience timeline.

use leptos::prelude::*;
use profile::Experience;

use crate::components::section_heading::SectionHeading;
use crate::site;

#[component]
pub fn ExperienceSection(entries: Vec<Experience>) -> impl IntoView {
    view! {
        <section id=site::EXPERIENCE.id class="section section--tinted">
            <div class="section__inner">
                <SectionHeading copy=site::EXPERIENCE/>
                <div class="stack">
                    {entries
                        .into_iter()
                        .map(|entry| {
                            view! {
                                <div class="card timeline-entry">
                                    <div class="timeline-entry__header">
                                        <div>
                                            <h3>{entry.role}</h3>
                                            <p class="muted">{entry.org}</p>
                                        </div>
                                        <span class="timeline-entry__period">{entry.period}</span>
                                    </div>
                                    <p>{entry.details}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
