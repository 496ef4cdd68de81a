//! Education and certifications. Rendered only when either list is non-empty.

use leptos::prelude::*;
use profile::{Certification, Education};

use crate::components::section_heading::SectionHeading;
use crate::site;

#[component]
pub fn EducationSection(education: Vec<Education>, certifications: Vec<Certification>) -> impl IntoView {
    let has_certifications = !certifications.is_empty();

    view! {
        <section id=site::EDUCATION.id class="section">
            <div class="section__inner">
                <SectionHeading copy=site::EDUCATION/>
                <div class="stack">
                    {education
                        .into_iter()
                        .map(|entry| {
                            view! {
                                <div class="card timeline-entry">
                                    <div class="timeline-entry__header">
                                        <div>
                                            <h3>{entry.program}</h3>
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
                {has_certifications
                    .then(|| {
                        view! {
                            <h3 class="project-group__title">"Certifications"</h3>
                            <div class="card-grid">
                                {certifications
                                    .into_iter()
                                    .map(|cert| {
                                        view! {
                                            <div class="card">
                                                <div class="card__header">
                                                    <h4>{cert.name}</h4>
                                                    <span class="timeline-entry__period">{cert.period}</span>
                                                </div>
                                                <p class="muted">{cert.issuer}</p>
                                                <p>{cert.details}</p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })}
            </div>
        </section>
    }
}
