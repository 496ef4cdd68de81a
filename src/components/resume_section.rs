//! Résumé download link and preview trigger.

use leptos::prelude::*;

use crate::components::section_heading::SectionHeading;
use crate::site;
use crate::state::view::Action;

#[component]
pub fn ResumeSection(href: String) -> impl IntoView {
    let dispatch = expect_context::<Callback<Action>>();

    view! {
        <section id=site::RESUME.id class="section">
            <div class="section__inner">
                <SectionHeading copy=site::RESUME/>
                <div class="resume__actions">
                    <a href=href class="btn btn--accent">"⤓ View / Download Resume"</a>
                    <button
                        type="button"
                        class="btn btn--ghost"
                        on:click=move |_| dispatch.run(Action::OpenResumePreview)
                    >
                        "Preview Resume"
                    </button>
                    <p class="muted">{site::RESUME_HINT}</p>
                </div>
            </div>
        </section>
    }
}
