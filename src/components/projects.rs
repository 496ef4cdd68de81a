//! Project categories, each a grid of outbound project cards.

use leptos::prelude::*;
use profile::ProjectCategory;

use crate::components::section_heading::SectionHeading;
use crate::site;

#[component]
pub fn ProjectsSection(categories: Vec<ProjectCategory>) -> impl IntoView {
    view! {
        <section id=site::PROJECTS.id class="section">
            <div class="section__inner">
                <SectionHeading copy=site::PROJECTS/>
                {categories
                    .into_iter()
                    .map(|group| {
                        view! {
                            <div class="project-group">
                                <h3 class="project-group__title">{group.category}</h3>
                                <div class="card-grid">
                                    {group
                                        .items
                                        .into_iter()
                                        .map(|project| {
                                            view! {
                                                <a
                                                    class="card card--link"
                                                    href=project.link
                                                    target="_blank"
                                                    rel="noreferrer"
                                                >
                                                    <div class="card__header">
                                                        <div>
                                                            <h4>{project.name}</h4>
                                                            <p class="muted">{project.description}</p>
                                                        </div>
                                                        <span class="card__arrow">"↗"</span>
                                                    </div>
                                                    <div class="chips">
                                                        {project
                                                            .stack
                                                            .into_iter()
                                                            .map(|tech| view! { <span class="chip">{tech}</span> })
                                                            .collect_view()}
                                                    </div>
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
