//! Contact links and a presentational message form.
//!
//! The form has no transport. Submission is swallowed so the page does not
//! reload.

use leptos::prelude::*;

use crate::components::section_heading::SectionHeading;
use crate::page_model::ContactLink;
use crate::site;

#[component]
pub fn ContactSection(links: Vec<ContactLink>) -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        log::info!("contact form submitted; no transport is configured");
    };

    view! {
        <section id=site::CONTACT.id class="section section--tinted">
            <div class="section__inner section__inner--split">
                <div class="contact__intro">
                    <SectionHeading copy=site::CONTACT/>
                    <p class="section__lead">{site::CONTACT_LEAD}</p>
                    <div class="contact__links">
                        {links
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <a href=link.href class="btn btn--ghost" target="_blank" rel="noreferrer">
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <form class="card contact__form" on:submit=on_submit>
                    <label class="field">
                        <span class="field__label">"Name"</span>
                        <input type="text" placeholder="Your name" class="field__input"/>
                    </label>
                    <label class="field">
                        <span class="field__label">"Email"</span>
                        <input type="email" placeholder="you@email.com" class="field__input"/>
                    </label>
                    <label class="field">
                        <span class="field__label">"Message"</span>
                        <textarea rows="4" placeholder="Share what you want to build" class="field__input"></textarea>
                    </label>
                    <button type="submit" class="btn btn--primary">"Send Message"</button>
                </form>
            </div>
        </section>
    }
}
