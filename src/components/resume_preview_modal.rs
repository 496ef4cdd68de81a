//! Overlay embedding the résumé document.
//!
//! The Escape listener is not owned here; the controller attaches it when the
//! preview opens and drops it on every close path.

use leptos::prelude::*;

use crate::site;
use crate::state::view::Action;

#[component]
pub fn ResumePreviewModal(href: String) -> impl IntoView {
    let dispatch = expect_context::<Callback<Action>>();
    let on_close = move |_| dispatch.run(Action::CloseResumePreview);

    view! {
        <div class="modal__backdrop" on:click=on_close>
            <div
                class="modal"
                role="dialog"
                aria-modal="true"
                aria-label="Resume preview"
                on:click=move |ev| ev.stop_propagation()
            >
                <div class="modal__header">
                    <div>
                        <h3>"Resume Preview"</h3>
                        <p class="muted">{site::RESUME_HINT}</p>
                    </div>
                    <button type="button" class="icon-btn" aria-label="Close resume preview" on:click=on_close>
                        "✕"
                    </button>
                </div>
                <div class="modal__body">
                    <iframe title="Resume preview" src=href class="modal__frame"></iframe>
                </div>
            </div>
        </div>
    }
}
