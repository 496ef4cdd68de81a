//! In-page anchor that reports its selection to the controller.

use leptos::prelude::*;

use crate::site::NavLink;
use crate::state::view::Action;

/// Anchor for one [`NavLink`]. Selecting it dispatches [`NavLink::action`],
/// which closes the mobile menu if it is open.
#[component]
pub fn NavAnchor(link: NavLink, class: &'static str) -> impl IntoView {
    let dispatch = expect_context::<Callback<Action>>();

    view! {
        <a href=link.href class=class on:click=move |_| dispatch.run(link.action())>
            {link.label}
        </a>
    }
}
