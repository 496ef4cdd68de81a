//! Sticky header with brand, navigation, theme toggle, and mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Desktop and mobile links both render through `NavAnchor`, so selecting
//! either copy closes the drawer.

use leptos::prelude::*;

use crate::components::nav_anchor::NavAnchor;
use crate::page_model::{Brand, Chrome};
use crate::site::NavLink;
use crate::state::view::Action;

#[component]
pub fn SiteHeader(brand: Brand, navigation: &'static [NavLink]) -> impl IntoView {
    let chrome = expect_context::<Memo<Chrome>>();
    let dispatch = expect_context::<Callback<Action>>();

    view! {
        <header class="site-header">
            <div class="site-header__bar">
                <div class="site-header__brand">
                    <span class="site-header__initials">{brand.initials}</span>
                    <div>
                        <p class="site-header__name">{brand.name}</p>
                        <p class="site-header__strapline">{brand.strapline}</p>
                    </div>
                </div>

                <nav class="site-header__nav">
                    {navigation
                        .iter()
                        .map(|&link| view! { <NavAnchor link=link class="site-header__link"/> })
                        .collect_view()}
                </nav>

                <div class="site-header__actions">
                    <button
                        type="button"
                        class="icon-btn"
                        aria-label="Toggle dark mode"
                        aria-pressed=move || chrome.get().dark.to_string()
                        title=move || chrome.get().theme_title
                        on:click=move |_| dispatch.run(Action::ToggleTheme)
                    >
                        {move || chrome.get().theme_icon}
                    </button>
                    <button
                        type="button"
                        class="icon-btn site-header__menu-toggle"
                        aria-label="Toggle menu"
                        aria-expanded=move || chrome.get().menu_open.to_string()
                        on:click=move |_| dispatch.run(Action::ToggleMenu)
                    >
                        {move || chrome.get().menu_icon}
                    </button>
                </div>
            </div>

            <Show when=move || chrome.get().menu_open>
                <nav class="site-header__mobile-nav">
                    {navigation
                        .iter()
                        .map(|&link| view! { <NavAnchor link=link class="site-header__link"/> })
                        .collect_view()}
                </nav>
            </Show>
        </header>
    }
}
