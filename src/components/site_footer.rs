//! Footer with copyright line and contact links.

use leptos::prelude::*;

use crate::page_model::ContactLink;

#[component]
pub fn SiteFooter(text: String, links: Vec<ContactLink>) -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__inner">
                <p>{text}</p>
                <div class="site-footer__links">
                    {links
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a href=link.href target="_blank" rel="noreferrer">
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
