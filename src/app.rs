//! Root application component and view-state wiring.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use profile::Profile;

use crate::components::resume_preview_modal::ResumePreviewModal;
use crate::controller::ViewController;
use crate::page_model::{Chrome, PageModel};
use crate::pages::home::HomePage;
use crate::state::view::{Action, ViewState};
use crate::util::cancel_key::WindowKeys;
use crate::util::dark_mode::BrowserHost;

type BrowserController = ViewController<BrowserHost, WindowKeys>;

/// Root application component.
///
/// Owns the view controller and provides two contexts to every component:
/// `Memo<Chrome>` for reading UI flags and `Callback<Action>` for changing
/// them. The profile is projected once; it never changes at runtime.
#[component]
pub fn App(profile: &'static Profile) -> impl IntoView {
    provide_meta_context();

    let view_state = RwSignal::new(ViewState::default());

    // The key listener dispatches back through `dispatch`, so the controller
    // is created after the callback and stored in a slot.
    let controller = StoredValue::new(None::<BrowserController>);
    let dispatch = Callback::new(move |action: Action| {
        controller.update_value(|slot| {
            if let Some(ctl) = slot.as_mut() {
                ctl.dispatch(action);
                view_state.set(ctl.state().clone());
            }
        });
    });

    controller.set_value(Some(ViewController::new(BrowserHost, WindowKeys::new(dispatch))));
    controller.update_value(|slot| {
        if let Some(ctl) = slot.as_mut() {
            ctl.initialize_theme();
            view_state.set(ctl.state().clone());
        }
    });
    // Releases a still-attached cancel listener on unmount.
    on_cleanup(move || controller.set_value(None));

    let chrome = Memo::new(move |_| Chrome::project(&view_state.get()));
    provide_context(chrome);
    provide_context(dispatch);

    let page = PageModel::project(profile);
    let title = page.brand.name.clone();
    let description = page.hero.tagline.clone();
    let resume_href = page.resume_href.clone();

    view! {
        <Title text=title/>
        <Meta name="description" content=description/>

        <HomePage page/>

        <Show when=move || chrome.get().resume_open>
            <ResumePreviewModal href=resume_href.clone()/>
        </Show>
    }
}
