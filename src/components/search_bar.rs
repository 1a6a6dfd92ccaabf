//! Search Bar Component
//!
//! Keyword search over the listing; submitting resets to page 1.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Search form above the listing table
#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_app_store();
    let (input_value, set_input_value) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store.query().set(input_value.get());
        store.page().set(1);
    };

    view! {
        <form class="search-bar" on:submit=on_submit>
            <input
                type="text"
                placeholder="Rechercher par nom, espèce, email..."
                prop:value=move || input_value.get()
                on:input=move |ev| set_input_value.set(event_target_value(&ev))
            />
            <button type="submit">"Rechercher"</button>
        </form>
    }
}
