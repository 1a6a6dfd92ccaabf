//! Refuge Admin App
//!
//! Main application component: listing page with search, pagination,
//! per-row action menus, delete confirmation and the animal form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{AnimalFormPanel, AnimalTable, ConfirmationPopup, Pagination, SearchBar};
use crate::context::{AdminContext, FormTarget};
use crate::store::{store_set_listing, store_set_load_error, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AdminContext::new((reload_trigger, set_reload_trigger));

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load the listing when page, query, or trigger changes
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let page = store.page().get();
        let query = store.query().get();
        web_sys::console::log_1(
            &format!("[APP] Chargement page {}, query={:?}, trigger={}", page, query, trigger)
                .into(),
        );
        spawn_local(async move {
            match api::list_animals(page, &query).await {
                Ok(loaded) => store_set_listing(&store, loaded),
                Err(e) => {
                    web_sys::console::error_1(&format!("[APP] Échec du chargement : {}", e).into());
                    store_set_load_error(
                        &store,
                        "Désolé, une erreur s'est produite lors de la récupération des données."
                            .to_string(),
                    );
                }
            }
        });
    });

    view! {
        <div class="admin-layout">
            <header class="admin-header">
                <h1>"Administration du refuge"</h1>
                <button
                    class="new-animal-btn"
                    on:click=move |_| ctx.open_editor(FormTarget::Create)
                >
                    "Nouvel animal"
                </button>
            </header>

            {move || ctx.flash.get().map(|msg| view! { <p class="flash-message">{msg}</p> })}

            <SearchBar />

            {move || ctx.editing.get().map(|target| view! { <AnimalFormPanel target=target /> })}

            {move || match store.load_error().get() {
                Some(err) => view! { <p class="global-error">{err}</p> }.into_any(),
                None => view! {
                    <div class="listing">
                        <AnimalTable />
                        <Pagination />
                    </div>
                }.into_any(),
            }}

            <ConfirmationPopup />
        </div>
    }
}
