//! Animal Table Component
//!
//! Listing table over the current page of animals.

use leptos::prelude::*;

use crate::components::AnimalRow;
use crate::store::{use_app_store, AppStateStoreFields};

/// Listing table of the current page
#[component]
pub fn AnimalTable() -> impl IntoView {
    let store = use_app_store();

    view! {
        <table class="animal-table">
            <thead>
                <tr>
                    <th>"Nom"</th>
                    <th>"Espèce"</th>
                    <th>"Race"</th>
                    <th>"Âge"</th>
                    <th>"Ville"</th>
                    <th>"Email"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || store.animals().get()
                    key=|animal| animal.id
                    children=move |animal| view! { <AnimalRow animal=animal /> }
                />
            </tbody>
        </table>
        <Show when=move || store.animals().with(|animals| animals.is_empty())>
            <p class="empty-list">"Aucun animal trouvé."</p>
        </Show>
    }
}
