//! Pagination Component
//!
//! Previous/next plus numbered page buttons, current page highlighted.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Page navigation under the listing table
#[component]
pub fn Pagination() -> impl IntoView {
    let store = use_app_store();

    let current = move || store.page().get();
    let total = move || store.total_pages().get();
    let go_to = move |page: u32| {
        if page >= 1 && page <= store.total_pages().get() {
            store.page().set(page);
        }
    };

    view! {
        <Show when=move || { total() > 1 }>
            <nav class="pagination">
                <button
                    disabled=move || current() <= 1
                    on:click=move |_| go_to(current().saturating_sub(1))
                >
                    "Précédent"
                </button>
                <For
                    each=move || 1..=total()
                    key=|page| *page
                    children=move |page| {
                        let page_class = move || {
                            if current() == page { "page-btn active" } else { "page-btn" }
                        };
                        view! {
                            <button class=page_class on:click=move |_| go_to(page)>
                                {page}
                            </button>
                        }
                    }
                />
                <button
                    disabled=move || current() >= total()
                    on:click=move |_| go_to(current() + 1)
                >
                    "Suivant"
                </button>
            </nav>
        </Show>
    }
}
