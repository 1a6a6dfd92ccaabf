//! Confirmation Popup Component
//!
//! Shared dialog gating deletions behind an explicit confirm step. The
//! popup is visible exactly while an animal is selected for deletion;
//! on a backend failure it stays open so the user can retry or cancel.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ReplyOutcome};
use crate::context::use_admin_context;
use crate::notify;
use crate::store::{store_remove_animal, use_app_store};

/// Shared delete-confirmation dialog
#[component]
pub fn ConfirmationPopup() -> impl IntoView {
    let ctx = use_admin_context();
    let store = use_app_store();

    let on_cancel = move |_| ctx.page_state.update(|s| s.cancel_deletion());

    let on_confirm = move |_| {
        // No-op when nothing is selected
        let Some(id) = ctx.page_state.with_untracked(|s| s.pending_deletion()) else {
            return;
        };
        spawn_local(async move {
            match api::delete_animal(id).await {
                Ok(reply) => match reply.outcome() {
                    ReplyOutcome::Success { .. } => {
                        store_remove_animal(&store, id);
                        ctx.page_state.update(|s| s.settle_deletion(id));
                    }
                    ReplyOutcome::Failure { message } => {
                        // Selection and popup deliberately left as-is
                        notify::alert(&format!("Erreur : {}", message));
                    }
                },
                Err(e) => {
                    notify::alert("Erreur réseau : impossible de supprimer l'animal.");
                    web_sys::console::error_1(
                        &format!("[ADMIN] Suppression de l'animal {} échouée : {}", id, e).into(),
                    );
                }
            }
        });
    };

    view! {
        <Show when=move || ctx.page_state.with(|s| s.popup_visible())>
            <div class="popup-backdrop">
                <div id="confirmation-popup" class="confirmation-popup">
                    <p>"Voulez-vous vraiment supprimer cet animal ?"</p>
                    <div class="popup-actions">
                        <button id="cancel-delete" on:click=on_cancel>"Annuler"</button>
                        <button id="confirm-delete" class="danger" on:click=on_confirm>
                            "Supprimer"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
