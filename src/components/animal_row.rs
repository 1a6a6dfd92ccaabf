//! Animal Row Component
//!
//! One row of the listing table, with its collapsible action menu.

use leptos::prelude::*;

use crate::context::{use_admin_context, FormTarget};
use crate::models::Animal;

/// A single animal row with its action menu
#[component]
pub fn AnimalRow(animal: Animal) -> impl IntoView {
    let ctx = use_admin_context();

    let id = animal.id;
    let nom = animal.nom.clone();
    let espece = animal.espece.clone();
    let race = animal.race.clone();
    let age = animal.age;
    let ville = animal.ville.clone();
    let email = animal.email.clone();

    let menu_class = move || {
        if ctx.page_state.with(|s| s.menu_open(id)) {
            "action-menu visible"
        } else {
            "action-menu"
        }
    };

    view! {
        <tr>
            <td>{nom}</td>
            <td>{espece}</td>
            <td>{race}</td>
            <td>{age}</td>
            <td>{ville}</td>
            <td>{email}</td>
            <td class="actions-cell">
                <button
                    class="actions-toggle"
                    data-id=id.to_string()
                    on:click=move |_| ctx.page_state.update(|s| s.toggle_menu(id))
                >
                    "⋯"
                </button>
                <div id=format!("actions-{}", id) class=menu_class>
                    <button
                        class="edit-btn"
                        on:click=move |_| {
                            ctx.page_state.update(|s| s.toggle_menu(id));
                            ctx.open_editor(FormTarget::Edit(animal.clone()));
                        }
                    >
                        "Modifier"
                    </button>
                    <button
                        class="delete-btn"
                        data-id=id.to_string()
                        on:click=move |_| ctx.page_state.update(|s| s.request_deletion(id))
                    >
                        "Supprimer"
                    </button>
                </div>
            </td>
        </tr>
    }
}
