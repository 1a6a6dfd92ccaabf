//! Animal Form Panel
//!
//! Create/edit form with client-side validation. Field errors render
//! inline; a backend failure renders as a global form error.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, AnimalPayload, ReplyOutcome};
use crate::context::{use_admin_context, FormTarget};
use crate::forms::{AnimalForm, FieldErrors};

/// Registration/update form panel
#[component]
pub fn AnimalFormPanel(target: FormTarget) -> impl IntoView {
    let ctx = use_admin_context();

    let (animal_id, initial) = match &target {
        FormTarget::Create => (None, AnimalForm::default()),
        FormTarget::Edit(animal) => (
            Some(animal.id),
            AnimalForm {
                nom: animal.nom.clone(),
                espece: animal.espece.clone(),
                race: animal.race.clone(),
                age: animal.age.to_string(),
                description: animal.description.clone().unwrap_or_default(),
                email: animal.email.clone(),
                adresse: animal.adresse.clone(),
                ville: animal.ville.clone(),
                code_postal: animal.code_postal.clone(),
            },
        ),
    };

    let (form, set_form) = signal(initial);
    let (errors, set_errors) = signal(FieldErrors::new());
    let (global_error, set_global_error) = signal::<Option<String>>(None);

    let field_error = move |field: &'static str| errors.with(|e| e.get(field).cloned());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = form.get();
        let field_errors = current.validate();
        if !field_errors.is_empty() {
            set_errors.set(field_errors);
            return;
        }
        set_errors.set(FieldErrors::new());
        set_global_error.set(None);

        spawn_local(async move {
            let payload = AnimalPayload {
                nom: &current.nom,
                espece: &current.espece,
                race: &current.race,
                age: current.parsed_age().unwrap_or(0),
                description: &current.description,
                email: &current.email,
                adresse: &current.adresse,
                ville: &current.ville,
                code_postal: &current.code_postal,
            };
            let sent = match animal_id {
                Some(id) => api::update_animal(id, &payload).await,
                None => api::register_animal(&payload).await,
            };
            match sent {
                Ok(reply) => match reply.outcome() {
                    ReplyOutcome::Success { message } => {
                        ctx.set_flash(message);
                        ctx.close_editor();
                        ctx.reload();
                    }
                    ReplyOutcome::Failure { message } => {
                        set_global_error.set(Some(message));
                    }
                },
                Err(e) => {
                    set_global_error.set(Some(
                        "Désolé, une erreur s'est produite lors de l'envoi du formulaire."
                            .to_string(),
                    ));
                    web_sys::console::error_1(
                        &format!("[ADMIN] Envoi du formulaire échoué : {}", e).into(),
                    );
                }
            }
        });
    };

    view! {
        <section class="animal-form-panel">
            <h2>{if animal_id.is_some() { "Modifier un animal" } else { "Enregistrer un animal" }}</h2>

            {move || global_error.get().map(|msg| view! { <p class="global-error">{msg}</p> })}

            <form on:submit=on_submit>
                <div class="form-row">
                    <label>"Nom"</label>
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.nom.clone())
                        on:input=move |ev| set_form.update(|f| f.nom = event_target_value(&ev))
                    />
                    {move || field_error("nom").map(|msg| view! { <span class="field-error">{msg}</span> })}
                </div>

                <div class="form-row">
                    <label>"Espèce"</label>
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.espece.clone())
                        on:input=move |ev| set_form.update(|f| f.espece = event_target_value(&ev))
                    />
                    {move || field_error("espece").map(|msg| view! { <span class="field-error">{msg}</span> })}
                </div>

                <div class="form-row">
                    <label>"Race"</label>
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.race.clone())
                        on:input=move |ev| set_form.update(|f| f.race = event_target_value(&ev))
                    />
                    {move || field_error("race").map(|msg| view! { <span class="field-error">{msg}</span> })}
                </div>

                <div class="form-row">
                    <label>"Âge"</label>
                    <input
                        type="number"
                        min="0"
                        prop:value=move || form.with(|f| f.age.clone())
                        on:input=move |ev| set_form.update(|f| f.age = event_target_value(&ev))
                    />
                    {move || field_error("age").map(|msg| view! { <span class="field-error">{msg}</span> })}
                </div>

                <div class="form-row">
                    <label>"Description"</label>
                    <textarea
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let textarea = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                            let value = textarea.value();
                            set_form.update(|f| f.description = value);
                        }
                    ></textarea>
                    {move || field_error("description").map(|msg| view! { <span class="field-error">{msg}</span> })}
                </div>

                <div class="form-row">
                    <label>"Email"</label>
                    <input
                        type="email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| set_form.update(|f| f.email = event_target_value(&ev))
                    />
                    {move || field_error("email").map(|msg| view! { <span class="field-error">{msg}</span> })}
                </div>

                <div class="form-row">
                    <label>"Adresse"</label>
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.adresse.clone())
                        on:input=move |ev| set_form.update(|f| f.adresse = event_target_value(&ev))
                    />
                    {move || field_error("adresse").map(|msg| view! { <span class="field-error">{msg}</span> })}
                </div>

                <div class="form-row">
                    <label>"Ville"</label>
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.ville.clone())
                        on:input=move |ev| set_form.update(|f| f.ville = event_target_value(&ev))
                    />
                    {move || field_error("ville").map(|msg| view! { <span class="field-error">{msg}</span> })}
                </div>

                <div class="form-row">
                    <label>"Code postal"</label>
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.code_postal.clone())
                        on:input=move |ev| set_form.update(|f| f.code_postal = event_target_value(&ev))
                    />
                    {move || field_error("code_postal").map(|msg| view! { <span class="field-error">{msg}</span> })}
                </div>

                <div class="form-actions">
                    <button type="submit">"Enregistrer"</button>
                    <button type="button" on:click=move |_| ctx.close_editor()>"Annuler"</button>
                </div>
            </form>
        </section>
    }
}
