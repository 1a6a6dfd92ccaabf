//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::Animal;
use crate::state::AdminPageState;

/// What the animal form panel is editing
#[derive(Clone, Debug, PartialEq)]
pub enum FormTarget {
    Create,
    Edit(Animal),
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AdminContext {
    /// Interaction state of the listing page (menus, pending deletion)
    pub page_state: RwSignal<AdminPageState>,
    /// Form panel target (None = panel closed)
    pub editing: RwSignal<Option<FormTarget>>,
    /// Transient success banner
    pub flash: RwSignal<Option<String>>,
    /// Trigger to reload the listing from the backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the listing from the backend - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AdminContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            page_state: RwSignal::new(AdminPageState::new()),
            editing: RwSignal::new(None),
            flash: RwSignal::new(None),
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Trigger a reload of the listing
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Open the form panel for a create or an edit
    pub fn open_editor(&self, target: FormTarget) {
        self.editing.set(Some(target));
    }

    pub fn close_editor(&self) {
        self.editing.set(None);
    }

    /// Replace the flash banner
    pub fn set_flash(&self, message: Option<String>) {
        self.flash.set(message);
    }
}

/// Get the admin context from context
pub fn use_admin_context() -> AdminContext {
    expect_context::<AdminContext>()
}
