//! Admin Page View-Model
//!
//! Pure state for the listing page interactions: which per-row action
//! menus are open, and which animal (if any) is pending deletion. The
//! confirmation popup is visible exactly while a deletion is pending.

use std::collections::HashSet;

/// Interaction state of the admin listing page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminPageState {
    open_menus: HashSet<u32>,
    pending_delete: Option<u32>,
}

impl AdminPageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the action menu of one row open/closed
    pub fn toggle_menu(&mut self, id: u32) {
        if !self.open_menus.remove(&id) {
            self.open_menus.insert(id);
        }
    }

    pub fn menu_open(&self, id: u32) -> bool {
        self.open_menus.contains(&id)
    }

    /// Select an animal for deletion, overwriting any prior selection
    pub fn request_deletion(&mut self, id: u32) {
        self.pending_delete = Some(id);
    }

    /// Drop the pending selection (idempotent)
    pub fn cancel_deletion(&mut self) {
        self.pending_delete = None;
    }

    /// Clear the selection once the backend confirmed the deletion.
    /// The row's menu bit goes with it; the row itself is gone.
    pub fn settle_deletion(&mut self, id: u32) {
        self.open_menus.remove(&id);
        self.pending_delete = None;
    }

    pub fn pending_deletion(&self) -> Option<u32> {
        self.pending_delete
    }

    pub fn popup_visible(&self) -> bool {
        self.pending_delete.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_menu_is_involution() {
        let mut state = AdminPageState::new();
        assert!(!state.menu_open(3));
        state.toggle_menu(3);
        assert!(state.menu_open(3));
        state.toggle_menu(3);
        assert!(!state.menu_open(3));
    }

    #[test]
    fn test_toggle_menu_unknown_row_is_harmless() {
        let mut state = AdminPageState::new();
        state.toggle_menu(999);
        state.toggle_menu(999);
        assert_eq!(state, AdminPageState::new());
    }

    #[test]
    fn test_menus_are_independent() {
        let mut state = AdminPageState::new();
        state.toggle_menu(1);
        state.toggle_menu(2);
        state.toggle_menu(1);
        assert!(!state.menu_open(1));
        assert!(state.menu_open(2));
    }

    #[test]
    fn test_request_deletion_opens_popup_and_records_id() {
        let mut state = AdminPageState::new();
        state.request_deletion(7);
        assert_eq!(state.pending_deletion(), Some(7));
        assert!(state.popup_visible());
    }

    #[test]
    fn test_request_deletion_overwrites_prior_selection() {
        let mut state = AdminPageState::new();
        state.request_deletion(7);
        state.request_deletion(9);
        assert_eq!(state.pending_deletion(), Some(9));
    }

    #[test]
    fn test_cancel_clears_selection_and_hides_popup() {
        let mut state = AdminPageState::new();
        state.request_deletion(7);
        state.cancel_deletion();
        assert_eq!(state.pending_deletion(), None);
        assert!(!state.popup_visible());
        // Safe with nothing pending
        state.cancel_deletion();
        assert_eq!(state.pending_deletion(), None);
    }

    #[test]
    fn test_settle_clears_selection_and_menu_bit() {
        let mut state = AdminPageState::new();
        state.toggle_menu(7);
        state.request_deletion(7);
        state.settle_deletion(7);
        assert_eq!(state.pending_deletion(), None);
        assert!(!state.popup_visible());
        assert!(!state.menu_open(7));
    }
}
