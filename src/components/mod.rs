//! UI Components
//!
//! Reusable Leptos components.

mod animal_form;
mod animal_row;
mod animal_table;
mod confirmation_popup;
mod pagination;
mod search_bar;

pub use animal_form::AnimalFormPanel;
pub use animal_row::AnimalRow;
pub use animal_table::AnimalTable;
pub use confirmation_popup::ConfirmationPopup;
pub use pagination::Pagination;
pub use search_bar::SearchBar;
