//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the site chrome and form pieces, reading and writing
//! shared state from Leptos context providers.

pub mod header;
pub mod logout_button;
pub mod sidebar;
pub mod text_field;
pub mod tutor_card;
