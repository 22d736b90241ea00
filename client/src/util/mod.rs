//! Browser-facing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `storage` and `dialog` wrap `localStorage` and `window.alert` behind
//! hydrate-only web-sys glue, with native fallbacks for SSR and tests.

pub mod dialog;
pub mod storage;
