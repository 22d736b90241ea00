//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `auth`, `onboarding`, `directory`,
//! `ui`) so pages can depend on small focused models. Flow logic lives here
//! rather than in page components so it can be exercised without a browser.

pub mod auth;
pub mod directory;
pub mod onboarding;
pub mod session;
pub mod ui;
