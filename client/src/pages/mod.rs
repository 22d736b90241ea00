//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (form signals, submit flows,
//! redirects) and delegates rendering details to `components`.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod onboarding;
pub mod protected;
pub mod signup;
pub mod tutors;
