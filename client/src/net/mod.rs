//! Networking modules for the external API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the client handle pages call, `transport` holds the simulated and
//! networked strategies behind it, and `types` defines the shared DTOs.

pub mod api;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;
