//! API routing module
//!
//! - [`health`] — health check
//! - [`orders`] — order lifecycle endpoints

pub mod health;
pub mod orders;
