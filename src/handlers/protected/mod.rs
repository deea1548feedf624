//! Admin handlers. Every route in this tree sits behind
//! [`crate::middleware::require_admin`]; by the time a handler runs the
//! bearer credential has already been verified.

pub mod blog;
pub mod contacts;
pub mod export;
pub mod packages;
pub mod promos;
pub mod settings;
pub mod team;
pub mod testimonials;
