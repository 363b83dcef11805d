//! Request handlers.

pub mod contracts;
pub mod health;
