//! Driven adapters implementing the domain ports.

pub mod media_store;
pub mod persistence;
