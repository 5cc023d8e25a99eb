//! Inbound adapters: transport layers calling into the domain.

pub mod http;
