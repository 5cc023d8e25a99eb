//! Microblogging backend library modules.
//!
//! The crate follows a hexagonal layout: `domain` holds the core engines and
//! their ports, `inbound` adapts HTTP requests onto the domain, `outbound`
//! implements the ports against PostgreSQL and the filesystem, and `server`
//! wires everything together.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
