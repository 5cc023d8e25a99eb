//! HTTP inbound adapter exposing the REST endpoints.

pub mod auth;
pub mod error;
pub mod medias;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod tweets;
pub mod users;

pub use error::ApiResult;
