//! API-key authentication extractor.
//!
//! Every endpoint authenticates with a static `api-key` header. The
//! extractor only validates the header shape; the owning user is resolved
//! by the domain engines, so an unknown key surfaces as the same
//! `user_not_found` envelope as a missing one.

use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpRequest, dev::Payload};

use crate::domain::{ApiKey, Error};

/// HTTP header carrying the caller's credential.
pub const API_KEY_HEADER: &str = "api-key";

/// Extracted `api-key` header value.
#[derive(Debug, Clone)]
pub struct ApiKeyHeader(pub ApiKey);

impl ApiKeyHeader {
    /// Borrow the validated key.
    pub fn key(&self) -> &ApiKey {
        &self.0
    }
}

fn extract_api_key(req: &HttpRequest) -> Result<ApiKey, Error> {
    let raw = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| Error::user_not_found("api-key header missing"))?;
    ApiKey::new(raw).map_err(|_| Error::user_not_found("api-key header empty"))
}

impl FromRequest for ApiKeyHeader {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract_api_key(req).map(ApiKeyHeader))
    }
}
