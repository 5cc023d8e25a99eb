//! Tweet and media identifier types.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Surrogate tweet identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct TweetId(pub i32);

impl TweetId {
    /// Access the raw database id.
    pub fn as_i32(self) -> i32 {
        self.0
    }
}

impl fmt::Display for TweetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Surrogate media-row identifier.
///
/// Tweets reference media rows by id only; the reference is advisory and a
/// dangling id is skipped when the feed resolves attachments.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct MediaId(pub i32);

impl MediaId {
    /// Access the raw database id.
    pub fn as_i32(self) -> i32 {
        self.0
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
