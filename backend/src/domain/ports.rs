//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the engines expect to interact with driven adapters
//! (the relational store and the media file store). Each trait exposes
//! strongly typed errors so adapters map their failures into predictable
//! variants instead of returning `anyhow::Result`.
//!
//! Duplicate like and follow edges are arbitrated solely by the store's
//! uniqueness constraints: the insert methods report the losing insert as
//! `Ok(false)`, never as an error.

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;

use super::{ApiKey, MediaId, TweetId, User, UserId};

/// Errors surfaced by relational-store adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// Database connectivity failures (pool checkout, closed connection).
    #[error("repository connection failed: {message}")]
    Connection { message: String },
    /// Query execution failures.
    #[error("repository query failed: {message}")]
    Query { message: String },
}

impl RepositoryError {
    /// Helper for connection related adapter errors.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

impl From<RepositoryError> for super::Error {
    fn from(err: RepositoryError) -> Self {
        Self::storage(err.to_string())
    }
}

/// Errors surfaced by the media file store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaStoreError {
    /// Filesystem read/write/unlink failure.
    #[error("media store I/O failed: {message}")]
    Io { message: String },
}

impl MediaStoreError {
    /// Helper for I/O failures.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }
}

/// Both directional projections of the follow relation for one user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Relations {
    /// Users this user follows (edges where the user is the follower side).
    pub following: Vec<User>,
    /// Users following this user (edges where the user is the followee side).
    pub followers: Vec<User>,
}

/// A tweet joined to its author, as loaded for feed assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedTweet {
    pub id: TweetId,
    pub body: String,
    pub media_ids: Vec<MediaId>,
    pub author: User,
}

/// Identity lookups against the user table.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Resolve an API key to a user record.
    async fn find_by_api_key(&self, api_key: &ApiKey) -> Result<Option<User>, RepositoryError>;

    /// Look a user up by surrogate id.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError>;
}

/// Maintains and queries the follow relation.
#[async_trait]
pub trait SocialGraphRepository: Send + Sync {
    /// Insert edge (follower, followee). Returns `false` when the edge
    /// already exists (unique-constraint violation downgraded).
    async fn insert_edge(&self, follower: UserId, followee: UserId)
    -> Result<bool, RepositoryError>;

    /// Remove edge (follower, followee). Returns `false` when no edge
    /// existed.
    async fn delete_edge(&self, follower: UserId, followee: UserId)
    -> Result<bool, RepositoryError>;

    /// Load the following/followers projections for one user.
    async fn relations(&self, user: UserId) -> Result<Relations, RepositoryError>;
}

/// Tweet rows and their cascade deletion.
#[async_trait]
pub trait TweetRepository: Send + Sync {
    /// Insert a tweet owned by `author`; media ids are stored verbatim.
    async fn insert(
        &self,
        author: UserId,
        body: &str,
        media_ids: &[MediaId],
    ) -> Result<TweetId, RepositoryError>;

    /// Delete the tweet filtered by (author, id) together with its like
    /// edges and media rows in one transaction.
    ///
    /// Returns the stored file names of the removed media rows so the caller
    /// can unlink the files after commit, or `None` when no row matched the
    /// (author, id) pair — deliberately indistinguishable from "not yours".
    async fn delete_owned(
        &self,
        author: UserId,
        tweet: TweetId,
    ) -> Result<Option<Vec<String>>, RepositoryError>;

    /// Owner of a tweet, or `None` when the tweet does not exist.
    async fn author_of(&self, tweet: TweetId) -> Result<Option<UserId>, RepositoryError>;

    /// Every tweet joined to its author, in storage order.
    async fn feed_tweets(&self) -> Result<Vec<FeedTweet>, RepositoryError>;
}

/// Like edges between users and tweets.
#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Insert a like edge. Returns `false` when the edge already exists.
    async fn insert(&self, user: UserId, tweet: TweetId) -> Result<bool, RepositoryError>;

    /// Remove a like edge. Returns `false` when no edge existed.
    async fn delete(&self, user: UserId, tweet: TweetId) -> Result<bool, RepositoryError>;

    /// Every like edge joined to the liking user, for feed assembly.
    async fn likers_by_tweet(&self) -> Result<Vec<(TweetId, User)>, RepositoryError>;
}

/// Media filename rows referenced (advisorily) from tweets.
#[async_trait]
pub trait MediaRepository: Send + Sync {
    /// Record a stored file name, returning the new row id.
    async fn insert(&self, file_name: &str) -> Result<MediaId, RepositoryError>;

    /// Resolve ids to stored file names; ids with no matching row are simply
    /// absent from the map.
    async fn file_names(
        &self,
        ids: &[MediaId],
    ) -> Result<HashMap<MediaId, String>, RepositoryError>;
}

/// Durable byte storage for uploaded media files.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Persist `bytes` under a generated collision-free name derived from
    /// `original_name`; returns the stored name.
    async fn save(&self, original_name: &str, bytes: &[u8]) -> Result<String, MediaStoreError>;

    /// Remove a previously stored file.
    async fn remove(&self, stored_name: &str) -> Result<(), MediaStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn repository_errors_render_their_message() {
        let err = RepositoryError::connection("pool exhausted");
        assert!(err.to_string().contains("pool exhausted"));
        let err = RepositoryError::query("syntax error");
        assert!(err.to_string().contains("syntax error"));
    }

    #[rstest]
    fn repository_error_converts_to_storage_domain_error() {
        let err: crate::domain::Error = RepositoryError::query("boom").into();
        assert_eq!(err.code(), crate::domain::ErrorCode::Storage);
        assert!(err.message().contains("boom"));
    }
}
