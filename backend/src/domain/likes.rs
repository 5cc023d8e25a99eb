//! Like engine: the (user, tweet) edge set.
//!
//! The no-self-like rule is checked before the insert; duplicate edges are
//! left to the store's unique constraint and downgraded to a denial.

use std::sync::Arc;

use super::identity;
use super::ports::{LikeRepository, TweetRepository, UserRepository};
use super::{ApiKey, Error, TweetId};

/// Result of a like attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeOutcome {
    Liked,
    /// The caller owns the tweet.
    OwnTweet,
    /// The edge already existed.
    AlreadyLiked,
    /// No such tweet.
    TweetMissing,
}

/// Result of an unlike attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlikeOutcome {
    Unliked,
    /// No edge existed; denied, not an error.
    NotLiked,
}

/// Engine adding and removing like edges.
#[derive(Clone)]
pub struct LikeService {
    users: Arc<dyn UserRepository>,
    tweets: Arc<dyn TweetRepository>,
    likes: Arc<dyn LikeRepository>,
}

impl LikeService {
    /// Create a new engine over the given ports.
    pub fn new(
        users: Arc<dyn UserRepository>,
        tweets: Arc<dyn TweetRepository>,
        likes: Arc<dyn LikeRepository>,
    ) -> Self {
        Self {
            users,
            tweets,
            likes,
        }
    }

    /// Add the like edge (caller, tweet).
    pub async fn like(&self, api_key: &ApiKey, tweet: TweetId) -> Result<LikeOutcome, Error> {
        let actor = identity::resolve(self.users.as_ref(), api_key).await?;
        let Some(owner) = self.tweets.author_of(tweet).await? else {
            return Ok(LikeOutcome::TweetMissing);
        };
        if owner == actor.id {
            return Ok(LikeOutcome::OwnTweet);
        }
        let inserted = self.likes.insert(actor.id, tweet).await?;
        Ok(if inserted {
            LikeOutcome::Liked
        } else {
            LikeOutcome::AlreadyLiked
        })
    }

    /// Remove the like edge (caller, tweet); idempotent removal semantics.
    pub async fn unlike(&self, api_key: &ApiKey, tweet: TweetId) -> Result<UnlikeOutcome, Error> {
        let actor = identity::resolve(self.users.as_ref(), api_key).await?;
        let removed = self.likes.delete(actor.id, tweet).await?;
        Ok(if removed {
            UnlikeOutcome::Unliked
        } else {
            UnlikeOutcome::NotLiked
        })
    }
}
