//! Tweet engine: creation and owner-only cascade deletion.

use std::sync::Arc;

use tracing::warn;

use super::identity;
use super::ports::{MediaStore, TweetRepository, UserRepository};
use super::{ApiKey, Error, MediaId, TweetId};

/// Result of a delete attempt.
///
/// A wrong owner and a nonexistent tweet are deliberately indistinguishable
/// so the API does not leak tweet existence to non-owners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTweetOutcome {
    Deleted,
    NotOwnerOrMissing,
}

/// Engine for creating and deleting tweets.
#[derive(Clone)]
pub struct TweetService {
    users: Arc<dyn UserRepository>,
    tweets: Arc<dyn TweetRepository>,
    store: Arc<dyn MediaStore>,
}

impl TweetService {
    /// Create a new engine over the given ports.
    pub fn new(
        users: Arc<dyn UserRepository>,
        tweets: Arc<dyn TweetRepository>,
        store: Arc<dyn MediaStore>,
    ) -> Self {
        Self {
            users,
            tweets,
            store,
        }
    }

    /// Create a tweet owned by the caller.
    ///
    /// Media ids are stored verbatim without validating that each id exists;
    /// dangling references are resolved lazily at feed-read time.
    pub async fn create(
        &self,
        api_key: &ApiKey,
        body: &str,
        media_ids: &[MediaId],
    ) -> Result<TweetId, Error> {
        let author = identity::resolve(self.users.as_ref(), api_key).await?;
        let id = self.tweets.insert(author.id, body, media_ids).await?;
        Ok(id)
    }

    /// Delete a tweet the caller owns, cascading to its like edges, media
    /// rows, and stored files.
    ///
    /// Rows are removed in one transaction inside the repository; files are
    /// unlinked only after that transaction commits, and a failed unlink is
    /// logged as an orphaned file rather than surfaced.
    pub async fn delete(
        &self,
        api_key: &ApiKey,
        tweet: TweetId,
    ) -> Result<DeleteTweetOutcome, Error> {
        let actor = identity::resolve(self.users.as_ref(), api_key).await?;
        let Some(file_names) = self.tweets.delete_owned(actor.id, tweet).await? else {
            return Ok(DeleteTweetOutcome::NotOwnerOrMissing);
        };
        for file_name in &file_names {
            if let Err(err) = self.store.remove(file_name).await {
                warn!(file = %file_name, error = %err, "media file orphaned after tweet delete");
            }
        }
        Ok(DeleteTweetOutcome::Deleted)
    }
}
