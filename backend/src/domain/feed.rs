//! Feed assembler: the global like-ordered timeline.
//!
//! The viewer is resolved only to authorize the call; the feed itself spans
//! every tweet in the system. Like count is a query-time aggregation over the
//! like edges, never a stored column, so the ordering can not go stale.

use std::collections::HashMap;
use std::sync::Arc;

use super::identity;
use super::ports::{LikeRepository, MediaRepository, TweetRepository, UserRepository};
use super::{ApiKey, Error, MediaId, TweetId, User};

/// One assembled feed entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TweetView {
    pub id: TweetId,
    pub text: String,
    /// Stored file names of attached media; dangling media ids are skipped.
    pub attachments: Vec<String>,
    pub author: User,
    pub likes: Vec<User>,
}

/// Engine joining tweets with authors, likers, and media file names.
#[derive(Clone)]
pub struct FeedService {
    users: Arc<dyn UserRepository>,
    tweets: Arc<dyn TweetRepository>,
    likes: Arc<dyn LikeRepository>,
    media: Arc<dyn MediaRepository>,
}

impl FeedService {
    /// Create a new engine over the given ports.
    pub fn new(
        users: Arc<dyn UserRepository>,
        tweets: Arc<dyn TweetRepository>,
        likes: Arc<dyn LikeRepository>,
        media: Arc<dyn MediaRepository>,
    ) -> Self {
        Self {
            users,
            tweets,
            likes,
            media,
        }
    }

    /// Assemble the feed for an authorized viewer.
    ///
    /// Ordered by descending like count with ascending tweet id as the
    /// deterministic tie-break.
    pub async fn feed(&self, api_key: &ApiKey) -> Result<Vec<TweetView>, Error> {
        identity::resolve(self.users.as_ref(), api_key).await?;

        let rows = self.tweets.feed_tweets().await?;

        let mut likers: HashMap<TweetId, Vec<User>> = HashMap::new();
        for (tweet, user) in self.likes.likers_by_tweet().await? {
            likers.entry(tweet).or_default().push(user);
        }

        let all_media_ids: Vec<MediaId> = rows
            .iter()
            .flat_map(|row| row.media_ids.iter().copied())
            .collect();
        let file_names = if all_media_ids.is_empty() {
            HashMap::new()
        } else {
            self.media.file_names(&all_media_ids).await?
        };

        let mut views: Vec<TweetView> = rows
            .into_iter()
            .map(|row| {
                let attachments = row
                    .media_ids
                    .iter()
                    .filter_map(|id| file_names.get(id).cloned())
                    .collect();
                TweetView {
                    id: row.id,
                    text: row.body,
                    attachments,
                    author: row.author,
                    likes: likers.remove(&row.id).unwrap_or_default(),
                }
            })
            .collect();

        views.sort_by(|a, b| b.likes.len().cmp(&a.likes.len()).then(a.id.cmp(&b.id)));
        Ok(views)
    }
}
