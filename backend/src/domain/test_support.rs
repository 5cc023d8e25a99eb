//! In-memory port implementations for engine unit tests.
//!
//! One `InMemoryStore` implements every repository port over a single locked
//! state so scenario tests can exercise several engines against the same
//! data, mirroring what the transactional store provides in production.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::ports::{
    FeedTweet, LikeRepository, MediaRepository, MediaStore, MediaStoreError, Relations,
    RepositoryError, SocialGraphRepository, TweetRepository, UserRepository,
};
use super::{ApiKey, MediaId, TweetId, User, UserId};

#[derive(Debug, Clone)]
struct StoredTweet {
    id: TweetId,
    body: String,
    media_ids: Vec<MediaId>,
    author: UserId,
}

#[derive(Default)]
struct State {
    users: Vec<(String, User)>,
    follows: Vec<(UserId, UserId)>,
    tweets: Vec<StoredTweet>,
    likes: Vec<(UserId, TweetId)>,
    media: Vec<(MediaId, String)>,
    next_tweet_id: i32,
    next_media_id: i32,
}

/// Locked in-memory realization of all relational ports.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn add_user(&self, api_key: &str, id: i32, name: &str) -> User {
        let user = User::new(UserId(id), name);
        self.state
            .lock()
            .expect("state lock")
            .users
            .push((api_key.to_owned(), user.clone()));
        user
    }

    pub fn seed_tweet(&self, author: UserId, body: &str, media_ids: &[MediaId]) -> TweetId {
        let mut state = self.state.lock().expect("state lock");
        state.next_tweet_id += 1;
        let id = TweetId(state.next_tweet_id);
        state.tweets.push(StoredTweet {
            id,
            body: body.to_owned(),
            media_ids: media_ids.to_vec(),
            author,
        });
        id
    }

    pub fn seed_like(&self, user: UserId, tweet: TweetId) {
        self.state
            .lock()
            .expect("state lock")
            .likes
            .push((user, tweet));
    }

    pub fn add_media_row(&self, id: i32, file_name: &str) -> MediaId {
        let mut state = self.state.lock().expect("state lock");
        state.media.push((MediaId(id), file_name.to_owned()));
        state.next_media_id = state.next_media_id.max(id);
        MediaId(id)
    }

    pub fn media_row_count(&self) -> usize {
        self.state.lock().expect("state lock").media.len()
    }

    pub fn tweet_count(&self) -> usize {
        self.state.lock().expect("state lock").tweets.len()
    }

    pub fn like_count(&self) -> usize {
        self.state.lock().expect("state lock").likes.len()
    }

    fn user_by_id(state: &State, id: UserId) -> Option<User> {
        state
            .users
            .iter()
            .find(|(_, user)| user.id == id)
            .map(|(_, user)| user.clone())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_api_key(&self, api_key: &ApiKey) -> Result<Option<User>, RepositoryError> {
        let state = self.state.lock().expect("state lock");
        Ok(state
            .users
            .iter()
            .find(|(key, _)| key == api_key.as_str())
            .map(|(_, user)| user.clone()))
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let state = self.state.lock().expect("state lock");
        Ok(Self::user_by_id(&state, id))
    }
}

#[async_trait]
impl SocialGraphRepository for InMemoryStore {
    async fn insert_edge(
        &self,
        follower: UserId,
        followee: UserId,
    ) -> Result<bool, RepositoryError> {
        let mut state = self.state.lock().expect("state lock");
        if state.follows.contains(&(follower, followee)) {
            return Ok(false);
        }
        state.follows.push((follower, followee));
        Ok(true)
    }

    async fn delete_edge(
        &self,
        follower: UserId,
        followee: UserId,
    ) -> Result<bool, RepositoryError> {
        let mut state = self.state.lock().expect("state lock");
        let before = state.follows.len();
        state.follows.retain(|edge| *edge != (follower, followee));
        Ok(state.follows.len() < before)
    }

    async fn relations(&self, user: UserId) -> Result<Relations, RepositoryError> {
        let state = self.state.lock().expect("state lock");
        let following = state
            .follows
            .iter()
            .filter(|(follower, _)| *follower == user)
            .filter_map(|(_, followee)| Self::user_by_id(&state, *followee))
            .collect();
        let followers = state
            .follows
            .iter()
            .filter(|(_, followee)| *followee == user)
            .filter_map(|(follower, _)| Self::user_by_id(&state, *follower))
            .collect();
        Ok(Relations {
            following,
            followers,
        })
    }
}

#[async_trait]
impl TweetRepository for InMemoryStore {
    async fn insert(
        &self,
        author: UserId,
        body: &str,
        media_ids: &[MediaId],
    ) -> Result<TweetId, RepositoryError> {
        let mut state = self.state.lock().expect("state lock");
        state.next_tweet_id += 1;
        let id = TweetId(state.next_tweet_id);
        state.tweets.push(StoredTweet {
            id,
            body: body.to_owned(),
            media_ids: media_ids.to_vec(),
            author,
        });
        Ok(id)
    }

    async fn delete_owned(
        &self,
        author: UserId,
        tweet: TweetId,
    ) -> Result<Option<Vec<String>>, RepositoryError> {
        let mut state = self.state.lock().expect("state lock");
        let Some(position) = state
            .tweets
            .iter()
            .position(|row| row.id == tweet && row.author == author)
        else {
            return Ok(None);
        };
        let removed = state.tweets.remove(position);
        state.likes.retain(|(_, liked)| *liked != tweet);
        let file_names = state
            .media
            .iter()
            .filter(|(id, _)| removed.media_ids.contains(id))
            .map(|(_, name)| name.clone())
            .collect();
        state.media.retain(|(id, _)| !removed.media_ids.contains(id));
        Ok(Some(file_names))
    }

    async fn author_of(&self, tweet: TweetId) -> Result<Option<UserId>, RepositoryError> {
        let state = self.state.lock().expect("state lock");
        Ok(state
            .tweets
            .iter()
            .find(|row| row.id == tweet)
            .map(|row| row.author))
    }

    async fn feed_tweets(&self) -> Result<Vec<FeedTweet>, RepositoryError> {
        let state = self.state.lock().expect("state lock");
        Ok(state
            .tweets
            .iter()
            .filter_map(|row| {
                Self::user_by_id(&state, row.author).map(|author| FeedTweet {
                    id: row.id,
                    body: row.body.clone(),
                    media_ids: row.media_ids.clone(),
                    author,
                })
            })
            .collect())
    }
}

#[async_trait]
impl LikeRepository for InMemoryStore {
    async fn insert(&self, user: UserId, tweet: TweetId) -> Result<bool, RepositoryError> {
        let mut state = self.state.lock().expect("state lock");
        if state.likes.contains(&(user, tweet)) {
            return Ok(false);
        }
        state.likes.push((user, tweet));
        Ok(true)
    }

    async fn delete(&self, user: UserId, tweet: TweetId) -> Result<bool, RepositoryError> {
        let mut state = self.state.lock().expect("state lock");
        let before = state.likes.len();
        state.likes.retain(|edge| *edge != (user, tweet));
        Ok(state.likes.len() < before)
    }

    async fn likers_by_tweet(&self) -> Result<Vec<(TweetId, User)>, RepositoryError> {
        let state = self.state.lock().expect("state lock");
        Ok(state
            .likes
            .iter()
            .filter_map(|(user, tweet)| {
                Self::user_by_id(&state, *user).map(|liker| (*tweet, liker))
            })
            .collect())
    }
}

#[async_trait]
impl MediaRepository for InMemoryStore {
    async fn insert(&self, file_name: &str) -> Result<MediaId, RepositoryError> {
        let mut state = self.state.lock().expect("state lock");
        state.next_media_id += 1;
        let id = MediaId(state.next_media_id);
        state.media.push((id, file_name.to_owned()));
        Ok(id)
    }

    async fn file_names(
        &self,
        ids: &[MediaId],
    ) -> Result<HashMap<MediaId, String>, RepositoryError> {
        let state = self.state.lock().expect("state lock");
        Ok(state
            .media
            .iter()
            .filter(|(id, _)| ids.contains(id))
            .map(|(id, name)| (*id, name.clone()))
            .collect())
    }
}

/// Media store double that records saves and removals instead of touching
/// the filesystem.
#[derive(Default)]
pub struct RecordingMediaStore {
    saved: Mutex<Vec<(String, Vec<u8>)>>,
    removed: Mutex<Vec<String>>,
    fail_saves: Mutex<bool>,
    fail_removals: Mutex<bool>,
}

impl RecordingMediaStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn fail_saves(&self) {
        *self.fail_saves.lock().expect("flag lock") = true;
    }

    pub fn fail_removals(&self) {
        *self.fail_removals.lock().expect("flag lock") = true;
    }

    pub fn saved_names(&self) -> Vec<String> {
        self.saved
            .lock()
            .expect("saved lock")
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn removed_names(&self) -> Vec<String> {
        self.removed.lock().expect("removed lock").clone()
    }
}

#[async_trait]
impl MediaStore for RecordingMediaStore {
    async fn save(&self, original_name: &str, bytes: &[u8]) -> Result<String, MediaStoreError> {
        if *self.fail_saves.lock().expect("flag lock") {
            return Err(MediaStoreError::io("disk full"));
        }
        let stored = format!("stored_{original_name}");
        self.saved
            .lock()
            .expect("saved lock")
            .push((stored.clone(), bytes.to_vec()));
        Ok(stored)
    }

    async fn remove(&self, stored_name: &str) -> Result<(), MediaStoreError> {
        if *self.fail_removals.lock().expect("flag lock") {
            return Err(MediaStoreError::io("unlink failed"));
        }
        self.removed
            .lock()
            .expect("removed lock")
            .push(stored_name.to_owned());
        Ok(())
    }
}
