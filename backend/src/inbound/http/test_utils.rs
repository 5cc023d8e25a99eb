//! Helpers shared by the HTTP handler tests.

use std::sync::Arc;

use actix_web::web;

use crate::domain::test_support::{InMemoryStore, RecordingMediaStore};
use crate::domain::{FeedService, LikeService, MediaService, SocialGraphService, TweetService};
use crate::inbound::http::state::HttpState;

/// Build handler state over a shared in-memory store.
pub fn in_memory_state(
    store: &Arc<InMemoryStore>,
    files: &Arc<RecordingMediaStore>,
) -> web::Data<HttpState> {
    web::Data::new(HttpState {
        social_graph: SocialGraphService::new(store.clone(), store.clone()),
        tweets: TweetService::new(store.clone(), store.clone(), files.clone()),
        likes: LikeService::new(store.clone(), store.clone(), store.clone()),
        feed: FeedService::new(store.clone(), store.clone(), store.clone(), store.clone()),
        media: MediaService::new(store.clone(), store.clone(), files.clone()),
    })
}
