//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the domain engines and remain testable without a database.

use crate::domain::{FeedService, LikeService, MediaService, SocialGraphService, TweetService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub social_graph: SocialGraphService,
    pub tweets: TweetService,
    pub likes: LikeService,
    pub feed: FeedService,
    pub media: MediaService,
}
