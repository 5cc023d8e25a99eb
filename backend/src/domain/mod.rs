//! Transport-agnostic core of the microblog.
//!
//! Each engine is a small service over repository ports: the identity
//! resolver maps API keys to users, the social graph maintains follow edges,
//! the tweet and like engines enforce ownership rules, and the feed assembler
//! produces the like-ordered global timeline. Policy denials (self-like,
//! duplicate follow, not-owner) are outcome variants, never errors; [`Error`]
//! is reserved for unknown identities and infrastructure faults.

mod error;
pub mod feed;
pub mod identity;
pub mod likes;
pub mod media;
pub mod ports;
pub mod social_graph;
#[cfg(test)]
pub(crate) mod test_support;
mod tweet;
pub mod tweets;
mod user;

pub use error::{Error, ErrorCode};
pub use feed::{FeedService, TweetView};
pub use likes::{LikeOutcome, LikeService, UnlikeOutcome};
pub use media::MediaService;
pub use social_graph::{FollowOutcome, Profile, SocialGraphService, UnfollowOutcome};
pub use tweet::{MediaId, TweetId};
pub use tweets::{DeleteTweetOutcome, TweetService};
pub use user::{ApiKey, ApiKeyValidationError, User, UserId};
