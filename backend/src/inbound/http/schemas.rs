//! Wire DTOs shared across the HTTP handlers.
//!
//! Response bodies keep the legacy envelope: every payload carries a
//! `result` boolean, structured failures add `error_type` and
//! `error_message`, and policy denials are a bare `{"result": false}`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, MediaId, Profile, TweetId, TweetView, User, UserId};

/// Bare result envelope used for denials and simple acknowledgements.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct ResultBody {
    pub result: bool,
}

impl ResultBody {
    /// Successful acknowledgement.
    pub fn ok() -> Self {
        Self { result: true }
    }

    /// Policy denial; paired with HTTP 400 by the handlers.
    pub fn denied() -> Self {
        Self { result: false }
    }
}

/// Structured error envelope; paired with HTTP 418.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub result: bool,
    pub error_type: String,
    pub error_message: String,
}

impl From<&Error> for ErrorBody {
    fn from(err: &Error) -> Self {
        Self {
            result: false,
            error_type: err.code().as_str().to_owned(),
            error_message: err.message().to_owned(),
        }
    }
}

/// Request body for `POST /api/tweets`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TweetCreateRequest {
    pub text: String,
    #[serde(default)]
    pub media_ids: Vec<i32>,
}

/// Response for a created tweet.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TweetCreated {
    pub result: bool,
    pub tweet_id: i32,
}

impl From<TweetId> for TweetCreated {
    fn from(id: TweetId) -> Self {
        Self {
            result: true,
            tweet_id: id.as_i32(),
        }
    }
}

/// Response for an uploaded media file.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MediaCreated {
    pub result: bool,
    pub media_id: i32,
}

impl From<MediaId> for MediaCreated {
    fn from(id: MediaId) -> Self {
        Self {
            result: true,
            media_id: id.as_i32(),
        }
    }
}

/// Minimal user projection used inside profiles and feed entries.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: UserId,
    pub name: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
        }
    }
}

/// A liker; the same projection as [`UserDto`] but keyed `user_id` on the
/// wire for compatibility.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LikeDto {
    pub user_id: UserId,
    pub name: String,
}

impl From<User> for LikeDto {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            name: user.name,
        }
    }
}

/// Profile payload: the user plus both follow projections.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileUser {
    pub id: UserId,
    pub name: String,
    pub followers: Vec<UserDto>,
    pub following: Vec<UserDto>,
}

impl From<Profile> for ProfileUser {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.user.id,
            name: profile.user.name,
            followers: profile.followers.into_iter().map(UserDto::from).collect(),
            following: profile.following.into_iter().map(UserDto::from).collect(),
        }
    }
}

/// Envelope for profile endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileBody {
    pub result: bool,
    pub user: ProfileUser,
}

impl From<Profile> for ProfileBody {
    fn from(profile: Profile) -> Self {
        Self {
            result: true,
            user: ProfileUser::from(profile),
        }
    }
}

/// One feed entry.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TweetDto {
    pub id: TweetId,
    pub text: String,
    pub attachments: Vec<String>,
    pub author: UserDto,
    pub likes: Vec<LikeDto>,
}

impl From<TweetView> for TweetDto {
    fn from(view: TweetView) -> Self {
        Self {
            id: view.id,
            text: view.text,
            attachments: view.attachments,
            author: UserDto::from(view.author),
            likes: view.likes.into_iter().map(LikeDto::from).collect(),
        }
    }
}

/// Envelope for `GET /api/tweets`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FeedBody {
    pub result: bool,
    pub tweets: Vec<TweetDto>,
}

impl From<Vec<TweetView>> for FeedBody {
    fn from(views: Vec<TweetView>) -> Self {
        Self {
            result: true,
            tweets: views.into_iter().map(TweetDto::from).collect(),
        }
    }
}
