//! Tweets API handlers.
//!
//! ```text
//! POST   /api/tweets            Create a tweet
//! GET    /api/tweets            Global feed ordered by like count
//! DELETE /api/tweets/{id}       Delete an owned tweet
//! POST   /api/tweets/{id}/likes Like a tweet
//! DELETE /api/tweets/{id}/likes Remove a like
//! ```
//!
//! Policy denials (not-owner, self-like, duplicate edge) respond with
//! `400 {"result": false}`; structured failures use the 418 envelope.

use actix_web::{HttpResponse, delete, get, post, web};

use crate::domain::{DeleteTweetOutcome, LikeOutcome, MediaId, TweetId, UnlikeOutcome};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::ApiKeyHeader;
use crate::inbound::http::schemas::{ErrorBody, FeedBody, ResultBody, TweetCreateRequest, TweetCreated};
use crate::inbound::http::state::HttpState;

/// Create a tweet owned by the caller.
///
/// Media ids are embedded verbatim; a dangling id is tolerated and skipped
/// at feed-read time.
#[utoipa::path(
    post,
    path = "/api/tweets",
    request_body = TweetCreateRequest,
    responses(
        (status = 201, description = "Tweet created", body = TweetCreated),
        (status = 418, description = "Structured failure", body = ErrorBody)
    ),
    tags = ["tweets"],
    operation_id = "createTweet"
)]
#[post("/tweets")]
pub async fn create_tweet(
    state: web::Data<HttpState>,
    auth: ApiKeyHeader,
    payload: web::Json<TweetCreateRequest>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let media_ids: Vec<MediaId> = payload.media_ids.into_iter().map(MediaId).collect();
    let id = state
        .tweets
        .create(auth.key(), &payload.text, &media_ids)
        .await?;
    Ok(HttpResponse::Created().json(TweetCreated::from(id)))
}

/// Delete a tweet the caller owns, cascading to likes, media rows, and
/// stored files.
///
/// The denial does not distinguish "not yours" from "does not exist", so
/// tweet existence is never leaked to non-owners.
#[utoipa::path(
    delete,
    path = "/api/tweets/{id}",
    params(("id" = i32, Path, description = "Tweet id")),
    responses(
        (status = 200, description = "Tweet deleted", body = ResultBody),
        (status = 400, description = "Not owner or missing", body = ResultBody),
        (status = 418, description = "Structured failure", body = ErrorBody)
    ),
    tags = ["tweets"],
    operation_id = "deleteTweet"
)]
#[delete("/tweets/{id}")]
pub async fn delete_tweet(
    state: web::Data<HttpState>,
    auth: ApiKeyHeader,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let tweet = TweetId(path.into_inner());
    match state.tweets.delete(auth.key(), tweet).await? {
        DeleteTweetOutcome::Deleted => Ok(HttpResponse::Ok().json(ResultBody::ok())),
        DeleteTweetOutcome::NotOwnerOrMissing => {
            Ok(HttpResponse::BadRequest().json(ResultBody::denied()))
        }
    }
}

/// Return the global feed ordered by descending like count.
#[utoipa::path(
    get,
    path = "/api/tweets",
    responses(
        (status = 200, description = "Feed", body = FeedBody),
        (status = 418, description = "Structured failure", body = ErrorBody)
    ),
    tags = ["tweets"],
    operation_id = "listFeed"
)]
#[get("/tweets")]
pub async fn list_feed(
    state: web::Data<HttpState>,
    auth: ApiKeyHeader,
) -> ApiResult<HttpResponse> {
    let views = state.feed.feed(auth.key()).await?;
    Ok(HttpResponse::Ok().json(FeedBody::from(views)))
}

/// Like a tweet on behalf of the caller.
#[utoipa::path(
    post,
    path = "/api/tweets/{id}/likes",
    params(("id" = i32, Path, description = "Tweet id")),
    responses(
        (status = 201, description = "Like recorded", body = ResultBody),
        (status = 400, description = "Denied", body = ResultBody),
        (status = 418, description = "Structured failure", body = ErrorBody)
    ),
    tags = ["tweets"],
    operation_id = "likeTweet"
)]
#[post("/tweets/{id}/likes")]
pub async fn like_tweet(
    state: web::Data<HttpState>,
    auth: ApiKeyHeader,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let tweet = TweetId(path.into_inner());
    match state.likes.like(auth.key(), tweet).await? {
        LikeOutcome::Liked => Ok(HttpResponse::Created().json(ResultBody::ok())),
        LikeOutcome::OwnTweet | LikeOutcome::AlreadyLiked | LikeOutcome::TweetMissing => {
            Ok(HttpResponse::BadRequest().json(ResultBody::denied()))
        }
    }
}

/// Remove the caller's like from a tweet.
#[utoipa::path(
    delete,
    path = "/api/tweets/{id}/likes",
    params(("id" = i32, Path, description = "Tweet id")),
    responses(
        (status = 200, description = "Like removed", body = ResultBody),
        (status = 400, description = "No such like", body = ResultBody),
        (status = 418, description = "Structured failure", body = ErrorBody)
    ),
    tags = ["tweets"],
    operation_id = "unlikeTweet"
)]
#[delete("/tweets/{id}/likes")]
pub async fn unlike_tweet(
    state: web::Data<HttpState>,
    auth: ApiKeyHeader,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let tweet = TweetId(path.into_inner());
    match state.likes.unlike(auth.key(), tweet).await? {
        UnlikeOutcome::Unliked => Ok(HttpResponse::Ok().json(ResultBody::ok())),
        UnlikeOutcome::NotLiked => Ok(HttpResponse::BadRequest().json(ResultBody::denied())),
    }
}
