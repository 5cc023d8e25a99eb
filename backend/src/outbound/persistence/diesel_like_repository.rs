//! Diesel-backed like-edge storage.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{LikeRepository, RepositoryError};
use crate::domain::{TweetId, User, UserId};

use super::error_map::{is_unique_violation, map_diesel_error, map_pool_error};
use super::models::{NewLikeRow, UserRow};
use super::pool::DbPool;
use super::schema::{tweet_likes, users};

/// Diesel-backed implementation of the `LikeRepository` port.
#[derive(Clone)]
pub struct DieselLikeRepository {
    pool: DbPool,
}

impl DieselLikeRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for DieselLikeRepository {
    async fn insert(&self, user: UserId, tweet: TweetId) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_edge = NewLikeRow {
            user_id: user.as_i32(),
            tweet_id: tweet.as_i32(),
        };

        match diesel::insert_into(tweet_likes::table)
            .values(&new_edge)
            .execute(&mut conn)
            .await
        {
            Ok(_) => Ok(true),
            Err(err) if is_unique_violation(&err) => Ok(false),
            Err(err) => Err(map_diesel_error(err)),
        }
    }

    async fn delete(&self, user: UserId, tweet: TweetId) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(
            tweet_likes::table.filter(
                tweet_likes::user_id
                    .eq(user.as_i32())
                    .and(tweet_likes::tweet_id.eq(tweet.as_i32())),
            ),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        Ok(removed > 0)
    }

    async fn likers_by_tweet(&self) -> Result<Vec<(TweetId, User)>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<(i32, UserRow)> = tweet_likes::table
            .inner_join(users::table)
            .select((tweet_likes::tweet_id, UserRow::as_select()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows
            .into_iter()
            .map(|(tweet_id, user)| (TweetId(tweet_id), user.into()))
            .collect())
    }
}
