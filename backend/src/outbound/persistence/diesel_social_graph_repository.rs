//! Diesel-backed follow-edge storage.
//!
//! The follow relation is one edge table with two foreign keys into users,
//! so the two projections are plain directional filters with explicit join
//! conditions rather than a `joinable!` declaration (which cannot express a
//! table referencing users twice).

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::domain::ports::{Relations, RepositoryError, SocialGraphRepository};
use crate::domain::{User, UserId};

use super::error_map::{is_unique_violation, map_diesel_error, map_pool_error};
use super::models::{NewFollowRow, UserRow};
use super::pool::DbPool;
use super::schema::{follows, users};

/// Diesel-backed implementation of the `SocialGraphRepository` port.
#[derive(Clone)]
pub struct DieselSocialGraphRepository {
    pool: DbPool,
}

impl DieselSocialGraphRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SocialGraphRepository for DieselSocialGraphRepository {
    async fn insert_edge(
        &self,
        follower: UserId,
        followee: UserId,
    ) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_edge = NewFollowRow {
            follower_id: follower.as_i32(),
            followee_id: followee.as_i32(),
        };

        match diesel::insert_into(follows::table)
            .values(&new_edge)
            .execute(&mut conn)
            .await
        {
            Ok(_) => Ok(true),
            // The constraint is the sole duplicate arbiter under concurrency.
            Err(err) if is_unique_violation(&err) => Ok(false),
            Err(err) => Err(map_diesel_error(err)),
        }
    }

    async fn delete_edge(
        &self,
        follower: UserId,
        followee: UserId,
    ) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(
            follows::table.filter(
                follows::follower_id
                    .eq(follower.as_i32())
                    .and(follows::followee_id.eq(followee.as_i32())),
            ),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        Ok(removed > 0)
    }

    async fn relations(&self, user: UserId) -> Result<Relations, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let user_id = user.as_i32();

        // Both projections in one transaction so they observe a consistent
        // snapshot.
        let (following, followers) = conn
            .transaction(|conn| {
                async move {
                    let following: Vec<UserRow> = follows::table
                        .inner_join(users::table.on(users::id.eq(follows::followee_id)))
                        .filter(follows::follower_id.eq(user_id))
                        .select(UserRow::as_select())
                        .load(conn)
                        .await?;
                    let followers: Vec<UserRow> = follows::table
                        .inner_join(users::table.on(users::id.eq(follows::follower_id)))
                        .filter(follows::followee_id.eq(user_id))
                        .select(UserRow::as_select())
                        .load(conn)
                        .await?;
                    Ok::<_, diesel::result::Error>((following, followers))
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        Ok(Relations {
            following: following.into_iter().map(User::from).collect(),
            followers: followers.into_iter().map(User::from).collect(),
        })
    }
}
