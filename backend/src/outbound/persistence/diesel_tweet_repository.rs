//! Diesel-backed tweet storage and cascade deletion.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::domain::ports::{FeedTweet, RepositoryError, TweetRepository};
use crate::domain::{MediaId, TweetId, UserId};

use super::error_map::{map_diesel_error, map_pool_error};
use super::models::{NewTweetRow, TweetRow, UserRow};
use super::pool::DbPool;
use super::schema::{media, tweet_likes, tweets, users};

/// Diesel-backed implementation of the `TweetRepository` port.
#[derive(Clone)]
pub struct DieselTweetRepository {
    pool: DbPool,
}

impl DieselTweetRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TweetRepository for DieselTweetRepository {
    async fn insert(
        &self,
        author: UserId,
        body: &str,
        media_ids: &[MediaId],
    ) -> Result<TweetId, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_tweet = NewTweetRow {
            body,
            media_ids: media_ids.iter().map(|id| id.as_i32()).collect(),
            author_id: author.as_i32(),
        };

        let id: i32 = diesel::insert_into(tweets::table)
            .values(&new_tweet)
            .returning(tweets::id)
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(TweetId(id))
    }

    async fn delete_owned(
        &self,
        author: UserId,
        tweet: TweetId,
    ) -> Result<Option<Vec<String>>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let author_id = author.as_i32();
        let tweet_id = tweet.as_i32();

        // Tweet row, like edges, and media rows go in one transaction; the
        // resolved file names come back so the engine can unlink the files
        // after commit.
        let file_names = conn
            .transaction(|conn| {
                async move {
                    let target: Option<TweetRow> = tweets::table
                        .filter(tweets::id.eq(tweet_id).and(tweets::author_id.eq(author_id)))
                        .select(TweetRow::as_select())
                        .first(conn)
                        .await
                        .optional()?;

                    let Some(row) = target else {
                        return Ok::<_, diesel::result::Error>(None);
                    };

                    let file_names: Vec<String> = if row.media_ids.is_empty() {
                        Vec::new()
                    } else {
                        media::table
                            .filter(media::id.eq_any(&row.media_ids))
                            .select(media::file_name)
                            .load(conn)
                            .await?
                    };

                    diesel::delete(tweet_likes::table.filter(tweet_likes::tweet_id.eq(tweet_id)))
                        .execute(conn)
                        .await?;
                    diesel::delete(tweets::table.filter(tweets::id.eq(tweet_id)))
                        .execute(conn)
                        .await?;
                    if !row.media_ids.is_empty() {
                        diesel::delete(media::table.filter(media::id.eq_any(&row.media_ids)))
                            .execute(conn)
                            .await?;
                    }

                    Ok(Some(file_names))
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        Ok(file_names)
    }

    async fn author_of(&self, tweet: TweetId) -> Result<Option<UserId>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let author: Option<i32> = tweets::table
            .filter(tweets::id.eq(tweet.as_i32()))
            .select(tweets::author_id)
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(author.map(UserId))
    }

    async fn feed_tweets(&self) -> Result<Vec<FeedTweet>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<(TweetRow, UserRow)> = tweets::table
            .inner_join(users::table)
            .select((TweetRow::as_select(), UserRow::as_select()))
            .order_by(tweets::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows
            .into_iter()
            .map(|(tweet, author)| FeedTweet {
                id: TweetId(tweet.id),
                body: tweet.body,
                media_ids: tweet.media_ids.into_iter().map(MediaId).collect(),
                author: author.into(),
            })
            .collect())
    }
}
