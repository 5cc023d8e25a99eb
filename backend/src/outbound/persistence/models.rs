//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use diesel::prelude::*;

use crate::domain::{User, UserId};

use super::schema::{follows, media, tweet_likes, tweets, users};

/// Row struct for reading users; the api_key column is only ever filtered
/// on, never selected.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub display_name: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self::new(UserId(row.id), row.display_name)
    }
}

/// Insertable struct for seeding user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub display_name: &'a str,
    pub api_key: &'a str,
}

/// Row struct for reading tweets.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tweets)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TweetRow {
    pub id: i32,
    pub body: String,
    pub media_ids: Vec<i32>,
    #[expect(dead_code, reason = "selected for completeness; author arrives via join")]
    pub author_id: i32,
}

/// Insertable struct for creating tweet records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tweets)]
pub(crate) struct NewTweetRow<'a> {
    pub body: &'a str,
    pub media_ids: Vec<i32>,
    pub author_id: i32,
}

/// Insertable struct for like edges.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tweet_likes)]
pub(crate) struct NewLikeRow {
    pub user_id: i32,
    pub tweet_id: i32,
}

/// Insertable struct for follow edges.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = follows)]
pub(crate) struct NewFollowRow {
    pub follower_id: i32,
    pub followee_id: i32,
}

/// Row struct for reading media filename records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = media)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct MediaRow {
    pub id: i32,
    pub file_name: String,
}

/// Insertable struct for media filename records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = media)]
pub(crate) struct NewMediaRow<'a> {
    pub file_name: &'a str,
}
