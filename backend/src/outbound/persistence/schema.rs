//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations exactly; Diesel uses them for
//! compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// Registered users with their static bearer credentials.
    users (id) {
        id -> Int4,
        display_name -> Varchar,
        /// Opaque static API key, unique per user.
        api_key -> Varchar,
    }
}

diesel::table! {
    /// Tweets with their advisory media-id lists.
    tweets (id) {
        id -> Int4,
        body -> Text,
        /// References into media(id) without a foreign key; dangling ids are
        /// skipped at read time.
        media_ids -> Array<Int4>,
        author_id -> Int4,
    }
}

diesel::table! {
    /// Like edges; the composite primary key enforces one like per pair.
    tweet_likes (user_id, tweet_id) {
        user_id -> Int4,
        tweet_id -> Int4,
    }
}

diesel::table! {
    /// Follow edges; one row per ordered (follower, followee) pair.
    follows (follower_id, followee_id) {
        follower_id -> Int4,
        followee_id -> Int4,
    }
}

diesel::table! {
    /// Stored file names for uploaded media.
    media (id) {
        id -> Int4,
        file_name -> Varchar,
    }
}

diesel::joinable!(tweets -> users (author_id));
diesel::joinable!(tweet_likes -> tweets (tweet_id));
diesel::joinable!(tweet_likes -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(users, tweets, tweet_likes, follows, media);
