//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Thin adapters over `diesel-async` with `bb8` pooling: repository
//! implementations only translate between Diesel row structs and domain
//! types, and every database failure is mapped to the domain's
//! `RepositoryError` variants. Row structs (`models.rs`) and the schema
//! definitions (`schema.rs`) are internal implementation details.

mod diesel_like_repository;
mod diesel_media_repository;
mod diesel_social_graph_repository;
mod diesel_tweet_repository;
mod diesel_user_repository;
mod error_map;
mod migrate;
mod models;
mod pool;
mod schema;
mod seed;

pub use diesel_like_repository::DieselLikeRepository;
pub use diesel_media_repository::DieselMediaRepository;
pub use diesel_social_graph_repository::DieselSocialGraphRepository;
pub use diesel_tweet_repository::DieselTweetRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrate::{run_migrations, MigrationError};
pub use pool::{DbPool, PoolConfig, PoolError};
pub use seed::DemoDataSeeder;
