//! Server construction and wiring.
//!
//! Builds the Diesel-backed repositories, hands them to the domain engines,
//! and mounts the HTTP handlers under `/api`. Swagger UI is served at
//! `/docs` in debug builds.

mod config;

pub use config::AppConfig;

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::{FeedService, LikeService, MediaService, SocialGraphService, TweetService};
use crate::inbound::http::medias::upload_media;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::tweets::{
    create_tweet, delete_tweet, like_tweet, list_feed, unlike_tweet,
};
use crate::inbound::http::users::{current_user, follow_user, unfollow_user, user_by_id};
use crate::outbound::media_store::FsMediaStore;
use crate::outbound::persistence::{
    DbPool, DemoDataSeeder, DieselLikeRepository, DieselMediaRepository,
    DieselSocialGraphRepository, DieselTweetRepository, DieselUserRepository, PoolConfig,
    run_migrations,
};

/// Wire the Diesel repositories and filesystem media store into the domain
/// engines.
fn build_http_state(pool: DbPool, media_dir: std::path::PathBuf) -> HttpState {
    let users = Arc::new(DieselUserRepository::new(pool.clone()));
    let graph = Arc::new(DieselSocialGraphRepository::new(pool.clone()));
    let tweets = Arc::new(DieselTweetRepository::new(pool.clone()));
    let likes = Arc::new(DieselLikeRepository::new(pool.clone()));
    let media = Arc::new(DieselMediaRepository::new(pool));
    let store = Arc::new(FsMediaStore::new(media_dir));

    HttpState {
        social_graph: SocialGraphService::new(users.clone(), graph),
        tweets: TweetService::new(users.clone(), tweets.clone(), store.clone()),
        likes: LikeService::new(users.clone(), tweets.clone(), likes.clone()),
        feed: FeedService::new(users.clone(), tweets, likes, media.clone()),
        media: MediaService::new(users, media, store),
    }
}

/// Assemble the Actix application over shared handler state.
pub fn build_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api")
        .service(create_tweet)
        .service(list_feed)
        .service(delete_tweet)
        .service(like_tweet)
        .service(unlike_tweet)
        .service(upload_media)
        .service(current_user)
        .service(user_by_id)
        .service(follow_user)
        .service(unfollow_user);

    let app = App::new().app_data(state).service(api);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Run migrations, build the pool, optionally seed demo data, and serve.
///
/// # Errors
/// Propagates [`std::io::Error`] when configuration is incomplete, the
/// database is unreachable, or binding the socket fails.
pub async fn run(config: AppConfig) -> std::io::Result<()> {
    let database_url = config.database_url()?.to_owned();

    let migration_url = database_url.clone();
    tokio::task::spawn_blocking(move || run_migrations(&migration_url))
        .await
        .map_err(std::io::Error::other)?
        .map_err(std::io::Error::other)?;

    let pool = DbPool::new(PoolConfig::new(database_url))
        .await
        .map_err(std::io::Error::other)?;

    if config.seed_demo_data {
        DemoDataSeeder::new(pool.clone())
            .seed_if_empty()
            .await
            .map_err(std::io::Error::other)?;
    }

    let state = web::Data::new(build_http_state(pool, config.media_dir()));
    let bind_addr = config.bind_addr().to_owned();
    info!(addr = %bind_addr, "starting http server");

    HttpServer::new(move || build_app(state.clone()))
        .bind(bind_addr)?
        .run()
        .await
}
