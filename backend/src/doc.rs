//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for
//! the REST API: all endpoint paths from the inbound layer, the wire DTOs,
//! and the `api-key` header security scheme. The generated document backs
//! Swagger UI in debug builds.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::inbound::http::schemas::{
    ErrorBody, FeedBody, LikeDto, MediaCreated, ProfileBody, ProfileUser, ResultBody,
    TweetCreateRequest, TweetCreated, TweetDto, UserDto,
};

/// Enrich the generated document with the api-key header scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "ApiKeyHeader",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "api-key",
                "Static per-user credential looked up against the user table.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Microblog backend API",
        description = "Tweets, likes, follows, media uploads, and the like-ordered feed."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("ApiKeyHeader" = [])),
    paths(
        crate::inbound::http::tweets::create_tweet,
        crate::inbound::http::tweets::delete_tweet,
        crate::inbound::http::tweets::list_feed,
        crate::inbound::http::tweets::like_tweet,
        crate::inbound::http::tweets::unlike_tweet,
        crate::inbound::http::medias::upload_media,
        crate::inbound::http::users::current_user,
        crate::inbound::http::users::user_by_id,
        crate::inbound::http::users::follow_user,
        crate::inbound::http::users::unfollow_user,
    ),
    components(schemas(
        ResultBody,
        ErrorBody,
        TweetCreateRequest,
        TweetCreated,
        MediaCreated,
        UserDto,
        LikeDto,
        ProfileUser,
        ProfileBody,
        TweetDto,
        FeedBody,
    )),
    tags(
        (name = "tweets", description = "Tweets, likes, and the global feed"),
        (name = "medias", description = "Media uploads"),
        (name = "users", description = "Profiles and the follow graph")
    )
)]
pub struct ApiDoc;
