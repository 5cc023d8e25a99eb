//! Users API handlers.
//!
//! ```text
//! GET    /api/users/me          Caller's profile
//! GET    /api/users/{id}        Another user's profile
//! POST   /api/users/{id}/follow Follow a user
//! DELETE /api/users/{id}/follow Stop following a user
//! ```

use actix_web::{HttpResponse, delete, get, post, web};

use crate::domain::{FollowOutcome, UnfollowOutcome, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::ApiKeyHeader;
use crate::inbound::http::schemas::{ErrorBody, ProfileBody, ResultBody};
use crate::inbound::http::state::HttpState;

/// Return the caller's own profile with both follow projections.
#[utoipa::path(
    get,
    path = "/api/users/me",
    responses(
        (status = 200, description = "Profile", body = ProfileBody),
        (status = 418, description = "Structured failure", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "currentUser"
)]
#[get("/users/me")]
pub async fn current_user(
    state: web::Data<HttpState>,
    auth: ApiKeyHeader,
) -> ApiResult<HttpResponse> {
    let profile = state.social_graph.profile(auth.key()).await?;
    Ok(HttpResponse::Ok().json(ProfileBody::from(profile)))
}

/// Return another user's profile by id.
///
/// The caller must still authenticate; an unknown target id yields the
/// `user_not_found` envelope.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "Profile", body = ProfileBody),
        (status = 418, description = "Structured failure", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "userById"
)]
#[get("/users/{id}")]
pub async fn user_by_id(
    state: web::Data<HttpState>,
    auth: ApiKeyHeader,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    state.social_graph.resolve_caller(auth.key()).await?;
    let profile = state
        .social_graph
        .profile_by_id(UserId(path.into_inner()))
        .await?;
    Ok(HttpResponse::Ok().json(ProfileBody::from(profile)))
}

/// Follow the target user on behalf of the caller.
#[utoipa::path(
    post,
    path = "/api/users/{id}/follow",
    params(("id" = i32, Path, description = "User id to follow")),
    responses(
        (status = 201, description = "Edge created", body = ResultBody),
        (status = 400, description = "Already following", body = ResultBody),
        (status = 418, description = "Structured failure", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "followUser"
)]
#[post("/users/{id}/follow")]
pub async fn follow_user(
    state: web::Data<HttpState>,
    auth: ApiKeyHeader,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let target = UserId(path.into_inner());
    match state.social_graph.follow(auth.key(), target).await? {
        FollowOutcome::Followed => Ok(HttpResponse::Created().json(ResultBody::ok())),
        FollowOutcome::AlreadyFollowing => {
            Ok(HttpResponse::BadRequest().json(ResultBody::denied()))
        }
    }
}

/// Remove the caller's follow edge to the target user.
#[utoipa::path(
    delete,
    path = "/api/users/{id}/follow",
    params(("id" = i32, Path, description = "User id to unfollow")),
    responses(
        (status = 200, description = "Edge removed", body = ResultBody),
        (status = 400, description = "Not following", body = ResultBody),
        (status = 418, description = "Structured failure", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "unfollowUser"
)]
#[delete("/users/{id}/follow")]
pub async fn unfollow_user(
    state: web::Data<HttpState>,
    auth: ApiKeyHeader,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let target = UserId(path.into_inner());
    match state.social_graph.unfollow(auth.key(), target).await? {
        UnfollowOutcome::Unfollowed => Ok(HttpResponse::Ok().json(ResultBody::ok())),
        UnfollowOutcome::NotFollowing => Ok(HttpResponse::BadRequest().json(ResultBody::denied())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_support::{InMemoryStore, RecordingMediaStore};
    use crate::inbound::http::auth::API_KEY_HEADER;
    use crate::inbound::http::test_utils::in_memory_state;
    use actix_web::{App, http::StatusCode, test as actix_test};
    use rstest::{fixture, rstest};
    use serde_json::{Value, json};
    use std::sync::Arc;

    #[fixture]
    fn store() -> Arc<InMemoryStore> {
        let store = InMemoryStore::new();
        store.add_user("test", 1, "Ivan");
        store.add_user("test1", 2, "Lena");
        store.add_user("test2", 3, "Dasha");
        store
    }

    fn test_app(
        store: &Arc<InMemoryStore>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        let files = RecordingMediaStore::new();
        App::new().app_data(in_memory_state(store, &files)).service(
            web::scope("/api")
                .service(current_user)
                .service(user_by_id)
                .service(follow_user)
                .service(unfollow_user),
        )
    }

    async fn follow(
        app: &impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
        key: &str,
        target: i32,
    ) -> StatusCode {
        let request = actix_test::TestRequest::post()
            .uri(&format!("/api/users/{target}/follow"))
            .insert_header((API_KEY_HEADER, key))
            .to_request();
        actix_test::call_service(app, request).await.status()
    }

    #[rstest]
    #[actix_web::test]
    async fn profile_reports_both_follow_projections(store: Arc<InMemoryStore>) {
        let app = actix_test::init_service(test_app(&store)).await;
        // Ivan -> Lena -> Dasha -> Ivan.
        assert_eq!(follow(&app, "test", 2).await, StatusCode::CREATED);
        assert_eq!(follow(&app, "test1", 3).await, StatusCode::CREATED);
        assert_eq!(follow(&app, "test2", 1).await, StatusCode::CREATED);

        let request = actix_test::TestRequest::get()
            .uri("/api/users/me")
            .insert_header((API_KEY_HEADER, "test1"))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(value["result"], true);
        assert_eq!(value["user"]["id"], 2);
        assert_eq!(value["user"]["name"], "Lena");
        assert_eq!(
            value["user"]["following"],
            json!([{"id": 3, "name": "Dasha"}])
        );
        assert_eq!(
            value["user"]["followers"],
            json!([{"id": 1, "name": "Ivan"}])
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn duplicate_follow_is_denied(store: Arc<InMemoryStore>) {
        let app = actix_test::init_service(test_app(&store)).await;

        assert_eq!(follow(&app, "test", 2).await, StatusCode::CREATED);
        assert_eq!(follow(&app, "test", 2).await, StatusCode::BAD_REQUEST);
    }

    #[rstest]
    #[actix_web::test]
    async fn unfollow_without_an_edge_is_denied(store: Arc<InMemoryStore>) {
        let app = actix_test::init_service(test_app(&store)).await;

        let request = actix_test::TestRequest::delete()
            .uri("/api/users/2/follow")
            .insert_header((API_KEY_HEADER, "test"))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(value, json!({"result": false}));
    }

    #[rstest]
    #[case(99)]
    #[case(-1)]
    #[actix_web::test]
    async fn profile_of_unknown_target_yields_the_error_envelope(
        store: Arc<InMemoryStore>,
        #[case] target: i32,
    ) {
        let app = actix_test::init_service(test_app(&store)).await;

        let request = actix_test::TestRequest::get()
            .uri(&format!("/api/users/{target}"))
            .insert_header((API_KEY_HEADER, "test"))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(value["error_type"], "user_not_found");
        assert_eq!(
            value["error_message"],
            format!("user with id {target} not found")
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn profile_lookup_still_authenticates_the_caller(store: Arc<InMemoryStore>) {
        let app = actix_test::init_service(test_app(&store)).await;

        let request = actix_test::TestRequest::get()
            .uri("/api/users/2")
            .insert_header((API_KEY_HEADER, "test9"))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(value["error_type"], "user_not_found");
        assert_eq!(value["error_message"], "user with api key test9 not found");
    }

    #[rstest]
    #[actix_web::test]
    async fn missing_api_key_header_yields_the_error_envelope(store: Arc<InMemoryStore>) {
        let app = actix_test::init_service(test_app(&store)).await;

        let request = actix_test::TestRequest::get()
            .uri("/api/users/me")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
    }
}
