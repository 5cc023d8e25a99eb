//! Identity resolution: the single authorization primitive.
//!
//! Every engine operation starts by resolving the caller's API key; an
//! unknown key short-circuits the whole request with a structured
//! `user_not_found` error.

use super::ports::UserRepository;
use super::{ApiKey, Error, User, UserId};

/// Resolve an API key to a user, or fail with `user_not_found`.
pub async fn resolve(users: &dyn UserRepository, api_key: &ApiKey) -> Result<User, Error> {
    let user = users.find_by_api_key(api_key).await?;
    user.ok_or_else(|| Error::user_not_found(format!("user with api key {api_key} not found")))
}

/// Resolve a target user by id, or fail with `user_not_found`.
pub async fn resolve_by_id(users: &dyn UserRepository, id: UserId) -> Result<User, Error> {
    let user = users.find_by_id(id).await?;
    user.ok_or_else(|| Error::user_not_found(format!("user with id {id} not found")))
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use rstest::rstest;

    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::RepositoryError;

    #[derive(Default)]
    struct StubUserRepository {
        users: Mutex<Vec<(String, User)>>,
        fail: bool,
    }

    impl StubUserRepository {
        fn with_user(key: &str, user: User) -> Self {
            Self {
                users: Mutex::new(vec![(key.to_owned(), user)]),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                users: Mutex::new(Vec::new()),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl UserRepository for StubUserRepository {
        async fn find_by_api_key(
            &self,
            api_key: &ApiKey,
        ) -> Result<Option<User>, RepositoryError> {
            if self.fail {
                return Err(RepositoryError::connection("database unavailable"));
            }
            Ok(self
                .users
                .lock()
                .expect("users lock")
                .iter()
                .find(|(key, _)| key == api_key.as_str())
                .map(|(_, user)| user.clone()))
        }

        async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
            if self.fail {
                return Err(RepositoryError::connection("database unavailable"));
            }
            Ok(self
                .users
                .lock()
                .expect("users lock")
                .iter()
                .find(|(_, user)| user.id == id)
                .map(|(_, user)| user.clone()))
        }
    }

    #[rstest]
    #[actix_rt::test]
    async fn known_key_resolves_to_user() {
        let repo = StubUserRepository::with_user("test", User::new(UserId(1), "Ivan"));
        let user = resolve(&repo, &ApiKey::new("test").expect("key"))
            .await
            .expect("resolved");
        assert_eq!(user.name, "Ivan");
    }

    #[rstest]
    #[actix_rt::test]
    async fn unknown_key_is_a_structured_not_found() {
        let repo = StubUserRepository::default();
        let err = resolve(&repo, &ApiKey::new("nope").expect("key"))
            .await
            .expect_err("must fail");
        assert_eq!(err.code(), ErrorCode::UserNotFound);
        assert!(err.message().contains("nope"));
    }

    #[rstest]
    #[actix_rt::test]
    async fn repository_failure_becomes_storage_error() {
        let repo = StubUserRepository::failing();
        let err = resolve(&repo, &ApiKey::new("test").expect("key"))
            .await
            .expect_err("must fail");
        assert_eq!(err.code(), ErrorCode::Storage);
    }

    #[rstest]
    #[actix_rt::test]
    async fn unknown_id_is_a_structured_not_found() {
        let repo = StubUserRepository::default();
        let err = resolve_by_id(&repo, UserId(42)).await.expect_err("must fail");
        assert_eq!(err.code(), ErrorCode::UserNotFound);
        assert!(err.message().contains("42"));
    }
}
