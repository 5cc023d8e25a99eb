//! Demo data seeding for an empty database.
//!
//! Seeds four users with their static API keys and the follow triangle
//! Ivan -> Lena -> Dasha -> Ivan, all in one transaction. A non-empty users
//! table makes the seeder a no-op, so restarts never duplicate data.

use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use tracing::info;

use crate::domain::ports::RepositoryError;

use super::error_map::{map_diesel_error, map_pool_error};
use super::models::{NewFollowRow, NewUserRow};
use super::pool::DbPool;
use super::schema::{follows, users};

const DEMO_USERS: [(&str, &str); 4] = [
    ("Ivan", "test"),
    ("Lena", "test1"),
    ("Dasha", "test2"),
    ("Petr", "test3"),
];

/// Seeds demo users and follow edges when the users table is empty.
#[derive(Clone)]
pub struct DemoDataSeeder {
    pool: DbPool,
}

impl DemoDataSeeder {
    /// Create a new seeder with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Seed demo data if no users exist yet; returns whether seeding ran.
    pub async fn seed_if_empty(&self) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let seeded = conn
            .transaction(|conn| {
                async move {
                    let existing: i64 = users::table.count().get_result(conn).await?;
                    if existing > 0 {
                        return Ok::<_, diesel::result::Error>(false);
                    }

                    let mut ids = Vec::with_capacity(DEMO_USERS.len());
                    for (display_name, api_key) in DEMO_USERS {
                        let id: i32 = diesel::insert_into(users::table)
                            .values(&NewUserRow {
                                display_name,
                                api_key,
                            })
                            .returning(users::id)
                            .get_result(conn)
                            .await?;
                        ids.push(id);
                    }

                    // Ivan -> Lena -> Dasha -> Ivan.
                    let edges = vec![
                        NewFollowRow {
                            follower_id: ids[0],
                            followee_id: ids[1],
                        },
                        NewFollowRow {
                            follower_id: ids[1],
                            followee_id: ids[2],
                        },
                        NewFollowRow {
                            follower_id: ids[2],
                            followee_id: ids[0],
                        },
                    ];
                    diesel::insert_into(follows::table)
                        .values(&edges)
                        .execute(conn)
                        .await?;

                    Ok(true)
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        if seeded {
            info!(users = DEMO_USERS.len(), "seeded demo data");
        }
        Ok(seeded)
    }
}
