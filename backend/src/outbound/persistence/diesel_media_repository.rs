//! Diesel-backed media filename rows.

use std::collections::HashMap;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::MediaId;
use crate::domain::ports::{MediaRepository, RepositoryError};

use super::error_map::{map_diesel_error, map_pool_error};
use super::models::{MediaRow, NewMediaRow};
use super::pool::DbPool;
use super::schema::media;

/// Diesel-backed implementation of the `MediaRepository` port.
#[derive(Clone)]
pub struct DieselMediaRepository {
    pool: DbPool,
}

impl DieselMediaRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MediaRepository for DieselMediaRepository {
    async fn insert(&self, file_name: &str) -> Result<MediaId, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let id: i32 = diesel::insert_into(media::table)
            .values(&NewMediaRow { file_name })
            .returning(media::id)
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(MediaId(id))
    }

    async fn file_names(
        &self,
        ids: &[MediaId],
    ) -> Result<HashMap<MediaId, String>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let raw_ids: Vec<i32> = ids.iter().map(|id| id.as_i32()).collect();
        let rows: Vec<MediaRow> = media::table
            .filter(media::id.eq_any(raw_ids))
            .select(MediaRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows
            .into_iter()
            .map(|row| (MediaId(row.id), row.file_name))
            .collect())
    }
}
