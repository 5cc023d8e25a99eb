//! Media engine: upload registration.
//!
//! Uploaded bytes are persisted under a generated name, and a filename row is
//! recorded so a later tweet-create call can reference it by id. The row is
//! not associated with any tweet here; orphan rows are cleaned up only when
//! a referencing tweet is deleted.

use std::sync::Arc;

use super::identity;
use super::ports::{MediaRepository, MediaStore, UserRepository};
use super::{ApiKey, Error, MediaId};

/// Engine accepting uploads and recording their filename rows.
#[derive(Clone)]
pub struct MediaService {
    users: Arc<dyn UserRepository>,
    media: Arc<dyn MediaRepository>,
    store: Arc<dyn MediaStore>,
}

impl MediaService {
    /// Create a new engine over the given ports.
    pub fn new(
        users: Arc<dyn UserRepository>,
        media: Arc<dyn MediaRepository>,
        store: Arc<dyn MediaStore>,
    ) -> Self {
        Self {
            users,
            media,
            store,
        }
    }

    /// Persist uploaded bytes and record the stored name, returning the row
    /// id for the client to embed into a tweet-create call.
    ///
    /// A write failure surfaces as a `media_io` error before any row is
    /// created; a row-insert failure leaves the stored file as an orphan
    /// (cleaned up only via tweet deletion, never on upload failure).
    pub async fn upload(
        &self,
        api_key: &ApiKey,
        original_name: &str,
        bytes: &[u8],
    ) -> Result<MediaId, Error> {
        identity::resolve(self.users.as_ref(), api_key).await?;
        let stored_name = self
            .store
            .save(original_name, bytes)
            .await
            .map_err(|err| Error::media_io(err.to_string()))?;
        let id = self.media.insert(&stored_name).await?;
        Ok(id)
    }
}
