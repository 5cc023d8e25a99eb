//! Media upload handler.
//!
//! ```text
//! POST /api/medias — multipart form with one `file` field
//! ```
//!
//! The stored filename is generated by the media store; clients reference
//! the returned `media_id` when creating a tweet.

use actix_multipart::{Multipart, MultipartError};
use actix_web::{HttpResponse, post, web};
use futures_util::TryStreamExt;

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::ApiKeyHeader;
use crate::inbound::http::schemas::{ErrorBody, MediaCreated};
use crate::inbound::http::state::HttpState;

/// Multipart field name carrying the uploaded file.
const FILE_FIELD: &str = "file";

fn map_multipart_error(err: MultipartError) -> Error {
    Error::media_io(format!("reading multipart upload failed: {err}"))
}

/// Read the `file` field into memory, returning the client filename and the
/// raw bytes.
async fn read_file_field(mut payload: Multipart) -> Result<(String, Vec<u8>), Error> {
    while let Some(mut field) = payload.try_next().await.map_err(map_multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let original_name = field
            .content_disposition()
            .and_then(|disposition| disposition.get_filename())
            .unwrap_or("upload")
            .to_owned();
        let mut bytes = Vec::new();
        while let Some(chunk) = field.try_next().await.map_err(map_multipart_error)? {
            bytes.extend_from_slice(&chunk);
        }
        return Ok((original_name, bytes));
    }
    Err(Error::media_io("multipart field 'file' missing"))
}

/// Accept a media upload and record its stored filename.
#[utoipa::path(
    post,
    path = "/api/medias",
    request_body(content = Vec<u8>, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Media stored", body = MediaCreated),
        (status = 418, description = "Structured failure", body = ErrorBody)
    ),
    tags = ["medias"],
    operation_id = "uploadMedia"
)]
#[post("/medias")]
pub async fn upload_media(
    state: web::Data<HttpState>,
    auth: ApiKeyHeader,
    payload: Multipart,
) -> ApiResult<HttpResponse> {
    let (original_name, bytes) = read_file_field(payload).await?;
    let id = state.media.upload(auth.key(), &original_name, &bytes).await?;
    Ok(HttpResponse::Created().json(MediaCreated::from(id)))
}
