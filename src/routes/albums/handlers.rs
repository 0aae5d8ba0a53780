use crate::api_state::ApiContext;
use crate::ingest::{IngestError, RawFile};
use crate::routes::albums::error::AlbumError;
use crate::routes::albums::interfaces::{MessageResponse, UploadResponse};
use crate::routes::auth::interfaces::Principal;
use axum::extract::{Multipart, Path, State};
use axum::{Extension, Json};
use tracing::info;

/// Upload one or more photos into an album owned by the caller.
///
/// Multipart form: any number of `photos` file parts (the transport caps the
/// count) and an optional `description` text part applied to every photo.
pub async fn upload_photos_handler(
    State(context): State<ApiContext>,
    Extension(principal): Extension<Principal>,
    Path(album_id): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, IngestError> {
    let mut description: Option<String> = None;
    let mut files: Vec<RawFile> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| IngestError::BadRequest(e.to_string()))?
    {
        let name = field.name().map(ToOwned::to_owned);
        match name.as_deref() {
            Some("description") => {
                description = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| IngestError::BadRequest(e.to_string()))?,
                );
            }
            Some("photos") => {
                let mime_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| IngestError::BadRequest(e.to_string()))?;
                files.push(RawFile {
                    mime_type,
                    bytes: bytes.to_vec(),
                });
            }
            _ => {}
        }
    }

    // File-count cap, enforced here alongside the other transport limits.
    let max_files = context.settings.ingest.max_files;
    if files.len() > max_files {
        return Err(IngestError::TooManyFiles(files.len(), max_files));
    }

    info!(
        album_id,
        files = files.len(),
        user = %principal.user_id,
        "Photo upload received"
    );

    let receipt = context
        .pipeline
        .ingest(&album_id, &principal.user_id, description, files)
        .await?;

    Ok(Json(receipt.into()))
}

/// Remove a single photo, by id, from an album owned by the caller.
pub async fn remove_photo_handler(
    State(context): State<ApiContext>,
    Extension(principal): Extension<Principal>,
    Path((album_id, photo_id)): Path<(String, String)>,
) -> Result<Json<MessageResponse>, AlbumError> {
    let album = context
        .store
        .find_album(&album_id, &principal.user_id)
        .await?
        .ok_or_else(|| AlbumError::NotFound("album not found or unauthorized".to_string()))?;

    if !album.photos.iter().any(|p| p.id == photo_id) {
        return Err(AlbumError::NotFound(
            "photo not found in the album".to_string(),
        ));
    }

    let remaining: Vec<_> = album
        .photos
        .into_iter()
        .filter(|p| p.id != photo_id)
        .collect();

    let modified = context
        .store
        .replace_photos(&album_id, &principal.user_id, &remaining)
        .await?;
    if modified == 0 {
        return Err(AlbumError::WriteFailed);
    }

    Ok(Json(MessageResponse {
        message: "Photo deleted successfully".to_string(),
    }))
}
