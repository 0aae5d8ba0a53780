mod memory;
mod postgres;

pub use memory::MemoryAlbumStore;
pub use postgres::PgAlbumStore;

use crate::models::{Album, Photo};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("document serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// The album document store, injected into the pipeline and handlers at
/// construction time.
///
/// Mutating operations are conditional on `(album_id, owner_id)` and report
/// the number of documents modified; zero-match is a normal outcome, not a
/// fault. The store's per-document update atomicity is the only ordering
/// guarantee across concurrent writers.
#[async_trait]
pub trait AlbumStore: Send + Sync {
    async fn find_album(
        &self,
        album_id: &str,
        owner_id: &str,
    ) -> Result<Option<Album>, StoreError>;

    /// Appends photos to the end of the album's photo sequence.
    async fn append_photos(
        &self,
        album_id: &str,
        owner_id: &str,
        photos: &[Photo],
    ) -> Result<u64, StoreError>;

    /// Replaces the album's photo sequence wholesale. Used by photo removal.
    async fn replace_photos(
        &self,
        album_id: &str,
        owner_id: &str,
        photos: &[Photo],
    ) -> Result<u64, StoreError>;
}
