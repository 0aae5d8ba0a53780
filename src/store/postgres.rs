use crate::models::{Album, Photo};
use crate::settings::DatabaseSettings;
use crate::store::{AlbumStore, StoreError};
use async_trait::async_trait;
use color_eyre::Result;
use sqlx::Row;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use tracing::info;

/// Postgres-backed album store. Albums are rows with the photo sequence held
/// in a JSONB column; appends are conditional single-row updates, so the
/// database's row-level atomicity gives per-document update atomicity.
#[derive(Clone)]
pub struct PgAlbumStore {
    pool: PgPool,
}

impl PgAlbumStore {
    /// Connects, verifies the connection, and applies pending migrations.
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .connect(&settings.url)
            .await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("Connected to Postgres and ran migrations");
        Ok(Self { pool })
    }

    #[must_use]
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    fn album_from_row(row: &PgRow) -> Result<Album, StoreError> {
        let photos: serde_json::Value = row.try_get("photos")?;
        Ok(Album {
            id: row.try_get("id")?,
            owner_id: row.try_get("owner_id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            created_at: row.try_get("created_at")?,
            photos: serde_json::from_value(photos)?,
        })
    }
}

#[async_trait]
impl AlbumStore for PgAlbumStore {
    async fn find_album(
        &self,
        album_id: &str,
        owner_id: &str,
    ) -> Result<Option<Album>, StoreError> {
        let row = sqlx::query(
            "SELECT id, owner_id, name, description, created_at, photos
             FROM album WHERE id = $1 AND owner_id = $2",
        )
        .bind(album_id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::album_from_row).transpose()
    }

    async fn append_photos(
        &self,
        album_id: &str,
        owner_id: &str,
        photos: &[Photo],
    ) -> Result<u64, StoreError> {
        let batch = serde_json::to_value(photos)?;
        let result = sqlx::query(
            "UPDATE album SET photos = photos || $1::jsonb
             WHERE id = $2 AND owner_id = $3",
        )
        .bind(batch)
        .bind(album_id)
        .bind(owner_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn replace_photos(
        &self,
        album_id: &str,
        owner_id: &str,
        photos: &[Photo],
    ) -> Result<u64, StoreError> {
        let photos = serde_json::to_value(photos)?;
        let result = sqlx::query(
            "UPDATE album SET photos = $1::jsonb
             WHERE id = $2 AND owner_id = $3",
        )
        .bind(photos)
        .bind(album_id)
        .bind(owner_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
