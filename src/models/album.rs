use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-owned named collection of photos. Photos are stored inline in the
/// album document, ordered by upload time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub photos: Vec<Photo>,
}

/// One ingested, optimized image. The `url` field holds the full encoded
/// image as a base64 data URL, so a photo record is self-contained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    pub url: String,
    pub metadata: PhotoMetadata,
    pub optimized: bool,
    pub quality: u8,
    pub original_size: u64,
    pub optimized_size: u64,
}

/// Descriptive and camera metadata for a photo.
///
/// Container-level fields (`format`, `width`, `height`, `space`) are derived
/// from the optimized output so they match the persisted image. Camera fields
/// are only set when the optimized output carries an EXIF block. `note` is
/// set when metadata extraction degraded to a minimal record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhotoMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl PhotoMetadata {
    /// Minimal record used when metadata extraction fails. The photo is still
    /// persisted; metadata is enrichment, not a correctness requirement.
    #[must_use]
    pub fn degraded(description: Option<String>) -> Self {
        Self {
            description,
            created: Some(Utc::now().to_rfc3339()),
            note: Some("partial or failed metadata parse".to_string()),
            ..Self::default()
        }
    }
}
