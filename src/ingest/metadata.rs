use crate::models::PhotoMetadata;
use chrono::Utc;
use color_eyre::eyre::{Result, eyre};
use exif::{In, Tag};
use image::{ColorType, ImageFormat, ImageReader};
use std::io::Cursor;
use tracing::warn;

/// Derives photo metadata from the optimized output, never from the original
/// upload, so reported dimensions match the persisted image.
///
/// Extraction is best-effort: any fault degrades to a minimal record with an
/// explanatory note instead of failing the photo.
pub fn extract_metadata(optimized: &[u8], description: Option<String>) -> PhotoMetadata {
    match try_extract(optimized, description.clone()) {
        Ok(metadata) => metadata,
        Err(e) => {
            warn!("Metadata extraction failed: {}", e);
            PhotoMetadata::degraded(description)
        }
    }
}

fn try_extract(optimized: &[u8], description: Option<String>) -> Result<PhotoMetadata> {
    let reader = ImageReader::new(Cursor::new(optimized)).with_guessed_format()?;
    let format = reader
        .format()
        .ok_or_else(|| eyre!("unrecognized image format"))?;
    let img = reader.decode()?;

    let mut metadata = PhotoMetadata {
        format: Some(format_name(format)),
        width: Some(img.width()),
        height: Some(img.height()),
        space: Some(color_space(img.color()).to_string()),
        description,
        ..PhotoMetadata::default()
    };

    match exif::Reader::new().read_from_container(&mut Cursor::new(optimized)) {
        Ok(exif) => {
            metadata.make = Some(tag_string(&exif, Tag::Make).unwrap_or_else(unknown));
            metadata.model = Some(tag_string(&exif, Tag::Model).unwrap_or_else(unknown));
            metadata.created = Some(
                tag_string(&exif, Tag::DateTimeOriginal).unwrap_or_else(|| Utc::now().to_rfc3339()),
            );
            metadata.orientation = Some(
                tag_string(&exif, Tag::Orientation).unwrap_or_else(|| "Unspecified".to_string()),
            );
        }
        // No embedded EXIF block: camera fields simply stay absent.
        Err(exif::Error::NotFound(_)) => {}
        // A present but unparseable block degrades the whole record.
        Err(e) => return Err(e.into()),
    }

    Ok(metadata)
}

fn unknown() -> String {
    "Unknown".to_string()
}

fn tag_string(exif: &exif::Exif, tag: Tag) -> Option<String> {
    exif.get_field(tag, In::PRIMARY).map(|field| {
        field
            .display_value()
            .to_string()
            .trim_matches('"')
            .to_string()
    })
}

fn format_name(format: ImageFormat) -> String {
    format
        .extensions_str()
        .first()
        .map_or_else(|| format!("{format:?}").to_lowercase(), ToString::to_string)
}

fn color_space(color: ColorType) -> &'static str {
    match color {
        ColorType::L8 | ColorType::L16 | ColorType::La8 | ColorType::La16 => "b-w",
        ColorType::Rgb8 | ColorType::Rgb16 | ColorType::Rgba8 | ColorType::Rgba16 => "srgb",
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, RgbImage};

    fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, image::Rgb([120, 80, 40]));
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img)
            .write_to(&mut buf, ImageFormat::Jpeg)
            .expect("encode test jpeg");
        buf.into_inner()
    }

    /// Splices a malformed `Exif` APP1 segment right after the JPEG SOI
    /// marker. Decoders skip the unknown segment but EXIF parsing fails.
    fn jpeg_with_broken_exif() -> Vec<u8> {
        let jpeg = jpeg_bytes(32, 32);
        let garbage = b"Exif\0\0this is not a tiff header";
        let mut out = Vec::with_capacity(jpeg.len() + garbage.len() + 4);
        out.extend_from_slice(&jpeg[..2]);
        out.extend_from_slice(&[0xFF, 0xE1]);
        out.extend_from_slice(&((garbage.len() as u16 + 2).to_be_bytes()));
        out.extend_from_slice(garbage);
        out.extend_from_slice(&jpeg[2..]);
        out
    }

    #[test]
    fn derives_container_fields_from_optimized_output() {
        let metadata = extract_metadata(&jpeg_bytes(48, 32), Some("holiday".to_string()));
        assert_eq!(metadata.format.as_deref(), Some("jpg"));
        assert_eq!(metadata.width, Some(48));
        assert_eq!(metadata.height, Some(32));
        assert_eq!(metadata.space.as_deref(), Some("srgb"));
        assert_eq!(metadata.description.as_deref(), Some("holiday"));
        assert!(metadata.note.is_none());
        assert!(metadata.make.is_none());
    }

    #[test]
    fn broken_exif_degrades_to_minimal_record() {
        let metadata = extract_metadata(&jpeg_with_broken_exif(), Some("trip".to_string()));
        assert_eq!(
            metadata.note.as_deref(),
            Some("partial or failed metadata parse")
        );
        assert_eq!(metadata.description.as_deref(), Some("trip"));
        assert!(metadata.created.is_some());
        assert!(metadata.width.is_none());
    }

    #[test]
    fn garbage_bytes_degrade_to_minimal_record() {
        let metadata = extract_metadata(b"\xde\xad\xbe\xef", None);
        assert_eq!(
            metadata.note.as_deref(),
            Some("partial or failed metadata parse")
        );
    }
}
