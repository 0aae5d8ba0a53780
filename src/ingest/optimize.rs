use crate::ingest::error::IngestError;
use crate::ingest::policy::OptimizePolicy;
use color_eyre::eyre::Result;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use std::io::Cursor;
use tracing::{debug, warn};

/// The output of a successful re-encoding pass.
#[derive(Debug, Clone)]
pub struct OptimizedImage {
    pub bytes: Vec<u8>,
    pub quality: u8,
}

/// Re-encodes a raw image to fit the policy's byte budget.
///
/// Each attempt decodes the raw bytes, normalizes EXIF orientation, resizes
/// to fit within `max_dimension` (never upscaling), and encodes a JPEG at the
/// current quality. Over-budget results lower the quality by `quality_step`
/// and retry; attempt faults are logged and retried. After `max_attempts`
/// the file fails with `OptimizationFailed`.
pub fn optimize(raw: &[u8], policy: &OptimizePolicy) -> Result<OptimizedImage, IngestError> {
    let mut quality = policy.initial_quality;

    for attempt in 1..=policy.max_attempts {
        match encode_attempt(raw, quality, policy.max_dimension) {
            Ok(encoded) => {
                if encoded.len() as u64 <= policy.size_budget {
                    return Ok(OptimizedImage {
                        bytes: encoded,
                        quality,
                    });
                }
                debug!(
                    attempt,
                    quality,
                    size = encoded.len(),
                    budget = policy.size_budget,
                    "Encoded image over budget, lowering quality"
                );
                quality = quality.saturating_sub(policy.quality_step).max(1);
            }
            Err(e) => {
                warn!("Image processing attempt {} failed: {:?}", attempt, e);
                if attempt == policy.max_attempts {
                    return Err(IngestError::OptimizationFailed(e.to_string()));
                }
            }
        }
    }

    Err(IngestError::OptimizationFailed(format!(
        "could not optimize image below {} bytes",
        policy.size_budget
    )))
}

/// One decode-orient-resize-encode pass at a fixed quality.
fn encode_attempt(raw: &[u8], quality: u8, max_dimension: u32) -> Result<Vec<u8>> {
    let img = ImageReader::new(Cursor::new(raw))
        .with_guessed_format()?
        .decode()?;

    let img = normalize_orientation(img, exif_orientation(raw));

    let img = if img.width() > max_dimension || img.height() > max_dimension {
        img.resize(max_dimension, max_dimension, FilterType::Lanczos3)
    } else {
        img
    };

    let mut encoded = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut encoded, quality);
    encoder.encode_image(&img.to_rgb8())?;
    Ok(encoded)
}

/// Reads the EXIF orientation tag (1-8) from the raw container, if any.
fn exif_orientation(raw: &[u8]) -> u32 {
    let mut cursor = Cursor::new(raw);
    exif::Reader::new()
        .read_from_container(&mut cursor)
        .ok()
        .and_then(|data| {
            data.get_field(exif::Tag::Orientation, exif::In::PRIMARY)
                .and_then(|field| field.value.get_uint(0))
        })
        .unwrap_or(1)
}

/// Rotates/flips the image to the canonical upright orientation.
fn normalize_orientation(img: DynamicImage, orientation: u32) -> DynamicImage {
    match orientation {
        2 => img.fliph(),
        3 => img.rotate180(),
        4 => img.flipv(),
        5 => img.rotate90().fliph(),
        6 => img.rotate90(),
        7 => img.rotate270().fliph(),
        8 => img.rotate270(),
        _ => img,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbImage};

    fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
        });
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img)
            .write_to(&mut buf, ImageFormat::Jpeg)
            .expect("encode test jpeg");
        buf.into_inner()
    }

    #[test]
    fn small_image_keeps_initial_quality_and_dimensions() {
        let raw = jpeg_bytes(64, 48);
        let out = optimize(&raw, &OptimizePolicy::default()).expect("optimize");
        assert_eq!(out.quality, 80);

        let decoded = image::load_from_memory(&out.bytes).expect("decode output");
        assert_eq!(decoded.width(), 64);
        assert_eq!(decoded.height(), 48);
    }

    #[test]
    fn wide_image_is_clamped_to_max_dimension() {
        let raw = jpeg_bytes(2000, 500);
        let out = optimize(&raw, &OptimizePolicy::default()).expect("optimize");

        let decoded = image::load_from_memory(&out.bytes).expect("decode output");
        assert_eq!(decoded.width(), 1600);
        assert_eq!(decoded.height(), 400);
    }

    #[test]
    fn never_upscales_below_max_dimension() {
        let raw = jpeg_bytes(100, 100);
        let out = optimize(&raw, &OptimizePolicy::default()).expect("optimize");

        let decoded = image::load_from_memory(&out.bytes).expect("decode output");
        assert!(decoded.width() <= 100);
        assert!(decoded.height() <= 100);
    }

    #[test]
    fn impossible_budget_fails_after_all_attempts() {
        let raw = jpeg_bytes(800, 800);
        let policy = OptimizePolicy {
            size_budget: 16,
            ..OptimizePolicy::default()
        };
        let err = optimize(&raw, &policy).expect_err("should exhaust attempts");
        assert!(matches!(err, IngestError::OptimizationFailed(_)));
    }

    #[test]
    fn undecodable_bytes_fail_with_optimization_failed() {
        let err = optimize(b"not an image at all", &OptimizePolicy::default())
            .expect_err("garbage should not decode");
        assert!(matches!(err, IngestError::OptimizationFailed(_)));
    }
}
