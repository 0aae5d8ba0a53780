#![allow(dead_code)]

use albums_backend::models::Album;
use chrono::Utc;
use image::{DynamicImage, ImageFormat, RgbImage};
use std::io::Cursor;

pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, ((x * y) % 256) as u8])
    });
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img)
        .write_to(&mut buf, ImageFormat::Jpeg)
        .expect("encode test jpeg");
    buf.into_inner()
}

pub fn album(id: &str, owner_id: &str) -> Album {
    Album {
        id: id.to_string(),
        owner_id: owner_id.to_string(),
        name: "Test album".to_string(),
        description: None,
        created_at: Utc::now(),
        photos: Vec::new(),
    }
}

/// Builds a `multipart/form-data` body with an optional `description` text
/// part and any number of `photos` file parts.
pub fn multipart_body(
    boundary: &str,
    description: Option<&str>,
    files: &[(&str, &str, Vec<u8>)],
) -> Vec<u8> {
    let mut body = Vec::new();

    if let Some(text) = description {
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(b"Content-Disposition: form-data; name=\"description\"\r\n\r\n");
        body.extend_from_slice(text.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    for (filename, content_type, bytes) in files {
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"photos\"; filename=\"{filename}\"\r\n")
                .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
    body
}
