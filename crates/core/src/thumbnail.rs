//! Meal thumbnail download, decoding and resizing.

use image::imageops::FilterType;
use image::{Rgba, RgbaImage};

use crate::api::MealApi;
use crate::error::ThumbnailError;

pub const THUMBNAIL_WIDTH: u32 = 300;
pub const THUMBNAIL_HEIGHT: u32 = 200;

/// Decode image bytes and scale them to exactly 300x200.
pub fn decode_thumbnail(bytes: &[u8]) -> Result<RgbaImage, ThumbnailError> {
    let img = image::load_from_memory(bytes)?;
    Ok(img
        .resize_exact(THUMBNAIL_WIDTH, THUMBNAIL_HEIGHT, FilterType::Lanczos3)
        .to_rgba8())
}

/// Download and decode the thumbnail at `url`.
pub fn fetch_thumbnail(api: &dyn MealApi, url: Option<&str>) -> Result<RgbaImage, ThumbnailError> {
    let url = url.ok_or(ThumbnailError::MissingUrl)?;
    let bytes = api.fetch_bytes(url)?;
    decode_thumbnail(&bytes)
}

/// Neutral 300x200 tile shown when a thumbnail is unavailable.
pub fn placeholder() -> RgbaImage {
    const BORDER: u32 = 4;
    let fill = Rgba([0xF1, 0xE4, 0xC8, 0xFF]);
    let edge = Rgba([0xC9, 0xB3, 0x8A, 0xFF]);
    RgbaImage::from_fn(THUMBNAIL_WIDTH, THUMBNAIL_HEIGHT, |x, y| {
        let on_edge = x < BORDER
            || y < BORDER
            || x >= THUMBNAIL_WIDTH - BORDER
            || y >= THUMBNAIL_HEIGHT - BORDER;
        if on_edge { edge } else { fill }
    })
}
