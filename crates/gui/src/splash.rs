//! Startup splash and texture helpers.

use anyhow::{Context, Result};
use eframe::egui;
use image::imageops::FilterType;
use image::RgbaImage;

pub const WINDOW_SIZE: [f32; 2] = [800.0, 600.0];

const SPLASH_PNG: &[u8] = include_bytes!("../assets/meal_app.png");

/// Upload an RGBA image as a texture.
pub fn texture_from_rgba(ctx: &egui::Context, name: &str, img: &RgbaImage) -> egui::TextureHandle {
    let (w, h) = img.dimensions();
    let color = egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], img.as_raw());
    ctx.load_texture(name, color, egui::TextureOptions::LINEAR)
}

/// Decode the embedded splash image, scaled to fill the window.
///
/// An undecodable asset is a packaging error and aborts startup.
pub fn decode_splash(bytes: &[u8]) -> Result<RgbaImage> {
    let img = image::load_from_memory(bytes).context("Failed to decode splash image")?;
    let [w, h] = WINDOW_SIZE;
    Ok(img
        .resize_exact(w as u32, h as u32, FilterType::Lanczos3)
        .to_rgba8())
}

pub fn load_splash(ctx: &egui::Context) -> Result<egui::TextureHandle> {
    let img = decode_splash(SPLASH_PNG)?;
    Ok(texture_from_rgba(ctx, "splash", &img))
}

/// Draw the splash filling the whole window, no margins.
pub fn show_splash(ctx: &egui::Context, texture: &egui::TextureHandle) {
    egui::CentralPanel::default()
        .frame(egui::Frame::default())
        .show(ctx, |ui| {
            let rect = ui.max_rect();
            egui::Image::new(egui::load::SizedTexture::new(texture.id(), rect.size()))
                .paint_at(ui, rect);
        });
}
