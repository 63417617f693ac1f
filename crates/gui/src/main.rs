//! Meal Recipe GUI — egui front end for TheMealDB.

mod app;
mod splash;
mod worker;

use std::error::Error;
use std::sync::Arc;

use anyhow::Context;
use mealdb_core::{ApiConfig, HttpMealApi, MealApi};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let http = HttpMealApi::new(&ApiConfig::from_env()).context("Failed to set up HTTP client")?;
    log::info!("Using API at {}", http.base_url());
    let api: Arc<dyn MealApi> = Arc::new(http);

    // Starts borderless for the splash; decorations come back with the main view.
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size(splash::WINDOW_SIZE)
            .with_min_inner_size([600.0, 450.0])
            .with_decorations(false),
        ..Default::default()
    };

    eframe::run_native(
        app::MAIN_TITLE,
        options,
        Box::new(
            move |cc: &eframe::CreationContext<'_>| -> Result<Box<dyn eframe::App>, Box<dyn Error + Send + Sync>> {
                // A missing or corrupt splash asset stops startup here.
                Ok(Box::new(app::MealApp::new(cc, api)?))
            },
        ),
    )
    .map_err(|e| anyhow::anyhow!("{}", e))
}
