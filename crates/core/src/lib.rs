//! Meal recipe lookup against TheMealDB: API client, report rendering,
//! thumbnails and the startup sequence shared by the CLI and GUI.

pub mod api;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod startup;
pub mod thumbnail;
pub mod types;

pub use api::{HttpMealApi, MealApi};
pub use config::ApiConfig;
pub use error::{ApiError, ThumbnailError};
