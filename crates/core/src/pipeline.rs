//! Response → display: report text plus a display-ready thumbnail.

use image::RgbaImage;

use crate::api::MealApi;
use crate::report::{self, Rendered};
use crate::thumbnail;
use crate::types::MealsResponse;

/// Image to put in the thumbnail slot.
#[derive(Debug, Clone)]
pub enum Thumbnail {
    Loaded(RgbaImage),
    /// Fetch or decode failed; show the placeholder.
    Unavailable(RgbaImage),
}

impl Thumbnail {
    pub fn image(&self) -> &RgbaImage {
        match self {
            Self::Loaded(img) | Self::Unavailable(img) => img,
        }
    }
}

/// Everything the UI needs to replace its current display.
#[derive(Debug, Clone)]
pub struct Presentation {
    pub rendered: Rendered,
    /// `None` leaves the image slot unchanged (the not-found case).
    pub thumbnail: Option<Thumbnail>,
}

impl Presentation {
    pub fn text(&self) -> &str {
        self.rendered.text()
    }
}

/// Render `response` and, for a found meal, download its thumbnail.
pub fn present(api: &dyn MealApi, response: Option<&MealsResponse>) -> Presentation {
    let rendered = report::render(response);
    let thumbnail = match &rendered {
        Rendered::NotFound => None,
        Rendered::Meal(meal) => Some(
            match thumbnail::fetch_thumbnail(api, meal.thumbnail_url.as_deref()) {
                Ok(img) => Thumbnail::Loaded(img),
                Err(e) => {
                    log::warn!("Thumbnail for {:?}: {}", meal.name, e);
                    Thumbnail::Unavailable(thumbnail::placeholder())
                }
            },
        ),
    };
    Presentation { rendered, thumbnail }
}
