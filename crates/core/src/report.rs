//! Plain-text meal report shown in the results pane and printed by the CLI.

use std::fmt::Write;

use crate::types::{MealRecord, MealsResponse};

/// Text shown when a lookup produced no meal.
pub const NOT_FOUND: &str = "No meal found.";

/// Textual rendering of one meal.
#[derive(Debug, Clone, PartialEq)]
pub struct MealReport {
    pub name: String,
    pub text: String,
    pub thumbnail_url: Option<String>,
}

/// Outcome of rendering an API response.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    NotFound,
    Meal(MealReport),
}

impl Rendered {
    pub fn text(&self) -> &str {
        match self {
            Self::NotFound => NOT_FOUND,
            Self::Meal(report) => &report.text,
        }
    }
}

/// Render the first meal of `response`; anything else in the list is ignored.
pub fn render(response: Option<&MealsResponse>) -> Rendered {
    match response.and_then(MealsResponse::first) {
        Some(meal) => Rendered::Meal(MealReport {
            name: meal.name().unwrap_or_default().to_string(),
            text: format_report(meal),
            thumbnail_url: meal.thumbnail_url().map(str::to_string),
        }),
        None => Rendered::NotFound,
    }
}

/// Labeled lines in fixed order followed by the ingredients section.
pub fn format_report(meal: &MealRecord) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "Meal Name: {}", meal.name().unwrap_or_default());
    let _ = writeln!(out, "Category: {}", meal.category().unwrap_or_default());
    let _ = writeln!(out, "Area: {}", meal.area().unwrap_or_default());
    let _ = writeln!(out, "Instructions: {}", meal.instructions().unwrap_or_default());
    out.push_str("\nIngredients:\n");
    for ingredient in meal.ingredients() {
        let _ = writeln!(out, "- {}: {}", ingredient.name, ingredient.measure);
    }
    out
}
