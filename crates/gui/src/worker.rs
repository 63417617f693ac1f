//! Background lookups shared between the UI thread and worker threads.

use std::sync::{Arc, Mutex};
use std::thread;

use mealdb_core::api::{category_names, first_meal_in_category};
use mealdb_core::error::{ApiError, ApiResult};
use mealdb_core::pipeline::{Presentation, present};
use mealdb_core::types::MealsResponse;
use mealdb_core::MealApi;

// ─── Lookup kinds ────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Search(String),
    Random,
    Category(String),
}

impl Lookup {
    fn describe(&self) -> String {
        match self {
            Self::Search(name) => format!("Searching for \"{}\"...", name),
            Self::Random => "Fetching a random meal...".to_string(),
            Self::Category(category) => format!("Loading {}...", category),
        }
    }

    fn run(&self, api: &dyn MealApi) -> ApiResult<Option<MealsResponse>> {
        match self {
            Self::Search(name) => api.search_by_name(name),
            Self::Random => api.random_meal(),
            Self::Category(category) => first_meal_in_category(api, category),
        }
    }
}

// ─── Shared state ────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum LookupStatus {
    Idle,
    Running(String),
    /// Recoverable notice; the current display stays as it was.
    Failed(String),
}

/// Results handed from worker threads to the UI.
///
/// Every dispatch gets a new id and only the newest one may publish, so a
/// slow earlier response can never overwrite a later one.
#[derive(Clone)]
pub struct LookupState {
    latest: Arc<Mutex<u64>>,
    status: Arc<Mutex<LookupStatus>>,
    result: Arc<Mutex<Option<Presentation>>>,
    categories: Arc<Mutex<Option<Vec<String>>>>,
}

impl LookupState {
    pub fn new() -> Self {
        Self {
            latest: Arc::new(Mutex::new(0)),
            status: Arc::new(Mutex::new(LookupStatus::Idle)),
            result: Arc::new(Mutex::new(None)),
            categories: Arc::new(Mutex::new(None)),
        }
    }

    pub fn status(&self) -> LookupStatus {
        self.status.lock().unwrap().clone()
    }

    pub fn is_running(&self) -> bool {
        matches!(self.status(), LookupStatus::Running(_))
    }

    /// Start a new request, superseding any in flight.
    fn begin(&self, description: String) -> u64 {
        let mut latest = self.latest.lock().unwrap();
        *latest += 1;
        *self.status.lock().unwrap() = LookupStatus::Running(description);
        *latest
    }

    fn finish(&self, id: u64, presentation: Presentation) {
        let latest = self.latest.lock().unwrap();
        if *latest != id {
            log::debug!("Dropping stale result for request {}", id);
            return;
        }
        *self.result.lock().unwrap() = Some(presentation);
        *self.status.lock().unwrap() = LookupStatus::Idle;
    }

    fn fail(&self, id: u64, message: String) {
        let latest = self.latest.lock().unwrap();
        if *latest != id {
            log::debug!("Dropping stale failure for request {}", id);
            return;
        }
        *self.status.lock().unwrap() = LookupStatus::Failed(message);
    }

    /// Newest finished presentation, if one arrived since the last call.
    pub fn take_result(&self) -> Option<Presentation> {
        self.result.lock().unwrap().take()
    }

    pub fn take_categories(&self) -> Option<Vec<String>> {
        self.categories.lock().unwrap().take()
    }

    /// Run `lookup` and the presentation pipeline on a worker thread.
    pub fn dispatch(&self, api: Arc<dyn MealApi>, lookup: Lookup, ctx: Option<eframe::egui::Context>) {
        let id = self.begin(lookup.describe());
        let state = self.clone();
        log::info!("{}", lookup.describe());

        thread::spawn(move || {
            match lookup.run(api.as_ref()) {
                Ok(resp) => state.finish(id, present(api.as_ref(), resp.as_ref())),
                // A body we cannot parse is shown like an empty result.
                Err(e @ ApiError::Decode { .. }) => {
                    log::warn!("{}", e);
                    state.finish(id, present(api.as_ref(), None));
                }
                Err(e) => {
                    log::error!("{:?} failed: {}", lookup, error_chain(&e));
                    let notice = if e.is_transport() {
                        format!("Could not reach the recipe service: {}", e)
                    } else {
                        format!("Recipe service error: {}", e)
                    };
                    state.fail(id, notice);
                }
            }
            if let Some(ctx) = ctx {
                ctx.request_repaint();
            }
        });
    }

    /// Fetch the category list once on a worker thread.
    pub fn load_categories(&self, api: Arc<dyn MealApi>, ctx: Option<eframe::egui::Context>) {
        let slot = self.categories.clone();
        thread::spawn(move || {
            let names = category_names(api.as_ref());
            log::info!("Loaded {} categories", names.len());
            *slot.lock().unwrap() = Some(names);
            if let Some(ctx) = ctx {
                ctx.request_repaint();
            }
        });
    }
}

impl Default for LookupState {
    fn default() -> Self {
        Self::new()
    }
}

fn error_chain(e: &dyn std::error::Error) -> String {
    let mut out = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}
