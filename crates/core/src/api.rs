//! Blocking client for the MealDB JSON API.
//!
//! Every operation issues exactly one GET. A non-success HTTP status is
//! reported as "no data" (`Ok(None)`); network failures and malformed
//! bodies are errors.

use reqwest::blocking::Client;
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::types::{CategoryListResponse, MealsResponse};

/// Capabilities the UI needs from the recipe service.
pub trait MealApi: Send + Sync {
    /// `search.php?s={name}`
    fn search_by_name(&self, name: &str) -> ApiResult<Option<MealsResponse>>;

    /// `random.php`
    fn random_meal(&self) -> ApiResult<Option<MealsResponse>>;

    /// `list.php?c=list`
    fn list_categories(&self) -> ApiResult<Option<CategoryListResponse>>;

    /// `filter.php?c={category}`. Records only carry name, thumbnail and id.
    fn filter_by_category(&self, category: &str) -> ApiResult<Option<MealsResponse>>;

    /// `lookup.php?i={id}`
    fn lookup_by_id(&self, id: &str) -> ApiResult<Option<MealsResponse>>;

    /// Raw body of an arbitrary URL (thumbnails).
    fn fetch_bytes(&self, url: &str) -> ApiResult<Vec<u8>>;
}

/// Full record of the first meal in `category`.
///
/// `filter.php` only returns summaries, so the first hit is resolved
/// through `lookup.php`. If the summary has no id it is returned as-is.
pub fn first_meal_in_category(
    api: &dyn MealApi,
    category: &str,
) -> ApiResult<Option<MealsResponse>> {
    let Some(summaries) = api.filter_by_category(category)? else {
        return Ok(None);
    };
    let Some(first) = summaries.first() else {
        return Ok(Some(summaries));
    };
    match first.id() {
        Some(id) => {
            log::debug!("Category {:?}: resolving meal {}", category, id);
            api.lookup_by_id(id)
        }
        None => Ok(Some(MealsResponse {
            meals: Some(vec![first.clone()]),
        })),
    }
}

/// Query to send for user input, or `None` when there is nothing to search.
///
/// Only an empty entry is skipped; whitespace is sent as typed.
pub fn search_query(input: &str) -> Option<&str> {
    if input.is_empty() { None } else { Some(input) }
}

/// Category names for the selector; empty when the call fails or returns nothing.
pub fn category_names(api: &dyn MealApi) -> Vec<String> {
    match api.list_categories() {
        Ok(Some(list)) => list.names(),
        Ok(None) => {
            log::warn!("Category list unavailable");
            Vec::new()
        }
        Err(e) => {
            log::error!("Failed to load categories: {}", e);
            Vec::new()
        }
    }
}

// ─── HTTP implementation ─────────────────────────────────────────

pub struct HttpMealApi {
    client: Client,
    base_url: String,
}

impl HttpMealApi {
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ApiError::Client)?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Endpoint URL with percent-encoded query parameters.
    pub fn endpoint(&self, path: &str, query: &[(&str, &str)]) -> ApiResult<Url> {
        let raw = format!("{}/{}", self.base_url, path);
        let parsed = if query.is_empty() {
            Url::parse(&raw)
        } else {
            Url::parse_with_params(&raw, query)
        };
        parsed.map_err(|e| ApiError::Url {
            url: raw,
            reason: e.to_string(),
        })
    }

    fn get(&self, url: Url) -> ApiResult<reqwest::blocking::Response> {
        log::debug!("GET {}", url);
        self.client
            .get(url.clone())
            .send()
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> ApiResult<Option<T>> {
        let response = self.get(url.clone())?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("HTTP {} from {}, treating as no data", status, url);
            return Ok(None);
        }
        let body = response.bytes().map_err(|source| ApiError::Transport {
            url: url.to_string(),
            source,
        })?;
        serde_json::from_slice(&body)
            .map(Some)
            .map_err(|source| ApiError::Decode {
                url: url.to_string(),
                source,
            })
    }
}

impl MealApi for HttpMealApi {
    fn search_by_name(&self, name: &str) -> ApiResult<Option<MealsResponse>> {
        self.get_json(self.endpoint("search.php", &[("s", name)])?)
    }

    fn random_meal(&self) -> ApiResult<Option<MealsResponse>> {
        self.get_json(self.endpoint("random.php", &[])?)
    }

    fn list_categories(&self) -> ApiResult<Option<CategoryListResponse>> {
        self.get_json(self.endpoint("list.php", &[("c", "list")])?)
    }

    fn filter_by_category(&self, category: &str) -> ApiResult<Option<MealsResponse>> {
        self.get_json(self.endpoint("filter.php", &[("c", category)])?)
    }

    fn lookup_by_id(&self, id: &str) -> ApiResult<Option<MealsResponse>> {
        self.get_json(self.endpoint("lookup.php", &[("i", id)])?)
    }

    fn fetch_bytes(&self, url: &str) -> ApiResult<Vec<u8>> {
        let parsed = Url::parse(url).map_err(|e| ApiError::Url {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        let response = self.get(parsed)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let bytes = response.bytes().map_err(|source| ApiError::Transport {
            url: url.to_string(),
            source,
        })?;
        log::debug!("Fetched {} bytes from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }
}

// ─── Test double ────────────────────────────────────────────────

#[cfg(test)]
pub(crate) mod stub {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;

    /// In-memory `MealApi` that records the calls it receives.
    #[derive(Default)]
    pub struct StubApi {
        pub search: HashMap<String, MealsResponse>,
        pub random: Option<MealsResponse>,
        pub categories: Option<CategoryListResponse>,
        pub filter: HashMap<String, MealsResponse>,
        pub lookup: HashMap<String, MealsResponse>,
        pub bytes: HashMap<String, Vec<u8>>,
        pub offline: bool,
        pub calls: Mutex<Vec<String>>,
    }

    impl StubApi {
        fn record(&self, call: String) -> ApiResult<()> {
            self.calls.lock().unwrap().push(call.clone());
            if self.offline {
                return Err(ApiError::Status { url: call, status: 503 });
            }
            Ok(())
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl MealApi for StubApi {
        fn search_by_name(&self, name: &str) -> ApiResult<Option<MealsResponse>> {
            self.record(format!("search:{}", name))?;
            Ok(Some(self.search.get(name).cloned().unwrap_or_default()))
        }

        fn random_meal(&self) -> ApiResult<Option<MealsResponse>> {
            self.record("random".to_string())?;
            Ok(self.random.clone())
        }

        fn list_categories(&self) -> ApiResult<Option<CategoryListResponse>> {
            self.record("categories".to_string())?;
            Ok(self.categories.clone())
        }

        fn filter_by_category(&self, category: &str) -> ApiResult<Option<MealsResponse>> {
            self.record(format!("filter:{}", category))?;
            Ok(Some(self.filter.get(category).cloned().unwrap_or_default()))
        }

        fn lookup_by_id(&self, id: &str) -> ApiResult<Option<MealsResponse>> {
            self.record(format!("lookup:{}", id))?;
            Ok(Some(self.lookup.get(id).cloned().unwrap_or_default()))
        }

        fn fetch_bytes(&self, url: &str) -> ApiResult<Vec<u8>> {
            self.record(format!("fetch:{}", url))?;
            self.bytes.get(url).cloned().ok_or_else(|| ApiError::Status {
                url: url.to_string(),
                status: 404,
            })
        }
    }
}
