//! FluidSurveys API client
//!
//! Lists surveys (cached for a configurable window), fetches survey details,
//! and resolves a survey by its human-readable name.

use chrono::{Duration, Utc};
use serde_json::Value;
use tracing::debug;

use super::transport::{HttpTransport, Transport};
use super::{ApiError, Credentials, SurveyId};
use crate::cache::ResponseCache;

/// Production API root
pub const DEFAULT_BASE_URL: &str = "https://fluidsurveys.com/api/v2/";

/// How long the survey listing is reused before refetching
pub const DEFAULT_CACHE_TIMEOUT_SECS: u64 = 120;

/// Cache key for the survey listing
const SURVEYS_CACHE_KEY: &str = "surveys";

/// Client for the FluidSurveys REST API
///
/// Only `surveys` is cached. Details are always refetched, and `survey_named`
/// reuses the cached listing but never caches the details it returns.
///
/// The cache has no internal locking; methods that may write it take
/// `&mut self`.
#[derive(Debug)]
pub struct SurveysClient<T = HttpTransport> {
    credentials: Credentials,
    base_url: String,
    cache_timeout: Duration,
    cache: ResponseCache<Value>,
    transport: T,
}

impl SurveysClient<HttpTransport> {
    /// Create a client against the production API with the default cache TTL
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(key, secret),
            base_url: DEFAULT_BASE_URL.to_string(),
            cache_timeout: ttl_from_secs(DEFAULT_CACHE_TIMEOUT_SECS),
            cache: ResponseCache::new(),
            transport: HttpTransport::new(),
        }
    }
}

impl<T: Transport> SurveysClient<T> {
    /// Point the client at a different API root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set how many seconds the survey listing stays cached
    pub fn with_cache_timeout(mut self, secs: u64) -> Self {
        self.cache_timeout = ttl_from_secs(secs);
        self
    }

    /// Swap the network layer, keeping credentials and settings
    pub fn with_transport<U: Transport>(self, transport: U) -> SurveysClient<U> {
        SurveysClient {
            credentials: self.credentials,
            base_url: self.base_url,
            cache_timeout: self.cache_timeout,
            cache: self.cache,
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn cache_timeout(&self) -> Duration {
        self.cache_timeout
    }

    /// GET `url` with this client's credentials and decode the JSON body
    ///
    /// No caching happens at this layer.
    pub fn api_call(&self, url: &str) -> Result<Value, ApiError> {
        self.transport.get_json(url, &self.credentials)
    }

    /// Fetch the list of available surveys
    ///
    /// Served from cache while the last successful fetch is younger than the
    /// cache timeout.
    pub fn surveys(&mut self) -> Result<Value, ApiError> {
        let url = join_url(&self.base_url, &["surveys/"]);
        let transport = &self.transport;
        let credentials = &self.credentials;

        self.cache
            .get_or_fetch(SURVEYS_CACHE_KEY, self.cache_timeout, Utc::now, || {
                transport.get_json(&url, credentials)
            })
    }

    /// Fetch the details of one survey
    ///
    /// # Arguments
    /// * `survey_id` - Numeric or string id; both produce the same URL
    ///
    /// # Returns
    /// * `Ok(Value)` - The decoded details payload
    /// * `Err(ApiError)` - If the request or decoding fails
    pub fn survey_details(&self, survey_id: impl Into<SurveyId>) -> Result<Value, ApiError> {
        let url = self.survey_details_url(&survey_id.into());
        self.api_call(&url)
    }

    /// Fetch the details of the first survey whose `name` equals `name`
    ///
    /// Returns `Ok(None)` when no survey in the listing has that name; no
    /// details request is made in that case.
    pub fn survey_named(&mut self, name: &str) -> Result<Option<Value>, ApiError> {
        let listing = self.surveys()?;
        let entries = listing
            .get("surveys")
            .and_then(Value::as_array)
            .ok_or_else(|| ApiError::MissingField("surveys".to_string()))?;

        let Some(survey) = entries
            .iter()
            .find(|s| s.get("name").and_then(Value::as_str) == Some(name))
        else {
            debug!(survey_name = name, "no survey with that name");
            return Ok(None);
        };

        let id = survey
            .get("id")
            .cloned()
            .ok_or_else(|| ApiError::MissingField("id".to_string()))?;
        let id: SurveyId = serde_json::from_value(id)?;
        debug!(survey_name = name, %id, "resolved survey name");

        self.survey_details(id).map(Some)
    }

    /// Details endpoint for `survey_id`, always ending in `/`
    fn survey_details_url(&self, survey_id: &SurveyId) -> String {
        let id = survey_id.to_string();
        let mut url = join_url(&self.base_url, &["surveys", &id]);
        if !url.ends_with('/') {
            url.push('/');
        }
        url
    }
}

/// Joins path segments onto `base`, inserting a `/` only where one is missing
fn join_url(base: &str, segments: &[&str]) -> String {
    let mut url = base.to_string();
    for segment in segments {
        if !url.is_empty() && !url.ends_with('/') {
            url.push('/');
        }
        url.push_str(segment);
    }
    url
}

/// Converts a TTL in seconds, saturating at the largest representable span
fn ttl_from_secs(secs: u64) -> Duration {
    i64::try_from(secs)
        .ok()
        .and_then(Duration::try_seconds)
        .unwrap_or(Duration::MAX)
}
