//! Requests and responses as plain data.
//!
//! Endpoint modules build an [`HttpRequest`] and parse an [`HttpResponse`]
//! without touching the network. The async and blocking clients only differ
//! in how they carry one to the other, so both send the same bytes and apply
//! the same parsing rules.

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Url;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;

use crate::error::{HevyError, Result};

pub const API_KEY_HEADER: &str = "api-key";

/// Largest page size any list endpoint accepts.
pub const MAX_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Path segments below the base url, already unescaped (e.g. `["v1", "workouts", "w-1"]`).
    pub segments: Vec<String>,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new<I, S>(method: HttpMethod, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            segments: segments.into_iter().map(Into::into).collect(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(HttpMethod::Get, segments)
    }

    /// Attaches `payload` as the JSON body.
    pub fn with_json<T: Serialize>(mut self, context: &'static str, payload: &T) -> Result<Self> {
        let body = serde_json::to_string(payload)
            .map_err(|source| HevyError::Encode { context, source })?;
        self.body = Some(body);
        Ok(self)
    }

    pub fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    pub fn query_opt(self, key: &'static str, value: Option<String>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    /// Resolves the request against `base`, percent-encoding each path segment.
    pub fn url(&self, base: &Url) -> Result<Url> {
        let mut url = base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| HevyError::Config(format!("base url {base} cannot be a base")))?;
            path.pop_if_empty().extend(&self.segments);
        }
        if !self.query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(self.query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

pub(crate) fn parse_base_url(raw: &str) -> Result<Url> {
    let base = Url::parse(raw).map_err(|e| HevyError::Config(format!("invalid base url {raw:?}: {e}")))?;
    if base.cannot_be_a_base() {
        return Err(HevyError::Config(format!("base url {raw:?} cannot be a base")));
    }
    Ok(base)
}

/// Headers sent on every request by both clients. The key is marked sensitive
/// so it never shows up in `Debug` output.
pub(crate) fn default_headers(api_key: &str) -> Result<HeaderMap> {
    let mut api_key = HeaderValue::from_str(api_key)
        .map_err(|_| HevyError::Config("api key contains invalid header characters".to_string()))?;
    api_key.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(API_KEY_HEADER, api_key);
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    Ok(headers)
}

pub(crate) fn content_type_json() -> (HeaderName, HeaderValue) {
    (CONTENT_TYPE, HeaderValue::from_static("application/json"))
}

pub(crate) fn log_request(request: &HttpRequest) {
    tracing::debug!(
        method = request.method.as_str(),
        path = %request.path(),
        "hevy.request"
    );
    if let Some(body) = &request.body {
        tracing::trace!(request_body = %body, "hevy.request_body");
    }
}

pub(crate) fn log_response(method: HttpMethod, path: &str, response: &HttpResponse) {
    tracing::debug!(
        method = method.as_str(),
        path = %path,
        status = response.status,
        "hevy.response"
    );
    if !(200..300).contains(&response.status) {
        tracing::warn!(
            method = method.as_str(),
            path = %path,
            status = response.status,
            "hevy.request_failed"
        );
    }
}

pub(crate) fn validate_paging(page: u32, page_size: u32) -> Result<()> {
    if page < 1 {
        return Err(HevyError::validation(format!(
            "page must be 1 or greater, got {page}"
        )));
    }
    if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
        return Err(HevyError::validation(format!(
            "page_size must be between 1 and {MAX_PAGE_SIZE}, got {page_size}"
        )));
    }
    Ok(())
}

/// Pagination query; the API spells the size parameter `pageSize`.
pub(crate) fn paged(segments: &[&str], page: u32, page_size: u32) -> Result<HttpRequest> {
    validate_paging(page, page_size)?;
    Ok(HttpRequest::get(segments.iter().copied())
        .query("page", page)
        .query("pageSize", page_size))
}

/// ISO-8601 with second precision and a trailing `Z`.
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub(crate) fn parse_json<T: serde::de::DeserializeOwned>(
    context: &'static str,
    body: &str,
) -> Result<T> {
    serde_json::from_str(body).map_err(|e| HevyError::decode(context, e))
}
