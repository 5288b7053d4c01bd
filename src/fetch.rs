// src/fetch.rs
//
// Fetcher: one request, one JSON parse, normalized into either the full
// course list or a FetchError.

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::{
    config::options::FetchOptions,
    core::net::{self, HttpReply},
    course::CourseRecord,
    error::FetchError,
};

/// Where course replies come from. The HTTP backend in production; tests
/// plug in canned replies.
pub trait CourseSource {
    /// Human-readable origin for logs.
    fn describe(&self) -> String;

    /// Perform the single request. Transport failures map to `FetchFailed`.
    fn get(&self) -> Result<HttpReply, FetchError>;
}

pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(opts: &FetchOptions) -> Result<Self, FetchError> {
        let client = net::client().map_err(|e| FetchError::failed(e.to_string()))?;
        Ok(Self { client, url: opts.endpoint() })
    }

    pub fn url(&self) -> &str { &self.url }
}

impl CourseSource for HttpSource {
    fn describe(&self) -> String { self.url.clone() }

    fn get(&self) -> Result<HttpReply, FetchError> {
        net::http_get(&self.client, &self.url).map_err(|e| FetchError::failed(e.to_string()))
    }
}

/// Response envelope. Success carries `courses`; failure may carry `error`.
#[derive(Debug, Default, Deserialize)]
struct ApiBody {
    #[serde(default)]
    courses: Option<Vec<CourseRecord>>,
    #[serde(default)]
    error: Option<String>,
}

/// Turn a raw reply into records.
///
/// - body that is not a JSON object of the expected shape → `FetchFailed`
/// - non-success status → `Server(error)` if `error` is a non-empty string,
///   otherwise `FetchFailed`
/// - success with `courses` absent, null or empty → `NoCoursesFound`
pub fn normalize(reply: &HttpReply) -> Result<Vec<CourseRecord>, FetchError> {
    let body: ApiBody = serde_json::from_str(&reply.body).map_err(|e| {
        FetchError::failed(format!("HTTP {}: invalid JSON body: {e}", reply.status))
    })?;

    if !reply.is_success() {
        return match body.error {
            Some(msg) if !msg.trim().is_empty() => Err(FetchError::Server(msg)),
            _ => Err(FetchError::failed(format!("HTTP {} without error message", reply.status))),
        };
    }

    match body.courses {
        Some(courses) if !courses.is_empty() => Ok(courses),
        _ => Err(FetchError::NoCoursesFound),
    }
}

pub fn fetch_courses(source: &dyn CourseSource) -> Result<Vec<CourseRecord>, FetchError> {
    logd!("Fetch: GET {}", source.describe());
    let reply = source.get()?;
    logd!("Fetch: status={} bytes={}", reply.status, reply.body.len());
    normalize(&reply)
}
