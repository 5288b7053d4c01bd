// src/core/net.rs

// Single blocking GET. No retries and no client-side timeout: the call waits
// until the backend answers or the connection drops.

use reqwest::{
    blocking::Client,
    header::ACCEPT,
};
use crate::config::consts::USER_AGENT;

/// Status and raw body of a completed request, whatever the status was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub fn client() -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(None)
        .build()
}

pub fn http_get(client: &Client, url: &str) -> reqwest::Result<HttpReply> {
    let resp = client
        .get(url)
        .header(ACCEPT, "application/json")
        .send()?;

    let status = resp.status().as_u16();
    let body = resp.text()?;
    Ok(HttpReply { status, body })
}
