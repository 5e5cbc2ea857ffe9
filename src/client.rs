// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Thin JSON-over-HTTP adapter. One attempt per call, no retries.

use crate::error::{ApiError, ApiResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What came back from the wire, before status checking.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a single HTTP exchange. `body` is already-serialized JSON.
pub trait Transport {
    fn send(&self, method: Method, url: &str, body: Option<String>) -> ApiResult<RawResponse>;
}

/// `reqwest` blocking transport. No timeout is configured.
pub struct HttpTransport {
    inner: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> ApiResult<Self> {
        Ok(Self {
            inner: crate::utils::http_client()?,
        })
    }
}

impl Transport for HttpTransport {
    fn send(&self, method: Method, url: &str, body: Option<String>) -> ApiResult<RawResponse> {
        let req = match method {
            Method::Get => self.inner.get(url),
            Method::Post => self.inner.post(url),
            Method::Put => self.inner.put(url),
            Method::Delete => self.inner.delete(url),
        };
        let req = match body {
            Some(b) => req
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(b),
            None => req,
        };
        let resp = req.send()?;
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .map_err(|source| ApiError::Body { status, source })?;
        Ok(RawResponse { status, body })
    }
}

pub struct ApiClient<T: Transport = HttpTransport> {
    base_url: String,
    transport: T,
}

impl ApiClient<HttpTransport> {
    pub fn http(base_url: &str) -> ApiResult<Self> {
        Ok(Self::with_transport(base_url, HttpTransport::new()?))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn get<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        self.request::<R, ()>(Method::Get, path, None)
    }

    /// Sends `body` as JSON and parses the response into `R`.
    ///
    /// A non-2xx status becomes [`ApiError::Http`] carrying the raw body.
    /// An empty success body is read as JSON `null`.
    pub fn request<R, B>(&self, method: Method, path: &str, body: Option<&B>) -> ApiResult<R>
    where
        R: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let payload = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(ApiError::Encode)?;
        debug!(%method, %url, body = payload.as_deref().unwrap_or(""), "request");

        let resp = self.transport.send(method, &url, payload)?;
        if !resp.is_success() {
            warn!(%method, %url, status = resp.status, "request failed");
            return Err(ApiError::Http {
                status: resp.status,
                body: resp.body,
            });
        }
        debug!(%method, %url, status = resp.status, "response");

        let text = if resp.body.trim().is_empty() {
            "null"
        } else {
            resp.body.as_str()
        };
        serde_json::from_str(text).map_err(|source| ApiError::Decode {
            path: path.to_string(),
            source,
        })
    }
}
