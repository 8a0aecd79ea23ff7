//! Generic JSON-over-HTTP query client shared by every vendor integration.

use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::endpoint::{Auth, Endpoint, OperationStyle};
use crate::params::Params;
use crate::Error;

/// HTTP method for an outbound call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Client bound to one [`Endpoint`]. Builds the request URL, attaches the
/// credential and default headers, sends with a bounded timeout, and decodes
/// the JSON response.
///
/// Holds no mutable state; clones share the underlying connection pool, so
/// concurrent calls from independent tasks need no synchronization. Exactly
/// one outbound request goes out per call; there are no retries and no
/// caching.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    endpoint: Endpoint,
}

impl Client {
    pub fn new(endpoint: Endpoint) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(endpoint.timeout)
            .build()?;
        Ok(Self { http, endpoint })
    }

    fn build_url(&self, operation: &str) -> Result<Url, Error> {
        let raw = match &self.endpoint.operation_style {
            OperationStyle::Path => format!(
                "{}/{}",
                self.endpoint.base_url.trim_end_matches('/'),
                operation.trim_start_matches('/')
            ),
            OperationStyle::QueryParam(_) => self.endpoint.base_url.clone(),
        };
        let mut url = Url::parse(&raw).map_err(|e| {
            tracing::error!("invalid URL built from {:?}: {}", raw, e);
            Error::Configuration(format!("invalid endpoint URL {raw:?}: {e}"))
        })?;
        if let OperationStyle::QueryParam(param) = &self.endpoint.operation_style {
            url.query_pairs_mut().append_pair(param, operation);
        }
        if let Auth::Query { param, key } = &self.endpoint.auth {
            url.query_pairs_mut().append_pair(param, key);
        }
        Ok(url)
    }

    /// Performs one call against the endpoint. `params` is serialized per
    /// `method`: GET into the query string (lists as repeated keys), POST as
    /// a JSON object body. Returns the decoded response unchanged.
    pub async fn call(
        &self,
        operation: &str,
        params: &Params,
        method: Method,
    ) -> Result<Value, Error> {
        let mut url = self.build_url(operation)?;
        let request = match method {
            Method::Get => {
                if !params.is_empty() {
                    params.append_to_url(&mut url);
                }
                self.http.get(url)
            }
            Method::Post => self.http.post(url).json(&params.to_json_object()),
        };
        self.dispatch(request).await
    }

    /// Performs a POST whose body is an arbitrary pre-built JSON value, for
    /// endpoints that expect something other than an object at the top level
    /// (e.g. a batch of jobs as a JSON array).
    pub async fn call_with_body<B: Serialize + ?Sized>(
        &self,
        operation: &str,
        body: &B,
    ) -> Result<Value, Error> {
        let url = self.build_url(operation)?;
        self.dispatch(self.http.post(url).json(body)).await
    }

    async fn dispatch(&self, mut request: reqwest::RequestBuilder) -> Result<Value, Error> {
        for (name, value) in &self.endpoint.default_headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Auth::Header { name, key } = &self.endpoint.auth {
            request = request.header(name.as_str(), key.as_str());
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!("request failed before a response arrived: {}", e);
            Error::Transport(e)
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!("failed to read response body: {}", e);
            Error::Transport(e)
        })?;

        if !status.is_success() {
            tracing::error!(
                "request failed with status {}: {}",
                status,
                truncate_body(&body)
            );
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("response body is not valid JSON: {} | body: {}", e, snippet);
            Error::Decode {
                source: e,
                body: snippet,
            }
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
