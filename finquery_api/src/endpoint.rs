//! Immutable per-vendor endpoint settings shared by every call.

use std::time::Duration;

/// Default request timeout applied when an endpoint does not override it.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// How the operation identifier is carried on the wire.
#[derive(Debug, Clone)]
pub enum OperationStyle {
    /// The operation is appended to the base URL as a path suffix,
    /// e.g. `/v3/search` or `eod/AAPL.MX`.
    Path,
    /// The operation is sent as the named query parameter on a fixed path,
    /// e.g. `function=TIME_SERIES_DAILY`.
    QueryParam(String),
}

/// How the API credential is attached to each request.
#[derive(Debug, Clone)]
pub enum Auth {
    /// No credential; requests go out unauthenticated.
    None,
    /// Credential as a query parameter, e.g. `apikey=...`.
    Query { param: String, key: String },
    /// Credential as a request header, e.g. `X-OPENFIGI-APIKEY`.
    Header { name: String, key: String },
}

/// Connection settings for one vendor API: base URL, default headers,
/// credential, operation encoding, and timeout.
///
/// Built once at startup and shared read-only by every call; cloning is
/// cheap and concurrent use needs no synchronization.
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub(crate) base_url: String,
    pub(crate) default_headers: Vec<(String, String)>,
    pub(crate) auth: Auth,
    pub(crate) operation_style: OperationStyle,
    pub(crate) timeout: Duration,
}

impl Endpoint {
    /// Creates an endpoint with path-style operations, no credential, no
    /// default headers, and the default timeout.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            default_headers: Vec::new(),
            auth: Auth::None,
            operation_style: OperationStyle::Path,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Adds a header sent with every request.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.default_headers
            .push((name.to_string(), value.to_string()));
        self
    }

    /// Attaches the credential as a query parameter on every request.
    pub fn with_query_auth(mut self, param: &str, key: String) -> Self {
        self.auth = Auth::Query {
            param: param.to_string(),
            key,
        };
        self
    }

    /// Attaches the credential as a request header on every request.
    pub fn with_header_auth(mut self, name: &str, key: String) -> Self {
        self.auth = Auth::Header {
            name: name.to_string(),
            key,
        };
        self
    }

    /// Sends the operation identifier as the named query parameter instead
    /// of a path suffix.
    pub fn with_operation_param(mut self, param: &str) -> Self {
        self.operation_style = OperationStyle::QueryParam(param.to_string());
        self
    }

    /// Overrides the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
