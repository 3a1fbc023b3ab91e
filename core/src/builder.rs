//! Fluent builder for single GET/POST requests.
//!
//! # Design
//! `RequestBuilder` is an owned value threaded through each configuration
//! call: every method consumes `self` and returns the updated builder, so
//! there is no shared mutable aliasing behind the chaining syntax. The
//! terminal operations also consume `self`, which makes executing a builder
//! twice — or mutating one after execution — a compile error instead of a
//! documented precondition.
//!
//! `execute` performs no work before the returned future is first polled,
//! and the outcome is delivered at the caller's await point: exactly one
//! `Ok`/`Err` per execution, never synchronously inside the call itself.

use std::collections::BTreeMap;

use tracing::{debug, warn};
use url::Url;

use crate::error::HttpError;
use crate::http::{HttpMethod, HttpRequest, TlsPolicy};
use crate::params::{self, ParamValue, Params};
use crate::transport::Transport;

/// Accumulates a target URL, method, headers, and an optional form body,
/// then materializes an immutable `HttpRequest` for a `Transport`.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    url: String,
    method: HttpMethod,
    headers: BTreeMap<String, String>,
    body: Option<Vec<u8>>,
    tls: TlsPolicy,
}

impl RequestBuilder {
    /// Start a GET request. The URL string is stored raw and only parsed
    /// when the request is materialized; no network activity happens here.
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, url.into())
    }

    /// Start a POST request.
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, url.into())
    }

    fn new(method: HttpMethod, url: String) -> Self {
        Self {
            url,
            method,
            headers: BTreeMap::new(),
            body: None,
            tls: TlsPolicy::default(),
        }
    }

    /// Append the serialized pairs to the URL as a query string.
    ///
    /// Uses `?` on first use and `&` when the URL already carries a query,
    /// so repeated calls compose. An empty mapping is a no-op rather than a
    /// dangling separator.
    #[must_use]
    pub fn with_parameters<K, I>(mut self, pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, ParamValue)>,
    {
        let params: Params = pairs.into_iter().map(|(k, v)| (k.into(), v)).collect();
        if params.is_empty() {
            return self;
        }
        let separator = if self.url.contains('?') { '&' } else { '?' };
        self.url.push(separator);
        self.url.push_str(&params::serialize(&params));
        self
    }

    /// Merge header pairs into the request. Last write wins for a repeated
    /// key, within one call or across calls. Keys are compared byte-exact.
    #[must_use]
    pub fn with_headers<K, V, I>(mut self, pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in pairs {
            self.headers.insert(key.into(), value.into());
        }
        self
    }

    /// Serialize the pairs as a form-encoded body, replacing any previous
    /// body. No Content-Type header is set implicitly; add one via
    /// `with_headers` if the server requires it.
    #[must_use]
    pub fn with_body<K, I>(mut self, pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, ParamValue)>,
    {
        let params: Params = pairs.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self.body = Some(params::serialize(&params).into_bytes());
        self
    }

    /// Disable (or re-enable) certificate validation for this request.
    ///
    /// Validation is on by default. Turning it off means the transport will
    /// accept any certificate the server presents, including expired,
    /// self-signed, and hostname-mismatched ones. Only for test rigs and
    /// servers you control.
    #[must_use]
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        if accept {
            warn!(url = %self.url, "certificate validation disabled for this request");
        }
        self.tls = if accept {
            TlsPolicy::AcceptInvalidCertificates
        } else {
            TlsPolicy::ValidateCertificates
        };
        self
    }

    /// Materialize the immutable request snapshot.
    ///
    /// Fails with `MalformedUrl` when the accumulated URL string does not
    /// parse. Exposed so hosts that own their own I/O can build a request
    /// without executing it.
    pub fn into_request(self) -> Result<HttpRequest, HttpError> {
        let url = match Url::parse(&self.url) {
            Ok(url) => url,
            Err(err) => {
                return Err(HttpError::MalformedUrl {
                    url: self.url,
                    reason: err.to_string(),
                })
            }
        };
        Ok(HttpRequest {
            method: self.method,
            url,
            headers: self.headers.into_iter().collect(),
            body: self.body,
            tls: self.tls,
        })
    }

    /// Execute the request against `transport` and resolve with the raw
    /// response payload.
    ///
    /// The builder is snapshotted before any transport activity begins;
    /// the transport receives the snapshot by value and this builder ceases
    /// to exist, so nothing can race with the in-flight request.
    pub async fn execute<T: Transport>(self, transport: &T) -> Result<Vec<u8>, HttpError> {
        let request = self.into_request()?;
        debug!(
            method = request.method.as_str(),
            url = %request.url,
            has_body = request.body.is_some(),
            "submitting request to transport"
        );
        transport.send(request).await
    }
}
