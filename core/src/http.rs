//! Immutable request snapshot handed to the transport.
//!
//! # Design
//! `HttpRequest` is produced exactly once per execution by consuming the
//! builder. It is plain owned data — the transport receives it by value and
//! nothing else holds a reference, so no synchronization is needed between
//! configuration and in-flight I/O.

use url::Url;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// Certificate-validation policy applied during the TLS handshake.
///
/// Validation is the default. `AcceptInvalidCertificates` disables it
/// entirely and must only ever be reached through an explicit caller
/// opt-in (`RequestBuilder::danger_accept_invalid_certs`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TlsPolicy {
    #[default]
    ValidateCertificates,
    AcceptInvalidCertificates,
}

/// An immutable, fully materialized HTTP request.
///
/// Headers are sorted by name (the builder keeps them in a `BTreeMap`), so
/// two identically configured builders snapshot to identical requests.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
    pub tls: TlsPolicy,
}
