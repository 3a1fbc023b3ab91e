//! Transport abstraction the builder executes against.
//!
//! # Design
//! The core builds `HttpRequest` snapshots and never performs I/O itself;
//! the host supplies a `Transport` that owns connections, timeouts, and TLS
//! mechanics. The trait takes the snapshot by value — once submitted, the
//! request belongs to the transport alone.

use std::future::Future;

use crate::error::HttpError;
use crate::http::HttpRequest;

/// Executes an immutable request and resolves with the raw response payload.
///
/// Implementations must honor the snapshot's `TlsPolicy`: certificate
/// validation stays on unless the request explicitly carries
/// `AcceptInvalidCertificates`. Connection pooling, retries, redirects, and
/// timeouts are all transport policy; the core imposes none.
pub trait Transport {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<Vec<u8>, HttpError>> + Send;
}
