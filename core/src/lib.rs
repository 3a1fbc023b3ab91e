//! Fluent builder core for single GET/POST HTTP requests.
//!
//! # Overview
//! Accumulates a target URL, method, headers, and an optional form-encoded
//! body through chained calls, then materializes an immutable `HttpRequest`
//! and submits it to a caller-supplied `Transport` (host-does-IO pattern).
//! The core performs no network I/O of its own.
//!
//! # Design
//! - `RequestBuilder` is an owned value: every configuration call and both
//!   terminal operations consume `self`, so a builder is single-use by
//!   construction and never shared mutably.
//! - Query and form data pass through the RFC 3986 percent-encoder; values
//!   are a closed set of kinds (`ParamValue`) with deterministic rendering,
//!   and pairs serialize in ascending key order.
//! - Certificate validation is on by default; blind trust is a per-request
//!   opt-in (`danger_accept_invalid_certs`).
//! - Failures surface as `HttpError` through the execution result — a URL
//!   that does not parse is an `Err`, never a panic.

pub mod builder;
pub mod encode;
pub mod error;
pub mod http;
pub mod params;
pub mod transport;

pub use builder::RequestBuilder;
pub use encode::{percent_decode, percent_encode};
pub use error::HttpError;
pub use http::{HttpMethod, HttpRequest, TlsPolicy};
pub use params::{ParamValue, Params};
pub use transport::Transport;
