//! HTTP clients and the request-building core.
//!
//! [`IexCloudClient`] targets IEX Cloud (v2, token required);
//! [`IexTradingClient`] targets the legacy IEX Trading API (v1, no
//! token). Both share the same executor: a path template resolved
//! against per-call parameters, one GET, and typed deserialization of
//! the body.

mod config;
mod endpoint;
mod http;
mod request;

pub use config::{ClientConfig, Credentials};
pub use http::{IexCloudClient, IexTradingClient};

pub(crate) use endpoint::Endpoint;
pub(crate) use http::ClientInner;
pub(crate) use request::{PathParams, QueryParams};
