//! # iexcloud-rs
//!
//! A typed Rust client for the IEX market-data REST APIs.
//!
//! Every endpoint is a thin wrapper over one GET request: a path
//! template is resolved against per-call parameters, the token rides
//! along as a query parameter, and the JSON body deserializes into a
//! strongly typed response model. The client holds no state between
//! calls and performs no retries, caching, or rate limiting.
//!
//! ## Features
//!
//! - **Two API generations**: [`IexCloudClient`] for IEX Cloud (v2) and
//!   [`IexTradingClient`] for the legacy IEX Trading API (v1)
//! - **Typed endpoint tables**: every operation is declared as a const
//!   path template bound to its response shape at compile time
//! - **Typed responses**: quotes, fundamentals, exchange data, and
//!   reference data as plain serde models
//! - **Async-first**: every call is independently awaitable; the shared
//!   transport handle is safe for concurrent use
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use iexcloud_rs::{Environment, IexCloudClient};
//!
//! #[tokio::main]
//! async fn main() -> iexcloud_rs::Result<()> {
//!     let client = IexCloudClient::new("pk_your_token", Environment::Production)?;
//!
//!     // Full quote for one symbol
//!     let quote = client.stock().quote("aapl").await?;
//!     println!("AAPL latest: {:?}", quote.latest_price);
//!
//!     // Top of book for several symbols
//!     let tops = client.market().tops(&["aapl", "msft"]).await?;
//!     println!("{} entries", tops.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Batch calls
//!
//! ```rust,no_run
//! use iexcloud_rs::{Environment, IexCloudClient};
//! use iexcloud_rs::models::{BatchType, ChartRange};
//!
//! #[tokio::main]
//! async fn main() -> iexcloud_rs::Result<()> {
//!     let client = IexCloudClient::new("pk_your_token", Environment::Sandbox)?;
//!
//!     let batch = client.stock()
//!         .batch_market(
//!             &["aapl", "msft"],
//!             &[BatchType::Quote, BatchType::Chart],
//!             Some(ChartRange::OneMonth),
//!             1,
//!         )
//!         .await?;
//!
//!     for (symbol, sections) in &batch {
//!         let bars = sections.chart.as_ref().map(Vec::len).unwrap_or(0);
//!         println!("{symbol}: {bars} chart bars");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error handling
//!
//! All failures surface as [`Error`]: argument errors before any
//! network I/O, transport errors untranslated from the HTTP layer,
//! non-2xx statuses with the raw body attached, and deserialization
//! failures carrying both the body and the parse detail. Whether to
//! retry, log, or abort is the caller's decision.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use client::{ClientConfig, Credentials, IexCloudClient, IexTradingClient};
pub use error::{Error, Result};
pub use models::{ApiVersion, Environment, Symbol};

/// Prelude module for convenient imports.
///
/// ```rust
/// use iexcloud_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::client::{ClientConfig, Credentials, IexCloudClient, IexTradingClient};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        ApiVersion, BatchType, ChartRange, CollectionType, DividendRange, Environment, ListType,
        Period, Symbol,
    };
}
