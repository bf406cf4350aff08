//! Reconciliation of HTTP Basic credentials across their three carriers.
//!
//! A credential can reach a service as an `Authorization` header, as
//! `username`/`password` (or pre-encoded `authorization`) query parameters,
//! or as a cookie planted by an earlier visit. This crate provides a tower
//! middleware that folds all three into a single canonical `Authorization`
//! header before the request travels downstream:
//!
//! - **Query parameters** let a client bookmark a credentialed URL once. The
//!   filter answers with a `307` redirect that moves the credential into a
//!   cookie, so it disappears from the URL bar and from page-embedded
//!   contexts such as iframes.
//! - **The cookie** silently re-authenticates every later request: its value
//!   is promoted into the `Authorization` header and stripped from the
//!   forwarded request.
//! - **An existing header** always wins; query and cookie carriers are still
//!   scrubbed so credentials never leak into downstream access logs.
//!
//! # Core Types
//!
//! - [`AuthRelayLayer`]: tower layer installing the filter around an inner service
//! - [`AuthRelay`]: the per-request reconciliation logic, usable without tower
//! - [`EncodedCredential`]: canonical (prefix-free) encoded credential
//! - [`QueryScrubber`]: batched read-and-remove view over a request's query string
//! - [`Config`]: per-instance options (parameter names, cookie attributes, verbosity)
//! - [`LogLevel`] / [`RelayLog`]: ordered verbosity threshold and the injected
//!   logging capability gated by it
//!
//! # Examples
//!
//! ```
//! use auth_relay::{AuthRelay, Config, Reconciliation};
//! use http::Request;
//!
//! let relay = AuthRelay::new(Config::default(), "edge");
//!
//! // A bookmarked URL carrying an encoded credential is redirected into a
//! // cookie; the credential leaves the query string.
//! let mut request = Request::builder()
//!     .uri("http://localhost/?authorization=dGVzdHVzZXJuYW1lOnRlc3RwYXNzd29yZA==")
//!     .body(())
//!     .unwrap();
//!
//! match relay.reconcile(&mut request) {
//!     Reconciliation::Redirect(redirect) => {
//!         assert_eq!(redirect.status(), http::StatusCode::TEMPORARY_REDIRECT);
//!     }
//!     Reconciliation::Forward => unreachable!("fresh credential always redirects"),
//! }
//! assert_eq!(request.uri().query(), None);
//! ```
//!
//! The filter performs no verification of the credentials it relocates; it
//! is a carrier-reconciliation layer, not an authenticator.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod cookie;
mod credential;
mod error;
mod filter;
mod layer;
mod level;
mod log;
mod query;

pub use config::Config;
pub use credential::{EncodedCredential, BASIC_PREFIX};
pub use error::LevelParseError;
pub use filter::{AuthRelay, Reconciliation, Redirect};
pub use layer::{AuthRelayLayer, AuthRelayService};
pub use level::LogLevel;
pub use log::RelayLog;
pub use query::QueryScrubber;
