//! Signed, retrying client for the Ooyala v2 media-management REST API—canonical query signing,
//! cache-aware endpoint selection, and typed status errors in one crate.
//!
//! ```no_run
//! use ooyala_v2::{
//! 	auth::ApiCredentials,
//! 	client::Client,
//! 	request::ApiCall,
//! 	time::Duration,
//! };
//!
//! # async fn run() -> ooyala_v2::error::Result<()> {
//! let client = Client::new(ApiCredentials::new("key", "secret"), Duration::seconds(15))?;
//! let call = ApiCall::new("/v2/assets").include("metadata").filter_where("asset_type='video'");
//! let response = client.fetch(&call).await?;
//!
//! println!("{:?}", response.body);
//! # Ok(())
//! # }
//! ```

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod obs;
pub mod request;
pub mod response;
pub mod sign;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		auth::ApiCredentials,
		client::{Client, ReqwestApiClient},
		config::ClientConfig,
		http::ReqwestHttpClient,
	};

	/// API key used by the test helpers.
	pub const TEST_API_KEY: &str = "test-api-key";
	/// API secret used by the test helpers.
	pub const TEST_API_SECRET: &str = "test-api-secret";

	/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
	/// `httpmock` during tests.
	pub fn test_reqwest_http_client() -> ReqwestHttpClient {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestHttpClient::with_client(client)
	}

	/// Builds a config whose primary and cache endpoints point at the provided mock bases.
	pub fn test_config(primary: &str, cache: &str) -> ClientConfig {
		ClientConfig::builder()
			.primary_endpoint(Url::parse(primary).expect("Mock primary endpoint should parse."))
			.cache_endpoint(Url::parse(cache).expect("Mock cache endpoint should parse."))
			.build()
			.expect("Mock client config should build successfully.")
	}

	/// Constructs a reqwest-backed [`Client`] with test credentials, a one hour TTL, and the
	/// provided endpoints.
	pub fn build_reqwest_test_client(primary: &str, cache: &str) -> ReqwestApiClient {
		Client::with_http_client(
			ApiCredentials::new(TEST_API_KEY, TEST_API_SECRET),
			Duration::hours(1),
			test_config(primary, cache),
			test_reqwest_http_client(),
		)
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use time;
pub use url;
#[cfg(test)] use {httpmock as _, tokio as _};
