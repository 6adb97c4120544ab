//! Client configuration: base endpoints, retry budget, and transport timeout.

// std
use std::time::Duration as StdDuration;
// self
use crate::{_prelude::*, request::HttpMethod};

/// Default origin for mutating calls.
pub const DEFAULT_PRIMARY_ENDPOINT: &str = "https://api.ooyala.com";
/// Default cache-fronted origin for reads.
pub const DEFAULT_CACHE_ENDPOINT: &str = "https://cdn-api.ooyala.com";
/// Default number of extra attempts after the first failure.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Errors raised while validating endpoints.
#[derive(Debug, PartialEq, Eq, ThisError)]
pub enum EndpointError {
	/// Endpoint string could not be parsed.
	#[error("The {endpoint} endpoint is not a valid URL.")]
	InvalidUrl {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Endpoints must be HTTP(S).
	#[error("The {endpoint} endpoint must use http or https: {url}.")]
	UnsupportedScheme {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},
	/// Endpoints are origins; the client owns the query string.
	#[error("The {endpoint} endpoint must not carry a query or fragment: {url}.")]
	QueryNotAllowed {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},
}

/// Base origins used by the client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiEndpoints {
	/// Origin for every non-GET call.
	pub primary: Url,
	/// Cache-fronted origin for GET calls.
	pub cache: Url,
}
impl ApiEndpoints {
	/// Selects the origin serving the provided verb.
	pub fn for_method(&self, method: HttpMethod) -> &Url {
		if method.is_read() { &self.cache } else { &self.primary }
	}
}

/// Immutable client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
	/// Base origins.
	pub endpoints: ApiEndpoints,
	/// Extra attempts after the first failure; every error kind is retried.
	pub max_retries: u32,
	/// Timeout applied by the bundled reqwest transport; `None` keeps reqwest's default.
	pub timeout: Option<StdDuration>,
}
impl ClientConfig {
	/// Creates a new builder seeded with the production endpoints.
	pub fn builder() -> ClientConfigBuilder {
		ClientConfigBuilder::default()
	}

	/// Total attempts a call may make.
	pub fn max_attempts(&self) -> u32 {
		self.max_retries.saturating_add(1)
	}
}

/// Builder for [`ClientConfig`] values.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
	/// Primary origin override.
	pub primary_endpoint: Option<Url>,
	/// Cache origin override.
	pub cache_endpoint: Option<Url>,
	/// Retry budget override.
	pub max_retries: Option<u32>,
	/// Transport timeout.
	pub timeout: Option<StdDuration>,
}
impl ClientConfigBuilder {
	/// Overrides the primary origin.
	pub fn primary_endpoint(mut self, url: Url) -> Self {
		self.primary_endpoint = Some(url);

		self
	}

	/// Overrides the cache origin.
	pub fn cache_endpoint(mut self, url: Url) -> Self {
		self.cache_endpoint = Some(url);

		self
	}

	/// Overrides the number of extra attempts (defaults to 3).
	pub fn max_retries(mut self, retries: u32) -> Self {
		self.max_retries = Some(retries);

		self
	}

	/// Sets the transport timeout.
	pub fn timeout(mut self, timeout: StdDuration) -> Self {
		self.timeout = Some(timeout);

		self
	}

	/// Consumes the builder and validates the resulting config.
	pub fn build(self) -> Result<ClientConfig, EndpointError> {
		let primary = resolve("primary", self.primary_endpoint, DEFAULT_PRIMARY_ENDPOINT)?;
		let cache = resolve("cache", self.cache_endpoint, DEFAULT_CACHE_ENDPOINT)?;

		Ok(ClientConfig {
			endpoints: ApiEndpoints { primary, cache },
			max_retries: self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
			timeout: self.timeout,
		})
	}
}

fn resolve(
	endpoint: &'static str,
	value: Option<Url>,
	default: &str,
) -> Result<Url, EndpointError> {
	let url = match value {
		Some(url) => url,
		None => Url::parse(default).map_err(|source| EndpointError::InvalidUrl { endpoint, source })?,
	};

	validate_endpoint(endpoint, &url)?;

	Ok(url)
}

fn validate_endpoint(endpoint: &'static str, url: &Url) -> Result<(), EndpointError> {
	if !matches!(url.scheme(), "http" | "https") {
		return Err(EndpointError::UnsupportedScheme { endpoint, url: url.to_string() });
	}
	if url.query().is_some() || url.fragment().is_some() {
		return Err(EndpointError::QueryNotAllowed { endpoint, url: url.to_string() });
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn url(value: &str) -> Url {
		Url::parse(value).expect("Fixture URL should parse.")
	}

	#[test]
	fn defaults_point_at_production() {
		let config = ClientConfig::builder().build().expect("Default config should build.");

		assert_eq!(config.endpoints.primary.as_str(), "https://api.ooyala.com/");
		assert_eq!(config.endpoints.cache.as_str(), "https://cdn-api.ooyala.com/");
		assert_eq!(config.max_retries, 3);
		assert_eq!(config.max_attempts(), 4);
		assert_eq!(config.timeout, None);
	}

	#[test]
	fn reads_use_cache_and_writes_use_primary() {
		let config = ClientConfig::builder().build().expect("Default config should build.");

		assert_eq!(config.endpoints.for_method(HttpMethod::Get), &config.endpoints.cache);

		for method in [HttpMethod::Post, HttpMethod::Put, HttpMethod::Patch, HttpMethod::Delete] {
			assert_eq!(config.endpoints.for_method(method), &config.endpoints.primary);
		}
	}

	#[test]
	fn builder_rejects_bad_endpoints() {
		let err = ClientConfig::builder()
			.primary_endpoint(url("ftp://api.example.com"))
			.build()
			.expect_err("Non-HTTP endpoints should be rejected.");

		assert!(matches!(err, EndpointError::UnsupportedScheme { endpoint: "primary", .. }));

		let err = ClientConfig::builder()
			.cache_endpoint(url("https://cdn.example.com/?x=1"))
			.build()
			.expect_err("Endpoints with queries should be rejected.");

		assert!(matches!(err, EndpointError::QueryNotAllowed { endpoint: "cache", .. }));
	}

	#[test]
	fn builder_applies_overrides() {
		let config = ClientConfig::builder()
			.primary_endpoint(url("http://127.0.0.1:9000"))
			.max_retries(0)
			.timeout(StdDuration::from_secs(5))
			.build()
			.expect("Overridden config should build.");

		assert_eq!(config.endpoints.primary.as_str(), "http://127.0.0.1:9000/");
		assert_eq!(config.max_attempts(), 1);
		assert_eq!(config.timeout, Some(StdDuration::from_secs(5)));
	}
}
