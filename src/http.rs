//! Transport primitives for signed API calls.
//!
//! The module exposes [`ApiHttpClient`] alongside the [`HttpRequest`]/[`HttpResponse`] pair so
//! downstream crates can plug in custom HTTP stacks (or scripted fakes in tests) without the
//! client depending on a particular implementation. The client treats any `Err` returned by
//! [`ApiHttpClient::execute`] as a transport failure and classifies `Ok` responses by status.

// self
use crate::{_prelude::*, request::HttpMethod};

/// `Content-Type` sent with every call.
pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

/// Boxed future returned by [`ApiHttpClient::execute`].
pub type HttpFuture<'a, E> = Pin<Box<dyn Future<Output = Result<HttpResponse, E>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing one signed request.
///
/// Implementations must be `Send + Sync + 'static` so a client can be shared across tasks, and
/// the returned future must be `Send` so callers can spawn it.
pub trait ApiHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Sends the request and returns the status, headers, and full body.
	fn execute(&self, request: HttpRequest) -> HttpFuture<'_, Self::TransportError>;
}

/// Fully assembled outbound request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
	/// HTTP verb.
	pub method: HttpMethod,
	/// Absolute URL including the signed query string.
	pub url: String,
	/// Headers in send order.
	pub headers: Vec<(&'static str, String)>,
	/// Raw payload.
	pub body: String,
}
impl HttpRequest {
	/// Builds a request carrying the JSON content type and the body's byte length.
	pub fn new(method: HttpMethod, url: impl Into<String>, body: impl Into<String>) -> Self {
		let body = body.into();
		let headers =
			vec![("Content-Length", body.len().to_string()), ("Content-Type", CONTENT_TYPE_JSON.into())];

		Self { method, url: url.into(), headers, body }
	}

	/// Returns the first header value matching `name` (ASCII case-insensitive).
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.iter().find(|(key, _)| key.eq_ignore_ascii_case(name)).map(|(_, v)| v.as_str())
	}
}

/// Raw response returned by a transport.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response headers with lowercase names; non-UTF-8 values are skipped.
	pub headers: Vec<(String, String)>,
	/// Body decoded as text.
	pub body: String,
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a client honoring the optional timeout.
	pub fn with_timeout(timeout: Option<std::time::Duration>) -> Result<Self> {
		let mut builder = ReqwestClient::builder();

		if let Some(timeout) = timeout {
			builder = builder.timeout(timeout);
		}

		let client = builder.build().map_err(crate::error::ConfigError::from)?;

		Ok(Self(client))
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl ApiHttpClient for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn execute(&self, request: HttpRequest) -> HttpFuture<'_, Self::TransportError> {
		Box::pin(async move {
			let method = match request.method {
				HttpMethod::Get => reqwest::Method::GET,
				HttpMethod::Post => reqwest::Method::POST,
				HttpMethod::Put => reqwest::Method::PUT,
				HttpMethod::Patch => reqwest::Method::PATCH,
				HttpMethod::Delete => reqwest::Method::DELETE,
			};
			let mut builder = self.0.request(method, &request.url);

			for (name, value) in &request.headers {
				builder = builder.header(*name, value);
			}

			let response = builder.body(request.body).send().await?;
			let status = response.status().as_u16();
			let headers = response
				.headers()
				.iter()
				.filter_map(|(name, value)| {
					value.to_str().ok().map(|value| (name.as_str().to_owned(), value.to_owned()))
				})
				.collect();
			let body = response.text().await?;

			Ok::<_, ReqwestError>(HttpResponse { status, headers, body })
		})
	}
}
