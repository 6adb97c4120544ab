//! The signed API client and its public verbs.
//!
//! [`Client`] holds only immutable identity (credentials, absolute expiry, endpoints, retry
//! budget) plus the transport. Each verb takes an [`ApiCall`] by reference and, on every
//! attempt, re-derives the signed parameters, signature, and URL from it before sending.
//! Calls therefore never observe each other's state and a client can be shared across tasks.
//!
//! The expiry is fixed when the client is built. Once it passes, the service rejects every
//! signature (usually as [`crate::error::StatusError::NotAuthorized`]); build a new client.

mod dispatch;

pub use dispatch::*;

// self
use crate::{
	_prelude::*,
	auth::ApiCredentials,
	config::ClientConfig,
	error::ValidationError,
	http::ApiHttpClient,
	obs::{self, ApiOperation, CallOutcome, CallSpan},
	request::ApiCall,
	response::ApiResponse,
};
#[cfg(feature = "reqwest")]
use crate::{error::ConfigError, http::ReqwestHttpClient};

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestApiClient = Client<ReqwestHttpClient>;

/// Signed, retrying client for one API identity.
#[derive(Clone)]
pub struct Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// HTTP transport used for every outbound call.
	pub http_client: Arc<C>,
	credentials: ApiCredentials,
	expires_at: OffsetDateTime,
	config: ClientConfig,
}
impl<C> Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Creates a client over a caller-provided transport.
	///
	/// The signature expiry is computed once, as now plus `ttl`.
	pub fn with_http_client(
		credentials: ApiCredentials,
		ttl: Duration,
		config: ClientConfig,
		http_client: impl Into<Arc<C>>,
	) -> Self {
		Self {
			http_client: http_client.into(),
			credentials,
			expires_at: OffsetDateTime::now_utc().saturating_add(ttl),
			config,
		}
	}

	/// Pins the signature expiry to an absolute instant.
	pub fn with_expires_at(mut self, expires_at: OffsetDateTime) -> Self {
		self.expires_at = expires_at;

		self
	}

	/// Credentials used for signing.
	pub fn credentials(&self) -> &ApiCredentials {
		&self.credentials
	}

	/// Active configuration.
	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	/// Absolute signature expiry.
	pub fn expires_at(&self) -> OffsetDateTime {
		self.expires_at
	}

	/// Signature expiry as sent in the `expires` parameter.
	pub fn expires(&self) -> i64 {
		self.expires_at.unix_timestamp()
	}

	/// Whether the expiry has passed; the service rejects every call from then on.
	pub fn is_expired(&self) -> bool {
		self.expires_at <= OffsetDateTime::now_utc()
	}

	/// Reads a resource through the cache endpoint (`GET`).
	pub async fn fetch(&self, call: &ApiCall) -> Result<ApiResponse> {
		self.execute(ApiOperation::Fetch, call).await
	}

	/// Creates a resource (`POST`); the body must not be empty.
	pub async fn create(&self, call: &ApiCall) -> Result<ApiResponse> {
		self.execute(ApiOperation::Create, call).await
	}

	/// Replaces a resource (`PUT`).
	pub async fn replace(&self, call: &ApiCall) -> Result<ApiResponse> {
		self.execute(ApiOperation::Replace, call).await
	}

	/// Updates part of a resource (`PATCH`); the body must not be empty.
	pub async fn modify(&self, call: &ApiCall) -> Result<ApiResponse> {
		self.execute(ApiOperation::Modify, call).await
	}

	/// Deletes a resource (`DELETE`).
	pub async fn remove(&self, call: &ApiCall) -> Result<ApiResponse> {
		self.execute(ApiOperation::Remove, call).await
	}

	async fn execute(&self, operation: ApiOperation, call: &ApiCall) -> Result<ApiResponse> {
		let span = CallSpan::new(operation, &call.path);

		obs::record_call_outcome(operation, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				let method = operation.method();

				if method.requires_payload() && call.body.is_empty() {
					return Err(ValidationError::MissingPayload { method }.into());
				}

				self.send_with_retry(operation, call).await
			})
			.await;

		match &result {
			Ok(_) => obs::record_call_outcome(operation, CallOutcome::Success),
			Err(_) => obs::record_call_outcome(operation, CallOutcome::Failure),
		}

		result
	}
}
#[cfg(feature = "reqwest")]
impl Client<ReqwestHttpClient> {
	/// Creates a client against the production endpoints with a reqwest transport.
	pub fn new(credentials: ApiCredentials, ttl: Duration) -> Result<Self> {
		let config = ClientConfig::builder().build().map_err(ConfigError::from)?;

		Self::with_config(credentials, ttl, config)
	}

	/// Creates a reqwest-backed client with a custom configuration.
	pub fn with_config(
		credentials: ApiCredentials,
		ttl: Duration,
		config: ClientConfig,
	) -> Result<Self> {
		let http_client = ReqwestHttpClient::with_timeout(config.timeout)?;

		Ok(Self::with_http_client(credentials, ttl, config, http_client))
	}
}
impl<C> Debug for Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client")
			.field("credentials", &self.credentials)
			.field("expires_at", &self.expires_at)
			.field("config", &self.config)
			.finish()
	}
}
