//! Per-attempt request preparation, the bounded retry loop, and status classification.

// self
use crate::{
	_prelude::*,
	client::Client,
	error::{StatusError, TransportError},
	http::{ApiHttpClient, HttpRequest, HttpResponse},
	obs::{self, ApiOperation, CallOutcome},
	request::{self, ApiCall, HttpMethod},
	response::ApiResponse,
	sign,
};

/// Fully signed request for a single attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedRequest {
	/// HTTP verb.
	pub method: HttpMethod,
	/// Query-escaped signature.
	pub signature: String,
	/// Absolute URL carrying the signed query string.
	pub url: String,
	/// Raw payload.
	pub body: String,
}
impl PreparedRequest {
	/// Converts into the transport request, adding the length and content-type headers.
	pub fn into_http_request(self) -> HttpRequest {
		HttpRequest::new(self.method, self.url, self.body)
	}
}

impl<C> Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Signs `call` for `method` and assembles its final URL without sending anything.
	///
	/// GET calls target the cache endpoint; every other verb targets the primary endpoint.
	pub fn prepare(&self, method: HttpMethod, call: &ApiCall) -> Result<PreparedRequest> {
		let params = call.signed_params(&self.credentials.api_key, self.expires());
		let signature = sign::compute_signature(
			&self.credentials.api_secret,
			method,
			&call.path,
			&params,
			&call.body,
		)?;
		let base = self.config.endpoints.for_method(method);
		let url = request::assemble_url(base, &call.path, &params, &signature);

		Ok(PreparedRequest { method, signature, url, body: call.body.clone() })
	}

	/// Runs sign + build + send until success or until the attempt budget is spent.
	///
	/// Every error is retried, mapped statuses included, with no delay between attempts. The
	/// error from the last attempt is returned.
	pub(crate) async fn send_with_retry(
		&self,
		operation: ApiOperation,
		call: &ApiCall,
	) -> Result<ApiResponse> {
		let method = operation.method();
		let max_attempts = self.config.max_attempts();
		let mut attempt = 0;

		loop {
			attempt += 1;

			match self.attempt(method, call, attempt).await {
				Ok(response) => return Ok(ApiResponse::from_http(response, attempt)),
				Err(err) => {
					obs::record_attempt_failure(attempt, max_attempts, &err);

					if attempt >= max_attempts {
						return Err(err);
					}

					obs::record_call_outcome(operation, CallOutcome::Retry);
				},
			}
		}
	}

	async fn attempt(&self, method: HttpMethod, call: &ApiCall, attempt: u32) -> Result<HttpResponse> {
		let prepared = self.prepare(method, call)?;

		obs::record_dispatch(attempt, &prepared.url);

		let response = self
			.http_client
			.execute(prepared.into_http_request())
			.await
			.map_err(TransportError::network)?;

		classify(response)
	}
}

/// Maps documented failure statuses onto [`StatusError`]; every other status passes through.
pub(crate) fn classify(response: HttpResponse) -> Result<HttpResponse> {
	match StatusError::from_status(response.status) {
		Some(err) => Err(err.into()),
		None => Ok(response),
	}
}
