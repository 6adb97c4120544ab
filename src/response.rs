//! Successful call results and optional JSON decoding of the captured body.

// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{_prelude::*, http::HttpResponse};

/// Failures raised while decoding a captured body.
#[derive(Debug, ThisError)]
pub enum ResponseError {
	/// The call succeeded without capturing a body.
	#[error("Response with status {status} carries no captured body.")]
	MissingBody {
		/// Status of the response.
		status: u16,
	},
	/// The body is not valid JSON for the requested type.
	#[error("Response body is not valid JSON for the requested type.")]
	Parse {
		/// Structured parsing failure naming the offending path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}

/// Result of a successful call.
///
/// The body is captured only for `200 OK`. Other statuses the client does not map to an error
/// pass through with `body == None`; inspect [`ApiResponse::status`] to tell them apart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response headers (lowercase names).
	pub headers: Vec<(String, String)>,
	/// Raw body for `200 OK` responses.
	pub body: Option<String>,
	/// Attempts made, including the successful one.
	pub attempts: u32,
}
impl ApiResponse {
	pub(crate) fn from_http(response: HttpResponse, attempts: u32) -> Self {
		let HttpResponse { status, headers, body } = response;
		let body = (status == 200).then_some(body);

		Self { status, headers, body, attempts }
	}

	/// Whether the body was captured.
	pub fn has_body(&self) -> bool {
		self.body.is_some()
	}

	/// Returns the first header value matching `name` (ASCII case-insensitive).
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.iter().find(|(key, _)| key.eq_ignore_ascii_case(name)).map(|(_, v)| v.as_str())
	}

	/// Decodes the captured body as JSON.
	pub fn json<T>(&self) -> Result<T, ResponseError>
	where
		T: DeserializeOwned,
	{
		let body = self.body.as_deref().ok_or(ResponseError::MissingBody { status: self.status })?;
		let mut deserializer = serde_json::Deserializer::from_str(body);

		serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|source| ResponseError::Parse { source })
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[derive(Debug, Deserialize)]
	struct Asset {
		id: String,
		duration: u64,
	}

	fn response(status: u16, body: &str) -> ApiResponse {
		ApiResponse::from_http(
			HttpResponse {
				status,
				headers: vec![("content-type".into(), "application/json".into())],
				body: body.into(),
			},
			1,
		)
	}

	#[test]
	fn only_ok_captures_body() {
		assert_eq!(response(200, "{\"id\":\"a1\"}").body.as_deref(), Some("{\"id\":\"a1\"}"));
		assert!(!response(201, "{\"id\":\"a1\"}").has_body());
		assert!(!response(500, "oops").has_body());
		assert_eq!(response(302, "").header("Content-Type"), Some("application/json"));
	}

	#[test]
	fn json_decodes_and_reports_paths() {
		let asset: Asset = response(200, "{\"id\":\"a1\",\"duration\":12}")
			.json()
			.expect("Valid JSON should decode.");

		assert_eq!(asset.id, "a1");
		assert_eq!(asset.duration, 12);

		let err = response(200, "{\"id\":\"a1\",\"duration\":\"long\"}")
			.json::<Asset>()
			.expect_err("Mistyped field should fail.");

		match err {
			ResponseError::Parse { source } => assert_eq!(source.path().to_string(), "duration"),
			other => panic!("Unexpected error variant: {other:?}."),
		}
	}

	#[test]
	fn json_without_body_is_an_error() {
		let err = response(201, "").json::<Asset>().expect_err("Missing body should fail.");

		assert!(matches!(err, ResponseError::MissingBody { status: 201 }));
	}
}
