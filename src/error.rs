//! Client-level error types shared across signing, dispatch, and configuration.

// self
use crate::{_prelude::*, request::HttpMethod};

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Request rejected locally before any network call.
	#[error(transparent)]
	Validation(#[from] ValidationError),
	/// Transport failure (DNS, TCP, TLS, body read).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Remote service answered with a status the client maps to a failure.
	#[error(transparent)]
	Status(#[from] StatusError),
	/// Signature could not be produced.
	#[error(transparent)]
	Crypto(#[from] CryptoError),
	/// Captured response body could not be decoded.
	#[error(transparent)]
	Response(#[from] crate::response::ResponseError),
}
impl Error {
	/// Returns the mapped status failure, if this error carries one.
	pub fn status(&self) -> Option<StatusError> {
		match self {
			Self::Status(status) => Some(*status),
			_ => None,
		}
	}
}

/// Configuration and construction failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Endpoint configuration is invalid.
	#[error(transparent)]
	Endpoint(#[from] crate::config::EndpointError),
	/// A credential environment variable is missing or empty.
	#[error("Environment variable `{name}` is not set.")]
	MissingEnv {
		/// Variable name that was looked up.
		name: &'static str,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Local precondition failures; these never reach the network.
#[derive(Debug, PartialEq, Eq, ThisError)]
pub enum ValidationError {
	/// Create and modify calls require a payload.
	#[error("The {method} request requires a payload but the body is empty.")]
	MissingPayload {
		/// Method of the rejected call.
		method: HttpMethod,
	},
}

/// Transport-level failures.
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}

/// HTTP statuses the API documents as failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ThisError)]
pub enum StatusError {
	/// `204 No Content`.
	#[error("API returned no content.")]
	NoContent,
	/// `400 Bad Request`.
	#[error("API rejected the request as malformed.")]
	BadRequest,
	/// `401 Unauthorized`; usually a bad signature or an elapsed expiry.
	#[error("API rejected the request as not authorized.")]
	NotAuthorized,
	/// `403 Forbidden`.
	#[error("API denied access to the resource.")]
	Forbidden,
	/// `404 Not Found`.
	#[error("API resource was not found.")]
	NotFound,
	/// `429 Too Many Requests`; the account ran out of API credits.
	#[error("API credits are insufficient for the request.")]
	InsufficientCredits,
}
impl StatusError {
	/// Maps a status code onto a failure, returning `None` for codes with no mapping.
	pub const fn from_status(status: u16) -> Option<Self> {
		match status {
			204 => Some(Self::NoContent),
			400 => Some(Self::BadRequest),
			401 => Some(Self::NotAuthorized),
			403 => Some(Self::Forbidden),
			404 => Some(Self::NotFound),
			429 => Some(Self::InsufficientCredits),
			_ => None,
		}
	}

	/// Returns the HTTP status code this failure was mapped from.
	pub const fn status(self) -> u16 {
		match self {
			Self::NoContent => 204,
			Self::BadRequest => 400,
			Self::NotAuthorized => 401,
			Self::Forbidden => 403,
			Self::NotFound => 404,
			Self::InsufficientCredits => 429,
		}
	}
}

/// Failures while producing a request signature.
#[derive(Debug, PartialEq, Eq, ThisError)]
pub enum CryptoError {
	/// Encoded digest is shorter than the signature length.
	#[error("Encoded digest has {actual} characters; at least {expected} are required.")]
	DigestTooShort {
		/// Required length.
		expected: usize,
		/// Observed length.
		actual: usize,
	},
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn status_mapping_covers_documented_codes() {
		for code in [204, 400, 401, 403, 404, 429] {
			let mapped = StatusError::from_status(code).expect("Documented code should map.");

			assert_eq!(mapped.status(), code);
		}

		assert_eq!(StatusError::from_status(404), Some(StatusError::NotFound));
		assert_eq!(StatusError::from_status(429), Some(StatusError::InsufficientCredits));
		assert_eq!(StatusError::from_status(200), None);
		assert_eq!(StatusError::from_status(500), None);
	}

	#[test]
	fn error_status_accessor_only_matches_status_errors() {
		let err = Error::from(StatusError::Forbidden);

		assert_eq!(err.status(), Some(StatusError::Forbidden));

		let err = Error::from(ValidationError::MissingPayload { method: HttpMethod::Post });

		assert_eq!(err.status(), None);
		assert_eq!(err.to_string(), "The POST request requires a payload but the body is empty.");
	}
}
