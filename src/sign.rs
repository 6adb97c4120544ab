//! Request signing.
//!
//! The canonical message is `secret || METHOD || path`, followed by every parameter as
//! `name=value` in ascending byte order of the names (values unescaped), followed by the raw
//! body. The signature is the standard base64 SHA-256 digest of that message with its single
//! padding character dropped, query-escaped for use in a URL.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
use sha2::{Digest, Sha256};
use url::form_urlencoded;
// self
use crate::{
	auth::ApiSecret,
	error::CryptoError,
	request::{ApiParams, HttpMethod},
};

/// Length of the unescaped signature.
pub const SIGNATURE_LEN: usize = 43;

/// Computes the query-escaped signature for one request.
pub fn compute_signature(
	secret: &ApiSecret,
	method: HttpMethod,
	path: &str,
	params: &ApiParams,
	body: &str,
) -> Result<String, CryptoError> {
	let raw = compute_raw_signature(secret, method, path, params, body)?;

	Ok(query_escape(&raw))
}

/// Computes the unescaped signature, always [`SIGNATURE_LEN`] characters long.
pub fn compute_raw_signature(
	secret: &ApiSecret,
	method: HttpMethod,
	path: &str,
	params: &ApiParams,
	body: &str,
) -> Result<String, CryptoError> {
	let message = canonical_message(secret, method, path, params, body);
	let mut hasher = Sha256::new();

	hasher.update(message.as_bytes());

	let mut encoded = STANDARD.encode(hasher.finalize());

	if encoded.len() < SIGNATURE_LEN {
		return Err(CryptoError::DigestTooShort { expected: SIGNATURE_LEN, actual: encoded.len() });
	}

	encoded.truncate(SIGNATURE_LEN);

	Ok(encoded)
}

/// Escapes a value for a query string (spaces become `+`, reserved bytes become `%XX`).
pub fn query_escape(value: &str) -> String {
	let mut escaped = String::with_capacity(value.len());

	// Form serialization leaves `*` raw and escapes `~`; query escaping does the opposite.
	for chunk in form_urlencoded::byte_serialize(value.as_bytes()) {
		match chunk {
			"%7E" => escaped.push('~'),
			chunk => escaped.push_str(&chunk.replace('*', "%2A")),
		}
	}

	escaped
}

fn canonical_message(
	secret: &ApiSecret,
	method: HttpMethod,
	path: &str,
	params: &ApiParams,
	body: &str,
) -> String {
	let mut message = String::with_capacity(
		secret.expose().len()
			+ path.len() + body.len()
			+ params.iter().map(|(k, v)| k.len() + v.len() + 1).sum::<usize>()
			+ 8,
	);

	message.push_str(secret.expose());
	message.push_str(method.as_str());
	message.push_str(path);

	// `ApiParams` iterates in byte order, which is the canonical order.
	for (name, value) in params {
		message.push_str(name);
		message.push('=');
		message.push_str(value);
	}

	message.push_str(body);

	message
}
