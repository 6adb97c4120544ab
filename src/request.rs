//! Per-call request context: verb, resource path, parameters, and payload.
//!
//! Every public client call receives an [`ApiCall`] by reference and derives the signed
//! parameters, signature, and final URL from it on each attempt. Nothing is cached on the
//! client, so a single [`crate::client::Client`] can serve concurrent calls.

pub mod params;
pub mod query;

pub use params::*;
pub use query::*;

// self
use crate::_prelude::*;

/// HTTP verbs supported by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
	/// Read a resource.
	Get,
	/// Create a resource.
	Post,
	/// Replace a resource.
	Put,
	/// Update part of a resource.
	Patch,
	/// Delete a resource.
	Delete,
}
impl HttpMethod {
	/// Returns the uppercase verb used on the wire and in the signature.
	pub const fn as_str(self) -> &'static str {
		match self {
			HttpMethod::Get => "GET",
			HttpMethod::Post => "POST",
			HttpMethod::Put => "PUT",
			HttpMethod::Patch => "PATCH",
			HttpMethod::Delete => "DELETE",
		}
	}

	/// Whether the verb is served from the cache-fronted endpoint.
	pub const fn is_read(self) -> bool {
		matches!(self, HttpMethod::Get)
	}

	/// Whether the verb refuses to run with an empty body.
	pub const fn requires_payload(self) -> bool {
		matches!(self, HttpMethod::Post | HttpMethod::Patch)
	}
}
impl Display for HttpMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Immutable description of one logical API call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiCall {
	/// Resource path, e.g. `/v2/assets`.
	pub path: String,
	/// Caller parameters; identity parameters are merged in at signing time.
	pub params: ApiParams,
	/// Raw serialized payload; empty when the call carries none.
	pub body: String,
}
impl ApiCall {
	/// Creates a call against the provided resource path.
	pub fn new(path: impl Into<String>) -> Self {
		Self { path: path.into(), ..Default::default() }
	}

	/// Adds or replaces an arbitrary parameter.
	///
	/// Names outside the URL allow-list are still signed but never sent.
	pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.params.insert(name, value);

		self
	}

	/// Sets the `where` filter; the value is query-escaped in the URL.
	pub fn filter_where(self, filter: impl Into<String>) -> Self {
		self.param(WHERE, filter)
	}

	/// Sets the `include` parameter.
	pub fn include(self, include: impl Into<String>) -> Self {
		self.param(INCLUDE, include)
	}

	/// Sets the `limit` parameter.
	pub fn limit(self, limit: u32) -> Self {
		self.param(LIMIT, limit.to_string())
	}

	/// Passes a pagination token through unchanged.
	pub fn page_token(self, token: impl Into<String>) -> Self {
		self.param(PAGE_TOKEN, token)
	}

	/// Sets the `user_permission` parameter.
	pub fn user_permission(self, permission: impl Into<String>) -> Self {
		self.param(USER_PERMISSION, permission)
	}

	/// Sets the raw payload.
	pub fn body(mut self, body: impl Into<String>) -> Self {
		self.body = body.into();

		self
	}

	/// Returns the caller parameters merged with the identity parameters.
	///
	/// `api_key` and `expires` always take the identity values, overriding caller entries.
	pub fn signed_params(&self, api_key: &str, expires: i64) -> ApiParams {
		let mut params = self.params.clone();

		params.insert(API_KEY, api_key);
		params.insert(EXPIRES, expires.to_string());

		params
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn method_labels_and_routing() {
		assert_eq!(HttpMethod::Patch.to_string(), "PATCH");
		assert!(HttpMethod::Get.is_read());
		assert!(!HttpMethod::Delete.is_read());
		assert!(HttpMethod::Post.requires_payload());
		assert!(HttpMethod::Patch.requires_payload());
		assert!(!HttpMethod::Put.requires_payload());
	}

	#[test]
	fn signed_params_force_identity_values() {
		let call = ApiCall::new("/v2/assets").param(API_KEY, "spoofed").limit(5);
		let params = call.signed_params("real-key", 1_700_000_000);

		assert_eq!(params.get(API_KEY), Some("real-key"));
		assert_eq!(params.get(EXPIRES), Some("1700000000"));
		assert_eq!(params.get(LIMIT), Some("5"));
		assert_eq!(call.params.get(EXPIRES), None);
	}
}
