//! Signing secret wrapper that redacts sensitive material.

// self
use crate::_prelude::*;

/// Redacted API secret keeping signing material out of logs.
///
/// The secret only ever feeds the signature digest; it is never placed on the wire.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSecret(String);
impl ApiSecret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner secret value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for ApiSecret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for ApiSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("ApiSecret").field(&"<redacted>").finish()
	}
}
impl Display for ApiSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
