//! API key + secret pairs and their environment loaders.

// self
use crate::{_prelude::*, auth::ApiSecret, error::ConfigError};

/// Environment variable holding the public API key.
pub const API_KEY_ENV: &str = "OOYALA_API_KEY";
/// Environment variable holding the API secret.
pub const API_SECRET_ENV: &str = "OOYALA_API_SECRET";

/// Identity used to sign every request.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiCredentials {
	/// Public API key, sent as the `api_key` query parameter.
	pub api_key: String,
	/// Private secret, used only as the signature prefix.
	pub api_secret: ApiSecret,
}
impl ApiCredentials {
	/// Creates credentials from an API key and secret.
	pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
		Self { api_key: api_key.into(), api_secret: ApiSecret::new(api_secret) }
	}

	/// Loads credentials from `OOYALA_API_KEY` and `OOYALA_API_SECRET`.
	pub fn from_env() -> Result<Self> {
		Self::from_lookup(|name| std::env::var(name).ok())
	}

	/// Loads credentials through an arbitrary variable lookup.
	///
	/// Empty values count as missing.
	pub fn from_lookup<F>(lookup: F) -> Result<Self>
	where
		F: Fn(&str) -> Option<String>,
	{
		let read = |name: &'static str| {
			lookup(name).filter(|value| !value.is_empty()).ok_or(ConfigError::MissingEnv { name })
		};
		let api_key = read(API_KEY_ENV)?;
		let api_secret = read(API_SECRET_ENV)?;

		Ok(Self::new(api_key, api_secret))
	}
}
impl Debug for ApiCredentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ApiCredentials")
			.field("api_key", &self.api_key)
			.field("api_secret", &self.api_secret)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn lookup_reads_both_variables() {
		let credentials = ApiCredentials::from_lookup(|name| match name {
			API_KEY_ENV => Some("key-1".into()),
			API_SECRET_ENV => Some("secret-1".into()),
			_ => None,
		})
		.expect("Lookup with both variables should succeed.");

		assert_eq!(credentials.api_key, "key-1");
		assert_eq!(credentials.api_secret.expose(), "secret-1");
	}

	#[test]
	fn lookup_rejects_missing_or_empty_values() {
		let err = ApiCredentials::from_lookup(|_| None)
			.expect_err("Lookup without variables should fail.");

		assert!(matches!(err, Error::Config(ConfigError::MissingEnv { name: API_KEY_ENV })));

		let err = ApiCredentials::from_lookup(|name| match name {
			API_KEY_ENV => Some("key-1".into()),
			_ => Some(String::new()),
		})
		.expect_err("Empty secret should be rejected.");

		assert!(matches!(err, Error::Config(ConfigError::MissingEnv { name: API_SECRET_ENV })));
	}

	#[test]
	fn debug_output_redacts_secret() {
		let credentials = ApiCredentials::new("visible-key", "hidden-secret");
		let rendered = format!("{credentials:?}");

		assert!(rendered.contains("visible-key"));
		assert!(!rendered.contains("hidden-secret"));
	}
}
