//! Parameter names and the canonical (byte-sorted) parameter map.

// std
use std::collections::btree_map::Iter;
// self
use crate::_prelude::*;

/// Public API key.
pub const API_KEY: &str = "api_key";
/// Absolute unix expiry of the signature.
pub const EXPIRES: &str = "expires";
/// Request signature.
pub const SIGNATURE: &str = "signature";
/// Query filter expression.
pub const WHERE: &str = "where";
/// Permission scope for user-facing requests.
pub const USER_PERMISSION: &str = "user_permission";
/// Page size.
pub const LIMIT: &str = "limit";
/// Opaque pagination cursor.
pub const PAGE_TOKEN: &str = "page_token";
/// Related resources to embed.
pub const INCLUDE: &str = "include";

/// Parameter map with unique names iterated in ascending byte order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiParams(BTreeMap<String, String>);
impl ApiParams {
	/// Creates an empty map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts or replaces a parameter.
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.0.insert(name.into(), value.into());
	}

	/// Looks up a parameter value.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.0.get(name).map(String::as_str)
	}

	/// Removes a parameter, returning its value.
	pub fn remove(&mut self, name: &str) -> Option<String> {
		self.0.remove(name)
	}

	/// Whether the parameter is present.
	pub fn contains(&self, name: &str) -> bool {
		self.0.contains_key(name)
	}

	/// Number of parameters.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Whether the map is empty.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates `(name, value)` pairs in canonical order.
	pub fn iter(&self) -> ApiParamsIter<'_> {
		ApiParamsIter(self.0.iter())
	}
}
impl<K, V> FromIterator<(K, V)> for ApiParams
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
	}
}
impl<'a> IntoIterator for &'a ApiParams {
	type IntoIter = ApiParamsIter<'a>;
	type Item = (&'a str, &'a str);

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Borrowing iterator over [`ApiParams`] in canonical order.
#[derive(Clone, Debug)]
pub struct ApiParamsIter<'a>(Iter<'a, String, String>);
impl<'a> Iterator for ApiParamsIter<'a> {
	type Item = (&'a str, &'a str);

	fn next(&mut self) -> Option<Self::Item> {
		self.0.next().map(|(k, v)| (k.as_str(), v.as_str()))
	}
}
