//! Final URL assembly.
//!
//! The query string has a fixed layout: `api_key`, optional `where`, `signature`, `expires`,
//! then the optional `user_permission`, `limit`, `page_token`, and `include` parameters. Any
//! other parameter is signed but never sent.

// self
use crate::{
	_prelude::*,
	request::{
		API_KEY, ApiParams, EXPIRES, INCLUDE, LIMIT, PAGE_TOKEN, SIGNATURE, USER_PERMISSION, WHERE,
	},
	sign,
};

/// Where a query slot takes its value from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SlotSource {
	Param,
	Signature,
}

/// Whether a slot is emitted when its value is absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Inclusion {
	Always,
	IfPresent,
}

/// How a slot value is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Encoding {
	/// Appended as-is; callers pre-escape reserved characters.
	Raw,
	Escaped,
}

#[derive(Clone, Copy, Debug)]
struct QuerySlot {
	name: &'static str,
	source: SlotSource,
	inclusion: Inclusion,
	encoding: Encoding,
}
impl QuerySlot {
	const fn param(name: &'static str, inclusion: Inclusion, encoding: Encoding) -> Self {
		Self { name, source: SlotSource::Param, inclusion, encoding }
	}
}

const QUERY_LAYOUT: [QuerySlot; 8] = [
	QuerySlot::param(API_KEY, Inclusion::Always, Encoding::Raw),
	QuerySlot::param(WHERE, Inclusion::IfPresent, Encoding::Escaped),
	QuerySlot {
		name: SIGNATURE,
		source: SlotSource::Signature,
		inclusion: Inclusion::Always,
		encoding: Encoding::Raw,
	},
	QuerySlot::param(EXPIRES, Inclusion::Always, Encoding::Raw),
	QuerySlot::param(USER_PERMISSION, Inclusion::IfPresent, Encoding::Raw),
	QuerySlot::param(LIMIT, Inclusion::IfPresent, Encoding::Raw),
	QuerySlot::param(PAGE_TOKEN, Inclusion::IfPresent, Encoding::Raw),
	QuerySlot::param(INCLUDE, Inclusion::IfPresent, Encoding::Raw),
];

/// Whether a parameter name can appear in the final URL.
pub fn is_sent(name: &str) -> bool {
	QUERY_LAYOUT.iter().any(|slot| slot.source == SlotSource::Param && slot.name == name)
}

/// Builds the absolute request URL.
///
/// `signature` must already be query-escaped, as returned by [`sign::compute_signature`].
/// A trailing `/` on `base` is dropped before `path` is appended.
pub fn assemble_url(base: &Url, path: &str, params: &ApiParams, signature: &str) -> String {
	let mut url = String::from(base.as_str().trim_end_matches('/'));

	url.push_str(path);

	let mut separator = '?';

	for slot in QUERY_LAYOUT {
		let value = match slot.source {
			SlotSource::Param => params.get(slot.name),
			SlotSource::Signature => Some(signature),
		};
		let value = match (value, slot.inclusion) {
			(Some(value), _) => value,
			(None, Inclusion::Always) => "",
			(None, Inclusion::IfPresent) => continue,
		};

		url.push(separator);
		url.push_str(slot.name);
		url.push('=');

		match slot.encoding {
			Encoding::Raw => url.push_str(value),
			Encoding::Escaped => url.push_str(&sign::query_escape(value)),
		}

		separator = '&';
	}

	url
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn base() -> Url {
		Url::parse("https://api.example.com").expect("Fixture base URL should parse.")
	}

	fn identity() -> ApiParams {
		[(API_KEY, "key"), (EXPIRES, "1700000000")].into_iter().collect()
	}

	#[test]
	fn minimal_url_has_fixed_prefix() {
		let url = assemble_url(&base(), "/v2/assets", &identity(), "sig%2B");

		assert_eq!(
			url,
			"https://api.example.com/v2/assets?api_key=key&signature=sig%2B&expires=1700000000"
		);
	}

	#[test]
	fn where_follows_api_key_and_is_escaped() {
		let mut params = identity();

		params.insert(WHERE, "asset_type='video' AND duration > 10");

		let url = assemble_url(&base(), "/v2/assets", &params, "sig");

		assert_eq!(
			url,
			"https://api.example.com/v2/assets?api_key=key&where=asset_type%3D%27video%27+AND+duration+%3E+10&signature=sig&expires=1700000000"
		);
	}

	#[test]
	fn optional_params_use_fixed_order_and_drop_unknown() {
		let mut params = identity();

		params.insert(INCLUDE, "metadata,labels");
		params.insert("foo", "bar");
		params.insert(LIMIT, "50");
		params.insert(PAGE_TOKEN, "tok");
		params.insert(USER_PERMISSION, "read");

		let url = assemble_url(&base(), "/v2/assets", &params, "sig");

		assert!(url.ends_with(
			"&expires=1700000000&user_permission=read&limit=50&page_token=tok&include=metadata,labels"
		));
		assert!(!url.contains("foo="));
	}

	#[test]
	fn optional_values_are_not_escaped() {
		let mut params = identity();

		params.insert(INCLUDE, "a b");

		let url = assemble_url(&base(), "/v2/assets", &params, "sig");

		assert!(url.ends_with("&include=a b"));
	}

	#[test]
	fn trailing_slash_on_base_is_trimmed() {
		let base = Url::parse("http://127.0.0.1:8080/proxy/").expect("Fixture URL should parse.");
		let url = assemble_url(&base, "/v2/labels", &identity(), "sig");

		assert!(url.starts_with("http://127.0.0.1:8080/proxy/v2/labels?api_key=key&"));
	}

	#[test]
	fn allow_list_membership() {
		for name in [API_KEY, EXPIRES, WHERE, USER_PERMISSION, LIMIT, PAGE_TOKEN, INCLUDE] {
			assert!(is_sent(name), "{name} should be sent.");
		}

		assert!(!is_sent("foo"));
		assert!(!is_sent("orderby"));
	}
}
