//! Optional observability helpers for API calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` (on by default) to emit structured spans named `ooyala_v2.call` with the
//!   `operation` and `method` fields, a `debug` event per dispatched attempt, and a `warn` event
//!   per failed attempt.
//! - Enable `metrics` to increment the `ooyala_v2_call_total` counter for every
//!   attempt/retry/success/failure, labeled by `operation` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::{_prelude::*, request::HttpMethod};

/// Public client operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiOperation {
	/// Read a resource (`GET`).
	Fetch,
	/// Create a resource (`POST`).
	Create,
	/// Replace a resource (`PUT`).
	Replace,
	/// Update part of a resource (`PATCH`).
	Modify,
	/// Delete a resource (`DELETE`).
	Remove,
}
impl ApiOperation {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ApiOperation::Fetch => "fetch",
			ApiOperation::Create => "create",
			ApiOperation::Replace => "replace",
			ApiOperation::Modify => "modify",
			ApiOperation::Remove => "remove",
		}
	}

	/// Returns the verb the operation is sent with.
	pub const fn method(self) -> HttpMethod {
		match self {
			ApiOperation::Fetch => HttpMethod::Get,
			ApiOperation::Create => HttpMethod::Post,
			ApiOperation::Replace => HttpMethod::Put,
			ApiOperation::Modify => HttpMethod::Patch,
			ApiOperation::Remove => HttpMethod::Delete,
		}
	}
}
impl Display for ApiOperation {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to a client operation.
	Attempt,
	/// A failed attempt that will be retried.
	Retry,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Retry => "retry",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
