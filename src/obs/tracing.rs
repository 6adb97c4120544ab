// self
use crate::{_prelude::*, obs::ApiOperation};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedCall<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedCall<F> = F;

/// A span builder used by client operations.
#[derive(Clone, Debug)]
pub struct CallSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl CallSpan {
	/// Creates a new span tagged with the operation, its verb, and the resource path.
	pub fn new(operation: ApiOperation, path: &str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"ooyala_v2.call",
				operation = operation.as_str(),
				method = operation.method().as_str(),
				path
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (operation, path);

			Self {}
		}
	}

	/// Enters the span for synchronous sections.
	pub fn entered(self) -> CallSpanGuard {
		#[cfg(feature = "tracing")]
		{
			CallSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			CallSpanGuard {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedCall<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// RAII guard returned by [`CallSpan::entered`].
pub struct CallSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for CallSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("CallSpanGuard(..)")
	}
}

/// Emits a `debug` event for an attempt about to be sent.
///
/// The URL carries the signature but never the secret.
pub fn record_dispatch(attempt: u32, url: &str) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(attempt, url, "dispatching request");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (attempt, url);
	}
}

/// Emits a `warn` event for a failed attempt.
pub fn record_attempt_failure(attempt: u32, max_attempts: u32, error: &Error) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(attempt, max_attempts, error = %error, "request attempt failed");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (attempt, max_attempts, error);
	}
}
