//! Response collaborator contract between the transport and the token core.
//!
//! The HTTP exchange itself happens outside this crate. Whatever transport performs it hands the
//! core something implementing [`ResponseSource`]; the core reads the body once at construction
//! and otherwise treats the response as an opaque diagnostic handle.

// self
use crate::_prelude::*;

/// Minimal view of an HTTP response as consumed by the token core.
///
/// Implementations must be `Send + Sync` so tokens holding a response handle can move across
/// threads.
pub trait ResponseSource
where
	Self: Send + Sync,
{
	/// HTTP status code of the exchange.
	fn status(&self) -> u16;

	/// Raw response body bytes.
	fn body(&self) -> &[u8];
}

/// Owned response value for custom transports and tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
	status: u16,
	body: Vec<u8>,
}
impl RawResponse {
	/// Wraps a status code and body.
	pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
		Self { status, body: body.into() }
	}

	/// Convenience constructor for a `200 OK` response.
	pub fn ok(body: impl Into<Vec<u8>>) -> Self {
		Self::new(200, body)
	}
}
impl ResponseSource for RawResponse {
	fn status(&self) -> u16 {
		self.status
	}

	fn body(&self) -> &[u8] {
		&self.body
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn raw_response_exposes_status_and_body() {
		let response = RawResponse::ok("oauth_token=abc");

		assert_eq!(response.status(), 200);
		assert_eq!(response.body(), b"oauth_token=abc");

		let source: Arc<dyn ResponseSource> = Arc::new(response);

		assert_eq!(source.status(), 200);
	}
}
