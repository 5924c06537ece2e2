//! Token-core error types shared across the persistence boundary.
//!
//! Parsing a response body is deliberately lenient and infallible, and parameter lookups return
//! [`Option`], so the only fallible operations in this crate are the token snapshot helpers.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical token-core error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Token snapshot could not be serialized.
	#[error("Token snapshot could not be serialized.")]
	SnapshotSerialize {
		/// Underlying serialization failure.
		#[source]
		source: serde_json::Error,
	},
	/// Persisted token snapshot contains malformed JSON.
	#[error("Token snapshot contains malformed JSON.")]
	SnapshotParse {
		/// Structured parsing failure with the offending path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}
