//! OAuth-strict query-string encoding over parameter stores.

// crates.io
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
// self
use crate::{_prelude::*, params::ParameterStore};

/// Characters escaped by OAuth percent-encoding: everything except ALPHA, DIGIT, `-`, `.`, `_`,
/// and `~`. Stricter than form encoding, so a space becomes `%20`, never `+`.
const OAUTH_ENCODE_SET: &AsciiSet =
	&NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Encoder collaborator turning a [`ParameterStore`] into a canonical query string.
///
/// The token facade depends only on this contract; the default implementation lives in this
/// crate, but signing utilities may substitute their own as long as pair order follows the
/// store's iteration order.
pub trait QueryStringEncoder
where
	Self: Send + Sync,
{
	/// Produces `key=value` pairs joined by `&` with both halves OAuth percent-encoded.
	fn encode(&self, params: &ParameterStore) -> String;
}

/// Default [`QueryStringEncoder`] applying the OAuth unreserved-character rule.
#[derive(Clone, Copy, Debug, Default)]
pub struct PercentQueryEncoder;
impl QueryStringEncoder for PercentQueryEncoder {
	fn encode(&self, params: &ParameterStore) -> String {
		params
			.iter()
			.map(|(key, value)| {
				format!(
					"{}={}",
					utf8_percent_encode(key, OAUTH_ENCODE_SET),
					utf8_percent_encode(value, OAUTH_ENCODE_SET),
				)
			})
			.collect::<Vec<_>>()
			.join("&")
	}
}

/// Returns the process-wide default encoder instance.
///
/// Supplied only at the boundary where a token is first constructed; a restored token never
/// re-acquires an encoder implicitly and must be handed one by its caller.
pub fn default_encoder() -> Arc<dyn QueryStringEncoder> {
	static DEFAULT: OnceLock<Arc<dyn QueryStringEncoder>> = OnceLock::new();

	DEFAULT.get_or_init(|| Arc::new(PercentQueryEncoder)).clone()
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn encodes_space_as_percent_twenty() {
		let store = ParameterStore::from_iter([("k", "a b")]);

		assert_eq!(PercentQueryEncoder.encode(&store), "k=a%20b");
	}

	#[test]
	fn unreserved_characters_pass_through() {
		let store = ParameterStore::from_iter([("AZaz09-._~", "AZaz09-._~")]);

		assert_eq!(PercentQueryEncoder.encode(&store), "AZaz09-._~=AZaz09-._~");
	}

	#[test]
	fn reserved_characters_are_escaped() {
		let store = ParameterStore::from_iter([("k", "a&b=c+d/e")]);

		assert_eq!(PercentQueryEncoder.encode(&store), "k=a%26b%3Dc%2Bd%2Fe");
	}

	#[test]
	fn pair_order_follows_store_iteration_order() {
		let store = ParameterStore::from_iter([("b", "2"), ("a", "1")]);

		assert_eq!(PercentQueryEncoder.encode(&store), "b=2&a=1");
	}

	#[test]
	fn empty_store_encodes_to_empty_string() {
		assert_eq!(PercentQueryEncoder.encode(&ParameterStore::new()), "");
	}

	#[test]
	fn default_encoder_is_shared() {
		let lhs = default_encoder();
		let rhs = default_encoder();

		assert!(Arc::ptr_eq(&lhs, &rhs));
	}
}
