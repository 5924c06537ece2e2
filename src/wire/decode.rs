//! Lenient decoder for credential-exchange response bodies.

// crates.io
use percent_encoding::percent_decode;
// self
use crate::params::ParameterStore;

/// Decodes a `key=value&key=value` response body into a [`ParameterStore`].
///
/// Decoding is raw percent-decoding: `+` is a literal plus, never a space. Keys and values are
/// decoded independently and inserted in the order their segments appear, so duplicate keys
/// resolve last-wins through the store's overwrite semantics.
///
/// The decoder recovers from minimally malformed input instead of failing:
///
/// - An empty or whitespace-only body yields an empty store.
/// - A segment without `=` is kept with an empty value.
/// - Zero-length segments (`a=1&&b=2`) are skipped.
/// - Decoded bytes that are not valid UTF-8 are replaced lossily.
pub fn decode_form_body(body: &[u8]) -> ParameterStore {
	let mut store = ParameterStore::new();
	let body = body.trim_ascii();

	if body.is_empty() {
		return store;
	}

	for segment in body.split(|&byte| byte == b'&') {
		if segment.is_empty() {
			continue;
		}

		// Only the first `=` separates key from value; the rest belongs to the value.
		let (raw_key, raw_value) = match segment.iter().position(|&byte| byte == b'=') {
			Some(split) => (&segment[..split], &segment[split + 1..]),
			None => {
				#[cfg(feature = "tracing")]
				tracing::debug!(
					segment = %String::from_utf8_lossy(segment),
					"Recovered a body segment without `=` as an empty value."
				);

				(segment, &b""[..])
			},
		};

		store.set(decode_component(raw_key), decode_component(raw_value));
	}

	store
}

fn decode_component(raw: &[u8]) -> String {
	percent_decode(raw).decode_utf8_lossy().into_owned()
}
