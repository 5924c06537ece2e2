//! Ordered parameter store backing a token's protocol fields.

// std
use std::{convert::Infallible, slice::Iter, vec::IntoIter};
// crates.io
use serde::{Deserializer, Serializer, ser::SerializeSeq};
// self
use crate::{_prelude::*, wire};

/// Ordered mapping of parameter keys to values with trim-on-write normalization.
///
/// Insertion order is preserved so serialization stays deterministic: the first write of a key
/// fixes its position and later writes overwrite the value in place. Every stored value has
/// leading and trailing `\n` characters removed, matching the normalization applied to secrets
/// before they participate in request signing.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ParameterStore {
	entries: Vec<(String, String)>,
}
impl ParameterStore {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Stores `value` under `key` with edge newlines trimmed, overwriting any prior value.
	///
	/// Returns the store for chaining. Any key and value are accepted; this never fails.
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
		let key = key.into();
		let value = value.into();
		let value = value.trim_matches('\n').to_owned();

		match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
			Some((_, slot)) => *slot = value,
			None => self.entries.push((key, value)),
		}

		self
	}

	/// Applies [`set`](Self::set) for every pair in iteration order; later duplicate keys win.
	pub fn set_all<I, K, V>(&mut self, pairs: I) -> &mut Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		for (key, value) in pairs {
			self.set(key, value);
		}

		self
	}

	/// Looks up the value stored under `key`; absent keys yield `None`, never a panic.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.entries.iter().find_map(|(k, v)| (k == key).then_some(v.as_str()))
	}

	/// Returns `true` if `key` has an entry, even an empty-valued one.
	pub fn contains_key(&self, key: &str) -> bool {
		self.entries.iter().any(|(k, _)| k == key)
	}

	/// Number of stored parameters.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if no parameters are stored.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterator over `(key, value)` pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}
}
impl Debug for ParameterStore {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let mut map = f.debug_map();

		for (key, value) in self.iter() {
			// Secret-bearing values stay out of logs.
			if key.ends_with("secret") {
				map.entry(&key, &"<redacted>");
			} else {
				map.entry(&key, &value);
			}
		}

		map.finish()
	}
}
impl FromStr for ParameterStore {
	type Err = Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(wire::decode_form_body(s.as_bytes()))
	}
}
impl<K, V> FromIterator<(K, V)> for ParameterStore
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
		let mut store = Self::new();

		store.set_all(pairs);

		store
	}
}
impl IntoIterator for ParameterStore {
	type IntoIter = IntoIter<(String, String)>;
	type Item = (String, String);

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}

/// Iterator over borrowed `(key, value)` pairs.
pub struct ParamIter<'a> {
	inner: Iter<'a, (String, String)>,
}
impl<'a> Iterator for ParamIter<'a> {
	type Item = (&'a str, &'a str);

	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next().map(|(k, v)| (k.as_str(), v.as_str()))
	}
}
impl<'a> IntoIterator for &'a ParameterStore {
	type IntoIter = ParamIter<'a>;
	type Item = (&'a str, &'a str);

	fn into_iter(self) -> Self::IntoIter {
		ParamIter { inner: self.entries.iter() }
	}
}
impl Serialize for ParameterStore {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;

		for pair in &self.entries {
			seq.serialize_element(pair)?;
		}

		seq.end()
	}
}
impl<'de> Deserialize<'de> for ParameterStore {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let pairs = <Vec<(String, String)>>::deserialize(deserializer)?;

		// Restoring through `set` re-applies trim-on-write, which is idempotent.
		Ok(pairs.into_iter().collect())
	}
}
