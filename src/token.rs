//! Validated facade over a parsed OAuth 1.0 credential.

// self
use crate::{
	_prelude::*,
	http::ResponseSource,
	params::ParameterStore,
	wire::{self, QueryStringEncoder},
};

/// Parameter key carrying the token identifier.
pub const TOKEN_PARAM_KEY: &str = "oauth_token";
/// Parameter key carrying the shared secret used when signing requests.
pub const TOKEN_SECRET_PARAM_KEY: &str = "oauth_token_secret";
/// Parameter key confirming the callback during the request-token step.
pub const TOKEN_PARAM_CALLBACK_CONFIRMED: &str = "oauth_callback_confirmed";

/// An OAuth 1.0 credential: a token identifier plus shared secret and protocol metadata.
///
/// Request and access tokens share this shape; only the usage context distinguishes them. The
/// token owns its [`ParameterStore`], shares the encoder collaborator, and keeps an optional
/// handle to the originating response for diagnostics — the body is decoded exactly once at
/// construction and never reparsed.
///
/// A token may exist in an invalid state: validity is a derived predicate recomputed by
/// [`is_valid`](Self::is_valid) on demand, never a constructor precondition.
#[derive(Clone)]
pub struct Token {
	params: ParameterStore,
	response: Option<Arc<dyn ResponseSource>>,
	encoder: Arc<dyn QueryStringEncoder>,
}
impl Token {
	/// Creates an empty token using the process default encoder.
	///
	/// This is the shape used by authorization flows that build a token to send rather than
	/// receive; populate it through the setters.
	pub fn new() -> Self {
		Self::with_encoder(wire::default_encoder())
	}

	/// Creates an empty token with an injected encoder collaborator.
	pub fn with_encoder(encoder: Arc<dyn QueryStringEncoder>) -> Self {
		Self { params: ParameterStore::new(), response: None, encoder }
	}

	/// Builds a token from a credential-exchange response using the process default encoder.
	pub fn from_response(response: Arc<dyn ResponseSource>) -> Self {
		Self::from_response_with_encoder(response, wire::default_encoder())
	}

	/// Builds a token from a credential-exchange response with an injected encoder.
	///
	/// The response body is decoded leniently; when the decoded store is non-empty its entries
	/// are merged into the token's own store. The response handle is retained for diagnostics.
	pub fn from_response_with_encoder(
		response: Arc<dyn ResponseSource>,
		encoder: Arc<dyn QueryStringEncoder>,
	) -> Self {
		let decoded = wire::decode_form_body(response.body());
		let mut token = Self { params: ParameterStore::new(), response: Some(response), encoder };

		if !decoded.is_empty() {
			token.params.set_all(decoded);
		}

		token
	}

	/// Rebuilds a token from persisted parameters.
	///
	/// Only the parameter store is ever persisted; the encoder is re-supplied by the caller and
	/// the originating response is gone for good.
	pub fn restore(params: ParameterStore, encoder: Arc<dyn QueryStringEncoder>) -> Self {
		Self { params, response: None, encoder }
	}

	/// Rebuilds a token from a JSON snapshot produced by [`snapshot`](Self::snapshot).
	pub fn restore_snapshot(
		snapshot: &str,
		encoder: Arc<dyn QueryStringEncoder>,
	) -> Result<Self> {
		let mut deserializer = serde_json::Deserializer::from_str(snapshot);
		let params = serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|source| Error::SnapshotParse { source })?;

		Ok(Self::restore(params, encoder))
	}

	/// Serializes the parameter store to a JSON snapshot.
	///
	/// Neither the encoder nor the response handle is part of the snapshot.
	pub fn snapshot(&self) -> Result<String> {
		serde_json::to_string(&self.params).map_err(|source| Error::SnapshotSerialize { source })
	}

	/// Checks the minimal structural correctness of the credential.
	///
	/// `true` iff `oauth_token` is present and non-empty and `oauth_token_secret` is present,
	/// possibly with an empty value. Recomputed from the current parameters on every call;
	/// callers decide whether an invalid token is fatal to their flow.
	pub fn is_valid(&self) -> bool {
		self.params.get(TOKEN_PARAM_KEY).is_some_and(|token| !token.is_empty())
			&& self.params.contains_key(TOKEN_SECRET_PARAM_KEY)
	}

	/// Returns the token identifier, if present.
	pub fn token(&self) -> Option<&str> {
		self.param(TOKEN_PARAM_KEY)
	}

	/// Sets the token identifier.
	pub fn set_token(&mut self, token: impl Into<String>) -> &mut Self {
		self.set_param(TOKEN_PARAM_KEY, token)
	}

	/// Returns the shared secret used when signing requests with this token, if present.
	pub fn token_secret(&self) -> Option<&str> {
		self.param(TOKEN_SECRET_PARAM_KEY)
	}

	/// Sets the shared secret used when signing requests with this token.
	pub fn set_token_secret(&mut self, secret: impl Into<String>) -> &mut Self {
		self.set_param(TOKEN_SECRET_PARAM_KEY, secret)
	}

	/// Returns `true` if the provider confirmed the callback during the request-token step.
	pub fn callback_confirmed(&self) -> bool {
		self.param(TOKEN_PARAM_CALLBACK_CONFIRMED)
			.is_some_and(|value| value.eq_ignore_ascii_case("true"))
	}

	/// Looks up any parameter, including provider-specific extension keys.
	pub fn param(&self, key: &str) -> Option<&str> {
		self.params.get(key)
	}

	/// Sets any parameter with edge-newline trimming applied.
	pub fn set_param(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
		self.params.set(key, value);

		self
	}

	/// Sets several parameters in iteration order; later duplicate keys win.
	pub fn set_params<I, K, V>(&mut self, pairs: I) -> &mut Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		self.params.set_all(pairs);

		self
	}

	/// Borrows the underlying parameter store.
	pub fn params(&self) -> &ParameterStore {
		&self.params
	}

	/// Returns the originating response handle, if this token was built from one.
	pub fn response(&self) -> Option<&dyn ResponseSource> {
		self.response.as_deref()
	}
}
impl Default for Token {
	fn default() -> Self {
		Self::new()
	}
}
impl Debug for Token {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Token")
			.field("token", &self.token())
			.field("token_secret", &self.token_secret().map(|_| "<redacted>"))
			.field("params", &self.params.len())
			.field("response_status", &self.response.as_ref().map(|response| response.status()))
			.finish()
	}
}
impl Display for Token {
	/// Canonical query-string representation, delegated to the encoder collaborator.
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.encoder.encode(&self.params))
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::http::RawResponse;

	fn token_from_body(body: &str) -> Token {
		Token::from_response(Arc::new(RawResponse::ok(body.as_bytes().to_vec())))
	}

	#[test]
	fn response_body_populates_typed_accessors() {
		let token = token_from_body("oauth_token=abc123&oauth_token_secret=s3cr3t");

		assert_eq!(token.token(), Some("abc123"));
		assert_eq!(token.token_secret(), Some("s3cr3t"));
		assert!(token.is_valid());
	}

	#[test]
	fn empty_token_value_fails_validity() {
		let token = token_from_body("oauth_token=&oauth_token_secret=x");

		assert!(!token.is_valid());
	}

	#[test]
	fn empty_secret_value_still_counts_as_present() {
		let token = token_from_body("oauth_token=abc&oauth_token_secret=");

		assert!(token.is_valid());
	}

	#[test]
	fn validity_is_recomputed_from_current_parameters() {
		let mut token = Token::new();

		assert!(!token.is_valid());

		token.set_token("abc").set_token_secret("xyz");

		assert!(token.is_valid());
	}

	#[test]
	fn empty_response_body_leaves_the_store_empty() {
		let token = token_from_body("");

		assert!(token.params().is_empty());
		assert!(!token.is_valid());
		assert_eq!(token.response().map(|response| response.status()), Some(200));
	}

	#[test]
	fn callback_confirmed_reads_leniently() {
		assert!(token_from_body("oauth_callback_confirmed=true").callback_confirmed());
		assert!(token_from_body("oauth_callback_confirmed=TRUE").callback_confirmed());
		assert!(!token_from_body("oauth_callback_confirmed=false").callback_confirmed());
		assert!(!token_from_body("oauth_token=abc").callback_confirmed());
	}

	#[test]
	fn display_delegates_to_the_encoder() {
		let mut token = Token::new();

		token.set_token("a b").set_param("x", "1&2");

		assert_eq!(token.to_string(), "oauth_token=a%20b&x=1%262");
	}

	#[test]
	fn debug_redacts_the_secret() {
		let token = token_from_body("oauth_token=abc&oauth_token_secret=s3cr3t");
		let rendered = format!("{token:?}");

		assert!(rendered.contains("<redacted>"));
		assert!(!rendered.contains("s3cr3t"));
	}

	#[test]
	fn snapshot_round_trip_keeps_parameters_only() {
		let mut original = token_from_body("oauth_token=abc&oauth_token_secret=s&extra=1");

		original.set_param("late", "2");

		let snapshot = original.snapshot().expect("Snapshot should serialize successfully.");
		let restored = Token::restore_snapshot(&snapshot, wire::default_encoder())
			.expect("Snapshot should deserialize successfully.");

		assert_eq!(restored.params(), original.params());
		assert!(restored.response().is_none(), "Response handles are never persisted.");
	}

	#[test]
	fn restore_snapshot_reports_malformed_json() {
		let err = Token::restore_snapshot("{not json", wire::default_encoder())
			.expect_err("Malformed snapshot must be rejected.");

		assert!(matches!(err, Error::SnapshotParse { .. }));
	}
}
