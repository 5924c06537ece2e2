//! Wire-format codecs for the OAuth 1.0 credential exchange.
//!
//! [`decode`] turns an `application/x-www-form-urlencoded`-shaped response body into a
//! [`ParameterStore`](crate::params::ParameterStore); [`encode`] turns a store back into the
//! canonical OAuth percent-encoded query string used for transport and signing.

pub mod decode;
pub mod encode;

pub use decode::*;
pub use encode::*;
