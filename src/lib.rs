//! OAuth 1.0 credential-token core—lenient response-body parsing, ordered parameter stores, and
//! OAuth-strict query encoding behind one validated token facade.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod error;
pub mod http;
pub mod params;
pub mod token;
pub mod wire;

mod _prelude {
	pub use std::{
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		str::FromStr,
		sync::{Arc, OnceLock},
	};

	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;

	pub use crate::error::{Error, Result};
}

pub use percent_encoding;
