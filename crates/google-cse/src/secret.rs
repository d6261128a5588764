// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Redacting wrapper for the API key.
//!
//! The key is sent on every request as the `key` query parameter, so it sits
//! next to values that are routinely logged. [`ApiKey`] keeps it out of
//! `Debug`/`Display` output and `tracing` fields, and zeroes it on drop.
//!
//! ```
//! use google_cse::ApiKey;
//!
//! let key = ApiKey::new("AIza-secret");
//! assert_eq!(format!("{key}"), "[REDACTED]");
//! assert_eq!(key.expose(), "AIza-secret");
//! ```

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// The redaction placeholder used in all output.
pub const REDACTED: &str = "[REDACTED]";

/// A Google API key. Access requires an explicit [`ApiKey::expose`] call.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ApiKey {
	inner: String,
}

impl ApiKey {
	pub fn new(key: impl Into<String>) -> Self {
		Self { inner: key.into() }
	}

	/// Returns the raw key. Only the request builder should need this.
	pub fn expose(&self) -> &str {
		&self.inner
	}

	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}
}

impl From<String> for ApiKey {
	fn from(key: String) -> Self {
		Self::new(key)
	}
}

impl From<&str> for ApiKey {
	fn from(key: &str) -> Self {
		Self::new(key)
	}
}

impl fmt::Debug for ApiKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("ApiKey").field(&REDACTED).finish()
	}
}

impl fmt::Display for ApiKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(REDACTED)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn debug_is_redacted() {
		let key = ApiKey::new("AIzaSyExampleKey");
		let debug = format!("{key:?}");
		assert_eq!(debug, "ApiKey(\"[REDACTED]\")");
		assert!(!debug.contains("AIzaSyExampleKey"));
	}

	#[test]
	fn display_is_redacted() {
		assert_eq!(ApiKey::new("AIzaSyExampleKey").to_string(), REDACTED);
	}

	#[test]
	fn expose_returns_key() {
		let key: ApiKey = "abc".into();
		assert_eq!(key.expose(), "abc");
		assert!(!key.is_empty());
		assert!(ApiKey::new("").is_empty());
	}

	proptest! {
			/// Formatting never leaks the key, whatever it looks like.
			#[test]
			fn formatting_never_contains_key(inner in "[a-zA-Z0-9_-]{8,40}") {
					prop_assume!(!REDACTED.contains(&inner) && !"ApiKey".contains(&inner));
					let key = ApiKey::new(inner.clone());
					let debug = format!("{key:?}");
					let display = format!("{key}");
					prop_assert!(!debug.contains(&inner));
					prop_assert!(!display.contains(&inner));
			}
	}
}
