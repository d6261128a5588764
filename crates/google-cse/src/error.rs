// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the Google Custom Search client.

use std::fmt;

use thiserror::Error;

/// A precondition on a request or parameter object was violated.
///
/// Raised before any network I/O. `field` names the offending input using its
/// internal (snake_case) name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {message}")]
pub struct ValidationError {
	pub field: &'static str,
	pub message: String,
}

impl ValidationError {
	pub fn new(field: &'static str, message: impl Into<String>) -> Self {
		Self {
			field,
			message: message.into(),
		}
	}
}

/// Coarse classification of a [`CseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	/// Caller input was rejected before the request was sent.
	Validation,
	/// The HTTP exchange failed or returned a non-success status.
	Network,
	/// The response body did not match the response model.
	Decode,
}

impl fmt::Display for ErrorKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			ErrorKind::Validation => "validation",
			ErrorKind::Network => "network",
			ErrorKind::Decode => "decode",
		};
		f.write_str(name)
	}
}

/// Errors that can occur when interacting with the Google CSE API.
#[derive(Debug, Error)]
pub enum CseError {
	/// Request or parameter validation failed.
	#[error("Validation error: {0}")]
	Validation(#[from] ValidationError),

	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Request timed out.
	#[error("Request timed out")]
	Timeout,

	/// Rate limit or daily quota exceeded.
	#[error("Rate limit exceeded: {message}")]
	RateLimited { message: String },

	/// Invalid API key or CSE ID.
	#[error("Invalid API key or CSE ID: {message}")]
	Unauthorized { message: String },

	/// Google API returned an error status.
	#[error("Google API error: {status} - {message}")]
	ApiError { status: u16, message: String },

	/// Response body could not be mapped onto the response model.
	#[error("Invalid response from Google: {0}")]
	Decode(String),
}

impl CseError {
	/// Returns which part of the call failed.
	pub fn kind(&self) -> ErrorKind {
		match self {
			CseError::Validation(_) => ErrorKind::Validation,
			CseError::Network(_)
			| CseError::Timeout
			| CseError::RateLimited { .. }
			| CseError::Unauthorized { .. }
			| CseError::ApiError { .. } => ErrorKind::Network,
			CseError::Decode(_) => ErrorKind::Decode,
		}
	}

	/// Returns the validation details if this is a validation error.
	pub fn as_validation(&self) -> Option<&ValidationError> {
		match self {
			CseError::Validation(e) => Some(e),
			_ => None,
		}
	}
}

impl From<serde_json::Error> for CseError {
	fn from(e: serde_json::Error) -> Self {
		CseError::Decode(format!("JSON parse error: {e}"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn validation_error_names_field() {
		let err = ValidationError::new("safe", "expected one of: active, off");
		assert_eq!(err.to_string(), "invalid safe: expected one of: active, off");
	}

	#[test]
	fn kinds_follow_taxonomy() {
		assert_eq!(
			CseError::from(ValidationError::new("num_results", "too big")).kind(),
			ErrorKind::Validation
		);
		assert_eq!(CseError::Timeout.kind(), ErrorKind::Network);
		assert_eq!(
			CseError::RateLimited {
				message: "Quota exceeded".into()
			}
			.kind(),
			ErrorKind::Network
		);
		assert_eq!(
			CseError::Unauthorized {
				message: "API key not valid".into()
			}
			.kind(),
			ErrorKind::Network
		);
		assert_eq!(
			CseError::ApiError {
				status: 500,
				message: "backend".into()
			}
			.kind(),
			ErrorKind::Network
		);
		assert_eq!(CseError::Decode("bad".into()).kind(), ErrorKind::Decode);
	}

	#[test]
	fn status_errors_carry_upstream_message() {
		let err = CseError::Unauthorized {
			message: "API key not valid".into(),
		};
		assert_eq!(
			err.to_string(),
			"Invalid API key or CSE ID: API key not valid"
		);
	}

	#[test]
	fn serde_errors_become_decode_errors() {
		let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
		let err = CseError::from(err);
		assert_eq!(err.kind(), ErrorKind::Decode);
		assert!(err.to_string().contains("JSON parse error"));
	}

	#[test]
	fn as_validation_only_matches_validation() {
		let err = CseError::from(ValidationError::new("start_index", "must be >= 1"));
		assert_eq!(err.as_validation().map(|v| v.field), Some("start_index"));
		assert!(CseError::Timeout.as_validation().is_none());
	}
}
