// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP client with a consistent User-Agent header.

use reqwest::{Client, ClientBuilder};

/// Creates a new HTTP client with the crate User-Agent header.
///
/// No timeout is configured here; timeouts are set per request.
pub fn new_client() -> Client {
	builder().build().expect("failed to build HTTP client")
}

/// Creates a client builder carrying the crate User-Agent header.
///
/// Use this when the caller needs to customize the transport (proxy, TLS
/// roots) before handing it to [`crate::CseClient::with_http_client`].
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Returns the User-Agent string, `google-cse/{version}`.
pub fn user_agent() -> String {
	format!("google-cse/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn user_agent_has_correct_format() {
		let ua = user_agent();
		let parts: Vec<&str> = ua.split('/').collect();
		assert_eq!(parts.len(), 2);
		assert_eq!(parts[0], "google-cse");
		assert_eq!(parts[1], env!("CARGO_PKG_VERSION"));
	}

	#[test]
	fn builder_builds() {
		assert!(builder().build().is_ok());
	}
}
