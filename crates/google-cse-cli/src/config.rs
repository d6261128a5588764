// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Credential loading for the CLI.
//!
//! Both credentials follow the `VAR` / `VAR_FILE` convention: when
//! `VAR_FILE` is set the value is read from that path (one trailing newline
//! stripped), otherwise `VAR` is used directly. Command-line flags win over
//! both.

use std::path::PathBuf;
use std::{env, fs};

use google_cse::ApiKey;
use thiserror::Error;

pub const API_KEY_VAR: &str = "GOOGLE_CSE_API_KEY";
pub const ENGINE_ID_VAR: &str = "GOOGLE_CSE_ID";

#[derive(Debug, Error)]
pub enum EnvError {
	#[error("failed to read {var} file at {path}: {source}")]
	Io {
		var: String,
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("file path in {var} is empty")]
	EmptyPath { var: String },

	#[error("required setting not found: pass --{flag}, or set {var} or {var}_FILE")]
	Missing { var: &'static str, flag: &'static str },
}

/// Reads `var`, preferring the file named by `{var}_FILE`.
pub fn load_env(var: &str) -> Result<Option<String>, EnvError> {
	let file_var = format!("{var}_FILE");

	if let Ok(path_str) = env::var(&file_var) {
		if path_str.is_empty() {
			return Err(EnvError::EmptyPath { var: file_var });
		}

		let path = PathBuf::from(&path_str);
		let content = fs::read_to_string(&path).map_err(|source| EnvError::Io {
			var: file_var,
			path: path.clone(),
			source,
		})?;

		let value = content.strip_suffix('\n').unwrap_or(&content).to_string();
		return Ok(Some(value));
	}

	Ok(env::var(var).ok())
}

/// API key and search engine id used to build the client.
#[derive(Debug, Clone)]
pub struct Credentials {
	pub api_key: ApiKey,
	pub search_engine_id: String,
}

impl Credentials {
	/// Flags first, then the environment.
	pub fn resolve(api_key: Option<String>, search_engine_id: Option<String>) -> Result<Self, EnvError> {
		let api_key = match api_key {
			Some(key) => key,
			None => load_env(API_KEY_VAR)?.ok_or(EnvError::Missing {
				var: API_KEY_VAR,
				flag: "api-key",
			})?,
		};

		let search_engine_id = match search_engine_id {
			Some(cx) => cx,
			None => load_env(ENGINE_ID_VAR)?.ok_or(EnvError::Missing {
				var: ENGINE_ID_VAR,
				flag: "cx",
			})?,
		};

		Ok(Self {
			api_key: ApiKey::new(api_key),
			search_engine_id,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;
	use tempfile::NamedTempFile;

	#[test]
	fn returns_none_when_not_set() {
		let var = "GOOGLE_CSE_TEST_UNSET_12345";
		env::remove_var(var);
		env::remove_var(format!("{var}_FILE"));

		assert!(load_env(var).unwrap().is_none());
	}

	#[test]
	fn reads_direct_value() {
		let var = "GOOGLE_CSE_TEST_DIRECT_12345";
		env::set_var(var, "direct-value");
		env::remove_var(format!("{var}_FILE"));

		assert_eq!(load_env(var).unwrap().as_deref(), Some("direct-value"));

		env::remove_var(var);
	}

	#[test]
	fn file_takes_precedence_and_strips_newline() {
		let var = "GOOGLE_CSE_TEST_FILE_12345";
		let mut file = NamedTempFile::new().unwrap();
		writeln!(file, "file-value").unwrap();

		env::set_var(var, "direct-value");
		env::set_var(format!("{var}_FILE"), file.path().to_str().unwrap());

		assert_eq!(load_env(var).unwrap().as_deref(), Some("file-value"));

		env::remove_var(var);
		env::remove_var(format!("{var}_FILE"));
	}

	#[test]
	fn keeps_content_without_trailing_newline() {
		let var = "GOOGLE_CSE_TEST_NO_NEWLINE_12345";
		let mut file = NamedTempFile::new().unwrap();
		write!(file, "exact").unwrap();
		env::set_var(format!("{var}_FILE"), file.path().to_str().unwrap());

		assert_eq!(load_env(var).unwrap().as_deref(), Some("exact"));

		env::remove_var(format!("{var}_FILE"));
	}

	#[test]
	fn empty_file_path_is_error() {
		let var = "GOOGLE_CSE_TEST_EMPTY_PATH_12345";
		env::set_var(format!("{var}_FILE"), "");

		assert!(matches!(load_env(var), Err(EnvError::EmptyPath { .. })));

		env::remove_var(format!("{var}_FILE"));
	}

	#[test]
	fn missing_file_is_error() {
		let var = "GOOGLE_CSE_TEST_MISSING_FILE_12345";
		env::set_var(format!("{var}_FILE"), "/nonexistent/google-cse/key");

		assert!(matches!(load_env(var), Err(EnvError::Io { .. })));

		env::remove_var(format!("{var}_FILE"));
	}

	#[test]
	fn flags_win_over_environment() {
		let credentials =
			Credentials::resolve(Some("flag-key".into()), Some("flag-cx".into())).unwrap();
		assert_eq!(credentials.api_key.expose(), "flag-key");
		assert_eq!(credentials.search_engine_id, "flag-cx");
		assert!(!format!("{credentials:?}").contains("flag-key"));
	}
}
