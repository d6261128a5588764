// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Google Custom Search Engine client implementation.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use tracing::{debug, error, instrument, trace};

use crate::error::{CseError, ValidationError};
use crate::parameters::{
	validate_num_results, ImageSearchParameters, ParameterField, QueryParameters,
	WebSearchParameters, MAX_NUM_RESULTS,
};
use crate::results::{ImageSearchResult, WebSearchResult};
use crate::secret::ApiKey;
use crate::types::{GoogleSearchResponse, WireRecord};

const DEFAULT_BASE_URL: &str = "https://customsearch.googleapis.com/customsearch/v1";

/// The API never serves results past this index.
pub const MAX_RESULT_INDEX: u32 = 100;

/// Restricts a search to a particular kind of result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchType {
	Image,
}

impl SearchType {
	pub fn as_str(&self) -> &'static str {
		match self {
			SearchType::Image => "image",
		}
	}
}

impl fmt::Display for SearchType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for SearchType {
	type Err = ValidationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"image" => Ok(SearchType::Image),
			_ => Err(ValidationError::new(
				"search_type",
				format!("{s:?} is not supported, expected \"image\" or no search type"),
			)),
		}
	}
}

/// Request-level inputs of a search: the query and the page to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
	pub query: String,
	/// 1-based index of the first result.
	pub start_index: u32,
	/// Page size, 1-10. Sent as `num`.
	pub num_results: u32,
	/// Optional timeout for this call only.
	pub timeout: Option<Duration>,
}

impl SearchRequest {
	/// A request for the first page of ten results.
	pub fn new(query: impl Into<String>) -> Self {
		Self {
			query: query.into(),
			start_index: 1,
			num_results: MAX_NUM_RESULTS,
			timeout: None,
		}
	}

	pub fn with_start_index(mut self, start_index: u32) -> Self {
		self.start_index = start_index;
		self
	}

	pub fn with_num_results(mut self, num_results: u32) -> Self {
		self.num_results = num_results;
		self
	}

	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);
		self
	}

	/// Checks the pagination window against the API limits.
	pub fn validate(&self) -> Result<(), ValidationError> {
		if self.start_index < 1 {
			return Err(ValidationError::new("start_index", "must start from 1"));
		}

		validate_num_results("num_results", self.num_results)?;
		check_window("start_index", self.start_index, self.num_results)
	}

	/// Like [`SearchRequest::validate`], but also checks the window that will
	/// actually be sent when `parameters` carries its own `start`.
	pub fn validate_with(
		&self,
		parameters: Option<&dyn QueryParameters>,
	) -> Result<(), ValidationError> {
		self.validate()?;

		let Some(start) = parameters.and_then(|p| p.value(ParameterField::Start)) else {
			return Ok(());
		};
		let start = start
			.parse::<u32>()
			.ok()
			.filter(|s| *s >= 1)
			.ok_or_else(|| ValidationError::new("start", format!("{start:?} is not a result index")))?;
		check_window("start", start, self.num_results)
	}
}

/// `start + num - 1` must stay within [`MAX_RESULT_INDEX`].
fn check_window(field: &'static str, start: u32, num: u32) -> Result<(), ValidationError> {
	let last_index = u64::from(start) + u64::from(num) - 1;
	if last_index > u64::from(MAX_RESULT_INDEX) {
		return Err(ValidationError::new(
			field,
			format!("{field} + num_results - 1 must not exceed {MAX_RESULT_INDEX}, got {last_index}"),
		));
	}
	Ok(())
}

/// Client for interacting with Google Custom Search Engine API.
///
/// Holds only immutable configuration, so one instance can serve concurrent
/// calls.
#[derive(Debug, Clone)]
pub struct CseClient {
	http_client: Client,
	api_key: ApiKey,
	cx: String,
	base_url: String,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
	error: GoogleErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorDetail {
	message: Option<String>,
}

impl CseClient {
	/// Creates a new CSE client with the given API key and search engine ID.
	pub fn new(api_key: impl Into<ApiKey>, search_engine_id: impl Into<String>) -> Self {
		Self {
			http_client: crate::http::new_client(),
			api_key: api_key.into(),
			cx: search_engine_id.into(),
			base_url: DEFAULT_BASE_URL.to_string(),
		}
	}

	/// Sets a custom base URL for the API (useful for testing).
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	/// Uses a caller-provided HTTP client.
	pub fn with_http_client(mut self, http_client: Client) -> Self {
		self.http_client = http_client;
		self
	}

	pub fn search_engine_id(&self) -> &str {
		&self.cx
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	/// Performs a search and returns the full decoded response.
	///
	/// The request is validated before anything is sent. Exactly one GET is
	/// issued; failures are returned as-is, never retried.
	#[instrument(
		skip_all,
		fields(
			query = %request.query,
			start = request.start_index,
			num = request.num_results,
			search_type = ?search_type,
		)
	)]
	pub async fn raw_search(
		&self,
		request: &SearchRequest,
		search_type: Option<SearchType>,
		parameters: Option<&dyn QueryParameters>,
	) -> Result<GoogleSearchResponse, CseError> {
		request.validate_with(parameters)?;

		let url = self.build_url(request, search_type, parameters)?;

		debug!(url = %self.base_url, "Sending search request to Google CSE");

		let mut builder = self.http_client.get(url);
		if let Some(timeout) = request.timeout {
			builder = builder.timeout(timeout);
		}

		let response = builder.send().await.map_err(|e| {
			if e.is_timeout() {
				error!("Request timed out");
				return CseError::Timeout;
			}
			error!(error = %e, "Network error during CSE request");
			CseError::Network(e)
		})?;

		let status = response.status();
		debug!(status = %status, "Received response from Google CSE");

		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			return Err(status_error(status, &body));
		}

		let body = response.text().await.map_err(|e| {
			error!(error = %e, "Failed to read response body");
			if e.is_timeout() {
				return CseError::Timeout;
			}
			CseError::Network(e)
		})?;

		trace!(body = %body, "Response body");

		let search_response = GoogleSearchResponse::from_json(&body).map_err(|e| {
			error!(error = %e, "Failed to parse Google CSE response");
			e
		})?;

		debug!(
			result_count = search_response.items().len(),
			"Search completed successfully"
		);

		Ok(search_response)
	}

	/// Performs a web search and returns simplified results.
	pub async fn web_search(
		&self,
		request: &SearchRequest,
		parameters: Option<&WebSearchParameters>,
	) -> Result<Vec<WebSearchResult>, CseError> {
		let response = self
			.raw_search(request, None, parameters.map(|p| p as &dyn QueryParameters))
			.await?;

		Ok(response
			.items()
			.iter()
			.map(WebSearchResult::from_result)
			.collect())
	}

	/// Performs an image search and returns simplified results.
	pub async fn image_search(
		&self,
		request: &SearchRequest,
		parameters: Option<&ImageSearchParameters>,
	) -> Result<Vec<ImageSearchResult>, CseError> {
		let response = self
			.raw_search(
				request,
				Some(SearchType::Image),
				parameters.map(|p| p as &dyn QueryParameters),
			)
			.await?;

		Ok(response
			.items()
			.iter()
			.map(ImageSearchResult::from_result)
			.collect())
	}

	/// Wire query parameters for a request, in send order.
	///
	/// `start_index` goes out as `start` unless the parameter object sets its
	/// own `start`.
	pub(crate) fn build_params(
		&self,
		request: &SearchRequest,
		search_type: Option<SearchType>,
		parameters: Option<&dyn QueryParameters>,
	) -> Vec<(&'static str, String)> {
		let mut params = vec![
			("key", self.api_key.expose().to_string()),
			("cx", self.cx.clone()),
			("q", request.query.clone()),
			("num", request.num_results.to_string()),
		];

		if let Some(search_type) = search_type {
			params.push(("searchType", search_type.to_string()));
		}

		let overrides_start = parameters
			.and_then(|p| p.value(ParameterField::Start))
			.is_some();
		if !overrides_start {
			params.push(("start", request.start_index.to_string()));
		}

		if let Some(parameters) = parameters {
			params.extend(parameters.wire_pairs());
		}

		params
	}

	fn build_url(
		&self,
		request: &SearchRequest,
		search_type: Option<SearchType>,
		parameters: Option<&dyn QueryParameters>,
	) -> Result<Url, CseError> {
		let mut url = Url::parse(&self.base_url)
			.map_err(|e| ValidationError::new("base_url", format!("invalid base URL: {e}")))?;

		let params = self.build_params(request, search_type, parameters);
		trace!(
			params = ?params.iter().filter(|(name, _)| *name != "key").collect::<Vec<_>>(),
			"Search parameters"
		);

		url.query_pairs_mut().extend_pairs(params.iter());

		Ok(url)
	}
}

fn status_error(status: StatusCode, body: &str) -> CseError {
	let status_code = status.as_u16();
	let lowered = body.to_lowercase();

	let message = serde_json::from_str::<GoogleErrorBody>(body)
		.ok()
		.and_then(|b| b.error.message)
		.unwrap_or_else(|| body.to_string());

	if status_code == 429 {
		error!(status = status_code, message = %message, "Rate limit exceeded");
		return CseError::RateLimited { message };
	}

	if status_code == 401 || status_code == 403 {
		if lowered.contains("rate") || lowered.contains("quota") || lowered.contains("limit") {
			error!(status = status_code, message = %message, "Rate limit exceeded");
			return CseError::RateLimited { message };
		}
		error!(status = status_code, message = %message, "Unauthorized request");
		return CseError::Unauthorized { message };
	}

	error!(status = status_code, message = %message, "Google API error");
	CseError::ApiError {
		status: status_code,
		message,
	}
}
