// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Simplified result shapes returned by `web_search` and `image_search`.

use serde::{Deserialize, Serialize};

use crate::types::ResultItem;

/// A web search hit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebSearchResult {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub html_title: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub link: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub display_link: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub snippet: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub html_snippet: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub formatted_url: Option<String>,
}

impl WebSearchResult {
	pub fn from_result(item: &ResultItem) -> Self {
		Self {
			title: item.title.clone(),
			html_title: item.html_title.clone(),
			link: item.link.clone(),
			display_link: item.display_link.clone(),
			snippet: item.snippet.clone(),
			html_snippet: item.html_snippet.clone(),
			formatted_url: item.formatted_url.clone(),
		}
	}
}

impl From<&ResultItem> for WebSearchResult {
	fn from(item: &ResultItem) -> Self {
		Self::from_result(item)
	}
}

/// An image search hit, with the nested `image` metadata flattened.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSearchResult {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub html_title: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub link: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub display_link: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub snippet: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub context_link: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub image_height: Option<i64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub image_width: Option<i64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub image_byte_size: Option<i64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub thumbnail_link: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub thumbnail_height: Option<i64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub thumbnail_width: Option<i64>,
}

impl ImageSearchResult {
	/// Never fails; a missing `image` leaves every image field absent.
	pub fn from_result(item: &ResultItem) -> Self {
		let image = item.image.as_ref();
		Self {
			title: item.title.clone(),
			html_title: item.html_title.clone(),
			link: item.link.clone(),
			display_link: item.display_link.clone(),
			snippet: item.snippet.clone(),
			context_link: image.and_then(|i| i.context_link.clone()),
			image_height: image.and_then(|i| i.height),
			image_width: image.and_then(|i| i.width),
			image_byte_size: image.and_then(|i| i.byte_size),
			thumbnail_link: image.and_then(|i| i.thumbnail_link.clone()),
			thumbnail_height: image.and_then(|i| i.thumbnail_height),
			thumbnail_width: image.and_then(|i| i.thumbnail_width),
		}
	}
}

impl From<&ResultItem> for ImageSearchResult {
	fn from(item: &ResultItem) -> Self {
		Self::from_result(item)
	}
}
