// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Response types for the Google Custom Search JSON API.
//!
//! Every field is optional: the API omits whatever it has nothing to say
//! about, and absence is never an error. A present field with the wrong JSON
//! type is. Each field names its wire form explicitly; encoding skips absent
//! fields so a decoded value re-encodes to the same set of keys.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::error::CseError;

/// Free-form JSON object, used for `pagemap` and `context`.
pub type JsonObject = Map<String, Value>;

/// Decode/encode helpers shared by every response record.
pub trait WireRecord: Serialize + DeserializeOwned {
	/// Decodes a record from an already-parsed JSON value.
	fn from_value(value: Value) -> Result<Self, CseError> {
		Ok(serde_json::from_value(value)?)
	}

	/// Decodes a record from a JSON string.
	fn from_json(json: &str) -> Result<Self, CseError> {
		Ok(serde_json::from_str(json)?)
	}

	/// Encodes the record using wire names, omitting absent fields.
	fn to_value(&self) -> Value {
		serde_json::to_value(self).unwrap_or(Value::Null)
	}
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromotionBodyLine {
	#[serde(rename = "title", skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	#[serde(rename = "htmlTitle", skip_serializing_if = "Option::is_none")]
	pub html_title: Option<String>,
	#[serde(rename = "url", skip_serializing_if = "Option::is_none")]
	pub url: Option<String>,
	#[serde(rename = "link", skip_serializing_if = "Option::is_none")]
	pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromotionImage {
	#[serde(rename = "source", skip_serializing_if = "Option::is_none")]
	pub source: Option<String>,
	#[serde(rename = "width", skip_serializing_if = "Option::is_none")]
	pub width: Option<i64>,
	#[serde(rename = "height", skip_serializing_if = "Option::is_none")]
	pub height: Option<i64>,
}

/// A promoted result configured on the search engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
	#[serde(rename = "title", skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	#[serde(rename = "htmlTitle", skip_serializing_if = "Option::is_none")]
	pub html_title: Option<String>,
	#[serde(rename = "link", skip_serializing_if = "Option::is_none")]
	pub link: Option<String>,
	#[serde(rename = "displayLink", skip_serializing_if = "Option::is_none")]
	pub display_link: Option<String>,
	#[serde(rename = "bodyLines", skip_serializing_if = "Option::is_none")]
	pub body_lines: Option<Vec<PromotionBodyLine>>,
	#[serde(rename = "image", skip_serializing_if = "Option::is_none")]
	pub image: Option<PromotionImage>,
}

/// Image metadata attached to image search results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageInfo {
	#[serde(rename = "contextLink", skip_serializing_if = "Option::is_none")]
	pub context_link: Option<String>,
	#[serde(rename = "height", skip_serializing_if = "Option::is_none")]
	pub height: Option<i64>,
	#[serde(rename = "width", skip_serializing_if = "Option::is_none")]
	pub width: Option<i64>,
	#[serde(rename = "byteSize", skip_serializing_if = "Option::is_none")]
	pub byte_size: Option<i64>,
	#[serde(rename = "thumbnailLink", skip_serializing_if = "Option::is_none")]
	pub thumbnail_link: Option<String>,
	#[serde(rename = "thumbnailHeight", skip_serializing_if = "Option::is_none")]
	pub thumbnail_height: Option<i64>,
	#[serde(rename = "thumbnailWidth", skip_serializing_if = "Option::is_none")]
	pub thumbnail_width: Option<i64>,
}

/// Refinement label attached to a result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelInfo {
	#[serde(rename = "name", skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(rename = "displayName", skip_serializing_if = "Option::is_none")]
	pub display_name: Option<String>,
	// Upstream spells this one in snake_case.
	#[serde(rename = "label_with_op", skip_serializing_if = "Option::is_none")]
	pub label_with_op: Option<String>,
}

/// A single item of `items`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
	#[serde(rename = "kind", skip_serializing_if = "Option::is_none")]
	pub kind: Option<String>,
	#[serde(rename = "title", skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	#[serde(rename = "htmlTitle", skip_serializing_if = "Option::is_none")]
	pub html_title: Option<String>,
	#[serde(rename = "link", skip_serializing_if = "Option::is_none")]
	pub link: Option<String>,
	#[serde(rename = "displayLink", skip_serializing_if = "Option::is_none")]
	pub display_link: Option<String>,
	#[serde(rename = "snippet", skip_serializing_if = "Option::is_none")]
	pub snippet: Option<String>,
	#[serde(rename = "htmlSnippet", skip_serializing_if = "Option::is_none")]
	pub html_snippet: Option<String>,
	#[serde(rename = "cacheId", skip_serializing_if = "Option::is_none")]
	pub cache_id: Option<String>,
	#[serde(rename = "formattedUrl", skip_serializing_if = "Option::is_none")]
	pub formatted_url: Option<String>,
	#[serde(rename = "htmlFormattedUrl", skip_serializing_if = "Option::is_none")]
	pub html_formatted_url: Option<String>,
	#[serde(rename = "pagemap", skip_serializing_if = "Option::is_none")]
	pub pagemap: Option<JsonObject>,
	#[serde(rename = "mime", skip_serializing_if = "Option::is_none")]
	pub mime: Option<String>,
	#[serde(rename = "fileFormat", skip_serializing_if = "Option::is_none")]
	pub file_format: Option<String>,
	#[serde(rename = "image", skip_serializing_if = "Option::is_none")]
	pub image: Option<ImageInfo>,
	#[serde(rename = "labels", skip_serializing_if = "Option::is_none")]
	pub labels: Option<Vec<LabelInfo>>,
}

/// Echo of the query that produced (or would produce) a page of results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryItem {
	#[serde(rename = "title", skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	#[serde(rename = "totalResults", skip_serializing_if = "Option::is_none")]
	pub total_results: Option<String>,
	#[serde(rename = "searchTerms", skip_serializing_if = "Option::is_none")]
	pub search_terms: Option<String>,
	#[serde(rename = "count", skip_serializing_if = "Option::is_none")]
	pub count: Option<i64>,
	#[serde(rename = "startIndex", skip_serializing_if = "Option::is_none")]
	pub start_index: Option<i64>,
	#[serde(rename = "startPage", skip_serializing_if = "Option::is_none")]
	pub start_page: Option<i64>,
	#[serde(rename = "language", skip_serializing_if = "Option::is_none")]
	pub language: Option<String>,
	#[serde(rename = "inputEncoding", skip_serializing_if = "Option::is_none")]
	pub input_encoding: Option<String>,
	#[serde(rename = "outputEncoding", skip_serializing_if = "Option::is_none")]
	pub output_encoding: Option<String>,
	#[serde(rename = "safe", skip_serializing_if = "Option::is_none")]
	pub safe: Option<String>,
	#[serde(rename = "cx", skip_serializing_if = "Option::is_none")]
	pub cx: Option<String>,
	#[serde(rename = "sort", skip_serializing_if = "Option::is_none")]
	pub sort: Option<String>,
	#[serde(rename = "filter", skip_serializing_if = "Option::is_none")]
	pub filter: Option<String>,
	#[serde(rename = "gl", skip_serializing_if = "Option::is_none")]
	pub gl: Option<String>,
	#[serde(rename = "cr", skip_serializing_if = "Option::is_none")]
	pub cr: Option<String>,
	#[serde(rename = "googleHost", skip_serializing_if = "Option::is_none")]
	pub google_host: Option<String>,
	#[serde(rename = "disableCnTwTranslation", skip_serializing_if = "Option::is_none")]
	pub disable_cn_tw_translation: Option<String>,
	#[serde(rename = "hq", skip_serializing_if = "Option::is_none")]
	pub hq: Option<String>,
	#[serde(rename = "hl", skip_serializing_if = "Option::is_none")]
	pub hl: Option<String>,
	#[serde(rename = "siteSearch", skip_serializing_if = "Option::is_none")]
	pub site_search: Option<String>,
	#[serde(rename = "siteSearchFilter", skip_serializing_if = "Option::is_none")]
	pub site_search_filter: Option<String>,
	#[serde(rename = "exactTerms", skip_serializing_if = "Option::is_none")]
	pub exact_terms: Option<String>,
	#[serde(rename = "excludeTerms", skip_serializing_if = "Option::is_none")]
	pub exclude_terms: Option<String>,
	#[serde(rename = "linkSite", skip_serializing_if = "Option::is_none")]
	pub link_site: Option<String>,
	#[serde(rename = "orTerms", skip_serializing_if = "Option::is_none")]
	pub or_terms: Option<String>,
	#[serde(rename = "relatedSite", skip_serializing_if = "Option::is_none")]
	pub related_site: Option<String>,
	#[serde(rename = "dateRestrict", skip_serializing_if = "Option::is_none")]
	pub date_restrict: Option<String>,
	#[serde(rename = "lowRange", skip_serializing_if = "Option::is_none")]
	pub low_range: Option<String>,
	#[serde(rename = "highRange", skip_serializing_if = "Option::is_none")]
	pub high_range: Option<String>,
	#[serde(rename = "fileType", skip_serializing_if = "Option::is_none")]
	pub file_type: Option<String>,
	#[serde(rename = "rights", skip_serializing_if = "Option::is_none")]
	pub rights: Option<String>,
	#[serde(rename = "searchType", skip_serializing_if = "Option::is_none")]
	pub search_type: Option<String>,
	#[serde(rename = "imgSize", skip_serializing_if = "Option::is_none")]
	pub img_size: Option<String>,
	#[serde(rename = "imgType", skip_serializing_if = "Option::is_none")]
	pub img_type: Option<String>,
	#[serde(rename = "imgColorType", skip_serializing_if = "Option::is_none")]
	pub img_color_type: Option<String>,
	#[serde(rename = "imgDominantColor", skip_serializing_if = "Option::is_none")]
	pub img_dominant_color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuerySet {
	#[serde(rename = "previousPage", skip_serializing_if = "Option::is_none")]
	pub previous_page: Option<Vec<QueryItem>>,
	#[serde(rename = "request", skip_serializing_if = "Option::is_none")]
	pub request: Option<Vec<QueryItem>>,
	#[serde(rename = "nextPage", skip_serializing_if = "Option::is_none")]
	pub next_page: Option<Vec<QueryItem>>,
}

/// OpenSearch URL template for the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UrlInfo {
	#[serde(rename = "type", skip_serializing_if = "Option::is_none")]
	pub r#type: Option<String>,
	#[serde(rename = "template", skip_serializing_if = "Option::is_none")]
	pub template: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchInformation {
	#[serde(rename = "searchTime", skip_serializing_if = "Option::is_none")]
	/// Kept as a JSON number so integral values re-encode unchanged.
	pub search_time: Option<Number>,
	#[serde(rename = "formattedSearchTime", skip_serializing_if = "Option::is_none")]
	pub formatted_search_time: Option<String>,
	#[serde(rename = "totalResults", skip_serializing_if = "Option::is_none")]
	pub total_results: Option<String>,
	#[serde(rename = "formattedTotalResults", skip_serializing_if = "Option::is_none")]
	pub formatted_total_results: Option<String>,
}

/// Spelling suggestion for the query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpellingInfo {
	#[serde(rename = "correctedQuery", skip_serializing_if = "Option::is_none")]
	pub corrected_query: Option<String>,
	#[serde(rename = "htmlCorrectedQuery", skip_serializing_if = "Option::is_none")]
	pub html_corrected_query: Option<String>,
}

/// Full response body of a `customsearch/v1` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoogleSearchResponse {
	#[serde(rename = "kind", skip_serializing_if = "Option::is_none")]
	pub kind: Option<String>,
	#[serde(rename = "url", skip_serializing_if = "Option::is_none")]
	pub url: Option<UrlInfo>,
	#[serde(rename = "queries", skip_serializing_if = "Option::is_none")]
	pub queries: Option<QuerySet>,
	#[serde(rename = "promotions", skip_serializing_if = "Option::is_none")]
	pub promotions: Option<Vec<Promotion>>,
	#[serde(rename = "context", skip_serializing_if = "Option::is_none")]
	pub context: Option<JsonObject>,
	#[serde(rename = "searchInformation", skip_serializing_if = "Option::is_none")]
	pub search_information: Option<SearchInformation>,
	#[serde(rename = "spelling", skip_serializing_if = "Option::is_none")]
	pub spelling: Option<SpellingInfo>,
	#[serde(rename = "items", skip_serializing_if = "Option::is_none")]
	pub items: Option<Vec<ResultItem>>,
}

impl GoogleSearchResponse {
	/// The result items, empty when the response carried none.
	pub fn items(&self) -> &[ResultItem] {
		self.items.as_deref().unwrap_or_default()
	}
}

impl WireRecord for PromotionBodyLine {}
impl WireRecord for PromotionImage {}
impl WireRecord for Promotion {}
impl WireRecord for ImageInfo {}
impl WireRecord for LabelInfo {}
impl WireRecord for ResultItem {}
impl WireRecord for QueryItem {}
impl WireRecord for QuerySet {}
impl WireRecord for UrlInfo {}
impl WireRecord for SearchInformation {}
impl WireRecord for SpellingInfo {}
impl WireRecord for GoogleSearchResponse {}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::ErrorKind;
	use proptest::prelude::*;
	use serde_json::json;

	fn sample_response() -> Value {
		json!({
			"kind": "customsearch#search",
			"url": {
				"type": "application/json",
				"template": "https://www.googleapis.com/customsearch/v1?q={searchTerms}"
			},
			"queries": {
				"request": [{
					"title": "Google Custom Search - cats",
					"totalResults": "1230000",
					"searchTerms": "cats",
					"count": 2,
					"startIndex": 1,
					"inputEncoding": "utf8",
					"outputEncoding": "utf8",
					"safe": "off",
					"cx": "engine"
				}],
				"nextPage": [{ "startIndex": 3, "count": 2 }]
			},
			"context": { "title": "My engine" },
			"searchInformation": {
				"searchTime": 0.31,
				"formattedSearchTime": "0.31",
				"totalResults": "1230000",
				"formattedTotalResults": "1,230,000"
			},
			"spelling": { "correctedQuery": "cats", "htmlCorrectedQuery": "<b>cats</b>" },
			"items": [
				{
					"kind": "customsearch#result",
					"title": "Cat - Wikipedia",
					"htmlTitle": "<b>Cat</b> - Wikipedia",
					"link": "https://en.wikipedia.org/wiki/Cat",
					"displayLink": "en.wikipedia.org",
					"snippet": "The cat is a domestic species.",
					"cacheId": "abc123",
					"formattedUrl": "https://en.wikipedia.org/wiki/Cat",
					"pagemap": { "metatags": [{ "og:type": "article" }] },
					"labels": [{ "name": "wiki", "displayName": "Wiki", "label_with_op": "more:wiki" }]
				},
				{
					"title": "cat.jpg",
					"link": "https://example.com/cat.jpg",
					"mime": "image/jpeg",
					"fileFormat": "image/jpeg",
					"image": {
						"contextLink": "https://example.com/cats",
						"height": 600,
						"width": 800,
						"byteSize": 51234,
						"thumbnailLink": "https://example.com/thumb.jpg",
						"thumbnailHeight": 100,
						"thumbnailWidth": 133
					}
				}
			]
		})
	}

	#[test]
	fn integral_search_time_round_trips() {
		let value = json!({ "searchInformation": { "searchTime": 0, "totalResults": "0" } });
		let response = GoogleSearchResponse::from_value(value.clone()).unwrap();
		assert_eq!(response.to_value(), value);

		let value = json!({ "searchInformation": { "searchTime": 0.187 } });
		let response = GoogleSearchResponse::from_value(value.clone()).unwrap();
		assert_eq!(response.to_value(), value);
	}

	#[test]
	fn decodes_full_response() {
		let response = GoogleSearchResponse::from_value(sample_response()).unwrap();

		assert_eq!(response.kind.as_deref(), Some("customsearch#search"));
		assert_eq!(
			response.url.as_ref().and_then(|u| u.r#type.as_deref()),
			Some("application/json")
		);
		let request = &response.queries.as_ref().unwrap().request.as_ref().unwrap()[0];
		assert_eq!(request.search_terms.as_deref(), Some("cats"));
		assert_eq!(request.count, Some(2));
		assert_eq!(
			response
				.search_information
				.as_ref()
				.and_then(|info| info.search_time.as_ref())
				.and_then(Number::as_f64),
			Some(0.31)
		);
		assert_eq!(response.items().len(), 2);

		let first = &response.items()[0];
		assert_eq!(first.html_title.as_deref(), Some("<b>Cat</b> - Wikipedia"));
		assert_eq!(
			first.labels.as_ref().unwrap()[0].label_with_op.as_deref(),
			Some("more:wiki")
		);
		assert!(first.pagemap.as_ref().unwrap().contains_key("metatags"));

		let image = response.items()[1].image.as_ref().unwrap();
		assert_eq!(image.byte_size, Some(51234));
		assert_eq!(image.thumbnail_width, Some(133));
	}

	#[test]
	fn full_response_round_trips() {
		let original = sample_response();
		let response = GoogleSearchResponse::from_value(original.clone()).unwrap();
		assert_eq!(response.to_value(), original);
	}

	#[test]
	fn empty_object_decodes_to_all_absent() {
		let response = GoogleSearchResponse::from_json("{}").unwrap();
		assert_eq!(response, GoogleSearchResponse::default());
		assert!(response.items().is_empty());
		assert_eq!(response.to_value(), json!({}));
	}

	#[test]
	fn unknown_fields_are_ignored() {
		let item = ResultItem::from_value(json!({ "title": "t", "somethingNew": 1 })).unwrap();
		assert_eq!(item.title.as_deref(), Some("t"));
		assert_eq!(item.to_value(), json!({ "title": "t" }));
	}

	#[test]
	fn string_where_object_expected_is_decode_error() {
		let err = ResultItem::from_value(json!({ "image": "not-an-object" })).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::Decode);
	}

	#[test]
	fn wrong_scalar_type_is_decode_error() {
		let err = ImageInfo::from_value(json!({ "height": "tall" })).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::Decode);
		let err = GoogleSearchResponse::from_value(json!({ "items": {} })).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::Decode);
	}

	#[test]
	fn explicit_null_is_treated_as_absent() {
		let item = ResultItem::from_value(json!({ "title": null, "link": "l" })).unwrap();
		assert_eq!(item.title, None);
		assert_eq!(item.to_value(), json!({ "link": "l" }));
	}

	#[test]
	fn encodes_with_wire_names() {
		let item = ResultItem {
			html_formatted_url: Some("u".into()),
			cache_id: Some("c".into()),
			..Default::default()
		};
		assert_eq!(
			item.to_value(),
			json!({ "cacheId": "c", "htmlFormattedUrl": "u" })
		);
	}

	const STRING_FIELDS: [&str; 11] = [
		"kind",
		"title",
		"htmlTitle",
		"link",
		"displayLink",
		"snippet",
		"htmlSnippet",
		"cacheId",
		"formattedUrl",
		"htmlFormattedUrl",
		"mime",
	];

	fn arb_result_object() -> impl Strategy<Value = Value> {
		let strings = proptest::collection::vec(proptest::option::of("[a-zA-Z0-9 :/._-]{0,24}"), 11);
		let file_format = proptest::option::of("[a-z/]{1,12}");
		let image = proptest::option::of((
			proptest::option::of("[a-z:/.]{1,20}"),
			proptest::option::of(0i64..10_000),
			proptest::option::of(0i64..10_000),
			proptest::option::of(0i64..10_000_000),
		));
		let labels = proptest::option::of(proptest::collection::vec(
			(
				proptest::option::of("[a-z]{1,8}"),
				proptest::option::of("[a-z:]{1,12}"),
			),
			0..3,
		));
		let pagemap = proptest::option::of("[a-z]{1,8}");

		(strings, file_format, image, labels, pagemap).prop_map(
			|(strings, file_format, image, labels, pagemap)| {
				let mut obj = Map::new();
				for (name, value) in STRING_FIELDS.iter().zip(strings) {
					if let Some(value) = value {
						obj.insert((*name).to_string(), Value::String(value));
					}
				}
				if let Some(ff) = file_format {
					obj.insert("fileFormat".into(), Value::String(ff));
				}
				if let Some((context_link, height, width, byte_size)) = image {
					let mut img = Map::new();
					if let Some(v) = context_link {
						img.insert("contextLink".into(), json!(v));
					}
					if let Some(v) = height {
						img.insert("height".into(), json!(v));
					}
					if let Some(v) = width {
						img.insert("width".into(), json!(v));
					}
					if let Some(v) = byte_size {
						img.insert("byteSize".into(), json!(v));
					}
					obj.insert("image".into(), Value::Object(img));
				}
				if let Some(labels) = labels {
					let labels: Vec<Value> = labels
						.into_iter()
						.map(|(name, op)| {
							let mut label = Map::new();
							if let Some(v) = name {
								label.insert("name".into(), json!(v));
							}
							if let Some(v) = op {
								label.insert("label_with_op".into(), json!(v));
							}
							Value::Object(label)
						})
						.collect();
					obj.insert("labels".into(), Value::Array(labels));
				}
				if let Some(key) = pagemap {
					let mut map = Map::new();
					map.insert(key, json!([{ "k": "v" }]));
					obj.insert("pagemap".into(), Value::Object(map));
				}
				Value::Object(obj)
			},
		)
	}

	proptest! {
			/// Property: decode then encode reproduces exactly the present wire fields.
			#[test]
			fn result_item_round_trips(original in arb_result_object()) {
					let item = ResultItem::from_value(original.clone()).unwrap();
					prop_assert_eq!(item.to_value(), original);
			}
	}
}
