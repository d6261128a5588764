// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Typed client for the Google Custom Search JSON API.
//!
//! This crate builds and validates query parameters, issues a single GET per
//! call and decodes the response into [`GoogleSearchResponse`]. The
//! [`CseClient::web_search`] and [`CseClient::image_search`] entry points
//! additionally project every item into a flat result record.
//!
//! ```no_run
//! use google_cse::{CseClient, ImageSearchParameters, ImgSize, SearchRequest};
//!
//! # async fn run() -> Result<(), google_cse::CseError> {
//! let client = CseClient::new("api-key", "engine-id");
//! let params = ImageSearchParameters::builder().img_size(ImgSize::Large).build();
//! let images = client
//! 	.image_search(&SearchRequest::new("sunset").with_num_results(5), Some(&params))
//! 	.await?;
//! for image in images {
//! 	println!("{:?} {:?}", image.link, image.image_width);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod http;
pub mod parameters;
pub mod results;
pub mod secret;
pub mod types;

pub use client::{CseClient, SearchRequest, SearchType, MAX_RESULT_INDEX};
pub use error::{CseError, ErrorKind, ValidationError};
pub use parameters::{
	ChineseSearch, DuplicateFilter, ImageSearchParameters, ImageSearchParametersBuilder,
	ImgColorType, ImgDominantColor, ImgSize, ImgType, ParameterField, QueryParameters,
	SafeSearch, SearchParameters, SearchParametersBuilder, SiteSearchFilter,
	WebSearchParameters, MAX_NUM_RESULTS,
};
pub use results::{ImageSearchResult, WebSearchResult};
pub use secret::ApiKey;
pub use types::{
	GoogleSearchResponse, ImageInfo, JsonObject, LabelInfo, Promotion, PromotionBodyLine,
	PromotionImage, QueryItem, QuerySet, ResultItem, SearchInformation, SpellingInfo, UrlInfo,
	WireRecord,
};
