// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Optional query modifiers accepted by the Custom Search API.
//!
//! A parameter object is built once per request through its builder, which
//! enforces the per-field constraints, and is then only read by the client.
//! Translation to wire names goes through the static [`ParameterField`]
//! table.

use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::ValidationError;

/// Upper bound the API accepts for results per page.
pub const MAX_NUM_RESULTS: u32 = 10;

macro_rules! wire_enum {
	(
		$(#[$meta:meta])*
		$name:ident for $field:literal {
			$($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
		pub enum $name {
			$($(#[$vmeta])* #[serde(rename = $wire)] $variant),+
		}

		impl $name {
			/// Every accepted value, in wire order.
			pub const ALL: &'static [$name] = &[$($name::$variant),+];

			/// The value as sent on the wire.
			pub fn as_str(&self) -> &'static str {
				match self {
					$($name::$variant => $wire),+
				}
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str(self.as_str())
			}
		}

		impl FromStr for $name {
			type Err = ValidationError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				match s {
					$($wire => Ok($name::$variant),)+
					_ => Err(ValidationError::new(
						$field,
						format!("{s:?} is not one of: {}", [$($wire),+].join(", ")),
					)),
				}
			}
		}
	};
}

wire_enum! {
	/// Simplified/Traditional Chinese search (`c2coff`).
	ChineseSearch for "c2coff" {
		Enabled => "0",
		Disabled => "1",
	}
}

wire_enum! {
	/// Duplicate content filter (`filter`).
	DuplicateFilter for "filter" {
		Off => "0",
		On => "1",
	}
}

wire_enum! {
	/// SafeSearch level (`safe`).
	SafeSearch for "safe" {
		Active => "active",
		Off => "off",
	}
}

wire_enum! {
	/// Whether `site_search` results are included or excluded.
	SiteSearchFilter for "site_search_filter" {
		Exclude => "e",
		Include => "i",
	}
}

wire_enum! {
	ImgColorType for "img_color_type" {
		Color => "color",
		Gray => "gray",
		Mono => "mono",
		Trans => "trans",
	}
}

wire_enum! {
	ImgDominantColor for "img_dominant_color" {
		Black => "black",
		Blue => "blue",
		Brown => "brown",
		Gray => "gray",
		Green => "green",
		Orange => "orange",
		Pink => "pink",
		Purple => "purple",
		Red => "red",
		Teal => "teal",
		White => "white",
		Yellow => "yellow",
	}
}

wire_enum! {
	ImgSize for "img_size" {
		Huge => "huge",
		Icon => "icon",
		Large => "large",
		Medium => "medium",
		Small => "small",
		Xlarge => "xlarge",
		Xxlarge => "xxlarge",
	}
}

wire_enum! {
	ImgType for "img_type" {
		Clipart => "clipart",
		Face => "face",
		Lineart => "lineart",
		Stock => "stock",
		Photo => "photo",
		Animated => "animated",
	}
}

/// A parameter field that maps onto a wire query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterField {
	C2coff,
	Country,
	DateRestrict,
	ExactTerms,
	ExcludeTerms,
	FileType,
	Filter,
	Geolocation,
	HighRange,
	Language,
	Hq,
	LinkSite,
	LowRange,
	LanguageRestrict,
	OrTerms,
	Rights,
	Safe,
	SiteSearch,
	SiteSearchFilter,
	Sort,
	Start,
	ImgColorType,
	ImgDominantColor,
	ImgSize,
	ImgType,
}

impl ParameterField {
	/// Translation order used when building a request.
	pub const ALL: [ParameterField; 25] = [
		ParameterField::C2coff,
		ParameterField::Country,
		ParameterField::DateRestrict,
		ParameterField::ExactTerms,
		ParameterField::ExcludeTerms,
		ParameterField::FileType,
		ParameterField::Filter,
		ParameterField::Geolocation,
		ParameterField::HighRange,
		ParameterField::Language,
		ParameterField::Hq,
		ParameterField::LinkSite,
		ParameterField::LowRange,
		ParameterField::LanguageRestrict,
		ParameterField::OrTerms,
		ParameterField::Rights,
		ParameterField::Safe,
		ParameterField::SiteSearch,
		ParameterField::SiteSearchFilter,
		ParameterField::Sort,
		ParameterField::Start,
		ParameterField::ImgColorType,
		ParameterField::ImgDominantColor,
		ParameterField::ImgSize,
		ParameterField::ImgType,
	];

	/// Internal (snake_case) field name.
	pub fn name(self) -> &'static str {
		self.names().0
	}

	/// Upstream query parameter name.
	pub fn wire_name(self) -> &'static str {
		self.names().1
	}

	pub fn is_image_only(self) -> bool {
		matches!(
			self,
			ParameterField::ImgColorType
				| ParameterField::ImgDominantColor
				| ParameterField::ImgSize
				| ParameterField::ImgType
		)
	}

	fn names(self) -> (&'static str, &'static str) {
		match self {
			ParameterField::C2coff => ("c2coff", "c2coff"),
			ParameterField::Country => ("country", "cr"),
			ParameterField::DateRestrict => ("date_restrict", "dateRestrict"),
			ParameterField::ExactTerms => ("exact_terms", "exactTerms"),
			ParameterField::ExcludeTerms => ("exclude_terms", "excludeTerms"),
			ParameterField::FileType => ("file_type", "fileType"),
			ParameterField::Filter => ("filter", "filter"),
			ParameterField::Geolocation => ("geolocation", "gl"),
			ParameterField::HighRange => ("high_range", "highRange"),
			ParameterField::Language => ("language", "hl"),
			ParameterField::Hq => ("hq", "hq"),
			ParameterField::LinkSite => ("link_site", "linkSite"),
			ParameterField::LowRange => ("low_range", "lowRange"),
			ParameterField::LanguageRestrict => ("language_restrict", "lr"),
			ParameterField::OrTerms => ("or_terms", "orTerms"),
			ParameterField::Rights => ("rights", "rights"),
			ParameterField::Safe => ("safe", "safe"),
			ParameterField::SiteSearch => ("site_search", "siteSearch"),
			ParameterField::SiteSearchFilter => ("site_search_filter", "siteSearchFilter"),
			ParameterField::Sort => ("sort", "sort"),
			ParameterField::Start => ("start", "start"),
			ParameterField::ImgColorType => ("img_color_type", "imgColorType"),
			ParameterField::ImgDominantColor => ("img_dominant_color", "imgDominantColor"),
			ParameterField::ImgSize => ("img_size", "imgSize"),
			ParameterField::ImgType => ("img_type", "imgType"),
		}
	}
}

/// Anything the client can translate into wire query parameters.
pub trait QueryParameters: Send + Sync {
	/// The wire value of `field`, or `None` when it should not be sent.
	fn value(&self, field: ParameterField) -> Option<String>;

	/// Present fields as `(wire name, value)` pairs, in table order.
	fn wire_pairs(&self) -> Vec<(&'static str, String)> {
		ParameterField::ALL
			.iter()
			.filter_map(|field| self.value(*field).map(|v| (field.wire_name(), v)))
			.collect()
	}
}

/// Parameters shared by web and image searches.
///
/// Built with [`SearchParameters::builder`]. `c2coff`, `filter` and `safe`
/// carry real defaults and are therefore always sent; every other field is
/// omitted from the request unless set.
///
/// `low_range`/`high_range` are meant to be used together; the pairing is not
/// enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParameters {
	c2coff: ChineseSearch,
	country: Option<String>,
	date_restrict: Option<String>,
	exact_terms: Option<String>,
	exclude_terms: Option<String>,
	file_type: Option<String>,
	filter: DuplicateFilter,
	geolocation: Option<String>,
	high_range: Option<String>,
	language: Option<String>,
	hq: Option<String>,
	link_site: Option<String>,
	low_range: Option<String>,
	language_restrict: Option<String>,
	or_terms: Option<String>,
	rights: Option<String>,
	safe: SafeSearch,
	site_search: Option<String>,
	site_search_filter: Option<SiteSearchFilter>,
	sort: Option<String>,
	start: Option<u32>,
	num_results: Option<u32>,
}

/// Web search takes exactly the shared parameters.
pub type WebSearchParameters = SearchParameters;

impl Default for SearchParameters {
	fn default() -> Self {
		Self {
			c2coff: ChineseSearch::Enabled,
			country: None,
			date_restrict: None,
			exact_terms: None,
			exclude_terms: None,
			file_type: None,
			filter: DuplicateFilter::On,
			geolocation: None,
			high_range: None,
			language: None,
			hq: None,
			link_site: None,
			low_range: None,
			language_restrict: None,
			or_terms: None,
			rights: None,
			safe: SafeSearch::Off,
			site_search: None,
			site_search_filter: None,
			sort: None,
			start: None,
			num_results: None,
		}
	}
}

impl SearchParameters {
	pub fn builder() -> SearchParametersBuilder {
		SearchParametersBuilder::default()
	}

	pub fn c2coff(&self) -> ChineseSearch {
		self.c2coff
	}

	pub fn filter(&self) -> DuplicateFilter {
		self.filter
	}

	pub fn safe(&self) -> SafeSearch {
		self.safe
	}

	pub fn site_search_filter(&self) -> Option<SiteSearchFilter> {
		self.site_search_filter
	}

	pub fn start(&self) -> Option<u32> {
		self.start
	}

	/// Requested page size. Validated at construction but not sent; the
	/// client's own `num_results` controls `num`.
	pub fn num_results(&self) -> Option<u32> {
		self.num_results
	}
}

impl QueryParameters for SearchParameters {
	fn value(&self, field: ParameterField) -> Option<String> {
		match field {
			ParameterField::C2coff => Some(self.c2coff.to_string()),
			ParameterField::Country => self.country.clone(),
			ParameterField::DateRestrict => self.date_restrict.clone(),
			ParameterField::ExactTerms => self.exact_terms.clone(),
			ParameterField::ExcludeTerms => self.exclude_terms.clone(),
			ParameterField::FileType => self.file_type.clone(),
			ParameterField::Filter => Some(self.filter.to_string()),
			ParameterField::Geolocation => self.geolocation.clone(),
			ParameterField::HighRange => self.high_range.clone(),
			ParameterField::Language => self.language.clone(),
			ParameterField::Hq => self.hq.clone(),
			ParameterField::LinkSite => self.link_site.clone(),
			ParameterField::LowRange => self.low_range.clone(),
			ParameterField::LanguageRestrict => self.language_restrict.clone(),
			ParameterField::OrTerms => self.or_terms.clone(),
			ParameterField::Rights => self.rights.clone(),
			ParameterField::Safe => Some(self.safe.to_string()),
			ParameterField::SiteSearch => self.site_search.clone(),
			ParameterField::SiteSearchFilter => self.site_search_filter.map(|v| v.to_string()),
			ParameterField::Sort => self.sort.clone(),
			ParameterField::Start => self.start.map(|v| v.to_string()),
			ParameterField::ImgColorType
			| ParameterField::ImgDominantColor
			| ParameterField::ImgSize
			| ParameterField::ImgType => None,
		}
	}
}

impl Serialize for SearchParameters {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serialize_wire_pairs(self, serializer)
	}
}

/// Builder for [`SearchParameters`].
#[derive(Debug, Clone, Default)]
pub struct SearchParametersBuilder {
	params: SearchParameters,
}

macro_rules! string_setters {
	($($(#[$meta:meta])* $field:ident),+ $(,)?) => {
		$(
			$(#[$meta])*
			pub fn $field(mut self, value: impl Into<String>) -> Self {
				self.params.$field = Some(value.into());
				self
			}
		)+
	};
}

impl SearchParametersBuilder {
	string_setters! {
		/// Country restrict, e.g. `countryUS`.
		country,
		/// Recency restrict, e.g. `d10`, `w2`, `m3`, `y1`.
		date_restrict,
		exact_terms,
		exclude_terms,
		/// File extension, e.g. `pdf`.
		file_type,
		/// End-user geolocation as a two-letter country code.
		geolocation,
		high_range,
		/// Interface language, e.g. `en`.
		language,
		hq,
		link_site,
		low_range,
		/// Document language, e.g. `lang_en`.
		language_restrict,
		or_terms,
		rights,
		site_search,
		sort,
	}

	pub fn c2coff(mut self, value: ChineseSearch) -> Self {
		self.params.c2coff = value;
		self
	}

	pub fn filter(mut self, value: DuplicateFilter) -> Self {
		self.params.filter = value;
		self
	}

	pub fn safe(mut self, value: SafeSearch) -> Self {
		self.params.safe = value;
		self
	}

	pub fn site_search_filter(mut self, value: SiteSearchFilter) -> Self {
		self.params.site_search_filter = Some(value);
		self
	}

	/// Index of the first result. Must be at least 1.
	pub fn start(mut self, value: u32) -> Self {
		self.params.start = Some(value);
		self
	}

	/// Must be within `1..=10`.
	pub fn num_results(mut self, value: u32) -> Self {
		self.params.num_results = Some(value);
		self
	}

	pub fn build(self) -> Result<SearchParameters, ValidationError> {
		if let Some(num) = self.params.num_results {
			validate_num_results("num_results", num)?;
		}
		if self.params.start == Some(0) {
			return Err(ValidationError::new("start", "must be at least 1"));
		}
		Ok(self.params)
	}
}

/// Parameters for image search: the shared set plus image filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSearchParameters {
	base: SearchParameters,
	img_color_type: Option<ImgColorType>,
	img_dominant_color: Option<ImgDominantColor>,
	img_size: Option<ImgSize>,
	img_type: Option<ImgType>,
}

impl ImageSearchParameters {
	pub fn builder() -> ImageSearchParametersBuilder {
		ImageSearchParametersBuilder::default()
	}

	/// The shared parameters.
	pub fn base(&self) -> &SearchParameters {
		&self.base
	}

	pub fn img_color_type(&self) -> Option<ImgColorType> {
		self.img_color_type
	}

	pub fn img_dominant_color(&self) -> Option<ImgDominantColor> {
		self.img_dominant_color
	}

	pub fn img_size(&self) -> Option<ImgSize> {
		self.img_size
	}

	pub fn img_type(&self) -> Option<ImgType> {
		self.img_type
	}
}

impl From<SearchParameters> for ImageSearchParameters {
	fn from(base: SearchParameters) -> Self {
		Self {
			base,
			..Default::default()
		}
	}
}

impl QueryParameters for ImageSearchParameters {
	fn value(&self, field: ParameterField) -> Option<String> {
		match field {
			ParameterField::ImgColorType => self.img_color_type.map(|v| v.to_string()),
			ParameterField::ImgDominantColor => self.img_dominant_color.map(|v| v.to_string()),
			ParameterField::ImgSize => self.img_size.map(|v| v.to_string()),
			ParameterField::ImgType => self.img_type.map(|v| v.to_string()),
			_ => self.base.value(field),
		}
	}
}

impl Serialize for ImageSearchParameters {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serialize_wire_pairs(self, serializer)
	}
}

/// Builder for [`ImageSearchParameters`].
#[derive(Debug, Clone, Default)]
pub struct ImageSearchParametersBuilder {
	params: ImageSearchParameters,
}

impl ImageSearchParametersBuilder {
	/// Shared parameters, already validated by their own builder.
	pub fn base(mut self, base: SearchParameters) -> Self {
		self.params.base = base;
		self
	}

	pub fn img_color_type(mut self, value: ImgColorType) -> Self {
		self.params.img_color_type = Some(value);
		self
	}

	pub fn img_dominant_color(mut self, value: ImgDominantColor) -> Self {
		self.params.img_dominant_color = Some(value);
		self
	}

	pub fn img_size(mut self, value: ImgSize) -> Self {
		self.params.img_size = Some(value);
		self
	}

	pub fn img_type(mut self, value: ImgType) -> Self {
		self.params.img_type = Some(value);
		self
	}

	pub fn build(self) -> ImageSearchParameters {
		self.params
	}
}

pub(crate) fn validate_num_results(field: &'static str, num: u32) -> Result<(), ValidationError> {
	if !(1..=MAX_NUM_RESULTS).contains(&num) {
		return Err(ValidationError::new(
			field,
			format!("must be between 1 and {MAX_NUM_RESULTS}, got {num}"),
		));
	}
	Ok(())
}

fn serialize_wire_pairs<P, S>(params: &P, serializer: S) -> Result<S::Ok, S::Error>
where
	P: QueryParameters,
	S: Serializer,
{
	let pairs = params.wire_pairs();
	let mut map = serializer.serialize_map(Some(pairs.len()))?;
	for (name, value) in &pairs {
		map.serialize_entry(name, value)?;
	}
	map.end()
}
