// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! `google-cse` command-line search tool.

use std::time::Duration;

use anyhow::{bail, Context};
use clap::Parser;
use google_cse::{
	ChineseSearch, CseClient, DuplicateFilter, ImageSearchParameters, ImgColorType,
	ImgDominantColor, ImgSize, ImgType, QueryParameters, SafeSearch, SearchParameters,
	SearchRequest, SearchType, SiteSearchFilter,
};
use tracing_subscriber::EnvFilter;

mod config;

use config::Credentials;

/// Search the web or images through a Programmable Search Engine.
#[derive(Parser, Debug)]
#[command(name = "google-cse", about = "Google Custom Search from the command line", version)]
struct Args {
	/// Search query
	query: String,

	/// API key (defaults to GOOGLE_CSE_API_KEY / GOOGLE_CSE_API_KEY_FILE)
	#[arg(long)]
	api_key: Option<String>,

	/// Search engine id (defaults to GOOGLE_CSE_ID / GOOGLE_CSE_ID_FILE)
	#[arg(long)]
	cx: Option<String>,

	/// 1-based index of the first result
	#[arg(long, default_value_t = 1)]
	start_index: u32,

	/// Number of results, 1-10
	#[arg(long = "num", default_value_t = 10)]
	num_results: u32,

	/// Run an image search
	#[arg(long)]
	image: bool,

	/// Print the full API response instead of simplified results
	#[arg(long)]
	raw: bool,

	/// Give up on the request after this many seconds
	#[arg(long)]
	timeout_secs: Option<u64>,

	#[command(flatten)]
	filters: FilterArgs,
}

#[derive(clap::Args, Debug, Default)]
struct FilterArgs {
	/// Chinese search: 0 = enabled, 1 = disabled
	#[arg(long)]
	c2coff: Option<ChineseSearch>,
	/// Country restrict, e.g. countryUS
	#[arg(long)]
	country: Option<String>,
	/// Recency restrict, e.g. d10, w2, m3, y1
	#[arg(long)]
	date_restrict: Option<String>,
	#[arg(long)]
	exact_terms: Option<String>,
	#[arg(long)]
	exclude_terms: Option<String>,
	#[arg(long)]
	file_type: Option<String>,
	/// Duplicate filter: 0 = off, 1 = on
	#[arg(long)]
	filter: Option<DuplicateFilter>,
	/// End-user country code, e.g. us
	#[arg(long)]
	geolocation: Option<String>,
	#[arg(long)]
	high_range: Option<String>,
	/// Interface language, e.g. en
	#[arg(long)]
	language: Option<String>,
	#[arg(long)]
	hq: Option<String>,
	#[arg(long)]
	link_site: Option<String>,
	#[arg(long)]
	low_range: Option<String>,
	/// Document language, e.g. lang_en
	#[arg(long)]
	language_restrict: Option<String>,
	#[arg(long)]
	or_terms: Option<String>,
	#[arg(long)]
	rights: Option<String>,
	/// SafeSearch: active or off
	#[arg(long)]
	safe: Option<SafeSearch>,
	#[arg(long)]
	site_search: Option<String>,
	/// e = exclude, i = include
	#[arg(long)]
	site_search_filter: Option<SiteSearchFilter>,
	#[arg(long)]
	sort: Option<String>,
	/// Overrides --start-index on the wire
	#[arg(long)]
	start: Option<u32>,
	#[arg(long)]
	img_color_type: Option<ImgColorType>,
	#[arg(long)]
	img_dominant_color: Option<ImgDominantColor>,
	#[arg(long)]
	img_size: Option<ImgSize>,
	#[arg(long)]
	img_type: Option<ImgType>,
}

impl FilterArgs {
	fn has_image_filters(&self) -> bool {
		self.img_color_type.is_some()
			|| self.img_dominant_color.is_some()
			|| self.img_size.is_some()
			|| self.img_type.is_some()
	}

	fn search_parameters(&self) -> anyhow::Result<SearchParameters> {
		let mut builder = SearchParameters::builder();

		macro_rules! set {
			($($field:ident),+ $(,)?) => {
				$(
					if let Some(value) = self.$field.clone() {
						builder = builder.$field(value);
					}
				)+
			};
		}

		set!(
			c2coff,
			country,
			date_restrict,
			exact_terms,
			exclude_terms,
			file_type,
			filter,
			geolocation,
			high_range,
			language,
			hq,
			link_site,
			low_range,
			language_restrict,
			or_terms,
			rights,
			safe,
			site_search,
			site_search_filter,
			sort,
			start,
		);

		Ok(builder.build()?)
	}

	fn image_parameters(&self) -> anyhow::Result<ImageSearchParameters> {
		let mut builder = ImageSearchParameters::builder().base(self.search_parameters()?);
		if let Some(v) = self.img_color_type {
			builder = builder.img_color_type(v);
		}
		if let Some(v) = self.img_dominant_color {
			builder = builder.img_dominant_color(v);
		}
		if let Some(v) = self.img_size {
			builder = builder.img_size(v);
		}
		if let Some(v) = self.img_type {
			builder = builder.img_type(v);
		}
		Ok(builder.build())
	}
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.with_writer(std::io::stderr)
		.init();

	let args = Args::parse();

	if !args.image && args.filters.has_image_filters() {
		bail!("--img-* filters require --image");
	}

	let credentials =
		Credentials::resolve(args.api_key.clone(), args.cx.clone()).context("loading credentials")?;
	let client = CseClient::new(credentials.api_key, credentials.search_engine_id);

	let mut request = SearchRequest::new(args.query.clone())
		.with_start_index(args.start_index)
		.with_num_results(args.num_results);
	if let Some(secs) = args.timeout_secs {
		request = request.with_timeout(Duration::from_secs(secs));
	}

	tracing::debug!(query = %request.query, image = args.image, raw = args.raw, "running search");

	let output = if args.image {
		let parameters = args.filters.image_parameters()?;
		if args.raw {
			let response = client
				.raw_search(
					&request,
					Some(SearchType::Image),
					Some(&parameters as &dyn QueryParameters),
				)
				.await?;
			serde_json::to_string_pretty(&response)?
		} else {
			let results = client.image_search(&request, Some(&parameters)).await?;
			serde_json::to_string_pretty(&results)?
		}
	} else {
		let parameters = args.filters.search_parameters()?;
		if args.raw {
			let response = client
				.raw_search(&request, None, Some(&parameters as &dyn QueryParameters))
				.await?;
			serde_json::to_string_pretty(&response)?
		} else {
			let results = client.web_search(&request, Some(&parameters)).await?;
			serde_json::to_string_pretty(&results)?
		}
	};

	println!("{output}");
	Ok(())
}
