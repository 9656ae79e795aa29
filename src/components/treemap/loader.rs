use js_sys::Promise;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use super::types::Dataset;

pub const DATA_URL: &str = "https://cdn.rawgit.com/freeCodeCamp/testable-projects-fcc/a80ce8f9/src/data/tree_map/movie-data.json";

#[derive(Debug, Error)]
pub enum LoadError {
	#[error("no browser window available")]
	NoWindow,
	#[error("fetch failed: {0}")]
	Fetch(String),
	#[error("server answered with status {0}")]
	Status(u16),
	#[error("could not read response body: {0}")]
	Body(String),
	#[error("malformed dataset: {0}")]
	Parse(#[from] serde_json::Error),
}

fn js_error(err: JsValue) -> String {
	err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

pub fn parse_dataset(json: &str) -> Result<Dataset, LoadError> {
	Ok(serde_json::from_str(json)?)
}

/// Fetch and parse the dataset at `url`. Single attempt, no timeout.
pub async fn fetch_dataset(url: &str) -> Result<Dataset, LoadError> {
	let window = web_sys::window().ok_or(LoadError::NoWindow)?;
	let response: Response = JsFuture::from(window.fetch_with_str(url))
		.await
		.map_err(|e| LoadError::Fetch(js_error(e)))?
		.dyn_into()
		.map_err(|e| LoadError::Fetch(js_error(e)))?;
	if !response.ok() {
		return Err(LoadError::Status(response.status()));
	}

	let text: Promise = response.text().map_err(|e| LoadError::Body(js_error(e)))?;
	let body = JsFuture::from(text)
		.await
		.map_err(|e| LoadError::Body(js_error(e)))?
		.as_string()
		.ok_or_else(|| LoadError::Body("response body is not text".into()))?;
	parse_dataset(&body)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_published_shape() {
		let json = r#"{
			"name": "Movies",
			"children": [
				{ "name": "Action", "children": [
					{ "name": "Avatar ", "category": "Action", "value": "760505847" }
				]},
				{ "name": "Drama", "children": [
					{ "name": "Titanic", "category": "Drama", "value": "658672302" }
				]}
			]
		}"#;
		let data = parse_dataset(json).unwrap();
		assert_eq!(data.name, "Movies");
		assert_eq!(data.children.len(), 2);
		assert_eq!(data.children[1].children[0].value, 658_672_302.0);
	}

	#[test]
	fn rejects_malformed_json() {
		let err = parse_dataset("{ \"name\": ").unwrap_err();
		assert!(matches!(err, LoadError::Parse(_)));
		assert!(err.to_string().starts_with("malformed dataset"));
	}

	#[test]
	fn rejects_movie_without_name() {
		let json = r#"{ "name": "M", "children": [
			{ "name": "Action", "children": [ { "category": "Action", "value": 1 } ] }
		]}"#;
		assert!(matches!(parse_dataset(json), Err(LoadError::Parse(_))));
	}
}
