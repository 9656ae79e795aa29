use serde::{Deserialize, Deserializer};

/// A single leaf of the dataset: one movie and its gross.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Movie {
	pub name: String,
	pub category: String,
	#[serde(deserialize_with = "numeric_value")]
	pub value: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Genre {
	pub name: String,
	#[serde(default)]
	pub children: Vec<Movie>,
}

/// Root of the genre/movie hierarchy as published in the JSON document.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Dataset {
	pub name: String,
	#[serde(default)]
	pub children: Vec<Genre>,
}

impl Dataset {
	pub fn movie_count(&self) -> usize {
		self.movies().count()
	}

	pub fn movies(&self) -> impl Iterator<Item = &Movie> {
		self.children.iter().flat_map(|g| g.children.iter())
	}
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
	Number(f64),
	Text(String),
}

// The published data stores grosses as strings; anything unparseable or
// non-finite ("inf", "NaN") weighs 0.
fn numeric_value<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(match RawValue::deserialize(deserializer)? {
		RawValue::Number(n) => n,
		RawValue::Text(s) => s
			.trim()
			.parse::<f64>()
			.ok()
			.filter(|v| v.is_finite())
			.unwrap_or(0.0),
	})
}
