use log::warn;

use super::types::Dataset;

/// Genre name to fill color, in the order genres first appear.
///
/// A genre beyond the end of the palette maps to `None`; it is rendered
/// without a fill rather than rejected.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColorTable {
	entries: Vec<(String, Option<&'static str>)>,
}

impl ColorTable {
	pub fn color_of(&self, genre: &str) -> Option<&'static str> {
		self.entries
			.iter()
			.find(|(name, _)| name == genre)
			.and_then(|(_, color)| *color)
	}

	pub fn contains(&self, genre: &str) -> bool {
		self.entries.iter().any(|(name, _)| name == genre)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&'static str>)> {
		self.entries.iter().map(|(name, color)| (name.as_str(), *color))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}
}

pub fn assign_colors(data: &Dataset, palette: &'static [&'static str]) -> ColorTable {
	let mut table = ColorTable::default();
	for genre in &data.children {
		if table.contains(&genre.name) {
			continue;
		}
		let color = palette.get(table.len()).copied();
		if color.is_none() {
			warn!(
				"genre {:?} has no palette color ({} colors available)",
				genre.name,
				palette.len()
			);
		}
		table.entries.push((genre.name.clone(), color));
	}
	table
}
