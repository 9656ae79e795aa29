/// Fill colors handed out to genres in the order they appear.
pub const PALETTE: &[&str] = &[
	"#a6cee3", "#1f78b4", "#b2df8a", "#33a02c", "#fb9a99", "#e31a1c", "#fdbf6f",
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Padding {
	pub top: f64,
	pub bottom: f64,
	pub left: f64,
	pub right: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

/// Grid placement of legend swatches: filled column by column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendGrid {
	pub origin: Point,
	pub swatch: f64,
	pub margin: f64,
	pub rows_per_column: usize,
	pub column_width: f64,
}

/// Everything that differs between chart variants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartConfig {
	pub title: &'static str,
	pub description: &'static str,
	pub width: f64,
	pub height: f64,
	pub padding: Padding,
	pub title_y: f64,
	pub description_y: f64,
	/// Gap between sibling tiles and around each genre block.
	pub tile_padding: f64,
	pub legend: LegendGrid,
	pub palette: &'static [&'static str],
}

impl ChartConfig {
	pub const MOVIE_SALES: ChartConfig = ChartConfig {
		title: "Movie Sales",
		description: "Top 100 Highest Grossing Movies by Genre",
		width: 1200.0,
		height: 1200.0,
		padding: Padding {
			top: 120.0,
			bottom: 250.0,
			left: 70.0,
			right: 70.0,
		},
		title_y: 60.0,
		description_y: 95.0,
		tile_padding: 1.0,
		legend: LegendGrid {
			origin: Point {
				x: 470.0,
				y: 1000.0,
			},
			swatch: 20.0,
			margin: 10.0,
			rows_per_column: 4,
			column_width: 170.0,
		},
		palette: PALETTE,
	};

	pub fn inner_width(&self) -> f64 {
		self.width - self.padding.left - self.padding.right
	}

	pub fn inner_height(&self) -> f64 {
		self.height - self.padding.top - self.padding.bottom
	}

	pub fn title_x(&self) -> f64 {
		self.width / 2.0
	}
}
