use leptos::prelude::*;

use super::colors::ColorTable;
use super::config::{LegendGrid, Point};

#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
	pub genre: String,
	pub color: Option<&'static str>,
	pub swatch: Point,
	pub label: Point,
}

/// Place one swatch per genre, filling `rows_per_column` rows before
/// starting the next column.
pub fn legend_items(colors: &ColorTable, grid: &LegendGrid) -> Vec<LegendItem> {
	let rows = grid.rows_per_column.max(1);
	colors
		.iter()
		.enumerate()
		.map(|(i, (genre, color))| {
			let (column, row) = ((i / rows) as f64, (i % rows) as f64);
			let swatch = Point {
				x: grid.origin.x + column * grid.column_width,
				y: grid.origin.y + row * (grid.swatch + grid.margin),
			};
			LegendItem {
				genre: genre.to_string(),
				color,
				swatch,
				label: Point {
					x: swatch.x + grid.swatch + grid.margin,
					y: swatch.y + grid.swatch / 1.3,
				},
			}
		})
		.collect()
}

#[component]
pub fn Legend(colors: ColorTable, grid: LegendGrid) -> impl IntoView {
	let size = grid.swatch.to_string();
	let items = legend_items(&colors, &grid);
	let swatches = items
		.iter()
		.map(|item| {
			view! {
				<rect
					class="legend-item"
					stroke="#333"
					x={item.swatch.x.to_string()}
					y={item.swatch.y.to_string()}
					width={size.clone()}
					height={size.clone()}
					fill={item.color}
				/>
			}
		})
		.collect_view();
	let labels = items
		.into_iter()
		.map(|item| {
			view! {
				<text class="legend-text" x={item.label.x.to_string()} y={item.label.y.to_string()}>
					{item.genre}
				</text>
			}
		})
		.collect_view();

	view! {
		<svg id="legend">
			{swatches}
			{labels}
		</svg>
	}
}
