use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use web_sys::MouseEvent;

use super::colors::{ColorTable, assign_colors};
use super::config::{ChartConfig, Point};
use super::layout::{Tile, layout_tiles};
use super::legend::Legend;
use super::tooltip::{TooltipState, apply as apply_tooltip};
use super::types::Dataset;

#[component]
pub fn TreemapChart(data: Dataset, config: ChartConfig) -> impl IntoView {
	let colors = assign_colors(&data, config.palette);
	let (inner_w, inner_h) = (config.inner_width(), config.inner_height());
	let tiles = layout_tiles(&data, inner_w, inner_h, config.tile_padding);
	let tooltip: Rc<RefCell<TooltipState>> = Rc::new(RefCell::new(TooltipState::default()));

	let tile_views = tiles
		.into_iter()
		.map(|tile| {
			let fill = tile_fill(&colors, &tile);
			tile_view(tile, fill, tooltip.clone())
		})
		.collect_view();

	view! {
		<svg class="chart" width={config.width.to_string()} height={config.height.to_string()}>
			<text id="title" x={config.title_x().to_string()} y={config.title_y.to_string()}>
				{config.title}
			</text>
			<text id="description" x={config.title_x().to_string()} y={config.description_y.to_string()}>
				{config.description}
			</text>
			<svg
				width={inner_w.to_string()}
				height={inner_h.to_string()}
				x={config.padding.left.to_string()}
				y={config.padding.top.to_string()}
			>
				{tile_views}
			</svg>
			<Legend colors=colors grid={config.legend} />
		</svg>
	}
}

/// Fill for a tile: the color of its movie's genre, if that genre has one.
fn tile_fill(colors: &ColorTable, tile: &Tile) -> Option<&'static str> {
	colors.color_of(&tile.movie.category)
}

fn tile_view(
	tile: Tile,
	fill: Option<&'static str>,
	tooltip: Rc<RefCell<TooltipState>>,
) -> impl IntoView {
	let Tile { rect, movie } = tile;
	let (name, category, value) = (
		movie.name.clone(),
		movie.category.clone(),
		movie.value.to_string(),
	);
	let on_mousemove = {
		let tooltip = tooltip.clone();
		move |ev: MouseEvent| {
			let pointer = Point {
				x: ev.page_x() as f64,
				y: ev.page_y() as f64,
			};
			let mut state = tooltip.borrow_mut();
			state.show(pointer, &movie);
			apply_tooltip(&state);
		}
	};
	let on_mouseleave = move |_: MouseEvent| {
		let mut state = tooltip.borrow_mut();
		state.hide();
		apply_tooltip(&state);
	};

	view! {
		<g
			transform={format!("translate({},{})", rect.x0, rect.y0)}
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
		>
			<rect
				class="tile"
				data-name={name.clone()}
				data-category={category}
				data-value={value}
				fill={fill}
				width={rect.width().to_string()}
				height={rect.height().to_string()}
			/>
			<text class="tile-name" x="5" y="10">
				{name}
			</text>
		</g>
	}
}
