//! Squarified treemap over the genre/movie hierarchy.
//!
//! Follows the d3-hierarchy treemap: values are summed bottom-up, siblings are
//! sorted by descending value, and each parent's region is split into rows
//! whose aspect ratio stays as close as possible to the golden ratio.

use std::cmp::Ordering;

use log::debug;

use super::types::{Dataset, Movie};

const PHI: f64 = 1.618_033_988_749_895;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
	pub x0: f64,
	pub y0: f64,
	pub x1: f64,
	pub y1: f64,
}

impl Rect {
	pub fn width(&self) -> f64 {
		self.x1 - self.x0
	}

	pub fn height(&self) -> f64 {
		self.y1 - self.y0
	}

	pub fn area(&self) -> f64 {
		self.width() * self.height()
	}
}

/// Laid-out rectangle for one movie, in inner-region coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
	pub rect: Rect,
	pub movie: Movie,
}

struct Node<'a> {
	movie: Option<&'a Movie>,
	value: f64,
	depth: usize,
	children: Vec<usize>,
	rect: Rect,
}

/// Lay out every movie of `data` inside a `width` x `height` box.
///
/// `padding` is used both between siblings and inside each parent, so tiles
/// never touch. Leaves come back in pre-order: largest genre first, and
/// largest movie first within a genre.
pub fn layout_tiles(data: &Dataset, width: f64, height: f64, padding: f64) -> Vec<Tile> {
	let mut nodes = build_hierarchy(data);
	sum_values(&mut nodes, 0);
	sort_by_value(&mut nodes, 0);

	nodes[0].rect = Rect {
		x0: 0.0,
		y0: 0.0,
		x1: width,
		y1: height,
	};
	let mut padding_stack = vec![0.0];
	position_node(&mut nodes, 0, &mut padding_stack, padding);

	let mut tiles = Vec::with_capacity(data.movie_count());
	collect_leaves(&nodes, 0, &mut tiles);
	debug!(
		"laid out {} tiles covering {:.0} of {:.0} px",
		tiles.len(),
		tiles.iter().map(|t| t.rect.area()).sum::<f64>(),
		width * height
	);
	tiles
}

fn build_hierarchy(data: &Dataset) -> Vec<Node<'_>> {
	let mut nodes = vec![Node {
		movie: None,
		value: 0.0,
		depth: 0,
		children: Vec::new(),
		rect: Rect::default(),
	}];
	for genre in &data.children {
		let genre_idx = nodes.len();
		nodes[0].children.push(genre_idx);
		nodes.push(Node {
			movie: None,
			value: 0.0,
			depth: 1,
			children: Vec::new(),
			rect: Rect::default(),
		});
		for movie in &genre.children {
			let idx = nodes.len();
			nodes[genre_idx].children.push(idx);
			nodes.push(Node {
				movie: Some(movie),
				value: 0.0,
				depth: 2,
				children: Vec::new(),
				rect: Rect::default(),
			});
		}
	}
	nodes
}

fn sum_values(nodes: &mut [Node], idx: usize) -> f64 {
	let mut sum = nodes[idx].movie.map_or(0.0, |m| weight(m.value));
	for i in 0..nodes[idx].children.len() {
		let child = nodes[idx].children[i];
		sum += sum_values(nodes, child);
	}
	nodes[idx].value = sum;
	sum
}

/// Negative, NaN and infinite values weigh nothing.
fn weight(value: f64) -> f64 {
	if value.is_finite() { value.max(0.0) } else { 0.0 }
}

fn sort_by_value(nodes: &mut [Node], idx: usize) {
	let mut children = std::mem::take(&mut nodes[idx].children);
	children.sort_by(|&a, &b| {
		nodes[b]
			.value
			.partial_cmp(&nodes[a].value)
			.unwrap_or(Ordering::Equal)
	});
	for &child in &children {
		sort_by_value(nodes, child);
	}
	nodes[idx].children = children;
}

fn collapse(lo: &mut f64, hi: &mut f64) {
	if *hi < *lo {
		*lo = (*lo + *hi) / 2.0;
		*hi = *lo;
	}
}

fn position_node(nodes: &mut [Node], idx: usize, padding_stack: &mut Vec<f64>, padding: f64) {
	let depth = nodes[idx].depth;
	let p = padding_stack[depth];
	let Rect { x0, y0, x1, y1 } = nodes[idx].rect;
	let (mut x0, mut y0, mut x1, mut y1) = (x0 + p, y0 + p, x1 - p, y1 - p);
	collapse(&mut x0, &mut x1);
	collapse(&mut y0, &mut y1);
	nodes[idx].rect = Rect { x0, y0, x1, y1 };

	if nodes[idx].children.is_empty() {
		return;
	}

	let p = padding / 2.0;
	padding_stack.truncate(depth + 1);
	padding_stack.push(p);
	let (mut x0, mut y0, mut x1, mut y1) =
		(x0 + padding - p, y0 + padding - p, x1 - (padding - p), y1 - (padding - p));
	collapse(&mut x0, &mut x1);
	collapse(&mut y0, &mut y1);
	squarify(nodes, idx, Rect { x0, y0, x1, y1 });

	for i in 0..nodes[idx].children.len() {
		let child = nodes[idx].children[i];
		position_node(nodes, child, padding_stack, padding);
	}
}

/// Lay a row out left to right across the full height of `area`.
fn dice(nodes: &mut [Node], row: &[usize], row_value: f64, area: Rect) {
	let k = if row_value != 0.0 {
		area.width() / row_value
	} else {
		0.0
	};
	let mut x = area.x0;
	for &child in row {
		let x_next = x + nodes[child].value * k;
		nodes[child].rect = Rect {
			x0: x,
			y0: area.y0,
			x1: x_next,
			y1: area.y1,
		};
		x = x_next;
	}
}

/// Lay a row out top to bottom across the full width of `area`.
fn slice(nodes: &mut [Node], row: &[usize], row_value: f64, area: Rect) {
	let k = if row_value != 0.0 {
		area.height() / row_value
	} else {
		0.0
	};
	let mut y = area.y0;
	for &child in row {
		let y_next = y + nodes[child].value * k;
		nodes[child].rect = Rect {
			x0: area.x0,
			y0: y,
			x1: area.x1,
			y1: y_next,
		};
		y = y_next;
	}
}

fn squarify(nodes: &mut [Node], parent: usize, area: Rect) {
	let children = nodes[parent].children.clone();
	let n = children.len();
	let Rect {
		mut x0,
		mut y0,
		x1,
		y1,
	} = area;
	let mut value = nodes[parent].value;
	let (mut i0, mut i1) = (0, 0);

	while i0 < n {
		let (dx, dy) = (x1 - x0, y1 - y0);

		// Skip leading empty nodes; they are folded into this row.
		let mut sum_value;
		loop {
			sum_value = nodes[children[i1]].value;
			i1 += 1;
			if sum_value != 0.0 || i1 >= n {
				break;
			}
		}
		let (mut min_value, mut max_value) = (sum_value, sum_value);
		let alpha = (dy / dx).max(dx / dy) / (value * PHI);
		let mut beta = sum_value * sum_value * alpha;
		let mut min_ratio = (max_value / beta).max(beta / min_value);

		while i1 < n {
			let node_value = nodes[children[i1]].value;
			sum_value += node_value;
			min_value = min_value.min(node_value);
			max_value = max_value.max(node_value);
			beta = sum_value * sum_value * alpha;
			let new_ratio = (max_value / beta).max(beta / min_value);
			if new_ratio > min_ratio {
				sum_value -= node_value;
				break;
			}
			min_ratio = new_ratio;
			i1 += 1;
		}

		let row = &children[i0..i1];
		if dx < dy {
			let y_split = if value != 0.0 {
				y0 + dy * sum_value / value
			} else {
				y1
			};
			dice(nodes, row, sum_value, Rect { x0, y0, x1, y1: y_split });
			y0 = y_split;
		} else {
			let x_split = if value != 0.0 {
				x0 + dx * sum_value / value
			} else {
				x1
			};
			slice(nodes, row, sum_value, Rect { x0, y0, x1: x_split, y1 });
			x0 = x_split;
		}

		value -= sum_value;
		i0 = i1;
	}
}

fn collect_leaves(nodes: &[Node], idx: usize, out: &mut Vec<Tile>) {
	let node = &nodes[idx];
	if let Some(movie) = node.movie {
		out.push(Tile {
			rect: node.rect,
			movie: movie.clone(),
		});
	}
	for &child in &node.children {
		collect_leaves(nodes, child, out);
	}
}
