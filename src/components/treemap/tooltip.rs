use log::debug;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::config::Point;
use super::types::Movie;

pub const TOOLTIP_ID: &str = "tooltip";
/// Tooltip position relative to the pointer.
pub const POINTER_OFFSET: Point = Point { x: 20.0, y: -15.0 };

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
	#[default]
	Hidden,
	Visible,
}

impl Visibility {
	pub fn as_css(self) -> &'static str {
		match self {
			Visibility::Hidden => "hidden",
			Visibility::Visible => "visible",
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipContent {
	pub name: String,
	pub category: String,
	pub value: f64,
}

impl TooltipContent {
	pub fn markup(&self) -> String {
		format!(
			"Name: {}<br>Genre: {}<br>Gross: {}",
			escape_html(&self.name),
			escape_html(&self.category),
			format_currency(self.value)
		)
	}
}

/// What the floating info panel should currently show.
///
/// Transitions are pure; [`apply`] pushes a state into the page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipState {
	pub visibility: Visibility,
	pub left: f64,
	pub top: f64,
	pub content: TooltipContent,
}

impl TooltipState {
	pub fn show(&mut self, pointer: Point, movie: &Movie) {
		self.visibility = Visibility::Visible;
		self.left = pointer.x + POINTER_OFFSET.x;
		self.top = pointer.y + POINTER_OFFSET.y;
		self.content = TooltipContent {
			name: movie.name.clone(),
			category: movie.category.clone(),
			value: movie.value,
		};
	}

	/// Hide without forgetting the last content or position.
	pub fn hide(&mut self) {
		self.visibility = Visibility::Hidden;
	}

	pub fn is_visible(&self) -> bool {
		self.visibility == Visibility::Visible
	}
}

/// `$` followed by the value rounded to a whole number with comma grouping.
pub fn format_currency(value: f64) -> String {
	if !value.is_finite() {
		return format!("${value}");
	}
	let rounded = value.round();
	let digits = format!("{:.0}", rounded.abs());
	let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
	for (i, ch) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			grouped.push(',');
		}
		grouped.push(ch);
	}
	if rounded < 0.0 {
		format!("-${grouped}")
	} else {
		format!("${grouped}")
	}
}

fn escape_html(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	for ch in text.chars() {
		match ch {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#39;"),
			_ => out.push(ch),
		}
	}
	out
}

fn tooltip_element() -> Option<HtmlElement> {
	web_sys::window()?
		.document()?
		.get_element_by_id(TOOLTIP_ID)?
		.dyn_into()
		.ok()
}

/// Write `state` into the page's `#tooltip`; does nothing if it is missing.
pub fn apply(state: &TooltipState) {
	let Some(el) = tooltip_element() else {
		debug!("no #{TOOLTIP_ID} element, skipping tooltip update");
		return;
	};
	let style = el.style();
	let _ = style.set_property("visibility", state.visibility.as_css());
	if !state.is_visible() {
		return;
	}
	let _ = style.set_property("left", &format!("{}px", state.left));
	let _ = style.set_property("top", &format!("{}px", state.top));
	let _ = el.set_attribute("data-value", &state.content.value.to_string());
	el.set_inner_html(&state.content.markup());
}

#[cfg(test)]
mod tests {
	use super::*;

	fn avatar() -> Movie {
		Movie {
			name: "Avatar ".into(),
			category: "Action".into(),
			value: 760_167_650.0,
		}
	}

	#[test]
	fn starts_hidden() {
		assert_eq!(TooltipState::default().visibility, Visibility::Hidden);
	}

	#[test]
	fn hover_shows_offset_tooltip_with_details() {
		let mut state = TooltipState::default();
		state.show(Point { x: 100.0, y: 200.0 }, &avatar());
		assert!(state.is_visible());
		assert_eq!((state.left, state.top), (120.0, 185.0));
		let markup = state.content.markup();
		assert!(markup.contains("Avatar "));
		assert!(markup.contains("Action"));
		assert!(markup.contains("$760,167,650"));
	}

	#[test]
	fn repeated_moves_render_the_same_text() {
		let mut a = TooltipState::default();
		a.show(Point { x: 1.0, y: 1.0 }, &avatar());
		let mut b = a.clone();
		b.show(Point { x: 1.0, y: 1.0 }, &avatar());
		assert_eq!(a, b);
	}

	#[test]
	fn leave_hides_but_keeps_content() {
		let mut state = TooltipState::default();
		state.show(Point { x: 0.0, y: 0.0 }, &avatar());
		state.hide();
		assert_eq!(state.visibility, Visibility::Hidden);
		assert_eq!(state.content.name, "Avatar ");
	}

	#[test]
	fn currency_grouping() {
		assert_eq!(format_currency(760_167_650.0), "$760,167,650");
		assert_eq!(format_currency(0.0), "$0");
		assert_eq!(format_currency(999.0), "$999");
		assert_eq!(format_currency(1000.0), "$1,000");
		assert_eq!(format_currency(123_456.6), "$123,457");
		assert_eq!(format_currency(-1234.0), "-$1,234");
		assert_eq!(format_currency(-0.2), "$0");
	}

	#[test]
	fn markup_escapes_names() {
		let content = TooltipContent {
			name: "Tom & Jerry <3".into(),
			category: "Animation".into(),
			value: 1.0,
		};
		assert_eq!(
			content.markup(),
			"Name: Tom &amp; Jerry &lt;3<br>Genre: Animation<br>Gross: $1"
		);
	}
}
