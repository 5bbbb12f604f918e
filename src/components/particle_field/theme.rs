//! Light/dark theming for the particle field.
//!
//! Provides the color type, the per-mode particle palettes, and the line/backdrop
//! styling that changes with the page theme.

use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red.
	pub r: u8,
	/// Green.
	pub g: u8,
	/// Blue.
	pub b: u8,
	/// Alpha in `[0, 1]`.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same hue, alpha replaced.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Same hue, alpha multiplied by `factor`.
	pub fn fade(self, factor: f64) -> Self {
		Self {
			a: (self.a * factor).clamp(0.0, 1.0),
			..self
		}
	}

	/// Whether both colors share a hue, ignoring alpha.
	pub fn same_rgb(self, other: Color) -> bool {
		self.r == other.r && self.g == other.g && self.b == other.b
	}

	/// `#rrggbb` when opaque, `rgba(...)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}

	/// Parses a CSS color string.
	/// Supports hex (`#RRGGBB`) and `rgb()`/`rgba()` functional notation.
	pub fn parse(color_str: &str) -> Option<Color> {
		let s = color_str.trim();
		if let Some(hex) = s.strip_prefix('#') {
			if hex.len() != 6 || !hex.is_ascii() {
				return None;
			}
			let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
			let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
			let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
			Some(Color::rgb(r, g, b))
		} else if s.starts_with("rgb") {
			let nums: Vec<&str> = s
				.trim_start_matches("rgba(")
				.trim_start_matches("rgb(")
				.trim_end_matches(')')
				.split(',')
				.map(str::trim)
				.collect();
			let r = nums.first()?.parse().ok()?;
			let g = nums.get(1)?.parse().ok()?;
			let b = nums.get(2)?.parse().ok()?;
			let a: f64 = match nums.get(3) {
				Some(a) => a.parse().ok().filter(|a: &f64| a.is_finite())?,
				None => 1.0,
			};
			if nums.len() > 4 {
				return None;
			}
			let a = a.clamp(0.0, 1.0);
			Some(Color::rgba(r, g, b, a))
		} else {
			None
		}
	}
}

/// Page theme as toggled by the host page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
	/// Dark background.
	#[default]
	Dark,
	/// Light background.
	Light,
}

impl ThemeMode {
	/// The other mode.
	pub fn toggled(self) -> Self {
		match self {
			ThemeMode::Dark => ThemeMode::Light,
			ThemeMode::Light => ThemeMode::Dark,
		}
	}

	/// Value used for the `data-theme` document attribute.
	pub fn as_str(self) -> &'static str {
		match self {
			ThemeMode::Dark => "dark",
			ThemeMode::Light => "light",
		}
	}

	/// Anything other than `"light"` is treated as dark.
	pub fn from_attr(value: Option<&str>) -> Self {
		match value {
			Some("light") => ThemeMode::Light,
			_ => ThemeMode::Dark,
		}
	}
}

/// Radial gradient painted behind the particles when the backdrop is enabled.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	/// Center color
	pub inner: Color,
	/// Midpoint color
	pub middle: Color,
	/// Edge color
	pub outer: Color,
	/// Gradient radius as a fraction of the canvas width
	pub reach: f64,
}

/// Complete visual theme for one [`ThemeMode`].
#[derive(Clone, Debug)]
pub struct FieldTheme {
	pub mode: ThemeMode,
	/// Colors particles are drawn from
	pub palette: Vec<Color>,
	/// Particle-to-particle line color; its alpha is the base alpha of the falloff
	pub connection: Color,
	/// Particle-to-pointer line color; its alpha is the base alpha of the falloff
	pub pointer_link: Color,
	/// Multiplier applied to each particle's own opacity
	pub dot_alpha: f64,
	/// Backdrop gradient.
	pub background: BackgroundStyle,
}

impl FieldTheme {
	/// Theme for `mode`.
	pub fn for_mode(mode: ThemeMode) -> Self {
		match mode {
			ThemeMode::Dark => Self::dark(),
			ThemeMode::Light => Self::light(),
		}
	}

	/// Violet and indigo on a near-black backdrop
	pub fn dark() -> Self {
		Self {
			mode: ThemeMode::Dark,
			palette: vec![
				Color::rgb(139, 92, 246),  // Violet
				Color::rgb(99, 102, 241),  // Indigo
				Color::rgb(167, 139, 250), // Lavender
				Color::rgb(129, 140, 248), // Periwinkle
				Color::rgb(192, 132, 252), // Orchid
			],
			connection: Color::rgba(139, 92, 246, 0.08),
			pointer_link: Color::rgba(167, 139, 250, 0.2),
			dot_alpha: 1.0,
			background: BackgroundStyle {
				inner: Color::rgb(15, 15, 25),
				middle: Color::rgb(10, 10, 18),
				outer: Color::rgb(5, 5, 12),
				reach: 0.7,
			},
		}
	}

	/// Deeper violets, dimmer dots, for light pages
	pub fn light() -> Self {
		Self {
			mode: ThemeMode::Light,
			palette: vec![
				Color::rgb(124, 58, 237), // Deep violet
				Color::rgb(79, 70, 229),  // Deep indigo
				Color::rgb(99, 102, 241), // Indigo
				Color::rgb(139, 92, 246), // Violet
				Color::rgb(167, 139, 250), // Lavender
			],
			connection: Color::rgba(124, 58, 237, 0.12),
			pointer_link: Color::rgba(124, 58, 237, 0.25),
			dot_alpha: 0.7,
			background: BackgroundStyle {
				inner: Color::rgb(250, 250, 255),
				middle: Color::rgb(244, 243, 252),
				outer: Color::rgb(236, 234, 248),
				reach: 0.7,
			},
		}
	}

	/// Whether `color` (ignoring alpha) belongs to this theme's palette.
	pub fn owns(&self, color: Color) -> bool {
		self.palette.iter().any(|c| c.same_rgb(color))
	}
}

impl Default for FieldTheme {
	fn default() -> Self {
		Self::dark()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_hex_and_functional_notation() {
		assert_eq!(Color::parse("#8b5cf6"), Some(Color::rgb(139, 92, 246)));
		assert_eq!(
			Color::parse("rgba(99, 102, 241, 0.6)"),
			Some(Color::rgba(99, 102, 241, 0.6))
		);
		assert_eq!(Color::parse("rgb(1,2,3)"), Some(Color::rgb(1, 2, 3)));
		assert_eq!(Color::parse("#abc"), None);
		assert_eq!(Color::parse("tomato"), None);
	}

	#[test]
	fn css_output_drops_alpha_when_opaque() {
		assert_eq!(Color::rgb(255, 0, 16).to_css(), "#ff0010");
		assert_eq!(
			Color::rgba(1, 2, 3, 0.5).to_css(),
			"rgba(1, 2, 3, 0.5)"
		);
	}

	#[test]
	fn theme_attribute_defaults_to_dark() {
		assert_eq!(ThemeMode::from_attr(None), ThemeMode::Dark);
		assert_eq!(ThemeMode::from_attr(Some("sepia")), ThemeMode::Dark);
		assert_eq!(ThemeMode::from_attr(Some("light")), ThemeMode::Light);
		assert_eq!(ThemeMode::Light.toggled().as_str(), "dark");
	}

	#[test]
	fn palettes_differ_between_modes() {
		let dark = FieldTheme::dark();
		let light = FieldTheme::light();
		assert!(light.palette.iter().any(|c| !dark.owns(*c)));
		assert!(light.dot_alpha < dark.dot_alpha);
	}
}
