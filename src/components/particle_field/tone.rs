//! Particle tone selection and color resolution.

use crate::theme::ColorScheme;

/// Opaque RGB color used as the particle fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
}

impl Rgb {
	/// Dots shown over dark backgrounds.
	pub const WHITE: Rgb = Rgb::new(255, 255, 255);
	/// Dots shown over light backgrounds.
	pub const BLACK: Rgb = Rgb::new(0, 0, 0);

	/// Color from its channels.
	pub const fn new(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// CSS `rgb()` notation.
	pub fn to_css(self) -> String {
		format!("rgb({}, {}, {})", self.r, self.g, self.b)
	}
}

/// Which background the particles are drawn against.
///
/// `Auto` follows the ambient color scheme: light particles on a dark page,
/// dark particles on a light page. The other two variants pin the tone for
/// sections whose background does not follow the scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
	/// Follow the provided color scheme.
	#[default]
	Auto,
	/// White dots for dark backgrounds.
	OnDark,
	/// Black dots for light backgrounds.
	OnLight,
}

impl Tone {
	/// Resolve the tone against the current scheme into a concrete fill color.
	pub fn resolve(self, scheme: ColorScheme) -> Rgb {
		match (self, scheme) {
			(Tone::OnDark, _) | (Tone::Auto, ColorScheme::Dark) => Rgb::WHITE,
			(Tone::OnLight, _) | (Tone::Auto, ColorScheme::Light) => Rgb::BLACK,
		}
	}
}
