//! Drawing the particle field.
//!
//! The renderer talks to a [`ParticleSurface`] rather than to the canvas
//! directly. The browser implementation wraps a 2D context; tests record the
//! calls instead.

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::simulation::{Bounds, Particle};
use super::tone::Rgb;

/// Minimal drawing surface the field needs.
pub trait ParticleSurface {
	/// Erase the whole surface.
	fn clear(&mut self, bounds: Bounds);
	/// Set the fill color for subsequent circles.
	fn set_fill(&mut self, color: Rgb);
	/// Paint a filled circle at the given opacity.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, alpha: f64);
	/// Called once after the last circle of a frame.
	fn finish(&mut self) {}
}

impl ParticleSurface for CanvasRenderingContext2d {
	fn clear(&mut self, bounds: Bounds) {
		self.clear_rect(0.0, 0.0, bounds.width, bounds.height);
	}

	fn set_fill(&mut self, color: Rgb) {
		self.set_fill_style_str(&color.to_css());
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, alpha: f64) {
		self.set_global_alpha(alpha);
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, TAU);
		self.fill();
	}

	fn finish(&mut self) {
		self.set_global_alpha(1.0);
	}
}

/// Paints every particle in a single color, each at `base_opacity` scaled by
/// its own opacity factor.
pub fn render<S: ParticleSurface + ?Sized>(
	particles: &[Particle],
	bounds: Bounds,
	color: Rgb,
	base_opacity: f64,
	surface: &mut S,
) {
	surface.clear(bounds);
	surface.set_fill(color);
	for p in particles {
		surface.fill_circle(p.x, p.y, p.radius, base_opacity * p.opacity);
	}
	surface.finish();
}


#[cfg(test)]
mod tests {
	use super::recording::{DrawCall, RecordingSurface};
	use super::*;

	#[test]
	fn clears_then_fills_each_particle() {
		let particles = [
			Particle {
				x: 10.0,
				y: 20.0,
				vx: 0.0,
				vy: 0.0,
				radius: 2.0,
				opacity: 0.5,
			},
			Particle {
				x: 30.0,
				y: 40.0,
				vx: 1.0,
				vy: 1.0,
				radius: 3.0,
				opacity: 1.0,
			},
		];
		let bounds = Bounds::new(100.0, 50.0);
		let mut surface = RecordingSurface::default();

		render(&particles, bounds, Rgb::WHITE, 0.4, &mut surface);

		assert_eq!(
			surface.calls,
			vec![
				DrawCall::Clear(bounds),
				DrawCall::Fill(Rgb::WHITE),
				DrawCall::Circle {
					x: 10.0,
					y: 20.0,
					radius: 2.0,
					alpha: 0.2
				},
				DrawCall::Circle {
					x: 30.0,
					y: 40.0,
					radius: 3.0,
					alpha: 0.4
				},
				DrawCall::Finish,
			]
		);
	}

	#[test]
	fn empty_pool_still_clears() {
		let mut surface = RecordingSurface::default();
		render(&[], Bounds::new(10.0, 10.0), Rgb::BLACK, 0.38, &mut surface);
		assert_eq!(surface.circles(), 0);
		assert_eq!(surface.calls.first(), Some(&DrawCall::Clear(Bounds::new(10.0, 10.0))));
	}
}
