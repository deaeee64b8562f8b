//! Tunable constants for the ambient particle field.
//!
//! Every value the simulation or the renderer reads lives here so a host page
//! can restyle a hero region without touching the physics.

use std::ops::Range;

/// Population breakpoints: fields narrower than `narrow_width` get
/// `narrow_count` particles, narrower than `medium_width` get `medium_count`,
/// anything wider gets `wide_count`.
#[derive(Clone, Debug, PartialEq)]
pub struct PopulationConfig {
	/// Width below which the field counts as narrow.
	pub narrow_width: f64,
	/// Particles on narrow fields.
	pub narrow_count: usize,
	/// Width below which the field counts as medium.
	pub medium_width: f64,
	/// Particles on medium fields.
	pub medium_count: usize,
	/// Particles on anything wider.
	pub wide_count: usize,
}

impl PopulationConfig {
	/// Desired particle count for a field of the given width.
	pub fn target_count(&self, width: f64) -> usize {
		if width < self.narrow_width {
			self.narrow_count
		} else if width < self.medium_width {
			self.medium_count
		} else {
			self.wide_count
		}
	}
}

impl Default for PopulationConfig {
	fn default() -> Self {
		Self {
			narrow_width: 640.0,
			narrow_count: 90,
			medium_width: 1024.0,
			medium_count: 150,
			wide_count: 200,
		}
	}
}

/// Ranges particles are sampled from when the pool grows.
#[derive(Clone, Debug, PartialEq)]
pub struct SpawnConfig {
	/// Particle radius in layout units.
	pub radius: Range<f64>,
	/// Initial speed in layout units per frame.
	pub speed: Range<f64>,
	/// Per-particle opacity factor.
	pub opacity: Range<f64>,
}

impl Default for SpawnConfig {
	fn default() -> Self {
		Self {
			radius: 1.1..3.1,
			speed: 0.03..0.12,
			opacity: 0.35..1.0,
		}
	}
}

/// Per-frame motion parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionConfig {
	/// Amplitude of the random per-axis acceleration.
	pub breeze: f64,
	/// Velocity multiplier applied every frame (< 1).
	pub damping: f64,
	/// Pointer repulsion reaches this far.
	pub interaction_radius: f64,
	/// Peak repulsion acceleration, at the pointer itself.
	pub interaction_strength: f64,
	/// Velocity retained after hitting an edge.
	pub bounce: f64,
}

impl Default for MotionConfig {
	fn default() -> Self {
		Self {
			breeze: 0.0009,
			damping: 0.995,
			interaction_radius: 140.0,
			interaction_strength: 0.035,
			bounce: 0.98,
		}
	}
}

/// Complete particle field configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
	/// How many particles for a given width.
	pub population: PopulationConfig,
	/// Initial particle properties.
	pub spawn: SpawnConfig,
	/// Forces applied every frame.
	pub motion: MotionConfig,
	/// Opacity every particle's own factor is multiplied with.
	pub base_opacity: f64,
	/// Device pixel ratio is clamped to `[min_dpr, max_dpr]`.
	pub min_dpr: f64,
	/// Upper device pixel ratio bound.
	pub max_dpr: f64,
}

impl FieldConfig {
	/// Clamp a reported device pixel ratio. Missing or nonsensical ratios
	/// count as 1.
	pub fn clamp_dpr(&self, dpr: f64) -> f64 {
		if !dpr.is_finite() || dpr <= 0.0 {
			return self.min_dpr;
		}
		dpr.clamp(self.min_dpr, self.max_dpr)
	}

	/// Backing buffer size in device pixels for a field of the given layout
	/// size. Never smaller than 1x1.
	pub fn backing_size(&self, width: f64, height: f64, dpr: f64) -> (u32, u32) {
		let dpr = self.clamp_dpr(dpr);
		let px = |v: f64| (v.max(0.0) * dpr).floor().max(1.0) as u32;
		(px(width), px(height))
	}
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			population: PopulationConfig::default(),
			spawn: SpawnConfig::default(),
			motion: MotionConfig::default(),
			base_opacity: 0.38,
			min_dpr: 1.0,
			max_dpr: 2.0,
		}
	}
}
