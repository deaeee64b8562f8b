//! Particle pool and per-frame orchestration.

use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::config::FieldConfig;
use super::render::{ParticleSurface, render};
use super::simulation::{Bounds, Particle, Pointer, StepInput, step};
use super::tone::Rgb;

/// Environment snapshot taken at the start of a frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameEnv {
	/// Pointer position for this frame.
	pub pointer: Pointer,
	/// Whether the document is currently visible.
	pub visible: bool,
	/// The viewer asked for no non-essential animation.
	pub reduced_motion: bool,
}

/// What a frame ended up doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
	/// Nothing simulated, nothing drawn.
	Skipped,
	/// Drawn in place, positions untouched.
	Frozen,
	/// Simulated one step, then drawn.
	Advanced,
}

/// Owns the particles of one mounted field.
///
/// The pool grows and shrinks with the field width but never regenerates:
/// resizing keeps every retained particle's motion state.
pub struct ParticlePool {
	particles: Vec<Particle>,
	bounds: Bounds,
	config: FieldConfig,
	rng: SmallRng,
}

impl ParticlePool {
	/// An empty pool; particles appear on the first `resize`.
	pub fn new(config: FieldConfig, seed: u64) -> Self {
		Self {
			particles: Vec::new(),
			bounds: Bounds::default(),
			config,
			rng: SmallRng::seed_from_u64(seed),
		}
	}

	/// Live particles, oldest first.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Current layout size.
	pub fn bounds(&self) -> Bounds {
		self.bounds
	}

	/// Configuration the pool was built with.
	pub fn config(&self) -> &FieldConfig {
		&self.config
	}

	/// Adopt a newly measured container size (floored to whole units).
	///
	/// Non-positive measurements are ignored. Otherwise the pool is brought to
	/// the target count for the width, and when the size actually changed,
	/// every particle is clamped into the new bounds. Returns whether the
	/// size changed, so the caller knows to resize its backing buffer.
	pub fn resize(&mut self, width: f64, height: f64) -> bool {
		let next = Bounds::new(width.floor(), height.floor());
		if next.is_degenerate() {
			return false;
		}

		let changed = next != self.bounds;
		self.bounds = next;

		let target = self.config.population.target_count(next.width);
		if self.particles.len() < target {
			let missing = target - self.particles.len();
			let (spawn, rng) = (&self.config.spawn, &mut self.rng);
			self.particles
				.extend((0..missing).map(|_| Particle::spawn(next, spawn, &mut *rng)));
		} else {
			self.particles.truncate(target);
		}

		if changed {
			for p in &mut self.particles {
				p.clamp_into(next);
			}
		}
		changed
	}

	/// Run one frame: simulate (unless motion is reduced) and draw.
	///
	/// Hidden documents and unsized fields skip the frame entirely; the caller
	/// keeps scheduling frames regardless.
	pub fn frame<S: ParticleSurface + ?Sized>(
		&mut self,
		env: &FrameEnv,
		color: Rgb,
		surface: &mut S,
	) -> FrameOutcome {
		if self.bounds.is_degenerate() || !env.visible {
			return FrameOutcome::Skipped;
		}

		let outcome = if env.reduced_motion {
			FrameOutcome::Frozen
		} else {
			let input = StepInput {
				bounds: self.bounds,
				pointer: env.pointer,
				motion: &self.config.motion,
			};
			self.particles = step(&self.particles, &input, &mut self.rng);
			FrameOutcome::Advanced
		};

		render(
			&self.particles,
			self.bounds,
			color,
			self.config.base_opacity,
			surface,
		);
		outcome
	}
}

#[cfg(test)]
mod tests {
	use super::super::render::recording::RecordingSurface;
	use super::*;

	fn visible() -> FrameEnv {
		FrameEnv {
			pointer: Pointer::default(),
			visible: true,
			reduced_motion: false,
		}
	}

	fn pool(width: f64, height: f64) -> ParticlePool {
		let mut pool = ParticlePool::new(FieldConfig::default(), 42);
		pool.resize(width, height);
		pool
	}

	fn positions(pool: &ParticlePool) -> Vec<(f64, f64)> {
		pool.particles().iter().map(|p| (p.x, p.y)).collect()
	}

	#[test]
	fn count_follows_width() {
		assert_eq!(pool(500.0, 400.0).particles().len(), 90);
		assert_eq!(pool(800.0, 400.0).particles().len(), 150);
		assert_eq!(pool(1400.0, 400.0).particles().len(), 200);
	}

	#[test]
	fn shrinking_keeps_leading_particles() {
		let mut pool = pool(1400.0, 400.0);
		let before = pool.particles().to_vec();

		assert!(pool.resize(500.0, 400.0));
		assert_eq!(pool.particles().len(), 90);

		let bounds = pool.bounds();
		for (kept, original) in pool.particles().iter().zip(&before) {
			let mut expected = *original;
			expected.clamp_into(bounds);
			assert_eq!(*kept, expected);
			if original.is_within(bounds) {
				assert_eq!(kept, original);
			}
		}
	}

	#[test]
	fn growing_appends_without_touching_existing() {
		let mut pool = pool(500.0, 400.0);
		let before = pool.particles().to_vec();

		pool.resize(800.0, 400.0);
		assert_eq!(pool.particles().len(), 150);
		assert_eq!(&pool.particles()[..90], &before[..]);
		assert!(pool.particles()[90..].iter().all(|p| p.is_within(pool.bounds())));
	}

	#[test]
	fn resize_within_breakpoint_keeps_pool() {
		let mut pool = pool(700.0, 400.0);
		let before = pool.particles().to_vec();
		assert!(pool.resize(900.0, 400.0));
		assert_eq!(pool.particles(), &before[..]);
	}

	#[test]
	fn same_size_reports_unchanged() {
		let mut pool = pool(700.0, 400.0);
		assert!(!pool.resize(700.4, 400.9));
	}

	#[test]
	fn degenerate_sizes_are_ignored() {
		let mut pool = pool(700.0, 400.0);
		assert!(!pool.resize(0.0, 400.0));
		assert!(!pool.resize(700.0, -3.0));
		assert_eq!(pool.bounds(), Bounds::new(700.0, 400.0));
		assert_eq!(pool.particles().len(), 150);

		let mut empty = ParticlePool::new(FieldConfig::default(), 1);
		assert!(!empty.resize(0.0, 0.0));
		assert!(empty.particles().is_empty());
	}

	#[test]
	fn unsized_field_skips_frames() {
		let mut pool = ParticlePool::new(FieldConfig::default(), 1);
		let mut surface = RecordingSurface::default();
		assert_eq!(
			pool.frame(&visible(), Rgb::BLACK, &mut surface),
			FrameOutcome::Skipped
		);
		assert!(surface.calls.is_empty());
	}

	#[test]
	fn frames_keep_particles_in_bounds() {
		let mut pool = pool(640.0, 360.0);
		let mut surface = RecordingSurface::default();
		for _ in 0..1_000 {
			assert_eq!(
				pool.frame(&visible(), Rgb::WHITE, &mut surface),
				FrameOutcome::Advanced
			);
		}
		let bounds = pool.bounds();
		assert!(pool.particles().iter().all(|p| p.is_within(bounds)));
	}

	#[test]
	fn reduced_motion_freezes_but_draws() {
		let mut pool = pool(800.0, 400.0);
		let start = positions(&pool);
		let env = FrameEnv {
			reduced_motion: true,
			pointer: Pointer::at(400.0, 200.0),
			..visible()
		};
		let mut surface = RecordingSurface::default();
		for _ in 0..30 {
			assert_eq!(
				pool.frame(&env, Rgb::WHITE, &mut surface),
				FrameOutcome::Frozen
			);
		}
		assert_eq!(positions(&pool), start);
		assert_eq!(surface.circles(), 30 * 150);
	}

	#[test]
	fn hidden_document_pauses_and_resumes() {
		let mut pool = pool(800.0, 400.0);
		let start = positions(&pool);
		let hidden = FrameEnv {
			visible: false,
			..visible()
		};
		let mut surface = RecordingSurface::default();
		for _ in 0..30 {
			assert_eq!(
				pool.frame(&hidden, Rgb::WHITE, &mut surface),
				FrameOutcome::Skipped
			);
		}
		assert_eq!(positions(&pool), start);
		assert!(surface.calls.is_empty());

		assert_eq!(
			pool.frame(&visible(), Rgb::WHITE, &mut surface),
			FrameOutcome::Advanced
		);
		assert_ne!(positions(&pool), start);
		assert_eq!(surface.circles(), 150);
	}

	#[test]
	fn same_seed_same_field() {
		assert_eq!(pool(900.0, 300.0).particles(), pool(900.0, 300.0).particles());
	}
}
