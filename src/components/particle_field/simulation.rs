//! Particle physics for the ambient field.
//!
//! The simulation is a pure function of the previous particles, the field
//! bounds, the pointer and the motion constants: [`step`] never touches the
//! DOM, so every behavior here is exercised without a frame scheduler.

use std::f64::consts::TAU;
use std::ops::Range;

use rand::Rng;

use super::config::{MotionConfig, SpawnConfig};

/// A single floating dot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position in layout pixels.
	pub x: f64,
	/// Vertical position in layout pixels.
	pub y: f64,
	/// Horizontal velocity per frame.
	pub vx: f64,
	/// Vertical velocity per frame.
	pub vy: f64,
	/// Dot radius in layout pixels.
	pub radius: f64,
	/// Multiplied with the field's base opacity when drawn.
	pub opacity: f64,
}

/// Layout size of the drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
	/// Width in layout pixels.
	pub width: f64,
	/// Height in layout pixels.
	pub height: f64,
}

impl Bounds {
	/// Bounds of a `width` by `height` surface.
	pub fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// Zero or negative sized surfaces cannot hold particles.
	pub fn is_degenerate(&self) -> bool {
		!(self.width > 0.0 && self.height > 0.0)
	}
}

/// Last known pointer position relative to the field container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
	/// Horizontal offset from the container.
	pub x: f64,
	/// Vertical offset from the container.
	pub y: f64,
	/// Cleared when the window loses focus.
	pub active: bool,
}

impl Pointer {
	/// An active pointer at `(x, y)`.
	pub fn at(x: f64, y: f64) -> Self {
		Self { x, y, active: true }
	}
}

/// Everything one simulation step reads besides the particles themselves.
#[derive(Clone, Copy, Debug)]
pub struct StepInput<'a> {
	/// Surface the particles live in.
	pub bounds: Bounds,
	/// Pointer to repel from.
	pub pointer: Pointer,
	/// Forces applied this step.
	pub motion: &'a MotionConfig,
}

fn sample<R: Rng + ?Sized>(rng: &mut R, range: &Range<f64>) -> f64 {
	if range.start < range.end {
		rng.gen_range(range.start..range.end)
	} else {
		range.start
	}
}

impl Particle {
	/// Sample a fresh particle somewhere inside `bounds`.
	pub fn spawn<R: Rng + ?Sized>(bounds: Bounds, spawn: &SpawnConfig, rng: &mut R) -> Self {
		let radius = sample(rng, &spawn.radius);
		let speed = sample(rng, &spawn.speed);
		let angle = rng.gen_range(0.0..TAU);
		let x_max = radius.max(bounds.width - radius);
		let y_max = radius.max(bounds.height - radius);

		Self {
			x: rng.gen_range(radius..=x_max),
			y: rng.gen_range(radius..=y_max),
			vx: angle.cos() * speed,
			vy: angle.sin() * speed,
			radius,
			opacity: sample(rng, &spawn.opacity),
		}
	}

	/// Pull the particle back inside `bounds`, leaving velocity untouched.
	pub fn clamp_into(&mut self, bounds: Bounds) {
		self.x = self.x.max(self.radius).min(bounds.width - self.radius);
		self.y = self.y.max(self.radius).min(bounds.height - self.radius);
	}

	/// Whether the particle lies within `[radius, dimension - radius]` on both axes.
	pub fn is_within(&self, bounds: Bounds) -> bool {
		self.x >= self.radius
			&& self.x <= bounds.width - self.radius
			&& self.y >= self.radius
			&& self.y <= bounds.height - self.radius
	}
}

/// Clamp a coordinate to `[lo, hi]`, reflecting (and damping) its velocity
/// away from whichever edge was reached.
fn bounce(pos: f64, vel: f64, lo: f64, hi: f64, retain: f64) -> (f64, f64) {
	if pos <= lo {
		(lo, vel.abs() * retain)
	} else if pos >= hi {
		(hi, -vel.abs() * retain)
	} else {
		(pos, vel)
	}
}

fn advance<R: Rng + ?Sized>(mut p: Particle, input: &StepInput<'_>, rng: &mut R) -> Particle {
	let motion = input.motion;
	let pointer = input.pointer;

	if pointer.active {
		let (dx, dy) = (p.x - pointer.x, p.y - pointer.y);
		let d2 = dx * dx + dy * dy;
		let reach = motion.interaction_radius;
		if d2 > 1.0 && d2 < reach * reach {
			let d = d2.sqrt();
			let push = (1.0 - d / reach) * motion.interaction_strength;
			p.vx += dx / d * push;
			p.vy += dy / d * push;
		}
	}

	let ax = rng.gen_range(-0.5..0.5) * motion.breeze;
	let ay = rng.gen_range(-0.5..0.5) * motion.breeze;
	p.vx = (p.vx + ax) * motion.damping;
	p.vy = (p.vy + ay) * motion.damping;

	p.x += p.vx;
	p.y += p.vy;

	let Bounds { width, height } = input.bounds;
	(p.x, p.vx) = bounce(p.x, p.vx, p.radius, width - p.radius, motion.bounce);
	(p.y, p.vy) = bounce(p.y, p.vy, p.radius, height - p.radius, motion.bounce);
	p
}

/// Advance every particle by one frame and return the next generation.
pub fn step<R: Rng + ?Sized>(
	particles: &[Particle],
	input: &StepInput<'_>,
	rng: &mut R,
) -> Vec<Particle> {
	particles.iter().map(|&p| advance(p, input, rng)).collect()
}
