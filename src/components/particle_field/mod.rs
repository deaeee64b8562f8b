//! Ambient particle field for decorative hero regions.
//!
//! Draws a field of slowly drifting dots on a canvas that fills its parent:
//! - Gentle random breeze with per-frame damping and soft edge bounces
//! - Local repulsion around the pointer
//! - Population that follows the container width across resizes
//! - Light or dark dots following the color scheme
//! - Paused while the tab is hidden, frozen under reduced motion
//!
//! # Example
//!
//! ```ignore
//! use print_storefront::{ParticleField, Tone};
//!
//! view! {
//!     <section class="hero" style="position: relative;">
//!         <ParticleField tone=Tone::Auto class="hero-particles" />
//!         <h1>"Impresiones 3D"</h1>
//!     </section>
//! }
//! ```

mod component;
pub mod config;
mod field;
mod render;
pub mod simulation;
pub mod tone;

pub use component::ParticleField;
pub use config::FieldConfig;
pub use field::{FrameEnv, FrameOutcome, ParticlePool};
pub use render::{ParticleSurface, render};
pub use tone::{Rgb, Tone};
