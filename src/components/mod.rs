//! UI components.

pub mod catalog;
pub mod inquiry;
pub mod particle_field;
