//! Animation module for the scatter/tree morph
//!
//! Holds the per-frame interpolation engine, the instance buffers it writes,
//! the motion targets it blends toward and the topper.

mod engine;
mod instances;
pub mod motion;
mod topper;

pub use engine::MorphEngine;
pub use instances::{ColorBuffer, InstanceBuffer, Transform};
pub use motion::blend_factor;
pub use topper::TopperAnimator;
