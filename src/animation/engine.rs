//! Per-frame interpolation engine
//!
//! There is no explicit transition: every frame each element decays toward
//! whatever arrangement the current mode selects, at its own speed. A mode
//! flip therefore shows up as sustained blending on the following frames.

use super::instances::{ColorBuffer, InstanceBuffer, Transform};
use super::motion::{blend_factor, needle_target, ornament_target, scatter_rotation, SCATTERED_NEEDLE_SCALE};
use super::topper::TopperAnimator;
use crate::config::TreeConfig;
use crate::data::{ElementDataset, Mode};
use crate::error::{MorphError, Result};

/// Owns the dataset and the buffers it animates
pub struct MorphEngine {
    dataset: ElementDataset,
    needles: InstanceBuffer,
    ornaments: InstanceBuffer,
    ornament_colors: ColorBuffer,
    topper: TopperAnimator,
    clamp_blend: bool,
}

impl MorphEngine {
    /// Build the dataset from `config` and allocate matching buffers
    pub fn new(config: &TreeConfig) -> Result<Self> {
        let dataset = ElementDataset::from_config(config)?;
        let needles = InstanceBuffer::with_capacity(dataset.needle_count());
        let ornaments = InstanceBuffer::with_capacity(dataset.ornament_count());
        Self::with_buffers(config, dataset, needles, ornaments)
    }

    /// Animate into buffers allocated elsewhere.
    ///
    /// Each buffer must have exactly one slot per element of its group. All
    /// slots are written with the scattered starting state before this
    /// returns, so the first `update` always reads initialized transforms.
    pub fn with_buffers(
        config: &TreeConfig,
        dataset: ElementDataset,
        needles: InstanceBuffer,
        ornaments: InstanceBuffer,
    ) -> Result<Self> {
        config.validate()?;
        check_capacity("needles", dataset.needle_count(), needles.len())?;
        check_capacity("ornaments", dataset.ornament_count(), ornaments.len())?;

        let ornament_colors =
            ColorBuffer::from_colors(dataset.ornaments().iter().map(|o| o.color).collect());

        let mut engine = Self {
            dataset,
            needles,
            ornaments,
            ornament_colors,
            topper: TopperAnimator::new(config),
            clamp_blend: config.clamp_blend,
        };
        engine.write_initial_state();

        log::info!(
            "Morph engine ready: {} needles, {} ornaments (clamp_blend = {})",
            engine.needles.len(),
            engine.ornaments.len(),
            engine.clamp_blend
        );

        Ok(engine)
    }

    fn write_initial_state(&mut self) {
        for (index, needle) in self.dataset.needles().iter().enumerate() {
            let start = Transform::new(
                needle.scatter_position,
                scatter_rotation(needle.scatter_euler, 0.0),
                SCATTERED_NEEDLE_SCALE,
            );
            self.needles.write(index, start);
        }
        for (index, ornament) in self.dataset.ornaments().iter().enumerate() {
            let start = ornament_target(ornament, Mode::Scattered, 0.0);
            self.ornaments.write(index, start);
        }
    }

    /// Advance one frame. `time` is total elapsed seconds, `dt` the frame delta.
    pub fn update(&mut self, mode: Mode, time: f32, dt: f32) {
        let dt = sanitize_dt(dt);

        for (index, needle) in self.dataset.needles().iter().enumerate() {
            let target = needle_target(needle, mode, time);
            let factor = blend_factor(needle.speed, dt, self.clamp_blend);
            let next = self.needles.transforms()[index].blend_toward(&target, factor);
            self.needles.write(index, next);
        }

        for (index, ornament) in self.dataset.ornaments().iter().enumerate() {
            let target = ornament_target(ornament, mode, time);
            let factor = blend_factor(ornament.speed, dt, self.clamp_blend);
            let next = self.ornaments.transforms()[index].blend_toward(&target, factor);
            self.ornaments.write(index, next);
        }

        self.topper.update(mode, dt);
    }

    pub fn dataset(&self) -> &ElementDataset {
        &self.dataset
    }

    pub fn needles(&self) -> &InstanceBuffer {
        &self.needles
    }

    pub fn ornaments(&self) -> &InstanceBuffer {
        &self.ornaments
    }

    pub fn ornament_colors(&self) -> &ColorBuffer {
        &self.ornament_colors
    }

    pub fn topper(&self) -> &TopperAnimator {
        &self.topper
    }
}

fn check_capacity(group: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(MorphError::CapacityMismatch { group, expected, actual })
    }
}

/// Negative or non-finite deltas freeze the frame instead of poisoning every transform
fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt >= 0.0 {
        dt
    } else {
        log::warn!("Ignoring invalid frame delta {}", dt);
        0.0
    }
}
