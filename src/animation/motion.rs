//! Target transforms and secondary motion
//!
//! Blend speeds in the dataset are tuned per 60 Hz update, so the blend
//! factor rescales them by the real frame delta.

use glam::{EulerRot, Quat, Vec3};

use super::instances::Transform;
use crate::data::{Mode, NeedleData, OrnamentData};

/// Update rate the per-element speed constants were tuned for
pub const BASELINE_FPS: f32 = 60.0;
/// Idle spin of scattered needles about Y (radians per second)
pub const SCATTER_SPIN_RATE: f32 = 0.5;
/// Amplitude of the scattered drift
pub const DRIFT_AMPLITUDE: f32 = 0.3;
/// Amplitude of the arranged ornament bob
pub const BOB_AMPLITUDE: f32 = 0.05;
pub const ARRANGED_NEEDLE_SCALE: f32 = 1.0;
pub const SCATTERED_NEEDLE_SCALE: f32 = 0.5;

/// Per-frame interpolation weight for a per-element `speed`
pub fn blend_factor(speed: f32, dt: f32, clamp: bool) -> f32 {
    let factor = speed * BASELINE_FPS * dt;
    if clamp {
        factor.clamp(0.0, 1.0)
    } else {
        factor
    }
}

/// Out-of-sync floating offset for scattered elements
pub fn scatter_drift(time: f32, phase: f32) -> Vec3 {
    Vec3::new(
        (time * 0.7 + phase).cos() * DRIFT_AMPLITUDE * 0.5,
        (time + phase).sin() * DRIFT_AMPLITUDE,
        (time * 0.9 + phase).sin() * DRIFT_AMPLITUDE * 0.5,
    )
}

/// Gentle vertical bob of ornaments hanging on the tree
pub fn ornament_bob(time: f32, phase: f32) -> Vec3 {
    Vec3::new(0.0, (time * 2.0 + phase).sin() * BOB_AMPLITUDE, 0.0)
}

/// Scattered orientation, spinning about Y as time passes
pub fn scatter_rotation(euler: Vec3, time: f32) -> Quat {
    Quat::from_euler(EulerRot::XYZ, euler.x, euler.y + time * SCATTER_SPIN_RATE, euler.z)
}

pub fn needle_target(needle: &NeedleData, mode: Mode, time: f32) -> Transform {
    match mode {
        Mode::Arranged => Transform::new(
            needle.arranged_position,
            needle.arranged_rotation,
            ARRANGED_NEEDLE_SCALE,
        ),
        Mode::Scattered => Transform::new(
            needle.scatter_position + scatter_drift(time, needle.phase),
            scatter_rotation(needle.scatter_euler, time),
            SCATTERED_NEEDLE_SCALE,
        ),
    }
}

/// Ornaments don't rotate and keep their own scale in both modes
pub fn ornament_target(ornament: &OrnamentData, mode: Mode, time: f32) -> Transform {
    let position = match mode {
        Mode::Arranged => ornament.arranged_position + ornament_bob(time, ornament.phase),
        Mode::Scattered => ornament.scatter_position + scatter_drift(time, ornament.phase),
    };
    Transform::new(position, Quat::IDENTITY, ornament.scale)
}
