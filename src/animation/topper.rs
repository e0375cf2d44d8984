//! The star on top of the tree
//!
//! Same decay-toward-target idea as the needles, but for a single element
//! with a fixed rate: it rises away and shrinks to nothing while scattered,
//! and settles just above the apex at full size when arranged.

use glam::{Mat4, Quat, Vec3};

use super::motion::blend_factor;
use crate::config::TreeConfig;
use crate::data::Mode;

/// Height the topper retreats to while scattered
pub const TOPPER_AWAY_HEIGHT: f32 = 30.0;
/// Distance above the cone apex when arranged
pub const TOPPER_APEX_OFFSET: f32 = 0.4;
/// Fixed blend speed (per 60 Hz update)
pub const TOPPER_SPEED: f32 = 0.05;
/// Spin about Y in radians per second
pub const TOPPER_SPIN_RATE: f32 = 1.0;

#[derive(Debug, Clone)]
pub struct TopperAnimator {
    height: f32,
    spin: f32,
    scale: f32,
    apex_height: f32,
    clamp_blend: bool,
}

impl TopperAnimator {
    /// Starts hidden, up at the away height
    pub fn new(config: &TreeConfig) -> Self {
        Self {
            height: TOPPER_AWAY_HEIGHT,
            spin: 0.0,
            scale: 0.0,
            apex_height: config.tree_height + TOPPER_APEX_OFFSET,
            clamp_blend: config.clamp_blend,
        }
    }

    pub fn target_height(&self, mode: Mode) -> f32 {
        match mode {
            Mode::Arranged => self.apex_height,
            Mode::Scattered => TOPPER_AWAY_HEIGHT,
        }
    }

    pub fn target_scale(mode: Mode) -> f32 {
        match mode {
            Mode::Arranged => 1.0,
            Mode::Scattered => 0.0,
        }
    }

    pub fn update(&mut self, mode: Mode, dt: f32) {
        let factor = blend_factor(TOPPER_SPEED, dt, self.clamp_blend);
        self.height += (self.target_height(mode) - self.height) * factor;
        self.scale += (Self::target_scale(mode) - self.scale) * factor;
        self.spin += TOPPER_SPIN_RATE * dt;
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn spin(&self) -> f32 {
        self.spin
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_rotation_y(self.spin),
            Vec3::new(0.0, self.height, 0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn run(topper: &mut TopperAnimator, mode: Mode, seconds: f32) {
        let frames = (seconds / DT) as usize;
        for _ in 0..frames {
            topper.update(mode, DT);
        }
    }

    #[test]
    fn test_starts_hidden() {
        let topper = TopperAnimator::new(&TreeConfig::default());
        assert_eq!(topper.scale(), 0.0);
        assert_eq!(topper.height(), TOPPER_AWAY_HEIGHT);
    }

    #[test]
    fn test_settles_on_apex() {
        let config = TreeConfig::default();
        let mut topper = TopperAnimator::new(&config);
        run(&mut topper, Mode::Arranged, 10.0);

        assert!((topper.height() - (config.tree_height + TOPPER_APEX_OFFSET)).abs() < 1e-3);
        assert!((topper.scale() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_hides_when_scattered() {
        let mut topper = TopperAnimator::new(&TreeConfig::default());
        run(&mut topper, Mode::Arranged, 10.0);
        run(&mut topper, Mode::Scattered, 10.0);

        assert!(topper.scale() < 1e-3);
        assert!((topper.height() - TOPPER_AWAY_HEIGHT).abs() < 1e-2);
    }

    #[test]
    fn test_spins_in_both_modes() {
        let mut topper = TopperAnimator::new(&TreeConfig::default());
        let mut previous = topper.spin();
        for mode in [Mode::Scattered, Mode::Arranged] {
            for _ in 0..30 {
                topper.update(mode, DT);
                assert!(topper.spin() > previous);
                previous = topper.spin();
            }
        }
        assert!((topper.spin() - 60.0 * DT * TOPPER_SPIN_RATE).abs() < 1e-4);
    }

    #[test]
    fn test_long_frame_does_not_overshoot() {
        let mut topper = TopperAnimator::new(&TreeConfig::default());
        topper.update(Mode::Arranged, 5.0);
        assert_eq!(topper.scale(), 1.0);
    }

    #[test]
    fn test_matrix_translation() {
        let mut topper = TopperAnimator::new(&TreeConfig::default());
        run(&mut topper, Mode::Arranged, 10.0);
        let (_, _, translation) = topper.matrix().to_scale_rotation_translation();
        assert!((translation.y - topper.height()).abs() < 1e-4);
        assert!(translation.x.abs() < 1e-6);
    }
}
