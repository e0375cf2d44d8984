//! Static per-element attributes
//!
//! Built once per session. Every element gets both of its target positions,
//! its blend speed and a phase for secondary motion up front, so the
//! per-frame pass only reads from here.

use std::f32::consts::TAU;
use std::ops::Range;

use glam::{EulerRot, Quat, Vec3};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::config::TreeConfig;
use crate::error::Result;
use crate::math::{sample_cone_surface, sample_cone_volume, sample_sphere_volume};

/// Blend speed range for needles
pub const NEEDLE_SPEED_RANGE: Range<f32> = 0.04..0.08;
/// Blend speed range for ornaments (slower, so they feel heavier)
pub const ORNAMENT_SPEED_RANGE: Range<f32> = 0.02..0.05;
/// Ornament scale range
pub const ORNAMENT_SCALE_RANGE: Range<f32> = 0.15..0.35;
/// Maximum arranged-mode tilt of a needle on X and Z (radians)
pub const NEEDLE_TILT: f32 = 0.25;

/// Ornament colors: gold, crimson, silver
pub const ORNAMENT_PALETTE: [[f32; 3]; 3] = [
    [1.0, 0.84, 0.0],
    [0.86, 0.08, 0.24],
    [0.75, 0.75, 0.8],
];

/// Static attributes of one needle
#[derive(Debug, Clone, PartialEq)]
pub struct NeedleData {
    pub scatter_position: Vec3,
    pub arranged_position: Vec3,
    /// Mostly upright, randomly twisted about Y
    pub arranged_rotation: Quat,
    /// Euler XYZ angles of the scattered orientation before the idle spin
    pub scatter_euler: Vec3,
    pub speed: f32,
    /// Phase offset for the scattered drift
    pub phase: f32,
}

/// Static attributes of one ornament
#[derive(Debug, Clone, PartialEq)]
pub struct OrnamentData {
    pub scatter_position: Vec3,
    pub arranged_position: Vec3,
    pub color: [f32; 3],
    pub scale: f32,
    pub speed: f32,
    pub phase: f32,
}

/// Immutable table of every element's static attributes
#[derive(Debug, Clone)]
pub struct ElementDataset {
    needles: Vec<NeedleData>,
    ornaments: Vec<OrnamentData>,
}

impl ElementDataset {
    /// Build a dataset from a seed taken from the config
    pub fn from_config(config: &TreeConfig) -> Result<Self> {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(config.seed);
        Self::build(config, &mut rng)
    }

    /// Build a dataset drawing every random value from `rng`
    pub fn build<R: Rng + ?Sized>(config: &TreeConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;

        let needles: Vec<NeedleData> = (0..config.needle_count)
            .map(|i| build_needle(config, rng, i))
            .collect();
        let ornaments: Vec<OrnamentData> = (0..config.ornament_count)
            .map(|i| build_ornament(config, rng, i))
            .collect();

        log::info!(
            "Built element dataset: {} needles, {} ornaments",
            needles.len(),
            ornaments.len()
        );

        Ok(Self { needles, ornaments })
    }

    pub fn needles(&self) -> &[NeedleData] {
        &self.needles
    }

    pub fn ornaments(&self) -> &[OrnamentData] {
        &self.ornaments
    }

    pub fn needle_count(&self) -> usize {
        self.needles.len()
    }

    pub fn ornament_count(&self) -> usize {
        self.ornaments.len()
    }
}

fn build_needle<R: Rng + ?Sized>(config: &TreeConfig, rng: &mut R, index: usize) -> NeedleData {
    let scatter_position = sample_sphere_volume(rng, config.scatter_radius);
    let arranged_position = sample_cone_volume(rng, config.tree_height, config.tree_base_radius);

    let tilt_x = rng.random_range(-NEEDLE_TILT..NEEDLE_TILT);
    let spin_y = rng.random::<f32>() * TAU;
    let tilt_z = rng.random_range(-NEEDLE_TILT..NEEDLE_TILT);
    let arranged_rotation = Quat::from_euler(EulerRot::XYZ, tilt_x, spin_y, tilt_z);

    let scatter_euler = Vec3::new(
        rng.random::<f32>() * TAU,
        rng.random::<f32>() * TAU,
        rng.random::<f32>() * TAU,
    );

    NeedleData {
        scatter_position,
        arranged_position,
        arranged_rotation,
        scatter_euler,
        speed: rng.random_range(NEEDLE_SPEED_RANGE),
        phase: index as f32,
    }
}

fn build_ornament<R: Rng + ?Sized>(config: &TreeConfig, rng: &mut R, index: usize) -> OrnamentData {
    let scatter_position = sample_sphere_volume(rng, config.scatter_radius);
    let arranged_position = sample_cone_surface(rng, config.tree_height, config.tree_base_radius);
    let color = ORNAMENT_PALETTE[rng.random_range(0..ORNAMENT_PALETTE.len())];

    OrnamentData {
        scatter_position,
        arranged_position,
        color,
        scale: rng.random_range(ORNAMENT_SCALE_RANGE),
        speed: rng.random_range(ORNAMENT_SPEED_RANGE),
        phase: index as f32,
    }
}
