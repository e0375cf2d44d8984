//! Random point sampling inside spheres and cones
//!
//! Cones stand on the XZ plane with their base centered at the origin and
//! their apex at (0, height, 0).

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

/// Outward offset applied to cone surface samples so they sit just outside the volume
pub const CONE_SURFACE_OFFSET: f32 = 0.2;

/// Uniform-by-volume point inside a sphere of `radius`
pub fn sample_sphere_volume<R: Rng + ?Sized>(rng: &mut R, radius: f32) -> Vec3 {
    let theta = rng.random::<f32>() * TAU;
    // acos(2v - 1) keeps directions uniform over the sphere instead of clumping at the poles
    let phi = (2.0 * rng.random::<f32>() - 1.0).acos();
    let r = radius * rng.random::<f32>().cbrt();

    Vec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin(),
        r * phi.cos(),
    )
}

/// Cross-section radius of a cone at height `y`
pub fn cone_radius_at(height: f32, base_radius: f32, y: f32) -> f32 {
    base_radius * (1.0 - y / height)
}

/// Uniform-by-area point inside a cone's cross-section at a uniform height
pub fn sample_cone_volume<R: Rng + ?Sized>(rng: &mut R, height: f32, base_radius: f32) -> Vec3 {
    let y = rng.random::<f32>() * height;
    let max_r = cone_radius_at(height, base_radius, y);
    let r = max_r * rng.random::<f32>().sqrt();
    let angle = rng.random::<f32>() * TAU;

    Vec3::new(r * angle.cos(), y, r * angle.sin())
}

/// Point on the lateral surface of a cone, pushed out by [`CONE_SURFACE_OFFSET`]
pub fn sample_cone_surface<R: Rng + ?Sized>(rng: &mut R, height: f32, base_radius: f32) -> Vec3 {
    let y = rng.random::<f32>() * height;
    let r = cone_radius_at(height, base_radius, y) + CONE_SURFACE_OFFSET;
    let angle = rng.random::<f32>() * TAU;

    Vec3::new(r * angle.cos(), y, r * angle.sin())
}

/// Distance from the vertical (Y) axis
pub fn radial_distance(p: Vec3) -> f32 {
    (p.x * p.x + p.z * p.z).sqrt()
}
