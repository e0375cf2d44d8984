pub mod sampling;

pub use glam::{Mat4, Quat, Vec3};
pub use sampling::{
    cone_radius_at, radial_distance, sample_cone_surface, sample_cone_volume,
    sample_sphere_volume, CONE_SURFACE_OFFSET,
};
