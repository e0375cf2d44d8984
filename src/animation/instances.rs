//! Per-element transform storage shared with the render surface
//!
//! Each slot is addressed by the element's index in the dataset. The engine
//! keeps the current position/rotation/scale per slot and recomposes the
//! slot's matrix whenever it writes, so the render surface only ever reads
//! finished matrices.

use glam::{Mat4, Quat, Vec3};

/// Current state of one element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: 1.0,
        }
    }
}

impl Transform {
    pub fn new(position: Vec3, rotation: Quat, scale: f32) -> Self {
        Self { position, rotation, scale }
    }

    /// Move `factor` of the way toward `target`. Scale is taken from the target as-is.
    pub fn blend_toward(&self, target: &Transform, factor: f32) -> Transform {
        Transform {
            position: self.position.lerp(target.position, factor),
            rotation: self.rotation.slerp(target.rotation, factor).normalize(),
            scale: target.scale,
        }
    }

    /// Column-major model matrix
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), self.rotation, self.position)
    }
}

/// Fixed-size arena of element transforms and their composed matrices
#[derive(Debug, Clone)]
pub struct InstanceBuffer {
    transforms: Vec<Transform>,
    matrices: Vec<Mat4>,
}

impl InstanceBuffer {
    /// Allocate `capacity` identity slots
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            transforms: vec![Transform::default(); capacity],
            matrices: vec![Mat4::IDENTITY; capacity],
        }
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    pub fn transform(&self, index: usize) -> Option<&Transform> {
        self.transforms.get(index)
    }

    pub fn matrix(&self, index: usize) -> Option<&Mat4> {
        self.matrices.get(index)
    }

    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    pub fn matrices(&self) -> &[Mat4] {
        &self.matrices
    }

    /// Matrices flattened for GPU upload: 16 floats per element, column-major
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.matrices)
    }

    /// Store a transform and recompose its matrix.
    ///
    /// Slots are only written by the engine, which sized the buffer against
    /// its dataset at setup, so an out-of-range index is a logic error.
    pub(crate) fn write(&mut self, index: usize, transform: Transform) {
        self.matrices[index] = transform.matrix();
        self.transforms[index] = transform;
    }
}

/// Per-ornament RGB colors, filled once at setup
#[derive(Debug, Clone, Default)]
pub struct ColorBuffer {
    colors: Vec<[f32; 3]>,
}

impl ColorBuffer {
    pub fn from_colors(colors: Vec<[f32; 3]>) -> Self {
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }

    /// 3 floats per ornament
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_slots_are_identity() {
        let buffer = InstanceBuffer::with_capacity(4);
        assert_eq!(buffer.len(), 4);
        assert!(buffer.matrices().iter().all(|m| *m == Mat4::IDENTITY));
        assert_eq!(buffer.transform(3), Some(&Transform::default()));
        assert!(buffer.transform(4).is_none());
    }

    #[test]
    fn test_write_recomposes_matrix() {
        let mut buffer = InstanceBuffer::with_capacity(2);
        let transform = Transform::new(Vec3::new(1.0, 2.0, 3.0), Quat::from_rotation_y(0.5), 0.5);
        buffer.write(1, transform);

        let matrix = buffer.matrix(1).unwrap();
        let (scale, rotation, translation) = matrix.to_scale_rotation_translation();
        assert!((translation - transform.position).length() < 1e-5);
        assert!((scale - Vec3::splat(0.5)).length() < 1e-5);
        assert!(rotation.angle_between(transform.rotation) < 1e-3);
        assert_eq!(buffer.matrix(0), Some(&Mat4::IDENTITY));
    }

    #[test]
    fn test_float_layout() {
        let mut buffer = InstanceBuffer::with_capacity(3);
        buffer.write(2, Transform::new(Vec3::new(4.0, 5.0, 6.0), Quat::IDENTITY, 1.0));

        let floats = buffer.as_floats();
        assert_eq!(floats.len(), 3 * 16);
        // Translation lives in the fourth column
        assert_eq!(&floats[2 * 16 + 12..2 * 16 + 15], &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_blend_toward_halfway() {
        let from = Transform::new(Vec3::ZERO, Quat::IDENTITY, 0.5);
        let to = Transform::new(Vec3::new(2.0, 0.0, 0.0), Quat::from_rotation_y(1.0), 1.0);
        let mid = from.blend_toward(&to, 0.5);

        assert!((mid.position.x - 1.0).abs() < 1e-5);
        assert!((mid.rotation.angle_between(Quat::IDENTITY) - 0.5).abs() < 1e-3);
        assert_eq!(mid.scale, 1.0);
        assert!(mid.rotation.is_normalized());
    }

    #[test]
    fn test_color_buffer_floats() {
        let colors = ColorBuffer::from_colors(vec![[1.0, 0.0, 0.0], [0.0, 0.5, 1.0]]);
        assert_eq!(colors.len(), 2);
        assert_eq!(colors.as_floats(), &[1.0, 0.0, 0.0, 0.0, 0.5, 1.0]);
    }
}
