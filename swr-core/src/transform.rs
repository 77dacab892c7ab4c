//! Transform matrix builders.
use nalgebra::{Matrix4, Vector3};

/// Matrix builders for the world-transform updates.
pub struct Transform;

impl Transform {
    /// Builds a combined rotation from yaw (Y), pitch (X) and roll (Z)
    /// angles in radians, composed as roll * pitch * yaw. The order is part
    /// of the animation contract and must not change.
    pub fn rotation_ypr(yaw: f32, pitch: f32, roll: f32) -> Matrix4<f32> {
        let yaw_m = Matrix4::new_rotation(Vector3::y() * yaw);
        let pitch_m = Matrix4::new_rotation(Vector3::x() * pitch);
        let roll_m = Matrix4::new_rotation(Vector3::z() * roll);

        roll_m * pitch_m * yaw_m
    }

    /// Creates a translation matrix.
    pub fn translation(x: f32, y: f32, z: f32) -> Matrix4<f32> {
        Matrix4::new_translation(&Vector3::new(x, y, z))
    }
}
