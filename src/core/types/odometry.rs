//! Odometry sample types.

use serde::{Deserialize, Serialize};

use super::Position3D;

/// Orientation quaternion (x, y, z, w).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
    /// W (scalar) component
    pub w: f32,
}

impl Quaternion {
    /// Create a new quaternion from raw components.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Identity rotation.
    #[inline]
    pub fn identity() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 1.0,
        }
    }

    /// Quaternion for a pure yaw rotation (about +z).
    #[inline]
    pub fn from_yaw(yaw: f32) -> Self {
        let half = yaw * 0.5;
        Self {
            x: 0.0,
            y: 0.0,
            z: half.sin(),
            w: half.cos(),
        }
    }

    /// Extract the yaw (heading) angle in radians, in [-π, π].
    #[inline]
    pub fn yaw(&self) -> f32 {
        let siny_cosp = 2.0 * (self.w * self.z + self.x * self.y);
        let cosy_cosp = 1.0 - 2.0 * (self.y * self.y + self.z * self.z);
        siny_cosp.atan2(cosy_cosp)
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

/// One odometry message from a recorded run.
///
/// Carries the estimated pose (position + orientation) and the yaw turn
/// rate from the twist portion of the source message.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OdometrySample {
    /// Estimated position in meters
    pub position: Position3D,
    /// Estimated orientation
    pub orientation: Quaternion,
    /// Angular velocity about +z in rad/s
    pub angular_rate_z: f32,
}

impl OdometrySample {
    /// Create a new odometry sample.
    #[inline]
    pub fn new(position: Position3D, orientation: Quaternion, angular_rate_z: f32) -> Self {
        Self {
            position,
            orientation,
            angular_rate_z,
        }
    }

    /// Sample at a position with identity orientation and zero turn rate.
    #[inline]
    pub fn at_position(position: Position3D) -> Self {
        Self::new(position, Quaternion::identity(), 0.0)
    }
}
