//! World bounds: the volume the camera must stay inside

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::{SKYBOX_SIZE, SKYBOX_Y_MAX, SKYBOX_Y_MIN};

/// Box symmetric about the origin on X/Z, `[y_min, y_max]` on Y
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldBounds {
    pub half_extent: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self {
            half_extent: SKYBOX_SIZE / 2.0,
            y_min: SKYBOX_Y_MIN,
            y_max: SKYBOX_Y_MAX,
        }
    }
}

impl WorldBounds {
    /// Inclusive containment; the faces count as inside
    pub fn contains(&self, p: Vec3) -> bool {
        p.x >= -self.half_extent
            && p.x <= self.half_extent
            && p.z >= -self.half_extent
            && p.z <= self.half_extent
            && p.y >= self.y_min
            && p.y <= self.y_max
    }

    /// Corners of the box
    pub fn min(&self) -> Vec3 {
        Vec3::new(-self.half_extent, self.y_min, -self.half_extent)
    }

    pub fn max(&self) -> Vec3 {
        Vec3::new(self.half_extent, self.y_max, self.half_extent)
    }
}

/// True when the camera has left the bounds and the world must reset
pub fn check_bounds(position: Vec3, bounds: &WorldBounds) -> bool {
    !bounds.contains(position)
}
