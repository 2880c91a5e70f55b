//! World configuration and presets
//!
//! Everything tunable about a world lives here: start pose, control models,
//! motion constants, checkpoint layout, bounds and projection. Missing JSON
//! fields fall back to the glider defaults.

use std::path::Path;

use glam::{Mat4, Vec3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::deg_to_rad;
use crate::sim::bounds::WorldBounds;
use crate::sim::camera::{CameraPose, FlightTuning, Propulsion, Steering};
use crate::sim::targets::Target;

/// Errors loading or validating a world configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read world config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse world config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid world config `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

/// Named world presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum WorldPreset {
    /// Banking glider with thrust
    #[default]
    Glider,
    /// Yaw/pitch look with thrust
    Arcade,
    /// Yaw/pitch look, WASD/Space/Shift move directly
    FreeCamera,
}

impl WorldPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorldPreset::Glider => "Glider",
            WorldPreset::Arcade => "Arcade",
            WorldPreset::FreeCamera => "FreeCamera",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "glider" => Some(WorldPreset::Glider),
            "arcade" => Some(WorldPreset::Arcade),
            "free" | "freecamera" | "free_camera" | "free-camera" => Some(WorldPreset::FreeCamera),
            _ => None,
        }
    }
}

/// Where the checkpoints go
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetLayout {
    /// Explicit centers, in order
    Fixed { centers: Vec<Vec3> },
    /// `count` centers drawn from a seeded generator inside the bounds
    Scattered { seed: u64, count: u32 },
}

impl Default for TargetLayout {
    fn default() -> Self {
        TargetLayout::Fixed {
            centers: CHECKPOINTS.iter().copied().map(Vec3::from_array).collect(),
        }
    }
}

/// Perspective projection parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Projection {
    pub fovy_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fovy_deg: FOVY_DEG,
            aspect: 1.0,
            near: NEAR,
            far: FAR,
        }
    }
}

impl Projection {
    /// OpenGL-style clip space, matching a WebGL host
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(deg_to_rad(self.fovy_deg), self.aspect, self.near, self.far)
    }
}

/// Complete description of one world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub camera: CameraPose,
    pub steering: Steering,
    pub propulsion: Propulsion,
    pub flight: FlightTuning,
    pub collision_radius: f32,
    pub bounds: WorldBounds,
    pub targets: TargetLayout,
    pub target_radius: f32,
    pub target_color: [f32; 4],
    pub projection: Projection,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            camera: CameraPose::default(),
            steering: Steering::Banking,
            propulsion: Propulsion::Thrust,
            flight: FlightTuning::default(),
            collision_radius: COLLISION_RADIUS,
            bounds: WorldBounds::default(),
            targets: TargetLayout::default(),
            target_radius: TARGET_RADIUS,
            target_color: [1.0, 1.0, 0.0, 1.0],
            projection: Projection::default(),
        }
    }
}

impl WorldConfig {
    pub fn from_preset(preset: WorldPreset) -> Self {
        let mut config = Self::default();
        match preset {
            WorldPreset::Glider => {}
            WorldPreset::Arcade => {
                config.steering = Steering::YawPitch;
            }
            WorldPreset::FreeCamera => {
                config.steering = Steering::YawPitch;
                config.propulsion = Propulsion::Direct;
                config.projection.near = 0.1;
                config.projection.far = 300.0;
            }
        }
        config
    }

    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: WorldConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded world config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let flight = &self.flight;
        if !(flight.friction > 0.0 && flight.friction < 1.0) {
            return Err(invalid("flight.friction", format!("{} is not in (0, 1)", flight.friction)));
        }
        if !(flight.acceleration.is_finite() && flight.acceleration >= 0.0) {
            return Err(invalid("flight.acceleration", "must be finite and non-negative"));
        }
        if !(flight.pitch_limit_deg > 0.0 && flight.pitch_limit_deg < 90.0) {
            return Err(invalid("flight.pitch_limit_deg", "must be in (0, 90)"));
        }
        if !(self.collision_radius > 0.0 && self.collision_radius.is_finite()) {
            return Err(invalid("collision_radius", "must be positive"));
        }
        if !(self.target_radius > 0.0 && self.target_radius.is_finite()) {
            return Err(invalid("target_radius", "must be positive"));
        }

        let bounds = &self.bounds;
        if !(bounds.half_extent.is_finite() && bounds.y_min.is_finite() && bounds.y_max.is_finite())
        {
            return Err(invalid("bounds", "extents must be finite"));
        }
        if !(bounds.half_extent > 0.0 && bounds.y_min < bounds.y_max) {
            return Err(invalid("bounds", "box is empty"));
        }
        if !bounds.contains(self.camera.position) {
            return Err(invalid("camera.position", "start pose lies outside the bounds"));
        }
        if self.camera.forward.try_normalize().is_none() {
            return Err(invalid("camera.forward", "must be a non-zero vector"));
        }

        let p = &self.projection;
        if !(p.fovy_deg > 0.0 && p.fovy_deg < 180.0 && p.aspect > 0.0) {
            return Err(invalid("projection", "fovy must be in (0, 180) and aspect positive"));
        }
        if !(p.near > 0.0 && p.near < p.far) {
            return Err(invalid("projection", "need 0 < near < far"));
        }

        if self.steering == Steering::Banking && self.propulsion == Propulsion::Direct {
            return Err(invalid(
                "propulsion",
                "banking steering and direct movement both bind W/S/A/D",
            ));
        }

        match &self.targets {
            TargetLayout::Fixed { centers } if centers.is_empty() => {
                Err(invalid("targets", "at least one checkpoint is required"))
            }
            TargetLayout::Fixed { centers } => match centers.iter().find(|c| !bounds.contains(**c)) {
                Some(c) => Err(invalid("targets", format!("checkpoint {c} lies outside the bounds"))),
                None => Ok(()),
            },
            TargetLayout::Scattered { count: 0, .. } => {
                Err(invalid("targets", "at least one checkpoint is required"))
            }
            TargetLayout::Scattered { .. } => match ScatterVolume::within(bounds) {
                Some(_) => Ok(()),
                None => Err(invalid(
                    "targets",
                    "bounds leave no room to scatter checkpoints (need y_max - 10 above max(y_min, 0) + 5)",
                )),
            },
        }
    }

    /// The starting checkpoint list for this world.
    ///
    /// Deterministic: every call returns the same list.
    pub fn canonical_targets(&self) -> Vec<Target> {
        let centers = match &self.targets {
            TargetLayout::Fixed { centers } => centers.clone(),
            TargetLayout::Scattered { seed, count } => scatter_centers(*seed, *count, &self.bounds),
        };

        centers
            .into_iter()
            .enumerate()
            .map(|(i, center)| Target {
                id: i as u32 + 1,
                center,
                radius: self.target_radius,
                color: self.target_color,
            })
            .collect()
    }
}

/// Region of the bounds where scattered checkpoints may land
#[derive(Debug, Clone, Copy)]
struct ScatterVolume {
    half: f32,
    y_low: f32,
    y_high: f32,
}

impl ScatterVolume {
    /// X/Z within 80% of the half extent, Y kept off the ground and the ceiling.
    /// None when that region is empty or its extents overflow.
    fn within(bounds: &WorldBounds) -> Option<Self> {
        let half = bounds.half_extent * 0.8;
        let y_low = bounds.y_min.max(0.0) + 5.0;
        let y_high = bounds.y_max - 10.0;

        let finite = (2.0 * half).is_finite() && (y_high - y_low).is_finite();
        (finite && half > 0.0 && y_high > y_low).then_some(Self { half, y_low, y_high })
    }
}

/// Seeded checkpoint placement inside a margin of the bounds
fn scatter_centers(seed: u64, count: u32, bounds: &WorldBounds) -> Vec<Vec3> {
    let Some(volume) = ScatterVolume::within(bounds) else {
        log::warn!("Bounds leave no room to scatter checkpoints");
        return Vec::new();
    };
    let mut rng = Pcg32::seed_from_u64(seed);
    let ScatterVolume { half, y_low, y_high } = volume;

    (0..count)
        .map(|_| {
            Vec3::new(
                rng.random_range(-half..half),
                rng.random_range(y_low..y_high),
                rng.random_range(-half..half),
            )
        })
        .collect()
}
