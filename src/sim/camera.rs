//! Camera rig: orientation and motion integration
//!
//! Two steering models share one camera:
//! - `Banking`: W/S pitch the forward vector about the banked up vector,
//!   A/D roll. This is the glider.
//! - `YawPitch`: arrow keys accumulate yaw/pitch angles and forward is
//!   rebuilt from them.
//!
//! Two propulsion models:
//! - `Thrust`: Space accelerates along forward, friction decays velocity
//!   every tick.
//! - `Direct`: held keys displace the camera this tick only (free camera).

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use super::input::{InputState, keys};
use crate::consts::*;
use crate::{deg_to_rad, is_finite_vec3};

/// How look input turns the camera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Steering {
    #[default]
    Banking,
    YawPitch,
}

/// How movement input translates the camera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Propulsion {
    #[default]
    Thrust,
    Direct,
}

/// Per-tick motion constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightTuning {
    pub acceleration: f32,
    /// Fraction of velocity kept each tick, in (0, 1)
    pub friction: f32,
    pub rotation_speed_deg: f32,
    pub roll_speed_deg: f32,
    pub turn_rate_deg: f32,
    pub move_speed: f32,
    pub pitch_limit_deg: f32,
}

impl Default for FlightTuning {
    fn default() -> Self {
        Self {
            acceleration: ACCELERATION,
            friction: FRICTION,
            rotation_speed_deg: ROTATION_SPEED_DEG,
            roll_speed_deg: ROLL_SPEED_DEG,
            turn_rate_deg: TURN_RATE_DEG,
            move_speed: MOVE_SPEED,
            pitch_limit_deg: PITCH_LIMIT_DEG,
        }
    }
}

/// Start pose the camera returns to on every world reset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraPose {
    pub position: Vec3,
    /// Used by the banking model; the yaw-pitch model derives forward from angles
    pub forward: Vec3,
    pub yaw_deg: f32,
    pub pitch_deg: f32,
    pub roll_deg: f32,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vec3::from_array(START_POSITION),
            forward: Vec3::from_array(START_FORWARD),
            yaw_deg: START_YAW_DEG,
            pitch_deg: 0.0,
            roll_deg: 0.0,
        }
    }
}

/// Forward vector from yaw/pitch in degrees
pub fn forward_from_angles(yaw_deg: f32, pitch_deg: f32) -> Vec3 {
    let (yaw, pitch) = (deg_to_rad(yaw_deg), deg_to_rad(pitch_deg));
    Vec3::new(pitch.cos() * yaw.sin(), pitch.sin(), pitch.cos() * yaw.cos())
}

/// Wrap an angle in degrees to [0, 360)
fn wrap_degrees(deg: f32) -> f32 {
    deg.rem_euclid(360.0)
}

/// Wrap an angle in degrees to [-180, 180)
fn wrap_signed_degrees(deg: f32) -> f32 {
    (deg + 180.0).rem_euclid(360.0) - 180.0
}

/// The camera the player flies
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    /// Always unit length
    pub forward: Vec3,
    pub velocity: Vec3,
    pub yaw_deg: f32,
    pub pitch_deg: f32,
    pub roll_deg: f32,
}

impl Camera {
    pub fn from_pose(pose: &CameraPose, steering: Steering) -> Self {
        let forward = match steering {
            Steering::Banking => pose.forward.try_normalize().unwrap_or(Vec3::NEG_Z),
            Steering::YawPitch => forward_from_angles(pose.yaw_deg, pose.pitch_deg),
        };
        Self {
            position: pose.position,
            forward,
            velocity: Vec3::ZERO,
            yaw_deg: pose.yaw_deg,
            pitch_deg: pose.pitch_deg,
            roll_deg: pose.roll_deg,
        }
    }

    /// World up tilted by the roll angle
    pub fn up(&self) -> Vec3 {
        let roll = deg_to_rad(self.roll_deg);
        let right = self.forward.cross(Vec3::Y);
        (Vec3::Y * roll.cos() + right * roll.sin()).normalize_or(Vec3::Y)
    }

    /// forward × up
    pub fn right(&self) -> Vec3 {
        self.forward.cross(self.up()).normalize_or_zero()
    }

    pub fn is_moving(&self) -> bool {
        self.velocity != Vec3::ZERO
    }

    /// Advance one tick
    pub fn integrate(
        &mut self,
        input: &InputState,
        steering: Steering,
        propulsion: Propulsion,
        tuning: &FlightTuning,
    ) {
        let last_position = self.position;

        match steering {
            Steering::Banking => self.steer_banking(input, tuning),
            Steering::YawPitch => self.steer_yaw_pitch(input, tuning),
        }

        match propulsion {
            Propulsion::Thrust => self.apply_thrust(input, tuning),
            Propulsion::Direct => self.apply_direct(input, tuning),
        }

        if !is_finite_vec3(self.position) || !is_finite_vec3(self.velocity) {
            log::warn!("Non-finite camera motion discarded");
            self.position = last_position;
            self.velocity = Vec3::ZERO;
        }
    }

    fn steer_banking(&mut self, input: &InputState, tuning: &FlightTuning) {
        let up = self.up();
        let pitch = input.axis(keys::S, keys::W);
        if pitch != 0.0 {
            let angle = deg_to_rad(tuning.rotation_speed_deg * pitch);
            let rotated = self.forward * angle.cos() + up * angle.sin();
            self.forward = rotated.try_normalize().unwrap_or(self.forward);
        }

        let roll = input.axis(keys::A, keys::D);
        if roll != 0.0 {
            self.roll_deg = wrap_signed_degrees(self.roll_deg + tuning.roll_speed_deg * roll);
        }
    }

    fn steer_yaw_pitch(&mut self, input: &InputState, tuning: &FlightTuning) {
        let yaw = input.axis(keys::ARROW_RIGHT, keys::ARROW_LEFT);
        let pitch = input.axis(keys::ARROW_DOWN, keys::ARROW_UP);

        self.yaw_deg = wrap_degrees(self.yaw_deg + tuning.turn_rate_deg * yaw);
        self.pitch_deg = (self.pitch_deg + tuning.turn_rate_deg * pitch)
            .clamp(-tuning.pitch_limit_deg, tuning.pitch_limit_deg);

        self.forward = forward_from_angles(self.yaw_deg, self.pitch_deg)
            .try_normalize()
            .unwrap_or(self.forward);
    }

    fn apply_thrust(&mut self, input: &InputState, tuning: &FlightTuning) {
        if input.is_pressed(keys::THRUST) {
            self.velocity += self.forward * tuning.acceleration;
        }
        self.velocity *= tuning.friction;
        self.position += self.velocity;
    }

    fn apply_direct(&mut self, input: &InputState, tuning: &FlightTuning) {
        let strafe = self.forward.cross(Vec3::Y).normalize_or_zero();
        let direction = self.forward * input.axis(keys::S, keys::W)
            + strafe * input.axis(keys::A, keys::D)
            + Vec3::Y * input.axis(keys::SHIFT, keys::THRUST);

        // Nothing persists between ticks; velocity records this tick's step
        self.velocity = direction * tuning.move_speed;
        self.position += self.velocity;
    }

    /// Right-handed view matrix looking along forward with the banked up vector
    pub fn view_matrix(&self) -> Mat4 {
        let mut up = self.up();
        if self.forward.cross(up).length_squared() < 1e-8 {
            up = self.forward.any_orthonormal_vector();
        }
        Mat4::look_at_rh(self.position, self.position + self.forward, up)
    }
}
