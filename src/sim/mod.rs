//! Deterministic simulation module
//!
//! All flight and checkpoint logic lives here. This module must stay pure:
//! - One call to `tick` per host frame, constants tuned per tick
//! - Time only enters through the `now` argument
//! - No rendering or platform dependencies

pub mod bounds;
pub mod camera;
pub mod collision;
pub mod input;
pub mod state;
pub mod targets;
pub mod tick;
pub mod timer;

pub use bounds::{WorldBounds, check_bounds};
pub use camera::{Camera, CameraPose, FlightTuning, Propulsion, Steering, forward_from_angles};
pub use collision::{check_collisions, within_radius};
pub use input::{InputState, keys};
pub use state::WorldState;
pub use targets::{Target, TargetRegistry};
pub use tick::{TickReport, tick};
pub use timer::{RunTimer, TimerEvent, format_readout};
