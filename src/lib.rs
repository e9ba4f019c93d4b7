//! Puck Sandbox - a single steerable body in a box of rectangles
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (body, input, collisions, step)
//! - `settings`: Data-driven tuning bundle, loaded from JSON
//! - `error`: Construction-time contract violations
//! - `readout`: Diagnostic overlay text

pub mod error;
pub mod readout;
pub mod settings;
pub mod sim;

pub use error::{ConfigError, Result};
pub use readout::Readout;
pub use settings::{DampingModel, InputResponse, PointerMode, SandboxConfig};

use glam::Vec2;

/// Sandbox configuration constants
pub mod consts {
    /// Frame time substituted when the measured dt is zero or negative
    pub const FALLBACK_DT: f32 = 1.0 / 60.0;
    /// Longest frame the step will integrate in one go (stall guard)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Default viewport size
    pub const WORLD_WIDTH: f32 = 1024.0;
    pub const WORLD_HEIGHT: f32 = 720.0;

    /// Body defaults
    pub const BODY_RADIUS: f32 = 18.0;
    pub const BODY_MASS: f32 = 1.0;
    pub const BODY_RESTITUTION: f32 = 0.8;
    pub const BODY_SPAWN: (f32, f32) = (200.0, 200.0);

    /// Motion defaults (world units, seconds)
    pub const MAX_SPEED: f32 = 520.0;
    pub const ACCEL: f32 = 1200.0;
    pub const FRICTION_DECELERATION: f32 = 600.0;

    /// Below this speed the body counts as stationary
    pub const STATIONARY_EPSILON: f32 = 1e-3;
    /// Below this length a vector has no usable direction
    pub const DIRECTION_EPSILON: f32 = 1e-6;

    /// Direct pointer control ignores targets closer than this
    pub const POINTER_THRESHOLD: f32 = 4.0;

    /// Follow-mode pointer: force per unit of distance to the target
    pub const FOLLOW_GAIN: f32 = 250.0;
    /// Follow-mode pointer: no pull at or inside this distance
    pub const FOLLOW_MIN_DISTANCE: f32 = 1.0;

    /// Heavier, damped body tuned for the follow-mode pointer
    pub const FOLLOW_PRESET_MASS: f32 = 1.2;
    pub const FOLLOW_PRESET_RETENTION: f32 = 0.98;
    pub const FOLLOW_PRESET_MAX_SPEED: f32 = 400.0;

    /// Virtual joystick defaults
    pub const JOYSTICK_RADIUS: f32 = 48.0;
    pub const JOYSTICK_ACTIVATION_MARGIN: f32 = 20.0;
    /// Joystick anchor inset from the bottom-left corner of the world
    pub const JOYSTICK_INSET: f32 = 100.0;
    /// Drag offsets shorter than this produce no direction
    pub const JOYSTICK_DRAG_EPSILON: f32 = 1e-4;
    /// Joystick directions shorter than this do not count as input
    pub const JOYSTICK_INPUT_EPSILON: f32 = 1e-3;

    /// Gamepad defaults (device-native axis units)
    pub const GAMEPAD_AXIS_RANGE: f32 = 100.0;
    pub const GAMEPAD_DEAD_ZONE: f32 = 15.0;
}

/// Normalize `v`, or return zero if it is shorter than `epsilon`
#[inline]
pub fn normalize_or_zero_eps(v: Vec2, epsilon: f32) -> Vec2 {
    let len = v.length();
    if len > epsilon { v / len } else { Vec2::ZERO }
}

/// Scale `v` down so its length is at most `max`
#[inline]
pub fn limit_length(v: Vec2, max: f32) -> Vec2 {
    let len = v.length();
    if len > max && len > 0.0 {
        v * (max / len)
    } else {
        v
    }
}

/// Clamp each component of `p` into the box `[min, max]`
#[inline]
pub fn clamp_point(p: Vec2, min: Vec2, max: Vec2) -> Vec2 {
    Vec2::new(p.x.clamp(min.x, max.x), p.y.clamp(min.y, max.y))
}
