//! Sandbox tuning bundle
//!
//! Passed into the simulation once at session start. Loaded from JSON; any
//! field left out of the file keeps its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{self, ConfigError, Result};

/// How the body loses speed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum DampingModel {
    /// Constant deceleration against the direction of travel, idle frames only.
    /// Never overshoots zero.
    Friction { deceleration: f32 },
    /// Velocity retention factor in (0, 1], applied every integration step
    Multiplicative { factor: f32 },
}

impl Default for DampingModel {
    fn default() -> Self {
        DampingModel::Friction {
            deceleration: FRICTION_DECELERATION,
        }
    }
}

impl DampingModel {
    pub fn validate(&self) -> Result<()> {
        match *self {
            DampingModel::Friction { deceleration } => {
                error::non_negative("damping.deceleration", deceleration)?;
            }
            DampingModel::Multiplicative { factor } => {
                error::positive("damping.factor", factor)?;
                error::in_range("damping.factor", factor, 0.0, 1.0)?;
            }
        }
        Ok(())
    }
}

/// How a steering direction turns into thrust
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InputResponse {
    /// Any deflection gives full acceleration (direction is normalized)
    #[default]
    Digital,
    /// Thrust scales with deflection, capped at full acceleration
    Analog,
}

impl InputResponse {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputResponse::Digital => "digital",
            InputResponse::Analog => "analog",
        }
    }
}

/// How direct pointer control pushes the body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PointerMode {
    /// Steer toward the target with the same thrust as the other sources
    #[default]
    Steer,
    /// Pull toward the target with a force proportional to the distance.
    /// The force goes through the body's mass.
    Follow { gain: f32, min_distance: f32 },
}

impl PointerMode {
    /// Standard follow tuning
    pub fn follow() -> Self {
        PointerMode::Follow {
            gain: FOLLOW_GAIN,
            min_distance: FOLLOW_MIN_DISTANCE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PointerMode::Steer => "steer",
            PointerMode::Follow { .. } => "follow",
        }
    }

    /// Distance the pointer target must exceed before it counts as input
    pub fn threshold(&self, steer_threshold: f32) -> f32 {
        match *self {
            PointerMode::Steer => steer_threshold,
            PointerMode::Follow { min_distance, .. } => min_distance,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if let PointerMode::Follow { gain, min_distance } = *self {
            error::non_negative("pointer_mode.gain", gain)?;
            error::non_negative("pointer_mode.min_distance", min_distance)?;
        }
        Ok(())
    }
}

/// On-screen joystick tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoystickConfig {
    /// Full-deflection radius of the knob
    pub radius: f32,
    /// Extra reach around the ring where a drag can still start
    pub activation_margin: f32,
}

impl Default for JoystickConfig {
    fn default() -> Self {
        Self {
            radius: JOYSTICK_RADIUS,
            activation_margin: JOYSTICK_ACTIVATION_MARGIN,
        }
    }
}

/// Physical gamepad tuning (device-native units)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GamepadConfig {
    /// Axis values at or below this magnitude (on both axes) read as centered
    pub dead_zone: f32,
    /// Full deflection of one axis
    pub axis_range: f32,
}

impl Default for GamepadConfig {
    fn default() -> Self {
        Self {
            dead_zone: GAMEPAD_DEAD_ZONE,
            axis_range: GAMEPAD_AXIS_RANGE,
        }
    }
}

/// Everything the simulation needs to know besides the scene layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    // === Body ===
    /// Scales force into acceleration
    pub mass: f32,
    /// Collision radius
    pub radius: f32,
    /// Fraction of normal velocity kept on impact (0..=1)
    pub restitution: f32,

    // === Motion ===
    pub damping: DampingModel,
    /// Speed cap (units/s)
    pub max_speed: f32,
    /// Acceleration while steering (units/s²)
    pub accel: f32,

    // === Input ===
    pub joystick: JoystickConfig,
    pub gamepad: GamepadConfig,
    /// Direct pointer control ignores targets closer than this
    pub pointer_threshold: f32,
    pub pointer_mode: PointerMode,
    pub input_response: InputResponse,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            mass: BODY_MASS,
            radius: BODY_RADIUS,
            restitution: BODY_RESTITUTION,

            damping: DampingModel::default(),
            max_speed: MAX_SPEED,
            accel: ACCEL,

            joystick: JoystickConfig::default(),
            gamepad: GamepadConfig::default(),
            pointer_threshold: POINTER_THRESHOLD,
            pointer_mode: PointerMode::Steer,
            input_response: InputResponse::Digital,
        }
    }
}

impl SandboxConfig {
    /// Heavier body that chases the pointer with a distance-proportional pull
    /// and loses 2% of its velocity every step
    pub fn follow_preset() -> Self {
        Self {
            mass: FOLLOW_PRESET_MASS,
            damping: DampingModel::Multiplicative {
                factor: FOLLOW_PRESET_RETENTION,
            },
            max_speed: FOLLOW_PRESET_MAX_SPEED,
            pointer_mode: PointerMode::follow(),
            ..Default::default()
        }
    }

    /// Check every field against its contract
    pub fn validate(&self) -> Result<()> {
        error::positive("mass", self.mass)?;
        error::positive("radius", self.radius)?;
        error::in_range("restitution", self.restitution, 0.0, 1.0)?;

        self.damping.validate()?;
        error::positive("max_speed", self.max_speed)?;
        error::non_negative("accel", self.accel)?;

        error::positive("joystick.radius", self.joystick.radius)?;
        error::non_negative("joystick.activation_margin", self.joystick.activation_margin)?;
        error::positive("gamepad.axis_range", self.gamepad.axis_range)?;
        error::in_range(
            "gamepad.dead_zone",
            self.gamepad.dead_zone,
            0.0,
            self.gamepad.axis_range,
        )?;
        error::non_negative("pointer_threshold", self.pointer_threshold)?;
        self.pointer_mode.validate()?;
        Ok(())
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Serialize to pretty JSON (for writing a starter config)
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(ConfigError::from)
    }
}
