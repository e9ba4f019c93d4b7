//! Sandbox state and the render-facing snapshot
//!
//! The state owns the body and joystick; obstacles and bounds are fixed once
//! the session starts.

use glam::Vec2;

use super::body::MovingBody;
use super::input::VirtualJoystick;
use super::rect::Rect;
use super::scene::{Obstacle, Scene};
use crate::error::Result;
use crate::settings::SandboxConfig;

/// Read-only body pose for the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Pose {
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// Complete sandbox state for one session
#[derive(Debug, Clone)]
pub struct SandboxState {
    pub config: SandboxConfig,
    pub body: MovingBody,
    pub joystick: VirtualJoystick,
    pub(crate) obstacles: Vec<Obstacle>,
    pub(crate) bounds: Rect,
    /// Completed frame steps
    pub frame_count: u64,
    /// Simulated seconds (sum of sanitized dt)
    pub elapsed: f64,
}

impl SandboxState {
    /// Build a session from a config and scene. Fails fast on bad input.
    pub fn new(config: SandboxConfig, scene: Scene) -> Result<Self> {
        config.validate()?;
        scene.validate(config.radius)?;

        let body = MovingBody::new(scene.spawn, &config)?;
        let joystick = VirtualJoystick::new(scene.joystick_anchor(), &config.joystick);

        log::info!(
            "Sandbox ready: {}x{} world, {} obstacles, damping {:?}, {} input, {} pointer",
            scene.bounds.width,
            scene.bounds.height,
            scene.obstacles.len(),
            config.damping,
            config.input_response.as_str(),
            config.pointer_mode.as_str(),
        );

        Ok(Self {
            config,
            body,
            joystick,
            obstacles: scene.obstacles,
            bounds: scene.bounds,
            frame_count: 0,
            elapsed: 0.0,
        })
    }

    /// Default config in the default scene
    pub fn with_defaults() -> Result<Self> {
        Self::new(SandboxConfig::default(), Scene::default())
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn bounds(&self) -> &Rect {
        &self.bounds
    }

    pub fn pose(&self) -> Pose {
        Pose {
            pos: self.body.pos,
            vel: self.body.vel,
            radius: self.body.radius(),
        }
    }
}
