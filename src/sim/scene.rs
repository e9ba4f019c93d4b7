//! Scene layout: world bounds, obstacles and spawn point
//!
//! Supplied once before the loop starts and never changed afterwards.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;
use crate::error::{ConfigError, Result};

/// A static obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub rect: Rect,
    /// Fill colour for the renderer (0xRRGGBB)
    #[serde(default)]
    pub color: u32,
}

impl Obstacle {
    pub const fn new(rect: Rect, color: u32) -> Self {
        Self { rect, color }
    }
}

/// Everything placed in the world before the first frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub bounds: Rect,
    /// Resolution order is list order
    #[serde(default)]
    pub obstacles: Vec<Obstacle>,
    /// Body start position
    pub spawn: Vec2,
    /// On-screen joystick ring center; defaults to the bottom-left inset
    #[serde(default)]
    pub joystick_anchor: Option<Vec2>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            bounds: Rect::new(0.0, 0.0, WORLD_WIDTH, WORLD_HEIGHT),
            obstacles: vec![
                Obstacle::new(Rect::new(400.0, 150.0, 300.0, 24.0), 0x7878c8),
                Obstacle::new(Rect::new(150.0, 420.0, 200.0, 28.0), 0x64c864),
                Obstacle::new(Rect::new(700.0, 360.0, 24.0, 240.0), 0xc86478),
                Obstacle::new(Rect::new(50.0, 50.0, 120.0, 24.0), 0xb4b450),
            ],
            spawn: Vec2::new(BODY_SPAWN.0, BODY_SPAWN.1),
            joystick_anchor: None,
        }
    }
}

impl Scene {
    /// Empty world of the given bounds
    pub fn open(bounds: Rect, spawn: Vec2) -> Self {
        Self {
            bounds,
            obstacles: Vec::new(),
            spawn,
            joystick_anchor: None,
        }
    }

    pub fn with_obstacle(mut self, rect: Rect, color: u32) -> Self {
        self.obstacles.push(Obstacle::new(rect, color));
        self
    }

    pub fn joystick_anchor(&self) -> Vec2 {
        self.joystick_anchor.unwrap_or(Vec2::new(
            self.bounds.left + JOYSTICK_INSET,
            self.bounds.bottom() - JOYSTICK_INSET,
        ))
    }

    /// Check the layout can hold a body of `radius`
    pub fn validate(&self, radius: f32) -> Result<()> {
        if !self.bounds.is_well_formed() {
            return Err(ConfigError::InvalidScene(format!(
                "malformed world bounds {:?}",
                self.bounds
            )));
        }
        let diameter = radius * 2.0;
        if self.bounds.width < diameter || self.bounds.height < diameter {
            return Err(ConfigError::BoundsTooSmall {
                width: self.bounds.width,
                height: self.bounds.height,
                diameter,
            });
        }
        if let Some(idx) = self.obstacles.iter().position(|o| !o.rect.is_well_formed()) {
            return Err(ConfigError::InvalidScene(format!(
                "obstacle {} is malformed: {:?}",
                idx, self.obstacles[idx].rect
            )));
        }
        if !self.spawn.is_finite() {
            return Err(ConfigError::NotFinite { field: "spawn" });
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let scene = Self::from_json(&std::fs::read_to_string(path)?)?;
        log::info!(
            "Loaded scene from {} ({} obstacles)",
            path.display(),
            scene.obstacles.len()
        );
        Ok(scene)
    }
}
