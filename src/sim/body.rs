//! The steerable body
//!
//! One concrete type, parameterized by the tuning bundle. Radius, mass,
//! restitution, damping and speed cap are fixed at construction.

use glam::Vec2;

use crate::consts::STATIONARY_EPSILON;
use crate::error::Result;
use crate::settings::{DampingModel, SandboxConfig};
use crate::limit_length;

/// A circular body driven by forces
#[derive(Debug, Clone)]
pub struct MovingBody {
    /// World-space center
    pub pos: Vec2,
    /// Units per second
    pub vel: Vec2,
    /// Per-step accumulator, cleared by `integrate`
    acc: Vec2,
    /// Set by any `apply_force` this step; friction only runs when clear
    driven: bool,
    radius: f32,
    mass: f32,
    restitution: f32,
    damping: DampingModel,
    max_speed: f32,
}

impl MovingBody {
    /// Build a body at rest, validating the config first
    pub fn new(pos: Vec2, config: &SandboxConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            pos,
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
            driven: false,
            radius: config.radius,
            mass: config.mass,
            restitution: config.restitution,
            damping: config.damping,
            max_speed: config.max_speed,
        })
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    #[inline]
    pub fn restitution(&self) -> f32 {
        self.restitution
    }

    #[inline]
    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    pub fn damping(&self) -> DampingModel {
        self.damping
    }

    /// Pending acceleration for this step
    pub fn acceleration(&self) -> Vec2 {
        self.acc
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Whether a force has been applied since the last `integrate`
    pub fn is_driven(&self) -> bool {
        self.driven
    }

    /// F = m * a  =>  a = F / m
    ///
    /// Marks the step as driven even for a zero force, so a steered frame
    /// never gets idle friction.
    pub fn apply_force(&mut self, force: Vec2) {
        self.acc += force / self.mass;
        self.driven = true;
    }

    /// Semi-implicit Euler step: velocity first, then position with the new velocity
    pub fn integrate(&mut self, dt: f32) {
        let idle = !self.driven;
        self.vel += self.acc * dt;

        match self.damping {
            DampingModel::Friction { deceleration } => {
                if idle {
                    self.vel = apply_friction(self.vel, deceleration * dt);
                }
            }
            DampingModel::Multiplicative { factor } => {
                self.vel *= factor;
            }
        }

        self.vel = limit_length(self.vel, self.max_speed);
        self.pos += self.vel * dt;
        self.acc = Vec2::ZERO;
        self.driven = false;
    }
}

/// Take `amount` off the speed without reversing direction
fn apply_friction(vel: Vec2, amount: f32) -> Vec2 {
    let speed = vel.length();
    if speed <= STATIONARY_EPSILON {
        return vel;
    }
    let remaining = speed - amount;
    if remaining <= STATIONARY_EPSILON {
        Vec2::ZERO
    } else {
        vel * (remaining / speed)
    }
}
