//! Collision detection and response against static rectangles
//!
//! Two phases per frame, always in this order:
//! - world bounds, each axis on its own
//! - obstacles, one at a time in scene order, each seeing the previous
//!   obstacle's correction
//!
//! There is no fixed-point iteration. A later push-out may put the body back
//! across an earlier surface; that is accepted.

use glam::Vec2;

use super::body::MovingBody;
use super::rect::Rect;
use super::scene::Obstacle;
use crate::consts::DIRECTION_EPSILON;

/// Normal used when the center sits exactly on the closest point
pub const FALLBACK_NORMAL: Vec2 = Vec2::new(0.0, -1.0);

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Closest point on the obstacle to the body center
    pub point: Vec2,
    /// Surface normal, pointing from the obstacle toward the body
    pub normal: Vec2,
    /// Penetration depth (for position correction)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Check a circle against a solid rectangle using the closest-point clamp
pub fn circle_rect_collision(center: Vec2, radius: f32, rect: &Rect) -> CollisionResult {
    let closest = rect.closest_point(center);
    let diff = center - closest;
    let dist = diff.length();
    let penetration = radius - dist;

    if penetration <= 0.0 {
        return CollisionResult::miss();
    }

    // Center on (or inside) the rectangle: no usable offset
    let normal = if dist > DIRECTION_EPSILON {
        diff / dist
    } else {
        FALLBACK_NORMAL
    };

    CollisionResult {
        hit: true,
        point: closest,
        normal,
        penetration,
    }
}

/// Impulse response against an immovable surface: v' = v - (1 + e)(v·n)n
///
/// Only applies when moving into the surface, so a separating body is left alone.
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2, restitution: f32) -> Vec2 {
    let vn = velocity.dot(normal);
    if vn < 0.0 {
        velocity - (1.0 + restitution) * vn * normal
    } else {
        velocity
    }
}

/// Push the body out along the normal and reflect its velocity
pub fn apply_collision(body: &mut MovingBody, result: &CollisionResult) {
    if !result.hit {
        return;
    }
    body.pos += result.normal * result.penetration;
    body.vel = reflect_velocity(body.vel, result.normal, body.restitution());
}

/// Which world edges were touched this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundsHits {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl BoundsHits {
    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }
}

/// Clamp the body inside the world and bounce off the edges it crossed.
///
/// Each axis is handled on its own, so a corner hit reflects both components.
/// A component is only reflected if it still points out of the world.
pub fn resolve_bounds(body: &mut MovingBody, bounds: &Rect) -> BoundsHits {
    let r = body.radius();
    let e = body.restitution();
    let mut hits = BoundsHits::default();

    // Left
    if body.pos.x - r < bounds.left {
        body.pos.x = bounds.left + r;
        if body.vel.x < 0.0 {
            body.vel.x = -body.vel.x * e;
        }
        hits.left = true;
    }
    // Right
    if body.pos.x + r > bounds.right() {
        body.pos.x = bounds.right() - r;
        if body.vel.x > 0.0 {
            body.vel.x = -body.vel.x * e;
        }
        hits.right = true;
    }
    // Top
    if body.pos.y - r < bounds.top {
        body.pos.y = bounds.top + r;
        if body.vel.y < 0.0 {
            body.vel.y = -body.vel.y * e;
        }
        hits.top = true;
    }
    // Bottom
    if body.pos.y + r > bounds.bottom() {
        body.pos.y = bounds.bottom() - r;
        if body.vel.y > 0.0 {
            body.vel.y = -body.vel.y * e;
        }
        hits.bottom = true;
    }

    hits
}

/// Resolve each obstacle in order; returns the indices that were hit
pub fn resolve_obstacles(body: &mut MovingBody, obstacles: &[Obstacle]) -> Vec<usize> {
    let mut hit = Vec::new();
    for (idx, obstacle) in obstacles.iter().enumerate() {
        let result = circle_rect_collision(body.pos, body.radius(), &obstacle.rect);
        if result.hit {
            apply_collision(body, &result);
            hit.push(idx);
        }
    }
    hit
}
