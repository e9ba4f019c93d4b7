//! Axis-aligned rectangle geometry for obstacles and world bounds
//!
//! Screen-style coordinates: y grows downward, so `top` is the smaller y.
//! A rectangle is defined by:
//! - left, top: the minimum corner
//! - width, height: extent along x and y

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::clamp_point;

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Minimum corner (left, top)
    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    /// Maximum corner (right, bottom)
    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.right(), self.bottom())
    }

    pub fn center(&self) -> Vec2 {
        (self.min() + self.max()) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Edges included
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.left && p.x <= self.right() && p.y >= self.top && p.y <= self.bottom()
    }

    /// Nearest point of the (solid) rectangle to `p`.
    ///
    /// Points inside map to themselves.
    #[inline]
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        clamp_point(p, self.min(), self.max())
    }

    /// Finite with non-negative extent
    pub fn is_well_formed(&self) -> bool {
        [self.left, self.top, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
            && self.width >= 0.0
            && self.height >= 0.0
    }
}
