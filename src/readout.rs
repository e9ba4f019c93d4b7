//! Diagnostic overlay text
//!
//! The renderer draws this if it has a font; the sim does not depend on it.

use std::fmt;

use crate::sim::{Pose, StepReport};

/// Control hints shown above the live numbers
pub const CONTROLS_HINT: &str =
    "Move: mouse (right-click to move) / left-click for virtual joystick\nGamepad: left stick";

/// Position and speed, truncated to whole units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readout {
    pub x: i32,
    pub y: i32,
    pub speed: i32,
}

impl Readout {
    pub fn from_pose(pose: &Pose) -> Self {
        Self {
            x: pose.pos.x as i32,
            y: pose.pos.y as i32,
            speed: pose.speed() as i32,
        }
    }

    pub fn from_report(report: &StepReport) -> Self {
        Self::from_pose(&report.pose)
    }

    /// Hint block plus the live line, ready to draw
    pub fn overlay_text(&self) -> String {
        format!("{}\n{}", CONTROLS_HINT, self)
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position: ({},{})  Speed: {}",
            self.x, self.y, self.speed
        )
    }
}
