//! Frame-stepped simulation module
//!
//! All motion and collision logic lives here. This module must stay free of
//! windowing and rendering:
//! - One body, owned by the state
//! - Obstacles and bounds fixed after setup
//! - Stable resolution order (scene order)

pub mod body;
pub mod collision;
pub mod input;
pub mod rect;
pub mod scene;
pub mod state;
pub mod tick;

pub use body::MovingBody;
pub use collision::{
    BoundsHits, CollisionResult, circle_rect_collision, reflect_velocity, resolve_bounds,
    resolve_obstacles,
};
pub use input::{GamepadAxes, InputSource, JoystickEvent, Steering, VirtualJoystick};
pub use rect::Rect;
pub use scene::{Obstacle, Scene};
pub use state::{Pose, SandboxState};
pub use tick::{StepReport, TickInput, sanitize_dt, tick};
