//! Per-frame simulation step
//!
//! input → acceleration (or friction) → velocity → position → bounds →
//! obstacles → pose.

use glam::Vec2;

use super::collision::{BoundsHits, resolve_bounds, resolve_obstacles};
use super::input::{GamepadAxes, InputSource, JoystickEvent, Steering, resolve_steering};
use super::state::{Pose, SandboxState};
use crate::consts::{FALLBACK_DT, MAX_FRAME_DT};
use crate::settings::PointerMode;

/// Input gathered for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Direct-control target (secondary pointer button held)
    pub pointer_target: Option<Vec2>,
    /// Joystick gestures since the last frame, in arrival order
    pub joystick_events: Vec<JoystickEvent>,
    /// Gamepad stick, if a pad is connected
    pub gamepad: Option<GamepadAxes>,
}

/// What happened during one step
#[derive(Debug, Clone)]
pub struct StepReport {
    /// dt actually integrated
    pub dt: f32,
    /// Steering source, `None` on idle frames
    pub source: Option<InputSource>,
    pub bounds: BoundsHits,
    /// Indices into the obstacle list, in resolution order
    pub obstacles_hit: Vec<usize>,
    pub pose: Pose,
}

impl StepReport {
    pub fn is_idle(&self) -> bool {
        self.source.is_none()
    }
}

/// Substitute a usable frame time for stalls and bad clocks
pub fn sanitize_dt(dt: f32) -> f32 {
    if !dt.is_finite() || dt <= 0.0 {
        log::debug!("Frame dt {} unusable, using {}", dt, FALLBACK_DT);
        FALLBACK_DT
    } else if dt > MAX_FRAME_DT {
        log::debug!("Frame dt {} clamped to {}", dt, MAX_FRAME_DT);
        MAX_FRAME_DT
    } else {
        dt
    }
}

/// Force for this frame's steering.
///
/// Thrust is scaled by mass so the accumulator holds exactly the thrust
/// acceleration. A follow-mode pointer pulls in proportion to the distance
/// instead, so a heavier body lags further behind.
fn steering_force(state: &SandboxState, steering: Steering, pointer_target: Option<Vec2>) -> Vec2 {
    match (steering.source, state.config.pointer_mode, pointer_target) {
        (InputSource::Pointer, PointerMode::Follow { gain, .. }, Some(target)) => {
            (target - state.body.pos) * gain
        }
        _ => {
            let thrust = steering.thrust(state.config.input_response) * state.config.accel;
            thrust * state.body.mass()
        }
    }
}

/// Advance the sandbox by one frame
pub fn tick(state: &mut SandboxState, input: &TickInput, dt: f32) -> StepReport {
    let dt = sanitize_dt(dt);

    for &event in &input.joystick_events {
        state.joystick.handle(event);
    }

    let steering = resolve_steering(
        input.pointer_target,
        &state.joystick,
        input.gamepad,
        state.body.pos,
        state.config.pointer_mode.threshold(state.config.pointer_threshold),
        &state.config.gamepad,
    );

    if let Some(steering) = steering {
        let force = steering_force(state, steering, input.pointer_target);
        state.body.apply_force(force);
    }

    // Damping (idle frames only for friction), speed clamp and position update
    state.body.integrate(dt);

    let bounds = resolve_bounds(&mut state.body, &state.bounds);
    let obstacles_hit = resolve_obstacles(&mut state.body, &state.obstacles);

    if bounds.any() || !obstacles_hit.is_empty() {
        log::debug!(
            "Frame {}: contact bounds={:?} obstacles={:?}",
            state.frame_count,
            bounds,
            obstacles_hit
        );
    }

    state.frame_count += 1;
    state.elapsed += f64::from(dt);

    let pose = state.pose();
    log::trace!(
        "Frame {}: pos=({:.1}, {:.1}) speed={:.1} source={:?}",
        state.frame_count,
        pose.pos.x,
        pose.pos.y,
        pose.speed(),
        steering.map(|s| s.source)
    );

    StepReport {
        dt,
        source: steering.map(|s| s.source),
        bounds,
        obstacles_hit,
        pose,
    }
}
