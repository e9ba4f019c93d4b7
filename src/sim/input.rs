//! Input aggregation
//!
//! Three sources, checked in priority order each frame (first match wins):
//! 1. Direct pointer control (secondary button held, steer toward the cursor)
//! 2. On-screen virtual joystick drag
//! 3. Physical gamepad stick, with dead-zone
//!
//! No source active means an idle frame.

use glam::Vec2;

use crate::consts::{DIRECTION_EPSILON, JOYSTICK_DRAG_EPSILON, JOYSTICK_INPUT_EPSILON};
use crate::normalize_or_zero_eps;
use crate::settings::{GamepadConfig, InputResponse, JoystickConfig};

/// Gesture events for the on-screen joystick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JoystickEvent {
    /// Press at a world point (only starts a drag near the anchor)
    DragStart(Vec2),
    /// Pointer moved while pressed
    DragMove(Vec2),
    /// Release
    DragEnd,
}

/// Raw stick position in device-native units
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GamepadAxes {
    pub x: f32,
    pub y: f32,
}

impl GamepadAxes {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Scaled stick vector, or `None` inside the dead-zone.
    ///
    /// Once either axis leaves the dead-zone, both axes pass through as-is.
    pub fn deflection(&self, config: &GamepadConfig) -> Option<Vec2> {
        if self.x.abs() > config.dead_zone || self.y.abs() > config.dead_zone {
            let scaled = Vec2::new(self.x, self.y) / config.axis_range;
            Some(scaled.clamp(Vec2::NEG_ONE, Vec2::ONE))
        } else {
            None
        }
    }
}

/// Which source steered this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Pointer,
    Joystick,
    Gamepad,
}

impl InputSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputSource::Pointer => "pointer",
            InputSource::Joystick => "joystick",
            InputSource::Gamepad => "gamepad",
        }
    }
}

/// The one direction chosen for this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Steering {
    /// Raw direction from the source, inside the unit square
    pub direction: Vec2,
    pub source: InputSource,
}

impl Steering {
    /// Thrust direction scaled for the configured response (length ≤ 1)
    pub fn thrust(&self, response: InputResponse) -> Vec2 {
        match response {
            InputResponse::Digital => normalize_or_zero_eps(self.direction, DIRECTION_EPSILON),
            InputResponse::Analog => self.direction.clamp_length_max(1.0),
        }
    }
}

/// On-screen joystick state. The drag persists across frames until released.
#[derive(Debug, Clone)]
pub struct VirtualJoystick {
    /// Ring center
    pub anchor: Vec2,
    radius: f32,
    activation_margin: f32,
    active: bool,
    /// Knob offset from the anchor, clamped to the ring
    offset: Vec2,
    /// Offset divided by radius (zero for tiny drags)
    direction: Vec2,
}

impl VirtualJoystick {
    pub fn new(anchor: Vec2, config: &JoystickConfig) -> Self {
        Self {
            anchor,
            radius: config.radius,
            activation_margin: config.activation_margin,
            active: false,
            offset: Vec2::ZERO,
            direction: Vec2::ZERO,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    /// Where to draw the knob
    pub fn knob_position(&self) -> Vec2 {
        self.anchor + self.offset
    }

    /// Whether a press at `point` would grab the joystick
    pub fn in_reach(&self, point: Vec2) -> bool {
        point.distance(self.anchor) <= self.radius + self.activation_margin
    }

    pub fn handle(&mut self, event: JoystickEvent) {
        match event {
            JoystickEvent::DragStart(point) => {
                if self.in_reach(point) {
                    self.active = true;
                    self.drag_to(point);
                }
            }
            JoystickEvent::DragMove(point) => {
                if self.active {
                    self.drag_to(point);
                }
            }
            JoystickEvent::DragEnd => self.release(),
        }
    }

    pub fn release(&mut self) {
        self.active = false;
        self.offset = Vec2::ZERO;
        self.direction = Vec2::ZERO;
    }

    fn drag_to(&mut self, point: Vec2) {
        let raw = point - self.anchor;
        let dist = raw.length();
        self.offset = raw.clamp_length_max(self.radius);
        self.direction = if dist > JOYSTICK_DRAG_EPSILON {
            self.offset / self.radius
        } else {
            Vec2::ZERO
        };
    }

    /// Direction if the joystick is contributing input this frame
    pub fn steering(&self) -> Option<Vec2> {
        (self.active && self.direction.length() > JOYSTICK_INPUT_EPSILON).then_some(self.direction)
    }
}

/// Direction toward the pointer target, unless already (nearly) there
pub fn pointer_direction(target: Vec2, body_pos: Vec2, threshold: f32) -> Option<Vec2> {
    let to_target = target - body_pos;
    let distance = to_target.length();
    (distance > threshold).then(|| to_target / distance)
}

/// Pick this frame's steering by priority: pointer, joystick, gamepad
pub fn resolve_steering(
    pointer_target: Option<Vec2>,
    joystick: &VirtualJoystick,
    gamepad: Option<GamepadAxes>,
    body_pos: Vec2,
    pointer_threshold: f32,
    gamepad_config: &GamepadConfig,
) -> Option<Steering> {
    if let Some(direction) =
        pointer_target.and_then(|target| pointer_direction(target, body_pos, pointer_threshold))
    {
        return Some(Steering {
            direction,
            source: InputSource::Pointer,
        });
    }

    if let Some(direction) = joystick.steering() {
        return Some(Steering {
            direction,
            source: InputSource::Joystick,
        });
    }

    gamepad
        .and_then(|axes| axes.deflection(gamepad_config))
        .map(|direction| Steering {
            direction,
            source: InputSource::Gamepad,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joystick() -> VirtualJoystick {
        VirtualJoystick::new(Vec2::new(100.0, 620.0), &JoystickConfig::default())
    }

    #[test]
    fn test_joystick_drag_outside_reach_ignored() {
        let mut js = joystick();
        // 48 + 20 = 68 reach; 80 away
        js.handle(JoystickEvent::DragStart(Vec2::new(180.0, 620.0)));
        assert!(!js.is_active());
        js.handle(JoystickEvent::DragMove(Vec2::new(120.0, 620.0)));
        assert_eq!(js.direction(), Vec2::ZERO);
        assert!(js.steering().is_none());
    }

    #[test]
    fn test_joystick_partial_and_clamped() {
        let mut js = joystick();
        js.handle(JoystickEvent::DragStart(Vec2::new(100.0, 620.0)));
        assert!(js.is_active());
        // Center press gives no direction yet
        assert!(js.steering().is_none());

        js.handle(JoystickEvent::DragMove(Vec2::new(124.0, 620.0)));
        assert!((js.direction().x - 0.5).abs() < 1e-6);

        // Beyond the ring: clamped to unit length
        js.handle(JoystickEvent::DragMove(Vec2::new(100.0, 520.0)));
        assert!((js.direction() - Vec2::new(0.0, -1.0)).length() < 1e-6);
        assert_eq!(js.knob_position(), Vec2::new(100.0, 572.0));

        js.handle(JoystickEvent::DragEnd);
        assert!(!js.is_active());
        assert_eq!(js.direction(), Vec2::ZERO);
        assert_eq!(js.knob_position(), js.anchor);
    }

    #[test]
    fn test_gamepad_dead_zone() {
        let config = GamepadConfig::default();
        assert!(GamepadAxes::new(10.0, -15.0).deflection(&config).is_none());

        // One axis out of the dead-zone lets the other through unfiltered
        let v = GamepadAxes::new(50.0, 10.0).deflection(&config).unwrap();
        assert!((v - Vec2::new(0.5, 0.1)).length() < 1e-6);

        // Out-of-range readings clamp to the unit square
        let v = GamepadAxes::new(130.0, -100.0).deflection(&config).unwrap();
        assert_eq!(v, Vec2::new(1.0, -1.0));
    }

    #[test]
    fn test_pointer_threshold() {
        let body = Vec2::new(200.0, 200.0);
        assert!(pointer_direction(Vec2::new(203.0, 200.0), body, 4.0).is_none());
        let dir = pointer_direction(Vec2::new(200.0, 100.0), body, 4.0).unwrap();
        assert!((dir - Vec2::new(0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn test_priority_order() {
        let mut js = joystick();
        js.handle(JoystickEvent::DragStart(Vec2::new(100.0, 620.0)));
        js.handle(JoystickEvent::DragMove(Vec2::new(148.0, 620.0)));
        let pad = Some(GamepadAxes::new(0.0, 100.0));
        let body = Vec2::new(500.0, 300.0);
        let config = GamepadConfig::default();

        let s = resolve_steering(Some(Vec2::new(500.0, 0.0)), &js, pad, body, 4.0, &config).unwrap();
        assert_eq!(s.source, InputSource::Pointer);

        // Pointer on top of the body falls through to the joystick
        let s = resolve_steering(Some(body), &js, pad, body, 4.0, &config).unwrap();
        assert_eq!(s.source, InputSource::Joystick);

        js.release();
        let s = resolve_steering(None, &js, pad, body, 4.0, &config).unwrap();
        assert_eq!(s.source, InputSource::Gamepad);
        assert_eq!(s.direction, Vec2::new(0.0, 1.0));

        assert!(resolve_steering(None, &js, None, body, 4.0, &config).is_none());
    }

    #[test]
    fn test_thrust_response() {
        let s = Steering {
            direction: Vec2::new(0.3, 0.4),
            source: InputSource::Gamepad,
        };
        assert!((s.thrust(InputResponse::Digital).length() - 1.0).abs() < 1e-6);
        assert!((s.thrust(InputResponse::Analog).length() - 0.5).abs() < 1e-6);

        let corner = Steering {
            direction: Vec2::new(1.0, 1.0),
            source: InputSource::Gamepad,
        };
        assert!((corner.thrust(InputResponse::Analog).length() - 1.0).abs() < 1e-6);
    }
}
