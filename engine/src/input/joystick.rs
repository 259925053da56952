//! Analog Joystick Input
//!
//! Models the two analog sticks driving the player: one for movement, one
//! for camera look. Axis values are clamped to [-1, 1] on write so the rest
//! of the controller can assume well-formed input. Samples are produced
//! fresh for every tick and never buffered across ticks.

use glam::Vec2;

/// A single analog stick fed by the host (touch joystick, gamepad stick).
///
/// Axes are clamped to [-1, 1] on write. A released stick reads (0, 0).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VirtualJoystick {
    axes: Vec2,
}

impl VirtualJoystick {
    /// Create a stick in the neutral (released) position.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the current axis values, clamping each to [-1, 1].
    pub fn set_axes(&mut self, x: f32, y: f32) {
        self.axes = Vec2::new(x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0));
    }

    /// Return the stick to neutral.
    pub fn release(&mut self) {
        self.axes = Vec2::ZERO;
    }

    /// Current axis values.
    pub fn sample(&self) -> Vec2 {
        self.axes
    }

    /// Whether the stick is exactly at rest.
    pub fn is_neutral(&self) -> bool {
        self.axes == Vec2::ZERO
    }
}

/// One tick's worth of analog input: movement stick and look stick.
///
/// Each axis is in [-1, 1]. The controller treats every sample as fresh;
/// the host should rebuild it from the current hardware state per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSample {
    /// Movement stick (x = strafe, y = forward/back)
    pub movement: Vec2,
    /// Look stick (x = yaw, y = pitch)
    pub look: Vec2,
}

impl InputSample {
    /// Build a sample, clamping every axis to [-1, 1].
    pub fn new(movement: Vec2, look: Vec2) -> Self {
        Self {
            movement: movement.clamp(Vec2::splat(-1.0), Vec2::ONE),
            look: look.clamp(Vec2::splat(-1.0), Vec2::ONE),
        }
    }

    /// A sample with both sticks at rest.
    pub fn neutral() -> Self {
        Self::default()
    }
}

/// Seam for hosts that want the controller loop to pull input itself.
pub trait InputProvider {
    /// Sample the current input state. Called once per relevant tick.
    fn sample(&self) -> InputSample;
}

/// The standard dual-stick layout: movement on one stick, look on the other.
#[derive(Debug, Clone, Copy, Default)]
pub struct DualStickInput {
    pub movement: VirtualJoystick,
    pub look: VirtualJoystick,
}

impl DualStickInput {
    /// Create both sticks in the neutral position.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return both sticks to neutral.
    pub fn reset(&mut self) {
        self.movement.release();
        self.look.release();
    }
}

impl InputProvider for DualStickInput {
    fn sample(&self) -> InputSample {
        InputSample {
            movement: self.movement.sample(),
            look: self.look.sample(),
        }
    }
}
