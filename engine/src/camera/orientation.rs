//! Look Orientation Controller
//!
//! Converts look-stick input into camera pitch and body yaw. Pitch lives on
//! the camera's local rotation only and is clamped to ±80 degrees; yaw is
//! the body's heading and accumulates without bound. Both advance by a
//! fixed number of degrees per unit of stick deflection per render tick,
//! with no smoothing - stick response is instantaneous.
//!
//! The yaw written here is read by the next fixed-step locomotion tick as
//! the movement basis. Camera response is therefore frame-smooth while
//! movement direction updates in discrete physics steps; that asymmetry is
//! intentional.

use glam::{Vec2, Vec3};

/// Degrees of rotation per unit of stick deflection per render tick.
pub const LOOK_SENSITIVITY: f32 = 2.0;

/// Pitch is clamped to ±80 degrees.
pub const PITCH_LIMIT_DEGREES: f32 = 80.0;

/// External camera transform. The controller only ever writes local pitch;
/// the host applies it to the camera object it owns.
pub trait CameraRig {
    /// Set the camera's local pitch in degrees. Always called with a value
    /// inside [-80, 80].
    fn set_pitch_degrees(&mut self, pitch: f32);
}

/// Owns the camera pitch and body yaw angles, in degrees.
#[derive(Debug, Clone)]
pub struct OrientationController {
    /// Camera pitch, clamped to [-PITCH_LIMIT_DEGREES, PITCH_LIMIT_DEGREES]
    pitch: f32,
    /// Body heading, unclamped, accumulates across ticks
    yaw: f32,
    /// Degrees per unit of stick deflection per tick
    sensitivity: f32,
}

impl Default for OrientationController {
    fn default() -> Self {
        Self {
            pitch: 0.0,
            yaw: 0.0,
            sensitivity: LOOK_SENSITIVITY,
        }
    }
}

impl OrientationController {
    /// Create a controller with the default sensitivity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller with custom sensitivity (degrees/unit/tick).
    pub fn with_sensitivity(sensitivity: f32) -> Self {
        Self {
            sensitivity,
            ..Default::default()
        }
    }

    /// Current camera pitch in degrees.
    #[inline]
    pub fn pitch_degrees(&self) -> f32 {
        self.pitch
    }

    /// Current body yaw in degrees. Unclamped; may exceed ±360.
    #[inline]
    pub fn yaw_degrees(&self) -> f32 {
        self.yaw
    }

    /// Current sensitivity in degrees per unit per tick.
    #[inline]
    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    /// Apply one render tick of look input and push pitch to the rig.
    ///
    /// Stick up (`look.y` positive) pitches the camera up (negative pitch
    /// angle); stick right (`look.x` positive) turns the body right. Pitch
    /// saturates at the ±80 degree limit, yaw accumulates freely.
    pub fn apply_look<R: CameraRig>(&mut self, rig: &mut R, look: Vec2) {
        self.pitch =
            (self.pitch - look.y * self.sensitivity).clamp(-PITCH_LIMIT_DEGREES, PITCH_LIMIT_DEGREES);
        self.yaw += look.x * self.sensitivity;
        rig.set_pitch_degrees(self.pitch);
    }

    /// Horizontal forward direction derived from yaw. Pitch never leaks
    /// into the movement basis.
    ///
    /// Yaw 0 faces -Z; positive yaw turns toward +X.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        Vec3::new(yaw.sin(), 0.0, -yaw.cos())
    }

    /// Horizontal right direction, perpendicular to [`forward`](Self::forward).
    #[inline]
    pub fn right(&self) -> Vec3 {
        let forward = self.forward();
        Vec3::new(-forward.z, 0.0, forward.x)
    }

    /// Reset pitch and yaw to the neutral heading (facing -Z).
    pub fn reset(&mut self) {
        self.pitch = 0.0;
        self.yaw = 0.0;
    }
}
