//! Camera Module
//!
//! Provides look-stick driven orientation for the first-person camera and
//! the player's body heading. This module is renderer-agnostic - it only
//! deals with angles and the basis vectors derived from them.

pub mod orientation;

pub use orientation::{CameraRig, OrientationController, LOOK_SENSITIVITY, PITCH_LIMIT_DEGREES};
