//! Player Configuration
//!
//! Movement and look tuning as a data structure, loadable from JSON so
//! designers can adjust it without touching game code.

use serde::{Deserialize, Serialize};
use static_assertions::const_assert;

/// Default standing speed in units per second.
pub const DEFAULT_SPEED: f32 = 5.0;

/// Default crouched speed in units per second.
pub const DEFAULT_SPEED_CROUCHING: f32 = 2.0;

/// Default look sensitivity in degrees per unit of stick per tick.
pub const DEFAULT_LOOK_SENSITIVITY: f32 = 2.0;

// Crouching must actually slow the character down
const_assert!(DEFAULT_SPEED_CROUCHING < DEFAULT_SPEED);

/// Tuning values for the player controller.
///
/// Unspecified fields fall back to their defaults when deserializing, so
/// partial config files stay valid as fields are added.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Standing movement speed in units per second
    pub speed_normal: f32,
    /// Crouched movement speed in units per second
    pub speed_crouching: f32,
    /// Look sensitivity in degrees per unit of stick deflection per tick
    pub look_sensitivity: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            speed_normal: DEFAULT_SPEED,
            speed_crouching: DEFAULT_SPEED_CROUCHING,
            look_sensitivity: DEFAULT_LOOK_SENSITIVITY,
        }
    }
}

impl PlayerConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
