//! Input Module
//!
//! Provides platform-agnostic analog input handling for the player
//! controller. This module is decoupled from any specific UI toolkit or
//! gamepad backend: the host feeds raw axis values and discrete action
//! presses, and the controller consumes clamped samples and queued actions.
//!
//! # Example
//!
//! ```rust,ignore
//! use nightfall_engine::input::{DualStickInput, InputProvider, PlayerAction};
//!
//! let mut sticks = DualStickInput::new();
//!
//! // Host joystick widgets write axis values each frame
//! sticks.movement.set_axes(0.0, 1.0);
//! sticks.look.set_axes(-0.3, 0.0);
//! let sample = sticks.sample();
//!
//! // UI buttons push discrete actions through a sender
//! sender.send(PlayerAction::Jump);
//! ```

pub mod joystick;
pub mod triggers;

// Re-export commonly used types at module level
pub use joystick::{DualStickInput, InputProvider, InputSample, VirtualJoystick};
pub use triggers::{ActionQueue, ActionSender, PlayerAction};
