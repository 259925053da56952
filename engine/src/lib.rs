//! Nightfall Engine Library
//!
//! Player-facing runtime for an analog-stick driven character: two stick
//! vectors become body velocity and camera/body orientation, and every
//! movement or action is gated by the character's blocking states
//! (stunned, in-cutscene, hiding, dead) plus a crouch toggle that swaps
//! collision shapes.
//!
//! The host engine owns rendering, physics integration, gravity and UI;
//! this library owns the decision layer between raw input and the body.
//! It runs on two clocks the host drives: a render tick (action pumping,
//! camera orientation) and a fixed-step tick (velocity writes).
//!
//! # Modules
//!
//! - [`input`] - Analog stick sampling and discrete action triggers
//! - [`camera`] - Camera pitch / body yaw orientation
//! - [`player`] - Character state, locomotion, crouch and the controller
//!
//! # Example
//!
//! ```ignore
//! use nightfall_engine::input::InputSample;
//! use nightfall_engine::player::{PlayerConfig, PlayerController};
//!
//! let mut controller = PlayerController::new(
//!     PlayerConfig::default(),
//!     body,            // host physics body
//!     Some(colliders), // standing/crouching collider pair (optional)
//!     Some(camera),    // camera rig; absence is a construction error
//!     effects,         // jump impulse / crouch visual hooks
//! )?;
//!
//! // UI wiring: buttons push actions through a sender.
//! let jump_button = controller.action_sender();
//!
//! // Each displayed frame:
//! let sample = InputSample::new(move_stick, look_stick);
//! controller.render_tick(&sample);
//!
//! // Each fixed physics step:
//! controller.fixed_tick(&sample);
//! ```

pub mod camera;
pub mod input;
pub mod player;

// Re-export the controller and its collaborator seams at crate level
pub use camera::{CameraRig, OrientationController};
pub use input::{
    ActionQueue, ActionSender, DualStickInput, InputProvider, InputSample, PlayerAction,
    VirtualJoystick,
};
pub use player::{
    ActionEffects, BlockingFlags, CharacterState, ColliderSet, ControllerError, PhysicsBody,
    PlayerConfig, PlayerController,
};
