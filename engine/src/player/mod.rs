//! Player Module
//!
//! Provides the character's state, movement and control systems.
//!
//! # Components
//!
//! - [`PlayerController`] - The owning execution context: receives render
//!   and fixed-step ticks, pumps queued actions, and mutates the injected
//!   body/camera/collider collaborators
//! - [`CharacterState`] / [`BlockingFlags`] - Crouch flag, speeds, and the
//!   independent blocking states with their permission predicates
//! - [`PlayerConfig`] - Serde-backed movement and look tuning
//! - [`locomotion`] - Fixed-step stick-to-velocity conversion
//! - [`crouch`] - Standing/crouching collider exclusivity
//! - [`actions`] - Jump gating and external effect hooks

pub mod actions;
pub mod config;
pub mod controller;
pub mod crouch;
pub mod locomotion;
pub mod state;

pub use actions::{ActionEffects, jump_allowed};
pub use config::PlayerConfig;
pub use controller::{ControllerError, PlayerController};
pub use crouch::{ColliderSet, sync_colliders};
pub use locomotion::{MOVE_DEADZONE, PhysicsBody, apply_movement};
pub use state::{BlockingFlags, CharacterState};
