//! Crouch Collider Management
//!
//! The character carries two collision shapes, one per stance. Exactly one
//! is enabled at any time, matching the crouch flag; both enabled or both
//! disabled would either double-collide or let the character fall through
//! the world. This module owns that exclusivity.
//!
//! The toggle itself (permission gating, flag flip, effect notification)
//! lives on the controller; this module only mirrors the flag onto the
//! collider pair.

/// External standing/crouching collider pair.
///
/// The host maps these to whatever its physics engine calls shape
/// activation. On platforms without swappable shapes the whole set is
/// simply not wired in, and the crouch flag still toggles.
pub trait ColliderSet {
    /// Enable or disable the full-height standing shape.
    fn set_standing_enabled(&mut self, enabled: bool);
    /// Enable or disable the reduced crouching shape.
    fn set_crouching_enabled(&mut self, enabled: bool);
}

/// Mirror the crouch flag onto the collider pair.
///
/// After this call exactly one shape is enabled: the crouching shape when
/// `crouching` is true, the standing shape otherwise.
pub fn sync_colliders<C: ColliderSet>(colliders: &mut C, crouching: bool) {
    colliders.set_standing_enabled(!crouching);
    colliders.set_crouching_enabled(crouching);
}
