//! Gated Actions
//!
//! The permission side of discrete actions. A jump request passes only
//! when the character can act, is jump-eligible, and is not crouching -
//! there is no auto-stand-then-jump. The jump itself (impulse, animation)
//! belongs to the host and is reached through [`ActionEffects`].

use crate::player::state::CharacterState;

/// External hooks notified when a gated action succeeds.
///
/// Implementations drive the visible effect: a jump impulse and animation,
/// a crouch camera/model adjustment. Denied requests never reach these.
pub trait ActionEffects {
    /// A jump request passed the gate.
    fn on_jump(&mut self);

    /// The crouch flag flipped; `crouching` is the new stance.
    fn on_crouch_changed(&mut self, _crouching: bool) {}
}

/// Whether a jump request would currently succeed.
///
/// Requires all three: no blocking flag set, jump eligibility not narrowed
/// away, and a standing stance. Crouching rejects unconditionally.
#[inline]
pub fn jump_allowed(state: &CharacterState) -> bool {
    state.can_act() && state.jump_eligible && !state.crouching
}
