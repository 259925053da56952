//! Character State
//!
//! The controller's owned state: movement speeds, the crouch flag, jump
//! eligibility, and the four independent blocking flags. Blocking flags
//! combine freely - stunned and died at the same time is a valid state
//! with no special handling - so they stay a struct of booleans rather
//! than an enum, and the permission predicates are recomputed on every
//! query instead of being cached.

/// The four independent blocking states.
///
/// While any flag is set, per-tick movement and camera processing is
/// suspended and gated actions are denied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockingFlags {
    /// Hit reaction in progress
    pub stunned: bool,
    /// Narrative sequence playing
    pub in_cutscene: bool,
    /// Character is dead
    pub died: bool,
    /// Inside a hiding spot
    pub hiding: bool,
}

impl BlockingFlags {
    /// No flag set.
    pub fn none() -> Self {
        Self::default()
    }

    /// True if any blocking flag is set.
    #[inline]
    pub fn is_blocked(&self) -> bool {
        self.stunned || self.in_cutscene || self.died || self.hiding
    }

    /// True if no blocking flag is set; gated actions may proceed.
    #[inline]
    pub fn can_act(&self) -> bool {
        !self.is_blocked()
    }
}

/// All controller-owned character state.
///
/// Created once at controller construction and lives for the controller's
/// lifetime. Mutated only through the controller's own methods.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterState {
    /// Standing movement speed in units per second
    pub speed_normal: f32,
    /// Crouched movement speed in units per second
    pub speed_crouching: f32,
    /// Current stance; starts standing
    pub crouching: bool,
    /// The blocking flag set
    pub blocking: BlockingFlags,
    /// Whether a jump request may currently succeed. Narrowed by hiding,
    /// re-armed only by an external collaborator.
    pub jump_eligible: bool,
}

impl CharacterState {
    /// Create the initial state: standing, unblocked, jump-eligible.
    pub fn new(speed_normal: f32, speed_crouching: f32) -> Self {
        Self {
            speed_normal,
            speed_crouching,
            crouching: false,
            blocking: BlockingFlags::none(),
            jump_eligible: true,
        }
    }

    /// Movement speed for the current stance.
    #[inline]
    pub fn current_speed(&self) -> f32 {
        if self.crouching {
            self.speed_crouching
        } else {
            self.speed_normal
        }
    }

    /// True if any blocking flag is set.
    #[inline]
    pub fn is_blocked(&self) -> bool {
        self.blocking.is_blocked()
    }

    /// True if gated actions may proceed.
    #[inline]
    pub fn can_act(&self) -> bool {
        self.blocking.can_act()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags_from_bits(bits: u8) -> BlockingFlags {
        BlockingFlags {
            stunned: bits & 1 != 0,
            in_cutscene: bits & 2 != 0,
            died: bits & 4 != 0,
            hiding: bits & 8 != 0,
        }
    }

    #[test]
    fn test_unblocked_only_when_all_flags_clear() {
        for bits in 0u8..16 {
            let flags = flags_from_bits(bits);
            assert_eq!(flags.is_blocked(), bits != 0);
            assert_eq!(flags.can_act(), bits == 0);
        }
    }

    #[test]
    fn test_flags_combine_freely() {
        // Stunned and died together is a valid state, blocked like any other
        let flags = BlockingFlags {
            stunned: true,
            died: true,
            ..BlockingFlags::none()
        };
        assert!(flags.is_blocked());
        assert!(!flags.can_act());
    }

    #[test]
    fn test_initial_state_lifecycle() {
        let state = CharacterState::new(5.0, 2.0);
        assert!(!state.crouching);
        assert!(state.jump_eligible);
        assert!(state.can_act());
        assert_eq!(state.blocking, BlockingFlags::none());
    }

    #[test]
    fn test_current_speed_follows_stance() {
        let mut state = CharacterState::new(5.0, 2.0);
        assert_eq!(state.current_speed(), 5.0);
        state.crouching = true;
        assert_eq!(state.current_speed(), 2.0);
    }
}
