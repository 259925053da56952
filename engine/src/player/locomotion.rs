//! Fixed-Step Locomotion
//!
//! Converts the movement stick into the body's horizontal velocity once per
//! fixed physics step. The vertical velocity component belongs to the
//! host's gravity/collision systems and is read back and preserved on every
//! write; this module never invents a vertical value.
//!
//! Velocity is set instantaneously: full speed while the stick is past the
//! deadzone, a hard stop at exactly (0, 0) horizontally when it is not.
//! There is no acceleration or deceleration curve.

use glam::{Vec2, Vec3};
use static_assertions::const_assert;

use crate::player::state::CharacterState;

/// Minimum movement-stick magnitude before the character moves.
pub const MOVE_DEADZONE: f32 = 0.1;

const_assert!(MOVE_DEADZONE > 0.0);
const_assert!(MOVE_DEADZONE < 1.0);

/// External physics body. Horizontal velocity is owned by the player
/// controller while unblocked; the vertical component is authoritative
/// from the host and must round-trip through every write.
pub trait PhysicsBody {
    /// Current velocity in world space.
    fn velocity(&self) -> Vec3;
    /// Overwrite the full velocity vector.
    fn set_velocity(&mut self, velocity: Vec3);
}

/// Run one fixed-step locomotion update against the body.
///
/// `forward` and `right` are the yaw-derived horizontal basis from the
/// orientation controller. Stick deflection past the deadzone moves the
/// character at the stance speed along the basis-projected direction;
/// otherwise the horizontal velocity is zeroed outright. The body's
/// current vertical velocity is preserved either way.
///
/// The caller is responsible for skipping this entirely while the
/// character is blocked, so external forces (knockback) survive.
pub fn apply_movement<B: PhysicsBody>(
    body: &mut B,
    movement: Vec2,
    state: &CharacterState,
    forward: Vec3,
    right: Vec3,
) {
    let vertical = body.velocity().y;

    if movement.length() > MOVE_DEADZONE {
        let direction = (forward * movement.y + right * movement.x).normalize_or_zero();
        let mut velocity = direction * state.current_speed();
        velocity.y = vertical;
        body.set_velocity(velocity);
    } else {
        // Hard stop, vertical untouched
        body.set_velocity(Vec3::new(0.0, vertical, 0.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct TestBody {
        velocity: Vec3,
    }

    impl PhysicsBody for TestBody {
        fn velocity(&self) -> Vec3 {
            self.velocity
        }
        fn set_velocity(&mut self, velocity: Vec3) {
            self.velocity = velocity;
        }
    }

    const FORWARD: Vec3 = Vec3::new(0.0, 0.0, -1.0);
    const RIGHT: Vec3 = Vec3::new(1.0, 0.0, 0.0);

    fn horizontal(v: Vec3) -> Vec2 {
        Vec2::new(v.x, v.z)
    }

    #[test]
    fn test_pure_forward_at_walk_speed() {
        let state = CharacterState::new(5.0, 2.0);
        let mut body = TestBody {
            velocity: Vec3::new(1.0, -3.0, 1.0),
        };

        apply_movement(&mut body, Vec2::new(0.0, 1.0), &state, FORWARD, RIGHT);

        assert!((body.velocity.z - (-5.0)).abs() < 1e-5);
        assert!(body.velocity.x.abs() < 1e-5);
        // Vertical round-trips from the body, never invented
        assert_eq!(body.velocity.y, -3.0);
    }

    #[test]
    fn test_diagonal_input_still_moves_at_stance_speed() {
        let state = CharacterState::new(5.0, 2.0);
        let mut body = TestBody::default();

        apply_movement(&mut body, Vec2::new(1.0, 1.0), &state, FORWARD, RIGHT);

        assert!((horizontal(body.velocity).length() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_crouch_speed_selected() {
        let mut state = CharacterState::new(5.0, 2.0);
        state.crouching = true;
        let mut body = TestBody::default();

        apply_movement(&mut body, Vec2::new(0.0, 1.0), &state, FORWARD, RIGHT);

        assert!((horizontal(body.velocity).length() - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_deadzone_is_a_hard_stop() {
        let state = CharacterState::new(5.0, 2.0);
        let mut body = TestBody {
            velocity: Vec3::new(4.0, -7.0, 3.0),
        };

        // Magnitude 0.1 is at the deadzone boundary, not past it
        apply_movement(&mut body, Vec2::new(0.1, 0.0), &state, FORWARD, RIGHT);

        assert_eq!(body.velocity, Vec3::new(0.0, -7.0, 0.0));
    }

    #[test]
    fn test_just_past_deadzone_moves() {
        let state = CharacterState::new(5.0, 2.0);
        let mut body = TestBody::default();

        apply_movement(&mut body, Vec2::new(0.0, 0.11), &state, FORWARD, RIGHT);

        // Direction is normalized, so even a slight deflection gives full speed
        assert!((horizontal(body.velocity).length() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_strafe_right() {
        let state = CharacterState::new(5.0, 2.0);
        let mut body = TestBody::default();

        apply_movement(&mut body, Vec2::new(1.0, 0.0), &state, FORWARD, RIGHT);

        assert!((body.velocity.x - 5.0).abs() < 1e-5);
        assert!(body.velocity.z.abs() < 1e-5);
    }

    #[test]
    fn test_direction_weights_basis_by_input() {
        let state = CharacterState::new(5.0, 2.0);
        let mut body = TestBody::default();

        // Forward-heavy diagonal: direction must match normalized combination
        let input = Vec2::new(0.3, 0.9);
        apply_movement(&mut body, input, &state, FORWARD, RIGHT);

        let expected = (FORWARD * input.y + RIGHT * input.x).normalize() * 5.0;
        assert!((body.velocity.x - expected.x).abs() < 1e-4);
        assert!((body.velocity.z - expected.z).abs() < 1e-4);
    }
}
