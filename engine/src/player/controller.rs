//! Player Controller
//!
//! The single owning execution context for the character. The host drives
//! it with two clocks - a render tick for action pumping and camera
//! orientation, a fixed-step tick for velocity - and with the public state
//! mutators external systems call (cutscene director, hit reactions,
//! hiding-spot triggers). Because every path runs through this one object
//! on one thread, the yaw written during a render tick is always fully
//! visible to the next fixed-step tick.
//!
//! Collaborators are injected at construction; there is no global lookup.
//! The camera rig is the one hard requirement - without it the controller
//! cannot do its job and construction fails fast. The collider pair is
//! optional per platform and is simply skipped when absent.

use glam::Vec3;
use log::debug;
use thiserror::Error;

use crate::camera::{CameraRig, OrientationController};
use crate::input::{ActionQueue, ActionSender, InputSample, PlayerAction};
use crate::player::actions::{ActionEffects, jump_allowed};
use crate::player::config::PlayerConfig;
use crate::player::crouch::{ColliderSet, sync_colliders};
use crate::player::locomotion::{PhysicsBody, apply_movement};
use crate::player::state::CharacterState;

/// Construction failures. Everything past construction is a silent
/// permission decision, not an error.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ControllerError {
    /// Camera control is core functionality; the controller refuses to
    /// start without a rig rather than silently degrade.
    #[error("camera rig is unavailable")]
    CameraUnavailable,
}

/// Analog-stick player controller.
///
/// Generic over its four collaborator seams: the physics body `B`, the
/// standing/crouching collider pair `C`, the camera rig `R`, and the
/// action effect hooks `E`.
#[derive(Debug)]
pub struct PlayerController<B, C, R, E> {
    state: CharacterState,
    orientation: OrientationController,
    actions: ActionQueue,
    body: B,
    colliders: Option<C>,
    camera: R,
    effects: E,
}

impl<B, C, R, E> PlayerController<B, C, R, E>
where
    B: PhysicsBody,
    C: ColliderSet,
    R: CameraRig,
    E: ActionEffects,
{
    /// Build the controller around its injected collaborators.
    ///
    /// A missing camera rig is fatal. A missing collider pair is a
    /// legitimate platform configuration: the crouch flag still toggles,
    /// only the shape swap is skipped.
    pub fn new(
        config: PlayerConfig,
        body: B,
        mut colliders: Option<C>,
        camera: Option<R>,
        effects: E,
    ) -> Result<Self, ControllerError> {
        let camera = camera.ok_or(ControllerError::CameraUnavailable)?;
        let state = CharacterState::new(config.speed_normal, config.speed_crouching);

        if let Some(set) = colliders.as_mut() {
            sync_colliders(set, state.crouching);
        }

        Ok(Self {
            state,
            orientation: OrientationController::with_sensitivity(config.look_sensitivity),
            actions: ActionQueue::new(),
            body,
            colliders,
            camera,
            effects,
        })
    }

    /// Hand out a sender for UI buttons and triggers.
    ///
    /// Senders outliving the controller degrade to no-ops, so teardown
    /// needs no explicit unwiring.
    pub fn action_sender(&self) -> ActionSender {
        self.actions.sender()
    }

    /// Render-rate update: pump queued actions, then apply look input.
    ///
    /// Actions are pumped even while blocked - their gates deny them
    /// individually - but orientation only advances when unblocked.
    pub fn render_tick(&mut self, input: &InputSample) {
        self.pump_actions();

        if self.state.is_blocked() {
            return;
        }
        self.orientation.apply_look(&mut self.camera, input.look);
    }

    /// Fixed-step update: recompute horizontal velocity from the movement
    /// stick and the current yaw basis.
    ///
    /// While blocked the tick is skipped outright - no velocity write at
    /// all - so external impulses like knockback are not overwritten.
    pub fn fixed_tick(&mut self, input: &InputSample) {
        if self.state.is_blocked() {
            return;
        }
        apply_movement(
            &mut self.body,
            input.movement,
            &self.state,
            self.orientation.forward(),
            self.orientation.right(),
        );
    }

    fn pump_actions(&mut self) {
        while let Some(action) = self.actions.pop() {
            match action {
                PlayerAction::Jump => {
                    self.request_jump();
                }
                PlayerAction::ToggleCrouch => {
                    self.toggle_crouch();
                }
            }
        }
    }

    /// Request a jump. Succeeds only when the character can act, is
    /// jump-eligible and is standing; a crouched character is rejected
    /// unconditionally. Success notifies [`ActionEffects::on_jump`].
    ///
    /// Eligibility is never consumed or re-armed here; see
    /// [`rearm_jump`](Self::rearm_jump).
    pub fn request_jump(&mut self) -> bool {
        if jump_allowed(&self.state) {
            debug!(target: "player", "jump accepted");
            self.effects.on_jump();
            true
        } else {
            false
        }
    }

    /// Flip the crouch stance if the character can act, re-syncing the
    /// collider pair so exactly one shape stays enabled. A denied toggle
    /// is a silent no-op.
    pub fn toggle_crouch(&mut self) -> bool {
        if !self.state.can_act() {
            return false;
        }

        self.state.crouching = !self.state.crouching;
        if let Some(set) = self.colliders.as_mut() {
            sync_colliders(set, self.state.crouching);
        }
        self.effects.on_crouch_changed(self.state.crouching);
        debug!(target: "player", "crouching = {}", self.state.crouching);
        true
    }

    /// Restore jump eligibility.
    ///
    /// Eligibility only ever narrows inside the controller (entering a
    /// hiding spot while blocked removes it permanently otherwise). The
    /// host's ground-contact or cooldown system decides when jumping comes
    /// back and calls this.
    pub fn rearm_jump(&mut self) {
        self.state.jump_eligible = true;
    }

    /// Set or clear the stun flag. Stunning zeroes the full velocity
    /// vector immediately, vertical included - the one write that does not
    /// preserve the host's vertical component.
    pub fn set_stunned(&mut self, stunned: bool) {
        self.state.blocking.stunned = stunned;
        if stunned {
            self.body.set_velocity(Vec3::ZERO);
            debug!(target: "player", "stunned, velocity zeroed");
        }
    }

    /// Set or clear the hiding flag.
    ///
    /// Entering hiding narrows jump eligibility to what it was while the
    /// character could still act - the capability check runs before the
    /// hiding flag lands. Leaving hiding does not restore eligibility;
    /// that is [`rearm_jump`](Self::rearm_jump)'s job.
    pub fn set_hiding(&mut self, hiding: bool) {
        if hiding {
            self.state.jump_eligible = self.state.jump_eligible && self.state.can_act();
        }
        self.state.blocking.hiding = hiding;
        debug!(target: "player", "hiding = {hiding}");
    }

    /// Set or clear the cutscene flag.
    pub fn set_in_cutscene(&mut self, in_cutscene: bool) {
        self.state.blocking.in_cutscene = in_cutscene;
    }

    /// Set or clear the death flag.
    pub fn set_died(&mut self, died: bool) {
        self.state.blocking.died = died;
    }

    /// True if any blocking flag is set.
    pub fn is_blocked(&self) -> bool {
        self.state.is_blocked()
    }

    /// True if gated actions may proceed.
    pub fn can_act(&self) -> bool {
        self.state.can_act()
    }

    /// The controller-owned character state.
    pub fn state(&self) -> &CharacterState {
        &self.state
    }

    /// Orientation angles and movement basis.
    pub fn orientation(&self) -> &OrientationController {
        &self.orientation
    }

    /// Body yaw in degrees, for the host to orient the character transform.
    pub fn yaw_degrees(&self) -> f32 {
        self.orientation.yaw_degrees()
    }

    /// Camera pitch in degrees, always within [-80, 80].
    pub fn pitch_degrees(&self) -> f32 {
        self.orientation.pitch_degrees()
    }

    /// The injected physics body.
    pub fn body(&self) -> &B {
        &self.body
    }

    /// Mutable body access for the host's gravity/collision collaborator,
    /// which owns the vertical velocity component between ticks.
    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }

    /// The injected collider pair, if this platform wired one in.
    pub fn colliders(&self) -> Option<&C> {
        self.colliders.as_ref()
    }

    /// The injected camera rig.
    pub fn camera(&self) -> &R {
        &self.camera
    }

    /// The injected action effect hooks.
    pub fn effects(&self) -> &E {
        &self.effects
    }
}
