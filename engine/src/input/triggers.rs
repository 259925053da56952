//! Discrete Action Triggers
//!
//! UI buttons and hardware triggers fire one-shot actions (jump, crouch
//! toggle) asynchronously from the tick loop. Instead of registering
//! callbacks into the controller, hosts push actions into a polled queue;
//! the controller drains it on its own clock, keeping every mutation on the
//! single owning context.
//!
//! Senders hold a weak handle to the queue. Once the controller (and with
//! it the queue) is dropped, every send becomes a silent no-op, so a button
//! wired to a dead controller can never invoke it.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

/// Logical one-shot player actions, independent of their hardware source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    /// Jump request (default: jump button)
    Jump,
    /// Toggle crouch stance (default: crouch button)
    ToggleCrouch,
}

/// Polled single-threaded action queue owned by the player controller.
#[derive(Debug, Default)]
pub struct ActionQueue {
    inner: Rc<RefCell<VecDeque<PlayerAction>>>,
}

impl ActionQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out a sender for UI/hardware wiring.
    ///
    /// Senders stay valid for the queue's lifetime and degrade to no-ops
    /// afterwards; no explicit unsubscription step is needed.
    pub fn sender(&self) -> ActionSender {
        ActionSender {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Pop the oldest pending action, if any.
    pub fn pop(&self) -> Option<PlayerAction> {
        self.inner.borrow_mut().pop_front()
    }

    /// Number of pending actions.
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Whether no actions are pending.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

/// Cloneable handle that pushes actions into an [`ActionQueue`].
#[derive(Debug, Clone)]
pub struct ActionSender {
    inner: Weak<RefCell<VecDeque<PlayerAction>>>,
}

impl ActionSender {
    /// Push an action onto the queue.
    ///
    /// Returns `false` if the queue (and its controller) no longer exists;
    /// the action is then discarded silently.
    pub fn send(&self, action: PlayerAction) -> bool {
        match self.inner.upgrade() {
            Some(queue) => {
                queue.borrow_mut().push_back(action);
                true
            }
            None => false,
        }
    }

    /// Whether the receiving queue is still alive.
    pub fn is_connected(&self) -> bool {
        self.inner.strong_count() > 0
    }
}
