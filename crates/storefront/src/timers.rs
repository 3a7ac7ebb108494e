//! Cancellable deferred UI tasks.
//!
//! The storefront defers a few visual resets: reverting an add-to-cart
//! control's "added" label, surfacing the contact form's simulated
//! submission result, and resetting that form afterwards. Every task is
//! keyed; scheduling a key again replaces the pending task, so overlapping
//! timers on the same element cannot race.
//!
//! There is no thread or async runtime behind this: the embedding event
//! loop pumps [`Scheduler::drain_due`] (via [`crate::app::Storefront::tick`])
//! and applies the returned actions.

use std::time::{Duration, Instant};

use asfi_core::ProductId;

/// Identity of a pending task. One pending task per key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKey {
    /// The add-to-cart control for a product.
    AddButton(ProductId),
    /// The contact form's simulated submission.
    ContactSubmit,
    /// The contact form's post-success reset.
    ContactReset,
}

/// What the UI layer should do when a task comes due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeferredAction {
    /// Revert an add-to-cart control to its idle label.
    RevertAddButton(ProductId),
    /// Show the contact form's success state.
    ShowContactSuccess,
    /// Reset the contact form and hide the success state.
    ResetContactForm,
}

#[derive(Debug)]
struct ScheduledTask {
    key: TaskKey,
    due: Instant,
    action: DeferredAction,
}

/// Single-threaded deferred-task queue.
#[derive(Debug, Default)]
pub struct Scheduler {
    tasks: Vec<ScheduledTask>,
}

impl Scheduler {
    /// Create an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to run at `now + delay`.
    ///
    /// Any pending task with the same key is cancelled first, so repeated
    /// triggers on the same element reset the timer instead of stacking.
    pub fn schedule(&mut self, key: TaskKey, now: Instant, delay: Duration, action: DeferredAction) {
        self.cancel(&key);
        self.tasks.push(ScheduledTask {
            key,
            due: now + delay,
            action,
        });
    }

    /// Drop the pending task with this key, if any.
    pub fn cancel(&mut self, key: &TaskKey) {
        self.tasks.retain(|task| task.key != *key);
    }

    /// Remove and return the actions of every task due at `now`, soonest
    /// first. Tasks not yet due stay queued.
    pub fn drain_due(&mut self, now: Instant) -> Vec<DeferredAction> {
        let mut due = Vec::new();
        let mut pending = Vec::new();
        for task in self.tasks.drain(..) {
            if task.due <= now {
                due.push(task);
            } else {
                pending.push(task);
            }
        }
        self.tasks = pending;

        due.sort_by_key(|task| task.due);
        due.into_iter().map(|task| task.action).collect()
    }

    /// Number of pending tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether no tasks are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
