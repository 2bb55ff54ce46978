//! # Readiness state machine
//!
//! The temporal core of the crate: converts the externally-supplied readiness
//! flag into an internally-held display decision, smoothing readiness flicker
//! with a configurable hide delay and an optional one-shot lock-in.
//!
//! The machine itself is deliberately free of timers and UI concerns. Every
//! call to [`ReadinessMachine::evaluate`] is a total function of the inputs
//! and the current state; instead of touching a clock it returns a
//! [`Directive`] telling the caller what to do with the single outstanding
//! hide timer (keep it, cancel it, or replace it). The adapter that owns the
//! timer — in this crate the [`Placeholder`](crate::component::Placeholder)
//! component, in tests a logical clock — executes the directive and calls
//! [`ReadinessMachine::hide_timer_elapsed`] when the timer fires.
//!
//! ## Transition rules
//!
//! Evaluated whenever `ready`, `lock_in` or `delay` changes:
//!
//! 1. `lock_in` and currently showing content: stay on content forever and
//!    cancel any pending hide.
//! 2. `ready`: cancel any pending hide; if the filler is showing, switch to
//!    content immediately. The filler→content direction is never delayed.
//! 3. not `ready` while showing content: with a positive delay, request a
//!    hide timer (replacing any outstanding one); with a zero delay, switch
//!    to the filler immediately.
//! 4. not `ready` while already showing the filler: nothing to do.
//!
//! There is never more than one outstanding hide timer: every
//! [`Directive::ScheduleHide`] implies cancelling the previous one first.
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use dioxus_placeholder::machine::{Directive, DisplayState, ReadinessMachine};
//!
//! let mut machine = ReadinessMachine::new(true);
//! assert_eq!(machine.display(), DisplayState::Content);
//!
//! // Readiness drops with a 300ms grace period: content stays up,
//! // the caller is asked to arm a timer.
//! let directive = machine.evaluate(false, false, Duration::from_millis(300));
//! assert_eq!(directive, Directive::ScheduleHide(Duration::from_millis(300)));
//! assert_eq!(machine.display(), DisplayState::Content);
//!
//! // Readiness comes back before the timer fires: the hide is cancelled.
//! let directive = machine.evaluate(true, false, Duration::from_millis(300));
//! assert_eq!(directive, Directive::CancelHide);
//!
//! // Even if the old timer fired now, it would be absorbed as a no-op.
//! machine.hide_timer_elapsed();
//! assert_eq!(machine.display(), DisplayState::Content);
//! ```

use std::time::Duration;

/// What is currently being displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    /// The caller's real content is displayed.
    Content,
    /// The placeholder filler is displayed.
    Filler,
}

/// Timer instruction returned by [`ReadinessMachine::evaluate`].
///
/// The machine never owns a timer; it tells its adapter what to do with the
/// single outstanding hide timer instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Nothing to do; leave any outstanding timer alone.
    Idle,
    /// Cancel the outstanding hide timer, if any.
    CancelHide,
    /// Cancel the outstanding hide timer, if any, then arm a new one for the
    /// given duration. When it fires, call
    /// [`ReadinessMachine::hide_timer_elapsed`].
    ScheduleHide(Duration),
}

/// Owns the display decision for one placeholder instance.
///
/// State is private to the instance; two machines never share anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadinessMachine {
    display: DisplayState,
    hide_pending: bool,
}

impl ReadinessMachine {
    /// Creates a machine from the first observed readiness value.
    ///
    /// An instance that starts ready shows content from its very first
    /// evaluation: no filler flash, and the hide delay never applies to the
    /// initial state.
    pub fn new(ready: bool) -> Self {
        Self {
            display: if ready {
                DisplayState::Content
            } else {
                DisplayState::Filler
            },
            hide_pending: false,
        }
    }

    /// The current display decision.
    pub fn display(&self) -> DisplayState {
        self.display
    }

    /// Whether a delayed hide is currently outstanding.
    pub fn hide_pending(&self) -> bool {
        self.hide_pending
    }

    /// Re-evaluates the display decision against the current inputs.
    ///
    /// Call this whenever `ready`, `lock_in` or `delay` changes, then execute
    /// the returned [`Directive`]. Re-entering rule 3 while a hide is already
    /// pending replaces the outstanding timer with a fresh one for the full
    /// current delay; a delay change therefore reschedules rather than
    /// letting the old timer fire at its original time.
    pub fn evaluate(&mut self, ready: bool, lock_in: bool, delay: Duration) -> Directive {
        if lock_in && self.display == DisplayState::Content {
            // One-way latch: content has been shown, never go back.
            self.hide_pending = false;
            return Directive::CancelHide;
        }

        if ready {
            self.hide_pending = false;
            if self.display == DisplayState::Filler {
                self.display = DisplayState::Content;
            }
            return Directive::CancelHide;
        }

        if self.display == DisplayState::Content {
            if delay > Duration::ZERO {
                self.hide_pending = true;
                return Directive::ScheduleHide(delay);
            }
            self.display = DisplayState::Filler;
            self.hide_pending = false;
            return Directive::CancelHide;
        }

        // Not ready and already showing the filler.
        Directive::Idle
    }

    /// Applies a fired hide timer.
    ///
    /// The world may have changed since the timer was armed, so the
    /// transition is re-validated: it only takes effect if a hide is still
    /// pending and content is still displayed. A stale fire is silently
    /// absorbed.
    pub fn hide_timer_elapsed(&mut self) {
        if self.hide_pending && self.display == DisplayState::Content {
            self.display = DisplayState::Filler;
        }
        self.hide_pending = false;
    }
}
