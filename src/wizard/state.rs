/// Wizard state management
///
/// Tracks the active step, the intro gate, and the two timed
/// mini-machines: the step transition (exit/enter animation window) and
/// the simulated publish wait. Deadlines live here, owned by the state,
/// so dropping the wizard can never leave a detached timer behind.
use std::time::{Duration, Instant};

use crate::wizard::steps::WizardStep;

/// How long a step transition animates before the index actually moves
pub const STEP_TRANSITION: Duration = Duration::from_millis(150);

/// Simulated network delay for the publish action
pub const PUBLISH_DELAY: Duration = Duration::from_millis(2000);

/// Which way a step transition animates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Step-transition mini-machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Idle,
    Transitioning {
        direction: Direction,
        target: WizardStep,
        deadline: Instant,
    },
}

/// Publish mini-machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishState {
    Idle,
    Publishing { deadline: Instant },
}

/// Wizard state
#[derive(Debug, Clone)]
pub struct WizardState {
    /// Active step
    current: WizardStep,

    /// Whether the intro screen still precedes step 1
    intro_active: bool,

    /// Pending step transition, if any
    transition: Transition,

    /// Pending publish wait, if any
    publish: PublishState,
}

impl WizardState {
    /// Fresh session: intro screen up, step 1 behind it
    pub fn new() -> Self {
        Self {
            current: WizardStep::PropertyType,
            intro_active: true,
            transition: Transition::Idle,
            publish: PublishState::Idle,
        }
    }

    /// Resumed session: straight to the persisted step, no intro
    pub fn resumed(step: WizardStep) -> Self {
        Self {
            current: step,
            intro_active: false,
            transition: Transition::Idle,
            publish: PublishState::Idle,
        }
    }

    pub fn current_step(&self) -> WizardStep {
        self.current
    }

    pub fn intro_active(&self) -> bool {
        self.intro_active
    }

    pub fn dismiss_intro(&mut self) {
        self.intro_active = false;
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.transition, Transition::Transitioning { .. })
    }

    pub fn is_publishing(&self) -> bool {
        matches!(self.publish, PublishState::Publishing { .. })
    }

    pub fn pending_transition(&self) -> Transition {
        self.transition
    }

    /// Arm the transition machine. The step index moves only when the
    /// deadline passes.
    pub fn begin_transition(&mut self, direction: Direction, target: WizardStep, now: Instant) {
        self.transition = Transition::Transitioning {
            direction,
            target,
            deadline: now + STEP_TRANSITION,
        };
    }

    /// Commit a due transition, returning the step that became active.
    /// Not-yet-due transitions stay pending.
    pub fn take_due_transition(&mut self, now: Instant) -> Option<WizardStep> {
        if let Transition::Transitioning { target, deadline, .. } = self.transition {
            if now >= deadline {
                self.current = target;
                self.transition = Transition::Idle;
                return Some(target);
            }
        }
        None
    }

    pub fn cancel_transition(&mut self) {
        self.transition = Transition::Idle;
    }

    /// Arm the publish machine
    pub fn begin_publish(&mut self, now: Instant) {
        self.publish = PublishState::Publishing {
            deadline: now + PUBLISH_DELAY,
        };
    }

    /// Whether a pending publish wait has elapsed
    pub fn publish_due(&self, now: Instant) -> bool {
        matches!(self.publish, PublishState::Publishing { deadline } if now >= deadline)
    }

    pub fn finish_publish(&mut self) {
        self.publish = PublishState::Idle;
    }

    pub fn cancel_publish(&mut self) {
        self.publish = PublishState::Idle;
    }

    /// Back to a fresh session
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}
