use strum::{AsRefStr, Display};

/// Lifecycle of the background animation.
///
/// `Uninitialized -> Running -> Stopped`; a stopped animator stays stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, AsRefStr)]
pub enum AnimatorState {
    #[default]
    #[strum(serialize = "uninitialized")]
    Uninitialized,
    #[strum(serialize = "running")]
    Running,
    #[strum(serialize = "stopped")]
    Stopped,
}

impl AnimatorState {
    pub fn can_transition_to(self, next: AnimatorState) -> bool {
        matches!(
            (self, next),
            (AnimatorState::Uninitialized, AnimatorState::Running)
                | (AnimatorState::Running, AnimatorState::Stopped)
        )
    }

    /// The next state, or `None` for an illegal transition
    pub fn transition(self, next: AnimatorState) -> Option<AnimatorState> {
        self.can_transition_to(next).then_some(next)
    }
}
