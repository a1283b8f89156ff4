//! The per-workflow submission state machine.
//!
//! Every workflow owns a [`Phase`] value instead of a bag of booleans, so the
//! "exactly one of success/failure per attempt" rule is enforced by the type:
//! completing a submission replaces the whole variant, and a new submission
//! discards the previous outcome entirely (no merging, no stale error text).

use crate::error::WorkflowError;

/// Submission lifecycle for one workflow.
///
/// ```text
/// Idle ──begin──▶ InFlight ──complete──▶ Succeeded(T) | Failed(msg)
///                    ▲                          │
///                    └────────── begin ─────────┘
/// ```
#[derive(Debug, Clone)]
pub enum Phase<T> {
    /// Nothing submitted yet, or outcome cleared.
    Idle,
    /// A request is in flight. Submission is gated off in this state.
    InFlight,
    /// The last submission succeeded with this payload.
    Succeeded(T),
    /// The last submission failed with this user-visible message.
    Failed(String),
}

// derive(Default) would add a `T: Default` bound
impl<T> Default for Phase<T> {
    fn default() -> Self {
        Phase::Idle
    }
}

impl<T> Phase<T> {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Phase::InFlight)
    }

    /// Enter the in-flight state, discarding any prior outcome.
    pub fn begin(&mut self) {
        *self = Phase::InFlight;
    }

    /// Resolve the in-flight submission into exactly one terminal state.
    pub fn complete(&mut self, result: Result<T, WorkflowError>) {
        *self = match result {
            Ok(value) => Phase::Succeeded(value),
            Err(e) => Phase::Failed(e.message().to_string()),
        };
    }

    /// The success payload, if the last submission succeeded.
    pub fn value(&self) -> Option<&T> {
        match self {
            Phase::Succeeded(v) => Some(v),
            _ => None,
        }
    }

    /// The failure message, if the last submission failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Phase::Failed(m) => Some(m),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_discards_previous_outcome() {
        let mut phase: Phase<u32> = Phase::Succeeded(7);
        phase.begin();
        assert!(phase.is_in_flight());
        assert!(phase.value().is_none());
        assert!(phase.error().is_none());
    }

    #[test]
    fn test_complete_success_is_exclusive() {
        let mut phase: Phase<u32> = Phase::InFlight;
        phase.complete(Ok(3));
        assert_eq!(phase.value(), Some(&3));
        assert!(phase.error().is_none());
        assert!(!phase.is_in_flight());
    }

    #[test]
    fn test_complete_failure_is_exclusive() {
        let mut phase: Phase<u32> = Phase::InFlight;
        phase.complete(Err(WorkflowError::transport()));
        assert!(phase.value().is_none());
        assert_eq!(phase.error(), Some("Failed to connect to the server"));
    }

    #[test]
    fn test_failure_replaces_previous_success() {
        let mut phase: Phase<Vec<&str>> = Phase::Succeeded(vec!["stale"]);
        phase.begin();
        phase.complete(Err(WorkflowError::Server("boom".to_string())));
        assert!(phase.value().is_none(), "stale results must be cleared");
        assert_eq!(phase.error(), Some("boom"));
    }
}
