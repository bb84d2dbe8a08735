//! ThreadStatus enum for tracking the lifecycle of a feedback thread.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a feedback thread, stored lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThreadStatus {
    #[default]
    Opened,
    Answered,
    Closed,
    Comment,
}

impl ThreadStatus {
    /// Returns the persisted representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreadStatus::Opened => "opened",
            ThreadStatus::Answered => "answered",
            ThreadStatus::Closed => "closed",
            ThreadStatus::Comment => "comment",
        }
    }

    /// Validates a transition from this status to another.
    ///
    /// Any non-closed thread may be closed; a closed thread stays closed.
    pub fn can_transition_to(&self, target: &ThreadStatus) -> bool {
        use ThreadStatus::*;
        match (self, target) {
            (Closed, _) => false,
            (_, Closed) => true,
            (Opened, Answered) | (Answered, Opened) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_opened() {
        assert_eq!(ThreadStatus::default(), ThreadStatus::Opened);
    }

    #[test]
    fn every_open_status_can_close() {
        for status in [ThreadStatus::Opened, ThreadStatus::Answered, ThreadStatus::Comment] {
            assert!(status.can_transition_to(&ThreadStatus::Closed));
        }
    }

    #[test]
    fn closed_is_terminal() {
        assert!(!ThreadStatus::Closed.can_transition_to(&ThreadStatus::Closed));
        assert!(!ThreadStatus::Closed.can_transition_to(&ThreadStatus::Opened));
    }

    #[test]
    fn serializes_to_persisted_form() {
        assert_eq!(ThreadStatus::Closed.as_str(), "closed");
        assert_eq!(
            serde_json::to_string(&ThreadStatus::Comment).unwrap(),
            "\"comment\""
        );
    }
}
