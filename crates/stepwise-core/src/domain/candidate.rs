//! Candidate and HistoryEntry: the two `(state, action)` shapes of the protocol.
//!
//! Both carry the same fields but mean different things:
//! - `Candidate` is a reachable next step that has NOT been executed yet.
//!   Only a `Problem` produces them.
//! - `HistoryEntry` is a step that WAS executed. Only the `Agent` appends them.
//!
//! Keeping them as distinct types means a candidate can never be pushed into
//! history by accident.

use serde::{Deserialize, Serialize};

/// A reachable next step offered by a `Problem`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate<S, A> {
    pub state: S,
    pub action: A,
}

impl<S, A> Candidate<S, A> {
    pub fn new(state: S, action: A) -> Self {
        Self { state, action }
    }

    pub fn into_parts(self) -> (S, A) {
        (self.state, self.action)
    }
}

/// A transition the agent actually executed.
///
/// `state` is the problem state observed *after* the tick, not before.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryEntry<S, A> {
    pub state: S,
    pub action: A,
}

impl<S, A> HistoryEntry<S, A> {
    pub fn new(state: S, action: A) -> Self {
        Self { state, action }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_serializes_as_state_action_object() {
        let c = Candidate::new(serde_json::json!({"x": 2}), "right");
        let v = serde_json::to_value(&c).unwrap();
        assert_eq!(v, serde_json::json!({"state": {"x": 2}, "action": "right"}));
    }

    #[test]
    fn into_parts_returns_fields_in_order() {
        let (state, action) = Candidate::new(7, 'r').into_parts();
        assert_eq!(state, 7);
        assert_eq!(action, 'r');
    }
}
