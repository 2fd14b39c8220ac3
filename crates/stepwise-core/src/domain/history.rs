//! History: the append-only record of executed transitions.

use serde::{Deserialize, Serialize};

use super::candidate::HistoryEntry;

/// Insertion-ordered record of what the agent did.
///
/// Read access is public; appending is crate-private so only the `Agent`
/// can grow it. Nothing removes or reorders entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History<S, A> {
    entries: Vec<HistoryEntry<S, A>>,
}

impl<S, A> History<S, A> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, entry: HistoryEntry<S, A>) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry<S, A>> {
        self.entries.get(index)
    }

    pub fn last(&self) -> Option<&HistoryEntry<S, A>> {
        self.entries.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry<S, A>> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[HistoryEntry<S, A>] {
        &self.entries
    }
}

impl<S, A> Default for History<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, S, A> IntoIterator for &'a History<S, A> {
    type Item = &'a HistoryEntry<S, A>;
    type IntoIter = std::slice::Iter<'a, HistoryEntry<S, A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
