//! Bounded undo/redo log.
//!
//! Entries are stored newest first: `entries[0]` is the most recent commit
//! and `offset` counts how many steps back the user has gone. Undo and redo
//! never mutate the log, they only move `offset` and hand the chosen entry
//! to the consumer through `replay_state`.

mod entry;
mod replay;

pub use entry::HistoryEntry;

use std::collections::VecDeque;

/// Hook for entry types that want to adjust a replayed snapshot based on
/// the snapshot being replaced.
pub trait Snapshot: Clone {
    fn rebase_for_replay(&self, _present: &Self) -> Self {
        self.clone()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HistoryAction<E> {
    AddEntry(E),
    /// Move to the entry at this offset
    Replay(usize),
    ClearReplayState,
    ClearHistory,
}

#[derive(Debug, Clone, PartialEq)]
pub struct History<E> {
    size: usize,
    entries: VecDeque<E>,
    offset: usize,
    version_number: u64,
    replay_state: Option<E>,
}

impl<E: Snapshot> History<E> {
    /// Creates an empty log holding at most `size` entries (at least one)
    pub fn new(size: usize) -> Self {
        let size = size.max(1);
        Self {
            size,
            entries: VecDeque::with_capacity(size),
            offset: 0,
            version_number: 0,
            replay_state: None,
        }
    }

    pub fn apply(&mut self, action: HistoryAction<E>) {
        match action {
            HistoryAction::AddEntry(entry) => self.add_entry(entry),
            HistoryAction::Replay(offset) => self.replay(offset),
            HistoryAction::ClearReplayState => self.replay_state = None,
            HistoryAction::ClearHistory => self.clear(),
        }
    }

    fn add_entry(&mut self, entry: E) {
        // Anything newer than the current offset is a redo branch we leave behind
        self.entries.drain(..self.offset.min(self.entries.len()));
        self.entries.push_front(entry);
        self.entries.truncate(self.size);
        self.offset = 0;
        self.version_number += 1;
        self.replay_state = None;
        log::debug!(
            "History entry added ({} entries, version {})",
            self.entries.len(),
            self.version_number
        );
    }

    fn replay(&mut self, offset: usize) {
        let Some(target) = self.entries.get(offset) else {
            log::warn!(
                "Ignoring replay to offset {offset}, only {} entries",
                self.entries.len()
            );
            return;
        };
        let replayed = match self.entries.get(self.offset) {
            Some(present) => target.rebase_for_replay(present),
            None => target.clone(),
        };
        self.offset = offset;
        self.replay_state = Some(replayed);
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.offset = 0;
        self.version_number = 0;
        self.replay_state = None;
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn entries(&self) -> &VecDeque<E> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of committed edits since the log was last cleared
    pub fn version_number(&self) -> u64 {
        self.version_number
    }

    pub fn replay_state(&self) -> Option<&E> {
        self.replay_state.as_ref()
    }

    /// The entry matching the live state, if any
    pub fn current(&self) -> Option<&E> {
        self.entries.get(self.offset)
    }

    pub fn has_undo(&self) -> bool {
        self.offset + 1 < self.entries.len()
    }

    pub fn has_redo(&self) -> bool {
        self.offset > 0
    }

    pub fn undo_offset(&self) -> Option<usize> {
        self.has_undo().then_some(self.offset + 1)
    }

    pub fn redo_offset(&self) -> Option<usize> {
        self.has_redo().then(|| self.offset - 1)
    }
}
