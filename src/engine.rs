use serde_json::Value;

use crate::config::EngineConfig;
use crate::document::{StoryDocument, load_document};
use crate::error::EngineResult;
use crate::event::{EngineEvent, EventBus};
use crate::history::{History, HistoryAction, HistoryEntry};
use crate::migration;
use crate::reducer::{Action, reduce};
use crate::story::Story;

/// Owns the live story together with its undo history.
///
/// Edits go through [`Engine::dispatch`] and become undoable once
/// [`Engine::commit`] records them; [`Engine::apply`] does both for a
/// single action and [`Engine::batch`] for a whole gesture.
#[derive(Debug)]
pub struct Engine {
    story: Story,
    history: History<HistoryEntry>,
    events: EventBus,
    config: EngineConfig,
    /// Dispatched changes not yet committed to history
    dirty: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Engine {
    /// An engine holding a blank single-page story
    pub fn new(config: EngineConfig) -> Self {
        let story = Story::new();
        let mut history = History::new(config.history_size);
        history.apply(HistoryAction::AddEntry(HistoryEntry::capture(&story)));
        Self {
            story,
            history,
            events: EventBus::new(),
            config,
            dirty: false,
        }
    }

    pub fn story(&self) -> &Story {
        &self.story
    }

    pub fn history(&self) -> &History<HistoryEntry> {
        &self.history
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Replaces the live story with a persisted document and starts a fresh
    /// history whose only entry is the loaded state.
    pub fn load(&mut self, raw: Value) -> EngineResult<()> {
        let from_version = migration::document_version(&raw)?;
        let document = load_document(raw)?;
        let pages = document.pages.len();

        let restore = Action::Restore(document.into_restore(None));
        self.story = reduce(&self.story, restore)?;
        self.dirty = false;
        self.reset_history();

        log::info!("Loaded story with {pages} pages (from version {from_version})");
        self.events.emit(EngineEvent::DocumentLoaded {
            from_version,
            pages,
        });
        Ok(())
    }

    /// Applies an action to the live story without recording history.
    /// Returns whether the story changed.
    pub fn dispatch(&mut self, action: Action) -> EngineResult<bool> {
        let kind = action.kind();
        let next = reduce(&self.story, action)?;
        if next == self.story {
            return Ok(false);
        }
        self.story = next;
        self.dirty = true;
        self.events.emit(EngineEvent::StoryChanged { action: kind });
        Ok(true)
    }

    /// [`Engine::dispatch`] for an action in its wire form
    pub fn dispatch_json(&mut self, action: Value) -> EngineResult<bool> {
        let action = Action::from_json(action)?;
        self.dispatch(action)
    }

    /// Records the live story as a new history entry if anything changed
    /// since the last commit.
    pub fn commit(&mut self) -> bool {
        if !self.dirty {
            return false;
        }
        self.dirty = false;
        if self
            .history
            .current()
            .is_some_and(|entry| entry.matches(&self.story))
        {
            return false;
        }
        self.history
            .apply(HistoryAction::AddEntry(HistoryEntry::capture(&self.story)));
        self.events.emit(EngineEvent::EntryCommitted {
            version_number: self.history.version_number(),
        });
        true
    }

    /// Dispatches a gesture's actions and commits them as one entry.
    ///
    /// There is no rollback: if an action fails, the ones before it stay
    /// applied and are committed with the next successful commit.
    pub fn batch(&mut self, actions: impl IntoIterator<Item = Action>) -> EngineResult<bool> {
        for action in actions {
            self.dispatch(action)?;
        }
        Ok(self.commit())
    }

    pub fn apply(&mut self, action: Action) -> EngineResult<bool> {
        self.batch([action])
    }

    pub fn has_undo(&self) -> bool {
        self.history.has_undo()
    }

    pub fn has_redo(&self) -> bool {
        self.history.has_redo()
    }

    pub fn undo(&mut self) -> EngineResult<bool> {
        self.commit();
        match self.history.undo_offset() {
            Some(offset) => self.replay(offset),
            None => Ok(false),
        }
    }

    pub fn redo(&mut self) -> EngineResult<bool> {
        self.commit();
        match self.history.redo_offset() {
            Some(offset) => self.replay(offset),
            None => Ok(false),
        }
    }

    /// Drops all undo/redo entries, keeping the live story as the baseline
    pub fn clear_history(&mut self) {
        self.commit();
        self.reset_history();
    }

    /// The live story in its persisted form
    pub fn save(&self) -> EngineResult<Value> {
        StoryDocument::from_story(&self.story).to_json()
    }

    fn replay(&mut self, offset: usize) -> EngineResult<bool> {
        self.history.apply(HistoryAction::Replay(offset));
        let Some(entry) = self.history.replay_state().cloned() else {
            return Ok(false);
        };
        let restore = Action::Restore(entry.into_restore(None));
        self.story = reduce(&self.story, restore)?;
        self.history.apply(HistoryAction::ClearReplayState);
        self.dirty = false;
        self.events.emit(EngineEvent::Replayed { offset });
        Ok(true)
    }

    fn reset_history(&mut self) {
        self.history.apply(HistoryAction::ClearHistory);
        self.events.emit(EngineEvent::HistoryCleared);
        self.history
            .apply(HistoryAction::AddEntry(HistoryEntry::capture(&self.story)));
    }
}
