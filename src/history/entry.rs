use serde::{Deserialize, Serialize};

use super::Snapshot;
use crate::page::{Page, PageId};
use crate::reducer::RestorePayload;
use crate::selection::Selection;
use crate::story::{Capabilities, Story, StoryMeta};

/// Snapshot of everything an undo step restores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub pages: Vec<Page>,
    pub selection: Selection,
    pub current: Option<PageId>,
    pub story: StoryMeta,
}

impl HistoryEntry {
    pub fn capture(story: &Story) -> Self {
        Self {
            pages: story.pages.clone(),
            selection: story.selection.clone(),
            current: story.current_page_id().cloned(),
            story: story.story.clone(),
        }
    }

    /// Whether `story` is in the state this entry describes
    pub fn matches(&self, story: &Story) -> bool {
        self.pages == story.pages
            && self.selection == story.selection
            && self.current.as_ref() == story.current_page_id()
            && self.story == story.story
    }

    /// Capabilities aren't part of the undo history, so the live ones are
    /// carried over.
    pub fn into_restore(self, capabilities: Option<Capabilities>) -> RestorePayload {
        RestorePayload {
            pages: self.pages,
            selection: self.selection,
            current: self.current,
            story: self.story,
            capabilities,
        }
    }
}

impl Snapshot for HistoryEntry {
    fn rebase_for_replay(&self, present: &Self) -> Self {
        let mut replayed = self.clone();
        if let Some(page_id) = super::replay::changed_page(present, self) {
            if replayed.current.as_ref() != Some(&page_id) {
                log::debug!("Keeping focus on edited page {page_id} while replaying");
                replayed.current = Some(page_id);
                replayed.selection.clear();
            }
        }
        replayed
    }
}
