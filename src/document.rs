use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::EngineResult;
use crate::migration::{self, CURRENT_VERSION};
use crate::page::Page;
use crate::reducer::RestorePayload;
use crate::selection::Selection;
use crate::story::{Capabilities, Story, StoryMeta};

/// The persisted form of a story: `{version, pages, ...metadata}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryDocument {
    pub version: u32,
    pub pages: Vec<Page>,
    #[serde(flatten)]
    pub story: StoryMeta,
}

impl StoryDocument {
    pub fn from_story(story: &Story) -> Self {
        Self {
            version: CURRENT_VERSION,
            pages: story.pages.clone(),
            story: story.story.clone(),
        }
    }

    /// Turns the document into a RESTORE payload, opening the first page
    pub fn into_restore(self, capabilities: Option<Capabilities>) -> RestorePayload {
        let current = self.pages.first().map(|page| page.id.clone());
        RestorePayload {
            pages: self.pages,
            selection: Selection::new(),
            current,
            story: self.story,
            capabilities,
        }
    }

    pub fn to_json(&self) -> EngineResult<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Migrates and decodes a raw persisted document.
///
/// A document without pages gets a single blank page, and every page is
/// brought in line with the single-background rule.
pub fn load_document(raw: Value) -> EngineResult<StoryDocument> {
    let migrated = migration::migrate_document(raw)?;
    let mut document: StoryDocument = serde_json::from_value(migrated)?;
    if document.pages.is_empty() {
        log::info!("Document has no pages, adding a blank one");
        document.pages.push(Page::new());
    }
    for page in &mut document.pages {
        if !page.has_valid_background() || page.background().is_none() {
            page.normalize_background();
        }
    }
    Ok(document)
}
