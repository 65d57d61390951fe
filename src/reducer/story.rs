use std::collections::HashSet;

use serde_json::{Map, Value};

use super::RestorePayload;
use crate::animation::Animation;
use crate::error::{EngineError, EngineResult};
use crate::story::Story;

impl Story {
    pub(super) fn update_story(&mut self, properties: &Map<String, Value>) -> EngineResult<()> {
        self.story = self.story.patched(properties)?;
        Ok(())
    }

    /// Adds animations to the current page, replacing any with the same id
    pub(super) fn add_animations(&mut self, animations: Vec<Animation>) {
        let Some(page) = self.current_page_mut() else {
            return;
        };
        for animation in animations {
            match page
                .animations
                .iter_mut()
                .find(|existing| existing.id == animation.id)
            {
                Some(existing) => *existing = animation,
                None => page.animations.push(animation),
            }
        }
    }

    /// Replaces the whole story. The payload must already satisfy every
    /// story invariant; anything else is a caller bug and is rejected.
    pub(super) fn restore(&mut self, payload: RestorePayload) -> EngineResult<()> {
        let RestorePayload {
            pages,
            selection,
            current,
            story,
            capabilities,
        } = payload;

        if pages.is_empty() {
            return Err(EngineError::MalformedRestore(
                "a story needs at least one page".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for page in &pages {
            if !seen.insert(page.id.as_str()) {
                return Err(EngineError::MalformedRestore(format!(
                    "duplicate page id {}",
                    page.id
                )));
            }
            if !page.has_valid_background() {
                return Err(EngineError::MalformedRestore(format!(
                    "page {} has a background element above index 0",
                    page.id
                )));
            }
        }

        let current = match current {
            Some(id) => pages
                .iter()
                .find(|page| page.id == id)
                .ok_or_else(|| EngineError::MalformedRestore(format!("unknown current page {id}")))?,
            None => &pages[0],
        };
        if let Some(stray) = selection.iter().find(|id| !current.contains(id)) {
            return Err(EngineError::MalformedRestore(format!(
                "selected element {stray} is not on page {}",
                current.id
            )));
        }

        self.current = Some(current.id.clone());
        self.pages = pages;
        self.selection = selection;
        self.story = story;
        if let Some(capabilities) = capabilities {
            self.capabilities = capabilities;
        }
        self.normalize();
        Ok(())
    }
}
