use serde_json::{Map, Value};

use crate::error::EngineResult;
use crate::page::{Page, PageId};
use crate::story::Story;

impl Story {
    /// Inserts `page` (appended unless `position` is given) and makes it current
    pub(super) fn add_page(&mut self, mut page: Page, position: Option<usize>) {
        if self.page_index(&page.id).is_some() {
            log::warn!("Ignoring ADD_PAGE for existing page {}", page.id);
            return;
        }
        if !page.has_valid_background() || page.background().is_none() {
            page.normalize_background();
        }
        let index = position.map_or(self.pages.len(), |position| position.min(self.pages.len()));
        self.current = Some(page.id.clone());
        self.pages.insert(index, page);
        self.selection.clear();
    }

    /// Removes a page. A story always keeps at least one page; when the
    /// current page goes, the following page (else the preceding one) takes
    /// its place.
    pub(super) fn delete_page(&mut self, page_id: Option<PageId>) {
        let Some(page_id) = page_id.or_else(|| self.current_page_id().cloned()) else {
            return;
        };
        let Some(index) = self.page_index(&page_id) else {
            return;
        };
        if self.pages.len() <= 1 {
            log::warn!("Refusing to delete the only page {page_id}");
            return;
        }

        let was_current = self.current_page_id() == Some(&page_id);
        self.pages.remove(index);
        if was_current {
            let next = index.min(self.pages.len() - 1);
            self.current = Some(self.pages[next].id.clone());
            self.selection.clear();
        }
    }

    /// Shallow-merges `properties` into a page. Identity, elements and the
    /// parked default background are protected; dropping a group ungroups
    /// its members.
    pub(super) fn update_page(
        &mut self,
        page_id: Option<PageId>,
        properties: &Map<String, Value>,
    ) -> EngineResult<()> {
        let Some(page_id) = page_id.or_else(|| self.current_page_id().cloned()) else {
            return Ok(());
        };
        let Some(index) = self.page_index(&page_id) else {
            return Ok(());
        };
        let mut updated = self.pages[index].patched(properties)?;
        updated.clear_dangling_group_ids();
        self.pages[index] = updated;
        Ok(())
    }

    /// Moves a page to an absolute position in the page list
    pub(super) fn arrange_page(&mut self, page_id: &str, position: usize) {
        let Some(index) = self.page_index(page_id) else {
            return;
        };
        let target = position.min(self.pages.len() - 1);
        if target == index {
            return;
        }
        let page = self.pages.remove(index);
        self.pages.insert(target, page);
    }

    pub(super) fn set_current_page(&mut self, page_id: &str) {
        if self.page_index(page_id).is_none() {
            log::warn!("Ignoring SET_CURRENT_PAGE for unknown page {page_id}");
            return;
        }
        if self.current.as_deref() != Some(page_id) {
            self.current = Some(page_id.to_string());
            self.selection.clear();
        }
    }
}
