use serde_json::{Map, Value};

use crate::element::{Element, ElementId};
use crate::error::EngineResult;
use crate::page::{GroupId, PageId};
use crate::story::Story;

impl Story {
    /// Appends elements to a page (the current one by default).
    ///
    /// Ids already on the page are skipped and unknown group references
    /// dropped. An element flagged as background goes through the regular
    /// background substitution instead of being appended as a second one.
    pub(super) fn add_elements(
        &mut self,
        elements: Vec<Element>,
        page_id: Option<PageId>,
        update_selection: bool,
    ) {
        let Some(page_id) = page_id.or_else(|| self.current_page_id().cloned()) else {
            return;
        };
        let is_current = self.current_page_id() == Some(&page_id);
        let Some(page) = self.page_mut(&page_id) else {
            log::warn!("Ignoring ADD_ELEMENTS for unknown page {page_id}");
            return;
        };

        let mut added: Vec<ElementId> = Vec::new();
        let mut new_background = None;
        for mut element in elements {
            if page.contains(&element.id) || added.contains(&element.id) {
                log::warn!("Skipping duplicate element {}", element.id);
                continue;
            }
            if element
                .group_id
                .as_ref()
                .is_some_and(|group_id| !page.groups.contains_key(group_id))
            {
                element.group_id = None;
            }
            if element.is_background && new_background.is_none() {
                new_background = Some(element.id.clone());
            }
            element.is_background = false;
            element.is_default_background = false;
            added.push(element.id.clone());
            page.elements.push(element);
        }

        if let Some(background_id) = &new_background {
            page.set_background(Some(background_id));
        }

        if update_selection && is_current && !added.is_empty() {
            self.selection = added.into_iter().collect();
            self.prune_selection();
        }
    }

    /// Deletes elements from the current page.
    ///
    /// The default background can't be deleted; deleting a real background
    /// puts the default one back in its place.
    pub(super) fn delete_elements(&mut self, element_ids: Option<Vec<ElementId>>) {
        let targets = self.resolve_targets(element_ids);
        let Some(page) = self.current_page_mut() else {
            return;
        };

        let mut deleted: Vec<ElementId> = Vec::new();
        let mut touched_groups: Vec<GroupId> = Vec::new();
        for id in &targets {
            let Some(index) = page.index_of(id) else {
                continue;
            };
            let element = &page.elements[index];
            if element.is_default_background {
                log::warn!("Refusing to delete the default background {id}");
                continue;
            }
            let was_background = element.is_background;
            let removed = page.elements.remove(index);
            if let Some(group_id) = removed.group_id {
                touched_groups.push(group_id);
            }
            if was_background {
                let background = page.take_default_background();
                page.elements.insert(0, background);
            }
            deleted.push(removed.id);
        }
        if deleted.is_empty() {
            return;
        }

        page.remove_animation_targets(&deleted);
        page.remove_empty_groups(&touched_groups);
        self.selection.retain(|id| !deleted.contains(id));
    }

    /// Shallow-merges `properties` into each targeted element on the current
    /// page. Identity and background flags are never changed this way, and a
    /// `groupId` must name an existing group.
    pub(super) fn update_elements(
        &mut self,
        element_ids: Option<Vec<ElementId>>,
        properties: &Map<String, Value>,
    ) -> EngineResult<()> {
        let targets = self.resolve_targets(element_ids);
        let Some(page) = self.current_page_mut() else {
            return Ok(());
        };

        let mut updates = Vec::new();
        for (index, element) in page.elements.iter().enumerate() {
            if !targets.contains(&element.id) {
                continue;
            }
            let mut updated = element.patched(properties)?;
            if updated
                .group_id
                .as_ref()
                .is_some_and(|group_id| !page.groups.contains_key(group_id))
            {
                log::warn!("Ignoring unknown group for element {}", element.id);
                updated.group_id = element.group_id.clone();
            }
            if updated.is_background {
                updated.group_id = None;
            }
            updates.push((index, updated));
        }
        for (index, updated) in updates {
            page.elements[index] = updated;
        }
        Ok(())
    }

    pub(super) fn update_elements_by_resource_id(
        &mut self,
        resource_id: &str,
        properties: &Map<String, Value>,
    ) {
        for page in &mut self.pages {
            for element in &mut page.elements {
                if element.resource_id().as_deref() == Some(resource_id) {
                    element.merge_resource(properties);
                }
            }
        }
    }

    /// Moves an element to an absolute z-position.
    ///
    /// Without an explicit id the single selected element is moved. The
    /// background is pinned at the bottom and nothing can move below it.
    pub(super) fn arrange_element(
        &mut self,
        element_id: Option<ElementId>,
        position: usize,
        group_id: Option<GroupId>,
    ) {
        let element_id = match element_id {
            Some(id) => id,
            None if self.selection.len() == 1 => match self.selection.primary() {
                Some(id) => id.clone(),
                None => return,
            },
            None => return,
        };
        let Some(page) = self.current_page_mut() else {
            return;
        };
        let Some(index) = page.index_of(&element_id) else {
            return;
        };
        if page.elements[index].is_background {
            return;
        }

        let lowest = usize::from(page.background().is_some());
        let target = position.clamp(lowest, page.elements.len() - 1);
        let mut element = page.elements.remove(index);
        if let Some(group_id) = group_id {
            if page.groups.contains_key(&group_id) {
                element.group_id = Some(group_id);
            }
        }
        page.elements.insert(target, element);
    }
}
