use crate::element::ElementId;
use crate::story::Story;

impl Story {
    /// Replaces the selection. Ids not on the current page are dropped, as
    /// is the background when more than one element ends up selected.
    pub(super) fn set_selected_elements(&mut self, element_ids: Vec<ElementId>) {
        self.selection = element_ids.into_iter().collect();
        self.prune_selection();
    }

    pub(super) fn select_element(&mut self, element_id: ElementId) {
        let on_page = self
            .current_page()
            .is_some_and(|page| page.contains(&element_id));
        if !on_page {
            return;
        }
        self.selection.insert(element_id);
        self.prune_selection();
    }

    pub(super) fn unselect_element(&mut self, element_id: &str) {
        self.selection.remove(element_id);
    }

    pub(super) fn toggle_element_in_selection(&mut self, element_id: ElementId) {
        if self.selection.contains(&element_id) {
            self.unselect_element(&element_id);
        } else {
            self.select_element(element_id);
        }
    }
}
