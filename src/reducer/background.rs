use crate::element::Element;
use crate::page::Page;
use crate::story::Story;

impl Page {
    /// Makes `element_id` the background, or with `None` reinstates the
    /// default background.
    ///
    /// A previous real background is demoted in place (it keeps its
    /// geometry and ends up just above the new background); a previous
    /// default background is parked on the page. Returns whether anything
    /// changed.
    pub(crate) fn set_background(&mut self, element_id: Option<&str>) -> bool {
        match element_id {
            Some(id) => {
                let Some(index) = self.index_of(id) else {
                    return false;
                };
                if index == 0 && self.elements[0].is_background {
                    return false;
                }

                let mut promoted = self.elements.remove(index);
                self.demote_background();
                promoted.is_background = true;
                promoted.is_default_background = false;
                let left_group = promoted.group_id.take();
                self.elements.insert(0, promoted);
                if let Some(group_id) = left_group {
                    self.remove_empty_groups(&[group_id]);
                }
                true
            }
            None => {
                let is_real_background = self
                    .background()
                    .is_some_and(|background| !background.is_default_background);
                if !is_real_background {
                    return false;
                }
                self.demote_background();
                let background = self.take_default_background();
                self.elements.insert(0, background);
                true
            }
        }
    }

    fn demote_background(&mut self) {
        let Some(first) = self.elements.first_mut() else {
            return;
        };
        if !first.is_background {
            return;
        }
        if first.is_default_background {
            let parked = self.elements.remove(0);
            self.remove_animation_targets(std::slice::from_ref(&parked.id));
            self.default_background_element = Some(parked);
        } else {
            first.is_background = false;
        }
    }
}

impl Story {
    pub(super) fn set_background_element(&mut self, element_id: Option<&str>) {
        let Some(page) = self.current_page_mut() else {
            return;
        };
        if !page.set_background(element_id) {
            return;
        }
        if let Some(id) = element_id {
            self.selection.remove(id);
        }
        self.prune_selection();
    }

    /// Merges `first` (a dropped or pasted element, possibly already on the
    /// page) into the existing element `second_id`.
    ///
    /// The surviving element keeps `second_id`, its z-position and its
    /// decoration; animations and selection entries pointing at `first` are
    /// re-pointed to it.
    pub(super) fn combine_elements(&mut self, first: Element, second_id: &str) {
        if first.id == second_id {
            return;
        }
        let Some(page) = self.current_page_mut() else {
            return;
        };
        let Some(second) = page.element(second_id).cloned() else {
            log::warn!("Ignoring COMBINE_ELEMENTS into unknown element {second_id}");
            return;
        };
        if page.is_background(&first.id) {
            log::warn!("Refusing to combine the background element {}", first.id);
            return;
        }

        let merged = second.absorb(&first);
        if second.is_default_background {
            page.default_background_element = Some(second);
        }
        page.elements.retain(|element| element.id != first.id);
        if let Some(index) = page.index_of(second_id) {
            page.elements[index] = merged;
        }
        page.retarget_animations(&first.id, second_id);

        self.selection.replace(&first.id, second_id);
        if !self.selection.contains(second_id) {
            self.selection = Some(second_id.to_string()).into_iter().collect();
        }
        self.prune_selection();
    }
}
