//! The story reducer: a pure `(state, action) -> state` transition function.
//!
//! Each action is applied to a copy of the state, so a failed action leaves
//! the caller's state untouched. Legal but degenerate actions (unknown ids,
//! deleting the last page, empty lists) resolve to a valid state, usually
//! the unchanged one.

mod actions;
mod background;
mod elements;
mod groups;
mod pages;
mod selection;
mod story;

pub use actions::{Action, RestorePayload};

use crate::error::EngineResult;
use crate::story::Story;

/// Applies `action` to `state` and returns the next state
pub fn reduce(state: &Story, action: Action) -> EngineResult<Story> {
    let mut next = state.clone();
    next.apply(action)?;
    Ok(next)
}

impl Story {
    /// In-place variant of [`reduce`]. On error the story may be partially
    /// updated, so callers that need atomicity go through [`reduce`].
    pub(crate) fn apply(&mut self, action: Action) -> EngineResult<()> {
        log::debug!("Applying {}", action.kind());
        match action {
            Action::AddPage { page, position } => self.add_page(page, position),
            Action::DeletePage { page_id } => self.delete_page(page_id),
            Action::UpdatePage {
                page_id,
                properties,
            } => self.update_page(page_id, &properties)?,
            Action::ArrangePage { page_id, position } => self.arrange_page(&page_id, position),
            Action::SetCurrentPage { page_id } => self.set_current_page(&page_id),
            Action::AddElements {
                elements,
                page_id,
                update_selection,
            } => self.add_elements(elements, page_id, update_selection),
            Action::DeleteElements { element_ids } => self.delete_elements(element_ids),
            Action::UpdateElements {
                element_ids,
                properties,
            } => self.update_elements(element_ids, &properties)?,
            Action::UpdateElementsByResourceId { id, properties } => {
                self.update_elements_by_resource_id(&id, &properties)
            }
            Action::CombineElements {
                first_element,
                second_id,
            } => self.combine_elements(first_element, &second_id),
            Action::SetBackgroundElement { element_id } => {
                self.set_background_element(element_id.as_deref())
            }
            Action::ArrangeElement {
                element_id,
                position,
                group_id,
            } => self.arrange_element(element_id, position, group_id),
            Action::SetSelectedElements { element_ids } => self.set_selected_elements(element_ids),
            Action::SelectElement { element_id } => self.select_element(element_id),
            Action::UnselectElement { element_id } => self.unselect_element(&element_id),
            Action::ToggleElementInSelection { element_id } => {
                self.toggle_element_in_selection(element_id)
            }
            Action::AddGroup {
                group_id,
                name,
                is_locked,
            } => self.add_group(group_id, name, is_locked),
            Action::UpdateGroup {
                group_id,
                properties,
            } => self.update_group(&group_id, &properties)?,
            Action::DeleteGroup { group_id } => self.delete_group(&group_id),
            Action::UpdateStory { properties } => self.update_story(&properties)?,
            Action::UpdateAnimationState { animation_state } => {
                self.animation_state = animation_state
            }
            Action::AddAnimations { animations } => self.add_animations(animations),
            Action::Restore(payload) => self.restore(payload)?,
        }
        Ok(())
    }
}
