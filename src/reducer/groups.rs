use serde_json::{Map, Value};

use crate::error::EngineResult;
use crate::page::{Group, GroupId};
use crate::story::Story;
use crate::util::json;

impl Story {
    pub(super) fn add_group(&mut self, group_id: GroupId, name: String, is_locked: bool) {
        let Some(page) = self.current_page_mut() else {
            return;
        };
        if page.groups.contains_key(&group_id) {
            log::warn!("Ignoring ADD_GROUP for existing group {group_id}");
            return;
        }
        let mut group = Group::new(name);
        group.is_locked = is_locked;
        page.groups.insert(group_id, group);
    }

    pub(super) fn update_group(
        &mut self,
        group_id: &str,
        properties: &Map<String, Value>,
    ) -> EngineResult<()> {
        let Some(page) = self.current_page_mut() else {
            return Ok(());
        };
        let Some(group) = page.groups.get_mut(group_id) else {
            return Ok(());
        };
        *group = json::patched(group, properties, &[], &format!("group {group_id}"))?;
        Ok(())
    }

    /// Removes a group; its members stay on the page, ungrouped
    pub(super) fn delete_group(&mut self, group_id: &str) {
        let Some(page) = self.current_page_mut() else {
            return;
        };
        if page.groups.remove(group_id).is_none() {
            return;
        }
        for element in &mut page.elements {
            if element.group_id.as_deref() == Some(group_id) {
                element.group_id = None;
            }
        }
    }
}
