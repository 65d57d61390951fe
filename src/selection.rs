use serde::{Deserialize, Serialize};

use crate::element::ElementId;

/// Ordered set of selected element ids.
///
/// Order matters: the first id is the primary selection and wins tie-breaks
/// in multi-element operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(Vec<ElementId>);

impl Selection {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn ids(&self) -> &[ElementId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|selected| selected == id)
    }

    /// The first-selected element
    pub fn primary(&self) -> Option<&ElementId> {
        self.0.first()
    }

    /// Adds `id` at the end. Returns false if it was already selected.
    pub fn insert(&mut self, id: ElementId) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.0.push(id);
        true
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|selected| selected != id);
        before != self.0.len()
    }

    pub fn retain(&mut self, keep: impl FnMut(&ElementId) -> bool) {
        self.0.retain(keep);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Re-points `old` to `new`, keeping its position. If `new` is already
    /// selected the `old` entry is simply dropped.
    pub fn replace(&mut self, old: &str, new: &str) {
        if self.contains(new) {
            self.remove(old);
            return;
        }
        for selected in &mut self.0 {
            if selected == old {
                *selected = new.to_string();
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ElementId> {
        self.0.iter()
    }
}

impl FromIterator<ElementId> for Selection {
    fn from_iter<I: IntoIterator<Item = ElementId>>(iter: I) -> Self {
        let mut selection = Selection::new();
        for id in iter {
            selection.insert(id);
        }
        selection
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a ElementId;
    type IntoIter = std::slice::Iter<'a, ElementId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
