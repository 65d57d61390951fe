use super::HistoryEntry;
use crate::page::PageId;

/// The page to keep in focus when moving from `present` to `target`.
///
/// Only one diff pattern qualifies: the two entries point at different
/// current pages, and exactly one page differs between them while keeping
/// its element count. Anything else (added or removed pages, several
/// edited pages, elements added or removed) keeps the replayed page.
pub(super) fn changed_page(present: &HistoryEntry, target: &HistoryEntry) -> Option<PageId> {
    if present.current == target.current || present.pages.len() != target.pages.len() {
        return None;
    }

    let mut changed = present
        .pages
        .iter()
        .zip(&target.pages)
        .filter(|(before, after)| before != after);
    let (before, after) = changed.next()?;
    if changed.next().is_some() {
        return None;
    }
    if before.id != after.id || before.elements.len() != after.elements.len() {
        return None;
    }
    Some(after.id.clone())
}
