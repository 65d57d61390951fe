/// Notifications for the collaborators around the engine (renderer,
/// autosave, checklist, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// An action changed the live story
    StoryChanged { action: &'static str },
    /// A history entry was committed
    EntryCommitted { version_number: u64 },
    /// Undo or redo moved to this offset
    Replayed { offset: usize },
    HistoryCleared,
    DocumentLoaded { from_version: u32, pages: usize },
}
