#![warn(clippy::all, rust_2018_idioms)]

pub mod animation;
pub mod config;
pub mod document;
pub mod element;
pub mod engine;
pub mod error;
pub mod event;
pub mod history;
pub mod id_generator;
pub mod migration;
pub mod page;
pub mod paint;
pub mod reducer;
pub mod selection;
pub mod story;
mod util;

pub use animation::{Animation, AnimationState};
pub use config::EngineConfig;
pub use document::{StoryDocument, load_document};
pub use element::{Element, ElementId, ElementKind};
pub use engine::Engine;
pub use error::{EngineError, EngineResult, MigrationError, MigrationResult};
pub use event::{EngineEvent, EventBus, EventHandler, EventLog};
pub use history::{History, HistoryAction, HistoryEntry, Snapshot};
pub use migration::{CURRENT_VERSION, migrate, migrate_document};
pub use page::{Group, GroupId, Page, PageId};
pub use paint::{ColorStop, Paint, PaintKind, Rgba};
pub use reducer::{Action, RestorePayload, reduce};
pub use selection::Selection;
pub use story::{Capabilities, Story, StoryMeta};
