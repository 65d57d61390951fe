use serde::{Deserialize, Serialize};

use crate::error::EngineResult;

pub const DEFAULT_HISTORY_SIZE: usize = 50;

/// Engine settings, usually supplied by the host as JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Maximum number of undo entries kept. Values below 1 are treated as 1.
    pub history_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_size: DEFAULT_HISTORY_SIZE,
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.normalized())
    }

    pub fn with_history_size(mut self, history_size: usize) -> Self {
        self.history_size = history_size;
        self.normalized()
    }

    fn normalized(mut self) -> Self {
        self.history_size = self.history_size.max(1);
        self
    }
}
