//! In-process high score store

use super::{HighScoreStore, StoreError};

/// Keeps the high score in memory; lost when the process exits
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<u32>,
    writes: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a value, as if written by an earlier session
    pub fn with_value(value: u32) -> Self {
        Self {
            value: Some(value),
            writes: 0,
        }
    }

    /// Number of writes received
    pub fn writes(&self) -> u32 {
        self.writes
    }
}

impl HighScoreStore for MemoryStore {
    fn read(&self) -> Result<Option<u32>, StoreError> {
        Ok(self.value)
    }

    fn write(&mut self, high_score: u32) -> Result<(), StoreError> {
        self.value = Some(high_score);
        self.writes += 1;
        Ok(())
    }
}
