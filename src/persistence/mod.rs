//! High score persistence
//!
//! The simulation reads the stored high score once at startup and writes it
//! through whenever it improves. Stores are best-effort: a failing store is
//! logged and otherwise ignored, the in-memory value stays authoritative.
//!
//! Backends:
//! - [`MemoryStore`]: in-process, used natively and in tests
//! - [`LocalStorageStore`]: browser LocalStorage (wasm only)

#[cfg(target_arch = "wasm32")]
pub mod local_storage;
pub mod memory;

#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Errors a high score store can report
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("high score store unavailable: {0}")]
    Unavailable(String),
    #[error("stored high score is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("high score write rejected: {0}")]
    WriteRejected(String),
}

/// Key-value slot holding the persisted high score
pub trait HighScoreStore {
    /// Stored value, `None` if nothing was ever written
    fn read(&self) -> Result<Option<u32>, StoreError>;
    /// Replace the stored value
    fn write(&mut self, high_score: u32) -> Result<(), StoreError>;
}

/// Read the stored high score, falling back to 0 when absent or unreadable
pub fn load_high_score<S: HighScoreStore + ?Sized>(store: &S) -> u32 {
    match store.read() {
        Ok(Some(value)) => {
            log::info!("Loaded high score {}", value);
            value
        }
        Ok(None) => {
            log::info!("No high score found, starting fresh");
            0
        }
        Err(e) => {
            log::warn!("Could not read high score, starting from 0: {}", e);
            0
        }
    }
}

/// Write the high score through, swallowing (but logging) failures
pub fn save_high_score<S: HighScoreStore + ?Sized>(store: &mut S, high_score: u32) -> bool {
    match store.write(high_score) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("High score {} not saved: {}", high_score, e);
            false
        }
    }
}
