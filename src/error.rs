//! Storage error taxonomy.
//!
//! DESIGN
//! ======
//! Every variant is non-fatal to the toggle: reads degrade to "nothing
//! stored" and writes degrade to "attribute changed, not persisted".

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("preference storage unavailable")]
    Unavailable,
    #[error("failed to read {key}: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
}
