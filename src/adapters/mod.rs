// Adapters layer: concrete implementations for external systems (files on disk).

pub mod content;
pub mod storage;

pub use content::{FileContentSource, TalksSource};
pub use storage::LocalStorage;
