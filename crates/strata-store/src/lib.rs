//! # strata-store
//!
//! The data-access contract the grid and measurement code is fed through,
//! with two implementations: [`MemoryRepository`] for hosts that already hold
//! their data and tests, and [`JsonlRepository`], append-only JSONL files in a
//! local data directory.
//!
//! Storage failures come back as [`StorageError`] and are never retried.

mod error;
mod jsonl;
mod memory;
mod records;
mod repository;

pub use error::StorageError;
pub use jsonl::JsonlRepository;
pub use memory::MemoryRepository;
pub use repository::SiteRepository;
