//! Storage abstractions for the service layer.
//!
//! `Repository<T>` is the seam the classroom service talks to; one instance
//! per entity category, each with its own identity space.

pub mod repository;
pub mod memory_store;

pub use memory_store::InMemoryStore;
pub use repository::{Repository, StoreError};
