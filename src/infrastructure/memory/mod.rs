//! Volatile in-process storage.

mod memory_link_repository;

pub use memory_link_repository::MemoryLinkRepository;
