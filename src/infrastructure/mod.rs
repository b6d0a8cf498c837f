//! Infrastructure layer: concrete implementations of domain repositories.
//!
//! - [`memory`] - In-process storage, discarded when the process exits

pub mod memory;
