//! Application layer: orchestrates domain operations for the API handlers.

pub mod services;
