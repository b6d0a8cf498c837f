//! Utility functions used across the application.
//!
//! - [`code_generator`] - Short code generation
//! - [`url_validator`] - Long URL syntax checks
//! - [`extract_host`] - Public base address from HTTP headers

pub mod code_generator;
pub mod extract_host;
pub mod url_validator;
