//! Shared building blocks for the vcardkit workspace.
//!
//! Holds what the parser and the command-line front end both need without
//! depending on each other: configuration, the core error type, and the
//! vCard file-level constants.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
