//! The `vcardkit` command-line front end.
//!
//! Parses vCard files with the options from configuration and the command
//! line, then renders each document (or its validation failure) as text or JSON.

pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod run;
