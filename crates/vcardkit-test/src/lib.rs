//! vcardkit - integration test support.
//!
//! Re-exports the workspace crates so integration tests can use
//! `vcardkit_test::component::` paths.

pub mod component {
    pub use vcardkit_core::{constants, error, types};
    pub use vcardkit_rfc::rfc::{validation, vcard};

    pub mod config {
        pub use vcardkit_app::config::parse_options;
        pub use vcardkit_core::config::*;
    }

    pub mod app {
        pub use vcardkit_app::cli::Cli;
        pub use vcardkit_app::report::{FileReport, render_json, render_text};
        pub use vcardkit_app::run::{RunOutcome, parse_files, run};
    }
}
