//! Scenario tests for vCard parsing and validation.
