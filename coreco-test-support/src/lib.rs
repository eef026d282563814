//! Shared test utilities used across the coreco crates.
//!
//! [`tracing::RecordingLayer`] captures spans and events so tests can assert
//! instrumentation, and [`proptest_profile::ProptestRunProfile`] reads the
//! environment overrides every property suite honours.

pub mod proptest_profile;
pub mod tracing;
