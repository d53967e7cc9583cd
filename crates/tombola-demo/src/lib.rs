//! Tombola demo — configuration, errors and report generation for the
//! `tombola-demo` binary.

pub mod config;
pub mod error;
pub mod report;
