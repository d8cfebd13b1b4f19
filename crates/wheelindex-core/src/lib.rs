//! Wheelindex core library — flat-index generation for built wheel files.
//!
//! This crate scans a distribution directory for wheel files, parses each
//! filename into its package/version/interpreter/platform tags, and
//! accumulates the results into a nested, insertion-ordered index that is
//! written out as `flat-index.json`.

pub mod config;
pub mod errors;
pub mod indexer;
pub mod models;
