//! Directory scanning and wheel filename indexing.

pub mod filesystem;
pub mod pipeline;
pub mod wheel;
