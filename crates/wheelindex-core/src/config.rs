//! Run configuration for the indexer.

use std::path::PathBuf;

/// Where to scan for wheels and where to write the index.
///
/// The defaults mirror the release-script conventions this tool replaces:
/// wheels under `dist`, index written to `flat-index.json` in the current
/// directory. Tests point both paths at temporary directories instead.
#[derive(Clone, Debug)]
pub struct IndexerConfig {
    pub dist_dir: PathBuf,
    pub output_path: PathBuf,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            dist_dir: PathBuf::from("dist"),
            output_path: PathBuf::from("flat-index.json"),
        }
    }
}
