//! Shared typed models used by the indexer pipeline and the CLI.

use indexmap::IndexMap;
use serde::Serialize;

// ---------------------------------------------------------------------------
// WheelFilename
// ---------------------------------------------------------------------------

/// Tag components of a wheel filename, as captured by the filename pattern.
///
/// Fields hold the raw matched text; normalization (underscore-to-hyphen
/// names, dotted interpreter versions, `sys.platform` labels) happens when
/// a [`PackageEntry`] is built from this record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WheelFilename {
    pub name: String,
    pub version: String,
    pub python_tag: String,
    pub abi_tag: String,
    pub platform_tag: String,
}

// ---------------------------------------------------------------------------
// PackageEntry
// ---------------------------------------------------------------------------

/// One index record describing a single wheel file.
///
/// `url` is the original filename verbatim. Immutable once constructed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PackageEntry {
    pub url: String,
    pub python_version: String,
    pub sys_platform: String,
}

// ---------------------------------------------------------------------------
// FlatIndex
// ---------------------------------------------------------------------------

/// Package name → version → entries, all in insertion order.
///
/// Insertion order is traversal order, and `IndexMap` keeps it through
/// serialization, so JSON key order reflects the order wheels were
/// encountered. Repeated (name, version) pairs append; nothing is merged
/// or overwritten.
pub type FlatIndex = IndexMap<String, IndexMap<String, Vec<PackageEntry>>>;

// ---------------------------------------------------------------------------
// IndexStats
// ---------------------------------------------------------------------------

/// Statistics for one indexing run.
#[derive(Clone, Debug, Default)]
pub struct IndexStats {
    /// Every file encountered during the walk, wheel or not.
    pub files_seen: i64,
    /// Wheels whose filename parsed and produced an entry.
    pub wheels_indexed: i64,
    /// `.whl` files whose name did not follow the wheel pattern.
    pub wheels_skipped: i64,
    pub elapsed_ms: i64,
}
