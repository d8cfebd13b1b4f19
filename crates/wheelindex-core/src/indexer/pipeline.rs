//! Index build orchestration: scan, parse, accumulate, serialize.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::config::IndexerConfig;
use crate::errors::IndexResult;
use crate::indexer::filesystem::iter_dist_files;
use crate::indexer::wheel::{parse_wheel_filename, platform_to_sys, python_tag_to_version};
use crate::models::{FlatIndex, IndexStats, PackageEntry};

/// Build the flat index for every wheel under `dist_dir`.
///
/// Only files named `*.whl` are candidates; candidates whose filename does
/// not follow the wheel pattern are skipped without an error. Entries
/// accumulate in traversal order, and repeated filenames append rather than
/// replace, so duplicates produce duplicate entries.
pub fn build_index(dist_dir: &Path) -> (FlatIndex, IndexStats) {
    let started = Instant::now();
    let mut index = FlatIndex::new();
    let mut stats = IndexStats::default();

    for path in iter_dist_files(dist_dir) {
        stats.files_seen += 1;

        let file_name = match path.file_name() {
            Some(n) => n.to_string_lossy().into_owned(),
            None => continue,
        };
        if !file_name.ends_with(".whl") {
            continue;
        }

        let parsed = match parse_wheel_filename(&file_name) {
            Some(p) => p,
            None => {
                debug!(file = %file_name, "skipping wheel with unrecognized filename");
                stats.wheels_skipped += 1;
                continue;
            }
        };

        // Filenames carry underscores where the package name has hyphens.
        let name = parsed.name.replace('_', "-");
        let entry = PackageEntry {
            url: file_name,
            python_version: python_tag_to_version(&parsed.python_tag),
            sys_platform: platform_to_sys(&parsed.platform_tag),
        };

        index
            .entry(name)
            .or_default()
            .entry(parsed.version)
            .or_default()
            .push(entry);
        stats.wheels_indexed += 1;
    }

    stats.elapsed_ms = started.elapsed().as_millis() as i64;
    (index, stats)
}

/// Serialize `index` as pretty-printed JSON (2-space indent) to `path`.
pub fn write_index(index: &FlatIndex, path: &Path) -> IndexResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, index)?;
    writer.flush()?;
    Ok(())
}

/// One-shot run: build the index from `config.dist_dir` and write it to
/// `config.output_path`.
pub fn run(config: &IndexerConfig) -> IndexResult<IndexStats> {
    let (index, stats) = build_index(&config.dist_dir);
    if index.is_empty() {
        warn!(dist_dir = %config.dist_dir.display(), "no wheels found");
    }
    write_index(&index, &config.output_path)?;
    info!(
        files_seen = stats.files_seen,
        wheels_indexed = stats.wheels_indexed,
        wheels_skipped = stats.wheels_skipped,
        elapsed_ms = stats.elapsed_ms,
        output = %config.output_path.display(),
        "flat index written"
    );
    Ok(stats)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
