//! Whole-tree file statistics

use crate::discovery::{walk_project, EntryKind};
use crate::language::Language;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Default length of the largest-files ranking
pub const DEFAULT_LARGEST_FILES: usize = 10;

/// One entry of the largest-files ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileSize {
    pub path: String,
    pub size: u64,
}

/// Counts and rankings over every entry under a root
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileStatistics {
    pub total_files: usize,
    pub total_directories: usize,
    pub files_by_language: BTreeMap<Language, usize>,
    pub total_size_bytes: u64,
    pub largest_files: Vec<FileSize>,
    /// Set when the walk budget cut the walk short
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub truncated: bool,
}

/// Aggregate statistics over the whole tree with default limits
pub fn aggregate_statistics(root: &Path) -> FileStatistics {
    aggregate_statistics_with(root, DEFAULT_LARGEST_FILES, 0)
}

/// Aggregate statistics keeping the `top_n` largest files and visiting at most
/// `max_entries` entries (`0` = unlimited).
pub fn aggregate_statistics_with(root: &Path, top_n: usize, max_entries: usize) -> FileStatistics {
    let walk = walk_project(root, max_entries);

    let mut stats = FileStatistics {
        truncated: walk.truncated,
        ..Default::default()
    };
    let mut sizes = Vec::new();

    for entry in walk.entries {
        match entry.kind {
            EntryKind::File { size } => {
                stats.total_files += 1;
                stats.total_size_bytes += size;
                *stats
                    .files_by_language
                    .entry(Language::for_statistics(&entry.path))
                    .or_insert(0) += 1;
                sizes.push(FileSize {
                    path: entry.relative,
                    size,
                });
            }
            EntryKind::Directory => stats.total_directories += 1,
        }
    }

    // stable: equal sizes keep walk order
    sizes.sort_by(|a, b| b.size.cmp(&a.size));
    sizes.truncate(top_n);
    stats.largest_files = sizes;

    stats
}
