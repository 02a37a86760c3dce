//! Full-depth project walks
//!
//! Uses the `ignore` crate's walker with every filter disabled: hidden files
//! and ignored paths are still real files for statistics purposes. Symlinks
//! are followed; the walker reports link loops as errors, which are skipped
//! like any other unreadable entry.

use crate::language::Language;
use ignore::{DirEntry, WalkBuilder};
use std::path::{Path, PathBuf};

/// What a walked entry turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File { size: u64 },
    Directory,
}

/// One entry below the walk root (the root itself is never reported)
#[derive(Debug, Clone)]
pub struct WalkEntry {
    pub path: PathBuf,
    /// Path relative to the walk root, `/`-separated
    pub relative: String,
    pub kind: EntryKind,
}

/// Result of a walk: entries in deterministic (name-sorted, depth-first) order
#[derive(Debug, Default)]
pub struct ProjectWalk {
    pub entries: Vec<WalkEntry>,
    /// `true` when the entry budget stopped the walk early
    pub truncated: bool,
}

/// Walk every file and directory under `root`.
///
/// `max_entries` bounds the number of reported entries; `0` means unlimited.
pub fn walk_project(root: &Path, max_entries: usize) -> ProjectWalk {
    let mut walk = ProjectWalk::default();

    for entry in walker(root).build() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::debug!("skipping unreadable entry: {}", e);
                continue;
            }
        };

        if entry.depth() == 0 {
            continue;
        }

        let Some(kind) = entry_kind(&entry) else {
            continue;
        };

        if max_entries > 0 && walk.entries.len() >= max_entries {
            log::debug!("walk budget of {} entries reached", max_entries);
            walk.truncated = true;
            break;
        }

        let path = entry.into_path();
        walk.entries.push(WalkEntry {
            relative: relative_path(root, &path),
            path,
            kind,
        });
    }

    walk
}

/// Discover files under `root` whose language carries import syntax.
///
/// Returns absolute paths in walk order.
pub fn discover_source_files(root: &Path) -> Vec<PathBuf> {
    walk_project(root, 0)
        .entries
        .into_iter()
        .filter(|e| matches!(e.kind, EntryKind::File { .. }))
        .filter(|e| Language::for_statistics(&e.path).has_import_syntax())
        .map(|e| e.path)
        .collect()
}

/// Render `path` relative to `root` with forward slashes
pub fn relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn walker(root: &Path) -> WalkBuilder {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false) // hidden and gitignored files still count
        .follow_links(true)
        .sort_by_file_name(|a, b| a.cmp(b));
    builder
}

fn entry_kind(entry: &DirEntry) -> Option<EntryKind> {
    // std metadata follows symlinks, so a link to a file counts as that file
    let meta = match entry.path().metadata() {
        Ok(m) => m,
        Err(e) => {
            log::debug!("no metadata for {}: {}", entry.path().display(), e);
            return None;
        }
    };

    if meta.is_dir() {
        Some(EntryKind::Directory)
    } else if meta.is_file() {
        Some(EntryKind::File { size: meta.len() })
    } else {
        None
    }
}
