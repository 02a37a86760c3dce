//! Depth-limited directory tree snapshots

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

/// Why a subtree was not expanded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TruncationReason {
    MaxDepthReached,
    SymlinkCycle,
}

/// Why a directory has no listed children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    PermissionDenied,
    Unreadable,
}

/// One node of the structural snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    File { size: u64 },
    Directory { children: BTreeMap<String, TreeNode> },
    Truncated { reason: TruncationReason },
    /// A directory whose contents could not be enumerated.
    /// Serialized as a `directory` carrying `error` instead of `children`.
    Denied { error: DenialReason },
}

impl Serialize for TreeNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        match self {
            TreeNode::File { size } => {
                map.serialize_entry("type", "file")?;
                map.serialize_entry("size", size)?;
            }
            TreeNode::Directory { children } => {
                map.serialize_entry("type", "directory")?;
                map.serialize_entry("children", children)?;
            }
            TreeNode::Truncated { reason } => {
                map.serialize_entry("type", "truncated")?;
                map.serialize_entry("reason", reason)?;
            }
            TreeNode::Denied { error } => {
                map.serialize_entry("type", "directory")?;
                map.serialize_entry("error", error)?;
            }
        }
        map.end()
    }
}

impl TreeNode {
    /// Number of nodes below this one (the node itself excluded)
    pub fn descendant_count(&self) -> usize {
        match self {
            TreeNode::Directory { children } => children
                .values()
                .map(|child| 1 + child.descendant_count())
                .sum(),
            _ => 0,
        }
    }

    /// Look up a descendant by `/`-separated relative path
    pub fn get(&self, rel: &str) -> Option<&TreeNode> {
        rel.split('/')
            .filter(|s| !s.is_empty())
            .try_fold(self, |node, name| match node {
                TreeNode::Directory { children } => children.get(name),
                _ => None,
            })
    }
}

/// Builds [`TreeNode`] snapshots down to a fixed depth
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    max_depth: usize,
    allowed_hidden: Vec<String>,
}

impl TreeBuilder {
    pub fn new(max_depth: usize, allowed_hidden: Vec<String>) -> Self {
        Self {
            max_depth,
            allowed_hidden,
        }
    }

    /// Snapshot `path`. Never fails: unreadable parts become placeholder nodes.
    pub fn build(&self, path: &Path) -> TreeNode {
        let mut ancestors = HashSet::new();
        self.build_node(path, 0, &mut ancestors)
    }

    fn build_node(
        &self,
        path: &Path,
        depth: usize,
        ancestors: &mut HashSet<PathBuf>,
    ) -> TreeNode {
        if depth >= self.max_depth {
            return TreeNode::Truncated {
                reason: TruncationReason::MaxDepthReached,
            };
        }

        if !path.is_dir() {
            // a vanished file reports size 0
            let size = path.metadata().map(|m| m.len()).unwrap_or(0);
            return TreeNode::File { size };
        }

        let real = path.canonicalize().ok();
        if let Some(real) = &real {
            if !ancestors.insert(real.clone()) {
                log::debug!("symlink cycle at {}", path.display());
                return TreeNode::Truncated {
                    reason: TruncationReason::SymlinkCycle,
                };
            }
        }

        let node = match self.read_children(path, depth, ancestors) {
            Ok(children) => TreeNode::Directory { children },
            Err(e) => {
                log::warn!("cannot list {}: {}", path.display(), e);
                let error = match e.kind() {
                    io::ErrorKind::PermissionDenied => DenialReason::PermissionDenied,
                    _ => DenialReason::Unreadable,
                };
                TreeNode::Denied { error }
            }
        };

        if let Some(real) = &real {
            ancestors.remove(real);
        }
        node
    }

    fn read_children(
        &self,
        path: &Path,
        depth: usize,
        ancestors: &mut HashSet<PathBuf>,
    ) -> io::Result<BTreeMap<String, TreeNode>> {
        let mut children = BTreeMap::new();

        for entry in std::fs::read_dir(path)? {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    log::debug!("skipping entry in {}: {}", path.display(), e);
                    continue;
                }
            };

            let name = entry.file_name().to_string_lossy().into_owned();
            if self.is_skipped(&name) {
                continue;
            }

            let child = self.build_node(&entry.path(), depth + 1, ancestors);
            children.insert(name, child);
        }

        Ok(children)
    }

    fn is_skipped(&self, name: &str) -> bool {
        name.starts_with('.') && !self.allowed_hidden.iter().any(|allowed| allowed == name)
    }
}

/// Snapshot `path` down to `max_depth` with the default hidden-entry allow-list
pub fn build_tree(path: &Path, max_depth: usize) -> TreeNode {
    let allowed = crate::config::StructureConfig::default().allowed_hidden;
    TreeBuilder::new(max_depth, allowed).build(path)
}
