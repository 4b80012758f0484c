//! Internal module for turning a depth-first walk into per-directory listings.

use crate::types::DirectoryListing;
use std::path::PathBuf;

/// A single entry produced by the walker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum WalkEntry {
    Directory { path: PathBuf, depth: usize },
    File { path: PathBuf, depth: usize },
}

/// Groups a pre-order walk into one listing per directory.
///
/// A pre-order walk yields each directory before anything inside it, so the
/// listings come out in the same order as a top-down walk that lists a
/// directory's files before descending: root first, then every subdirectory
/// in the order the walk reached it. Files stay attached to their parent even
/// when a sibling subtree was walked in between.
///
/// The first entry is expected to be the root directory at depth 0. Entries
/// whose parent never appeared are dropped.
pub(crate) fn group_by_directory(
    entries: impl IntoIterator<Item = WalkEntry>,
) -> Vec<DirectoryListing> {
    let mut listings: Vec<DirectoryListing> = Vec::new();
    // Index into `listings` of the directory open at each depth.
    let mut open: Vec<usize> = Vec::new();

    for entry in entries {
        match entry {
            WalkEntry::Directory { path, depth } => {
                if depth > open.len() {
                    continue;
                }
                open.truncate(depth);
                open.push(listings.len());
                listings.push(DirectoryListing {
                    path,
                    files: Vec::new(),
                });
            }
            WalkEntry::File { path, depth } => {
                let Some(parent) = depth.checked_sub(1).and_then(|d| open.get(d)) else {
                    continue;
                };
                listings[*parent].files.push(path);
            }
        }
    }

    listings
}
