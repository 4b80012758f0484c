use crate::error::DumpError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Content of one file, or the reason it could not be read.
///
/// Both branches end up in the report; a failure is rendered as
/// `Error reading file: <message>` in place of the content.
pub type FileContent = Result<String, DumpError>;

/// One directory visited by the walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryListing {
    /// Path of the directory, joined onto the root as it was given.
    pub path: PathBuf,
    /// Non-directory entries directly inside `path`, in traversal order.
    pub files: Vec<PathBuf>,
}

/// Counters collected over a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DumpSummary {
    /// Roots that existed and were walked.
    pub roots_scanned: usize,
    /// Roots reported as `Directory not found`.
    pub roots_missing: usize,
    pub directories: usize,
    pub files: usize,
    /// Files whose block carries an error string instead of content.
    pub unreadable_files: usize,
}
