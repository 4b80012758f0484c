use crate::error::DumpError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Report file name used when no output path is configured.
pub const DEFAULT_OUTPUT: &str = "files_content.txt";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DumpOptions {
    /// Root directories, scanned in order and echoed into the report as given.
    pub roots: Vec<PathBuf>,
    /// Report path, relative to the working directory unless absolute.
    pub output: PathBuf,
    /// Descend into symlinked directories. Link loops then abort the walk.
    pub follow_links: bool,
    /// Sort entries by file name instead of keeping filesystem order.
    pub sort_entries: bool,
}
impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            roots: vec![PathBuf::from(".")],
            output: PathBuf::from(DEFAULT_OUTPUT),
            follow_links: false,
            sort_entries: false,
        }
    }
}
impl DumpOptions {
    /// Loads options from a JSON document. Missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DumpError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| DumpError::io(path, e))?;
        serde_json::from_str(&raw).map_err(|source| DumpError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
#[derive(Debug)]
pub struct DumpBuilder {
    options: DumpOptions,
}
impl Default for DumpBuilder {
    fn default() -> Self {
        Self::new()
    }
}
impl DumpBuilder {
    /// Starts with no roots; every other field takes its default.
    pub fn new() -> Self {
        Self {
            options: DumpOptions {
                roots: Vec::new(),
                ..Default::default()
            },
        }
    }
    pub fn from_options(options: DumpOptions) -> Self {
        Self { options }
    }
    /// Replaces the configured roots.
    pub fn roots<I, P>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.options.roots = roots.into_iter().map(Into::into).collect();
        self
    }
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.options.roots.push(root.into());
        self
    }
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output = path.into();
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn sort_entries(mut self, yes: bool) -> Self {
        self.options.sort_entries = yes;
        self
    }
    pub fn build(self) -> DumpOptions {
        self.options
    }
}
