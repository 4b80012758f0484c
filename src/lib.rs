//! # Dirdump
//!
//! `dirdump` walks one or more directory trees and concatenates the path and
//! content of every file it finds into a single plain-text report. The result
//! is a one-document snapshot of a source tree, ready to paste into a review.
//!
//! Files that cannot be read (missing, permission denied, not UTF-8, ...) never
//! abort the run: their block carries `Error reading file: <message>` instead
//! of content. A configured root that does not exist is reported with a
//! `Directory not found` line and skipped.
//!
//! # Features
//!
//! - `logging` (default): emits debug and summary events via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use dirdump::{DumpBuilder, dump};
//!
//! let options = DumpBuilder::new()
//!     .root("src")
//!     .root("tests")
//!     .output("files_content.txt")
//!     .build();
//!
//! let summary = dump(&options).expect("Failed to write report");
//! println!("{} files in {} directories", summary.files, summary.directories);
//! ```

mod engine;
mod error;
mod options;
pub mod output;
mod tree;
mod types;

pub use engine::{dump, dump_to_writer, read_file_content, walk_directory};
pub use error::DumpError;
pub use options::{DEFAULT_OUTPUT, DumpBuilder, DumpOptions};
pub use types::{DirectoryListing, DumpSummary, FileContent};
