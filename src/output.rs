//! Report formatting.
//!
//! Every fixed line of the plain-text report lives here. The functions write
//! straight into any [`Write`] sink and leave error mapping to the caller.

use crate::types::FileContent;
use std::io::{self, Write};
use std::path::Path;

/// Line of 80 `=` closing each scan banner and each file block.
pub const SEPARATOR: &str =
    "================================================================================";

pub const TITLE: &str = "Files Content\n=============\n\n";

pub const TRAILER: &str = "End of content listing\n";

/// Prefix rendered in place of content for a file that could not be read.
pub const READ_ERROR_PREFIX: &str = "Error reading file: ";

pub fn write_title(out: &mut impl Write) -> io::Result<()> {
    out.write_all(TITLE.as_bytes())
}

pub fn write_scan_banner(out: &mut impl Write, root: &Path) -> io::Result<()> {
    write!(out, "SCANNING: {}\n{}\n\n", root.display(), SEPARATOR)
}

pub fn write_not_found(out: &mut impl Write, root: &Path) -> io::Result<()> {
    write!(out, "Directory not found: {}\n\n", root.display())
}

pub fn write_directory_marker(out: &mut impl Write, dir: &Path) -> io::Result<()> {
    writeln!(out, "Directory: {}", dir.display())
}

/// Writes one content block: header, content (or error string), separator.
pub fn write_file_block(
    out: &mut impl Write,
    path: &Path,
    content: &FileContent,
) -> io::Result<()> {
    write!(out, "\n--- FILE: {} ---\n", path.display())?;
    match content {
        Ok(text) => out.write_all(text.as_bytes())?,
        Err(e) => write!(out, "{}{}", READ_ERROR_PREFIX, e)?,
    }
    write!(out, "\n\n{}\n\n", SEPARATOR)
}

pub fn write_trailer(out: &mut impl Write) -> io::Result<()> {
    out.write_all(TRAILER.as_bytes())
}
