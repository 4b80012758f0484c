use crate::error::DumpError;
use crate::options::DumpOptions;
use crate::output;
use crate::tree::{WalkEntry, group_by_directory};
use crate::types::{DirectoryListing, DumpSummary, FileContent};
use ignore::WalkBuilder;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
struct Walker {
    root: PathBuf,
    inner: ignore::Walk,
}
impl Walker {
    fn new(root: &Path, options: &DumpOptions) -> Self {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(options.follow_links);
        if options.sort_entries {
            builder.sort_by_file_name(|a, b| a.cmp(b));
        }
        Self {
            root: root.to_path_buf(),
            inner: builder.build(),
        }
    }
    fn collect_entries(self) -> Result<Vec<WalkEntry>, DumpError> {
        let mut entries = Vec::new();
        for result in self.inner {
            match result {
                Ok(entry) => entries.extend(classify(entry)),
                Err(err) => recover(&self.root, err, &mut entries)?,
            }
        }
        Ok(entries)
    }
}
/// Decides whether a walker error can be absorbed into the entry list.
///
/// A directory that cannot be listed is dropped together with its subtree.
/// A followed link that cannot be resolved becomes a file entry so the reader
/// reports it inline. Link loops and errors without a path stay fatal.
fn recover(
    root: &Path,
    err: ignore::Error,
    entries: &mut Vec<WalkEntry>,
) -> Result<(), DumpError> {
    if is_loop(&err) {
        return Err(DumpError::Walk(err.to_string()));
    }
    let Some(path) = failed_path(&err) else {
        return Err(DumpError::Walk(err.to_string()));
    };
    let opened = entries
        .iter()
        .rposition(|e| matches!(e, WalkEntry::Directory { path: p, .. } if p == path));
    if let Some(index) = opened {
        #[cfg(feature = "logging")]
        tracing::warn!("Skipping unreadable directory: {}", err);
        entries.remove(index);
        return Ok(());
    }
    let is_link = fs::symlink_metadata(path).is_ok_and(|m| m.file_type().is_symlink());
    match path.strip_prefix(root) {
        Ok(relative) if is_link => {
            #[cfg(feature = "logging")]
            tracing::debug!("Unresolvable link kept as a file: {}", err);
            entries.push(WalkEntry::File {
                path: path.to_path_buf(),
                depth: relative.components().count(),
            });
            Ok(())
        }
        _ => Err(DumpError::Walk(err.to_string())),
    }
}
fn failed_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            failed_path(err)
        }
        _ => None,
    }
}
fn is_loop(err: &ignore::Error) -> bool {
    match err {
        ignore::Error::Loop { .. } => true,
        ignore::Error::WithPath { err, .. }
        | ignore::Error::WithDepth { err, .. }
        | ignore::Error::WithLineNumber { err, .. } => is_loop(err),
        _ => false,
    }
}
fn classify(entry: ignore::DirEntry) -> Option<WalkEntry> {
    let depth = entry.depth();
    if entry.file_type().is_some_and(|ft| ft.is_dir()) {
        return Some(WalkEntry::Directory {
            path: entry.into_path(),
            depth,
        });
    }
    // Unfollowed links to directories are neither listed nor descended into.
    if entry.path_is_symlink() && entry.path().is_dir() {
        #[cfg(feature = "logging")]
        tracing::debug!("Skipping symlinked directory: {}", entry.path().display());
        return None;
    }
    Some(WalkEntry::File {
        path: entry.into_path(),
        depth,
    })
}
/// Reads a whole file as strict UTF-8.
///
/// Never panics; any failure comes back as the `Err` branch and is rendered
/// inline by the report writer.
pub fn read_file_content(path: &Path) -> FileContent {
    let bytes = fs::read(path).map_err(|e| DumpError::io(path, e))?;
    String::from_utf8(bytes).map_err(|source| DumpError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
/// Walks `root` depth-first and returns one listing per directory, root first.
///
/// Directories that cannot be listed are left out along with their subtree.
///
/// # Errors
///
/// A link loop (only possible with `follow_links`) or a failure the walker
/// cannot attribute to a path aborts the walk.
pub fn walk_directory(
    root: &Path,
    options: &DumpOptions,
) -> Result<Vec<DirectoryListing>, DumpError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Walking {}", root.display());
    let entries = Walker::new(root, options).collect_entries()?;
    Ok(group_by_directory(entries))
}
fn is_same_file(path: &Path, target: &Path) -> bool {
    path.file_name() == target.file_name()
        && fs::canonicalize(path).is_ok_and(|p| p == target)
}
fn write_listing(
    out: &mut impl Write,
    listing: &DirectoryListing,
    exclude: Option<&Path>,
    summary: &mut DumpSummary,
) -> Result<(), DumpError> {
    output::write_directory_marker(out, &listing.path).map_err(DumpError::Write)?;
    summary.directories += 1;
    for path in &listing.files {
        if exclude.is_some_and(|target| is_same_file(path, target)) {
            #[cfg(feature = "logging")]
            tracing::debug!("Skipping the report itself: {}", path.display());
            continue;
        }
        let content = read_file_content(path);
        if let Err(_e) = &content {
            #[cfg(feature = "logging")]
            tracing::debug!("Unreadable file {}: {}", path.display(), _e);
            summary.unreadable_files += 1;
        }
        output::write_file_block(out, path, &content).map_err(DumpError::Write)?;
        summary.files += 1;
    }
    Ok(())
}
/// Writes the full report for `options.roots` into `out`.
///
/// `options.output` is ignored here; see [`dump`] for the file-backed run.
pub fn dump_to_writer<W: Write>(
    options: &DumpOptions,
    out: &mut W,
) -> Result<DumpSummary, DumpError> {
    write_report(options, out, None)
}
fn write_report<W: Write>(
    options: &DumpOptions,
    out: &mut W,
    exclude: Option<&Path>,
) -> Result<DumpSummary, DumpError> {
    let mut summary = DumpSummary::default();
    output::write_title(out).map_err(DumpError::Write)?;
    for root in &options.roots {
        output::write_scan_banner(out, root).map_err(DumpError::Write)?;
        if !root.exists() {
            output::write_not_found(out, root).map_err(DumpError::Write)?;
            summary.roots_missing += 1;
            continue;
        }
        if !root.is_dir() {
            #[cfg(feature = "logging")]
            tracing::warn!("{} is not a directory, nothing to walk", root.display());
            continue;
        }
        for listing in walk_directory(root, options)? {
            write_listing(out, &listing, exclude, &mut summary)?;
        }
        summary.roots_scanned += 1;
    }
    output::write_trailer(out).map_err(DumpError::Write)?;
    Ok(summary)
}
/// Runs a full dump into `options.output`, truncating any existing file.
///
/// The report file is never listed in itself, even when it lies under a root.
pub fn dump(options: &DumpOptions) -> Result<DumpSummary, DumpError> {
    let file = File::create(&options.output).map_err(|e| DumpError::io(&options.output, e))?;
    let report = fs::canonicalize(&options.output).ok();
    let mut out = BufWriter::new(file);
    let summary = write_report(options, &mut out, report.as_deref())?;
    out.flush().map_err(|e| DumpError::io(&options.output, e))?;
    #[cfg(feature = "logging")]
    tracing::info!(
        "Wrote {} files from {} directories to {} ({} unreadable, {} roots missing)",
        summary.files,
        summary.directories,
        options.output.display(),
        summary.unreadable_files,
        summary.roots_missing
    );
    Ok(summary)
}
