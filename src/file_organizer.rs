/// File organization system for moving files into category directories.
///
/// This module takes a snapshot of a directory, classifies each regular file by
/// extension, and moves it into a category subdirectory of the same directory.
/// Name collisions at the destination are resolved with a numeric suffix.
use crate::file_category::{Category, category_for_extension};
use crate::logger::Logger;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// A regular file observed in the directory snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// The file name, lossily converted for display.
    pub name: String,
    /// The file name without its suffix.
    pub stem: OsString,
    /// The lowercase extension including the dot, or empty.
    pub extension: String,
    /// The suffix exactly as written in the file name, or empty.
    pub suffix: OsString,
    /// The full path to the file.
    pub path: PathBuf,
}

impl FileEntry {
    /// Builds an entry from a file path.
    ///
    /// Returns `None` when the path has no file name component.
    pub fn from_path(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?;

        let (stem, suffix) = match path.extension() {
            Some(ext) if !ext.is_empty() => {
                let mut suffix = OsString::from(".");
                suffix.push(ext);
                (path.file_stem().unwrap_or(file_name).to_os_string(), suffix)
            }
            _ => (file_name.to_os_string(), OsString::new()),
        };

        Some(Self {
            name: file_name.to_string_lossy().into_owned(),
            stem,
            extension: suffix.to_string_lossy().to_lowercase(),
            suffix,
            path: path.to_path_buf(),
        })
    }

    /// Returns the category this file belongs to.
    pub fn category(&self) -> Category {
        category_for_extension(&self.extension)
    }

    /// Returns the file name as stored on disk.
    fn name_os(&self) -> OsString {
        let mut name = self.stem.clone();
        name.push(&self.suffix);
        name
    }

    /// Returns `{stem}_{counter}{suffix}`.
    fn numbered_name(&self, counter: u32) -> OsString {
        let mut name = self.stem.clone();
        name.push(format!("_{}", counter));
        name.push(&self.suffix);
        name
    }
}

/// A file that could not be organized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveFailure {
    /// The file that stayed in place.
    pub path: PathBuf,
    /// Why the move failed.
    pub reason: String,
}

/// Outcome of one organization run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveReport {
    /// Whether this was a dry run.
    pub dry_run: bool,
    /// Number of files actually moved. Always 0 in a dry run.
    pub moved: usize,
    /// Files per category: planned in a dry run, moved otherwise.
    pub per_category: BTreeMap<Category, usize>,
    /// Files that were skipped because their move failed.
    pub failures: Vec<MoveFailure>,
}

impl MoveReport {
    /// Total number of files counted in `per_category`.
    pub fn total(&self) -> usize {
        self.per_category.values().sum()
    }
}

/// Errors that can occur during file organization.
#[derive(Debug, Error)]
pub enum OrganizeError {
    /// The directory to organize does not exist or is not a directory.
    #[error("Directory does not exist: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    /// The directory exists but could not be listed.
    #[error("Failed to read directory {}: {source}", path.display())]
    ReadDirFailed { path: PathBuf, source: io::Error },

    /// Failed to create a category directory.
    #[error("Failed to create directory {}: {source}", path.display())]
    DirectoryCreationFailed { path: PathBuf, source: io::Error },

    /// Failed to move a file to its category directory.
    #[error("Failed to move {} to {}: {source}", from.display(), to.display())]
    FileMoveFailure {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },
}

/// Result type for file organization operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;

/// Organizes the files of a directory into category subdirectories.
///
/// # Examples
///
/// ```no_run
/// use organize::file_organizer::FileOrganizer;
/// use organize::logger::TracingLogger;
/// use std::path::Path;
///
/// let organizer = FileOrganizer::new(&TracingLogger);
/// match organizer.organize(Path::new("/path/to/downloads"), true) {
///     Ok(report) => println!("{} files would be organized", report.total()),
///     Err(e) => eprintln!("Organization failed: {}", e),
/// }
/// ```
pub struct FileOrganizer<'a> {
    logger: &'a dyn Logger,
}

impl<'a> FileOrganizer<'a> {
    pub fn new(logger: &'a dyn Logger) -> Self {
        Self { logger }
    }

    /// Organizes `source_dir`, or only reports what would happen when `dry_run` is set.
    ///
    /// A missing directory is logged once and returned as
    /// `OrganizeError::DirectoryNotFound` before anything is touched. A failure
    /// to move one file is logged, recorded in the report, and the run moves on
    /// to the next file.
    pub fn organize(&self, source_dir: &Path, dry_run: bool) -> OrganizeResult<MoveReport> {
        if !source_dir.is_dir() {
            let err = OrganizeError::DirectoryNotFound {
                path: source_dir.to_path_buf(),
            };
            self.logger.error(&err.to_string());
            return Err(err);
        }

        self.logger
            .info(&format!("Organizing files in: {}", source_dir.display()));

        let entries = snapshot(source_dir, self.logger)?;
        let mut report = MoveReport {
            dry_run,
            ..MoveReport::default()
        };

        for entry in &entries {
            let category = entry.category();

            if dry_run {
                self.logger.info(&format!(
                    "[DRY RUN] Would move: {} -> {}/",
                    entry.name, category
                ));
                *report.per_category.entry(category).or_insert(0) += 1;
                continue;
            }

            match move_to_category(source_dir, entry, category) {
                Ok(destination) => {
                    let final_name = destination
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    self.logger.info(&format!(
                        "Moved: {} -> {}/{}",
                        entry.name, category, final_name
                    ));
                    report.moved += 1;
                    *report.per_category.entry(category).or_insert(0) += 1;
                }
                Err(e) => {
                    self.logger.error(&format!(
                        "Failed to move {} -> {}/: {}",
                        entry.name, category, e
                    ));
                    report.failures.push(MoveFailure {
                        path: entry.path.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        if dry_run {
            self.logger.info("Dry run completed. No files were moved.");
        } else {
            self.logger.info(&format!(
                "Organization completed. Moved {} files.",
                report.moved
            ));
        }

        if !report.failures.is_empty() {
            self.logger.error(&format!(
                "{} file(s) could not be organized.",
                report.failures.len()
            ));
        }

        Ok(report)
    }
}

/// Lists the regular files directly inside `dir`, sorted by name.
///
/// Symlinks are followed for the file check, so a link to a regular file is
/// included while links to directories and dangling links are not. Entries that
/// cannot be inspected for any other reason are reported and skipped.
pub fn snapshot(dir: &Path, logger: &dyn Logger) -> OrganizeResult<Vec<FileEntry>> {
    let read_dir = fs::read_dir(dir).map_err(|e| OrganizeError::ReadDirFailed {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                logger.error(&format!(
                    "Skipping unreadable entry in {}: {}",
                    dir.display(),
                    e
                ));
                continue;
            }
        };

        let path = entry.path();
        match fs::metadata(&path) {
            Ok(metadata) if metadata.is_file() => {
                if let Some(file_entry) = FileEntry::from_path(&path) {
                    entries.push(file_entry);
                }
            }
            Ok(_) => debug!(path = %path.display(), "skipping non-regular entry"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "skipping dangling symlink")
            }
            Err(e) => logger.error(&format!("Skipping {}: {}", path.display(), e)),
        }
    }

    entries.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(entries)
}

/// Returns the first free destination for `entry` inside `category_dir`.
///
/// Tries the original name, then `{stem}_1{suffix}`, `{stem}_2{suffix}` and so on.
pub fn resolve_destination(category_dir: &Path, entry: &FileEntry) -> PathBuf {
    let mut destination = category_dir.join(entry.name_os());
    let mut counter = 1;

    while occupied(&destination) {
        destination = category_dir.join(entry.numbered_name(counter));
        counter += 1;
    }

    if counter > 1 {
        debug!(
            file = %entry.name,
            destination = %destination.display(),
            "name collision resolved"
        );
    }
    destination
}

/// True when anything, including a dangling symlink, exists at `path`.
fn occupied(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Moves `entry` into `base_path/<category>/`, creating the directory if needed.
///
/// Returns the final destination path.
pub fn move_to_category(
    base_path: &Path,
    entry: &FileEntry,
    category: Category,
) -> OrganizeResult<PathBuf> {
    let category_path = base_path.join(category.dir_name());

    fs::create_dir_all(&category_path).map_err(|e| OrganizeError::DirectoryCreationFailed {
        path: category_path.clone(),
        source: e,
    })?;

    let destination = resolve_destination(&category_path, entry);
    move_file(&entry.path, &destination)?;
    Ok(destination)
}

/// Renames `source` to `destination`, copying across filesystems when needed.
fn move_file(source: &Path, destination: &Path) -> OrganizeResult<()> {
    move_file_with(source, destination, |from, to| fs::rename(from, to), |path| {
        fs::remove_file(path)
    })
}

/// Moves with the given rename and unlink operations.
///
/// When `rename` reports that the paths are on different filesystems, the file
/// is copied to a temporary name next to `destination`, renamed into place, and
/// only then is `source` unlinked through `remove_source`. A symlink is
/// recreated rather than copied. On any failure the filesystem is left as it
/// was before the call.
fn move_file_with<R, D>(
    source: &Path,
    destination: &Path,
    rename: R,
    remove_source: D,
) -> OrganizeResult<()>
where
    R: Fn(&Path, &Path) -> io::Result<()>,
    D: Fn(&Path) -> io::Result<()>,
{
    let failure = |e: io::Error| OrganizeError::FileMoveFailure {
        from: source.to_path_buf(),
        to: destination.to_path_buf(),
        source: e,
    };

    match rename(source, destination) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            warn!(
                src = %source.display(),
                dest = %destination.display(),
                "rename crosses filesystems; copying instead"
            );
            copy_into_place(source, destination).map_err(failure)?;

            if let Err(e) = remove_source(source) {
                // Keep a single copy: the original stays, the new one goes.
                let _ = fs::remove_file(destination);
                return Err(failure(e));
            }
            Ok(())
        }
        Err(e) => Err(failure(e)),
    }
}

/// Copies `source` to a temporary sibling of `destination`, then renames it in.
///
/// The temporary file is removed if either step fails.
fn copy_into_place(source: &Path, destination: &Path) -> io::Result<()> {
    let temp = temp_path_for(destination);

    let result = copy_entry(source, &temp).and_then(|()| fs::rename(&temp, destination));
    if result.is_err() {
        let _ = fs::remove_file(&temp);
    }
    result
}

/// Copies file contents, or recreates the link when `source` is a symlink.
fn copy_entry(source: &Path, target: &Path) -> io::Result<()> {
    if fs::symlink_metadata(source)?.file_type().is_symlink() {
        copy_symlink(source, target)
    } else {
        fs::copy(source, target).map(|_| ())
    }
}

#[cfg(unix)]
fn copy_symlink(source: &Path, target: &Path) -> io::Result<()> {
    let link_target = fs::read_link(source)?;
    std::os::unix::fs::symlink(link_target, target)
}

#[cfg(not(unix))]
fn copy_symlink(source: &Path, target: &Path) -> io::Result<()> {
    fs::copy(source, target).map(|_| ())
}

/// Returns an unused hidden path in the same directory as `destination`.
fn temp_path_for(destination: &Path) -> PathBuf {
    let name = destination
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let dir = destination.parent().unwrap_or_else(|| Path::new("."));

    let mut attempt = 0u32;
    loop {
        let candidate = dir.join(format!(
            ".{}.{}.{}.partial",
            name,
            std::process::id(),
            attempt
        ));
        if !occupied(&candidate) {
            return candidate;
        }
        attempt += 1;
    }
}
