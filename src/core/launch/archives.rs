// ─── Archive Collector ───
// Picks the `.jar`/`.zip` files that sit directly inside the library folder.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::core::error::{GeneratorError, GeneratorResult};

/// Extensions accepted on the classpath, compared against the lowercased
/// last three characters of the file name.
const ARCHIVE_EXTENSIONS: [&str; 2] = ["jar", "zip"];

/// Names this short are never considered, whatever they end with.
const MIN_NAME_LEN_EXCLUSIVE: usize = 4;

/// A file destined for the classpath.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveRef {
    pub path: PathBuf,
}

impl ArchiveRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// A regular file found directly inside a scanned directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub path: PathBuf,
    pub name: String,
}

/// List the regular files directly inside `dir`, sorted by name.
///
/// Names compare uppercased, then exactly, which is the order NTFS
/// lists a folder in (`_` sorts after letters).
///
/// Subdirectories are skipped. The returned vector can be iterated any
/// number of times.
pub fn enumerate_entries(dir: &Path) -> GeneratorResult<Vec<DirEntry>> {
    if !dir.is_dir() {
        return Err(GeneratorError::LibraryDirMissing(dir.to_path_buf()));
    }

    let read_dir = std::fs::read_dir(dir).map_err(|source| GeneratorError::io(dir, source))?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|source| GeneratorError::io(dir, source))?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|source| GeneratorError::io(&path, source))?;

        // Symlinks count as files when they point at one.
        if !(file_type.is_file() || (file_type.is_symlink() && path.is_file())) {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        entries.push(DirEntry { path, name });
    }

    entries.sort_by(|a, b| {
        a.name
            .to_uppercase()
            .cmp(&b.name.to_uppercase())
            .then_with(|| a.name.cmp(&b.name))
    });
    Ok(entries)
}

/// Whether a file name qualifies as a classpath archive.
///
/// The name must be longer than four characters; this rejects a bare
/// `.jar` as well as short real names such as `a.ja`.
pub fn is_archive_name(name: &str) -> bool {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= MIN_NAME_LEN_EXCLUSIVE {
        return false;
    }

    let ext: String = chars[chars.len() - 3..].iter().collect::<String>().to_lowercase();
    ARCHIVE_EXTENSIONS.contains(&ext.as_str())
}

/// Collect the archives directly inside `dir`, in name order.
///
/// Fails with [`GeneratorError::LibraryDirMissing`] when `dir` does not
/// exist or is not a directory.
pub fn collect_archives(dir: &Path) -> GeneratorResult<Vec<ArchiveRef>> {
    let mut archives = Vec::new();

    for entry in enumerate_entries(dir)? {
        if is_archive_name(&entry.name) {
            debug!("Archive on classpath: {}", entry.name);
            archives.push(ArchiveRef::new(entry.path));
        } else {
            debug!("Not an archive (skipping): {}", entry.name);
        }
    }

    if archives.is_empty() {
        warn!("No archives found in {:?}", dir);
    }

    Ok(archives)
}
