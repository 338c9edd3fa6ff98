use anyhow::{Context, Result};
use ignore::{Walk, WalkBuilder};
use std::path::{Path, PathBuf};

pub const ARCHIVE_SUFFIX: &str = "jar";
pub const SOURCE_SUFFIX: &str = "java";

/// Lists the jar files directly inside `lib_dir`, ordered by file name.
///
/// Subdirectories are not descended into. The ordering fixes which archive
/// wins when two of them define the same class.
pub fn scan_archives(lib_dir: &Path) -> Result<Vec<PathBuf>> {
    let walker = WalkBuilder::new(lib_dir)
        .hidden(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .ignore(false)
        .parents(false)
        .max_depth(Some(1))
        .build();

    let mut jars = Vec::new();
    for entry in walker {
        let entry =
            entry.with_context(|| format!("Cannot list library directory: {}", lib_dir.display()))?;
        if entry.depth() == 0 {
            continue;
        }
        let path = entry.path();
        if is_archive_file(path) {
            jars.push(path.to_path_buf());
        }
    }

    jars.sort_by(|a, b| display_name(a).cmp(&display_name(b)).then_with(|| a.cmp(b)));
    Ok(jars)
}

/// Lazily walks `root`, yielding every `.java` file underneath it.
///
/// Symlinked directories are followed; a link cycle ends the walk with an
/// error. Each call starts a fresh traversal.
pub fn source_files(root: &Path) -> SourceFiles {
    let walk = WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .ignore(false)
        .parents(false)
        .follow_links(true)
        .build();
    SourceFiles {
        root: root.to_path_buf(),
        walk,
    }
}

pub struct SourceFiles {
    root: PathBuf,
    walk: Walk,
}

impl Iterator for SourceFiles {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walk.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    return Some(Err(anyhow::Error::new(err).context(format!(
                        "Source walk failed under: {}",
                        self.root.display()
                    ))));
                }
            };
            let path = entry.path();
            if is_source_file(path) {
                return Some(Ok(path.to_path_buf()));
            }
        }
    }
}

pub fn is_archive_file(path: &Path) -> bool {
    path.is_file() && path.extension().is_some_and(|e| e == ARCHIVE_SUFFIX)
}

pub fn is_source_file(path: &Path) -> bool {
    path.is_file() && path.extension().is_some_and(|e| e == SOURCE_SUFFIX)
}

pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}
