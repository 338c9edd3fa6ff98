use anyhow::{Context, Result};
use memmap2::Mmap;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use zip::ZipArchive;

use crate::scan::display_name;

const CLASS_SUFFIX: &str = ".class";

/// One jar from the library directory together with everything it defines.
#[derive(Debug, Clone)]
pub struct Archive {
    pub path: PathBuf,
    pub name: String,
    pub classes: BTreeSet<String>,
}

impl Archive {
    pub fn open(path: &Path) -> Result<Self> {
        let classes = inventory(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            name: display_name(path),
            classes,
        })
    }
}

/// Lists every class name in the jar plus the `<package>.*` key of each
/// class's package. Classes in the default package contribute their bare name
/// only.
pub fn inventory(jar_path: &Path) -> Result<BTreeSet<String>> {
    let file = File::open(jar_path)
        .with_context(|| format!("Cannot open jar: {}", jar_path.display()))?;
    // SAFETY: The file is opened read-only and remains valid for the lifetime of the mmap.
    // The mmap is dropped before the file, ensuring memory safety.
    let mmap = unsafe { Mmap::map(&file) }
        .with_context(|| format!("mmap of jar failed: {}", jar_path.display()))?;
    let mut archive = ZipArchive::new(Cursor::new(&mmap[..]))
        .with_context(|| format!("Unreadable zip structure: {}", jar_path.display()))?;

    let mut classes = BTreeSet::new();
    for i in 0..archive.len() {
        let entry = archive
            .by_index(i)
            .with_context(|| format!("Bad entry #{i} in jar: {}", jar_path.display()))?;
        let Some((class_name, wildcard)) = class_names_for_entry(entry.name()) else {
            continue;
        };
        if let Some(wildcard) = wildcard {
            classes.insert(wildcard);
        }
        classes.insert(class_name);
    }
    Ok(classes)
}

/// Maps a zip entry path to its dotted class name and package wildcard.
///
/// Returns `None` for anything that is not a compiled class.
pub fn class_names_for_entry(entry_name: &str) -> Option<(String, Option<String>)> {
    let stem = entry_name.strip_suffix(CLASS_SUFFIX)?;
    if stem.is_empty() || stem.ends_with(['/', '\\']) {
        return None;
    }
    let class_name = stem.replace(['/', '\\'], ".");
    let wildcard = package_wildcard(&class_name);
    Some((class_name, wildcard))
}

pub fn package_wildcard(class_name: &str) -> Option<String> {
    match class_name.rfind('.') {
        Some(idx) if idx > 0 => Some(format!("{}.*", &class_name[..idx])),
        _ => None,
    }
}
