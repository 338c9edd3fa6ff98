//! Textual extraction of `import` declarations from Java sources.
//!
//! The scan is deliberately lexical: comments and string literals are not
//! recognised, so an import-shaped token inside either is reported like a real
//! import. `import static` declarations are not matched.

use anyhow::{Context, Result};
use rayon::prelude::*;
use regex::Regex;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::debug;

use crate::scan::source_files;

/// Platform namespaces that can never be provided by a library jar.
pub const EXCLUDED_PREFIXES: [&str; 4] = ["java.", "javax.", "com.sun.", "sun.misc."];

static IMPORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bimport\s+([^\s;]+)\s*;").expect("valid import regex"));

#[derive(Debug, Clone, Default)]
pub struct ImportFilter {
    extra_prefixes: Vec<String>,
}

impl ImportFilter {
    pub fn new(extra_prefixes: Vec<String>) -> Self {
        Self {
            extra_prefixes: extra_prefixes
                .into_iter()
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        EXCLUDED_PREFIXES.iter().any(|p| name.starts_with(p))
            || self.extra_prefixes.iter().any(|p| name.starts_with(p.as_str()))
    }
}

/// Yields every imported name in `text` that survives `filter`.
pub fn extract_imports<'a>(
    text: &'a str,
    filter: &'a ImportFilter,
) -> impl Iterator<Item = &'a str> + 'a {
    IMPORT_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(move |name| !filter.is_excluded(name))
}

/// Unions the imports of every `.java` file below `root`.
pub fn collect_used_classes(root: &Path, filter: &ImportFilter) -> Result<BTreeSet<String>> {
    let files: Vec<PathBuf> = source_files(root).collect::<Result<_>>()?;
    debug!(root = %root.display(), files = files.len(), "collected source files");

    let per_file: Vec<BTreeSet<String>> = files
        .par_iter()
        .map(|path| imports_in_file(path, filter))
        .collect::<Result<_>>()?;

    Ok(per_file.into_iter().flatten().collect())
}

fn imports_in_file(path: &Path, filter: &ImportFilter) -> Result<BTreeSet<String>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read source file: {}", path.display()))?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(extract_imports(&text, filter).map(str::to_string).collect())
}
