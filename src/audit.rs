use anyhow::Result;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::catalog::Archive;
use crate::config::{AuditConfig, UsedInput};
use crate::imports::collect_used_classes;
use crate::registry::{ArchiveId, ClassRegistry};
use crate::report::Mode;
use crate::resolve::{UsageTag, resolve};
use crate::scan::scan_archives;

#[derive(Debug, Clone, Serialize)]
pub struct ArchiveUsage {
    pub name: String,
    pub path: String,
    pub tag: UsageTag,
    pub class_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CollisionReport {
    pub class_name: String,
    pub discarded: String,
    pub owner: String,
}

#[derive(Debug, Clone)]
pub struct AuditReport {
    pub library: PathBuf,
    pub archives: Vec<ArchiveUsage>,
    pub used_classes: BTreeSet<String>,
    pub unmatched: BTreeSet<String>,
    pub collisions: Vec<CollisionReport>,
    pub duration_ms: u64,
}

impl AuditReport {
    /// Archives belonging to the partition selected by `mode`, in scan order.
    pub fn partition(&self, mode: Mode) -> impl Iterator<Item = &ArchiveUsage> {
        let wanted = mode.tag();
        self.archives.iter().filter(move |a| a.tag == wanted)
    }
}

/// Runs inventory, extraction, indexing and resolution for one library.
pub fn run(config: &AuditConfig) -> Result<AuditReport> {
    let start = Instant::now();

    let jar_paths = scan_archives(&config.lib_dir)?;
    info!(lib = %config.lib_dir.display(), jars = jar_paths.len(), "scanning library");

    let archives: Vec<Archive> = jar_paths
        .par_iter()
        .map(|path| Archive::open(path))
        .collect::<Result<_>>()?;

    let registry = ClassRegistry::build(&archives);
    if registry.is_empty() && !archives.is_empty() {
        warn!(lib = %config.lib_dir.display(), "no classes found in any jar");
    }

    let used_classes = match &config.input {
        UsedInput::Class(name) => BTreeSet::from([name.clone()]),
        UsedInput::Sources(root) => collect_used_classes(root, &config.filter)?,
    };
    debug!(used = used_classes.len(), "collected used classes");

    let resolution = resolve(&registry, archives.len(), &used_classes);

    let usages = archives
        .iter()
        .enumerate()
        .map(|(idx, archive)| ArchiveUsage {
            name: archive.name.clone(),
            path: archive.path.to_string_lossy().to_string(),
            tag: resolution.tag(ArchiveId(idx)),
            class_count: archive.classes.iter().filter(|c| !c.ends_with(".*")).count(),
        })
        .collect();

    let collisions = registry
        .collisions()
        .iter()
        .filter(|c| !c.key.ends_with(".*"))
        .map(|c| CollisionReport {
            class_name: c.key.clone(),
            discarded: archives[c.previous.0].name.clone(),
            owner: archives[c.owner.0].name.clone(),
        })
        .collect();

    Ok(AuditReport {
        library: config.lib_dir.clone(),
        archives: usages,
        used_classes,
        unmatched: resolution.unmatched().clone(),
        collisions,
        duration_ms: start.elapsed().as_millis() as u64,
    })
}
