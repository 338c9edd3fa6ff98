use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::catalog::Archive;

/// Position of an archive in the run's ordered archive list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ArchiveId(pub usize);

/// A key claimed by more than one archive; `owner` replaced `previous`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub key: String,
    pub previous: ArchiveId,
    pub owner: ArchiveId,
}

/// Flattened view from class or package-wildcard name to the archive that
/// claimed it last.
#[derive(Debug, Default)]
pub struct ClassRegistry {
    owners: HashMap<String, ArchiveId>,
    collisions: Vec<Collision>,
}

impl ClassRegistry {
    pub fn build(archives: &[Archive]) -> Self {
        let mut registry = Self::default();
        for (idx, archive) in archives.iter().enumerate() {
            registry.claim_all(ArchiveId(idx), archive.classes.iter().map(String::as_str));
        }

        let class_collisions = registry
            .collisions
            .iter()
            .filter(|c| !c.key.ends_with(".*"))
            .count();
        if class_collisions > 0 {
            warn!(
                collisions = class_collisions,
                "classes defined by more than one jar; the last jar in name order owns them"
            );
        }
        debug!(keys = registry.len(), jars = archives.len(), "built class registry");
        registry
    }

    /// Inserts every key for `archive`, overwriting any earlier owner.
    pub fn claim_all<'a>(&mut self, archive: ArchiveId, keys: impl IntoIterator<Item = &'a str>) {
        for key in keys {
            if let Some(previous) = self.owners.insert(key.to_string(), archive)
                && previous != archive
            {
                debug!(key, ?previous, owner = ?archive, "ownership overwritten");
                self.collisions.push(Collision {
                    key: key.to_string(),
                    previous,
                    owner: archive,
                });
            }
        }
    }

    pub fn owner(&self, key: &str) -> Option<ArchiveId> {
        self.owners.get(key).copied()
    }

    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::path::PathBuf;

    fn archive(name: &str, classes: &[&str]) -> Archive {
        Archive {
            path: PathBuf::from(format!("/lib/{name}")),
            name: name.to_string(),
            classes: classes.iter().map(|c| c.to_string()).collect::<BTreeSet<_>>(),
        }
    }

    #[test]
    fn maps_each_key_to_its_archive() {
        let archives = vec![
            archive("a.jar", &["com.x.A", "com.x.*"]),
            archive("b.jar", &["com.y.B", "com.y.*"]),
        ];
        let registry = ClassRegistry::build(&archives);

        assert_eq!(registry.owner("com.x.A"), Some(ArchiveId(0)));
        assert_eq!(registry.owner("com.y.*"), Some(ArchiveId(1)));
        assert_eq!(registry.owner("com.z.Z"), None);
        assert_eq!(registry.len(), 4);
        assert!(registry.collisions().is_empty());
    }

    #[test]
    fn last_archive_wins_on_collision() {
        let archives = vec![
            archive("a.jar", &["com.foo.Bar", "com.foo.*"]),
            archive("b.jar", &["com.foo.Bar", "com.foo.*"]),
        ];
        let registry = ClassRegistry::build(&archives);

        assert_eq!(registry.owner("com.foo.Bar"), Some(ArchiveId(1)));
        assert_eq!(registry.owner("com.foo.*"), Some(ArchiveId(1)));
        assert_eq!(registry.collisions().len(), 2);
        assert!(registry.collisions().contains(&Collision {
            key: "com.foo.Bar".to_string(),
            previous: ArchiveId(0),
            owner: ArchiveId(1),
        }));
    }

    #[test]
    fn reclaiming_by_same_archive_is_not_a_collision() {
        let mut registry = ClassRegistry::default();
        registry.claim_all(ArchiveId(3), ["com.x.A", "com.x.A"]);
        assert_eq!(registry.owner("com.x.A"), Some(ArchiveId(3)));
        assert!(registry.collisions().is_empty());
    }

    #[test]
    fn jars_without_classes_leave_registry_empty() {
        let archives = vec![archive("resources.jar", &[])];
        let registry = ClassRegistry::build(&archives);
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }
}
