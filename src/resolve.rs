use serde::Serialize;
use std::collections::BTreeSet;

use crate::registry::{ArchiveId, ClassRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageTag {
    Used,
    Unused,
}

#[derive(Debug, Clone)]
pub struct Resolution {
    tags: Vec<UsageTag>,
    unmatched: BTreeSet<String>,
}

impl Resolution {
    pub fn tag(&self, id: ArchiveId) -> UsageTag {
        self.tags.get(id.0).copied().unwrap_or(UsageTag::Unused)
    }

    pub fn tags(&self) -> &[UsageTag] {
        &self.tags
    }

    /// Used names that no scanned jar provides.
    pub fn unmatched(&self) -> &BTreeSet<String> {
        &self.unmatched
    }
}

/// Tags every archive owning at least one of `used` as [`UsageTag::Used`].
///
/// Keys are compared by exact string equality, so `com.x.A` never matches
/// `com.x.*` or the reverse. Names without an owner are skipped.
pub fn resolve<'a>(
    registry: &ClassRegistry,
    archive_count: usize,
    used: impl IntoIterator<Item = &'a String>,
) -> Resolution {
    let mut tags = vec![UsageTag::Unused; archive_count];
    let mut unmatched = BTreeSet::new();

    for name in used {
        match registry.owner(name) {
            Some(id) => {
                if let Some(tag) = tags.get_mut(id.0) {
                    *tag = UsageTag::Used;
                }
            }
            None => {
                unmatched.insert(name.clone());
            }
        }
    }

    Resolution { tags, unmatched }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Archive;
    use std::path::PathBuf;

    fn archive(name: &str, classes: &[&str]) -> Archive {
        Archive {
            path: PathBuf::from(name),
            name: name.to_string(),
            classes: classes.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn used(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn fixture() -> Vec<Archive> {
        vec![
            archive("a.jar", &["com.x.A", "com.x.*"]),
            archive("b.jar", &["com.y.B", "com.y.*"]),
        ]
    }

    #[test]
    fn exact_class_import_marks_only_its_archive() {
        let archives = fixture();
        let registry = ClassRegistry::build(&archives);
        let res = resolve(&registry, archives.len(), &used(&["com.x.A"]));

        assert_eq!(res.tag(ArchiveId(0)), UsageTag::Used);
        assert_eq!(res.tag(ArchiveId(1)), UsageTag::Unused);
    }

    #[test]
    fn wildcard_import_matches_package_key() {
        let archives = fixture();
        let registry = ClassRegistry::build(&archives);
        let res = resolve(&registry, archives.len(), &used(&["com.x.*"]));

        assert_eq!(res.tags(), &[UsageTag::Used, UsageTag::Unused]);
    }

    #[test]
    fn bare_and_wildcard_keys_do_not_cross_match() {
        let archives = vec![archive("a.jar", &["com.x.A", "com.x.*"])];
        let registry = ClassRegistry::build(&archives);

        let res = resolve(&registry, 1, &used(&["com.x"]));
        assert_eq!(res.tag(ArchiveId(0)), UsageTag::Unused);

        let res = resolve(&registry, 1, &used(&["com.x.A.*", "com.*"]));
        assert_eq!(res.tag(ArchiveId(0)), UsageTag::Unused);
    }

    #[test]
    fn unknown_names_are_ignored_but_reported() {
        let archives = fixture();
        let registry = ClassRegistry::build(&archives);
        let res = resolve(&registry, archives.len(), &used(&["com.z.Z"]));

        assert!(res.tags().iter().all(|t| *t == UsageTag::Unused));
        assert_eq!(res.unmatched(), &used(&["com.z.Z"]));
    }

    #[test]
    fn only_last_owner_can_be_marked_by_colliding_key() {
        let archives = vec![
            archive("a.jar", &["com.foo.Bar"]),
            archive("b.jar", &["com.foo.Bar"]),
        ];
        let registry = ClassRegistry::build(&archives);
        let res = resolve(&registry, archives.len(), &used(&["com.foo.Bar"]));

        assert_eq!(res.tags(), &[UsageTag::Unused, UsageTag::Used]);
    }

    #[test]
    fn resolving_twice_is_idempotent() {
        let archives = fixture();
        let registry = ClassRegistry::build(&archives);
        let set = used(&["com.y.B", "org.none.N"]);

        let first = resolve(&registry, archives.len(), &set);
        let second = resolve(&registry, archives.len(), &set);
        assert_eq!(first.tags(), second.tags());
        assert_eq!(first.unmatched(), second.unmatched());
    }
}
