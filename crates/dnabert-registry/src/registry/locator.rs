//! Parsed view of model-registry artifact locators.

use crate::error::RegistryError;
use std::fmt;
use std::str::FromStr;

/// An artifact locator of the form `namespace/collection/name:tag`.
///
/// Stored locator values stay opaque strings; parsing is opt-in for callers
/// that need the components (e.g. the tag lint).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactLocator {
    pub namespace: String,
    pub collection: String,
    pub name: String,
    pub tag: String,
}

impl FromStr for ArtifactLocator {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RegistryError::InvalidLocator(s.to_string());
        // The tag follows the final ':' so names may not contain one.
        let (path, tag) = s.rsplit_once(':').ok_or_else(invalid)?;
        let mut parts = path.split('/');
        let (namespace, collection, name) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(ns), Some(coll), Some(name), None) => (ns, coll, name),
            _ => return Err(invalid()),
        };
        if namespace.is_empty() || collection.is_empty() || name.is_empty() || tag.is_empty() {
            return Err(invalid());
        }
        Ok(ArtifactLocator {
            namespace: namespace.to_string(),
            collection: collection.to_string(),
            name: name.to_string(),
            tag: tag.to_string(),
        })
    }
}

impl fmt::Display for ArtifactLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}:{}",
            self.namespace, self.collection, self.name, self.tag
        )
    }
}

/// Lint: report artifact entries whose locator tag does not name a dataset
/// alias, or does not parse at all. The convention is unenforced on load, so
/// this never fails construction.
pub fn check_tags(registry: &crate::registry::Registry) -> Vec<TagIssue> {
    let mut issues = Vec::new();
    for (alias, value) in registry.artifacts.iter() {
        match value.parse::<ArtifactLocator>() {
            Ok(loc) => {
                if registry.datasets.get(&loc.tag).is_none() {
                    tracing::warn!(
                        "artifact '{}' tag '{}' does not name a dataset alias",
                        alias,
                        loc.tag
                    );
                    issues.push(TagIssue::UnknownTag {
                        alias: alias.to_string(),
                        tag: loc.tag,
                    });
                }
            }
            Err(_) => {
                tracing::warn!("artifact '{}' locator '{}' is malformed", alias, value);
                issues.push(TagIssue::Malformed {
                    alias: alias.to_string(),
                    locator: value.to_string(),
                });
            }
        }
    }
    issues
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagIssue {
    UnknownTag { alias: String, tag: String },
    Malformed { alias: String, locator: String },
}

impl fmt::Display for TagIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagIssue::UnknownTag { alias, tag } => {
                write!(f, "artifact '{alias}': tag '{tag}' is not a dataset alias")
            }
            TagIssue::Malformed { alias, locator } => {
                write!(f, "artifact '{alias}': malformed locator '{locator}'")
            }
        }
    }
}
