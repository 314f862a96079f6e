use crate::error::RegistryError;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// The two mapping namespaces the registry serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MappingName {
    Datasets,
    Artifacts,
}

impl MappingName {
    /// Wire name used in the persisted TOML representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MappingName::Datasets => "datasets",
            MappingName::Artifacts => "dnabert_pretrain_artifacts",
        }
    }
}

impl fmt::Display for MappingName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MappingName {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "datasets" => Ok(MappingName::Datasets),
            // Short form accepted on input for CLI convenience.
            "dnabert_pretrain_artifacts" | "artifacts" => Ok(MappingName::Artifacts),
            other => Err(RegistryError::UnknownMapping(other.to_string())),
        }
    }
}

/// Ordered alias -> value map. Iteration follows declaration order; lookup
/// goes through a positional index.
#[derive(Debug, Clone, Default)]
pub struct Mapping {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an alias. A duplicate alias keeps its original position and
    /// takes the new value, matching last-declaration-wins file semantics.
    pub fn insert(&mut self, alias: impl Into<String>, value: impl Into<String>) {
        let alias = alias.into();
        let value = value.into();
        match self.index.get(&alias) {
            Some(&pos) => {
                tracing::warn!("duplicate alias '{}', keeping last value", alias);
                self.entries[pos].1 = value;
            }
            None => {
                self.index.insert(alias.clone(), self.entries.len());
                self.entries.push((alias, value));
            }
        }
    }

    pub fn get(&self, alias: &str) -> Option<&str> {
        self.index
            .get(alias)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    /// Aliases in declaration order.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(a, _)| a.as_str())
    }

    /// (alias, value) pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(a, v)| (a.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<A: Into<String>, V: Into<String>> FromIterator<(A, V)> for Mapping {
    fn from_iter<T: IntoIterator<Item = (A, V)>>(iter: T) -> Self {
        let mut m = Mapping::new();
        for (a, v) in iter {
            m.insert(a, v);
        }
        m
    }
}

/// Read-only registry of dataset identifiers and pretrain artifact locators.
/// Built once; safe to share across threads thereafter.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    pub datasets: Mapping,
    pub artifacts: Mapping,
}

impl Registry {
    /// Resolve a dataset identifier by alias.
    pub fn dataset(&self, alias: &str) -> Result<&str, RegistryError> {
        self.datasets
            .get(alias)
            .ok_or_else(|| RegistryError::NotFound {
                mapping: MappingName::Datasets,
                alias: alias.to_string(),
            })
    }

    /// Resolve a pretrain artifact locator by alias.
    pub fn artifact(&self, alias: &str) -> Result<&str, RegistryError> {
        self.artifacts
            .get(alias)
            .ok_or_else(|| RegistryError::NotFound {
                mapping: MappingName::Artifacts,
                alias: alias.to_string(),
            })
    }

    pub fn mapping(&self, name: MappingName) -> &Mapping {
        match name {
            MappingName::Datasets => &self.datasets,
            MappingName::Artifacts => &self.artifacts,
        }
    }

    /// Aliases of the named mapping in declaration order.
    pub fn aliases(&self, name: MappingName) -> impl Iterator<Item = &str> {
        self.mapping(name).aliases()
    }
}
