//! Error types for registry lookups and locator parsing.

use crate::registry::MappingName;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Alias is absent from the named mapping.
    #[error("no {mapping} entry for alias '{alias}'")]
    NotFound {
        mapping: MappingName,
        alias: String,
    },

    /// Mapping name is neither `datasets` nor `dnabert_pretrain_artifacts`.
    #[error("unknown mapping '{0}' (expected 'datasets' or 'dnabert_pretrain_artifacts')")]
    UnknownMapping(String),

    /// Locator string does not match `namespace/collection/name:tag`.
    #[error("invalid artifact locator '{0}': expected namespace/collection/name:tag")]
    InvalidLocator(String),
}
