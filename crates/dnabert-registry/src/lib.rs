//! Dataset and pretrained-model artifact registry for the DNABERT pipeline.
//!
//! Two read-only mappings, `datasets` and `dnabert_pretrain_artifacts`, each
//! from a short alias to an opaque value string. Built-in defaults cover the
//! Silva NR99 dataset family; a TOML file can replace them.

pub mod config;
pub mod error;
pub mod registry;

pub use error::RegistryError;
pub use registry::{ArtifactLocator, Mapping, MappingName, Registry};
