use super::default::default_registry;
use super::types::{Mapping, Registry};
use serde::{Deserialize, Serialize};

/// Persisted representation: two top-level arrays of tables. Array-of-tables
/// keeps declaration order through parse and serialize, which the alias
/// listing contract depends on.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawRegistryFile {
    #[serde(default)]
    pub datasets: Vec<RawDatasetEntry>,
    #[serde(default)]
    pub dnabert_pretrain_artifacts: Vec<RawArtifactEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawDatasetEntry {
    pub alias: String,
    pub id: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawArtifactEntry {
    pub alias: String,
    pub locator: String,
}

pub fn from_toml_str(s: &str) -> anyhow::Result<Registry> {
    let raw: RawRegistryFile = toml::from_str(s)?;
    Ok(build_registry(raw))
}

pub fn load_from_file(path: &std::path::Path) -> anyhow::Result<Registry> {
    let content = std::fs::read_to_string(path)?;
    from_toml_str(&content)
}

pub fn load_default() -> Registry {
    default_registry().clone()
}

pub fn to_toml_str(registry: &Registry) -> anyhow::Result<String> {
    Ok(toml::to_string(&to_raw(registry))?)
}

/// JSON rendering of the persisted shape, for downstream pipeline tooling.
pub fn to_json_str(registry: &Registry) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&to_raw(registry))?)
}

fn build_registry(raw: RawRegistryFile) -> Registry {
    let mut datasets = Mapping::new();
    for e in raw.datasets {
        datasets.insert(e.alias, e.id);
    }
    let mut artifacts = Mapping::new();
    for e in raw.dnabert_pretrain_artifacts {
        artifacts.insert(e.alias, e.locator);
    }
    Registry { datasets, artifacts }
}

fn to_raw(registry: &Registry) -> RawRegistryFile {
    RawRegistryFile {
        datasets: registry
            .datasets
            .iter()
            .map(|(alias, id)| RawDatasetEntry {
                alias: alias.to_string(),
                id: id.to_string(),
            })
            .collect(),
        dnabert_pretrain_artifacts: registry
            .artifacts
            .iter()
            .map(|(alias, locator)| RawArtifactEntry {
                alias: alias.to_string(),
                locator: locator.to_string(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_build_registry() {
        let toml = r#"
[[datasets]]
alias = "silva-nr99"
id = "silva_nr99"

[[datasets]]
alias = "silva-nr99-filtered"
id = "silva_nr99_filtered"

[[dnabert_pretrain_artifacts]]
alias = "silva-nr99"
locator = "sirdavidludwig/model-registry/dnabert-pretrain-64d-150bp:silva-nr99"
"#;
        let r = from_toml_str(toml).expect("parse ok");
        assert_eq!(r.dataset("silva-nr99").unwrap(), "silva_nr99");
        assert_eq!(
            r.artifact("silva-nr99").unwrap(),
            "sirdavidludwig/model-registry/dnabert-pretrain-64d-150bp:silva-nr99"
        );
        assert_eq!(
            r.datasets.aliases().collect::<Vec<_>>(),
            vec!["silva-nr99", "silva-nr99-filtered"]
        );
    }

    #[test]
    fn missing_sections_yield_empty_mappings() {
        let r = from_toml_str("").expect("parse ok");
        assert!(r.datasets.is_empty());
        assert!(r.artifacts.is_empty());
    }

    #[test]
    fn round_trip_preserves_pairs_and_order() {
        let original = load_default();
        let serialized = to_toml_str(&original).expect("serialize ok");
        let reloaded = from_toml_str(&serialized).expect("reload ok");
        assert_eq!(
            original.datasets.iter().collect::<Vec<_>>(),
            reloaded.datasets.iter().collect::<Vec<_>>()
        );
        assert_eq!(
            original.artifacts.iter().collect::<Vec<_>>(),
            reloaded.artifacts.iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn json_dump_carries_both_sections() {
        let json = to_json_str(&load_default()).expect("serialize ok");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["datasets"][0]["alias"], "silva-nr99");
        assert_eq!(
            value["dnabert_pretrain_artifacts"][0]["locator"],
            "sirdavidludwig/model-registry/dnabert-pretrain-64d-150bp:silva-nr99"
        );
    }

    #[test]
    fn load_from_file_reads_toml() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("registry.toml");
        std::fs::write(
            &path,
            "[[datasets]]\nalias = \"x\"\nid = \"x_id\"\n",
        )
        .expect("write");
        let r = load_from_file(&path).expect("load ok");
        assert_eq!(r.dataset("x").unwrap(), "x_id");
        assert!(load_from_file(&dir.path().join("absent.toml")).is_err());
    }
}
