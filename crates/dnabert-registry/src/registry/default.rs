use super::types::{Mapping, Registry};
use once_cell::sync::Lazy;

/// Model-registry path of the pretrained DNABERT family these aliases tag.
pub const PRETRAIN_MODEL_PATH: &str = "sirdavidludwig/model-registry/dnabert-pretrain-64d-150bp";

pub fn default_datasets() -> Mapping {
    Mapping::from_iter([
        ("silva-nr99", "silva_nr99"),
        ("silva-nr99-filtered", "silva_nr99_filtered"),
        ("silva-nr99-filtered-515f-806r", "silva_nr99_filtered_515f_806r"),
    ])
}

pub fn default_artifacts() -> Mapping {
    let mut m = Mapping::new();
    // Each pretrain checkpoint is tagged with the alias of the dataset it
    // was trained on.
    for alias in [
        "silva-nr99",
        "silva-nr99-filtered",
        "silva-nr99-filtered-515f-806r",
    ] {
        m.insert(alias, format!("{PRETRAIN_MODEL_PATH}:{alias}"));
    }
    m
}

static DEFAULT: Lazy<Registry> = Lazy::new(|| Registry {
    datasets: default_datasets(),
    artifacts: default_artifacts(),
});

/// The built-in registry data, constructed on first use.
pub fn default_registry() -> &'static Registry {
    &DEFAULT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_literals() {
        let r = default_registry();
        assert_eq!(r.dataset("silva-nr99").unwrap(), "silva_nr99");
        assert_eq!(r.dataset("silva-nr99-filtered").unwrap(), "silva_nr99_filtered");
        assert_eq!(
            r.dataset("silva-nr99-filtered-515f-806r").unwrap(),
            "silva_nr99_filtered_515f_806r"
        );
    }

    #[test]
    fn artifact_literals() {
        let r = default_registry();
        assert_eq!(
            r.artifact("silva-nr99-filtered").unwrap(),
            "sirdavidludwig/model-registry/dnabert-pretrain-64d-150bp:silva-nr99-filtered"
        );
    }

    #[test]
    fn dataset_alias_order() {
        let r = default_registry();
        assert_eq!(
            r.aliases(crate::registry::MappingName::Datasets).collect::<Vec<_>>(),
            vec![
                "silva-nr99",
                "silva-nr99-filtered",
                "silva-nr99-filtered-515f-806r",
            ]
        );
    }

    #[test]
    fn every_artifact_tag_names_a_dataset() {
        let r = default_registry();
        for (_, locator) in r.artifacts.iter() {
            let tag = locator.rsplit(':').next().unwrap();
            assert!(r.datasets.get(tag).is_some(), "untagged dataset: {tag}");
        }
    }
}
