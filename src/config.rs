use std::{env, path::PathBuf};
use thiserror::Error;

use crate::bank::SelectionPolicy;

pub const DEFAULT_MANIFEST: &str = "data/manifest.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    /// directory the manifest's `file` entries are resolved against
    pub root: PathBuf,

    /// manifest location, relative to `root` unless absolute
    pub manifest: PathBuf,

    pub policy: SelectionPolicy,

    /// questions written per chapter
    pub count: usize,

    /// fixed RNG seed, entropy when unset
    pub seed: Option<u64>,
}

impl Config {
    pub fn new(root: impl Into<PathBuf>, policy: SelectionPolicy) -> Self {
        Self {
            root: root.into(),
            manifest: PathBuf::from(DEFAULT_MANIFEST),
            policy,
            count: policy.default_count(),
            seed: None,
        }
    }

    /// Reads `QBANK_*` variables from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let policy = match lookup("QBANK_POLICY") {
            Some(value) => value.parse::<SelectionPolicy>().map_err(|_| ConfigError::Invalid {
                var: "QBANK_POLICY",
                value,
                expected: "one of placeholder, tiered, coin-flip",
            })?,
            None => SelectionPolicy::default(),
        };

        let mut config = Self::new(lookup("QBANK_ROOT").unwrap_or_else(|| ".".to_string()), policy);

        if let Some(manifest) = lookup("QBANK_MANIFEST") {
            config.manifest = PathBuf::from(manifest);
        }

        if let Some(value) = lookup("QBANK_COUNT") {
            config.count = match value.trim().parse::<usize>() {
                Ok(count) if count > 0 => count,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "QBANK_COUNT",
                        value,
                        expected: "a positive integer",
                    })
                }
            };
        }

        if let Some(value) = lookup("QBANK_SEED") {
            config.seed = Some(value.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                var: "QBANK_SEED",
                value,
                expected: "an unsigned 64-bit integer",
            })?);
        }

        Ok(config)
    }

    pub fn manifest_path(&self) -> PathBuf {
        if self.manifest.is_absolute() {
            self.manifest.clone()
        } else {
            self.root.join(&self.manifest)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        let config = Config::from_lookup(lookup_in(&[])).unwrap();
        assert_eq!(config.policy, SelectionPolicy::Tiered);
        assert_eq!(config.count, 300);
        assert_eq!(config.seed, None);
        assert_eq!(config.manifest_path(), PathBuf::from("./data/manifest.json"));
    }

    #[test]
    fn placeholder_policy_defaults_to_200() {
        let config = Config::from_lookup(lookup_in(&[("QBANK_POLICY", "placeholder")])).unwrap();
        assert_eq!(config.count, 200);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = Config::from_lookup(lookup_in(&[
            ("QBANK_ROOT", "/srv/bank"),
            ("QBANK_POLICY", "coin-flip"),
            ("QBANK_COUNT", "25"),
            ("QBANK_SEED", "42"),
        ]))
        .unwrap();
        assert_eq!(config.policy, SelectionPolicy::CoinFlip);
        assert_eq!(config.count, 25);
        assert_eq!(config.seed, Some(42));
        assert_eq!(
            config.manifest_path(),
            PathBuf::from("/srv/bank/data/manifest.json")
        );
    }

    #[test]
    fn bad_values_are_rejected() {
        let err = Config::from_lookup(lookup_in(&[("QBANK_COUNT", "0")])).unwrap_err();
        assert!(err.to_string().contains("QBANK_COUNT"));

        assert!(Config::from_lookup(lookup_in(&[("QBANK_SEED", "-1")])).is_err());
        assert!(Config::from_lookup(lookup_in(&[("QBANK_POLICY", "random")])).is_err());
    }
}
