//! Environment configuration, read once at start.

use anyhow::Context;

use almacen_inventory::CategoryRegistry;
use almacen_observability::LogFormat;

pub const ENV_CATEGORIES: &str = "ALMACEN_CATEGORIES";
pub const ENV_LOG_FORMAT: &str = "ALMACEN_LOG_FORMAT";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Seed categories overriding the defaults (comma-separated in the env).
    pub categories: Option<Vec<String>>,
    pub log_format: LogFormat,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Settings::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let categories = lookup(ENV_CATEGORIES).map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        });

        let log_format = match lookup(ENV_LOG_FORMAT) {
            Some(raw) => raw
                .parse::<LogFormat>()
                .with_context(|| format!("invalid {ENV_LOG_FORMAT}"))?,
            None => LogFormat::default(),
        };

        Ok(Self {
            categories,
            log_format,
        })
    }

    /// Seed registry; falls back to the defaults when the override is empty.
    pub fn registry(&self) -> CategoryRegistry {
        match &self.categories {
            Some(names) if !names.is_empty() => CategoryRegistry::from_names(names.iter().cloned()),
            Some(_) => {
                tracing::warn!("{ENV_CATEGORIES} is empty; using default categories");
                CategoryRegistry::with_defaults()
            }
            None => CategoryRegistry::with_defaults(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let settings = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.registry(), CategoryRegistry::with_defaults());
    }

    #[test]
    fn categories_override_is_trimmed_and_deduplicated() {
        let vars = [(ENV_CATEGORIES, " Cables, Estructuras ,,Cables")];
        let settings = Settings::from_lookup(lookup(&vars)).unwrap();
        let registry = settings.registry();
        let names: Vec<&str> = registry.iter().map(|c| c.as_str()).collect();
        assert_eq!(names, vec!["Cables", "Estructuras"]);
    }

    #[test]
    fn blank_override_falls_back_to_defaults() {
        let settings = Settings::from_lookup(lookup(&[(ENV_CATEGORIES, " , ")])).unwrap();
        assert_eq!(settings.registry(), CategoryRegistry::with_defaults());
    }

    #[test]
    fn bad_log_format_is_an_error() {
        let err = Settings::from_lookup(lookup(&[(ENV_LOG_FORMAT, "xml")])).unwrap_err();
        assert!(err.to_string().contains(ENV_LOG_FORMAT));

        let settings = Settings::from_lookup(lookup(&[(ENV_LOG_FORMAT, "pretty")])).unwrap();
        assert_eq!(settings.log_format, LogFormat::Pretty);
    }
}
