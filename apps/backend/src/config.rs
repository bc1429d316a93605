//! Service configuration loaded from the environment

use std::{fmt::Display, str::FromStr};

use anyhow::{anyhow, bail, Context};
use memorise_core::{Granularity, DEFAULT_MAX_CELLS, DEFAULT_MAX_UNITS};

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Upper bound on comparison units per text
    pub max_units: usize,
    /// Upper bound on alignment table cells per comparison
    pub max_cells: usize,
    /// Upper bound on items in one batch request
    pub max_batch_items: usize,
    /// Accuracy percentage a reconstruction needs to pass when the request
    /// does not name its own threshold
    pub default_pass_threshold: u8,
    /// Comparison unit when the request does not name one
    pub default_granularity: Granularity,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            max_units: DEFAULT_MAX_UNITS,
            max_cells: DEFAULT_MAX_CELLS,
            max_batch_items: 50,
            default_pass_threshold: 80,
            default_granularity: Granularity::default(),
        }
    }
}

impl Config {
    /// Load from process environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup, falling back to defaults for
    /// unset keys.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "PORT", defaults.port)?,
            max_units: parse_var(&lookup, "MAX_UNITS", defaults.max_units)?,
            max_cells: parse_var(&lookup, "MAX_CELLS", defaults.max_cells)?,
            max_batch_items: parse_var(&lookup, "MAX_BATCH_ITEMS", defaults.max_batch_items)?,
            default_pass_threshold: parse_var(
                &lookup,
                "DEFAULT_PASS_THRESHOLD",
                defaults.default_pass_threshold,
            )?,
            default_granularity: match lookup("DEFAULT_GRANULARITY") {
                Some(raw) => Granularity::from_str(raw.trim()).ok_or_else(|| {
                    anyhow!("invalid value for DEFAULT_GRANULARITY: {raw:?}")
                })?,
                None => defaults.default_granularity,
            },
        };

        if config.max_units == 0 {
            bail!("MAX_UNITS must be greater than zero");
        }
        // One non-empty reference against an empty candidate needs two cells.
        if config.max_cells < 2 {
            bail!("MAX_CELLS must be at least 2");
        }
        if config.default_pass_threshold > 100 {
            bail!(
                "DEFAULT_PASS_THRESHOLD must be at most 100, got {}",
                config.default_pass_threshold
            );
        }

        Ok(config)
    }

    /// Socket address string to bind.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid value for {key}: {raw:?}")),
        None => {
            tracing::debug!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.addr(), "0.0.0.0:3000");
        assert_eq!(config.max_units, DEFAULT_MAX_UNITS);
        assert_eq!(config.max_cells, DEFAULT_MAX_CELLS);
        assert_eq!(config.max_batch_items, 50);
        assert_eq!(config.default_granularity, Granularity::Grapheme);
        assert_eq!(config.default_pass_threshold, 80);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("MAX_UNITS", "500"),
            ("MAX_CELLS", "100000"),
            ("DEFAULT_PASS_THRESHOLD", " 90 "),
            ("DEFAULT_GRANULARITY", "code_point"),
        ]))
        .unwrap();
        assert_eq!(config.addr(), "127.0.0.1:8080");
        assert_eq!(config.max_units, 500);
        assert_eq!(config.max_cells, 100_000);
        assert_eq!(config.default_granularity, Granularity::CodePoint);
        assert_eq!(config.default_pass_threshold, 90);
    }

    #[test]
    fn test_invalid_number() {
        let error = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(error.to_string().contains("PORT"));
    }

    #[test]
    fn test_threshold_out_of_range() {
        assert!(Config::from_lookup(lookup_from(&[("DEFAULT_PASS_THRESHOLD", "101")])).is_err());
    }

    #[test]
    fn test_invalid_granularity() {
        let error =
            Config::from_lookup(lookup_from(&[("DEFAULT_GRANULARITY", "word")])).unwrap_err();
        assert!(error.to_string().contains("DEFAULT_GRANULARITY"));
    }

    #[test]
    fn test_tiny_max_cells() {
        assert!(Config::from_lookup(lookup_from(&[("MAX_CELLS", "1")])).is_err());
    }

    #[test]
    fn test_zero_max_units() {
        assert!(Config::from_lookup(lookup_from(&[("MAX_UNITS", "0")])).is_err());
    }
}
