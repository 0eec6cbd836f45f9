//! # Series Catalogue
//!
//! Maps string keys (canonical codes and short aliases) to series
//! constructors. A catalogue is an explicit value: build one with
//! [`SeriesCatalogue::standard`] or start empty and register only the series
//! a test needs. [`SeriesCatalogue::global`] holds the standard catalogue for
//! the lifetime of the process.
//!
//! Keys are normalized (trimmed, lower-cased) on both registration and
//! lookup. Registering an existing key replaces its constructor in place, so
//! iteration order stays the original registration order.
//!
//! ## Example
//!
//! ```rust
//! use hinge_core::catalogue::SeriesCatalogue;
//!
//! let catalogue = SeriesCatalogue::standard();
//! let series = catalogue.resolve(" 100 ").unwrap();
//! assert_eq!(series.code, "salice_silentia_100");
//!
//! assert!(catalogue.resolve("300").is_err());
//! ```

pub mod salice;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::errors::{HingeError, HingeResult};
use crate::series::HingeSeries;

/// Builds a fresh series instance.
pub type SeriesConstructor = fn() -> HingeSeries;

static STANDARD: Lazy<SeriesCatalogue> = Lazy::new(SeriesCatalogue::standard);

/// Key -> constructor registry, in registration order.
#[derive(Debug, Clone, Default)]
pub struct SeriesCatalogue {
    entries: Vec<(String, SeriesConstructor)>,
}

impl SeriesCatalogue {
    /// An empty catalogue.
    pub fn new() -> Self {
        SeriesCatalogue::default()
    }

    /// Catalogue with every built-in series and its aliases.
    pub fn standard() -> Self {
        let mut catalogue = SeriesCatalogue::new();
        catalogue.register(salice::SILENTIA_100, salice::silentia_100);
        catalogue.register("salice_100", salice::silentia_100);
        catalogue.register("100", salice::silentia_100);
        catalogue.register(salice::SILENTIA_200_94, salice::silentia_200_94);
        catalogue.register("salice_200_94", salice::silentia_200_94);
        catalogue.register("200-94", salice::silentia_200_94);
        catalogue
    }

    /// Process-wide standard catalogue, built on first use.
    pub fn global() -> &'static SeriesCatalogue {
        &STANDARD
    }

    /// Register `constructor` under `key`. An existing key is silently replaced.
    pub fn register(&mut self, key: &str, constructor: SeriesConstructor) {
        let key = normalize_key(key);
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = constructor,
            None => self.entries.push((key, constructor)),
        }
    }

    /// Builder form of [`register`](Self::register).
    pub fn with(mut self, key: &str, constructor: SeriesConstructor) -> Self {
        self.register(key, constructor);
        self
    }

    /// Construct the series registered under `key`.
    pub fn resolve(&self, key: &str) -> HingeResult<HingeSeries> {
        let normalized = normalize_key(key);
        match self.entries.iter().find(|(existing, _)| *existing == normalized) {
            Some((_, constructor)) => {
                let series = constructor();
                debug!(key = %normalized, code = %series.code, "resolved hinge series");
                Ok(series)
            }
            None => Err(HingeError::unknown_series(normalized, self.keys())),
        }
    }

    /// Registered keys in registration order.
    pub fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|(key, _)| key.clone()).collect()
    }

    /// Registered keys sorted for display.
    pub fn sorted_keys(&self) -> Vec<String> {
        let mut keys = self.keys();
        keys.sort();
        keys
    }

    /// One fresh instance per distinct series code, in registration order.
    ///
    /// Aliases of an already-seen code are skipped.
    pub fn instantiate_all(&self) -> Vec<HingeSeries> {
        let mut series: Vec<HingeSeries> = Vec::new();
        for (_, constructor) in &self.entries {
            let candidate = constructor();
            if !series.iter().any(|s| s.code == candidate.code) {
                series.push(candidate);
            }
        }
        series
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_keys() {
        let catalogue = SeriesCatalogue::standard();
        for key in ["salice_silentia_100", "salice_100", "100"] {
            assert_eq!(catalogue.resolve(key).unwrap().code, salice::SILENTIA_100);
        }
        for key in ["salice_silentia_200_94", "salice_200_94", "200-94"] {
            assert_eq!(catalogue.resolve(key).unwrap().code, salice::SILENTIA_200_94);
        }
        assert_eq!(catalogue.len(), 6);
    }

    #[test]
    fn test_key_normalization() {
        let catalogue = SeriesCatalogue::standard();
        assert!(catalogue.resolve("  SALICE_Silentia_100\n").is_ok());
        assert!(catalogue.resolve(" 200-94 ").is_ok());

        let custom = SeriesCatalogue::new().with("  MiXeD  ", salice::silentia_100);
        assert_eq!(custom.keys(), vec!["mixed".to_string()]);
    }

    #[test]
    fn test_unknown_key_lists_available() {
        let catalogue = SeriesCatalogue::standard();
        let err = catalogue.resolve("Nope").unwrap_err();
        match err {
            HingeError::UnknownSeries { key, available } => {
                assert_eq!(key, "nope");
                assert_eq!(available, catalogue.keys());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_reregistration_replaces_in_place() {
        let mut catalogue = SeriesCatalogue::new()
            .with("a", salice::silentia_100)
            .with("b", salice::silentia_100);
        catalogue.register("A", salice::silentia_200_94);

        assert_eq!(catalogue.keys(), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(catalogue.resolve("a").unwrap().code, salice::SILENTIA_200_94);
    }

    #[test]
    fn test_resolve_returns_fresh_instances() {
        let catalogue = SeriesCatalogue::standard();
        let mut first = catalogue.resolve("100").unwrap();
        first.min_k_mm = 0.0;
        let second = catalogue.resolve("100").unwrap();
        assert_eq!(second.min_k_mm, 3.0);
    }

    #[test]
    fn test_instantiate_all_skips_aliases() {
        let codes: Vec<String> = SeriesCatalogue::standard()
            .instantiate_all()
            .into_iter()
            .map(|s| s.code)
            .collect();
        assert_eq!(codes, vec![salice::SILENTIA_100.to_string(), salice::SILENTIA_200_94.to_string()]);
    }

    #[test]
    fn test_sorted_keys() {
        let keys = SeriesCatalogue::standard().sorted_keys();
        assert_eq!(keys.first().map(String::as_str), Some("100"));
        assert!(keys.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_global_is_standard() {
        assert_eq!(SeriesCatalogue::global().keys(), SeriesCatalogue::standard().keys());
        assert!(SeriesCatalogue::new().is_empty());
    }
}
