//! Simulated damage analysis.
//!
//! Stands in for a real vision backend: picks 1-2 damage types at random
//! from the catalog, fabricates a confidence score and persists the result
//! to the history store before handing it back. The artificial delay keeps
//! callers honest about showing a pending state.

use std::thread;
use std::time::Duration;

use chrono::{SecondsFormat, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::catalog::damage::{self, DetectedDamage};
use crate::error::Result;
use crate::store::HistoryStore;

/// Default simulated latency for one analysis.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

/// One completed scan. Created here, persisted by the history store and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub scan_id: String,
    /// ISO-8601, recorded at analysis time.
    pub timestamp: String,
    /// Opaque reference to the submitted image; never validated here.
    pub image_url: String,
    pub detected_damages: Vec<DetectedDamage>,
    /// Percentage in [70, 99].
    pub confidence: u8,
}

pub struct Analyzer {
    catalog: Vec<DetectedDamage>,
    rng: StdRng,
    delay: Duration,
    last_id_ms: i64,
}

impl Analyzer {
    pub fn new(delay: Duration) -> Self {
        Self::with_rng(StdRng::from_os_rng(), delay)
    }

    /// A fixed seed gives a reproducible damage selection; used by tests
    /// and the `--seed` flag.
    pub fn seeded(seed: u64, delay: Duration) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), delay)
    }

    fn with_rng(rng: StdRng, delay: Duration) -> Self {
        Analyzer {
            catalog: damage::catalog(),
            rng,
            delay,
            last_id_ms: 0,
        }
    }

    /// Swap out the damage catalog. Tests use this to cover catalogs
    /// shorter than the draw count.
    pub fn with_catalog(mut self, catalog: Vec<DetectedDamage>) -> Self {
        self.catalog = catalog;
        self
    }

    /// Run one simulated analysis and persist the result.
    ///
    /// The append to `store` completes before this returns, so a follow-up
    /// `list()` always observes the new scan. A failed append propagates
    /// and the result is not persisted.
    pub fn analyze(&mut self, store: &mut HistoryStore, image_url: &str) -> Result<ScanResult> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }

        let detected_damages = self.pick_damages();
        let confidence = self.rng.random_range(70..=99);
        let scan_id = self.next_scan_id();
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

        let result = ScanResult {
            scan_id,
            timestamp,
            image_url: image_url.to_string(),
            detected_damages,
            confidence,
        };

        store.append(&result)?;
        Ok(result)
    }

    /// Draw 1-2 distinct damage types without replacement. A catalog
    /// shorter than the draw count yields fewer findings, never an error.
    fn pick_damages(&mut self) -> Vec<DetectedDamage> {
        let want = self.rng.random_range(1..=2usize);
        let mut pool = self.catalog.clone();
        let mut picked = Vec::with_capacity(want);

        for _ in 0..want {
            if pool.is_empty() {
                break;
            }
            let index = self.rng.random_range(0..pool.len());
            picked.push(pool.swap_remove(index));
        }

        picked
    }

    /// Millisecond timestamps collide when two scans land in the same
    /// millisecond; bump past the last issued id to keep ids unique.
    fn next_scan_id(&mut self) -> String {
        let mut now = Utc::now().timestamp_millis();
        if now <= self.last_id_ms {
            now = self.last_id_ms + 1;
        }
        self.last_id_ms = now;
        now.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tempfile::TempDir;

    fn test_store() -> (HistoryStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = HistoryStore::new(dir.path().join("history.json"));
        (store, dir)
    }

    #[test]
    fn returns_one_or_two_distinct_damages() {
        let (mut store, _dir) = test_store();
        let mut analyzer = Analyzer::seeded(7, Duration::ZERO);

        for _ in 0..50 {
            let result = analyzer.analyze(&mut store, "photo.jpg").unwrap();

            assert!(!result.detected_damages.is_empty());
            assert!(result.detected_damages.len() <= 2);

            let ids: HashSet<&str> = result
                .detected_damages
                .iter()
                .map(|d| d.id.as_str())
                .collect();
            assert_eq!(ids.len(), result.detected_damages.len());
        }
    }

    #[test]
    fn confidence_stays_in_range() {
        let (mut store, _dir) = test_store();
        let mut analyzer = Analyzer::seeded(42, Duration::ZERO);

        for _ in 0..50 {
            let result = analyzer.analyze(&mut store, "photo.jpg").unwrap();
            assert!((70..=99).contains(&result.confidence));
        }
    }

    #[test]
    fn result_is_persisted_before_return() {
        let (mut store, _dir) = test_store();
        let mut analyzer = Analyzer::seeded(1, Duration::ZERO);

        let result = analyzer.analyze(&mut store, "photo.jpg").unwrap();

        let found = store.find_by_id(&result.scan_id);
        assert_eq!(found, Some(result));
    }

    #[test]
    fn rapid_scans_get_distinct_ids() {
        let (mut store, _dir) = test_store();
        let mut analyzer = Analyzer::seeded(3, Duration::ZERO);

        let first = analyzer.analyze(&mut store, "a.jpg").unwrap();
        let second = analyzer.analyze(&mut store, "b.jpg").unwrap();
        let third = analyzer.analyze(&mut store, "c.jpg").unwrap();

        let ids: HashSet<String> = [first.scan_id, second.scan_id, third.scan_id]
            .into_iter()
            .collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn single_entry_catalog_yields_one_damage() {
        let (mut store, _dir) = test_store();
        let only = crate::catalog::damage::catalog().swap_remove(0);
        let mut analyzer = Analyzer::seeded(9, Duration::ZERO).with_catalog(vec![only.clone()]);

        for _ in 0..10 {
            let result = analyzer.analyze(&mut store, "photo.jpg").unwrap();
            assert_eq!(result.detected_damages, vec![only.clone()]);
        }
    }

    #[test]
    fn empty_catalog_yields_empty_findings() {
        let (mut store, _dir) = test_store();
        let mut analyzer = Analyzer::seeded(9, Duration::ZERO).with_catalog(Vec::new());

        let result = analyzer.analyze(&mut store, "photo.jpg").unwrap();
        assert!(result.detected_damages.is_empty());
    }

    #[test]
    fn timestamp_is_iso_8601() {
        let (mut store, _dir) = test_store();
        let mut analyzer = Analyzer::seeded(5, Duration::ZERO);

        let result = analyzer.analyze(&mut store, "photo.jpg").unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(&result.timestamp).is_ok());
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let (mut store_a, _dir_a) = test_store();
        let (mut store_b, _dir_b) = test_store();

        let mut a = Analyzer::seeded(11, Duration::ZERO);
        let mut b = Analyzer::seeded(11, Duration::ZERO);

        let result_a = a.analyze(&mut store_a, "photo.jpg").unwrap();
        let result_b = b.analyze(&mut store_b, "photo.jpg").unwrap();

        assert_eq!(result_a.detected_damages, result_b.detected_damages);
        assert_eq!(result_a.confidence, result_b.confidence);
    }
}
