//! Schedule reconciliation against the persistent cache.
//!
//! A batch is regenerated exactly once per distinct criteria value; every
//! later page load with the same criteria reuses the stored batch.

use log::{debug, error, warn};
use rand::Rng;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::ScheduleConfig;
use crate::criteria::{CriteriaFingerprint, SearchCriteria};
use crate::generator::generate;
use crate::render::{ViewSink, render_schedule};
use crate::sailing::Sailing;
use crate::store::{ScheduleStore, StoreKey};

/// Where a reconciled batch came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleOrigin {
    Generated,
    Cached,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    pub sailings: Vec<Sailing>,
    pub origin: ScheduleOrigin,
}

/// A freshly generated batch could not be written back. The batch is still
/// usable for the current page.
#[derive(Debug, Error)]
#[error("schedule could not be persisted: {source}")]
pub struct PersistError<E>
where
    E: std::error::Error + 'static,
{
    #[source]
    pub source: E,
    pub sailings: Vec<Sailing>,
}

/// Schedule engine bound to a store and a generation config.
pub struct ScheduleEngine<S>
where
    S: ScheduleStore,
{
    store: S,
    config: ScheduleConfig,
}

impl<S> ScheduleEngine<S>
where
    S: ScheduleStore,
{
    pub const fn new(store: S, config: ScheduleConfig) -> Self {
        Self { store, config }
    }

    /// Return the batch for `criteria`, reusing the stored one when the
    /// stored fingerprint matches exactly and regenerating otherwise.
    ///
    /// Unreadable stored records count as a cache miss.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError`] carrying the generated batch when it cannot
    /// be written back.
    pub fn reconcile(
        &self,
        criteria: &SearchCriteria,
        rng: &mut impl Rng,
    ) -> Result<Reconciliation, PersistError<S::Error>> {
        let current = criteria.fingerprint();
        let previous: Option<CriteriaFingerprint> = self.read(StoreKey::LastCriteria);

        if previous.as_ref() == Some(&current) {
            if let Some(sailings) = self.read::<Vec<Sailing>>(StoreKey::ScheduleData) {
                debug!("schedule cache hit ({} sailings)", sailings.len());
                return Ok(Reconciliation {
                    sailings,
                    origin: ScheduleOrigin::Cached,
                });
            }
            warn!("criteria unchanged but schedule data missing; regenerating");
        } else {
            debug!("schedule cache miss; criteria changed or absent");
        }

        let sailings = generate(criteria, &self.config, rng);
        if let Err(source) = self.persist(&current, &sailings) {
            return Err(PersistError { source, sailings });
        }
        Ok(Reconciliation {
            sailings,
            origin: ScheduleOrigin::Generated,
        })
    }

    /// Reconcile and hand the rendered view to `sink`. Persist failures are
    /// logged and the generated batch is shown anyway.
    pub fn present<V>(
        &self,
        criteria: &SearchCriteria,
        rng: &mut impl Rng,
        sink: &mut V,
    ) -> Vec<Sailing>
    where
        V: ViewSink,
    {
        let sailings = match self.reconcile(criteria, rng) {
            Ok(reconciled) => reconciled.sailings,
            Err(err) => {
                error!("{err}");
                err.sailings
            }
        };
        sink.show_schedule(render_schedule(criteria, &sailings));
        sailings
    }

    fn persist(
        &self,
        fingerprint: &CriteriaFingerprint,
        sailings: &[Sailing],
    ) -> Result<(), S::Error> {
        self.store.put(StoreKey::ScheduleData, &sailings)?;
        self.store.put(StoreKey::LastCriteria, fingerprint)
    }

    fn read<T>(&self, key: StoreKey) -> Option<T>
    where
        T: DeserializeOwned,
    {
        match self.store.get(key) {
            Ok(record) => record,
            Err(err) => {
                warn!("ignoring unreadable {} record: {err}", key.as_str());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::{CargoPeriod, ContainerType};
    use crate::render::ScheduleView;
    use crate::store::MemoryStore;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use serde::Serialize;
    use std::fmt;

    fn criteria() -> SearchCriteria {
        SearchCriteria {
            departure_terminal: "Qingdao".to_string(),
            arrival_terminal: "Prague".to_string(),
            cargo_ready_date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            cargo_period: CargoPeriod::OneMonth,
            container_number: 2,
            container_type: ContainerType::Forty,
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        views: Vec<ScheduleView>,
    }

    impl ViewSink for RecordingSink {
        fn show_schedule(&mut self, view: ScheduleView) {
            self.views.push(view);
        }

        fn show_notice(&mut self, _notice: &str) {}
    }

    #[derive(Debug)]
    struct Full;

    impl fmt::Display for Full {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("quota exceeded")
        }
    }

    impl std::error::Error for Full {}

    /// Store that reads nothing and refuses every write.
    struct FullStore;

    impl ScheduleStore for FullStore {
        type Error = Full;

        fn get<T>(&self, _key: StoreKey) -> Result<Option<T>, Self::Error>
        where
            T: DeserializeOwned,
        {
            Ok(None)
        }

        fn put<T>(&self, _key: StoreKey, _record: &T) -> Result<(), Self::Error>
        where
            T: Serialize,
        {
            Err(Full)
        }
    }

    #[test]
    fn first_visit_generates_and_persists() {
        let store = MemoryStore::new();
        let engine = ScheduleEngine::new(store.clone(), ScheduleConfig::default());
        let mut rng = SmallRng::seed_from_u64(1);
        let result = engine.reconcile(&criteria(), &mut rng).unwrap();
        assert_eq!(result.origin, ScheduleOrigin::Generated);
        assert_eq!(result.sailings.len(), 6);
        let stored: CriteriaFingerprint = store.get(StoreKey::LastCriteria).unwrap().unwrap();
        assert_eq!(stored, criteria().fingerprint());
    }

    #[test]
    fn second_visit_reuses_cache() {
        let engine = ScheduleEngine::new(MemoryStore::new(), ScheduleConfig::default());
        let mut rng = SmallRng::seed_from_u64(2);
        let first = engine.reconcile(&criteria(), &mut rng).unwrap();
        let second = engine.reconcile(&criteria(), &mut rng).unwrap();
        assert_eq!(second.origin, ScheduleOrigin::Cached);
        assert_eq!(first.sailings, second.sailings);
    }

    #[test]
    fn corrupt_cache_is_regenerated() {
        let store = MemoryStore::new();
        let engine = ScheduleEngine::new(store.clone(), ScheduleConfig::default());
        let mut rng = SmallRng::seed_from_u64(3);
        engine.reconcile(&criteria(), &mut rng).unwrap();
        store.insert_raw(StoreKey::ScheduleData, "[{\"id\":");
        let again = engine.reconcile(&criteria(), &mut rng).unwrap();
        assert_eq!(again.origin, ScheduleOrigin::Generated);
        assert!(store.get::<Vec<Sailing>>(StoreKey::ScheduleData).is_ok());

        store.insert_raw(StoreKey::LastCriteria, "garbage");
        let again = engine.reconcile(&criteria(), &mut rng).unwrap();
        assert_eq!(again.origin, ScheduleOrigin::Generated);
    }

    #[test]
    fn persist_failure_still_yields_batch() {
        let engine = ScheduleEngine::new(FullStore, ScheduleConfig::default());
        let mut rng = SmallRng::seed_from_u64(4);
        let err = engine.reconcile(&criteria(), &mut rng).unwrap_err();
        assert_eq!(err.sailings.len(), 6);
        assert!(err.to_string().contains("quota exceeded"));

        let mut sink = RecordingSink::default();
        let shown = engine.present(&criteria(), &mut rng, &mut sink);
        assert_eq!(shown.len(), 6);
        assert_eq!(sink.views.len(), 1);
        assert_eq!(sink.views[0].rows.len(), 6);
    }

    #[test]
    fn present_renders_cached_batch() {
        let engine = ScheduleEngine::new(MemoryStore::new(), ScheduleConfig::default());
        let mut rng = SmallRng::seed_from_u64(5);
        let mut sink = RecordingSink::default();
        let first = engine.present(&criteria(), &mut rng, &mut sink);
        let second = engine.present(&criteria(), &mut rng, &mut sink);
        assert_eq!(first, second);
        assert_eq!(sink.views[0], sink.views[1]);
    }
}
