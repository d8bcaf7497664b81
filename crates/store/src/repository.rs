//! In-memory repository for currency records.
//!
//! The store owns the ordered record sequence behind a single reader-writer
//! lock; every operation serializes through it, so the repository is safe to
//! share across the server's worker threads.

use parking_lot::RwLock;
use tracing::debug;

use ratebook_shared::CurrencyId;

use crate::record::CurrencyRecord;

/// Error types for store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A required field was absent or empty on create.
    #[error("Required currency fields are missing")]
    MissingContent,

    /// No record matched the requested id.
    #[error("No currency found for id {0}")]
    NotFound(CurrencyId),
}

/// Input for creating a currency record.
///
/// All fields arrive optional; presence checks happen in
/// [`CurrencyStore::create`] rather than at the deserialization boundary, so
/// an incomplete payload is reported as missing content instead of a parse
/// failure.
#[derive(Debug, Clone, Default)]
pub struct CreateCurrencyInput {
    /// Caller-assigned id, if any. Never generated server-side and never
    /// checked against existing records.
    pub id: Option<CurrencyId>,
    /// Currency code.
    pub currency_code: Option<String>,
    /// Country name.
    pub country: Option<String>,
    /// Conversion rate against the base currency.
    pub conversion_rate: Option<f64>,
}

/// In-memory currency store.
///
/// Records keep insertion order. Nothing is unique, not even ids: `get`
/// returns the first match while `update_rate` and `delete` touch every
/// match.
#[derive(Debug, Default)]
pub struct CurrencyStore {
    records: RwLock<Vec<CurrencyRecord>>,
}

/// A rate of zero or NaN counts as missing, like an absent field.
#[allow(clippy::float_cmp)]
fn is_missing_rate(rate: f64) -> bool {
    rate == 0.0 || rate.is_nan()
}

impl CurrencyStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with the two default currencies: the base
    /// currency (rate 1.0) and US dollars.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            records: RwLock::new(vec![
                CurrencyRecord {
                    id: Some(CurrencyId::new(1)),
                    currency_code: "CDN".to_string(),
                    country: "Canada".to_string(),
                    conversion_rate: 1.0,
                },
                CurrencyRecord {
                    id: Some(CurrencyId::new(2)),
                    currency_code: "USD".to_string(),
                    country: "United States of America".to_string(),
                    conversion_rate: 0.75,
                },
            ]),
        }
    }

    /// Returns every record in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<CurrencyRecord> {
        self.records.read().clone()
    }

    /// Returns the first record whose id matches.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record matches `id`.
    pub fn get(&self, id: CurrencyId) -> Result<CurrencyRecord, StoreError> {
        self.records
            .read()
            .iter()
            .find(|record| record.id == Some(id))
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Validates and appends a new record, returning it as stored.
    ///
    /// The record is appended exactly as supplied: the id is whatever the
    /// caller sent (possibly nothing), and no collision check is made.
    ///
    /// # Errors
    ///
    /// Returns `MissingContent` when `currency_code`, `country`, or
    /// `conversion_rate` is absent or empty; the store is left untouched.
    pub fn create(&self, input: CreateCurrencyInput) -> Result<CurrencyRecord, StoreError> {
        let currency_code = input.currency_code.filter(|code| !code.is_empty());
        let country = input.country.filter(|country| !country.is_empty());
        let conversion_rate = input.conversion_rate.filter(|rate| !is_missing_rate(*rate));

        let (Some(currency_code), Some(country), Some(conversion_rate)) =
            (currency_code, country, conversion_rate)
        else {
            return Err(StoreError::MissingContent);
        };

        let record = CurrencyRecord {
            id: input.id,
            currency_code,
            country,
            conversion_rate,
        };

        let mut records = self.records.write();
        records.push(record.clone());
        debug!(code = %record.currency_code, total = records.len(), "Currency stored");

        Ok(record)
    }

    /// Rewrites the conversion rate of every record matching `id`, leaving
    /// all other fields untouched, and returns the first updated record.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` (with no mutation) if no record matches `id`.
    pub fn update_rate(
        &self,
        id: CurrencyId,
        new_rate: f64,
    ) -> Result<CurrencyRecord, StoreError> {
        let mut records = self.records.write();

        let mut first_updated = None;
        for record in records.iter_mut().filter(|record| record.id == Some(id)) {
            record.conversion_rate = new_rate;
            if first_updated.is_none() {
                first_updated = Some(record.clone());
            }
        }

        if first_updated.is_some() {
            debug!(%id, rate = new_rate, "Conversion rate updated");
        }
        first_updated.ok_or(StoreError::NotFound(id))
    }

    /// Removes every record matching `id`.
    ///
    /// Deleting an id with no matching record is a success and a no-op, so
    /// the operation is idempotent.
    pub fn delete(&self, id: CurrencyId) {
        let mut records = self.records.write();
        let before = records.len();
        records.retain(|record| record.id != Some(id));

        if records.len() < before {
            debug!(%id, removed = before - records.len(), "Currency deleted");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn valid_input() -> CreateCurrencyInput {
        CreateCurrencyInput {
            id: Some(CurrencyId::new(3)),
            currency_code: Some("EUR".to_string()),
            country: Some("Eurozone".to_string()),
            conversion_rate: Some(0.68),
        }
    }

    #[test]
    fn test_seeded_store_has_two_records() {
        let store = CurrencyStore::seeded();
        let records = store.list();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].currency_code, "CDN");
        assert!((records[0].conversion_rate - 1.0).abs() < f64::EPSILON);
        assert_eq!(records[1].currency_code, "USD");
    }

    #[test]
    fn test_every_listed_record_is_gettable() {
        let store = CurrencyStore::seeded();

        for record in store.list() {
            let id = record.id.expect("seed records have ids");
            assert_eq!(store.get(id).unwrap(), record);
        }
    }

    #[test]
    fn test_get_missing_id_is_not_found() {
        let store = CurrencyStore::seeded();
        assert!(matches!(
            store.get(CurrencyId::new(99)),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_create_then_get_returns_all_fields() {
        let store = CurrencyStore::seeded();

        let stored = store.create(valid_input()).unwrap();
        assert_eq!(stored.currency_code, "EUR");
        assert_eq!(stored.country, "Eurozone");

        let fetched = store.get(CurrencyId::new(3)).unwrap();
        assert_eq!(fetched, stored);
        assert_eq!(store.list().len(), 3);
    }

    #[test]
    fn test_create_without_id_appends_idless_record() {
        let store = CurrencyStore::new();

        let stored = store
            .create(CreateCurrencyInput {
                id: None,
                ..valid_input()
            })
            .unwrap();

        assert_eq!(stored.id, None);
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_create_never_deduplicates_ids() {
        let store = CurrencyStore::seeded();

        store
            .create(CreateCurrencyInput {
                id: Some(CurrencyId::new(1)),
                ..valid_input()
            })
            .unwrap();

        assert_eq!(store.list().len(), 3);
        // First match in insertion order wins on lookup.
        assert_eq!(store.get(CurrencyId::new(1)).unwrap().currency_code, "CDN");
    }

    #[rstest]
    #[case::no_code(CreateCurrencyInput { currency_code: None, ..valid_input() })]
    #[case::empty_code(CreateCurrencyInput { currency_code: Some(String::new()), ..valid_input() })]
    #[case::no_country(CreateCurrencyInput { country: None, ..valid_input() })]
    #[case::empty_country(CreateCurrencyInput { country: Some(String::new()), ..valid_input() })]
    #[case::no_rate(CreateCurrencyInput { conversion_rate: None, ..valid_input() })]
    #[case::zero_rate(CreateCurrencyInput { conversion_rate: Some(0.0), ..valid_input() })]
    #[case::nan_rate(CreateCurrencyInput { conversion_rate: Some(f64::NAN), ..valid_input() })]
    fn test_create_rejects_missing_content(#[case] input: CreateCurrencyInput) {
        let store = CurrencyStore::seeded();

        assert!(matches!(
            store.create(input),
            Err(StoreError::MissingContent)
        ));
        assert_eq!(store.list().len(), 2, "rejected create must not mutate");
    }

    #[test]
    fn test_update_rate_changes_only_the_rate() {
        let store = CurrencyStore::seeded();

        let updated = store.update_rate(CurrencyId::new(2), 0.80).unwrap();
        assert_eq!(updated.currency_code, "USD");
        assert_eq!(updated.country, "United States of America");
        assert!((updated.conversion_rate - 0.80).abs() < f64::EPSILON);

        // Repeating with the same rate is idempotent.
        let again = store.update_rate(CurrencyId::new(2), 0.80).unwrap();
        assert_eq!(again, updated);
    }

    #[test]
    fn test_update_rate_touches_every_matching_record() {
        let store = CurrencyStore::seeded();
        store
            .create(CreateCurrencyInput {
                id: Some(CurrencyId::new(2)),
                ..valid_input()
            })
            .unwrap();

        store.update_rate(CurrencyId::new(2), 0.5).unwrap();

        let rates: Vec<f64> = store
            .list()
            .into_iter()
            .filter(|record| record.id == Some(CurrencyId::new(2)))
            .map(|record| record.conversion_rate)
            .collect();
        assert_eq!(rates.len(), 2);
        assert!(rates.iter().all(|rate| (rate - 0.5).abs() < f64::EPSILON));
    }

    #[test]
    fn test_update_rate_missing_id_leaves_store_unchanged() {
        let store = CurrencyStore::seeded();
        let before = store.list();

        assert!(matches!(
            store.update_rate(CurrencyId::new(99), 2.0),
            Err(StoreError::NotFound(_))
        ));
        assert_eq!(store.list(), before);
    }

    #[test]
    fn test_delete_removes_all_matches_and_is_idempotent() {
        let store = CurrencyStore::seeded();
        store
            .create(CreateCurrencyInput {
                id: Some(CurrencyId::new(1)),
                ..valid_input()
            })
            .unwrap();

        store.delete(CurrencyId::new(1));
        assert!(store.list().iter().all(|r| r.id != Some(CurrencyId::new(1))));
        let after_first = store.list();

        // Second delete reports nothing and changes nothing.
        store.delete(CurrencyId::new(1));
        assert_eq!(store.list(), after_first);
    }
}
