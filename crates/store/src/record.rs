//! The currency record held by the store.

use ratebook_shared::CurrencyId;
use serde::{Deserialize, Serialize};

/// One currency entry in the store.
///
/// Serializes with the wire field names (`currencyCode`, `conversionRate`).
/// The id is whatever the creating client supplied, including nothing at all,
/// and is omitted from JSON when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyRecord {
    /// Caller-assigned identifier, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CurrencyId>,
    /// Short currency code, conventionally three letters.
    pub currency_code: String,
    /// Country the currency belongs to.
    pub country: String,
    /// Units of this currency equal to one unit of the base currency.
    pub conversion_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_with_wire_names() {
        let record = CurrencyRecord {
            id: Some(CurrencyId::new(1)),
            currency_code: "CDN".to_string(),
            country: "Canada".to_string(),
            conversion_rate: 1.0,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "currencyCode": "CDN",
                "country": "Canada",
                "conversionRate": 1.0
            })
        );
    }

    #[test]
    fn test_record_without_id_omits_the_field() {
        let record = CurrencyRecord {
            id: None,
            currency_code: "EUR".to_string(),
            country: "Eurozone".to_string(),
            conversion_rate: 0.68,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_record_deserializes_wire_names() {
        let record: CurrencyRecord = serde_json::from_str(
            r#"{"id": 2, "currencyCode": "USD", "country": "United States of America", "conversionRate": 0.75}"#,
        )
        .unwrap();

        assert_eq!(record.id, Some(CurrencyId::new(2)));
        assert_eq!(record.currency_code, "USD");
        assert_eq!(record.country, "United States of America");
        assert!((record.conversion_rate - 0.75).abs() < f64::EPSILON);
    }
}
