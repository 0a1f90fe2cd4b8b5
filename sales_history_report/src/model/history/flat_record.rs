use crate::common::*;

use crate::errors::report_error::*;
use crate::model::history::history_record::*;
use crate::utils_modules::time_utils::*;

#[doc = r#"
    A history record with its product fields promoted to the top level.

    Lives only for the duration of one request; every aggregation works on a
    slice of these.
"#]
#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct FlatRecord {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u64,
    pub date: NaiveDate,
    pub order_id: String,
}

impl TryFrom<HistoryRecord> for FlatRecord {
    type Error = ReportError;

    fn try_from(record: HistoryRecord) -> Result<Self, Self::Error> {
        let HistoryRecord {
            order_id,
            date,
            quantity,
            product,
        } = record;

        let quantity: u64 = u64::try_from(quantity).map_err(|_| {
            ReportError::MalformedResponse(format!(
                "order {} has a negative quantity: {}",
                order_id, quantity
            ))
        })?;

        if !product.price.is_finite() || product.price < 0.0 {
            return Err(ReportError::MalformedResponse(format!(
                "order {} has an invalid price: {}",
                order_id, product.price
            )));
        }

        let date: NaiveDate = parse_record_date(&date).ok_or_else(|| {
            ReportError::MalformedResponse(format!(
                "order {} has an unparseable date: '{}'",
                order_id, date
            ))
        })?;

        Ok(FlatRecord::new(
            product.id,
            product.name,
            product.price,
            quantity,
            date,
            order_id,
        ))
    }
}

#[doc = "Flattens every record, failing on the first one that breaks an invariant"]
pub fn flatten_records(records: Vec<HistoryRecord>) -> Result<Vec<FlatRecord>, ReportError> {
    records.into_iter().map(FlatRecord::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(order_id: &str, date: &str, quantity: i64, price: f64) -> HistoryRecord {
        HistoryRecord::new(
            order_id.to_string(),
            date.to_string(),
            quantity,
            HistoryProduct::new("p-1".to_string(), "Rose".to_string(), price),
        )
    }

    #[test]
    fn promotes_product_fields() {
        let flat: FlatRecord = FlatRecord::try_from(history("o-1", "2024-03-05T08:00:00Z", 2, 10.0)).unwrap();

        assert_eq!(flat.id(), "p-1");
        assert_eq!(flat.name(), "Rose");
        assert_eq!(*flat.price(), 10.0);
        assert_eq!(*flat.quantity(), 2);
        assert_eq!(*flat.date(), NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(flat.order_id(), "o-1");
    }

    #[test]
    fn rejects_broken_invariants() {
        let broken: Vec<HistoryRecord> = vec![
            history("o-1", "2024-03-05", -1, 10.0),
            history("o-2", "2024-03-05", 1, -3.0),
            history("o-3", "yesterday", 1, 3.0),
        ];

        for record in broken {
            assert!(matches!(
                FlatRecord::try_from(record),
                Err(ReportError::MalformedResponse(_))
            ));
        }
    }

    #[test]
    fn flatten_stops_at_first_bad_record() {
        let records: Vec<HistoryRecord> = vec![
            history("o-1", "2024-03-05", 1, 10.0),
            history("o-2", "not-a-date", 1, 10.0),
        ];

        assert!(flatten_records(records).is_err());
    }
}
