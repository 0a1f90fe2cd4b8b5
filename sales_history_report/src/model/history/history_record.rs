use crate::common::*;

#[doc = r#"
    One order event as served by the upstream history API.

    ```json
    {
        "orderId": "65f0c1...",
        "date": "2024-03-05T10:11:12.000Z",
        "quantity": 2,
        "product": { "_id": "65a1...", "name": "Rose", "price": 10 }
    }
    ```
"#]
#[derive(Debug, Clone, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct HistoryRecord {
    #[serde(rename = "orderId", deserialize_with = "deserialize_id")]
    pub order_id: String,
    pub date: String,
    pub quantity: i64,
    pub product: HistoryProduct,
}

#[derive(Debug, Clone, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct HistoryProduct {
    #[serde(rename = "_id", alias = "id", deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    pub price: f64,
}

/* ids arrive as Mongo object-id strings or as plain integers */
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Integer(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Integer(id) => id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_upstream_shape() {
        let raw: &str = r#"[
            {"orderId": "o-1", "date": "2024-03-05T10:00:00.000Z", "quantity": 2,
             "product": {"_id": "p-1", "name": "Rose", "price": 10.5, "stock": 4}},
            {"orderId": 17, "date": "2024-03-06", "quantity": 1,
             "product": {"id": 9, "name": "Tulip", "price": 8}}
        ]"#;

        let records: Vec<HistoryRecord> = serde_json::from_str(raw).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].order_id(), "o-1");
        assert_eq!(records[0].product().id(), "p-1");
        assert_eq!(*records[0].product().price(), 10.5);
        assert_eq!(records[1].order_id(), "17");
        assert_eq!(records[1].product().id(), "9");
        assert_eq!(*records[1].product().price(), 8.0);
    }

    #[test]
    fn missing_product_is_rejected() {
        let raw: &str = r#"[{"orderId": "o-1", "date": "2024-03-05", "quantity": 2}]"#;
        assert!(serde_json::from_str::<Vec<HistoryRecord>>(raw).is_err());
    }
}
