use crate::common::*;

use serde::Serializer;

/* Integers above this lose precision as f64 */
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct HistorySummary {
    #[serde(serialize_with = "serialize_earnings")]
    pub total_earnings: f64,
    pub total_orders: usize,
}

#[doc = "Whole amounts go out as JSON integers (`54`), anything else as a float (`54.5`)"]
fn serialize_earnings<S>(total_earnings: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if total_earnings.fract() == 0.0 && total_earnings.abs() < MAX_EXACT_INTEGER {
        serializer.serialize_i64(*total_earnings as i64)
    } else {
        serializer.serialize_f64(*total_earnings)
    }
}
