use crate::common::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct MonthlyRow {
    pub month: u32,
    pub label: String,
    pub total_sold: u64,
}
