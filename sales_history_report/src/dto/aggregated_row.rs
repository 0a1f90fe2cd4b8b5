use crate::common::*;

#[doc = "One (category, summed quantity) pair from a group-and-sum"]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct AggregatedRow {
    pub name: String,
    pub total_sold: u64,
}
