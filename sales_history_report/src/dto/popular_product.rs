use crate::common::*;

#[doc = r#"
    A product grouped by (id, name) for the trailing-window popularity report.

    `date` is the most recent order date of the group; it decides whether the
    product falls inside the current window.
"#]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct PopularProduct {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub total_sold: u64,
    pub date: NaiveDate,
}
