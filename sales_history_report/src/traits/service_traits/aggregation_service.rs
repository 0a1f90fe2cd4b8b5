use crate::common::*;

use crate::dto::{
    aggregated_row::*, history_summary::*, monthly_row::*, popular_product::*,
};
use crate::errors::report_error::*;
use crate::model::history::flat_record::*;

#[doc = r#"
    Pure aggregation recipes over flattened history records.

    None of these read the clock: operations that depend on the current date
    take it as an argument, so identical input always yields identical output.
"#]
pub trait AggregationService: Send + Sync {
    #[doc = "Σ quantity × price and the number of distinct order ids"]
    fn total_summary(&self, records: &[FlatRecord]) -> HistorySummary;

    #[doc = "Quantity summed per product name, descending, ties in input order, at most `limit` rows"]
    fn top_selling(&self, records: &[FlatRecord], limit: usize) -> Vec<AggregatedRow>;

    #[doc = "Quantity summed per calendar month; always twelve rows, January first"]
    fn monthly_totals(&self, records: &[FlatRecord]) -> Vec<MonthlyRow>;

    #[doc = "Top selling products restricted to the month and year of `local_now`"]
    fn current_month_top_selling(
        &self,
        records: &[FlatRecord],
        local_now: DateTime<FixedOffset>,
        limit: usize,
    ) -> Vec<AggregatedRow>;

    #[doc = "Quantity summed per product name for `month` of any year, descending, unlimited"]
    fn month_totals(
        &self,
        records: &[FlatRecord],
        month: u32,
    ) -> Result<Vec<AggregatedRow>, ReportError>;

    #[doc = r#"
        Best sellers among products ordered inside the smallest trailing window
        (8, 15, 22, ... days ending at `today`) that holds at least `target`
        products.

        # Errors
        * `InsufficientData` - fewer than `target` products exist, or the window
          cap is reached first
    "#]
    fn popular_products(
        &self,
        records: &[FlatRecord],
        today: NaiveDate,
        target: usize,
    ) -> Result<Vec<PopularProduct>, ReportError>;
}
