use crate::common::*;

use crate::dto::{
    aggregated_row::*, history_summary::*, monthly_row::*, popular_product::*,
};
use crate::enums::month::*;
use crate::errors::report_error::*;
use crate::model::history::flat_record::*;
use crate::traits::service_traits::aggregation_service::*;
use crate::utils_modules::time_utils::*;

/* The trailing window grows by one week per step */
const WINDOW_STEP_DAYS: u64 = 7;

#[derive(Debug, Clone, new)]
pub struct AggregationServiceImpl {
    max_window_weeks: u64,
}

impl AggregationServiceImpl {
    #[doc = r#"
        Sums quantity per product name.

        Rows come out in order of first appearance, then a stable sort puts the
        largest totals first, so equal totals keep their input order.
    "#]
    fn sum_quantity_by_name<'a, I>(&self, records: I) -> Vec<AggregatedRow>
    where
        I: IntoIterator<Item = &'a FlatRecord>,
    {
        let mut totals: IndexMap<&'a str, u64> = IndexMap::new();

        for record in records {
            *totals.entry(record.name.as_str()).or_insert(0) += record.quantity;
        }

        let mut rows: Vec<AggregatedRow> = totals
            .into_iter()
            .map(|(name, total_sold)| AggregatedRow::new(name.to_string(), total_sold))
            .collect();

        rows.sort_by(|a, b| b.total_sold.cmp(&a.total_sold));
        rows
    }

    #[doc = "Sums quantity per (id, name), keeping the latest order date of each group"]
    fn group_popular_candidates(&self, records: &[FlatRecord]) -> Vec<PopularProduct> {
        let mut groups: IndexMap<(&str, &str), (u64, NaiveDate)> = IndexMap::new();

        for record in records {
            let entry: &mut (u64, NaiveDate) = groups
                .entry((record.id.as_str(), record.name.as_str()))
                .or_insert((0, record.date));

            entry.0 += record.quantity;
            if record.date > entry.1 {
                entry.1 = record.date;
            }
        }

        let mut candidates: Vec<PopularProduct> = groups
            .into_iter()
            .map(|((id, name), (total_sold, date))| {
                PopularProduct::new(id.to_string(), name.to_string(), total_sold, date)
            })
            .collect();

        candidates.sort_by(|a, b| b.total_sold.cmp(&a.total_sold));
        candidates
    }
}

impl AggregationService for AggregationServiceImpl {
    fn total_summary(&self, records: &[FlatRecord]) -> HistorySummary {
        let total_earnings: f64 = records
            .iter()
            .map(|record| record.quantity as f64 * record.price)
            .sum();

        let total_orders: usize = records
            .iter()
            .map(|record| record.order_id.as_str())
            .collect::<HashSet<&str>>()
            .len();

        HistorySummary::new(total_earnings, total_orders)
    }

    fn top_selling(&self, records: &[FlatRecord], limit: usize) -> Vec<AggregatedRow> {
        let mut rows: Vec<AggregatedRow> = self.sum_quantity_by_name(records);
        rows.truncate(limit);
        rows
    }

    fn monthly_totals(&self, records: &[FlatRecord]) -> Vec<MonthlyRow> {
        /* every month gets a slot, so labels can never drift onto the wrong month */
        let mut totals: [u64; 12] = [0; 12];

        for record in records {
            totals[record.date.month0() as usize] += record.quantity;
        }

        (1..=12u32)
            .zip(totals)
            .map(|(month, total_sold)| {
                MonthlyRow::new(
                    month,
                    month_short_label(month).unwrap_or_default().to_string(),
                    total_sold,
                )
            })
            .collect()
    }

    fn current_month_top_selling(
        &self,
        records: &[FlatRecord],
        local_now: DateTime<FixedOffset>,
        limit: usize,
    ) -> Vec<AggregatedRow> {
        let this_month: Vec<FlatRecord> = records
            .iter()
            .filter(|record| {
                record.date.month() == local_now.month() && record.date.year() == local_now.year()
            })
            .cloned()
            .collect();

        self.top_selling(&this_month, limit)
    }

    fn month_totals(
        &self,
        records: &[FlatRecord],
        month: u32,
    ) -> Result<Vec<AggregatedRow>, ReportError> {
        let month: u32 = validate_month(month)?;

        Ok(self.sum_quantity_by_name(
            records.iter().filter(|record| record.date.month() == month),
        ))
    }

    fn popular_products(
        &self,
        records: &[FlatRecord],
        today: NaiveDate,
        target: usize,
    ) -> Result<Vec<PopularProduct>, ReportError> {
        if target == 0 {
            return Ok(Vec::new());
        }

        let candidates: Vec<PopularProduct> = self.group_popular_candidates(records);

        /* no window can ever hold more products than exist */
        if candidates.len() < target {
            return Err(ReportError::InsufficientData(format!(
                "{} popular products requested but only {} distinct products were ever ordered",
                target,
                candidates.len()
            )));
        }

        for week in 1..=self.max_window_weeks {
            let window_start: NaiveDate = match minus_days(today, week * WINDOW_STEP_DAYS) {
                Some(window_start) => window_start,
                None => break,
            };

            let in_window: Vec<&PopularProduct> = candidates
                .iter()
                .filter(|candidate| candidate.date >= window_start)
                .collect();

            if in_window.len() >= target {
                info!(
                    "[AggregationServiceImpl->popular_products] {} products found within {} days",
                    in_window.len(),
                    week * WINDOW_STEP_DAYS + 1
                );

                return Ok(in_window.into_iter().take(target).cloned().collect());
            }
        }

        Err(ReportError::InsufficientData(format!(
            "fewer than {} products were ordered within the last {} weeks",
            target, self.max_window_weeks
        )))
    }
}
