use crate::common::*;

use crate::dto::{
    aggregated_row::*, bar_chart_data::*, history_summary::*, monthly_row::*,
    popular_product::*,
};
use crate::enums::{image_encoding::*, month::*};
use crate::errors::report_error::*;
use crate::model::history::{flat_record::*, history_record::*};
use crate::model::report::report_settings::*;
use crate::traits::repository_traits::history_repository::*;
use crate::traits::service_traits::{aggregation_service::*, chart_service::*, report_service::*};
use crate::utils_modules::{time_utils::*, traits::*};

const PLANTS_AXIS: &str = "Plants";
const MONTHS_AXIS: &str = "Months";
const TOTAL_SOLD_AXIS: &str = "Total Sold";

#[derive(Debug, new)]
pub struct ReportServiceImpl<R, C, A, K>
where
    R: HistoryRepository,
    C: ChartService,
    A: AggregationService,
    K: Clock,
{
    history_repository: R,
    chart_service: C,
    aggregation_service: A,
    clock: K,
    settings: ReportSettings,
}

impl<R, C, A, K> ReportServiceImpl<R, C, A, K>
where
    R: HistoryRepository,
    C: ChartService,
    A: AggregationService,
    K: Clock,
{
    #[doc = "One upstream call, then flattening into per-request records"]
    async fn load_records(
        &self,
        endpoint: &str,
        auth_token: Option<&str>,
    ) -> Result<Vec<FlatRecord>, ReportError> {
        let histories: Vec<HistoryRecord> = self
            .history_repository
            .fetch_histories(endpoint, auth_token)
            .await?;

        flatten_records(histories)
    }

    async fn load_private_records(
        &self,
        auth_token: Option<&str>,
    ) -> Result<Vec<FlatRecord>, ReportError> {
        self.load_records(&self.settings.history_endpoint, auth_token)
            .await
    }

    #[doc = "Current time on the fixed local clock (UTC+5:45 by default)"]
    fn local_now(&self) -> DateTime<FixedOffset> {
        convert_fixed_local_from_utc(self.clock.now_utc(), self.settings.local_offset)
    }

    async fn render_rows(
        &self,
        title: &str,
        rows: &[AggregatedRow],
    ) -> Result<Vec<u8>, ReportError> {
        self.chart_service
            .generate_bar_chart(BarChartData::from_aggregated_rows(
                title,
                PLANTS_AXIS,
                TOTAL_SOLD_AXIS,
                rows,
            ))
            .await
    }
}

#[async_trait]
impl<R, C, A, K> ReportService for ReportServiceImpl<R, C, A, K>
where
    R: HistoryRepository,
    C: ChartService,
    A: AggregationService,
    K: Clock,
{
    async fn history_details(
        &self,
        auth_token: Option<&str>,
    ) -> Result<HistorySummary, ReportError> {
        let records: Vec<FlatRecord> = self.load_private_records(auth_token).await?;
        Ok(self.aggregation_service.total_summary(&records))
    }

    async fn top_selling_chart(&self, auth_token: Option<&str>) -> Result<Vec<u8>, ReportError> {
        let records: Vec<FlatRecord> = self.load_private_records(auth_token).await?;
        let rows: Vec<AggregatedRow> = self
            .aggregation_service
            .top_selling(&records, self.settings.top_n);

        self.render_rows(&format!("Top {} most selling", self.settings.top_n), &rows)
            .await
    }

    async fn popular_chart(&self, auth_token: Option<&str>) -> Result<Vec<u8>, ReportError> {
        let records: Vec<FlatRecord> = self.load_private_records(auth_token).await?;
        let today: NaiveDate = self.local_now().date_naive();

        let products: Vec<PopularProduct> = self.aggregation_service.popular_products(
            &records,
            today,
            self.settings.popular_graph_count,
        )?;

        self.chart_service
            .generate_bar_chart(BarChartData::from_popular_products(
                "Popular Products",
                PLANTS_AXIS,
                TOTAL_SOLD_AXIS,
                &products,
            ))
            .await
    }

    async fn popular_details(&self) -> Result<Vec<PopularProduct>, ReportError> {
        let records: Vec<FlatRecord> = self
            .load_records(&self.settings.public_history_endpoint, None)
            .await?;
        let today: NaiveDate = self.local_now().date_naive();

        self.aggregation_service.popular_products(
            &records,
            today,
            self.settings.popular_detail_count,
        )
    }

    async fn current_month_chart(
        &self,
        auth_token: Option<&str>,
    ) -> Result<Vec<u8>, ReportError> {
        let records: Vec<FlatRecord> = self.load_private_records(auth_token).await?;
        let local_now: DateTime<FixedOffset> = self.local_now();

        let rows: Vec<AggregatedRow> = self.aggregation_service.current_month_top_selling(
            &records,
            local_now,
            self.settings.top_n,
        );

        let title: String = format!(
            "Top {} most selling {}, {}",
            self.settings.top_n,
            month_full_name(local_now.month()).unwrap_or_default(),
            local_now.year()
        );

        self.render_rows(&title, &rows).await
    }

    async fn month_chart(
        &self,
        auth_token: Option<&str>,
        month: u32,
    ) -> Result<Vec<u8>, ReportError> {
        /* reject a bad month before spending an upstream call */
        let month: u32 = validate_month(month)?;

        let records: Vec<FlatRecord> = self.load_private_records(auth_token).await?;
        let rows: Vec<AggregatedRow> = self.aggregation_service.month_totals(&records, month)?;

        let title: String = format!(
            "Items sold on {}",
            month_full_name(month).unwrap_or_default()
        );

        self.render_rows(&title, &rows).await
    }

    async fn monthly_sell_chart(&self, auth_token: Option<&str>) -> Result<Vec<u8>, ReportError> {
        let records: Vec<FlatRecord> = self.load_private_records(auth_token).await?;
        let rows: Vec<MonthlyRow> = self.aggregation_service.monthly_totals(&records);

        self.chart_service
            .generate_bar_chart(BarChartData::from_monthly_rows(
                "Total items sold each month",
                MONTHS_AXIS,
                TOTAL_SOLD_AXIS,
                &rows,
            ))
            .await
    }

    fn default_image_encoding(&self) -> ImageEncoding {
        self.settings.image_encoding
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;
    use chrono::TimeZone;

    fn march_2024() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 20, 6, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn history_details_forwards_token_to_private_endpoint() {
        let harness: StubHarness =
            stub_report_service(StubResponse::Records(flower_histories()), march_2024());

        let summary: HistorySummary = harness
            .service
            .history_details(Some("token-1"))
            .await
            .unwrap();

        assert_eq!(summary, HistorySummary::new(54.0, 3));
        assert_eq!(
            *harness.calls.lock().unwrap(),
            vec![(PRIVATE_ENDPOINT.to_string(), Some("token-1".to_string()))]
        );
    }

    #[tokio::test]
    async fn popular_details_reads_public_endpoint_without_token() {
        let histories: Vec<HistoryRecord> = (0..7)
            .map(|idx| {
                history(
                    &idx.to_string(),
                    "2024-03-18",
                    idx + 1,
                    &format!("p-{}", idx),
                    &format!("Plant {}", idx),
                    1.0,
                )
            })
            .collect();
        let harness: StubHarness =
            stub_report_service(StubResponse::Records(histories), march_2024());

        let products: Vec<PopularProduct> = harness.service.popular_details().await.unwrap();

        assert_eq!(products.len(), 7);
        assert_eq!(products[0].name, "Plant 6");
        assert_eq!(
            *harness.calls.lock().unwrap(),
            vec![(PUBLIC_ENDPOINT.to_string(), None)]
        );
    }

    #[tokio::test]
    async fn current_month_title_uses_local_clock() {
        /* 18:30 UTC on Mar 31 is already April 1st at UTC+5:45 */
        let now: DateTime<Utc> = Utc.with_ymd_and_hms(2024, 3, 31, 18, 30, 0).unwrap();
        let mut histories: Vec<HistoryRecord> = flower_histories();
        histories.push(history("4", "2024-04-01T01:00:00.000Z", 4, "p-lily", "Lily", 5.0));
        let harness: StubHarness = stub_report_service(StubResponse::Records(histories), now);

        harness.service.current_month_chart(None).await.unwrap();

        let rendered = harness.rendered.lock().unwrap();
        assert_eq!(rendered[0].title, "Top 10 most selling April, 2024");
        assert_eq!(rendered[0].categories, vec!["Lily".to_string()]);
    }

    #[tokio::test]
    async fn month_chart_validates_before_calling_upstream() {
        let harness: StubHarness =
            stub_report_service(StubResponse::Records(flower_histories()), march_2024());

        let result: Result<Vec<u8>, ReportError> = harness.service.month_chart(None, 13).await;

        assert!(matches!(result, Err(ReportError::InvalidParameter(_))));
        assert!(harness.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn month_chart_totals_for_march() {
        let harness: StubHarness =
            stub_report_service(StubResponse::Records(flower_histories()), march_2024());

        harness.service.month_chart(None, 3).await.unwrap();

        let rendered = harness.rendered.lock().unwrap();
        assert_eq!(rendered[0].title, "Items sold on March");
        assert_eq!(rendered[0].values.iter().sum::<u64>(), 6);
    }

    #[tokio::test]
    async fn monthly_chart_always_has_twelve_bars() {
        let harness: StubHarness =
            stub_report_service(StubResponse::Records(flower_histories()), march_2024());

        harness.service.monthly_sell_chart(None).await.unwrap();

        let rendered = harness.rendered.lock().unwrap();
        assert_eq!(rendered[0].categories.len(), 12);
        assert_eq!(rendered[0].values[2], 6);
        assert!(!rendered[0].rotate_labels);
    }

    #[tokio::test]
    async fn malformed_record_is_reported_as_malformed_response() {
        let histories: Vec<HistoryRecord> =
            vec![history("1", "not-a-date", 1, "p-1", "Rose", 1.0)];
        let harness: StubHarness =
            stub_report_service(StubResponse::Records(histories), march_2024());

        let result: Result<HistorySummary, ReportError> =
            harness.service.history_details(None).await;

        assert!(matches!(result, Err(ReportError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn popular_chart_with_too_few_products_is_insufficient_data() {
        let harness: StubHarness =
            stub_report_service(StubResponse::Records(flower_histories()), march_2024());

        let result: Result<Vec<u8>, ReportError> = harness.service.popular_chart(None).await;

        assert!(matches!(result, Err(ReportError::InsufficientData(_))));
        assert!(harness.rendered.lock().unwrap().is_empty());
    }
}
