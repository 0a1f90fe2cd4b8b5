use crate::common::*;

use std::sync::Mutex;

use crate::dto::bar_chart_data::*;
use crate::enums::image_encoding::*;
use crate::errors::report_error::*;
use crate::model::history::history_record::*;
use crate::model::report::report_settings::*;
use crate::service::{aggregation_service_impl::*, report_service_impl::*};
use crate::traits::repository_traits::history_repository::*;
use crate::traits::service_traits::chart_service::*;
use crate::utils_modules::{time_utils::*, traits::*};

pub const PRIVATE_ENDPOINT: &str = "http://upstream.test/api/history";
pub const PUBLIC_ENDPOINT: &str = "http://upstream.test/api/history/public";
pub const STUB_PNG: &[u8] = b"\x89PNG\r\n\x1a\nstub-chart";

pub type StubReportService =
    ReportServiceImpl<StubHistoryRepository, StubChartService, AggregationServiceImpl, FixedClock>;

#[derive(Debug, Clone)]
pub enum StubResponse {
    Records(Vec<HistoryRecord>),
    Unavailable,
    Malformed,
}

/* (endpoint, forwarded token) of every upstream call */
pub type CallLog = Arc<Mutex<Vec<(String, Option<String>)>>>;

#[derive(Debug, new)]
pub struct StubHistoryRepository {
    response: StubResponse,
    calls: CallLog,
}

#[async_trait]
impl HistoryRepository for StubHistoryRepository {
    async fn fetch_histories(
        &self,
        endpoint: &str,
        auth_token: Option<&str>,
    ) -> Result<Vec<HistoryRecord>, ReportError> {
        self.calls
            .lock()
            .unwrap()
            .push((endpoint.to_string(), auth_token.map(String::from)));

        match &self.response {
            StubResponse::Records(records) => Ok(records.clone()),
            StubResponse::Unavailable => Err(ReportError::UpstreamUnavailable(
                "stub upstream responded with 503".to_string(),
            )),
            StubResponse::Malformed => Err(ReportError::MalformedResponse(
                "stub upstream returned an object".to_string(),
            )),
        }
    }
}

#[derive(Debug, new)]
pub struct StubChartService {
    rendered: Arc<Mutex<Vec<BarChartData>>>,
}

#[async_trait]
impl ChartService for StubChartService {
    async fn generate_bar_chart(&self, chart_data: BarChartData) -> Result<Vec<u8>, ReportError> {
        if chart_data.categories.is_empty() {
            return Err(ReportError::NoData(format!(
                "Nothing to draw for '{}'",
                chart_data.title
            )));
        }

        self.rendered.lock().unwrap().push(chart_data);
        Ok(STUB_PNG.to_vec())
    }
}

#[derive(Debug, Clone, Copy, new)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.now
    }
}

pub fn history(order_id: &str, date: &str, quantity: i64, id: &str, name: &str, price: f64) -> HistoryRecord {
    HistoryRecord::new(
        order_id.to_string(),
        date.to_string(),
        quantity,
        HistoryProduct::new(id.to_string(), name.to_string(), price),
    )
}

#[doc = "Rose 2 + Tulip 3 + Rose 1, all in March 2024"]
pub fn flower_histories() -> Vec<HistoryRecord> {
    vec![
        history("1", "2024-03-05T08:00:00.000Z", 2, "p-rose", "Rose", 10.0),
        history("2", "2024-03-06T08:00:00.000Z", 3, "p-tulip", "Tulip", 8.0),
        history("3", "2024-03-06T09:30:00.000Z", 1, "p-rose", "Rose", 10.0),
    ]
}

pub fn test_settings() -> ReportSettings {
    ReportSettings::new(
        PRIVATE_ENDPOINT.to_string(),
        PUBLIC_ENDPOINT.to_string(),
        10,
        5,
        7,
        fixed_offset_from_minutes(345).unwrap(),
        ImageEncoding::Base64,
    )
}

#[derive(Debug)]
pub struct StubHarness {
    pub service: StubReportService,
    pub calls: CallLog,
    pub rendered: Arc<Mutex<Vec<BarChartData>>>,
}

pub fn stub_report_service(response: StubResponse, now: DateTime<Utc>) -> StubHarness {
    let calls: CallLog = Arc::new(Mutex::new(Vec::new()));
    let rendered: Arc<Mutex<Vec<BarChartData>>> = Arc::new(Mutex::new(Vec::new()));

    let service: StubReportService = ReportServiceImpl::new(
        StubHistoryRepository::new(response, Arc::clone(&calls)),
        StubChartService::new(Arc::clone(&rendered)),
        AggregationServiceImpl::new(520),
        FixedClock::new(now),
        test_settings(),
    );

    StubHarness {
        service,
        calls,
        rendered,
    }
}
