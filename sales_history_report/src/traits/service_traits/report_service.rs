use crate::common::*;

use crate::dto::{history_summary::*, popular_product::*};
use crate::enums::image_encoding::*;
use crate::errors::report_error::*;

#[async_trait]
pub trait ReportService: Send + Sync {
    async fn history_details(&self, auth_token: Option<&str>)
        -> Result<HistorySummary, ReportError>;

    async fn top_selling_chart(&self, auth_token: Option<&str>) -> Result<Vec<u8>, ReportError>;

    async fn popular_chart(&self, auth_token: Option<&str>) -> Result<Vec<u8>, ReportError>;

    #[doc = "Reads the public endpoint; no token is forwarded"]
    async fn popular_details(&self) -> Result<Vec<PopularProduct>, ReportError>;

    async fn current_month_chart(&self, auth_token: Option<&str>)
        -> Result<Vec<u8>, ReportError>;

    async fn month_chart(
        &self,
        auth_token: Option<&str>,
        month: u32,
    ) -> Result<Vec<u8>, ReportError>;

    async fn monthly_sell_chart(&self, auth_token: Option<&str>) -> Result<Vec<u8>, ReportError>;

    fn default_image_encoding(&self) -> ImageEncoding;
}
