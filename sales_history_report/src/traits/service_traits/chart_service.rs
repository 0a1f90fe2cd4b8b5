use crate::common::*;

use crate::dto::bar_chart_data::*;
use crate::errors::report_error::*;

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = "
        Render a bar chart and return it as PNG bytes
        # Arguments
        * `chart_data` - Title, axis labels, one bar per category
        # Errors
        * `NoData` - `chart_data` has no categories
        * `Render` - mismatched input lengths or a drawing/encoding failure
    "]
    async fn generate_bar_chart(&self, chart_data: BarChartData) -> Result<Vec<u8>, ReportError>;
}
