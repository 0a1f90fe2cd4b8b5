use crate::common::*;

use crate::dto::{aggregated_row::*, monthly_row::*, popular_product::*};

#[doc = r#"
    Everything the chart service needs to draw one bar chart.

    `categories[i]` labels the bar of height `values[i]`.
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct BarChartData {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub categories: Vec<String>,
    pub values: Vec<u64>,
    pub rotate_labels: bool,
}

impl BarChartData {
    pub fn from_aggregated_rows(
        title: &str,
        x_desc: &str,
        y_desc: &str,
        rows: &[AggregatedRow],
    ) -> Self {
        BarChartData::new(
            title.to_string(),
            x_desc.to_string(),
            y_desc.to_string(),
            rows.iter().map(|row| row.name.clone()).collect(),
            rows.iter().map(|row| row.total_sold).collect(),
            true,
        )
    }

    pub fn from_popular_products(
        title: &str,
        x_desc: &str,
        y_desc: &str,
        products: &[PopularProduct],
    ) -> Self {
        BarChartData::new(
            title.to_string(),
            x_desc.to_string(),
            y_desc.to_string(),
            products.iter().map(|product| product.name.clone()).collect(),
            products.iter().map(|product| product.total_sold).collect(),
            true,
        )
    }

    /* month labels are short enough to stay horizontal */
    pub fn from_monthly_rows(title: &str, x_desc: &str, y_desc: &str, rows: &[MonthlyRow]) -> Self {
        BarChartData::new(
            title.to_string(),
            x_desc.to_string(),
            y_desc.to_string(),
            rows.iter().map(|row| row.label.clone()).collect(),
            rows.iter().map(|row| row.total_sold).collect(),
            false,
        )
    }
}
