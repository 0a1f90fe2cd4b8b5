pub mod aggregated_row;
pub mod bar_chart_data;
pub mod chart_image;
pub mod history_summary;
pub mod monthly_row;
pub mod popular_product;
