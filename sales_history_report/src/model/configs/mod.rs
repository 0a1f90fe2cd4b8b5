pub mod chart_config;
pub mod report_config;
pub mod server_config;
pub mod total_config;
pub mod upstream_config;
