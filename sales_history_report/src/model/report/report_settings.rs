use crate::common::*;

use crate::enums::image_encoding::*;
use crate::model::configs::total_config::*;
use crate::utils_modules::time_utils::*;

#[doc = r#"
    Per-route parameters the report service needs, resolved once at startup
    from `TotalConfig` and injected, so handlers never touch global state.
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct ReportSettings {
    pub history_endpoint: String,
    pub public_history_endpoint: String,
    pub top_n: usize,
    pub popular_graph_count: usize,
    pub popular_detail_count: usize,
    pub local_offset: FixedOffset,
    pub image_encoding: ImageEncoding,
}

impl ReportSettings {
    pub fn from_config(total_config: &TotalConfig) -> anyhow::Result<Self> {
        let local_offset: FixedOffset =
            fixed_offset_from_minutes(*total_config.report().utc_offset_minutes())?;

        Ok(ReportSettings::new(
            total_config.upstream().history_endpoint().to_string(),
            total_config.upstream().public_history_endpoint().to_string(),
            *total_config.report().top_n(),
            *total_config.report().popular_graph_count(),
            *total_config.report().popular_detail_count(),
            local_offset,
            *total_config.report().image_encoding(),
        ))
    }
}
