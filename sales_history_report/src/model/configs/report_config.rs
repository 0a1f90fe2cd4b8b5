use crate::common::*;

use crate::enums::image_encoding::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
#[serde(default)]
pub struct ReportConfig {
    pub top_n: usize,
    pub popular_graph_count: usize,
    pub popular_detail_count: usize,
    pub max_window_weeks: u64,
    pub utc_offset_minutes: i32,
    pub image_encoding: ImageEncoding,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            popular_graph_count: 5,
            popular_detail_count: 7,
            max_window_weeks: 520,
            utc_offset_minutes: 345,
            image_encoding: ImageEncoding::Base64,
        }
    }
}
