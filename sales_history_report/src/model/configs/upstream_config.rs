use crate::common::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct UpstreamConfig {
    /* token-forwarding endpoint used by every private route */
    pub history_endpoint: String,
    /* endpoint used by `/popular`, called without a token */
    pub public_history_endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}
