use crate::common::*;

use crate::model::configs::{
    chart_config::*, report_config::*, server_config::*, upstream_config::*,
};

use crate::utils_modules::io_utils::*;

use crate::env_configuration::env_config::*;

static TOTAL_CONFIG: once_lazy<TotalConfig> = once_lazy::new(initialize_server_config);

#[doc = "Function to initialize Server configuration information instances"]
pub fn initialize_server_config() -> TotalConfig {
    info!("initialize_server_config() START!");

    match TotalConfig::load(&SERVER_CONFIG_PATH) {
        Ok(mut config) => {
            config.apply_env_overrides(
                get_env_optional(HISTORY_ENDPOINT_ENV),
                get_env_optional(PUBLIC_HISTORY_ENDPOINT_ENV),
            );
            config
        }
        Err(e) => {
            let err_msg: &str = "Failed to convert the data from SERVER_CONFIG_PATH into the TotalConfig structure.";
            error!("[TotalConfig->new] {} {:?}", err_msg, e);
            std::process::exit(1);
        }
    }
}

#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct TotalConfig {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub chart: ChartConfig,
}

#[doc = "전체 설정 정보"]
pub fn get_total_config_info() -> &'static TotalConfig {
    &TOTAL_CONFIG
}

#[doc = "server 설정 정보"]
pub fn get_server_config_info() -> &'static ServerConfig {
    &TOTAL_CONFIG.server
}

#[doc = "chart 설정 정보"]
pub fn get_chart_config_info() -> &'static ChartConfig {
    &TOTAL_CONFIG.chart
}

impl TotalConfig {
    pub fn load(file_path: &str) -> anyhow::Result<Self> {
        read_toml_from_file::<TotalConfig>(file_path)
    }

    #[doc = "END_POINT / END_POINT_2 take precedence over the TOML endpoints"]
    pub fn apply_env_overrides(
        &mut self,
        history_endpoint: Option<String>,
        public_history_endpoint: Option<String>,
    ) {
        if let Some(endpoint) = history_endpoint {
            info!("[TotalConfig->apply_env_overrides] history endpoint overridden by env");
            self.upstream.history_endpoint = endpoint;
        }

        if let Some(endpoint) = public_history_endpoint {
            info!("[TotalConfig->apply_env_overrides] public history endpoint overridden by env");
            self.upstream.public_history_endpoint = endpoint;
        }
    }
}
