/*
Author      : Seunghwan Shin
Create date : 2025-10-00
Description : 판매 이력(history) API 를 집계해서 요약/차트를 제공하는 리포트 서버

History     : 2025-10-00 Seunghwan Shin       # [v.1.0.0] first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod errors;

mod enums;

mod dto;

mod repository;
use repository::history_repository_impl::*;

mod env_configuration;

mod traits;

mod model;
use model::{
    configs::{chart_config::*, total_config::*},
    report::report_settings::*,
};

mod utils_modules;
use utils_modules::{logger_utils::*, time_utils::*};

mod service;
use service::{aggregation_service_impl::*, chart_service_impl::*, report_service_impl::*};

mod controller;
use controller::main_controller::*;

#[cfg(test)]
mod test_support;

#[tokio::main]
async fn main() {
    /* 전역로거 설정 및 초기 설정 */
    dotenv().ok();
    let _logger_handle: LoggerHandle = set_global_logger();

    info!("Sales history report program start!");

    let total_config: &TotalConfig = get_total_config_info();

    /* Upstream history API connection */
    let history_repository: HistoryRepositoryImpl =
        HistoryRepositoryImpl::new(*total_config.upstream().timeout_secs()).unwrap_or_else(|e| {
            let err_msg: &str = "[main] An issue occurred while initializing history_repository.";
            error!("{} {:?}", err_msg, e);
            panic!("{} {:?}", err_msg, e)
        });

    let report_settings: ReportSettings =
        ReportSettings::from_config(total_config).unwrap_or_else(|e| {
            let err_msg: &str = "[main] An issue occurred while resolving report settings.";
            error!("{} {:?}", err_msg, e);
            panic!("{} {:?}", err_msg, e)
        });

    /* 의존 주입 */
    let chart_config: &ChartConfig = get_chart_config_info();
    let chart_service: ChartServiceImpl =
        ChartServiceImpl::new(*chart_config.width(), *chart_config.height());
    let aggregation_service: AggregationServiceImpl =
        AggregationServiceImpl::new(*total_config.report().max_window_weeks());

    let report_service: ReportServiceImpl<
        HistoryRepositoryImpl,
        ChartServiceImpl,
        AggregationServiceImpl,
        SystemClock,
    > = ReportServiceImpl::new(
        history_repository,
        chart_service,
        aggregation_service,
        SystemClock,
        report_settings,
    );

    let main_controller: MainController<
        ReportServiceImpl<HistoryRepositoryImpl, ChartServiceImpl, AggregationServiceImpl, SystemClock>,
    > = MainController::new(Arc::new(report_service));

    main_controller
        .main_task(get_server_config_info().bind_addr())
        .await
        .unwrap_or_else(|e| {
            error!("{:?}", e);
            panic!("{:?}", e)
        });
}
