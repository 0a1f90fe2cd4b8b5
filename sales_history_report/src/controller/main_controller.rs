use crate::common::*;

use crate::controller::report_controller::*;

use crate::traits::service_traits::report_service::*;

#[derive(Debug, new)]
pub struct MainController<S: ReportService + 'static> {
    report_service: Arc<S>,
}

impl<S: ReportService + 'static> MainController<S> {
    #[doc = r#"
        HTTP 서버를 띄우는 핵심 함수로, 종료 신호가 올 때까지 요청을 처리한다.

        1. `bind_addr` 에 TCP 리스너를 연다
        2. 리포트 라우터(`build_router`)를 붙여서 서빙한다
        3. 요청 단위 오류는 각 핸들러가 JSON 응답으로 바꾸므로, 여기서 돌려주는 오류는 바인드/서빙 실패뿐이다

        # Arguments
        * `bind_addr` - ex) `0.0.0.0:5000`

        # Returns
        * `anyhow::Result<()>` - 정상 종료 시 Ok(()), 치명적 오류 시 Err
    "#]
    pub async fn main_task(&self, bind_addr: &str) -> anyhow::Result<()> {
        let listener: tokio::net::TcpListener = tokio::net::TcpListener::bind(bind_addr)
            .await
            .with_context(|| {
                format!(
                    "[MainController->main_task] Failed to bind listener on {}",
                    bind_addr
                )
            })?;

        info!("Sales history report server listening on {}", bind_addr);

        let router: Router = build_router(Arc::clone(&self.report_service));

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("[MainController->main_task] HTTP server terminated abnormally")?;

        info!("Sales history report server stopped");

        Ok(())
    }
}

#[doc = "Ctrl+C 수신 시 graceful shutdown"]
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("[shutdown_signal] Failed to listen for ctrl_c: {:?}", e);
    }

    info!("Shutdown signal received");
}
