use crate::common::*;

use crate::errors::report_error::*;
use crate::model::history::history_record::*;
use crate::traits::repository_traits::history_repository::*;

#[derive(Debug, Clone, Getters)]
#[getset(get = "pub")]
pub struct HistoryRepositoryImpl {
    client: Client,
}

impl HistoryRepositoryImpl {
    pub fn new(timeout_secs: u64) -> anyhow::Result<Self> {
        let client: Client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("[HistoryRepositoryImpl->new] Failed to build the upstream http client")?;

        Ok(HistoryRepositoryImpl { client })
    }
}

#[async_trait]
impl HistoryRepository for HistoryRepositoryImpl {
    #[doc = "Function that fetches history records from the upstream API"]
    async fn fetch_histories(
        &self,
        endpoint: &str,
        auth_token: Option<&str>,
    ) -> Result<Vec<HistoryRecord>, ReportError> {
        let mut request: reqwest::RequestBuilder = self.client.get(endpoint);

        if let Some(token) = auth_token {
            request = request.header(AUTH_TOKEN_HEADER, token);
        }

        let response: reqwest::Response = request.send().await.map_err(|e| {
            ReportError::UpstreamUnavailable(format!(
                "[HistoryRepositoryImpl->fetch_histories] GET {} failed: {}",
                endpoint, e
            ))
        })?;

        /* an error body must never be parsed as data */
        let status: reqwest::StatusCode = response.status();
        if !status.is_success() {
            return Err(ReportError::UpstreamUnavailable(format!(
                "[HistoryRepositoryImpl->fetch_histories] GET {} responded with {}",
                endpoint, status
            )));
        }

        let body: Vec<u8> = response
            .bytes()
            .await
            .map_err(|e| {
                ReportError::UpstreamUnavailable(format!(
                    "[HistoryRepositoryImpl->fetch_histories] Failed to read body from {}: {}",
                    endpoint, e
                ))
            })?
            .to_vec();

        let histories: Vec<HistoryRecord> = serde_json::from_slice(&body).map_err(|e| {
            ReportError::MalformedResponse(format!(
                "[HistoryRepositoryImpl->fetch_histories] Unexpected body from {}: {}",
                endpoint, e
            ))
        })?;

        info!(
            "[HistoryRepositoryImpl->fetch_histories] {} records fetched from {}",
            histories.len(),
            endpoint
        );

        Ok(histories)
    }
}
