use crate::common::*;

use crate::errors::report_error::*;
use crate::model::history::history_record::*;

#[doc = "Request header carrying the caller's token to the upstream API"]
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

#[async_trait]
pub trait HistoryRepository: Send + Sync {
    #[doc = r#"
        Performs exactly one GET against `endpoint` and returns the parsed
        history records.

        # Arguments
        * `endpoint`   - Upstream history API URL
        * `auth_token` - Forwarded as `x-auth-token` when present

        # Errors
        * `UpstreamUnavailable` - transport failure, timeout or non-2xx status
        * `MalformedResponse`   - body is not an array of history records
    "#]
    async fn fetch_histories(
        &self,
        endpoint: &str,
        auth_token: Option<&str>,
    ) -> Result<Vec<HistoryRecord>, ReportError>;
}
