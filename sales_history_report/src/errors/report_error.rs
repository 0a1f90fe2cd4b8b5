use crate::common::*;

#[doc = r#"
    Failures a report request can end with.

    Every variant is terminal for the current request; nothing is retried.
    The HTTP layer turns each variant into its own status code and a JSON
    body of the form `{"error": "..."}`.
"#]
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("malformed upstream response: {0}")]
    MalformedResponse(String),

    #[error("insufficient data: {0}")]
    InsufficientData(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("no data: {0}")]
    NoData(String),

    #[error("chart rendering failed: {0}")]
    Render(String),
}

impl ReportError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ReportError::UpstreamUnavailable(_) | ReportError::MalformedResponse(_) => {
                StatusCode::BAD_GATEWAY
            }
            ReportError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            ReportError::InsufficientData(_) | ReportError::NoData(_) => StatusCode::NOT_FOUND,
            ReportError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ReportError {
    #[doc = r#"
        Body text returned to the caller.

        Upstream and rendering failures carry endpoint urls, client error text
        and `[Type->fn]` tags; those stay in the log and the caller only sees a
        fixed message. Parameter and data errors are built from request input
        and aggregation results, so their detail is kept.
    "#]
    pub fn client_message(&self) -> String {
        match self {
            ReportError::UpstreamUnavailable(_) => "upstream unavailable".to_string(),
            ReportError::MalformedResponse(_) => "malformed upstream response".to_string(),
            ReportError::InvalidParameter(detail) => format!("invalid parameter: {}", detail),
            ReportError::InsufficientData(detail) => format!("insufficient data: {}", detail),
            ReportError::NoData(_) => "no data to chart".to_string(),
            ReportError::Render(_) => "chart rendering failed".to_string(),
        }
    }
}

impl IntoResponse for ReportError {
    fn into_response(self) -> Response {
        let status: StatusCode = self.status_code();

        if status.is_server_error() {
            error!("[ReportError->into_response] {} : {}", status, self);
        } else {
            warn!("[ReportError->into_response] {} : {}", status, self);
        }

        (status, Json(json!({ "error": self.client_message() }))).into_response()
    }
}
