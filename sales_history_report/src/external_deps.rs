pub use axum::{
    Json, Router,
    body::Body,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
pub use base64::{Engine as Base64Engine, engine::general_purpose::STANDARD as BASE64_STANDARD};
pub use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Utc};
pub use flexi_logger::{
    Age, Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger, LoggerHandle, Naming,
    Record,
};
pub use indexmap::IndexMap;
pub use once_cell::sync::Lazy as once_lazy;
pub use reqwest::Client;
