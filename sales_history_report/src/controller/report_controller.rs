use crate::common::*;

use crate::dto::{chart_image::*, history_summary::*, popular_product::*};
use crate::enums::{image_encoding::*, month::*};
use crate::errors::report_error::*;
use crate::traits::repository_traits::history_repository::*;
use crate::traits::service_traits::report_service::*;

#[derive(Debug, Default, Deserialize)]
pub struct GraphParams {
    pub format: Option<ImageEncoding>,
}

#[doc = r#"
    Builds the route table of the service.

    | Route                       | Response                                   |
    |-----------------------------|--------------------------------------------|
    | `/`                         | greeting page                              |
    | `/history/details`          | `{total_earnings, total_orders}`           |
    | `/graph/top10mostselling`   | chart                                      |
    | `/graph/popular`            | chart                                      |
    | `/popular`                  | JSON array of popular products             |
    | `/graph/top10thismonth`     | chart                                      |
    | `/graph/month/{month}`      | chart                                      |
    | `/graph/monthlysell`        | chart                                      |

    Chart routes answer `{"image": "<base64>"}` or a raw PNG depending on
    `?format=` (falling back to the configured default).
"#]
pub fn build_router<S>(report_service: Arc<S>) -> Router
where
    S: ReportService + 'static,
{
    Router::new()
        .route("/", get(say_hi))
        .route("/history/details", get(history_details::<S>))
        .route("/graph/top10mostselling", get(top_selling_graph::<S>))
        .route("/graph/popular", get(popular_graph::<S>))
        .route("/popular", get(popular_products_details::<S>))
        .route("/graph/top10thismonth", get(top_this_month_graph::<S>))
        .route("/graph/month/{month}", get(month_graph::<S>))
        .route("/graph/monthlysell", get(monthly_sell_graph::<S>))
        .with_state(report_service)
}

#[doc = "`x-auth-token` of the incoming request, if any"]
fn extract_auth_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTH_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(String::from)
}

#[doc = "Encodes rendered PNG bytes as requested by the caller"]
fn encode_chart_response(png_bytes: Vec<u8>, encoding: ImageEncoding) -> Response {
    match encoding {
        ImageEncoding::Base64 => {
            Json(ChartImage::new(BASE64_STANDARD.encode(&png_bytes))).into_response()
        }
        ImageEncoding::Png => {
            ([(header::CONTENT_TYPE, "image/png")], png_bytes).into_response()
        }
    }
}

#[doc = r#"
    Image encoding for a chart route: `?format=` when given, otherwise the
    configured default. A query string axum cannot decode (`?format=gif`)
    becomes `InvalidParameter`, so the caller still gets a JSON error body.
"#]
fn requested_encoding<S: ReportService>(
    params: Result<Query<GraphParams>, QueryRejection>,
    report_service: &S,
) -> Result<ImageEncoding, ReportError> {
    let Query(params) = params.map_err(|rejection| {
        ReportError::InvalidParameter(format!(
            "format must be 'base64' or 'png' ({})",
            rejection.body_text()
        ))
    })?;

    Ok(params
        .format
        .unwrap_or_else(|| report_service.default_image_encoding()))
}

async fn say_hi() -> Html<&'static str> {
    Html("<h1>Hi...</h1>")
}

async fn history_details<S: ReportService>(
    State(report_service): State<Arc<S>>,
    headers: HeaderMap,
) -> Result<Json<HistorySummary>, ReportError> {
    let auth_token: Option<String> = extract_auth_token(&headers);
    let summary: HistorySummary = report_service
        .history_details(auth_token.as_deref())
        .await?;

    Ok(Json(summary))
}

async fn top_selling_graph<S: ReportService>(
    State(report_service): State<Arc<S>>,
    headers: HeaderMap,
    params: Result<Query<GraphParams>, QueryRejection>,
) -> Result<Response, ReportError> {
    let encoding: ImageEncoding = requested_encoding(params, report_service.as_ref())?;
    let auth_token: Option<String> = extract_auth_token(&headers);
    let png_bytes: Vec<u8> = report_service
        .top_selling_chart(auth_token.as_deref())
        .await?;

    Ok(encode_chart_response(png_bytes, encoding))
}

async fn popular_graph<S: ReportService>(
    State(report_service): State<Arc<S>>,
    headers: HeaderMap,
    params: Result<Query<GraphParams>, QueryRejection>,
) -> Result<Response, ReportError> {
    let encoding: ImageEncoding = requested_encoding(params, report_service.as_ref())?;
    let auth_token: Option<String> = extract_auth_token(&headers);
    let png_bytes: Vec<u8> = report_service
        .popular_chart(auth_token.as_deref())
        .await?;

    Ok(encode_chart_response(png_bytes, encoding))
}

async fn popular_products_details<S: ReportService>(
    State(report_service): State<Arc<S>>,
) -> Result<Json<Vec<PopularProduct>>, ReportError> {
    let products: Vec<PopularProduct> = report_service.popular_details().await?;
    Ok(Json(products))
}

async fn top_this_month_graph<S: ReportService>(
    State(report_service): State<Arc<S>>,
    headers: HeaderMap,
    params: Result<Query<GraphParams>, QueryRejection>,
) -> Result<Response, ReportError> {
    let encoding: ImageEncoding = requested_encoding(params, report_service.as_ref())?;
    let auth_token: Option<String> = extract_auth_token(&headers);
    let png_bytes: Vec<u8> = report_service
        .current_month_chart(auth_token.as_deref())
        .await?;

    Ok(encode_chart_response(png_bytes, encoding))
}

async fn month_graph<S: ReportService>(
    State(report_service): State<Arc<S>>,
    Path(raw_month): Path<String>,
    headers: HeaderMap,
    params: Result<Query<GraphParams>, QueryRejection>,
) -> Result<Response, ReportError> {
    let encoding: ImageEncoding = requested_encoding(params, report_service.as_ref())?;
    let month: u32 = parse_month_param(&raw_month)?;
    let auth_token: Option<String> = extract_auth_token(&headers);
    let png_bytes: Vec<u8> = report_service
        .month_chart(auth_token.as_deref(), month)
        .await?;

    Ok(encode_chart_response(png_bytes, encoding))
}

async fn monthly_sell_graph<S: ReportService>(
    State(report_service): State<Arc<S>>,
    headers: HeaderMap,
    params: Result<Query<GraphParams>, QueryRejection>,
) -> Result<Response, ReportError> {
    let encoding: ImageEncoding = requested_encoding(params, report_service.as_ref())?;
    let auth_token: Option<String> = extract_auth_token(&headers);
    let png_bytes: Vec<u8> = report_service
        .monthly_sell_chart(auth_token.as_deref())
        .await?;

    Ok(encode_chart_response(png_bytes, encoding))
}
