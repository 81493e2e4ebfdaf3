use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use nd_client::SearchRequest;
use nd_core::{Error, NewsResponse};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::error;

use crate::AppState;

/// Incoming `/api/news` parameters, with the same defaults the upstream
/// request carries.
#[derive(Debug, Deserialize)]
pub struct NewsQuery {
    #[serde(default = "default_q")]
    pub q: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(rename = "sortBy", default = "default_sort_by")]
    pub sort_by: String,
    #[serde(rename = "pageSize", default = "default_page_size")]
    pub page_size: u32,
    #[serde(rename = "searchIn", default = "default_search_in")]
    pub search_in: String,
}

fn default_q() -> String {
    "news".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_sort_by() -> String {
    "relevancy".to_string()
}

fn default_page_size() -> u32 {
    30
}

fn default_search_in() -> String {
    "title,description".to_string()
}

impl From<NewsQuery> for SearchRequest {
    fn from(query: NewsQuery) -> Self {
        Self {
            q: query.q,
            language: query.language,
            sort_by: query.sort_by,
            page_size: query.page_size,
            search_in: query.search_in,
        }
    }
}

/// Pass-through proxy: forward the search upstream with the server-held
/// credential and return the envelope unchanged.
pub async fn get_news(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NewsQuery>,
) -> Result<Json<NewsResponse>, ApiError> {
    let request: SearchRequest = params.into();
    let response = state.source.search(&request).await?;
    Ok(Json(response))
}

/// Maps the pipeline's error kinds onto the proxy's HTTP contract.
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self.0 {
            Error::MissingApiKey => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "message": "Server misconfiguration: NEWS_API_KEY is not set." }),
            ),
            Error::Upstream {
                status,
                status_text,
                detail,
            } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                json!({
                    "message": "Upstream error from NewsAPI",
                    "statusText": status_text,
                    "details": detail,
                }),
            ),
            Error::Transport(err) => (
                StatusCode::BAD_GATEWAY,
                json!({
                    "message": "Failed to fetch from NewsAPI",
                    "error": err.to_string(),
                }),
            ),
            other => {
                error!(error = %other, "unexpected proxy failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": other.to_string() }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
