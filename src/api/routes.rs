use axum::{
    routing::get,
    Router,
    extract::{RawQuery, State},
    response::{IntoResponse, Response},
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::TraceLayer;

use crate::error::{Result, AppError};
use crate::api::models::DescriptionRequest;
use crate::api::response;
use crate::sanitizer::short_description;
use crate::wikipedia::{decode_pages, wikipedia_api_url};
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/description", get(description_handler))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

async fn index_handler() -> &'static str {
    response::USAGE
}

async fn description_handler(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Response {
    let req = DescriptionRequest::from_query(query.as_deref());
    if req.name.is_empty() {
        tracing::warn!("Rejected description request without a name");
        return AppError::Validation.into_response();
    }

    let start_time = std::time::Instant::now();
    let result = lookup_description(&state, &req).await;
    let elapsed = start_time.elapsed();

    match result {
        Ok(desc) => {
            tracing::info!(name = %req.name, lang = %req.lang, ?elapsed, "Found short description");
            response::success(req.name, desc).into_response()
        }
        Err(err) => {
            tracing::warn!(name = %req.name, lang = %req.lang, ?elapsed, error = %err, "Short description lookup failed");
            err.into_response()
        }
    }
}

async fn lookup_description(state: &AppState, req: &DescriptionRequest) -> Result<String> {
    let url = wikipedia_api_url(&req.name, &req.lang);
    tracing::debug!(%url, "Querying Wikipedia");

    let body = state.fetcher.fetch(&url).await?;
    let pages = decode_pages(&body)?;
    let desc = short_description(&pages)?;

    if desc.is_empty() {
        return Err(AppError::DescriptionNotFound);
    }

    Ok(desc)
}
