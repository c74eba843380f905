//! Handler for the link listing endpoint.

use axum::{
    Json,
    extract::State,
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};

use crate::api::dto::links::{LinkActiveItem, LinkItem, LinksResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Downstream caches may serve the listing for 20 minutes and revalidate in
/// the background for another 10.
const CACHE_CONTROL: &str = "public, s-maxage=1200, stale-while-revalidate=600";

/// Returns the link directory with per-link availability flags.
///
/// # Endpoint
///
/// `GET /api/links`
///
/// # Behavior
///
/// Availability is computed per request: every listed link gets an
/// independent, concurrent check. A failed check marks the link inactive,
/// never fails the request.
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "links": [{ "id": 1, "title": "GitHub", "url": "...", "description": "..." }],
///   "linksActive": [{ "link": "https://...", "active": true }]
/// }
/// ```
///
/// # Errors
///
/// Returns 500 with `{ "success": false, "error": ... }` if the database
/// read fails.
pub async fn links_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    let links = state.link_service.list_links().await?;

    let urls: Vec<String> = links.iter().map(|link| link.url.clone()).collect();
    let links_active = state
        .availability_service
        .check_all(&urls)
        .await
        .into_iter()
        .map(|(link, active)| LinkActiveItem { link, active })
        .collect();

    let body = LinksResponse {
        success: true,
        links: links.into_iter().map(LinkItem::from).collect(),
        links_active,
    };

    let mut response = Json(body).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(CACHE_CONTROL),
    );

    Ok(response)
}
