//! Wardrobe service routes

use auth::{
    Identity, PageKind,
    models::{LoginCredentials, Registration},
};
use axum::{
    Extension, Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use chrono::{Local, Utc};
use common::ResourceId;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::{
    error::{ApiError, ApiResult},
    middleware::{RequestSession, session_middleware},
    models::{DressDraft, DressPatch, FilterCriteria},
    pages::{
        PageOutcome, add_dress_page, dashboard_page, dress_detail_page, login_page,
        register_page, wardrobe_page,
    },
    query::compute_statistics,
    state::AppState,
};

/// Query string of the dress detail page
#[derive(Debug, Default, Deserialize)]
pub struct DetailQuery {
    pub id: Option<String>,
}

/// Create the router for the wardrobe service
pub fn create_router(state: AppState) -> Router {
    let session_routes = Router::new()
        .route("/pages/:slug", get(show_page))
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/auth/logout", post(logout))
        .route("/dresses", get(list_dresses).post(add_dress))
        .route(
            "/dresses/:id",
            get(get_dress).patch(update_dress).delete(delete_dress),
        )
        .route("/stats", get(stats))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ));

    Router::new()
        .route("/health", get(health_check))
        .merge(session_routes)
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "wardrobe-service"
    }))
}

/// URL of a page
pub fn page_path(page: PageKind) -> String {
    format!("/pages/{}", page.slug())
}

fn respond<T: Serialize>(outcome: PageOutcome<T>) -> Response {
    match outcome {
        PageOutcome::Render(view) => Json(view).into_response(),
        PageOutcome::Redirect(decision) => {
            let target = decision.target().unwrap_or(PageKind::Login);
            Redirect::to(&page_path(target)).into_response()
        }
    }
}

fn signed_in(session: &RequestSession) -> ApiResult<&Identity> {
    session
        .context
        .identity
        .as_ref()
        .ok_or(ApiError::Unauthenticated)
}

/// Run a page controller
pub async fn show_page(
    State(state): State<AppState>,
    Extension(session): Extension<RequestSession>,
    Path(slug): Path<String>,
    Query(criteria): Query<FilterCriteria>,
    Query(detail): Query<DetailQuery>,
) -> ApiResult<Response> {
    let page = PageKind::parse(&slug).ok_or_else(|| ApiError::UnknownPage(slug.clone()))?;
    let ctx = &session.context;

    let response = match page {
        PageKind::Login => respond(login_page(ctx)),
        PageKind::Register => respond(register_page(ctx)),
        PageKind::Dashboard => respond(
            dashboard_page(ctx, &state.collection, Local::now().fixed_offset()).await,
        ),
        PageKind::Wardrobe => respond(wardrobe_page(ctx, &state.collection, criteria).await),
        PageKind::AddDress => respond(add_dress_page(ctx)),
        PageKind::DressDetail => {
            let id = detail.id.as_deref().map(ResourceId::parse);
            respond(dress_detail_page(ctx, &state.collection, id.as_ref()).await?)
        }
    };

    Ok(response)
}

pub async fn login(
    Extension(session): Extension<RequestSession>,
    Json(payload): Json<LoginCredentials>,
) -> ApiResult<impl IntoResponse> {
    let identity = session
        .sessions
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(identity))
}

pub async fn register(
    Extension(session): Extension<RequestSession>,
    Json(payload): Json<Registration>,
) -> ApiResult<impl IntoResponse> {
    let identity = session
        .sessions
        .register(&payload.name, &payload.email, &payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(identity)))
}

pub async fn logout(Extension(session): Extension<RequestSession>) -> ApiResult<StatusCode> {
    session.sessions.logout().await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Filtered listing of the signed-in user's wardrobe
pub async fn list_dresses(
    State(state): State<AppState>,
    Extension(session): Extension<RequestSession>,
    Query(criteria): Query<FilterCriteria>,
) -> ApiResult<impl IntoResponse> {
    match wardrobe_page(&session.context, &state.collection, criteria).await {
        PageOutcome::Render(view) => Ok(Json(view)),
        PageOutcome::Redirect(_) => Err(ApiError::Unauthenticated),
    }
}

pub async fn add_dress(
    State(state): State<AppState>,
    Extension(session): Extension<RequestSession>,
    Json(draft): Json<DressDraft>,
) -> ApiResult<impl IntoResponse> {
    let identity = signed_in(&session)?;
    let dress = state.collection.add_item(&identity.id, draft).await?;

    Ok((StatusCode::CREATED, Json(dress)))
}

pub async fn get_dress(
    State(state): State<AppState>,
    Extension(session): Extension<RequestSession>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let identity = signed_in(&session)?;
    let dress = state
        .collection
        .get_item(&identity.id, &ResourceId::parse(&id))
        .await?;

    Ok(Json(dress))
}

pub async fn update_dress(
    State(state): State<AppState>,
    Extension(session): Extension<RequestSession>,
    Path(id): Path<String>,
    Json(patch): Json<DressPatch>,
) -> ApiResult<StatusCode> {
    let identity = signed_in(&session)?;
    if patch.is_empty() {
        return Err(ApiError::BadRequest("Nothing to update".to_string()));
    }

    let id = ResourceId::parse(&id);
    state.collection.get_item(&identity.id, &id).await?;
    state.collection.update_item(&id, &patch).await?;

    info!("Dress {} updated by user {}", id, identity.id);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_dress(
    State(state): State<AppState>,
    Extension(session): Extension<RequestSession>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let identity = signed_in(&session)?;
    let id = ResourceId::parse(&id);
    state.collection.get_item(&identity.id, &id).await?;
    state.collection.delete_item(&id).await?;

    info!("Dress {} deleted by user {}", id, identity.id);
    Ok(StatusCode::NO_CONTENT)
}

/// Statistics over the signed-in user's wardrobe
pub async fn stats(
    State(state): State<AppState>,
    Extension(session): Extension<RequestSession>,
) -> ApiResult<impl IntoResponse> {
    let identity = signed_in(&session)?;
    let fetched = state.collection.fetch_collection(&identity.id).await;
    if let Some(failure) = fetched.failure {
        return Err(failure.into());
    }

    Ok(Json(compute_statistics(&fetched.items, Utc::now())))
}
