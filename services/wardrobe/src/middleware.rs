//! Session middleware
//!
//! Resolves the browser profile from its cookie and loads the session
//! context once per request.

use auth::{SessionContext, SessionManager};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::{TypedHeader, headers::Cookie};
use tracing::debug;

use crate::state::AppState;

/// Cookie naming the browser profile
pub const PROFILE_COOKIE: &str = "profile";

/// Profile used when the cookie is absent or unusable
pub const DEFAULT_PROFILE: &str = "default";

/// Session of the current request
#[derive(Clone)]
pub struct RequestSession {
    pub sessions: SessionManager,
    pub context: SessionContext,
}

/// Profile name safe to embed in a store key
pub fn profile_name(raw: Option<&str>) -> String {
    let cleaned: String = raw
        .unwrap_or_default()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .take(64)
        .collect();

    if cleaned.is_empty() {
        DEFAULT_PROFILE.to_string()
    } else {
        cleaned
    }
}

/// Load the profile's session into the request extensions
pub async fn session_middleware(
    State(state): State<AppState>,
    cookies: Option<TypedHeader<Cookie>>,
    mut req: Request,
    next: Next,
) -> Response {
    let profile = profile_name(
        cookies
            .as_ref()
            .and_then(|TypedHeader(cookie)| cookie.get(PROFILE_COOKIE)),
    );

    let sessions = state.sessions_for(&profile);
    let context = sessions.load_context().await;
    debug!(
        "Profile {} signed in: {}",
        profile,
        context.identity.is_some()
    );

    req.extensions_mut()
        .insert(RequestSession { sessions, context });

    next.run(req).await
}
