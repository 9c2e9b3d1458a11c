use crate::api::error::ApiError;
use crate::core::traits::{AdminGate, Outcome, PageCache};
use async_trait::async_trait;
use axum::Router;
use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use axum::response::Html;
use uuid::Uuid;

pub mod admin;
pub mod bookings;
pub mod error;
pub mod health;
pub mod pages;
pub mod templates;

pub const ADMIN_SESSION_COOKIE: &str = "grand_reserve_admin";

/// Every route of the site, without static files or middleware.
pub fn router() -> Router {
    Router::new()
        .merge(pages::router())
        .merge(health::router())
        .nest("/admin", admin::router())
        .nest("/api/bookings", bookings::router())
}

/// Admin session token carried in the session cookie.
#[derive(Debug)]
pub struct ExtractSession(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for ExtractSession
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, (StatusCode, &'static str)> {
        let session = parts
            .headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|header| header.to_str().ok())
            .flat_map(|header| header.split(';'))
            .filter_map(|cookie| cookie.trim().split_once('='))
            .find(|(name, _)| *name == ADMIN_SESSION_COOKIE)
            .map(|(_, value)| value);

        if let Some(session) = session {
            let session = Uuid::parse_str(session)
                .map_err(|_| (StatusCode::UNAUTHORIZED, "invalid admin session"))?;
            Ok(ExtractSession(session))
        } else {
            Err((StatusCode::UNAUTHORIZED, "admin session cookie is missing"))
        }
    }
}

/// Cookie value opening an admin session.
pub fn session_cookie(session: Uuid) -> String {
    format!("{ADMIN_SESSION_COOKIE}={session}; Path=/; HttpOnly; SameSite=Lax")
}

/// Cookie value removing the admin session from the browser.
pub fn expired_session_cookie() -> String {
    format!("{ADMIN_SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Session of the request if it belongs to a logged in admin.
fn admin_session(gate: &dyn AdminGate, session: Option<ExtractSession>) -> Option<Uuid> {
    session
        .map(|ExtractSession(session)| session)
        .filter(|session| gate.is_authorized(*session))
}

fn require_admin(gate: &dyn AdminGate, session: Option<ExtractSession>) -> Result<Uuid, ApiError> {
    admin_session(gate, session).ok_or(ApiError::Unauthorized)
}

/// Serves `path` from the page cache, rendering and storing it on a miss.
fn cached_page(
    cache: &dyn PageCache,
    path: &str,
    render: impl FnOnce() -> Result<String, minijinja::Error>,
) -> Result<Html<String>, ApiError> {
    if let Some(html) = cache.get(path) {
        return Ok(Html(html));
    }

    let html = render()?;
    cache.put(path, html.clone());
    Ok(Html(html))
}

fn page_status(outcome: Outcome) -> StatusCode {
    match outcome {
        Outcome::Done => StatusCode::OK,
        Outcome::Rejected => StatusCode::UNPROCESSABLE_ENTITY,
        Outcome::Failed => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
