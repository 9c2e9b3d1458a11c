//! Admin dashboard: login, bookings table and status actions.

use crate::api::bookings::schemas;
use crate::api::error::ApiError;
use crate::api::templates::PageRenderer;
use crate::api::{
    ExtractSession, admin_session, expired_session_cookie, page_status, require_admin,
    session_cookie,
};
use crate::core::catalog;
use crate::core::services::ADMIN_PAGE;
use crate::core::traits::{AdminGate, BookingService, PageCache, StatusUpdate};
use crate::infrastructure::entities;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use di_axum::Inject;
use minijinja::context;
use serde::Deserialize;

const LOAD_FAILED: &str = "Bookings could not be loaded. Please try again later.";

pub fn router() -> Router {
    Router::new()
        .route("/", get(dashboard))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/bookings/:id", get(booking_details))
        .route("/bookings/:id/status", post(change_status))
}

#[derive(Deserialize)]
struct LoginForm {
    #[serde(default)]
    password: String,
}

#[derive(Deserialize)]
struct StatusForm {
    status: StatusUpdate,
}

async fn dashboard(
    Inject(renderer): Inject<PageRenderer>,
    Inject(cache): Inject<dyn PageCache>,
    Inject(gate): Inject<dyn AdminGate>,
    Inject(booking_service): Inject<dyn BookingService>,
    session: Option<ExtractSession>,
) -> Result<Html<String>, ApiError> {
    if admin_session(&*gate, session).is_none() {
        return Ok(Html(render_login(&renderer, None)?));
    }

    if let Some(html) = cache.get(ADMIN_PAGE) {
        return Ok(Html(html));
    }

    match booking_service.try_list_bookings().await {
        Ok(bookings) => {
            let html = render_dashboard(&renderer, bookings, None)?;
            cache.put(ADMIN_PAGE, html.clone());
            Ok(Html(html))
        }
        // not cached, the next request tries again
        Err(_) => Ok(Html(render_dashboard(&renderer, Vec::new(), Some(LOAD_FAILED))?)),
    }
}

async fn login(
    Inject(renderer): Inject<PageRenderer>,
    Inject(gate): Inject<dyn AdminGate>,
    Form(form): Form<LoginForm>,
) -> Result<Response, ApiError> {
    match gate.login(&form.password) {
        Some(session) => Ok((
            AppendHeaders([(SET_COOKIE, session_cookie(session))]),
            Redirect::to(ADMIN_PAGE),
        )
            .into_response()),
        None => {
            let html = render_login(&renderer, Some("Incorrect password. Please try again."))?;
            Ok((StatusCode::UNAUTHORIZED, Html(html)).into_response())
        }
    }
}

async fn logout(Inject(gate): Inject<dyn AdminGate>, session: Option<ExtractSession>) -> Response {
    if let Some(ExtractSession(session)) = session {
        gate.logout(session);
    }

    (
        AppendHeaders([(SET_COOKIE, expired_session_cookie())]),
        Redirect::to(ADMIN_PAGE),
    )
        .into_response()
}

async fn booking_details(
    Inject(renderer): Inject<PageRenderer>,
    Inject(gate): Inject<dyn AdminGate>,
    Inject(booking_service): Inject<dyn BookingService>,
    session: Option<ExtractSession>,
    Path(booking_id): Path<i64>,
) -> Result<Response, ApiError> {
    if admin_session(&*gate, session).is_none() {
        return Ok(Redirect::to(ADMIN_PAGE).into_response());
    }

    let booking = booking_service
        .find_booking(booking_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let html = renderer.render(
        "booking_detail.html",
        context! {
            page => "admin",
            booking => schemas::Booking::from(booking),
        },
    )?;

    Ok(Html(html).into_response())
}

async fn change_status(
    Inject(renderer): Inject<PageRenderer>,
    Inject(gate): Inject<dyn AdminGate>,
    Inject(booking_service): Inject<dyn BookingService>,
    session: Option<ExtractSession>,
    Path(booking_id): Path<i64>,
    Form(form): Form<StatusForm>,
) -> Result<Response, ApiError> {
    require_admin(&*gate, session)?;

    let state = booking_service
        .update_booking_status(booking_id, form.status)
        .await;
    if state.success {
        return Ok(Redirect::to(ADMIN_PAGE).into_response());
    }

    let bookings = booking_service.list_bookings().await;
    let html = render_dashboard(&renderer, bookings, Some(&state.message))?;
    Ok((page_status(state.outcome), Html(html)).into_response())
}

fn render_login(renderer: &PageRenderer, error: Option<&str>) -> Result<String, minijinja::Error> {
    renderer.render(
        "admin_login.html",
        context! {
            page => "admin",
            error => error,
        },
    )
}

fn render_dashboard(
    renderer: &PageRenderer,
    bookings: Vec<entities::Booking>,
    notice: Option<&str>,
) -> Result<String, minijinja::Error> {
    let bookings: Vec<schemas::Booking> =
        bookings.into_iter().map(schemas::Booking::from).collect();

    renderer.render(
        "admin.html",
        context! {
            page => "admin",
            metrics => catalog::DASHBOARD_METRICS,
            bookings => bookings,
            notice => notice,
        },
    )
}
