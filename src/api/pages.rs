//! Public pages: home, rooms and the booking form.

use crate::api::error::ApiError;
use crate::api::templates::PageRenderer;
use crate::api::{cached_page, page_status};
use crate::core::catalog;
use crate::core::services::BOOKING_PAGE;
use crate::core::traits::{BookingService, FormState, PageCache};
use crate::core::validation::BookingForm;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::{Form, Router};
use chrono::{Days, Utc};
use di_axum::Inject;
use minijinja::context;

pub fn router() -> Router {
    Router::new()
        .route("/", get(home))
        .route("/rooms", get(rooms))
        .route("/rooms/:id", get(room_detail))
        .route(BOOKING_PAGE, get(booking_form).post(submit_booking))
}

async fn home(
    Inject(renderer): Inject<PageRenderer>,
    Inject(cache): Inject<dyn PageCache>,
) -> Result<Html<String>, ApiError> {
    cached_page(&*cache, "/", || {
        renderer.render(
            "index.html",
            context! {
                page => "home",
                rooms => catalog::featured_rooms(),
            },
        )
    })
}

async fn rooms(
    Inject(renderer): Inject<PageRenderer>,
    Inject(cache): Inject<dyn PageCache>,
) -> Result<Html<String>, ApiError> {
    cached_page(&*cache, "/rooms", || {
        renderer.render(
            "rooms.html",
            context! {
                page => "rooms",
                rooms => catalog::ROOMS,
            },
        )
    })
}

async fn room_detail(
    Inject(renderer): Inject<PageRenderer>,
    Inject(cache): Inject<dyn PageCache>,
    Path(room_id): Path<String>,
) -> Result<Html<String>, ApiError> {
    let room = catalog::find_room(&room_id).ok_or(ApiError::NotFound)?;

    cached_page(&*cache, &format!("/rooms/{}", room.id), || {
        renderer.render(
            "room_detail.html",
            context! {
                page => "rooms",
                room => room,
            },
        )
    })
}

// Not cached: the default dates move with the calendar.
async fn booking_form(Inject(renderer): Inject<PageRenderer>) -> Result<Html<String>, ApiError> {
    Ok(Html(render_booking_page(&renderer, None)?))
}

async fn submit_booking(
    Inject(renderer): Inject<PageRenderer>,
    Inject(booking_service): Inject<dyn BookingService>,
    Form(form): Form<BookingForm>,
) -> Result<(StatusCode, Html<String>), ApiError> {
    let state = booking_service.create_booking(form).await;
    let html = render_booking_page(&renderer, Some(&state))?;

    Ok((page_status(state.outcome), Html(html)))
}

fn render_booking_page(
    renderer: &PageRenderer,
    state: Option<&FormState>,
) -> Result<String, minijinja::Error> {
    let today = Utc::now().date_naive();
    let check_out = today.checked_add_days(Days::new(3)).unwrap_or(today);

    renderer.render(
        "booking.html",
        context! {
            page => "booking",
            room_choices => catalog::ROOM_CHOICES,
            check_in => today,
            check_out => check_out,
            form_state => state,
        },
    )
}
