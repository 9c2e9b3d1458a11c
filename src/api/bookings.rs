//! Bookings endpoints

use crate::api::bookings::schemas::{BookingList, StatusChange};
use crate::api::error::ApiError;
use crate::api::{ExtractSession, require_admin};
use crate::core::traits::{AdminGate, BookingService, FormState, Outcome};
use crate::core::validation::BookingForm;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::{get, patch};
use axum::{Json, Router};
use di_axum::Inject;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_bookings).post(create_booking))
        .route("/:id", get(get_booking))
        .route("/:id/status", patch(update_status))
}

async fn create_booking(
    Inject(booking_service): Inject<dyn BookingService>,
    Json(form): Json<BookingForm>,
) -> (StatusCode, Json<FormState>) {
    let state = booking_service.create_booking(form).await;

    let status = match state.outcome {
        Outcome::Done => StatusCode::CREATED,
        Outcome::Rejected => StatusCode::BAD_REQUEST,
        Outcome::Failed => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, Json(state))
}

async fn list_bookings(
    Inject(booking_service): Inject<dyn BookingService>,
    Inject(gate): Inject<dyn AdminGate>,
    session: Option<ExtractSession>,
) -> Result<Json<BookingList>, ApiError> {
    require_admin(&*gate, session)?;

    let bookings = booking_service.list_bookings().await;

    Ok(Json(BookingList {
        bookings: bookings.into_iter().map(schemas::Booking::from).collect(),
    }))
}

async fn get_booking(
    Inject(booking_service): Inject<dyn BookingService>,
    Inject(gate): Inject<dyn AdminGate>,
    session: Option<ExtractSession>,
    Path(booking_id): Path<i64>,
) -> Result<Json<schemas::Booking>, ApiError> {
    require_admin(&*gate, session)?;

    booking_service
        .find_booking(booking_id)
        .await?
        .map(|booking| Json(schemas::Booking::from(booking)))
        .ok_or(ApiError::NotFound)
}

async fn update_status(
    Inject(booking_service): Inject<dyn BookingService>,
    Inject(gate): Inject<dyn AdminGate>,
    session: Option<ExtractSession>,
    Path(booking_id): Path<i64>,
    Json(change): Json<StatusChange>,
) -> Result<(StatusCode, Json<FormState>), ApiError> {
    require_admin(&*gate, session)?;

    let state = booking_service
        .update_booking_status(booking_id, change.status)
        .await;
    let status = if state.success {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    Ok((status, Json(state)))
}

pub mod schemas {
    use crate::core::traits::StatusUpdate;
    use crate::infrastructure::entities;
    use chrono::{DateTime, NaiveDate, Utc};
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct Booking {
        pub id: i64,
        pub full_name: String,
        pub email: String,
        pub phone: Option<String>,
        pub room_type: String,
        pub guests: i64,
        pub check_in: NaiveDate,
        pub check_out: NaiveDate,
        pub status: entities::BookingStatus,
        pub created_at: DateTime<Utc>,
    }

    impl From<entities::Booking> for Booking {
        fn from(booking: entities::Booking) -> Self {
            Booking {
                id: booking.id,
                full_name: booking.full_name,
                email: booking.email,
                phone: booking.phone,
                room_type: booking.room_type,
                guests: booking.guests,
                check_in: booking.check_in,
                check_out: booking.check_out,
                status: booking.status,
                created_at: booking.created_at,
            }
        }
    }

    #[derive(Serialize, Debug, Default)]
    pub struct BookingList {
        pub bookings: Vec<Booking>,
    }

    #[derive(Deserialize, Debug)]
    pub struct StatusChange {
        pub status: StatusUpdate,
    }
}
