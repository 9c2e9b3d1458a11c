//! Implementations for the service the app needs.
//!

use crate::core::error::BookingError;
use crate::core::traits::{BookingService, FormState, PageCache, StatusUpdate};
use crate::core::validation::BookingForm;
use crate::infrastructure::entities::{Booking, BookingStatus, NewBooking};
use crate::infrastructure::traits::BookingRepository;
use async_trait::async_trait;
use di::{Ref, injectable};
use log::{error, info, warn};

pub const BOOKING_CONFIRMED: &str = "Your reservation at the Grand Reserve has been successfully made. A confirmation has been sent to your email.";
pub const INVALID_FORM: &str = "Invalid form data. Please check your inputs.";
pub const BOOKING_FAILED: &str =
    "Failed to create booking due to a server error. Please try again later.";
pub const STATUS_UPDATE_FAILED: &str = "Failed to update booking status.";

pub const BOOKING_PAGE: &str = "/booking";
pub const ADMIN_PAGE: &str = "/admin";

#[injectable(BookingService)]
pub struct DefaultBookingService {
    repo: Ref<dyn BookingRepository>,
    pages: Ref<dyn PageCache>,
}

impl DefaultBookingService {
    pub fn new(repo: Ref<dyn BookingRepository>, pages: Ref<dyn PageCache>) -> Self {
        DefaultBookingService { repo, pages }
    }
}

#[async_trait]
impl BookingService for DefaultBookingService {
    async fn create_booking(&self, form: BookingForm) -> FormState {
        let booking = match NewBooking::try_from(form) {
            Ok(booking) => booking,
            Err(e) => {
                warn!("{e}");
                return FormState::rejected(INVALID_FORM);
            }
        };

        match self.repo.create_booking(booking).await {
            Ok(booking) => {
                info!(
                    "booking {} created for {} to {}",
                    booking.id, booking.check_in, booking.check_out
                );
                self.pages.revalidate_path(BOOKING_PAGE);
                self.pages.revalidate_path(ADMIN_PAGE);
                FormState::succeeded(BOOKING_CONFIRMED)
            }
            Err(e) => {
                error!("Database Error: {e}");
                FormState::failed(BOOKING_FAILED)
            }
        }
    }

    async fn try_list_bookings(&self) -> Result<Vec<Booking>, BookingError> {
        self.repo.list_bookings().await.map_err(|e| {
            error!("Database Error: {e}");
            e.into()
        })
    }

    async fn find_booking(&self, booking_id: i64) -> Result<Option<Booking>, BookingError> {
        self.repo.find_booking(booking_id).await.map_err(|e| {
            error!("Database Error: {e}");
            e.into()
        })
    }

    async fn update_booking_status(&self, booking_id: i64, status: StatusUpdate) -> FormState {
        let status: BookingStatus = status.into();

        match self.repo.update_booking_status(booking_id, status).await {
            Ok(_) => {
                info!("booking {booking_id} set to {status}");
                self.pages.revalidate_path(ADMIN_PAGE);
                FormState::succeeded(format!("Booking status updated to {status}."))
            }
            Err(e) => {
                error!("Database Error: {e}");
                FormState::failed(STATUS_UPDATE_FAILED)
            }
        }
    }
}
