//! Infrastructure traits, used for DI on higher levels

use crate::infrastructure::entities;
use async_trait::async_trait;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// All bookings, oldest first.
    async fn list_bookings(&self) -> Result<Vec<entities::Booking>, sqlx::Error>;

    async fn find_booking(&self, booking_id: i64)
    -> Result<Option<entities::Booking>, sqlx::Error>;

    async fn create_booking(
        &self,
        booking: entities::NewBooking,
    ) -> Result<entities::Booking, sqlx::Error>;

    /// Sets the status of the booking with the given id.
    ///
    /// Returns the number of rows touched; a missing id is not an error.
    async fn update_booking_status(
        &self,
        booking_id: i64,
        status: entities::BookingStatus,
    ) -> Result<u64, sqlx::Error>;
}
