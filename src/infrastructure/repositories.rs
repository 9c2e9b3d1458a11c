//! DB Repository abstractions

use crate::infrastructure::database::DatabaseConnection;
use crate::infrastructure::entities::{Booking, BookingStatus, NewBooking};
use crate::infrastructure::traits::BookingRepository;
use async_trait::async_trait;
use di::{Ref, injectable};
use log::debug;

#[injectable(BookingRepository)]
pub struct DbBookingRepository {
    connection: Ref<DatabaseConnection>,
}

#[async_trait]
impl BookingRepository for DbBookingRepository {
    async fn list_bookings(&self) -> Result<Vec<Booking>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM bookings ORDER BY created_at ASC, id ASC")
            .fetch_all(&**self.connection)
            .await
    }

    async fn find_booking(&self, booking_id: i64) -> Result<Option<Booking>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM bookings WHERE id = ?")
            .bind(booking_id)
            .fetch_optional(&**self.connection)
            .await
    }

    async fn create_booking(&self, booking: NewBooking) -> Result<Booking, sqlx::Error> {
        sqlx::query_as(
            "INSERT INTO bookings (full_name, email, phone, room_type, guests, check_in, check_out, status) VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING *",
        )
            .bind(booking.full_name)
            .bind(booking.email)
            .bind(booking.phone)
            .bind(booking.room_type)
            .bind(booking.guests)
            .bind(booking.check_in)
            .bind(booking.check_out)
            .bind(booking.status)
            .fetch_one(&**self.connection)
            .await
    }

    async fn update_booking_status(
        &self,
        booking_id: i64,
        status: BookingStatus,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE bookings SET status = ? WHERE id = ?")
            .bind(status)
            .bind(booking_id)
            .execute(&**self.connection)
            .await?;

        if result.rows_affected() == 0 {
            debug!("status update for booking {booking_id} matched no rows");
        }

        Ok(result.rows_affected())
    }
}
