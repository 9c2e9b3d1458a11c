//! DI "Interfaces"

use crate::core::error::BookingError;
use crate::core::validation::BookingForm;
use crate::infrastructure::entities;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a form submission ended, for picking a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Done,
    Rejected,
    Failed,
}

/// Outcome reported back to whoever submitted a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub success: bool,
    pub message: String,
    #[serde(skip)]
    pub outcome: Outcome,
}

impl FormState {
    pub fn succeeded(message: impl Into<String>) -> Self {
        FormState {
            success: true,
            message: message.into(),
            outcome: Outcome::Done,
        }
    }

    /// The input was refused; nothing was written.
    pub fn rejected(message: impl Into<String>) -> Self {
        FormState {
            success: false,
            message: message.into(),
            outcome: Outcome::Rejected,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        FormState {
            success: false,
            message: message.into(),
            outcome: Outcome::Failed,
        }
    }
}

/// Statuses an administrator may set. New bookings are the only way to get
/// anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusUpdate {
    Confirmed,
    Cancelled,
}

impl From<StatusUpdate> for entities::BookingStatus {
    fn from(update: StatusUpdate) -> Self {
        match update {
            StatusUpdate::Confirmed => entities::BookingStatus::Confirmed,
            StatusUpdate::Cancelled => entities::BookingStatus::Cancelled,
        }
    }
}

#[async_trait]
pub trait BookingService: Send + Sync {
    /// Validates a submitted booking form and stores it as confirmed.
    ///
    /// Never returns details about what was wrong with the form; the
    /// message is one of a fixed set meant for the guest.
    async fn create_booking(&self, form: BookingForm) -> FormState;

    /// Lists every booking, oldest first.
    ///
    /// Storage failures are logged and produce an empty list. Use
    /// [`BookingService::try_list_bookings`] to tell the two apart.
    async fn list_bookings(&self) -> Vec<entities::Booking> {
        self.try_list_bookings().await.unwrap_or_default()
    }

    /// Lists every booking, oldest first.
    async fn try_list_bookings(&self) -> Result<Vec<entities::Booking>, BookingError>;

    async fn find_booking(&self, booking_id: i64)
    -> Result<Option<entities::Booking>, BookingError>;

    /// Sets the status of a booking.
    ///
    /// A missing booking is not reported as an error.
    async fn update_booking_status(&self, booking_id: i64, status: StatusUpdate) -> FormState;
}

/// Rendered pages, kept until their path is revalidated or they expire.
pub trait PageCache: Send + Sync {
    fn get(&self, path: &str) -> Option<String>;

    fn put(&self, path: &str, html: String);

    /// Marks the page at `path` stale so the next request renders it again.
    fn revalidate_path(&self, path: &str);
}

pub trait AdminGate: Send + Sync {
    /// Checks the admin password and opens a session for it.
    fn login(&self, password: &str) -> Option<Uuid>;

    fn is_authorized(&self, session: Uuid) -> bool;

    fn logout(&self, session: Uuid);
}
