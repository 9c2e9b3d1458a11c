//! Booking form input and its coercion into a [`NewBooking`].

use crate::core::error::BookingError;
use crate::infrastructure::entities::{BookingStatus, NewBooking};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::fmt::{Debug, Formatter};
use validator::Validate;

/// A form value that may arrive as text (HTML forms) or as a JSON number.
#[derive(Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum FormValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Default for FormValue {
    fn default() -> Self {
        FormValue::Text(String::new())
    }
}

impl Debug for FormValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FormValue::Integer(value) => write!(f, "{value}"),
            FormValue::Float(value) => write!(f, "{value}"),
            FormValue::Text(value) => write!(f, "{value:?}"),
        }
    }
}

impl FormValue {
    /// Integer value, accepting integral floats and surrounding whitespace.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FormValue::Integer(value) => Some(*value),
            // 2^63 itself is not an i64; the cast would saturate
            FormValue::Float(value)
                if value.is_finite()
                    && value.fract() == 0.0
                    && *value >= i64::MIN as f64
                    && *value < i64::MAX as f64 =>
            {
                Some(*value as i64)
            }
            FormValue::Float(_) => None,
            FormValue::Text(text) => {
                let text = text.trim();
                text.parse::<i64>().ok().or_else(|| {
                    text.parse::<f64>()
                        .ok()
                        .and_then(|value| FormValue::Float(value).as_integer())
                })
            }
        }
    }
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        FormValue::Text(value.to_owned())
    }
}

impl From<i64> for FormValue {
    fn from(value: i64) -> Self {
        FormValue::Integer(value)
    }
}

/// Raw booking submission, as posted by the booking page.
///
/// Every field defaults to empty so that a missing field is reported as a
/// validation failure instead of a transport error.
#[derive(Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingForm {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub room_type: String,
    pub guests: FormValue,
    #[serde(rename = "dateRange.from", alias = "checkIn")]
    pub check_in: String,
    #[serde(rename = "dateRange.to", alias = "checkOut")]
    pub check_out: String,
    pub card_number: Option<String>,
    pub expiry_date: Option<String>,
    pub cvc: Option<String>,
}

// Payment fields stay out of logs.
impl Debug for BookingForm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookingForm")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("room_type", &self.room_type)
            .field("guests", &self.guests)
            .field("check_in", &self.check_in)
            .field("check_out", &self.check_out)
            .finish_non_exhaustive()
    }
}

impl TryFrom<BookingForm> for NewBooking {
    type Error = BookingError;

    fn try_from(form: BookingForm) -> Result<Self, Self::Error> {
        let guests = form
            .guests
            .as_integer()
            .ok_or_else(|| BookingError::Validation(format!("guests {:?}", form.guests)))?;
        let check_in = parse_calendar_date(&form.check_in)
            .ok_or_else(|| BookingError::Validation(format!("check-in `{}`", form.check_in)))?;
        let check_out = parse_calendar_date(&form.check_out)
            .ok_or_else(|| BookingError::Validation(format!("check-out `{}`", form.check_out)))?;

        let booking = NewBooking {
            full_name: form.full_name,
            email: form.email,
            phone: form.phone.filter(|phone| !phone.trim().is_empty()),
            room_type: form.room_type,
            guests,
            check_in,
            check_out,
            status: BookingStatus::Confirmed,
        };
        booking.validate()?;

        Ok(booking)
    }
}

/// Reads a calendar date from a date or timestamp.
///
/// Timestamps keep the calendar date written in their own offset, so a guest
/// submitting from UTC+5:45 late in the evening books the day they picked.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|t| t.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|t| t.date())
        })
}
