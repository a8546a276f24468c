//! Registration records linking clients to trips.
//!
//! Dates on registrations are stored as eight-digit integers in `YYYYMMDD`
//! form rather than calendar types. [`RegistrationDate`] keeps that encoding
//! intact while guaranteeing the value names a real calendar day.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{ClientId, TripId};

/// Errors raised when encoding or decoding a `YYYYMMDD` date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationDateError {
    /// The integer does not name a real calendar day.
    #[error("{value} is not a valid YYYYMMDD date")]
    InvalidEncoding { value: i32 },
    /// The calendar year does not fit in four digits.
    #[error("year {year} cannot be encoded as YYYYMMDD")]
    YearOutOfRange { year: i32 },
}

/// Calendar day encoded as `YYYYMMDD`.
///
/// # Examples
/// ```
/// use booking::domain::RegistrationDate;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");
/// let encoded = RegistrationDate::from_date(day).expect("four-digit year");
/// assert_eq!(encoded.get(), 20261019);
/// assert_eq!(encoded.to_date(), day);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct RegistrationDate(i32);

impl RegistrationDate {
    const MIN_YEAR: i32 = 1000;
    const MAX_YEAR: i32 = 9999;

    /// Encode a calendar day.
    pub fn from_date(date: NaiveDate) -> Result<Self, RegistrationDateError> {
        let year = date.year();
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(RegistrationDateError::YearOutOfRange { year });
        }
        let month = i32::try_from(date.month())
            .map_err(|_| RegistrationDateError::YearOutOfRange { year })?;
        let day = i32::try_from(date.day())
            .map_err(|_| RegistrationDateError::YearOutOfRange { year })?;
        Ok(Self(year * 10_000 + month * 100 + day))
    }

    /// Validate a stored integer.
    pub fn try_from_encoded(value: i32) -> Result<Self, RegistrationDateError> {
        Self::decode(value).map(|_| Self(value))
    }

    /// Raw `YYYYMMDD` value.
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Calendar day represented by this value.
    pub fn to_date(self) -> NaiveDate {
        // Construction guarantees the value decodes.
        Self::decode(self.0).unwrap_or(NaiveDate::MIN)
    }

    fn decode(value: i32) -> Result<NaiveDate, RegistrationDateError> {
        let invalid = || RegistrationDateError::InvalidEncoding { value };
        let year = value / 10_000;
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(invalid());
        }
        let month = u32::try_from((value / 100) % 100).map_err(|_| invalid())?;
        let day = u32::try_from(value % 100).map_err(|_| invalid())?;
        NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
    }
}

impl fmt::Display for RegistrationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08}", self.0)
    }
}

impl From<RegistrationDate> for i32 {
    fn from(value: RegistrationDate) -> Self {
        value.0
    }
}

impl TryFrom<i32> for RegistrationDate {
    type Error = RegistrationDateError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_from_encoded(value)
    }
}

/// Composite key of a registration: one row per (client, trip) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegistrationKey {
    /// Registered client.
    pub client_id: ClientId,
    /// Trip the client is registered for.
    pub trip_id: TripId,
}

impl RegistrationKey {
    /// Build a key from its parts.
    pub const fn new(client_id: ClientId, trip_id: TripId) -> Self {
        Self { client_id, trip_id }
    }
}

impl fmt::Display for RegistrationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "client {} on trip {}", self.client_id, self.trip_id)
    }
}

/// Registration record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registration {
    /// Client and trip.
    pub key: RegistrationKey,
    /// Day the registration was made.
    pub registered_at: RegistrationDate,
    /// Day the trip was paid for; opaque to this service.
    pub payment_date: Option<RegistrationDate>,
}

impl Registration {
    /// New, unpaid registration.
    pub const fn unpaid(key: RegistrationKey, registered_at: RegistrationDate) -> Self {
        Self {
            key,
            registered_at,
            payment_date: None,
        }
    }
}
