//! Trip catalogue model and capacity rules.

use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::RegistrationDate;

/// Surrogate trip identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripId(i32);

impl TripId {
    /// Wrap a raw identifier.
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Raw identifier value.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raised when a trip cannot take another participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("trip is full: {registered} of {max_people} places taken")]
pub struct CapacityReached {
    /// Trip maximum.
    pub max_people: u32,
    /// Registrations counted at the time of the check.
    pub registered: u64,
}

/// Maximum number of participants a trip accepts.
///
/// # Examples
/// ```
/// use booking::domain::TripCapacity;
///
/// let capacity = TripCapacity::new(2);
/// assert!(capacity.try_admit(1).is_ok());
/// assert!(capacity.try_admit(2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripCapacity(u32);

impl TripCapacity {
    /// Wrap a participant limit.
    pub const fn new(max_people: u32) -> Self {
        Self(max_people)
    }

    /// Build a capacity from the stored column, clamping negatives to zero.
    pub fn from_stored(max_people: i32) -> Self {
        Self(u32::try_from(max_people).unwrap_or(0))
    }

    /// Participant limit.
    pub const fn max_people(self) -> u32 {
        self.0
    }

    /// Check whether one more participant fits given `registered` existing
    /// registrations.
    pub fn try_admit(self, registered: u64) -> Result<(), CapacityReached> {
        if registered >= u64::from(self.0) {
            return Err(CapacityReached {
                max_people: self.0,
                registered,
            });
        }
        Ok(())
    }
}

/// Trip as stored in the catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    /// Identifier.
    pub id: TripId,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// First day of the trip.
    pub date_from: NaiveDate,
    /// Last day of the trip.
    pub date_to: NaiveDate,
    /// Participant limit.
    pub capacity: TripCapacity,
}

/// One row of the trip/country join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripCountry {
    /// Trip half of the row.
    pub trip: Trip,
    /// Name of a country the trip visits.
    pub country: String,
}

/// Trip with every associated country name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripWithCountries {
    /// The trip.
    pub trip: Trip,
    /// Country names; never empty.
    pub countries: Vec<String>,
}

/// Collapse join rows into one entry per trip.
///
/// Entries keep the order in which each trip first appears, so rows sorted by
/// start date produce trips sorted by start date.
///
/// # Examples
/// ```
/// use booking::domain::{group_trip_countries, Trip, TripCapacity, TripCountry, TripId};
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2026, 7, 1).expect("valid date");
/// let trip = Trip {
///     id: TripId::new(1),
///     name: "Alps".into(),
///     description: "Hiking".into(),
///     date_from: day,
///     date_to: day,
///     capacity: TripCapacity::new(10),
/// };
/// let rows = vec![
///     TripCountry { trip: trip.clone(), country: "Austria".into() },
///     TripCountry { trip, country: "Italy".into() },
/// ];
/// let grouped = group_trip_countries(rows);
/// assert_eq!(grouped.len(), 1);
/// assert_eq!(grouped[0].countries, ["Austria", "Italy"]);
/// ```
pub fn group_trip_countries(rows: impl IntoIterator<Item = TripCountry>) -> Vec<TripWithCountries> {
    let mut positions: HashMap<TripId, usize> = HashMap::new();
    let mut grouped: Vec<TripWithCountries> = Vec::new();

    for TripCountry { trip, country } in rows {
        match positions.get(&trip.id) {
            Some(&index) => {
                if let Some(entry) = grouped.get_mut(index) {
                    entry.countries.push(country);
                }
            }
            None => {
                positions.insert(trip.id, grouped.len());
                grouped.push(TripWithCountries {
                    trip,
                    countries: vec![country],
                });
            }
        }
    }

    grouped
}

/// Trip a client is registered for, with registration metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientTrip {
    /// The trip.
    pub trip: Trip,
    /// Day of registration.
    pub registered_at: RegistrationDate,
    /// Day of payment, if paid.
    pub payment_date: Option<RegistrationDate>,
}
