use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, Utc};

use crate::errors::{Result, SchemaError};
use crate::hydration::Hydrator;

/// Hydrates an ISO date-only wire string (`%Y-%m-%d`)
///
/// The domain side is the midnight-UTC instant of that date. This is the
/// one sanctioned lossy representation: dehydrating a value with a
/// non-midnight time keeps only the date portion, and the round trip is a
/// fixed point from the second cycle on.
#[derive(Debug, Clone, Copy)]
pub struct DateHydrator;

impl Hydrator for DateHydrator {
    type Domain = DateTime<Utc>;
    type Payload = String;

    fn hydrate(&self, payload: String) -> Result<DateTime<Utc>> {
        let date = match NaiveDate::parse_from_str(&payload, "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => return Err(SchemaError::InvalidDate { value: payload }.into()),
        };
        Ok(date.and_time(NaiveTime::MIN).and_utc())
    }

    fn dehydrate(&self, value: &DateTime<Utc>) -> String {
        value.format("%Y-%m-%d").to_string()
    }
}

/// Hydrates an RFC 3339 date-time wire string
///
/// Offsets are normalized to UTC on the way in; dehydration always emits
/// the `Z`-suffixed second-precision form the upstream uses.
#[derive(Debug, Clone, Copy)]
pub struct DateTimeHydrator;

impl Hydrator for DateTimeHydrator {
    type Domain = DateTime<Utc>;
    type Payload = String;

    fn hydrate(&self, payload: String) -> Result<DateTime<Utc>> {
        match DateTime::parse_from_rfc3339(&payload) {
            Ok(instant) => Ok(instant.with_timezone(&Utc)),
            Err(_) => Err(SchemaError::InvalidDateTime { value: payload }.into()),
        }
    }

    fn dehydrate(&self, value: &DateTime<Utc>) -> String {
        value.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}
