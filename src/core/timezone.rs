use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::core::{AppError, Result};

/// Zone the shop's seasonal calendar is expressed in unless configured otherwise
pub const DEFAULT_PRICING_TIMEZONE: &str = "Europe/Paris";

/// Parse an IANA zone name such as `Europe/Paris`
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| AppError::configuration(format!("Unknown time zone: {}", name)))
}

/// Calendar date of a UTC instant as seen from the given zone
pub fn local_date(utc_time: DateTime<Utc>, tz: Tz) -> NaiveDate {
    utc_time.with_timezone(&tz).date_naive()
}

/// Today's calendar date in the given zone
pub fn today_in(tz: Tz) -> NaiveDate {
    local_date(Utc::now(), tz)
}
