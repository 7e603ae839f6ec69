use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

/// Asia/Jakarta (WIB), UTC+7, the reporting timezone for Indonesian tax dates
pub struct TimezoneConverter;

impl TimezoneConverter {
    fn jakarta_offset() -> FixedOffset {
        FixedOffset::east_opt(7 * 3600).expect("Valid offset")
    }

    /// Convert UTC timestamp to Asia/Jakarta timezone (UTC+7)
    pub fn utc_to_jakarta(utc_time: DateTime<Utc>) -> DateTime<FixedOffset> {
        utc_time.with_timezone(&Self::jakarta_offset())
    }

    /// Calendar date in Jakarta for the given instant
    pub fn jakarta_date(utc_time: DateTime<Utc>) -> NaiveDate {
        Self::utc_to_jakarta(utc_time).date_naive()
    }

    /// Today's date in Jakarta, the default transaction date of the input form
    pub fn today_in_jakarta() -> NaiveDate {
        Self::jakarta_date(Utc::now())
    }
}
