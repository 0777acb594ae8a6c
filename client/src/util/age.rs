//! Date-of-birth parsing and age arithmetic for profile completion.

#[cfg(test)]
#[path = "age_test.rs"]
mod age_test;

use time::macros::format_description;
use time::Date;

/// Oldest age accepted as plausible.
pub const MAX_AGE: u8 = 150;

/// Parse an HTML date-input value (`YYYY-MM-DD`).
#[must_use]
pub fn parse_date_of_birth(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]")).ok()
}

/// Whole years between `dob` and `today`, or `None` for a birth date that is
/// not strictly in the past or implies an age above [`MAX_AGE`].
#[must_use]
pub fn calculate_age(dob: Date, today: Date) -> Option<u8> {
    if dob >= today {
        return None;
    }
    let mut age = today.year() - dob.year();
    let birthday_pending = (u8::from(today.month()), today.day()) < (u8::from(dob.month()), dob.day());
    if birthday_pending {
        age -= 1;
    }
    u8::try_from(age).ok().filter(|a| *a <= MAX_AGE)
}

#[must_use]
pub fn is_valid_date_of_birth(raw: &str, today: Date) -> bool {
    parse_date_of_birth(raw).is_some_and(|dob| calculate_age(dob, today).is_some())
}

/// Long display form, e.g. `15 August 2024`.
#[must_use]
pub fn format_date(date: Date) -> String {
    format!("{} {} {}", date.day(), date.month(), date.year())
}

/// `YYYY-MM-DD`, as used by date inputs and API query strings.
#[must_use]
pub fn iso_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]")).unwrap_or_default()
}

/// Format an API date string (`YYYY-MM-DD`, optionally followed by a time);
/// empty when unparseable.
#[must_use]
pub fn format_api_date(raw: &str) -> String {
    raw.get(..10)
        .and_then(parse_date_of_birth)
        .map(format_date)
        .unwrap_or_default()
}

/// The current local calendar date.
#[must_use]
pub fn today() -> Option<Date> {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        let year = i32::try_from(now.get_full_year()).ok()?;
        let month = time::Month::try_from(u8::try_from(now.get_month() + 1).ok()?).ok()?;
        let day = u8::try_from(now.get_date()).ok()?;
        Date::from_calendar_date(year, month, day).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Some(time::OffsetDateTime::now_utc().date())
    }
}
