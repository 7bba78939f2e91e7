#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

/// Current calendar year: the browser clock when hydrated, UTC on the server.
pub fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or(i32::MAX)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().year()
    }
}
