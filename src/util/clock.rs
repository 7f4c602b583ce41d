//! Wall-clock label formatting for the page header.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Format a 24-hour time as a zero-padded 12-hour label, e.g. `06:05:09 PM`.
pub fn format_clock(hours: u32, minutes: u32, seconds: u32) -> String {
    let suffix = if hours % 24 < 12 { "AM" } else { "PM" };
    let hour12 = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour12:02}:{minutes:02}:{seconds:02} {suffix}")
}

/// Current local time label. Empty on the server, where the viewer's
/// timezone is unknown.
pub fn now_label() -> String {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        format_clock(now.get_hours(), now.get_minutes(), now.get_seconds())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
