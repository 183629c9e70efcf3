/// Formats minutes since midnight as a 12-hour clock reading, e.g. `9:05 PM`.
pub fn format_12h(minutes: u32) -> String {
    let hour = minutes / 60;
    let minute = minutes % 60;

    let display_hour = match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    let suffix = if hour < 12 { "AM" } else { "PM" };

    format!("{}:{:02} {}", display_hour, minute, suffix)
}

/// Formats a span of minutes as `H:MM`.
pub fn format_hm(minutes: u32) -> String {
    format!("{}:{:02}", minutes / 60, minutes % 60)
}
