use chrono::{DateTime, Local};

/// History timestamp format (`2024-03-01 09:30:00`), local time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_local(dt: DateTime<Local>) -> String {
    dt.format(TIMESTAMP_FORMAT).to_string()
}

pub fn now_local_string() -> String {
    format_local(Local::now())
}
