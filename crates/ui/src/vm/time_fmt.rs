use chrono::{DateTime, Local, Utc};

/// Wall-clock rendering in the machine's timezone.
#[must_use]
pub fn format_local_datetime(value: DateTime<Utc>) -> String {
    value
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}
