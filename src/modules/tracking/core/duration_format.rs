use chrono::TimeDelta;

const NANOS_PER_MINUTE: i64 = 60_000_000_000;
const MINUTES_PER_TENTH: i64 = 6;

/// Renders a span as `HH:MM (DH.T Hours)`.
///
/// The clock part is the span rounded to the nearest minute. The decimal part rounds the
/// leftover minutes up to the next tenth of an hour and carries into the hour when it
/// reaches ten tenths, while the clock part keeps the uncarried values. So 57 minutes
/// renders as `00:57 ( 1.0 Hours)`. Existing displays depend on that mismatch.
///
/// Negative spans render as zero.
pub fn format_duration(duration: TimeDelta) -> String {
    let total_minutes = rounded_minutes(duration);
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    let mut tenths = minutes / MINUTES_PER_TENTH;
    if minutes % MINUTES_PER_TENTH != 0 {
        tenths += 1;
    }
    let (decimal_hours, tenths) = if tenths == 10 {
        (hours + 1, 0)
    } else {
        (hours, tenths)
    };

    format!("{hours:02}:{minutes:02} ({decimal_hours:2}.{tenths} Hours)")
}

// Half a minute or more rounds up.
fn rounded_minutes(duration: TimeDelta) -> i64 {
    let nanos = duration.num_nanoseconds().unwrap_or(i64::MAX).max(0);
    nanos.saturating_add(NANOS_PER_MINUTE / 2) / NANOS_PER_MINUTE
}
