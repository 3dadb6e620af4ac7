use chrono::{DateTime, Utc};

pub(crate) fn utc_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes(core::array::from_fn(|_| (256. * random()) as u8))
}

/// Formats milliseconds as `HH:MM:SS.d`. The tens of hours stop at 9.
pub(crate) fn format_elapsed(ms: u64) -> String {
    let hours = ms / 3_600_000;
    let tens_of_hours = (hours / 10).min(9);
    format!(
        "{}{}:{:02}:{:02}.{}",
        tens_of_hours,
        hours % 10,
        ms / 60_000 % 60,
        ms / 1_000 % 60,
        ms / 100 % 10
    )
}

pub(crate) fn format_best(best: Option<u64>) -> String {
    best.map_or_else(|| "none".to_string(), format_elapsed)
}
