use chrono::{DateTime, Local, TimeZone, Timelike};

/// Slug family for the Polymarket BTC up/down 15-minute markets.
const SLUG_PREFIX: &str = "btc-updown-15m";

/// Floor a time to the start of its 15-minute window, in its own timezone's
/// wall-clock terms.
pub fn floor_15m<Tz: TimeZone>(t: DateTime<Tz>) -> DateTime<Tz> {
    let local = t.naive_local();
    let start = local
        .with_minute(local.minute() / 15 * 15)
        .and_then(|n| n.with_second(0))
        .and_then(|n| n.with_nanosecond(0))
        .expect("minute and second are in range on a naive time");

    // Ambiguous during a DST fall-back hour; take the earlier occurrence.
    match t.timezone().from_local_datetime(&start).earliest() {
        Some(start) => start,
        // Window start swallowed by a DST gap; strip the excess from the instant.
        None => t - (local - start),
    }
}

/// Slug for the 15-minute window containing `t`, e.g. `btc-updown-15m-1700000100`.
pub fn slug_for<Tz: TimeZone>(t: DateTime<Tz>) -> String {
    format!("{}-{}", SLUG_PREFIX, floor_15m(t).timestamp())
}

/// Slug for the window we are in right now.
pub fn current_slug() -> String {
    slug_for(Local::now())
}
