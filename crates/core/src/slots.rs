//! # Slot Generation
//!
//! The one piece of real computation in the system: turning a business's
//! office hours and booking interval into the ordered grid of candidate
//! slot start times for a day, and subtracting the already-booked set.
//!
//! ## Boundary policy
//!
//! A single policy applies everywhere. The start-time grid walks from
//! `open_hour:00` in `interval_minutes` steps and includes every start up
//! to and including the exact `close_hour:00` instant; an interval that
//! does not divide the span evenly simply stops short of closing (the
//! partial step is dropped, never emitted short). The ranged variant
//! derives from the same grid and additionally drops a slot once its end
//! would pass `close_hour:00`.

use std::collections::HashSet;

use chrono::NaiveTime;

/// Wire format for times-of-day throughout the API ("09:00").
pub const TIME_FORMAT: &str = "%H:%M";

/// A half-open bookable interval within one business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

fn valid_day(open_hour: i32, close_hour: i32, interval_minutes: i32) -> bool {
    interval_minutes > 0
        && (0..=23).contains(&open_hour)
        && (0..=23).contains(&close_hour)
        && open_hour < close_hour
}

fn time_from_minutes(minutes: i32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt((minutes / 60) as u32, (minutes % 60) as u32, 0)
}

/// Generates the ordered grid of candidate slot start times for one
/// business day.
///
/// Deterministic, ascending, duplicate-free. For an interval that divides
/// `(close_hour - open_hour) * 60` evenly this yields
/// `span / interval + 1` entries (the `close_hour:00` boundary is itself a
/// bookable start). Inputs outside the contract (non-positive interval,
/// hours outside 0..=23, closing not after opening) yield an empty grid;
/// the schema constraints keep stored businesses inside it.
pub fn slot_starts(open_hour: i32, close_hour: i32, interval_minutes: i32) -> Vec<NaiveTime> {
    if !valid_day(open_hour, close_hour, interval_minutes) {
        return Vec::new();
    }

    (open_hour * 60..=close_hour * 60)
        .step_by(interval_minutes as usize)
        .filter_map(time_from_minutes)
        .collect()
}

/// Generates `{start, end}` slot pairs from the same grid as
/// [`slot_starts`], with `end = start + interval`. A slot whose end would
/// fall after `close_hour:00` is dropped.
pub fn slot_ranges(open_hour: i32, close_hour: i32, interval_minutes: i32) -> Vec<SlotRange> {
    if !valid_day(open_hour, close_hour, interval_minutes) {
        return Vec::new();
    }

    let closing = close_hour * 60;
    (open_hour * 60..closing)
        .step_by(interval_minutes as usize)
        .filter(|start| start + interval_minutes <= closing)
        .filter_map(|start| {
            Some(SlotRange {
                start: time_from_minutes(start)?,
                end: time_from_minutes(start + interval_minutes)?,
            })
        })
        .collect()
}

/// Ordered set difference: the candidate times that are not in the booked
/// set, in candidate order. This is the whole availability computation
/// once the grid and the booked set are in hand.
pub fn free_times(candidates: Vec<NaiveTime>, booked: &HashSet<NaiveTime>) -> Vec<NaiveTime> {
    candidates
        .into_iter()
        .filter(|time| !booked.contains(time))
        .collect()
}

/// Formats a time-of-day in the API wire format ("09:00").
pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}
