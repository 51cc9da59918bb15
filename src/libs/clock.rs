//! 12-hour punch-clock time parsing and elapsed-hours calculation.
//!
//! Punch times are entered as `H:MM AM` / `H:MM PM` strings. Parsing maps
//! them onto a fractional hour-of-day in `[0, 24)` (12 AM is 0, 12 PM is 12),
//! and the duration calculation handles shifts that cross midnight once.
//!
//! All times are interpreted against the user's local wall clock; there is
//! no timezone model, and a DST transition inside an overnight shift is not
//! accounted for.
//!
//! Both errors here are recoverable by design: callers treat them as "no
//! usable value" and leave the dependent hours field unchanged.

use thiserror::Error;

/// Errors produced by punch-time parsing and duration calculation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClockError {
    /// The input does not match the `H:MM AM|PM` pattern.
    #[error("time does not match the 12-hour clock pattern")]
    Pattern,
    /// A punch time is missing or unreadable, so no duration can be derived.
    #[error("punch-in or punch-out time is missing or unreadable")]
    Incomplete,
}

/// Parses a 12-hour clock string into a fractional hour-of-day.
///
/// Accepts a 1 or 2 digit hour in `1..=12`, a colon, exactly two minute
/// digits in `00..=59`, and a case-insensitive `AM`/`PM` meridiem, with
/// optional whitespace around the meridiem. Returns hour-of-day plus
/// minutes/60 in `[0, 24)`.
///
/// ```
/// use shiftlog::libs::clock::parse_clock;
///
/// assert_eq!(parse_clock("12:00 AM"), Ok(0.0));
/// assert_eq!(parse_clock("12:00 PM"), Ok(12.0));
/// assert_eq!(parse_clock("1:30 pm"), Ok(13.5));
/// ```
pub fn parse_clock(input: &str) -> Result<f64, ClockError> {
    let s = input.trim();
    let colon = s.find(':').ok_or(ClockError::Pattern)?;
    let (hour_str, rest) = s.split_at(colon);
    let rest = &rest[1..];

    if hour_str.is_empty() || hour_str.len() > 2 || !hour_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ClockError::Pattern);
    }
    // Minutes are exactly two digits; whatever follows must be the meridiem.
    // Checking the bytes before slicing also keeps the split on a char
    // boundary when the input carries multi-byte text.
    let rest_bytes = rest.as_bytes();
    if rest_bytes.len() < 2 || !rest_bytes[0].is_ascii_digit() || !rest_bytes[1].is_ascii_digit() {
        return Err(ClockError::Pattern);
    }
    let (minute_str, meridiem) = rest.split_at(2);

    let hour: u32 = hour_str.parse().map_err(|_| ClockError::Pattern)?;
    let minute: u32 = minute_str.parse().map_err(|_| ClockError::Pattern)?;
    if !(1..=12).contains(&hour) || minute > 59 {
        return Err(ClockError::Pattern);
    }

    let hour_of_day = match meridiem.trim().to_ascii_uppercase().as_str() {
        "AM" => hour % 12,
        "PM" => hour % 12 + 12,
        _ => return Err(ClockError::Pattern),
    };

    Ok(hour_of_day as f64 + minute as f64 / 60.0)
}

/// Computes the elapsed hours between a punch-in and a punch-out string.
///
/// An empty or unparseable time on either side yields
/// [`ClockError::Incomplete`]. A punch-out earlier on the clock than the
/// punch-in is treated as crossing midnight exactly once, so the result is
/// always non-negative; shifts longer than 24 hours cannot be represented.
///
/// ```
/// use shiftlog::libs::clock::hours_between;
///
/// assert_eq!(hours_between("9:00 AM", "5:00 PM"), Ok(8.0));
/// assert_eq!(hours_between("10:00 PM", "6:00 AM"), Ok(8.0));
/// ```
pub fn hours_between(punch_in: &str, punch_out: &str) -> Result<f64, ClockError> {
    if punch_in.trim().is_empty() || punch_out.trim().is_empty() {
        return Err(ClockError::Incomplete);
    }

    let start = parse_clock(punch_in).map_err(|_| ClockError::Incomplete)?;
    let end = parse_clock(punch_out).map_err(|_| ClockError::Incomplete)?;

    let mut elapsed = end - start;
    if elapsed < 0.0 {
        elapsed += 24.0;
    }
    Ok(elapsed)
}
