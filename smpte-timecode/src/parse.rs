//! Timecode string parsing.
//!
//! Accepts exactly `HH:MM:SS:FF` (non-drop) or `HH:MM:SS;FF` (drop-frame). The
//! hour, minute and second groups are two digits; the frame group is one or more
//! digits. Only the separator in front of the frames decides drop-frame.

use crate::components::Components;
use crate::error::{Result, TimecodeError};
use crate::rate::Rate;
use crate::timecode::Timecode;
use regex::Regex;
use std::sync::OnceLock;

static TIMECODE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn timecode_pattern() -> &'static Regex {
    TIMECODE_PATTERN.get_or_init(|| {
        Regex::new(r"^([0-9]{2})([:;])([0-9]{2})([:;])([0-9]{2})([:;])([0-9]+)$")
            .expect("timecode pattern is a valid regex")
    })
}

/// Split a timecode string into its components and drop-frame flag.
///
/// This is purely lexical. Component values are not range checked; a field too
/// large for an `i64` is [`TimecodeError::Overflow`].
pub fn split_timecode(s: &str) -> Result<(Components, bool)> {
    let Some(caps) = timecode_pattern().captures(s) else {
        tracing::debug!(input = s, "rejected timecode string");
        return Err(TimecodeError::invalid_format(format!(
            "expected HH:MM:SS:FF or HH:MM:SS;FF, got {s:?}"
        )));
    };

    let field = |index: usize| -> Result<i64> {
        caps[index].parse::<i64>().map_err(|_| {
            tracing::debug!(input = s, "timecode field overflows i64");
            TimecodeError::Overflow
        })
    };

    let components = Components::new(field(1)?, field(3)?, field(5)?, field(7)?);
    let drop_frame = &caps[6] == ";";

    Ok((components, drop_frame))
}

/// Parse a timecode string, counting frames at `rate`.
///
/// The drop-frame flag comes from the string, not from the rate. A drop-frame
/// string naming a skipped frame number resolves to the next existing frame.
/// A string whose frame count does not fit an `i64` is
/// [`TimecodeError::Overflow`].
///
/// # Example
/// ```rust
/// use smpte_timecode::{parse, Rate};
///
/// let tc = parse("00:01:02;23", Rate::FPS_23_976).unwrap();
/// assert_eq!(tc.frame(), 1509);
/// assert_eq!(tc.to_string(), "00:01:02;23");
/// ```
pub fn parse(s: &str, rate: Rate) -> Result<Timecode> {
    let (components, drop_frame) = split_timecode(s)?;
    let frame = components
        .checked_to_frame(&rate, drop_frame)
        .ok_or(TimecodeError::Overflow)?;
    Ok(Timecode::new(frame, rate, drop_frame))
}

/// Build a timecode from components.
///
/// A frame count beyond the `i64` range saturates.
#[must_use]
pub fn from_components(components: Components, rate: Rate, drop_frame: bool) -> Timecode {
    let frame = components.to_frame(&rate, drop_frame);
    Timecode::new(frame, rate, drop_frame)
}
