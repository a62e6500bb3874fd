//! Timecode components and the frame-count codec.
//!
//! [`Components`] is the broken-out `HH:MM:SS:FF` view of a frame count. The
//! codec converts in both directions; the drop-frame specifics live in
//! [`crate::dropframe`].
//!
//! Division and remainder truncate toward zero, so a negative frame count decodes
//! to components carrying the same sign (frame -1 at 30 fps is `0:0:0:-1`).

use crate::dropframe;
use crate::rate::Rate;
use serde::{Deserialize, Serialize};

/// Hours, minutes, seconds and display frame of a timecode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Components {
    /// Hours, unbounded.
    pub hours: i64,
    /// Minutes within the hour.
    pub minutes: i64,
    /// Seconds within the minute.
    pub seconds: i64,
    /// Display frame index within the second.
    pub frames: i64,
}

impl Components {
    /// Create components from their four fields.
    #[must_use]
    pub const fn new(hours: i64, minutes: i64, seconds: i64, frames: i64) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            frames,
        }
    }

    /// Minutes elapsed since `00:00`, counting hours.
    #[must_use]
    pub const fn total_minutes(&self) -> i64 {
        self.hours.saturating_mul(60).saturating_add(self.minutes)
    }

    /// Decode a frame count into components.
    #[must_use]
    pub fn from_frame(frame: i64, rate: &Rate, drop_frame: bool) -> Self {
        if drop_frame {
            dropframe::decode(frame, rate)
        } else {
            Self::from_frame_ndf(frame, rate)
        }
    }

    /// Non-drop-frame decode.
    #[must_use]
    pub fn from_frame_ndf(frame: i64, rate: &Rate) -> Self {
        Self::from_frame_wide(i128::from(frame), rate)
    }

    /// Non-drop-frame decode of a frame count that may lie past the `i64` range,
    /// as the drop-frame correction produces near `i64::MAX`.
    pub(crate) fn from_frame_wide(frame: i128, rate: &Rate) -> Self {
        let nominal = i128::from(rate.nominal());

        let frames = frame % nominal;
        let total_seconds = (frame - frames) / nominal;
        let seconds = total_seconds % 60;
        let total_minutes = (total_seconds - seconds) / 60;
        let minutes = total_minutes % 60;
        let hours = (total_minutes - minutes) / 60;

        Self {
            hours: clamp_i64(hours),
            minutes: clamp_i64(minutes),
            seconds: clamp_i64(seconds),
            frames: clamp_i64(frames),
        }
    }

    /// Encode components into a frame count.
    ///
    /// Fields are not range checked: `seconds = 99` simply counts 99 seconds.
    /// In drop-frame mode a dropped display frame is moved forward to the first
    /// frame that exists. Results beyond the `i64` range saturate; use
    /// [`Components::checked_to_frame`] to detect that.
    #[must_use]
    pub fn to_frame(&self, rate: &Rate, drop_frame: bool) -> i64 {
        clamp_i64(self.to_frame_wide(rate, drop_frame))
    }

    /// Encode components into a frame count, or `None` if it does not fit an `i64`.
    #[must_use]
    pub fn checked_to_frame(&self, rate: &Rate, drop_frame: bool) -> Option<i64> {
        i64::try_from(self.to_frame_wide(rate, drop_frame)).ok()
    }

    /// Nominal frame count, ignoring drop-frame. Saturates like [`Components::to_frame`].
    #[must_use]
    pub fn to_frame_ndf(&self, rate: &Rate) -> i64 {
        clamp_i64(self.to_frame_ndf_wide(rate))
    }

    // i64 fields times 3600 * u32::MAX stay well inside i128.
    fn to_frame_wide(&self, rate: &Rate, drop_frame: bool) -> i128 {
        if !drop_frame {
            return self.to_frame_ndf_wide(rate);
        }
        let snapped = dropframe::snap_to_valid(*self, rate);
        snapped.to_frame_ndf_wide(rate)
            - dropframe::frames_dropped_wide(snapped.total_minutes_wide(), rate)
    }

    fn to_frame_ndf_wide(&self, rate: &Rate) -> i128 {
        (self.total_minutes_wide() * 60 + i128::from(self.seconds)) * i128::from(rate.nominal())
            + i128::from(self.frames)
    }

    fn total_minutes_wide(&self) -> i128 {
        i128::from(self.hours) * 60 + i128::from(self.minutes)
    }
}

fn clamp_i64(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ndf_decode() {
        let c = Components::from_frame_ndf(1511, &Rate::FPS_24);
        assert_eq!(c, Components::new(0, 1, 2, 23));

        let c = Components::from_frame_ndf(86400, &Rate::FPS_24);
        assert_eq!(c, Components::new(1, 0, 0, 0));

        // 01:30:30:12 at 24 fps
        let c = Components::from_frame_ndf(130332, &Rate::FPS_24);
        assert_eq!(c, Components::new(1, 30, 30, 12));
    }

    #[test]
    fn test_ndf_hours_unbounded() {
        let frame = 123 * 3600 * 30 + 7;
        let c = Components::from_frame_ndf(frame, &Rate::FPS_30);
        assert_eq!(c, Components::new(123, 0, 0, 7));
    }

    #[test]
    fn test_ndf_encode() {
        assert_eq!(Components::new(0, 1, 2, 23).to_frame(&Rate::FPS_24, false), 1511);
        assert_eq!(Components::new(1, 0, 0, 0).to_frame(&Rate::FPS_30, false), 108000);
    }

    #[test]
    fn test_out_of_range_components_fold() {
        // 99 seconds is one minute and 39 seconds
        let overflowed = Components::new(0, 0, 99, 0).to_frame(&Rate::FPS_24, false);
        let canonical = Components::new(0, 1, 39, 0).to_frame(&Rate::FPS_24, false);
        assert_eq!(overflowed, canonical);
    }

    #[test]
    fn test_negative_frame_truncates() {
        assert_eq!(
            Components::from_frame_ndf(-1, &Rate::FPS_30),
            Components::new(0, 0, 0, -1)
        );
        assert_eq!(
            Components::from_frame_ndf(-2000, &Rate::FPS_30),
            Components::new(0, -1, -6, -20)
        );
        // Encoding brings the same frame count back
        let c = Components::from_frame_ndf(-2000, &Rate::FPS_30);
        assert_eq!(c.to_frame(&Rate::FPS_30, false), -2000);
    }

    #[test]
    fn test_decode_extreme_frames() {
        assert_eq!(
            Components::from_frame_ndf(i64::MAX, &Rate::FPS_30),
            Components::new(85_401_592_933_840, 31, 0, 7)
        );
        let c = Components::from_frame_ndf(i64::MIN, &Rate::FPS_30);
        assert!(c.hours < 0 && c.frames <= 0);
    }

    #[test]
    fn test_encode_beyond_i64() {
        let huge = Components::new(i64::MAX, 0, 0, 0);
        assert_eq!(huge.checked_to_frame(&Rate::FPS_24, false), None);
        assert_eq!(huge.to_frame(&Rate::FPS_24, false), i64::MAX);
        assert_eq!(huge.checked_to_frame(&Rate::FPS_29_97, true), None);

        let negative = Components::new(i64::MIN, 0, 0, 0);
        assert_eq!(negative.to_frame(&Rate::FPS_24, false), i64::MIN);

        let max = Components::from_frame_ndf(i64::MAX, &Rate::FPS_30);
        assert_eq!(max.checked_to_frame(&Rate::FPS_30, false), Some(i64::MAX));
    }

    #[test]
    fn test_dispatch_by_drop_flag() {
        let df = Components::from_frame(3600, &Rate::FPS_59_94, true);
        let ndf = Components::from_frame(3600, &Rate::FPS_59_94, false);
        assert_eq!(df, Components::new(0, 1, 0, 4));
        assert_eq!(ndf, Components::new(0, 1, 0, 0));
    }
}
