//! Drop-frame timecode support.
//!
//! Drop-frame display skips frame numbers `0..drop` at the start of every minute
//! whose number is not a multiple of 10. No video frames are discarded; only
//! their labels move, which keeps the displayed time close to wall-clock time
//! for 23.976, 29.97 and 59.94 fps material.
//!
//! Encoding is closed form. Decoding a real frame count is not: each minute
//! boundary crossed while correcting for earlier drops may itself be a drop
//! incident, so [`decode`] iterates until no new boundaries are crossed.

use crate::components::Components;
use crate::rate::Rate;

/// Number of drop incidents among minutes `1..=total_minutes`.
///
/// Every block of ten minutes holds exactly one exempt minute, so the count is
/// `m - floor(m / 10)`. Zero or negative minute counts have no incidents.
#[must_use]
pub fn drop_incidents(total_minutes: i64) -> i64 {
    (total_minutes - total_minutes.div_euclid(10)).max(0)
}

/// Frame numbers skipped by drop-frame display up to and including `total_minutes`.
#[must_use]
pub fn frames_dropped_before(total_minutes: i64, rate: &Rate) -> i64 {
    drop_incidents(total_minutes).saturating_mul(i64::from(rate.drop()))
}

/// [`frames_dropped_before`] over a minute count wider than `i64`.
pub(crate) fn frames_dropped_wide(total_minutes: i128, rate: &Rate) -> i128 {
    let incidents = (total_minutes - total_minutes.div_euclid(10)).max(0);
    incidents * i128::from(rate.drop())
}

/// Check whether `components` names a display frame that drop-frame skips.
#[must_use]
pub fn is_dropped_frame(components: &Components, rate: &Rate) -> bool {
    components.minutes % 10 > 0
        && components.seconds == 0
        && components.frames < i64::from(rate.drop())
}

/// Move a skipped display frame forward to the first frame of its second.
#[must_use]
pub fn snap_to_valid(components: Components, rate: &Rate) -> Components {
    if !is_dropped_frame(&components, rate) {
        return components;
    }
    tracing::debug!(
        minutes = components.minutes,
        frames = components.frames,
        drop = rate.drop(),
        "snapping dropped display frame forward"
    );
    Components {
        frames: i64::from(rate.drop()),
        ..components
    }
}

/// Decode a real frame count into drop-frame display components.
#[must_use]
pub fn decode(frame: i64, rate: &Rate) -> Components {
    let drop = i128::from(rate.drop());

    // Near i64::MAX the corrected count runs past the i64 range.
    let mut working = i128::from(frame);
    let mut comps = Components::from_frame_wide(working, rate);
    let mut incidents = drop_incidents(comps.total_minutes());

    // Each pass that continues crosses at least one new minute, and the total
    // correction stays below one displayed second per elapsed minute.
    let limit = comps.total_minutes().max(0) + 2;
    let mut iterations = 0;

    while incidents > 0 {
        iterations += 1;
        debug_assert!(
            iterations <= limit,
            "drop-frame decode of frame {frame} did not converge"
        );

        working += i128::from(incidents) * drop;
        let next = Components::from_frame_wide(working, rate);
        incidents = drop_incidents(next.total_minutes()) - drop_incidents(comps.total_minutes());

        tracing::trace!(
            working = %working,
            minutes = next.total_minutes(),
            incidents,
            "drop-frame correction pass"
        );
        comps = next;
    }

    comps
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_drop_incidents() {
        assert_eq!(drop_incidents(0), 0);
        assert_eq!(drop_incidents(1), 1);
        assert_eq!(drop_incidents(9), 9);
        assert_eq!(drop_incidents(10), 9);
        assert_eq!(drop_incidents(11), 10);
        assert_eq!(drop_incidents(60), 54);
        assert_eq!(drop_incidents(-5), 0);
    }

    #[test]
    fn test_frames_dropped_before() {
        assert_eq!(frames_dropped_before(0, &Rate::FPS_29_97), 0);
        assert_eq!(frames_dropped_before(1, &Rate::FPS_29_97), 2);
        assert_eq!(frames_dropped_before(10, &Rate::FPS_29_97), 18);
        assert_eq!(frames_dropped_before(11, &Rate::FPS_29_97), 20);
        assert_eq!(frames_dropped_before(60, &Rate::FPS_59_94), 216);
        assert_eq!(frames_dropped_before(60, &Rate::FPS_30), 0);
    }

    #[test]
    fn test_is_dropped_frame() {
        let rate = Rate::FPS_29_97;
        assert!(is_dropped_frame(&Components::new(0, 1, 0, 0), &rate));
        assert!(is_dropped_frame(&Components::new(0, 1, 0, 1), &rate));
        assert!(!is_dropped_frame(&Components::new(0, 1, 0, 2), &rate));

        // Every tenth minute keeps all its frame numbers
        assert!(!is_dropped_frame(&Components::new(0, 10, 0, 0), &rate));
        assert!(!is_dropped_frame(&Components::new(2, 0, 0, 1), &rate));
        assert!(!is_dropped_frame(&Components::new(0, 0, 0, 0), &rate));

        // Only the first second of the minute drops
        assert!(!is_dropped_frame(&Components::new(0, 5, 1, 0), &rate));
    }

    #[test]
    fn test_snap_to_valid() {
        let snapped = snap_to_valid(Components::new(0, 1, 0, 0), &Rate::FPS_29_97);
        assert_eq!(snapped, Components::new(0, 1, 0, 2));

        let snapped = snap_to_valid(Components::new(3, 7, 0, 3), &Rate::FPS_59_94);
        assert_eq!(snapped, Components::new(3, 7, 0, 4));

        let untouched = Components::new(0, 1, 0, 5);
        assert_eq!(snap_to_valid(untouched, &Rate::FPS_29_97), untouched);
    }

    #[test]
    fn test_decode_basic() {
        let rate = Rate::FPS_29_97;
        assert_eq!(decode(0, &rate), Components::new(0, 0, 0, 0));
        assert_eq!(decode(29, &rate), Components::new(0, 0, 0, 29));
        assert_eq!(decode(30, &rate), Components::new(0, 0, 1, 0));
    }

    #[test]
    fn test_decode_minute_boundary() {
        // Frames 0 and 1 of minute one do not exist
        assert_eq!(decode(1799, &Rate::FPS_29_97), Components::new(0, 0, 59, 29));
        assert_eq!(decode(1800, &Rate::FPS_29_97), Components::new(0, 1, 0, 2));
        assert_eq!(decode(3600, &Rate::FPS_59_94), Components::new(0, 1, 0, 4));
    }

    #[test]
    fn test_decode_ten_minute_boundary() {
        // 10 minutes of 29.97 drop-frame is 17982 frames
        assert_eq!(decode(17981, &Rate::FPS_29_97), Components::new(0, 9, 59, 29));
        assert_eq!(decode(17982, &Rate::FPS_29_97), Components::new(0, 10, 0, 0));
        assert_eq!(decode(17983, &Rate::FPS_29_97), Components::new(0, 10, 0, 1));
    }

    #[test]
    fn test_decode_one_hour() {
        // One hour of 29.97 drop-frame is 107892 frames
        assert_eq!(decode(107892, &Rate::FPS_29_97), Components::new(1, 0, 0, 0));
    }

    #[test]
    fn test_decode_encode_roundtrip() {
        for rate in [Rate::FPS_23_976, Rate::FPS_29_97, Rate::FPS_59_94] {
            for frame in [0, 1, 1439, 1440, 1799, 1800, 1801, 17981, 17982, 17983, 215_784, 3_000_001] {
                let comps = decode(frame, &rate);
                assert_eq!(
                    comps.to_frame(&rate, true),
                    frame,
                    "frame {frame} at {rate} decoded to {comps:?}"
                );
            }
        }
    }

    #[test]
    fn test_decode_near_i64_max() {
        assert_eq!(
            decode(i64::MAX - 10, &Rate::FPS_29_97),
            Components::new(85_487_080_013_854, 22, 15, 19)
        );
        assert_eq!(
            decode(i64::MAX, &Rate::FPS_59_94),
            Components::new(42_743_540_006_927, 11, 7, 59)
        );
        assert_eq!(
            frames_dropped_before(i64::MAX, &Rate::FPS_59_94),
            i64::MAX
        );
    }

    #[test]
    fn test_decode_negative_matches_ndf() {
        let rate = Rate::FPS_29_97;
        for frame in [-1, -5, -100, -2000, -200_000] {
            assert_eq!(decode(frame, &rate), Components::from_frame_ndf(frame, &rate));
        }
    }
}
