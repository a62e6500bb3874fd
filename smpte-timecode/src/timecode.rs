//! The timecode value.
//!
//! A [`Timecode`] is an absolute frame count tagged with a [`Rate`] and a
//! drop-frame flag. The frame count is the only source of truth: components and
//! the display string are derived from it on demand, and arithmetic produces new
//! values.

use crate::components::Components;
use crate::error::Result;
use crate::rate::Rate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};

/// Anything that carries an absolute frame count.
pub trait Framer {
    /// The absolute frame count.
    fn frame(&self) -> i64;
}

impl Framer for i64 {
    fn frame(&self) -> i64 {
        *self
    }
}

impl Framer for i32 {
    fn frame(&self) -> i64 {
        i64::from(*self)
    }
}

impl<T: Framer + ?Sized> Framer for &T {
    fn frame(&self) -> i64 {
        (**self).frame()
    }
}

/// SMPTE timecode.
///
/// Equality and ordering look at the frame count only. Combining timecodes
/// with different rates is the caller's responsibility; no normalization happens.
///
/// The drop-frame flag is not checked against the rate. Values produced by
/// [`crate::parse()`] carry whatever the string's separator said.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Timecode {
    frame: i64,
    rate: Rate,
    drop_frame: bool,
}

impl Timecode {
    /// Create a timecode from an absolute frame count.
    #[must_use]
    pub const fn new(frame: i64, rate: Rate, drop_frame: bool) -> Self {
        Self {
            frame,
            rate,
            drop_frame,
        }
    }

    /// Parse a timecode string. See [`crate::parse()`].
    pub fn parse(s: &str, rate: Rate) -> Result<Self> {
        crate::parse::parse(s, rate)
    }

    /// Build a timecode from components. See [`crate::from_components`].
    #[must_use]
    pub fn from_components(components: Components, rate: Rate, drop_frame: bool) -> Self {
        crate::parse::from_components(components, rate, drop_frame)
    }

    /// The absolute frame count.
    #[must_use]
    pub const fn frame(&self) -> i64 {
        self.frame
    }

    /// The frame rate.
    #[must_use]
    pub const fn rate(&self) -> Rate {
        self.rate
    }

    /// Whether this timecode displays as drop-frame.
    #[must_use]
    pub const fn is_drop_frame(&self) -> bool {
        self.drop_frame
    }

    /// Hours, minutes, seconds and display frame.
    #[must_use]
    pub fn components(&self) -> Components {
        Components::from_frame(self.frame, &self.rate, self.drop_frame)
    }

    /// Get the separator character in front of the frames field.
    #[must_use]
    pub const fn separator(&self) -> char {
        if self.drop_frame {
            ';'
        } else {
            ':'
        }
    }

    /// Add frames to the timecode. Negative counts move backwards, past zero if need be.
    ///
    /// The frame count saturates at `i64::MIN` and `i64::MAX`.
    #[must_use]
    pub fn add_frames(&self, frames: i64) -> Self {
        Self::new(self.frame.saturating_add(frames), self.rate, self.drop_frame)
    }

    /// Add displayed seconds (`nominal` frames each).
    ///
    /// At drop-frame rates this is not real elapsed time; see
    /// [`Timecode::add_playback_seconds`].
    #[must_use]
    pub fn add_seconds(&self, seconds: i64) -> Self {
        self.add_frames(i64::from(self.rate.nominal()).saturating_mul(seconds))
    }

    /// Add real elapsed seconds at the true frame rate.
    ///
    /// Drop-frame timecodes advance one frame less. The frame count never moves
    /// backwards.
    #[must_use]
    pub fn add_playback_seconds(&self, seconds: f64) -> Self {
        let real = (seconds * f64::from(self.rate.num()) / f64::from(self.rate.den())).floor() as i64;
        let frames = real.saturating_sub(i64::from(self.drop_frame)).max(0);
        self.add_frames(frames)
    }

    /// Compare frame counts with a timecode or a bare frame count.
    #[must_use]
    pub fn equals(&self, other: impl Framer) -> bool {
        self.frame == other.frame()
    }

    /// Real presentation time of this frame in milliseconds.
    ///
    /// For drop-frame rates this drifts from the displayed time within each
    /// ten-minute block.
    #[must_use]
    pub fn presentation_time_ms(&self) -> f64 {
        self.rate.playback_duration_ms() * self.frame as f64
    }
}

impl Framer for Timecode {
    fn frame(&self) -> i64 {
        self.frame
    }
}

impl Default for Timecode {
    fn default() -> Self {
        Self::new(0, Rate::FPS_24, false)
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.components();
        let width = self.rate.nominal().ilog10() as usize + 1;
        write!(
            f,
            "{:02}:{:02}:{:02}{}{:0width$}",
            c.hours,
            c.minutes,
            c.seconds,
            self.separator(),
            c.frames,
        )
    }
}

impl PartialEq for Timecode {
    fn eq(&self, other: &Self) -> bool {
        self.frame == other.frame
    }
}

impl Eq for Timecode {}

impl PartialEq<i64> for Timecode {
    fn eq(&self, other: &i64) -> bool {
        self.frame == *other
    }
}

impl Hash for Timecode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.frame.hash(state);
    }
}

impl PartialOrd for Timecode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timecode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.frame.cmp(&other.frame)
    }
}

impl<F: Framer> Add<F> for Timecode {
    type Output = Self;

    fn add(self, other: F) -> Self {
        self.add_frames(other.frame())
    }
}

impl<F: Framer> Sub<F> for Timecode {
    type Output = Self;

    fn sub(self, other: F) -> Self {
        Self::new(
            self.frame.saturating_sub(other.frame()),
            self.rate,
            self.drop_frame,
        )
    }
}
