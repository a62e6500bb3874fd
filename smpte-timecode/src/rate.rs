//! Frame rate descriptors.
//!
//! A [`Rate`] carries three facts about a frame rate:
//! - the nominal integer frame count per displayed second (24, 30, 60)
//! - how many frame numbers drop-frame display skips per drop incident
//! - the true rate as a ratio, used for playback-duration math
//!
//! The supported rates are associated constants. Custom rates go through
//! [`Rate::new`], which enforces the same contract the constants satisfy.

use crate::error::{Result, TimecodeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An immutable frame rate descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RateFields")]
pub struct Rate {
    nominal: u32,
    drop: u32,
    num: u32,
    den: u32,
}

/// Registered labels, in lookup order. The first label of a rate is its display label.
const REGISTRY: [(&str, Rate); 7] = [
    ("23.976", Rate::FPS_23_976),
    ("23.98", Rate::FPS_23_976),
    ("24", Rate::FPS_24),
    ("29.97", Rate::FPS_29_97),
    ("30", Rate::FPS_30),
    ("59.94", Rate::FPS_59_94),
    ("60", Rate::FPS_60),
];

impl Rate {
    /// 23.976 fps (24000/1001). Counts 24 frames per displayed second; drop-frame
    /// display skips 2 frame numbers per incident.
    pub const FPS_23_976: Self = Self::from_parts(24, 2, 24000, 1001);
    /// 24 fps film.
    pub const FPS_24: Self = Self::from_parts(24, 0, 24, 1);
    /// 29.97 fps NTSC (30000/1001), 2 frame numbers dropped per incident.
    pub const FPS_29_97: Self = Self::from_parts(30, 2, 30000, 1001);
    /// 30 fps.
    pub const FPS_30: Self = Self::from_parts(30, 0, 30, 1);
    /// 59.94 fps (60000/1001), 4 frame numbers dropped per incident.
    pub const FPS_59_94: Self = Self::from_parts(60, 4, 60000, 1001);
    /// 60 fps.
    pub const FPS_60: Self = Self::from_parts(60, 0, 60, 1);

    const fn from_parts(nominal: u32, drop: u32, num: u32, den: u32) -> Self {
        Self {
            nominal,
            drop,
            num,
            den,
        }
    }

    /// Create a custom rate descriptor.
    ///
    /// The descriptor must have a positive nominal rate and a positive ratio
    /// `num/den` that rounds to `nominal`, and must drop fewer frame numbers
    /// than there are frames in a second.
    pub fn new(nominal: u32, drop: u32, num: u32, den: u32) -> Result<Self> {
        let invalid = || TimecodeError::invalid_rate(nominal, drop, num, den);
        if nominal == 0 || num == 0 || den == 0 || drop >= nominal {
            return Err(invalid());
        }
        // round(num / den), half away from zero
        let rounded = (2 * u64::from(num) + u64::from(den)) / (2 * u64::from(den));
        if rounded != u64::from(nominal) {
            return Err(invalid());
        }
        Ok(Self::from_parts(nominal, drop, num, den))
    }

    /// Look up a rate by its label (`"23.976"`, `"23.98"`, `"24"`, `"29.97"`,
    /// `"30"`, `"59.94"`, `"60"`).
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        REGISTRY
            .iter()
            .find(|(name, _)| *name == label)
            .map(|(_, rate)| *rate)
    }

    /// The registered display label, if this is one of the built-in rates.
    #[must_use]
    pub fn label(&self) -> Option<&'static str> {
        REGISTRY
            .iter()
            .find(|(_, rate)| rate == self)
            .map(|(name, _)| *name)
    }

    /// Nominal integer frames per displayed second.
    #[must_use]
    pub const fn nominal(&self) -> u32 {
        self.nominal
    }

    /// Frame numbers skipped per drop incident (0 for non-drop rates).
    #[must_use]
    pub const fn drop(&self) -> u32 {
        self.drop
    }

    /// True rate numerator.
    #[must_use]
    pub const fn num(&self) -> u32 {
        self.num
    }

    /// True rate denominator.
    #[must_use]
    pub const fn den(&self) -> u32 {
        self.den
    }

    /// Whether this rate is displayed with drop-frame timecode.
    #[must_use]
    pub const fn is_drop_frame(&self) -> bool {
        self.drop != 0
    }

    /// The true rate in frames per real second.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Real playback duration of one frame, in milliseconds.
    #[must_use]
    pub fn playback_duration_ms(&self) -> f64 {
        (f64::from(self.den) / f64::from(self.num)) * 1000.0
    }
}

/// Look up a rate by label. Returns `None` for unrecognized labels.
#[must_use]
pub fn parse_rate(label: &str) -> Option<Rate> {
    Rate::from_label(label)
}

/// Real playback duration of one frame at `rate`, in milliseconds.
#[must_use]
pub fn playback_duration_ms(rate: &Rate) -> f64 {
    rate.playback_duration_ms()
}

impl FromStr for Rate {
    type Err = TimecodeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_label(s).ok_or_else(|| TimecodeError::unknown_rate(s))
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => f.write_str(label),
            None => write!(f, "{}/{}", self.num, self.den),
        }
    }
}

#[derive(Deserialize)]
struct RateFields {
    nominal: u32,
    drop: u32,
    num: u32,
    den: u32,
}

impl TryFrom<RateFields> for Rate {
    type Error = TimecodeError;

    fn try_from(fields: RateFields) -> Result<Self> {
        Self::new(fields.nominal, fields.drop, fields.num, fields.den)
    }
}
