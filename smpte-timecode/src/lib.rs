//! SMPTE timecode for fixed frame rates.
//!
//! This crate converts between absolute frame counts and `HH:MM:SS:FF` /
//! `HH:MM:SS;FF` timecode strings:
//!
//! - **Rates**: 23.976, 24, 29.97, 30, 59.94 and 60 fps, plus validated custom rates
//! - **Drop-Frame**: frame numbers skipped at non-tenth minutes, encoded and decoded exactly
//! - **Arithmetic**: frame, displayed-second and real playback-second offsets
//!
//! # Quick Start
//!
//! ```rust
//! use smpte_timecode::{parse, parse_rate, Rate, Timecode};
//!
//! // Parse from string
//! let tc = parse("00:01:02:23", Rate::FPS_24).unwrap();
//! assert_eq!(tc.frame(), 1511);
//!
//! // Create from a frame count
//! let tc2 = Timecode::new(1511, Rate::FPS_24, false);
//! assert_eq!(tc2.to_string(), "00:01:02:23");
//!
//! // Timecode arithmetic
//! let tc3 = tc + 3;
//! assert_eq!(tc3.to_string(), "00:01:03:02");
//!
//! // Rates from labels
//! assert_eq!(parse_rate("23.98"), Some(Rate::FPS_23_976));
//! assert_eq!(parse_rate("25"), None);
//! ```
//!
//! # Drop-Frame Timecode
//!
//! A `;` in front of the frames field selects drop-frame display:
//!
//! ```rust
//! use smpte_timecode::{parse, Rate};
//!
//! let tc = parse("14:56:59;59", Rate::FPS_59_94).unwrap();
//! assert_eq!((tc + 1).to_string(), "14:57:00;04");
//!
//! // Frame numbers that drop-frame skips resolve to the next real frame
//! let snapped = parse("00:01:00;00", Rate::FPS_29_97).unwrap();
//! assert_eq!(snapped.to_string(), "00:01:00;02");
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod components;
pub mod dropframe;
pub mod error;
pub mod parse;
pub mod rate;
pub mod timecode;

// Re-export main types
pub use components::Components;
pub use error::{Result, TimecodeError};
pub use parse::{from_components, parse, split_timecode};
pub use rate::{parse_rate, playback_duration_ms, Rate};
pub use timecode::{Framer, Timecode};

// Re-export drop-frame utilities
pub use dropframe::{drop_incidents, frames_dropped_before, is_dropped_frame};
