#![no_main]

//! Fuzz target for timecode parsing and formatting.
//!
//! Tests that parsing never panics and that a parsed timecode, once formatted,
//! parses back to the same frame count.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use smpte_timecode::{parse, Rate};

#[derive(Arbitrary, Debug)]
struct TimecodeInput {
    text: String,
    rate: RateChoice,
    offset: i32,
}

#[derive(Arbitrary, Debug)]
enum RateChoice {
    Fps23_976,
    Fps24,
    Fps29_97,
    Fps30,
    Fps59_94,
    Fps60,
}

impl RateChoice {
    fn rate(&self) -> Rate {
        match self {
            Self::Fps23_976 => Rate::FPS_23_976,
            Self::Fps24 => Rate::FPS_24,
            Self::Fps29_97 => Rate::FPS_29_97,
            Self::Fps30 => Rate::FPS_30,
            Self::Fps59_94 => Rate::FPS_59_94,
            Self::Fps60 => Rate::FPS_60,
        }
    }
}

fuzz_target!(|input: TimecodeInput| {
    // Limit input size
    if input.text.len() > 64 {
        return;
    }

    let rate = input.rate.rate();
    let Ok(tc) = parse(&input.text, rate) else {
        return;
    };

    // Formatting must not panic for any frame count, negative ones included
    let shifted = tc + input.offset;
    let _ = shifted.to_string();

    // Anything still within two-digit hours must parse back to the same frame
    let formatted = tc.to_string();
    if let Ok(back) = parse(&formatted, rate) {
        assert_eq!(back.frame(), tc.frame(), "{:?} -> {}", input.text, formatted);
    }
});
