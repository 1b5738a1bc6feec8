//! Password strength estimation
//!
//! Estimates brute-force resistance from a password's character classes and
//! length: charset size, entropy in bits, estimated seconds to crack at a
//! fixed guess rate, and a normalized 0..1 score. Estimation never fails;
//! malformed input (including the empty string) degrades to a numeric floor
//! so a live-typing UI can call this on every keystroke.

use serde::Serialize;

use crate::duration;

/// Default adversary guess rate, in guesses per second
pub const DEFAULT_GUESSES_PER_SECOND: f64 = 1e9;

/// Entropy saturates the score at this many bits
const SCORE_SATURATION_BITS: f64 = 128.0;

/// Result of a strength estimation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrengthEstimate {
    pub charset_length: u32,
    pub password_length: usize,
    pub entropy: f64,
    pub seconds_to_crack: f64,
    pub score: f64,
}

impl StrengthEstimate {
    /// Render the crack time as a human-readable duration with English labels
    pub fn crack_duration(&self) -> String {
        duration::format_duration(self.seconds_to_crack)
    }

    /// Render the crack time, resolving unit labels through `translate`
    pub fn crack_duration_with<F>(&self, translate: F) -> String
    where
        F: Fn(&str, &str) -> String,
    {
        duration::format_duration_with(self.seconds_to_crack, translate)
    }
}

/// Size of the character pool a brute-force attacker must cover
///
/// Classes are detected independently and their sizes summed: lowercase
/// letters contribute 26, uppercase 26, digits 10, and special characters
/// (anything outside `[0-9A-Za-z]`, plus underscore) 32.
pub fn charset_length(password: &str) -> u32 {
    let mut length = 0;

    if password.chars().any(|c| c.is_ascii_lowercase()) {
        length += 26;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        length += 26;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        length += 10;
    }
    if password.chars().any(is_special) {
        length += 32;
    }

    length
}

// Mirrors the \W|_ character class: non-word characters plus underscore.
// Anything non-ASCII lands here too.
fn is_special(c: char) -> bool {
    !c.is_ascii_alphanumeric() || c == '_'
}

/// Estimate password strength at the default guess rate of 1e9/s
pub fn estimate(password: &str) -> StrengthEstimate {
    estimate_with_rate(password, DEFAULT_GUESSES_PER_SECOND)
}

/// Estimate password strength at a caller-supplied guess rate
///
/// Entropy is `log2(charset_length) * password_length`, zero for the empty
/// password. Crack time is the seconds to exhaust `2^entropy` guesses at
/// `guesses_per_second`. The score normalizes entropy against 128 bits,
/// saturating at 1.
pub fn estimate_with_rate(password: &str, guesses_per_second: f64) -> StrengthEstimate {
    let charset_length = charset_length(password);
    let password_length = password.chars().count();

    // log2(0) would poison every downstream number
    let entropy = if password.is_empty() {
        0.0
    } else {
        (charset_length as f64).log2() * password_length as f64
    };

    StrengthEstimate {
        charset_length,
        password_length,
        entropy,
        seconds_to_crack: entropy.exp2() / guesses_per_second,
        score: (entropy / SCORE_SATURATION_BITS).min(1.0),
    }
}
