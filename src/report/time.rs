//! Epoch timestamp parsing and elapsed time formatting

use crate::error::ParseTimeError;

/// Parse an integer number of seconds since the epoch
///
/// Accepts an optional sign followed by a decimal, `0x` hex, `0o` octal,
/// `0b` binary or leading-`0` octal literal. Underscores may separate digits.
pub fn parse_epoch_seconds(s: &str) -> Result<i64, ParseTimeError> {
    if s.is_empty() {
        return Err(ParseTimeError::Empty);
    }

    let (negative, unsigned) = match s.as_bytes()[0] {
        b'+' => (false, &s[1..]),
        b'-' => (true, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = split_radix(unsigned);

    if digits.contains('_') && !underscores_ok(unsigned) {
        return Err(ParseTimeError::InvalidSyntax);
    }
    let cleaned: String = digits.chars().filter(|&c| c != '_').collect();
    if cleaned.is_empty() || cleaned.starts_with(['+', '-']) {
        return Err(ParseTimeError::InvalidSyntax);
    }

    let signed = if negative {
        format!("-{}", cleaned)
    } else {
        cleaned
    };
    Ok(i64::from_str_radix(&signed, radix)?)
}

/// Split a base prefix off an unsigned literal
fn split_radix(s: &str) -> (u32, &str) {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return (10, s);
    }
    match bytes[1].to_ascii_lowercase() {
        b'x' => (16, &s[2..]),
        b'o' => (8, &s[2..]),
        b'b' => (2, &s[2..]),
        _ => (8, &s[1..]),
    }
}

/// Underscores must sit between digits (a base prefix counts as a digit)
fn underscores_ok(s: &str) -> bool {
    #[derive(PartialEq)]
    enum Saw {
        Start,
        Digit,
        Underscore,
        Other,
    }

    let bytes = s.as_bytes();
    let mut saw = Saw::Start;
    let mut i = 0;
    let mut hex = false;
    if bytes.len() >= 2 && bytes[0] == b'0' {
        let p = bytes[1].to_ascii_lowercase();
        if p == b'b' || p == b'o' || p == b'x' {
            i = 2;
            saw = Saw::Digit;
            hex = p == b'x';
        }
    }

    for &b in &bytes[i..] {
        if b.is_ascii_digit() || (hex && b.is_ascii_hexdigit()) {
            saw = Saw::Digit;
        } else if b == b'_' {
            if saw != Saw::Digit {
                return false;
            }
            saw = Saw::Underscore;
        } else if saw == Saw::Underscore {
            return false;
        } else {
            saw = Saw::Other;
        }
    }
    saw != Saw::Underscore
}

/// Render whole seconds compactly, e.g. `0s`, `45s`, `1m0s`, `26h3m4s`
pub fn format_elapsed(secs: i64) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let total = secs.unsigned_abs();
    let (hours, minutes, seconds) = (total / 3600, total / 60 % 60, total % 60);

    if hours > 0 {
        format!("{}{}h{}m{}s", sign, hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}{}m{}s", sign, minutes, seconds)
    } else {
        format!("{}{}s", sign, seconds)
    }
}
