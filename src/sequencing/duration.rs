use std::str::FromStr;

use crate::error::DurationParseError;

/// Musical note duration represented as a rational fraction of a whole note.
/// All operations preserve exact ratios until converted to seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration {
    /// Numerator: how many parts
    pub numerator: u32,
    /// Denominator: of what size (4 = quarter, 8 = eighth, etc.)
    pub denominator: u32,
}

/// Shortest note value the parser accepts (a 256th note).
pub const MAX_NOTE_VALUE: u32 = 256;

impl Duration {
    // Standard note values
    pub const WHOLE: Duration = Duration::of(1);
    pub const HALF: Duration = Duration::of(2);
    pub const QUARTER: Duration = Duration::of(4);
    pub const EIGHTH: Duration = Duration::of(8);
    pub const SIXTEENTH: Duration = Duration::of(16);

    /// One `1/value` note, e.g. `Duration::of(8)` is an eighth.
    pub const fn of(value: u32) -> Self {
        Duration {
            numerator: 1,
            denominator: value,
        }
    }

    /// Apply a dot: multiply duration by 3/2
    pub const fn dotted(self) -> Self {
        Duration {
            numerator: self.numerator * 3,
            denominator: self.denominator * 2,
        }
        .reduce()
    }

    /// Three notes in the time of two: multiply duration by 2/3
    pub const fn triplet(self) -> Self {
        Duration {
            numerator: self.numerator * 2,
            denominator: self.denominator * 3,
        }
        .reduce()
    }

    /// Reduce the fraction to lowest terms using GCD
    pub const fn reduce(self) -> Self {
        let gcd = const_gcd(self.numerator, self.denominator);
        if gcd == 0 {
            return self;
        }
        Duration {
            numerator: self.numerator / gcd,
            denominator: self.denominator / gcd,
        }
    }

    /// Length in seconds at the given tempo, counting quarter notes as beats.
    ///
    /// seconds = (numerator / denominator) * 4 * (60 / bpm)
    pub fn to_seconds(&self, bpm: f64) -> f64 {
        let whole_note_seconds = 4.0 * 60.0 / bpm;
        whole_note_seconds * self.numerator as f64 / self.denominator as f64
    }
}

/// Parses transport notation: `"8n"` (eighth), `"4n."` (dotted quarter),
/// `"8t"` (eighth triplet).
impl FromStr for Duration {
    type Err = DurationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DurationParseError::Empty);
        }

        let (body, dotted) = match s.strip_suffix('.') {
            Some(body) => (body, true),
            None => (s, false),
        };

        let (digits, triplet) = if let Some(digits) = body.strip_suffix('n') {
            (digits, false)
        } else if let Some(digits) = body.strip_suffix('t') {
            (digits, true)
        } else {
            return Err(DurationParseError::UnknownSuffix(s.to_string()));
        };

        let value: u32 = digits
            .parse()
            .map_err(|_| DurationParseError::InvalidValue(s.to_string()))?;
        if value == 0 || value > MAX_NOTE_VALUE || !value.is_power_of_two() {
            return Err(DurationParseError::InvalidValue(s.to_string()));
        }

        let mut duration = Duration::of(value);
        if triplet {
            duration = duration.triplet();
        }
        if dotted {
            duration = duration.dotted();
        }
        Ok(duration)
    }
}

/// Compute greatest common divisor (Euclidean algorithm)
const fn const_gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eighth_note_at_default_tempo() {
        // 120 BPM: quarter = 0.5s, eighth = 0.25s
        assert!((Duration::EIGHTH.to_seconds(120.0) - 0.25).abs() < 1e-12);
        assert!((Duration::QUARTER.to_seconds(120.0) - 0.5).abs() < 1e-12);
        assert!((Duration::WHOLE.to_seconds(60.0) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_parse_plain_values() {
        assert_eq!("8n".parse::<Duration>(), Ok(Duration::EIGHTH));
        assert_eq!("4n".parse::<Duration>(), Ok(Duration::QUARTER));
        assert_eq!(" 16n ".parse::<Duration>(), Ok(Duration::SIXTEENTH));
    }

    #[test]
    fn test_parse_dotted_and_triplet() {
        let dotted: Duration = "4n.".parse().unwrap();
        assert_eq!(dotted, Duration { numerator: 3, denominator: 8 });

        let triplet: Duration = "8t".parse().unwrap();
        assert_eq!(triplet, Duration { numerator: 1, denominator: 12 });
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!("".parse::<Duration>(), Err(DurationParseError::Empty));
        assert!(matches!(
            "8x".parse::<Duration>(),
            Err(DurationParseError::UnknownSuffix(_))
        ));
        assert!(matches!(
            "0n".parse::<Duration>(),
            Err(DurationParseError::InvalidValue(_))
        ));
        assert!(matches!(
            "3n".parse::<Duration>(),
            Err(DurationParseError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_parse_rejects_huge_values() {
        for s in ["2147483648n.", "2147483648t", "2147483648n", "512n"] {
            assert!(
                matches!(s.parse::<Duration>(), Err(DurationParseError::InvalidValue(_))),
                "{s} should be rejected"
            );
        }
        let shortest: Duration = "256t.".parse().unwrap();
        assert!(shortest.to_seconds(120.0) > 0.0);
    }

    #[test]
    fn test_const_evaluation() {
        // Dotted eighth triplet comes back around to an eighth
        const BACK_TO_EIGHTH: Duration = Duration::EIGHTH.dotted().triplet();
        assert_eq!(BACK_TO_EIGHTH, Duration::EIGHTH);
    }
}
