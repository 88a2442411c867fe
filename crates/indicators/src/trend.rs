// In crates/indicators/src/trend.rs

use crate::{Error, Result};
use core_types::Trend;

/// Which point of the series a trend is evaluated at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offset {
    /// The last element of the series.
    Current,
    /// The second-to-last element of the series.
    Previous,
}

impl Offset {
    /// Distance from the end of the series (1-based).
    fn depth(self) -> usize {
        match self {
            Offset::Current => 1,
            Offset::Previous => 2,
        }
    }
}

/// Classifies the MACD/signal relationship at the given offset.
///
/// The rule is a strict comparison: `signal < macd` is Rising, anything else
/// is Falling. It is evaluated on every call, not only when the difference
/// changes sign. Series shorter than the requested offset yield
/// `InsufficientHistory`; callers map that to [`Trend::Undetermined`] rather
/// than guessing a label.
pub fn detect_trend(signal: &[f64], macd: &[f64], offset: Offset) -> Result<Trend> {
    let depth = offset.depth();
    let len = signal.len().min(macd.len());
    if len < depth {
        return Err(Error::InsufficientHistory { needed: depth, len });
    }

    let signal_value = signal[signal.len() - depth];
    let macd_value = macd[macd.len() - depth];

    if signal_value < macd_value {
        Ok(Trend::Rising)
    } else {
        Ok(Trend::Falling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rising_when_signal_below_macd() {
        let trend = detect_trend(&[0.5, 0.2], &[0.4, 0.9], Offset::Current).unwrap();
        assert_eq!(trend, Trend::Rising);
    }

    #[test]
    fn falling_when_signal_at_or_above_macd() {
        let trend = detect_trend(&[0.5, 0.9], &[0.4, 0.3], Offset::Current).unwrap();
        assert_eq!(trend, Trend::Falling);

        // Equality is not "rising": the comparison is strict.
        let trend = detect_trend(&[0.7], &[0.7], Offset::Current).unwrap();
        assert_eq!(trend, Trend::Falling);
    }

    #[test]
    fn previous_offset_reads_second_to_last() {
        let signal = [0.1, 0.8, 0.0];
        let macd = [0.9, 0.2, 0.9];
        let trend = detect_trend(&signal, &macd, Offset::Previous).unwrap();
        assert_eq!(trend, Trend::Falling);
    }

    #[test]
    fn short_series_is_insufficient_history() {
        assert_eq!(
            detect_trend(&[], &[], Offset::Current),
            Err(Error::InsufficientHistory { needed: 1, len: 0 })
        );
        assert_eq!(
            detect_trend(&[0.1], &[0.2], Offset::Previous),
            Err(Error::InsufficientHistory { needed: 2, len: 1 })
        );
    }

    #[test]
    fn same_inputs_same_trend() {
        let signal = [0.3, -0.1, 0.25];
        let macd = [0.1, 0.4, 0.3];
        for offset in [Offset::Current, Offset::Previous] {
            let first = detect_trend(&signal, &macd, offset).unwrap();
            let second = detect_trend(&signal, &macd, offset).unwrap();
            assert_eq!(first, second);
        }
    }
}
