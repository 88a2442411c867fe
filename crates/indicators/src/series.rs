// In crates/indicators/src/series.rs

use crate::{Error, Result};
use ta::indicators::ExponentialMovingAverage as Ema;
use ta::Next;

/// The EMA/MACD decomposition of a rate series. All four vectors have the
/// same length as the input series.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdSeries {
    pub ema_short: Vec<f64>,
    pub ema_long: Vec<f64>,
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
}

/// Computes the exponential moving average of `series` with the given span.
///
/// The smoothing factor is `2 / (span + 1)` and the average is seeded with
/// the first element, so `out[0] == series[0]` and `out[i]` depends only on
/// `series[0..=i]`. With `span == 1` the output equals the input.
pub fn ema(series: &[f64], span: usize) -> Result<Vec<f64>> {
    if series.is_empty() {
        return Err(Error::InvalidInput("series is empty"));
    }
    let mut ema = Ema::new(span).map_err(|_| Error::InvalidInput("span must be at least 1"))?;
    Ok(series.iter().map(|&value| ema.next(value)).collect())
}

/// Computes the MACD line and its signal line over a rate series.
///
/// `macd[i] = ema(series, short_span)[i] - ema(series, long_span)[i]` and the
/// signal line is the EMA of the MACD line with `signal_span`. Recomputing
/// over the same series always yields the same values.
pub fn macd(
    series: &[f64],
    short_span: usize,
    long_span: usize,
    signal_span: usize,
) -> Result<MacdSeries> {
    let ema_short = ema(series, short_span)?;
    let ema_long = ema(series, long_span)?;
    let macd: Vec<f64> = ema_short
        .iter()
        .zip(&ema_long)
        .map(|(short, long)| short - long)
        .collect();
    let signal = ema(&macd, signal_span)?;

    Ok(MacdSeries {
        ema_short,
        ema_long,
        macd,
        signal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn ema_rejects_empty_series() {
        assert_eq!(ema(&[], 12), Err(Error::InvalidInput("series is empty")));
    }

    #[test]
    fn ema_output_length_matches_input() {
        let series = [100.0, 101.0, 99.5, 102.0, 98.0];
        assert_eq!(ema(&series, 3).unwrap().len(), series.len());
    }

    #[test]
    fn ema_with_span_one_is_identity() {
        let series = [100.0, 101.0, 99.5, 102.0, 98.0];
        assert_eq!(ema(&series, 1).unwrap(), series.to_vec());
    }

    #[test]
    fn ema_matches_hand_computed_values() {
        // span 2 -> alpha = 2/3, seeded with the first element.
        let out = ema(&[1.0, 2.0, 3.0], 2).unwrap();
        assert_close(out[0], 1.0);
        assert_close(out[1], 2.0 / 3.0 * 2.0 + 1.0 / 3.0 * 1.0);
        assert_close(out[2], 2.0 / 3.0 * 3.0 + 1.0 / 3.0 * out[1]);
    }

    #[test]
    fn macd_is_short_minus_long_ema() {
        let series = [10.0, 12.0, 11.0, 13.0];
        let out = macd(&series, 1, 2, 1).unwrap();

        // short span 1 keeps the raw series; signal span 1 keeps the MACD line.
        assert_eq!(out.ema_short, series.to_vec());
        assert_eq!(out.signal, out.macd);
        for i in 0..series.len() {
            assert_close(out.macd[i], out.ema_short[i] - out.ema_long[i]);
        }
    }

    #[test]
    fn macd_is_deterministic_over_replays() {
        let series = [100.0, 104.0, 103.0, 99.0, 101.0, 105.0, 102.0];
        let first = macd(&series, 12, 26, 9).unwrap();
        let second = macd(&series, 12, 26, 9).unwrap();
        assert_eq!(first, second);
    }
}
