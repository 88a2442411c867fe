// In crates/market-data/src/history.rs

use crate::Result;
use core_types::IndicatorSample;
use std::fs::OpenOptions;
use std::path::PathBuf;

/// CSV file holding one indicator row per observed quote.
///
/// The full series is reloaded on every decision cycle and extended by one
/// row, mirroring the append-only layout of the ledger store: header on
/// creation, one flushed row per append.
#[derive(Debug, Clone)]
pub struct TrendHistory {
    path: PathBuf,
}

impl TrendHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the full sample series, oldest first. A missing file is an
    /// empty series, not an error.
    pub fn load(&self) -> Result<Vec<IndicatorSample>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut samples = Vec::new();
        for row in reader.deserialize() {
            samples.push(row?);
        }
        Ok(samples)
    }

    /// Appends one sample after all existing rows.
    pub fn append(&self, sample: &IndicatorSample) -> Result<()> {
        let is_new = !self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(is_new)
            .from_writer(file);
        writer.serialize(sample)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn sample(hour: u32, rate: &str) -> IndicatorSample {
        IndicatorSample {
            timestamp: Utc.with_ymd_and_hms(2020, 10, 12, hour, 0, 0).unwrap(),
            rate: Decimal::from_str(rate).unwrap(),
            ema_short: 10_010.5,
            ema_long: 10_002.25,
            macd: 8.25,
            macd_signal: 3.125,
        }
    }

    #[test]
    fn missing_file_loads_as_empty_series() {
        let dir = tempfile::tempdir().unwrap();
        let history = TrendHistory::new(dir.path().join("trend.csv"));
        assert!(history.load().unwrap().is_empty());
    }

    #[test]
    fn appended_samples_reload_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let history = TrendHistory::new(dir.path().join("trend.csv"));

        let first = sample(9, "10000.0");
        let second = sample(10, "10100.0");
        history.append(&first).unwrap();
        history.append(&second).unwrap();

        assert_eq!(history.load().unwrap(), vec![first, second]);
    }
}
