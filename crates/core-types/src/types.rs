// In crates/core-types/src/types.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A currency pair, quoted as `to` per unit of `from` (e.g. EUR per BTC).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair {
    pub from: String,
    pub to: String,
}

impl std::fmt::Display for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.from, self.to)
    }
}

/// A single exchange-rate quote as delivered by the market-data feed.
///
/// Observations are immutable once recorded. The feed produces them in
/// timestamp order; the core consumes the sequence read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceObservation {
    pub timestamp: DateTime<Utc>,
    pub rate: Decimal,
}

/// One row of the indicator history: the observed rate plus the EMA/MACD
/// values derived from the full series up to and including this observation.
///
/// Monetary values stay `Decimal`; indicator values are `f64`, which is what
/// the underlying indicator math works in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSample {
    pub timestamp: DateTime<Utc>,
    pub rate: Decimal,
    pub ema_short: f64,
    pub ema_long: f64,
    pub macd: f64,
    pub macd_signal: f64,
}

/// The MACD/signal relationship at a point in the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Rising,
    Falling,
    /// Not enough samples to compare the requested point against.
    Undetermined,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trend::Rising => write!(f, "rising"),
            Trend::Falling => write!(f, "falling"),
            Trend::Undetermined => write!(f, "undetermined"),
        }
    }
}

/// The two transaction kinds the engine can execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    Buy,
    Sell,
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Buy => write!(f, "BUY"),
            TransactionKind::Sell => write!(f, "SELL"),
        }
    }
}

/// One row of the balance ledger.
///
/// Entries are created only by the ledger's append operation, never mutated
/// and never deleted; the last entry is always the current balance.
/// `asset_value_eur` is recomputed from `asset_balance * exchange_rate` at
/// every append.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceEntry {
    pub timestamp: DateTime<Utc>,
    pub transaction: TransactionKind,
    pub eur_balance: Decimal,
    pub asset_balance: Decimal,
    pub asset_value_eur: Decimal,
    pub exchange_rate: Decimal,
    pub profit_eur: Decimal,
}

impl BalanceEntry {
    /// The bootstrap entry written the first time an empty ledger is read:
    /// all funds in EUR, no asset, no recorded rate.
    pub fn seed(timestamp: DateTime<Utc>, starting_eur_balance: Decimal) -> Self {
        Self {
            timestamp,
            transaction: TransactionKind::Sell,
            eur_balance: starting_eur_balance,
            asset_balance: Decimal::ZERO,
            asset_value_eur: Decimal::ZERO,
            exchange_rate: Decimal::ZERO,
            profit_eur: Decimal::ZERO,
        }
    }
}
