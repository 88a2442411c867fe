// In crates/core-types/src/settings.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-transaction fee, either one rate for both sides or a split
/// buy/sell pair (miner fees make selling more expensive on some venues).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeeRate {
    Flat(Decimal),
    PerSide { buy: Decimal, sell: Decimal },
}

impl FeeRate {
    pub fn buy(&self) -> Decimal {
        match self {
            FeeRate::Flat(rate) => *rate,
            FeeRate::PerSide { buy, .. } => *buy,
        }
    }

    pub fn sell(&self) -> Decimal {
        match self {
            FeeRate::Flat(rate) => *rate,
            FeeRate::PerSide { sell, .. } => *sell,
        }
    }
}

/// The full parameter set for the trend and decision logic.
///
/// Loaded once from configuration and passed into the engine as an immutable
/// value; nothing reads these as ambient state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeSettings {
    /// Span of the short EMA over the rate series.
    pub short_span: usize,
    /// Span of the long EMA over the rate series.
    pub long_span: usize,
    /// Span of the EMA over the MACD line (the signal line).
    pub signal_span: usize,

    /// Fraction of the held asset balance to sell on a SELL crossover.
    pub sell_fraction: Decimal,
    /// Fraction of the available EUR balance to invest on a BUY crossover.
    pub buy_fraction: Decimal,
    /// Cap on the EUR spent in a single BUY.
    pub max_buy_eur: Decimal,

    pub fee_rate: FeeRate,

    /// Expected-profit floor below which a crossover is not acted on.
    pub min_profit_eur: Decimal,
}
