// In crates/engine/src/decision.rs

use core_types::{BalanceEntry, TradeSettings, TransactionKind, Trend};
use rust_decimal::Decimal;

/// A transaction the engine has decided to execute: the ledger append and
/// the notification are both derived from this plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TradePlan {
    pub transaction: TransactionKind,
    pub eur_spent: Decimal,
    pub asset_sold: Decimal,
    pub rate: Decimal,
    pub profit: Decimal,
}

/// Why a detected crossover did not become a transaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SkipReason {
    /// The crossover repeats the last transaction kind, or the rate moved
    /// against the trade since that transaction.
    NotTradable,
    /// The expected profit is below the configured floor.
    Unprofitable { profit: Decimal },
    /// No EUR available to fund the purchase.
    InsufficientFunds,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::NotTradable => write!(f, "not trading"),
            SkipReason::Unprofitable { profit } => {
                write!(f, "expected profit {} is too little to proceed", profit)
            }
            SkipReason::InsufficientFunds => write!(f, "no funds available"),
        }
    }
}

/// The verdict on a single crossover.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decision {
    Skip(SkipReason),
    Trade(TradePlan),
}

/// Maps a trend transition to the transaction kind it calls for.
///
/// Equal trends mean no crossover. An undetermined current trend never forms
/// a crossover either: with too little history the engine stays idle.
pub fn crossover(trend_now: Trend, trend_prev: Trend) -> Option<TransactionKind> {
    if trend_now == trend_prev {
        return None;
    }
    match trend_now {
        Trend::Rising => Some(TransactionKind::Buy),
        Trend::Falling => Some(TransactionKind::Sell),
        Trend::Undetermined => None,
    }
}

/// Decides whether a crossover becomes a transaction, given the latest
/// ledger entry and the current rate.
///
/// A SELL is only eligible when the last transaction was a BUY and the rate
/// rose since; a BUY only when the last transaction was a SELL and the rate
/// fell since. Everything else is skipped, which is what prevents two
/// consecutive entries of the same kind regardless of profitability.
pub fn decide(
    crossover: TransactionKind,
    rate_now: Decimal,
    last: &BalanceEntry,
    settings: &TradeSettings,
) -> Decision {
    let delta = rate_now - last.exchange_rate;

    match crossover {
        TransactionKind::Sell
            if last.transaction == TransactionKind::Buy && delta > Decimal::ZERO =>
        {
            let asset_sold = settings.sell_fraction * last.asset_balance;
            let profit = delta.abs() * asset_sold * (Decimal::ONE - settings.fee_rate.sell());
            if profit < settings.min_profit_eur {
                return Decision::Skip(SkipReason::Unprofitable { profit });
            }
            Decision::Trade(TradePlan {
                transaction: TransactionKind::Sell,
                eur_spent: Decimal::ZERO,
                asset_sold,
                rate: rate_now,
                profit,
            })
        }
        TransactionKind::Buy
            if last.transaction == TransactionKind::Sell && delta < Decimal::ZERO =>
        {
            // Keep investing the configured maximum while the balance covers
            // it; below that, invest a fraction of what is left.
            let eur_spent = if last.eur_balance >= settings.max_buy_eur {
                settings.max_buy_eur
            } else {
                settings.buy_fraction * last.eur_balance
            };

            // A zero-fund BUY would divide by zero in the profit formula: a
            // normal "insufficient funds" outcome, not an engine fault.
            let Some(profit_ratio) = delta.abs().checked_div(eur_spent) else {
                return Decision::Skip(SkipReason::InsufficientFunds);
            };

            let profit = profit_ratio * (Decimal::ONE - settings.fee_rate.buy());
            if profit < settings.min_profit_eur {
                return Decision::Skip(SkipReason::Unprofitable { profit });
            }
            Decision::Trade(TradePlan {
                transaction: TransactionKind::Buy,
                eur_spent,
                asset_sold: Decimal::ZERO,
                rate: rate_now,
                profit,
            })
        }
        _ => Decision::Skip(SkipReason::NotTradable),
    }
}
