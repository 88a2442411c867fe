// In crates/ledger/src/lib.rs

use chrono::Utc;
use core_types::{BalanceEntry, TransactionKind};
use rust_decimal::Decimal;

pub mod error;
pub mod store;

// Re-export the most important types for easy access.
pub use error::{Error, Result};
pub use store::{CsvLedgerStore, LedgerStore, MemoryLedgerStore};

/// The append-only balance ledger.
///
/// The ledger owns the full audit trail of executed transactions; the last
/// entry is always the current balance. Appending is the only mutation, and
/// the caller (the decision engine) is responsible for only requesting
/// transactions the balances can cover; no solvency check happens here.
pub struct Ledger<S: LedgerStore> {
    store: S,
    starting_eur_balance: Decimal,
}

impl<S: LedgerStore> Ledger<S> {
    pub fn new(store: S, starting_eur_balance: Decimal) -> Self {
        Self {
            store,
            starting_eur_balance,
        }
    }

    /// Returns the most recent balance entry.
    ///
    /// An empty store is seeded with the bootstrap entry (all funds in EUR,
    /// recorded as a SELL) before returning it, so the ledger is never
    /// observed empty. The seeding is idempotent: reading twice writes the
    /// seed once.
    pub fn latest(&mut self) -> Result<BalanceEntry> {
        if let Some(entry) = self.store.read_last()? {
            return Ok(entry);
        }

        let seed = BalanceEntry::seed(Utc::now(), self.starting_eur_balance);
        tracing::info!(
            starting_eur = %self.starting_eur_balance,
            "Ledger is empty. Writing the seed balance entry."
        );
        self.store.append_row(&seed)?;
        Ok(seed)
    }

    /// Computes the balances that follow from the latest entry and appends
    /// the resulting entry.
    ///
    /// SELL: `eur' = eur + asset_sold * rate`, `asset' = asset - asset_sold`.
    /// BUY:  `eur' = eur - eur_spent`, `asset' = asset + eur_spent / rate`.
    ///
    /// `asset_value_eur` is recomputed as `asset' * rate` on every append. A
    /// BUY at a zero rate fails with [`Error::DivisionByZero`].
    pub fn append(
        &mut self,
        eur_spent: Decimal,
        asset_sold: Decimal,
        rate: Decimal,
        transaction: TransactionKind,
        profit: Decimal,
    ) -> Result<BalanceEntry> {
        let last = self.latest()?;

        let (eur_balance, asset_balance) = match transaction {
            TransactionKind::Sell => (
                last.eur_balance + asset_sold * rate,
                last.asset_balance - asset_sold,
            ),
            TransactionKind::Buy => {
                let asset_bought = eur_spent
                    .checked_div(rate)
                    .ok_or(Error::DivisionByZero)?;
                (
                    last.eur_balance - eur_spent,
                    last.asset_balance + asset_bought,
                )
            }
        };

        let entry = BalanceEntry {
            timestamp: Utc::now(),
            transaction,
            eur_balance,
            asset_balance,
            asset_value_eur: asset_balance * rate,
            exchange_rate: rate,
            profit_eur: profit,
        };

        self.store.append_row(&entry)?;
        Ok(entry)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
