// In crates/engine/src/task.rs

use crate::decision::{self, Decision, SkipReason};
use anyhow::Context;
use core_types::{
    BalanceEntry, IndicatorSample, Pair, PriceObservation, TradeSettings, TransactionKind, Trend,
};
use indicators::{detect_trend, Offset};
use ledger::{Ledger, LedgerStore};
use market_data::{QuoteClient, TrendHistory};
use notifier::{Notifier, TradeNotification};
use num_traits::ToPrimitive;
use std::time::Duration;

/// What a single decision cycle did.
#[derive(Debug, Clone)]
pub enum CycleOutcome {
    NoCrossover { trend: Trend },
    Skipped {
        crossover: TransactionKind,
        reason: SkipReason,
    },
    Executed {
        entry: BalanceEntry,
        notification: TradeNotification,
    },
}

/// A self-contained task that manages all trading logic for a single pair.
///
/// The task is the exclusive owner of the ledger, and cycles run strictly
/// one after another through `&mut self`: the latest-read, the decision and
/// the append of one cycle always complete before the next cycle starts.
pub struct TradingTask<S: LedgerStore> {
    pair: Pair,
    settings: TradeSettings,
    quotes: QuoteClient,
    history: TrendHistory,
    ledger: Ledger<S>,
    notifier: Box<dyn Notifier>,
}

impl<S: LedgerStore> TradingTask<S> {
    pub fn new(
        pair: Pair,
        settings: TradeSettings,
        quotes: QuoteClient,
        history: TrendHistory,
        ledger: Ledger<S>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        tracing::info!(pair = %pair, "Creating new trading task.");
        Self {
            pair,
            settings,
            quotes,
            history,
            ledger,
            notifier,
        }
    }

    /// The main, long-running loop for this trading task.
    ///
    /// A failed cycle is logged and retried on the next tick; the loop
    /// itself never retries inside a cycle.
    pub async fn run(&mut self, poll_interval: Duration) -> anyhow::Result<()> {
        tracing::info!(
            pair = %self.pair,
            interval_secs = poll_interval.as_secs(),
            "Starting trading task."
        );

        let mut ticker = tokio::time::interval(poll_interval);
        loop {
            ticker.tick().await;
            match self.run_cycle().await {
                Ok(outcome) => tracing::debug!(?outcome, "Decision cycle complete."),
                Err(e) => {
                    tracing::error!(error = %e, "Decision cycle failed. Waiting for the next tick.")
                }
            }
        }
    }

    /// Runs exactly one decision cycle: poll the quote, update the indicator
    /// history, decide, and (at most once) append to the ledger and notify.
    pub async fn run_cycle(&mut self) -> anyhow::Result<CycleOutcome> {
        let observation = self.quotes.latest_rate().await?;
        self.process_observation(observation).await
    }

    async fn process_observation(
        &mut self,
        observation: PriceObservation,
    ) -> anyhow::Result<CycleOutcome> {
        let outcome = self.evaluate(observation)?;

        // The notification belongs to the executed transaction, but it is
        // fire-and-forget: a failed push never rolls the append back.
        if let CycleOutcome::Executed { notification, .. } = &outcome {
            if let Err(e) = self.notifier.notify(notification).await {
                tracing::warn!(
                    notifier = self.notifier.name(),
                    error = %e,
                    "Failed to push the transaction notification."
                );
            }
        }

        Ok(outcome)
    }

    /// The synchronous core of a cycle: indicators, trends, decision, append.
    fn evaluate(&mut self, observation: PriceObservation) -> anyhow::Result<CycleOutcome> {
        // 1. Extend the rate series with this observation and recompute the
        //    indicators over the full history.
        let samples = self.history.load()?;
        let mut rates: Vec<f64> = Vec::with_capacity(samples.len() + 1);
        for sample in &samples {
            rates.push(
                sample
                    .rate
                    .to_f64()
                    .context("historical rate is not representable as f64")?,
            );
        }
        rates.push(
            observation
                .rate
                .to_f64()
                .context("exchange rate is not representable as f64")?,
        );

        let series = indicators::macd(
            &rates,
            self.settings.short_span,
            self.settings.long_span,
            self.settings.signal_span,
        )?;

        let (Some(&ema_short), Some(&ema_long), Some(&macd), Some(&macd_signal)) = (
            series.ema_short.last(),
            series.ema_long.last(),
            series.macd.last(),
            series.signal.last(),
        ) else {
            anyhow::bail!("indicator series came back empty");
        };

        self.history.append(&IndicatorSample {
            timestamp: observation.timestamp,
            rate: observation.rate,
            ema_short,
            ema_long,
            macd,
            macd_signal,
        })?;

        // 2. Classify the trend now and one step back. Too little history
        //    resolves to Undetermined, which never trades.
        let trend_now = detect_trend(&series.signal, &series.macd, Offset::Current)
            .unwrap_or(Trend::Undetermined);
        let trend_prev = detect_trend(&series.signal, &series.macd, Offset::Previous)
            .unwrap_or(Trend::Undetermined);

        // 3. No crossover: exit before touching the ledger.
        let Some(crossover) = decision::crossover(trend_now, trend_prev) else {
            tracing::debug!(trend = %trend_now, rate = %observation.rate, "No crossover.");
            return Ok(CycleOutcome::NoCrossover { trend: trend_now });
        };

        // 4. Decide against the latest ledger entry and execute.
        let last = self.ledger.latest()?;
        match decision::decide(crossover, observation.rate, &last, &self.settings) {
            Decision::Skip(reason) => {
                tracing::info!(%crossover, %reason, "Crossover detected. Not trading.");
                Ok(CycleOutcome::Skipped { crossover, reason })
            }
            Decision::Trade(plan) => {
                let entry = self.ledger.append(
                    plan.eur_spent,
                    plan.asset_sold,
                    plan.rate,
                    plan.transaction,
                    plan.profit,
                )?;
                tracing::info!(
                    transaction = %plan.transaction,
                    rate = %plan.rate,
                    profit = %plan.profit,
                    eur_balance = %entry.eur_balance,
                    asset_balance = %entry.asset_balance,
                    "Executed transaction and appended the balance entry."
                );

                let fee_rate = match plan.transaction {
                    TransactionKind::Buy => self.settings.fee_rate.buy(),
                    TransactionKind::Sell => self.settings.fee_rate.sell(),
                };
                Ok(CycleOutcome::Executed {
                    entry,
                    notification: TradeNotification {
                        transaction: plan.transaction,
                        pair: self.pair.clone(),
                        exchange_rate: plan.rate,
                        profit_eur: plan.profit,
                        fee_rate,
                    },
                })
            }
        }
    }

    /// Read-only view of the ledger, for status reporting.
    pub fn ledger(&self) -> &Ledger<S> {
        &self.ledger
    }
}
