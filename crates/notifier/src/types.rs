// In crates/notifier/src/types.rs

use core_types::{Pair, TransactionKind};
use rust_decimal::Decimal;

/// The message pushed after every executed transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeNotification {
    pub transaction: TransactionKind,
    pub pair: Pair,
    pub exchange_rate: Decimal,
    pub profit_eur: Decimal,
    /// The fee rate applied to this transaction side.
    pub fee_rate: Decimal,
}

impl TradeNotification {
    /// Renders the outbound message body.
    pub fn to_message(&self) -> String {
        let fee_percent = self.fee_rate * Decimal::ONE_HUNDRED;
        format!(
            "Transaction: {}\nExchange rate: {:.2} {}/{}\nEstimated profit: {:.2} {}\nFees: {:.2}%",
            self.transaction,
            self.exchange_rate,
            self.pair.to,
            self.pair.from,
            self.profit_eur,
            self.pair.to,
            fee_percent,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn message_carries_kind_rate_profit_and_fee_percentage() {
        let notification = TradeNotification {
            transaction: TransactionKind::Buy,
            pair: Pair {
                from: "BTC".to_string(),
                to: "EUR".to_string(),
            },
            exchange_rate: dec!(9876.543),
            profit_eur: dec!(0.098),
            fee_rate: dec!(0.02),
        };

        assert_eq!(
            notification.to_message(),
            "Transaction: BUY\nExchange rate: 9876.54 EUR/BTC\nEstimated profit: 0.10 EUR\nFees: 2.00%"
        );
    }
}
