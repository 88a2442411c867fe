// In crates/app-config/src/types.rs

use core_types::TradeSettings;
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    /// The application's general settings.
    pub app: AppSettings,
    /// Settings for the exchange-rate feed and the indicator history file.
    pub market_data: MarketDataSettings,
    /// Settings for the balance ledger store.
    pub ledger: LedgerSettings,
    /// Settings for the Telegram notification channel.
    pub telegram: TelegramSettings,
    /// The trend and decision parameters, passed verbatim into the engine.
    pub trade: TradeSettings,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AppSettings {
    /// The environment the application is running in (e.g., "development", "production").
    pub environment: String,
    /// The log level for the application.
    pub log_level: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct MarketDataSettings {
    /// The REST base URL of the quote provider.
    pub base_url: String,
    /// The API key for the quote provider.
    pub api_key: String,
    /// The asset being traded (e.g., "BTC").
    pub from_currency: String,
    /// The account currency (e.g., "EUR").
    pub to_currency: String,
    /// Seconds between polling ticks in `run` mode.
    pub poll_interval_secs: u64,
    /// Path of the CSV file holding the per-observation indicator history.
    pub history_path: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct LedgerSettings {
    /// Path of the CSV file holding the balance ledger.
    pub path: String,
    /// EUR balance of the seed entry written when the ledger is empty.
    pub starting_eur_balance: Decimal,
}

#[derive(Deserialize, Debug, Clone)]
pub struct TelegramSettings {
    /// The Telegram Bot API base URL.
    pub api_base_url: String,
    pub bot_token: String,
    pub chat_id: String,
    /// When false, transaction notifications are logged instead of sent.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}
