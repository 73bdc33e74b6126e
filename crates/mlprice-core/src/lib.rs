pub mod app_config;
pub mod catalog;
pub mod config;
pub mod currency;
pub mod error;
pub mod records;
pub mod report;

pub use app_config::AppConfig;
pub use catalog::Catalog;
pub use config::{load_app_config, load_app_config_from_env};
pub use currency::CurrencyFormat;
pub use error::ConfigError;
pub use records::{PriceRecord, Pricing};
pub use report::{discount_percent, render, render_with};
