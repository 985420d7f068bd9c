pub mod config;
pub mod error;
pub mod shop;

pub use config::Config;
pub use error::HelloCurrencyError;
pub use shop::ShopHandle;
