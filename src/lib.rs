// Turn-based chess bot: alpha-beta minimax with quiescence and a transposition cache
pub mod board;
pub mod bot;
pub mod config;
pub mod error;
pub mod perft;
pub mod search;

pub use bot::{Bot, Decision, Source};
pub use config::{BotConfig, Strategy};
pub use error::BotError;
