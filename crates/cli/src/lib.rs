//! `stockroom-cli` — interactive console over the inventory service.
//!
//! The console is generic over its input and output so whole sessions can be
//! scripted in tests.

pub mod config;
pub mod console;
pub mod input;
pub mod menu;

pub use config::CliConfig;
pub use console::{Console, SessionOutcome};
pub use input::InputError;
pub use menu::MenuChoice;
