//! Vista library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod core;
pub mod router;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Build mode. Only selects log verbosity; routing behaves the same in both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Development,
    #[default]
    Production,
}

impl Mode {
    pub fn log_level(self) -> log::LevelFilter {
        match self {
            Mode::Development => log::LevelFilter::Debug,
            Mode::Production => log::LevelFilter::Info,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Some(Mode::Development),
            "production" | "prod" => Some(Mode::Production),
            _ => None,
        }
    }
}
