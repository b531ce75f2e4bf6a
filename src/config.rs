//! Panel configuration read from an optional page global.
//!
//! Templates may define `window.safePanelsConfig = {...}` before loading the
//! module, with camelCase keys (`chartDataGlobal`, `studentChartLimit`,
//! `logLevel`, `escapeClosesModal`). Every field has a default, so pages that
//! define nothing get the stock behavior.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{CHART_DATA_GLOBAL, STUDENT_CHART_LIMIT};
use crate::error::PanelError;

pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PanelConfig {
    /// Name of the page global holding chart data.
    pub chart_data_global: String,
    /// How many entries the per-student chart shows.
    pub student_chart_limit: usize,
    /// Console log level: `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
    /// Whether pressing Escape dismisses the open modal.
    pub escape_closes_modal: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            chart_data_global: CHART_DATA_GLOBAL.to_owned(),
            student_chart_limit: STUDENT_CHART_LIMIT,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
            escape_closes_modal: true,
        }
    }
}

impl PanelConfig {
    /// Parse config from its JSON form, validating the log level.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::Config`] if the JSON is malformed or names an
    /// unknown log level.
    pub fn from_json(raw: &str) -> Result<Self, PanelError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| PanelError::Config(e.to_string()))?;
        config.level_filter()?;
        Ok(config)
    }

    /// The configured log level as a `log` filter.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::Config`] for unrecognized level names.
    pub fn level_filter(&self) -> Result<log::Level, PanelError> {
        parse_level(&self.log_level)
    }
}

fn parse_level(raw: &str) -> Result<log::Level, PanelError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "error" => Ok(log::Level::Error),
        "warn" => Ok(log::Level::Warn),
        "info" => Ok(log::Level::Info),
        "debug" => Ok(log::Level::Debug),
        "trace" => Ok(log::Level::Trace),
        other => Err(PanelError::Config(format!("unknown log level: {other}"))),
    }
}
