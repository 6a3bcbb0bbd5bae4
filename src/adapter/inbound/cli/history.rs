//! Lookback resolution shared by rating commands.

use chrono::{Datelike, Utc};

use super::command::HistoryArgs;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;
use crate::port::LookbackWindow;

/// Merge CLI overrides over the configured history window.
///
/// The season falls back to the current UTC year.
#[allow(clippy::result_large_err)]
pub fn window(config: &Config, args: &HistoryArgs) -> Result<LookbackWindow> {
    let weeks_back = args.weeks_back.unwrap_or(config.history.weeks_back);
    if weeks_back == 0 {
        return Err(ConfigError::InvalidValue {
            field: "weeks_back",
            reason: "must be at least 1".to_string(),
        }
        .into());
    }
    let season = args
        .season
        .or(config.history.season)
        .unwrap_or_else(|| Utc::now().year());
    Ok(LookbackWindow::new(season, weeks_back))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_win_over_config() {
        let mut config = Config::default();
        config.history.season = Some(2023);
        let args = HistoryArgs {
            weeks_back: Some(4),
            season: Some(2024),
            snapshot: None,
        };
        let window = window(&config, &args).unwrap();
        assert_eq!(window.season, 2024);
        assert_eq!(window.weeks_back, 4);
    }

    #[test]
    fn test_falls_back_to_config_values() {
        let mut config = Config::default();
        config.history.season = Some(2023);
        let window = window(&config, &HistoryArgs::default()).unwrap();
        assert_eq!(window.season, 2023);
        assert_eq!(window.weeks_back, 10);
    }

    #[test]
    fn test_rejects_zero_weeks_override() {
        let args = HistoryArgs {
            weeks_back: Some(0),
            ..HistoryArgs::default()
        };
        assert!(window(&Config::default(), &args).is_err());
    }
}
