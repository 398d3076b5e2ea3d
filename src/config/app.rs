//! # Application Configuration Loader
//!
//! Loads the booking core's configuration once at startup.
//!
//! Automatically loads `.env` files for non-production environments.
//! It checks for a custom `DOTENV_FILE` path first, then falls back to
//! `.env.{APP_ENV}` or `.env`.
//!
//! # Environment Variables
//! | Variable | Description | Default |
//! |-----------|-------------|----------|
//! | `APP_ENV` | Current environment (`development`, `production`, etc.) | `"development"` |
//! | `DOTENV_FILE` | Optional path to a custom dotenv file | *none* |
//! | `BOOKING_*` | See [`BookingConfig`] | |
//!
//! # Example
//! ```rust,no_run
//! use evr_booking::config::app::AppConfig;
//!
//! let cfg = AppConfig::from_env().expect("invalid booking configuration");
//! println!("stations run on {}", cfg.booking.timezone);
//! ```

use std::env;

use anyhow::Result;
use tracing::debug;

use crate::config::booking::BookingConfig;

/// Top-level application configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Value of `APP_ENV`.
    pub app_env: String,
    /// Time-selection dialog settings.
    pub booking: BookingConfig,
}

impl AppConfig {
    /// Loads application configuration from environment variables.
    ///
    /// ## Behavior
    /// - Reads `APP_ENV` (defaults to `"development"`).
    /// - Loads `.env` or `.env.{APP_ENV}` for non-production environments.
    /// - Delegates booking settings to [`BookingConfig::from_env`].
    pub fn from_env() -> Result<Self> {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        if app_env != "production" {
            if let Ok(path) = env::var("DOTENV_FILE") {
                let _ = dotenvy::from_filename(path);
            } else {
                let candidate = format!(".env.{}", app_env);
                dotenvy::from_filename(&candidate)
                    .or_else(|_| dotenvy::dotenv())
                    .ok();
            }
        }

        let booking = BookingConfig::from_env()?;
        debug!(app_env = %app_env, timezone = %booking.timezone, "booking configuration loaded");

        Ok(AppConfig { app_env, booking })
    }

    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_defaults_to_development() {
        temp_env::with_vars(
            vec![
                ("APP_ENV", None::<&str>),
                ("DOTENV_FILE", Some("/nonexistent/.env.test")),
                ("BOOKING_TIMEZONE", Some("Asia/Ho_Chi_Minh")),
            ],
            || {
                let cfg = AppConfig::from_env().unwrap();
                assert_eq!(cfg.app_env, "development");
                assert!(!cfg.is_production());
                assert_eq!(cfg.booking.timezone, "Asia/Ho_Chi_Minh");
            },
        );
    }

    #[test]
    fn production_skips_dotenv_and_reports_bad_timezone() {
        temp_env::with_vars(
            vec![
                ("APP_ENV", Some("production")),
                ("BOOKING_TIMEZONE", Some("Not/AZone")),
            ],
            || {
                let err = AppConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("BOOKING_TIMEZONE"));
            },
        );
    }
}
