//! # evr_booking
//!
//! Booking time-window core of the EV rental platform.
//!
//! This crate decides which rental dates a customer may pick and whether
//! a proposed pick-up/return window can be booked:
//! - Administrator policies resolved with safe fallbacks (`policy`)
//! - Selectable bounds, field cascades and ordered validation (`booking`)
//! - "Today" behind a clock port, handoff date/time formats (`time`)
//! - Environment-driven settings (`config`)
//!
//! ## Example usage (in the web front end's backend-for-frontend)
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use evr_booking::booking::session::TimeSelectionSession;
//! use evr_booking::config::app::AppConfig;
//! use evr_booking::policy::in_memory::InMemoryPolicyProvider;
//! use evr_booking::policy::resolver::PolicyResolver;
//!
//! # async fn run() -> evr_booking::anyhow::Result<()> {
//! let cfg = AppConfig::from_env()?;
//! let clock = cfg.booking.clock()?;
//! let resolver = PolicyResolver::new(Arc::new(InMemoryPolicyProvider::new()));
//!
//! let mut session =
//!     TimeSelectionSession::open(&resolver, &clock, cfg.booking.session_settings()).await;
//! match session.save() {
//!     Ok(selection) => println!("{}", serde_json::to_string(&selection)?),
//!     Err(e) => println!("{e}"),
//! }
//! # Ok(())
//! # }
//! ```

// ===============================
// Re-exports of external crates
// ===============================

pub use anyhow;
pub use chrono;
pub use chrono_tz;
pub use serde;
pub use serde_json;
pub use uuid;

// ===============================
// Public modules
// ===============================
pub mod booking;
pub mod config;
pub mod error;
pub mod policy;
pub mod time;
