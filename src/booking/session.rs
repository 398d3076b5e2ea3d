//! # Time-Selection Session
//!
//! One open time-selection dialog, from policy resolution to confirmation.
//!
//! ```text
//! Uninitialized --apply_policy--> BoundsReady --save (ok)--> Confirmed
//!       |                          |  ^    |
//!       |                          |  +----+ save (rejected) / edits
//!       +-------- cancel ----------+--------> Cancelled
//! ```
//!
//! The UI owns the session and drives it with field edits; the session
//! delegates cascades to [`SelectionState`] and the submit check to
//! [`TimeWindowValidator`]. Outcomes are reported through an optional
//! [`SelectionListener`].

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use tracing::{debug, info};
use uuid::Uuid;

use super::bounds::ValidationBounds;
use super::selection::{EndTimeCascade, SelectionState};
use super::validator::TimeWindowValidator;
use super::window::{ConfirmedSelection, RentalTimeWindow};
use crate::error::booking::SessionError;
use crate::policy::resolver::{BookingPolicy, PolicyResolver};
use crate::time::clock::Clock;

/// Per-dialog settings, usually from [`BookingConfig`](crate::config::booking::BookingConfig).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSettings {
    pub default_start_time: NaiveTime,
    pub default_end_time: NaiveTime,
    pub end_time_cascade: EndTimeCascade,
    pub enforce_max_rental_days: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN);
        Self {
            default_start_time: nine,
            default_end_time: nine,
            end_time_cascade: EndTimeCascade::default(),
            enforce_max_rental_days: false,
        }
    }
}

/// Receives the outcome of a session.
pub trait SelectionListener: Send + Sync {
    fn on_confirmed(&self, selection: &ConfirmedSelection);

    fn on_cancelled(&self) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SessionState {
    Uninitialized,
    BoundsReady(SelectionState),
    Confirmed(ConfirmedSelection),
    Cancelled,
}

pub struct TimeSelectionSession {
    id: Uuid,
    settings: SessionSettings,
    validator: TimeWindowValidator,
    state: SessionState,
    listener: Option<Arc<dyn SelectionListener>>,
}

impl TimeSelectionSession {
    /// Starts a session whose bounds are still being resolved.
    pub fn begin(settings: SessionSettings) -> Self {
        let id = Uuid::now_v7();
        debug!(session_id = %id, "time selection session started");

        Self {
            id,
            settings,
            validator: TimeWindowValidator::new()
                .enforcing_max_rental_days(settings.enforce_max_rental_days),
            state: SessionState::Uninitialized,
            listener: None,
        }
    }

    /// Starts a session and resolves its bounds before returning.
    ///
    /// `today` is read from `clock` once, after policy resolution, and
    /// stays frozen for the session's lifetime.
    pub async fn open(
        resolver: &PolicyResolver,
        clock: &dyn Clock,
        settings: SessionSettings,
    ) -> Self {
        let mut session = Self::begin(settings);
        let policy = resolver.resolve_booking_policy().await;
        session.apply_policy(clock.today(), policy);
        session
    }

    pub fn with_listener(mut self, listener: Arc<dyn SelectionListener>) -> Self {
        self.listener = Some(listener);
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Computes bounds and seeds the default selection.
    ///
    /// Only the first result counts: once bounds are ready, or after the
    /// session closed, late results are discarded and `false` is returned.
    pub fn apply_policy(&mut self, today: NaiveDate, policy: BookingPolicy) -> bool {
        if self.state != SessionState::Uninitialized {
            debug!(session_id = %self.id, "discarding late policy resolution");
            return false;
        }

        let bounds = ValidationBounds::compute(today, &policy);
        let selection = SelectionState::seeded(
            bounds,
            self.settings.default_start_time,
            self.settings.default_end_time,
            self.settings.end_time_cascade,
        );
        info!(
            session_id = %self.id,
            %today,
            min_start = %bounds.min_start_date,
            max_start = %bounds.max_start_date,
            empty = bounds.is_empty(),
            "booking bounds ready"
        );

        self.state = SessionState::BoundsReady(selection);
        true
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, SessionState::BoundsReady(_))
    }

    pub fn is_closed(&self) -> bool {
        matches!(
            self.state,
            SessionState::Confirmed(_) | SessionState::Cancelled
        )
    }

    /// Current selection, once bounds are ready.
    pub fn selection(&self) -> Option<&SelectionState> {
        match &self.state {
            SessionState::BoundsReady(s) => Some(s),
            _ => None,
        }
    }

    pub fn bounds(&self) -> Option<&ValidationBounds> {
        self.selection().map(SelectionState::bounds)
    }

    pub fn window(&self) -> Option<&RentalTimeWindow> {
        self.selection().map(SelectionState::window)
    }

    /// Display text for the current or confirmed selection.
    pub fn summary(&self) -> Option<String> {
        match &self.state {
            SessionState::BoundsReady(s) => Some(s.summary()),
            SessionState::Confirmed(c) => Some(c.summary()),
            _ => None,
        }
    }

    pub fn confirmed(&self) -> Option<&ConfirmedSelection> {
        match &self.state {
            SessionState::Confirmed(c) => Some(c),
            _ => None,
        }
    }

    fn editable(&mut self) -> Result<&mut SelectionState, SessionError> {
        match &mut self.state {
            SessionState::BoundsReady(s) => Ok(s),
            SessionState::Uninitialized => Err(SessionError::BoundsNotReady),
            SessionState::Confirmed(_) | SessionState::Cancelled => Err(SessionError::Closed),
        }
    }

    pub fn set_start_date(&mut self, date: NaiveDate) -> Result<(), SessionError> {
        self.editable()?.set_start_date(date);
        Ok(())
    }

    pub fn set_end_date(&mut self, date: NaiveDate) -> Result<(), SessionError> {
        self.editable()?.set_end_date(date);
        Ok(())
    }

    pub fn set_start_time(&mut self, time: NaiveTime) -> Result<(), SessionError> {
        self.editable()?.set_start_time(time);
        Ok(())
    }

    pub fn set_end_time(&mut self, time: NaiveTime) -> Result<(), SessionError> {
        self.editable()?.set_end_time(time);
        Ok(())
    }

    /// Validates the current selection and, on success, closes the session.
    ///
    /// A rejection leaves the selection untouched so the customer can
    /// correct it and submit again.
    pub fn save(&mut self) -> Result<ConfirmedSelection, SessionError> {
        let id = self.id;
        let validator = self.validator;
        let selection = self.editable()?;

        let confirmed = validator
            .confirm(selection.bounds(), selection.window())
            .inspect_err(|e| info!(session_id = %id, reason = %e, "time selection rejected"))?;

        info!(session_id = %id, selection = %confirmed.summary(), "time selection confirmed");
        self.state = SessionState::Confirmed(confirmed);
        if let Some(listener) = &self.listener {
            listener.on_confirmed(&confirmed);
        }
        Ok(confirmed)
    }

    /// Abandons the session. Returns `false` if it was already closed.
    pub fn cancel(&mut self) -> bool {
        if self.is_closed() {
            return false;
        }

        debug!(session_id = %self.id, "time selection cancelled");
        self.state = SessionState::Cancelled;
        if let Some(listener) = &self.listener {
            listener.on_cancelled();
        }
        true
    }
}
