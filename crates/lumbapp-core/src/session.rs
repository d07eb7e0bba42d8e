//! The per-session profile state container.
//!
//! A [`ProfileSession`] is built once when the app starts: it loads the
//! stored snapshot, reconciles the visit streak against today's date, and
//! from then on is the only thing the presentation layer reads and edits.
//! Every edit schedules a debounced write of the whole snapshot.
//!
//! Dropping the session cancels a write that is still inside its quiet
//! period; call [`ProfileSession::settle`] first to let it land.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use tracing::info;

use crate::debounce::{Debouncer, DEFAULT_QUIET_PERIOD};
use crate::error::SchedulerError;
use crate::profile::{ProfileField, SetupState, UserProfile};
use crate::storage::{Config, MemoryStore, ProfileStore};
use crate::streak::{self, Reconciliation};

/// In-memory profile for the running session.
#[derive(Debug)]
pub struct ProfileSession {
    profile: UserProfile,
    store: Arc<ProfileStore>,
    saver: Debouncer,
    reconciliation: Reconciliation,
}

impl ProfileSession {
    /// Open a session for today's local date with the configured quiet period.
    ///
    /// # Errors
    /// Returns [`SchedulerError::NoRuntime`] when called outside a tokio runtime.
    pub fn open(store: ProfileStore, config: &Config) -> Result<Self, SchedulerError> {
        Self::open_on(store, config.debounce(), streak::today_local())
    }

    /// Open a session as if the app were started on `today`.
    ///
    /// # Errors
    /// Returns [`SchedulerError::NoRuntime`] when called outside a tokio runtime.
    pub fn open_on(
        store: ProfileStore,
        quiet_period: Duration,
        today: NaiveDate,
    ) -> Result<Self, SchedulerError> {
        let saver = Debouncer::on_current_runtime(quiet_period)?;
        let store = Arc::new(store);
        let mut profile = store.load().unwrap_or_default();

        let reconciliation = streak::reconcile(profile.last_visit, profile.streak, today);
        profile.streak = reconciliation.streak;
        profile.last_visit = Some(reconciliation.last_visit);
        info!(
            transition = ?reconciliation.transition,
            streak = reconciliation.streak,
            "visit streak reconciled"
        );
        if reconciliation.needs_persist() {
            store.save(&profile);
        }

        Ok(Self {
            profile,
            store,
            saver,
            reconciliation,
        })
    }

    /// Session over an in-memory store with the default quiet period.
    ///
    /// # Errors
    /// Returns [`SchedulerError::NoRuntime`] when called outside a tokio runtime.
    pub fn ephemeral(today: NaiveDate) -> Result<Self, SchedulerError> {
        let store = ProfileStore::new(Arc::new(MemoryStore::new()));
        Self::open_on(store, DEFAULT_QUIET_PERIOD, today)
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn streak(&self) -> u32 {
        self.profile.streak
    }

    pub fn last_visit(&self) -> Option<NaiveDate> {
        self.profile.last_visit
    }

    pub fn setup_state(&self) -> SetupState {
        self.profile.setup_state()
    }

    pub fn is_setup_complete(&self) -> bool {
        self.profile.is_setup_complete
    }

    /// How the streak was reconciled when this session opened.
    pub fn last_reconciliation(&self) -> &Reconciliation {
        &self.reconciliation
    }

    /// Apply an edit. No validation happens here.
    pub fn update_field(&mut self, field: ProfileField) {
        self.profile.apply(field);
        self.schedule_save();
    }

    /// Mark the setup flow as finished.
    pub fn complete_setup(&mut self) {
        self.profile.is_setup_complete = true;
        self.schedule_save();
    }

    /// Forget everything, including the visit streak.
    pub fn clear_profile(&mut self) {
        // A pending write would resurrect the old snapshot.
        self.saver.cancel();
        self.store.clear();
        self.profile = UserProfile::default();
        info!("profile cleared");
    }

    /// Whether an edit is still waiting to be written.
    pub fn has_pending_save(&self) -> bool {
        self.saver.is_pending()
    }

    /// Wait for a pending write to run after its quiet period.
    ///
    /// # Errors
    /// Returns an error if the pending save task panicked.
    pub async fn settle(&mut self) -> Result<(), SchedulerError> {
        self.saver.settle().await
    }

    /// End the session. A write still inside its quiet period is dropped.
    pub fn close(mut self) {
        self.saver.cancel();
    }

    fn schedule_save(&mut self) {
        let snapshot = self.profile.clone();
        let store = Arc::clone(&self.store);
        self.saver.schedule(move || store.save(&snapshot));
    }
}
