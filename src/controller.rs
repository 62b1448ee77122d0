//! The save controller: one edit session per open section.
//!
//! A session owns the section's current record and its baseline snapshot,
//! derives the dirty flag on demand, and runs the save workflow:
//! `Idle → Saving → (Success | Failed) → Idle`. Success promotes the record
//! into a new baseline; failure leaves the record untouched so the save can
//! be retried. Auth expiry is dispatched to the shared token guard and never
//! produces an inline notice.
//!
//! `save` takes `&mut self`, so a second save of the same section cannot
//! start while one is in flight; sessions for different sections are
//! independent values and may save concurrently. In-flight requests are not
//! cancelled: dropping a session mid-save leaves the request to finish or
//! fail on its own, with the result discarded.

use crate::auth::{AuthContext, CredentialStore, Navigator};
use crate::diff::{Record, is_dirty};
use crate::errors::SaveError;
use crate::gateway::Gateway;
use crate::sections::SectionStatus;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{error, info};

/// How long a success notice stays up before the UI may drop it.
pub const SUCCESS_NOTICE_TTL: Duration = Duration::from_secs(20);

// ============================================================================
// Save state and notices
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveState {
    #[default]
    Idle,
    Saving,
}

/// Inline feedback above the form. Success notices auto-dismiss after
/// [`SUCCESS_NOTICE_TTL`]; error notices stay until dismissed or the next
/// save attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Success { message: String, posted_at: Instant },
    Error { message: String },
}

impl Notice {
    fn success(message: String) -> Self {
        Notice::Success {
            message,
            posted_at: Instant::now(),
        }
    }

    fn inline_error(message: String) -> Self {
        Notice::Error { message }
    }

    pub fn message(&self) -> &str {
        match self {
            Notice::Success { message, .. } | Notice::Error { message } => message,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error { .. })
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        match self {
            Notice::Success { posted_at, .. } => {
                now.saturating_duration_since(*posted_at) >= SUCCESS_NOTICE_TTL
            }
            Notice::Error { .. } => false,
        }
    }
}

// ============================================================================
// EditSession
// ============================================================================

pub struct EditSession<R, G, C, N> {
    gateway: Arc<G>,
    auth: Arc<AuthContext<C, N>>,
    record: R,
    baseline: R,
    state: SaveState,
    notice: Option<Notice>,
    status: SectionStatus,
}

impl<R, G, C, N> EditSession<R, G, C, N>
where
    R: Record,
    G: Gateway,
    C: CredentialStore,
    N: Navigator,
{
    /// Open a session over built-in content, for a section that has never
    /// been saved.
    pub fn with_defaults(gateway: Arc<G>, auth: Arc<AuthContext<C, N>>) -> Self {
        Self::started(gateway, auth, R::default_content())
    }

    /// Fetch the section's current content and open a session over it. The
    /// fetched record becomes both the working copy and the baseline.
    pub async fn load(
        gateway: Arc<G>,
        auth: Arc<AuthContext<C, N>>,
    ) -> Result<Self, SaveError> {
        let Some(token) = auth.resolve_token() else {
            // Fail closed: no token means unauthenticated, same exit as an
            // expired session.
            auth.expire_session();
            return Err(SaveError::AuthExpired);
        };

        match gateway.fetch(R::SECTION, &token).await {
            Ok(body) => Ok(Self::started(gateway, auth, R::from_response(body))),
            Err(SaveError::AuthExpired) => {
                auth.expire_session();
                Err(SaveError::AuthExpired)
            }
            Err(err) => {
                error!(section = %R::SECTION, error = %err, "Failed to load section content");
                Err(err)
            }
        }
    }

    fn started(gateway: Arc<G>, auth: Arc<AuthContext<C, N>>, record: R) -> Self {
        Self {
            gateway,
            auth,
            baseline: record.snapshot(),
            record,
            state: SaveState::Idle,
            notice: None,
            status: SectionStatus::Published,
        }
    }

    pub fn record(&self) -> &R {
        &self.record
    }

    /// Mutation entry point. Callers edit fields directly; the dirty flag is
    /// derived on demand, never cached.
    pub fn record_mut(&mut self) -> &mut R {
        &mut self.record
    }

    pub fn baseline(&self) -> &R {
        &self.baseline
    }

    pub fn is_dirty(&self) -> bool {
        is_dirty(&self.record, &self.baseline)
    }

    /// Whether the save action should be enabled: something changed, nothing
    /// staged is oversize, and no save is in flight.
    pub fn can_save(&self) -> bool {
        self.state == SaveState::Idle
            && self.is_dirty()
            && self.record.oversize_upload().is_none()
    }

    pub fn state(&self) -> SaveState {
        self.state
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Drop an expired success notice. UI render ticks call this.
    pub fn tick(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notice = None;
        }
    }

    pub fn status(&self) -> SectionStatus {
        self.status
    }

    pub fn set_status(&mut self, status: SectionStatus) {
        self.status = status;
    }

    /// Cancel: revert to the baseline, discarding edits and staged uploads.
    pub fn discard_changes(&mut self) {
        self.record = self.baseline.clone();
    }

    /// Run one save attempt. On success the just-saved record becomes the new
    /// baseline and staged uploads are absorbed; on failure the record is
    /// left exactly as it was. All errors except `AuthExpired` surface as an
    /// inline notice.
    pub async fn save(&mut self) -> Result<(), SaveError> {
        self.notice = None;

        if !self.is_dirty() {
            return Err(self.fail(SaveError::NoChanges));
        }
        if let Some(err) = self.record.oversize_upload() {
            return Err(self.fail(err));
        }
        let Some(token) = self.auth.resolve_token() else {
            self.auth.expire_session();
            return Err(SaveError::AuthExpired);
        };

        self.state = SaveState::Saving;
        let payload = self.record.to_payload();
        let result = self.gateway.submit(R::SECTION, &payload, &token).await;
        self.state = SaveState::Idle;

        match result {
            Ok(_) => {
                self.record.absorb_pending_uploads();
                self.baseline = self.record.snapshot();
                self.status = SectionStatus::NeedsReview;
                self.notice = Some(Notice::success(format!(
                    "{} updated successfully!",
                    R::SECTION.label()
                )));
                info!(section = %R::SECTION, "Section saved");
                Ok(())
            }
            Err(SaveError::AuthExpired) => {
                // The page is being abandoned; no notice.
                self.auth.expire_session();
                Err(SaveError::AuthExpired)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    fn fail(&mut self, err: SaveError) -> SaveError {
        error!(section = %R::SECTION, error = %err, "Save failed");
        self.notice = Some(Notice::inline_error(err.to_string()));
        err
    }
}

// ============================================================================
// Tests
// ============================================================================
