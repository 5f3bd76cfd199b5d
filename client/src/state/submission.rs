//! Contact-form submission pipeline.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Idle → Pending → Succeeded | Failed → Idle`. The contact page drives the
//! transitions: `begin` on submit, `finish` when the backend resolves, and
//! `hide_banner` when the banner's auto-hide timer fires. The pipeline owns
//! the banner so a stale timer from an earlier attempt can never hide the
//! banner of a newer one.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use crate::net::types::ContactRequest;
use crate::state::form::ContactForm;

/// How long a status banner stays visible.
pub const BANNER_AUTO_HIDE_MS: u32 = 5000;
pub const INVALID_FORM_MESSAGE: &str = "Please correct the errors above and try again.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Pending,
    Succeeded(String),
    Failed(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Transient status message under the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
    /// Identifies this banner to its own auto-hide timer.
    pub seq: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BeginError {
    #[error("a submission is already in flight")]
    AlreadyPending,
    #[error("Please correct the errors above and try again.")]
    Invalid,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionPipeline {
    phase: SubmitPhase,
    banner: Option<Banner>,
    next_seq: u64,
}

impl SubmissionPipeline {
    #[must_use]
    pub fn phase(&self) -> &SubmitPhase {
        &self.phase
    }

    #[must_use]
    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.phase == SubmitPhase::Pending
    }

    /// Validate the whole form and, if it passes, enter `Pending`.
    ///
    /// Any visible banner is cleared first. An invalid form shows the
    /// form-level error banner and stays `Idle`.
    ///
    /// # Errors
    ///
    /// `AlreadyPending` while a previous attempt is unresolved, `Invalid`
    /// when at least one field fails validation.
    pub fn begin(&mut self, form: &mut ContactForm) -> Result<ContactRequest, BeginError> {
        if self.is_pending() {
            return Err(BeginError::AlreadyPending);
        }
        self.banner = None;
        if !form.validate_form() {
            self.phase = SubmitPhase::Idle;
            self.show(BannerKind::Error, INVALID_FORM_MESSAGE.to_owned());
            return Err(BeginError::Invalid);
        }
        self.phase = SubmitPhase::Pending;
        Ok(form.to_request())
    }

    /// Record the backend outcome. Success clears the form; failure keeps the
    /// entered values so the visitor can retry. Returns the new banner's
    /// sequence number, or `None` when no attempt was pending.
    pub fn finish(&mut self, form: &mut ContactForm, outcome: Result<String, String>) -> Option<u64> {
        if !self.is_pending() {
            return None;
        }
        let seq = match outcome {
            Ok(message) => {
                form.reset();
                self.phase = SubmitPhase::Succeeded(message.clone());
                self.show(BannerKind::Success, message)
            }
            Err(reason) => {
                self.phase = SubmitPhase::Failed(reason.clone());
                self.show(BannerKind::Error, reason)
            }
        };
        Some(seq)
    }

    /// Auto-hide callback. Only hides the banner the timer was armed for.
    pub fn hide_banner(&mut self, seq: u64) -> bool {
        if self.banner.as_ref().is_none_or(|b| b.seq != seq) {
            return false;
        }
        self.banner = None;
        if matches!(self.phase, SubmitPhase::Succeeded(_) | SubmitPhase::Failed(_)) {
            self.phase = SubmitPhase::Idle;
        }
        true
    }

    /// Drop any banner and return a resolved attempt to `Idle`.
    pub fn dismiss(&mut self) {
        self.banner = None;
        if !self.is_pending() {
            self.phase = SubmitPhase::Idle;
        }
    }

    fn show(&mut self, kind: BannerKind, text: String) -> u64 {
        self.next_seq += 1;
        self.banner = Some(Banner { kind, text, seq: self.next_seq });
        self.next_seq
    }
}
