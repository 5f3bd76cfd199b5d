//! Footer newsletter signup state.
//!
//! There is no subscription service behind this form: the button walks
//! through `Subscribing...` and `Subscribed!` on timers and the address is
//! only logged.

#[cfg(test)]
#[path = "newsletter_test.rs"]
mod newsletter_test;

pub const SUBSCRIBE_DELAY_MS: u32 = 1500;
pub const SUBSCRIBED_RESET_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NewsletterPhase {
    #[default]
    Idle,
    Subscribing,
    Subscribed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewsletterForm {
    pub email: String,
    phase: NewsletterPhase,
}

impl NewsletterForm {
    #[must_use]
    pub fn phase(&self) -> NewsletterPhase {
        self.phase
    }

    #[must_use]
    pub fn button_label(&self) -> &'static str {
        match self.phase {
            NewsletterPhase::Idle => "Subscribe",
            NewsletterPhase::Subscribing => "Subscribing...",
            NewsletterPhase::Subscribed => "Subscribed!",
        }
    }

    #[must_use]
    pub fn button_disabled(&self) -> bool {
        self.phase != NewsletterPhase::Idle
    }

    /// Start a signup. Returns the trimmed address, or `None` when busy or
    /// the address is blank.
    pub fn begin(&mut self) -> Option<String> {
        let email = self.email.trim();
        if self.phase != NewsletterPhase::Idle || email.is_empty() {
            return None;
        }
        let email = email.to_owned();
        self.phase = NewsletterPhase::Subscribing;
        Some(email)
    }

    /// Delay elapsed: show the confirmation and clear the input.
    pub fn complete(&mut self) {
        if self.phase == NewsletterPhase::Subscribing {
            self.email.clear();
            self.phase = NewsletterPhase::Subscribed;
        }
    }

    pub fn reset(&mut self) {
        if self.phase == NewsletterPhase::Subscribed {
            self.phase = NewsletterPhase::Idle;
        }
    }
}
