/// Contact form state machine
///
/// The draft is fully controlled: every keystroke lands here synchronously,
/// one field at a time. Submission walks `Idle → Submitting → Success` and
/// reverts to `Idle` on a timer; a transport failure walks straight back to
/// `Idle` with the draft untouched.
use std::time::Duration;

use crate::net::LeadPayload;

/// How long the success state stays on screen before reverting to idle.
pub const SUCCESS_DISPLAY: Duration = Duration::from_millis(5000);

/// The five draft fields. `Message` is the only optional one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadField {
    FullName,
    Email,
    City,
    Phone,
    Message,
}

/// The in-progress lead draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadDraft {
    pub full_name: String,
    pub email: String,
    pub city: String,
    pub phone: String,
    pub message: String,
}

impl LeadDraft {
    pub fn set(&mut self, field: LeadField, value: String) {
        match field {
            LeadField::FullName => self.full_name = value,
            LeadField::Email => self.email = value,
            LeadField::City => self.city = value,
            LeadField::Phone => self.phone = value,
            LeadField::Message => self.message = value,
        }
    }

    pub fn field(&self, field: LeadField) -> &str {
        match field {
            LeadField::FullName => &self.full_name,
            LeadField::Email => &self.email,
            LeadField::City => &self.city,
            LeadField::Phone => &self.phone,
            LeadField::Message => &self.message,
        }
    }

    /// Required-field gate: the four named fields must be non-empty, the
    /// message may stay blank.
    pub fn is_complete(&self) -> bool {
        !self.full_name.is_empty()
            && !self.email.is_empty()
            && !self.city.is_empty()
            && !self.phone.is_empty()
    }

    pub fn clear(&mut self) {
        *self = LeadDraft::default();
    }

    pub fn payload(&self) -> LeadPayload {
        LeadPayload {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            city: self.city.clone(),
            phone: self.phone.clone(),
            message: self.message.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
}

/// Draft plus submission lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub draft: LeadDraft,
    pub status: SubmitStatus,
    /// Bumped on every entry into `Success`; reversion timers carry the
    /// epoch they were armed for, so a stale timer cannot cut a newer
    /// success short.
    success_epoch: u64,
}

impl ContactFormState {
    pub fn edit(&mut self, field: LeadField, value: String) {
        self.draft.set(field, value);
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.status != SubmitStatus::Submitting && self.draft.is_complete()
    }

    /// Enter `Submitting` and hand back the payload to send, or `None` if a
    /// submission is already in flight or the draft is incomplete.
    pub fn begin_submit(&mut self) -> Option<LeadPayload> {
        if !self.can_submit() {
            return None;
        }
        self.status = SubmitStatus::Submitting;
        Some(self.draft.payload())
    }

    /// The transport accepted the request: show success, wipe the draft, and
    /// return the epoch the reversion timer must carry.
    pub fn record_success(&mut self) -> u64 {
        self.status = SubmitStatus::Success;
        self.draft.clear();
        self.success_epoch += 1;
        self.success_epoch
    }

    /// The transport itself failed: quietly return to idle, draft untouched.
    pub fn record_failure(&mut self) {
        self.status = SubmitStatus::Idle;
    }

    /// Reversion timer fired. Only the timer armed for the current success
    /// may revert it.
    pub fn expire_success(&mut self, epoch: u64) {
        if self.status == SubmitStatus::Success && epoch == self.success_epoch {
            self.status = SubmitStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> ContactFormState {
        let mut form = ContactFormState::default();
        form.edit(LeadField::FullName, "Amira Hassan".into());
        form.edit(LeadField::Email, "amira@example.com".into());
        form.edit(LeadField::City, "Casablanca".into());
        form.edit(LeadField::Phone, "+212 600 000 000".into());
        form
    }

    #[test]
    fn test_field_isolation() {
        let mut form = complete_form();
        let before = form.draft.clone();

        form.edit(LeadField::City, "Marrakesh".into());

        assert_eq!(form.draft.city, "Marrakesh");
        assert_eq!(form.draft.full_name, before.full_name);
        assert_eq!(form.draft.email, before.email);
        assert_eq!(form.draft.phone, before.phone);
        assert_eq!(form.draft.message, before.message);
    }

    #[test]
    fn test_incomplete_draft_cannot_submit() {
        let mut form = ContactFormState::default();
        form.edit(LeadField::FullName, "Amira".into());
        assert!(!form.can_submit());
        assert_eq!(form.begin_submit(), None);
        assert_eq!(form.status, SubmitStatus::Idle);
    }

    #[test]
    fn test_message_is_optional() {
        let form = complete_form();
        assert!(form.draft.message.is_empty());
        assert!(form.can_submit());
    }

    #[test]
    fn test_submit_lifecycle_on_success() {
        let mut form = complete_form();

        let payload = form.begin_submit().expect("complete draft submits");
        assert_eq!(form.status, SubmitStatus::Submitting);
        assert_eq!(payload.full_name, "Amira Hassan");

        let epoch = form.record_success();
        assert_eq!(form.status, SubmitStatus::Success);
        assert_eq!(form.draft, LeadDraft::default());

        form.expire_success(epoch);
        assert_eq!(form.status, SubmitStatus::Idle);
    }

    #[test]
    fn test_submit_lifecycle_on_transport_failure() {
        let mut form = complete_form();
        let before = form.draft.clone();

        form.begin_submit().expect("complete draft submits");
        form.record_failure();

        assert_eq!(form.status, SubmitStatus::Idle);
        assert_eq!(form.draft, before);
    }

    #[test]
    fn test_no_reentrant_submission() {
        let mut form = complete_form();
        form.begin_submit().expect("first submission starts");
        assert_eq!(form.begin_submit(), None);
        assert_eq!(form.status, SubmitStatus::Submitting);
    }

    #[test]
    fn test_stale_timer_cannot_expire_newer_success() {
        let mut form = complete_form();
        form.begin_submit().unwrap();
        let first = form.record_success();

        // A second submission succeeds before the first timer fires.
        form.edit(LeadField::FullName, "Amira Hassan".into());
        form.edit(LeadField::Email, "amira@example.com".into());
        form.edit(LeadField::City, "Casablanca".into());
        form.edit(LeadField::Phone, "+212 600 000 000".into());
        form.begin_submit().unwrap();
        let second = form.record_success();

        form.expire_success(first);
        assert_eq!(form.status, SubmitStatus::Success);

        form.expire_success(second);
        assert_eq!(form.status, SubmitStatus::Idle);
    }

    #[test]
    fn test_success_display_is_five_seconds() {
        assert_eq!(SUCCESS_DISPLAY, Duration::from_millis(5000));
    }

    #[test]
    fn test_expire_is_noop_outside_success() {
        let mut form = complete_form();
        form.begin_submit().unwrap();
        form.expire_success(0);
        assert_eq!(form.status, SubmitStatus::Submitting);
    }
}
