use super::*;
use crate::net::simulated::SimulatedBackend;
use crate::net::types::{FAILURE_MESSAGE, SUCCESS_MESSAGE};
use crate::state::form::{FieldName, FieldState};

fn valid_form() -> ContactForm {
    let mut form = ContactForm::default();
    form.first_name = "Ada".to_owned();
    form.last_name = "Lovelace".to_owned();
    form.email = "ada@example.com".to_owned();
    form.subject = "general".to_owned();
    form.message = "I would love to work with you.".to_owned();
    form
}

// =============================================================
// begin
// =============================================================

#[test]
fn invalid_form_shows_error_banner_and_stays_idle() {
    let mut pipeline = SubmissionPipeline::default();
    let mut form = ContactForm::default();
    assert_eq!(pipeline.begin(&mut form), Err(BeginError::Invalid));
    assert_eq!(pipeline.phase(), &SubmitPhase::Idle);
    let banner = pipeline.banner().expect("banner");
    assert_eq!(banner.kind, BannerKind::Error);
    assert_eq!(banner.text, INVALID_FORM_MESSAGE);
    assert!(form.state(FieldName::FirstName).is_invalid());
}

#[test]
fn valid_form_enters_pending_with_trimmed_request() {
    let mut pipeline = SubmissionPipeline::default();
    let mut form = valid_form();
    form.first_name = " Ada ".to_owned();
    let request = pipeline.begin(&mut form).expect("valid");
    assert!(pipeline.is_pending());
    assert_eq!(request.first_name, "Ada");
    assert_eq!(pipeline.banner(), None);
}

#[test]
fn second_submit_while_pending_is_rejected() {
    let mut pipeline = SubmissionPipeline::default();
    let mut form = valid_form();
    pipeline.begin(&mut form).expect("valid");
    assert_eq!(pipeline.begin(&mut form), Err(BeginError::AlreadyPending));
    assert!(pipeline.is_pending());
}

#[test]
fn begin_clears_previous_banner() {
    let mut pipeline = SubmissionPipeline::default();
    let mut form = valid_form();
    pipeline.begin(&mut form).expect("valid");
    pipeline.finish(&mut form, Err("boom".to_owned()));
    assert!(pipeline.banner().is_some());
    pipeline.begin(&mut form).expect("values kept after failure");
    assert_eq!(pipeline.banner(), None);
}

// =============================================================
// finish
// =============================================================

#[test]
fn success_resets_form_and_shows_success_banner() {
    let mut pipeline = SubmissionPipeline::default();
    let mut form = valid_form();
    pipeline.begin(&mut form).expect("valid");
    let seq = pipeline.finish(&mut form, Ok("sent".to_owned()));
    assert!(seq.is_some());
    assert_eq!(pipeline.phase(), &SubmitPhase::Succeeded("sent".to_owned()));
    assert_eq!(form, ContactForm::default());
    assert_eq!(form.state(FieldName::Email), &FieldState::Unvalidated);
    let banner = pipeline.banner().expect("banner");
    assert_eq!(banner.kind, BannerKind::Success);
    assert_eq!(banner.text, "sent");
}

#[test]
fn failure_keeps_values_and_shows_error_banner() {
    let mut pipeline = SubmissionPipeline::default();
    let mut form = valid_form();
    pipeline.begin(&mut form).expect("valid");
    pipeline.finish(&mut form, Err("nope".to_owned()));
    assert_eq!(pipeline.phase(), &SubmitPhase::Failed("nope".to_owned()));
    assert_eq!(form.first_name, "Ada");
    assert_eq!(pipeline.banner().map(|b| b.kind), Some(BannerKind::Error));
}

#[test]
fn finish_without_pending_attempt_is_ignored() {
    let mut pipeline = SubmissionPipeline::default();
    let mut form = valid_form();
    assert_eq!(pipeline.finish(&mut form, Ok("sent".to_owned())), None);
    assert_eq!(pipeline.phase(), &SubmitPhase::Idle);
    assert_eq!(form.first_name, "Ada");
}

// =============================================================
// banner auto-hide
// =============================================================

#[test]
fn matching_timer_hides_banner_and_returns_to_idle() {
    let mut pipeline = SubmissionPipeline::default();
    let mut form = valid_form();
    pipeline.begin(&mut form).expect("valid");
    let seq = pipeline.finish(&mut form, Ok("sent".to_owned())).expect("pending");
    assert!(pipeline.hide_banner(seq));
    assert_eq!(pipeline.banner(), None);
    assert_eq!(pipeline.phase(), &SubmitPhase::Idle);
}

#[test]
fn stale_timer_does_not_hide_newer_banner() {
    let mut pipeline = SubmissionPipeline::default();
    let mut form = valid_form();
    pipeline.begin(&mut form).expect("valid");
    let first = pipeline.finish(&mut form, Err("first".to_owned())).expect("pending");

    pipeline.begin(&mut form).expect("valid");
    let second = pipeline.finish(&mut form, Err("second".to_owned())).expect("pending");
    assert_ne!(first, second);

    assert!(!pipeline.hide_banner(first));
    assert_eq!(pipeline.banner().map(|b| b.text.as_str()), Some("second"));
    assert!(pipeline.hide_banner(second));
}

// =============================================================
// end to end with the simulated backend
// =============================================================

fn run_simulated(rate: f64) -> (SubmissionPipeline, ContactForm) {
    let backend = SimulatedBackend::seeded(11).with_success_rate(rate);
    assert_eq!(backend.delay().as_millis(), 2000);
    let mut pipeline = SubmissionPipeline::default();
    let mut form = valid_form();
    let request = pipeline.begin(&mut form).expect("valid");
    let outcome = futures::executor::block_on(backend.submit(&request));
    pipeline.finish(&mut form, outcome);
    (pipeline, form)
}

#[test]
fn simulated_success_flows_through_pipeline() {
    let (pipeline, form) = run_simulated(1.0);
    assert_eq!(pipeline.phase(), &SubmitPhase::Succeeded(SUCCESS_MESSAGE.to_owned()));
    assert_eq!(form.message, "");
}

#[test]
fn simulated_failure_flows_through_pipeline() {
    let (pipeline, form) = run_simulated(0.0);
    assert_eq!(pipeline.phase(), &SubmitPhase::Failed(FAILURE_MESSAGE.to_owned()));
    assert_eq!(form.message, "I would love to work with you.");
}

#[test]
fn dismiss_returns_resolved_attempt_to_idle() {
    let mut pipeline = SubmissionPipeline::default();
    let mut form = valid_form();
    pipeline.begin(&mut form).expect("valid");
    pipeline.finish(&mut form, Err("nope".to_owned()));
    pipeline.dismiss();
    assert_eq!(pipeline.phase(), &SubmitPhase::Idle);
    assert_eq!(pipeline.banner(), None);
}

#[test]
fn dismiss_does_not_abandon_pending_attempt() {
    let mut pipeline = SubmissionPipeline::default();
    let mut form = valid_form();
    pipeline.begin(&mut form).expect("valid");
    pipeline.dismiss();
    assert!(pipeline.is_pending());
}
