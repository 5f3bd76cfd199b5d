use super::*;
use leptos::prelude::*;

use crate::net::types::FAILURE_MESSAGE;
use crate::state::submission::SubmitPhase;

fn valid_form() -> ContactForm {
    let mut form = ContactForm::default();
    form.first_name = "Grace".to_owned();
    form.last_name = "Hopper".to_owned();
    form.email = "grace@example.com".to_owned();
    form.message = "Let's build a compiler together.".to_owned();
    form
}

fn pending_signals() -> (RwSignal<ContactForm>, RwSignal<SubmissionPipeline>) {
    let mut form = valid_form();
    let mut pipeline = SubmissionPipeline::default();
    pipeline.begin(&mut form).expect("valid form begins");
    (RwSignal::new(form), RwSignal::new(pipeline))
}

#[test]
fn settle_success_clears_form_and_shows_banner() {
    let owner = Owner::new();
    let (form, pipeline) = owner.with(pending_signals);

    let seq = settle_submission(form, pipeline, Ok("sent".to_owned()));

    assert_eq!(seq, Some(1));
    assert_eq!(form.get_untracked(), ContactForm::default());
    assert_eq!(pipeline.with_untracked(|p| p.phase().clone()), SubmitPhase::Succeeded("sent".to_owned()));
}

#[test]
fn settle_failure_keeps_entered_values() {
    let owner = Owner::new();
    let (form, pipeline) = owner.with(pending_signals);

    let seq = settle_submission(form, pipeline, Err(FAILURE_MESSAGE.to_owned()));

    assert!(seq.is_some());
    assert_eq!(form.get_untracked().first_name, "Grace");
    assert!(matches!(pipeline.with_untracked(|p| p.phase().clone()), SubmitPhase::Failed(_)));
}

#[test]
fn settle_after_unmount_drops_the_outcome() {
    let owner = Owner::new();
    let (form, pipeline) = owner.with(pending_signals);
    owner.cleanup();

    assert_eq!(settle_submission(form, pipeline, Ok("sent".to_owned())), None);
    assert_eq!(settle_submission(form, pipeline, Err("boom".to_owned())), None);
}

#[test]
fn settle_without_pending_attempt_is_ignored() {
    let owner = Owner::new();
    let (form, pipeline) =
        owner.with(|| (RwSignal::new(valid_form()), RwSignal::new(SubmissionPipeline::default())));

    assert_eq!(settle_submission(form, pipeline, Ok("sent".to_owned())), None);
    assert_eq!(form.get_untracked().first_name, "Grace");
}
