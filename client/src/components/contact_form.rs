//! Contact form: validated fields, character counter, status banner, and the
//! submit button with its loading state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns a `ContactForm` and a `SubmissionPipeline` signal. Field events call
//! into `ContactForm` (blur validates, input re-validates only fields already
//! showing an error); submit drives the pipeline and hands the request to the
//! `ContactBackend` from context.
//!
//! TRADE-OFFS
//! ==========
//! Banner auto-hide timers are never cancelled. Each timer carries the
//! banner's sequence number and `hide_banner` ignores stale ones.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use leptos::prelude::*;

use crate::net::backend::ContactBackend;
use crate::state::form::{CharCountLevel, ContactForm, FieldName, MESSAGE_MAX_CHARS, char_count_level};
use crate::state::submission::SubmissionPipeline;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Control {
    Input(&'static str),
    TextArea,
}

#[derive(Clone, Copy)]
struct SubjectOption {
    value: &'static str,
    label: &'static str,
}

const SUBJECTS: &[SubjectOption] = &[
    SubjectOption { value: "", label: "Select a subject" },
    SubjectOption { value: "project", label: "Project Inquiry" },
    SubjectOption { value: "collaboration", label: "Collaboration" },
    SubjectOption { value: "job", label: "Job Opportunity" },
    SubjectOption { value: "general", label: "General Question" },
];

#[component]
pub fn ContactFormCard() -> impl IntoView {
    let backend = expect_context::<ContactBackend>();
    let form = RwSignal::new(ContactForm::default());
    let pipeline = RwSignal::new(SubmissionPipeline::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let mut draft = form.get_untracked();
        let begun = pipeline.try_update(|p| p.begin(&mut draft));
        form.set(draft);

        let request = match begun {
            Some(Ok(request)) => request,
            Some(Err(_)) => {
                if let Some(seq) = pipeline.with_untracked(|p| p.banner().map(|b| b.seq)) {
                    schedule_banner_hide(pipeline, seq);
                }
                return;
            }
            None => return,
        };

        #[cfg(feature = "hydrate")]
        {
            let backend = backend.clone();
            leptos::task::spawn_local(async move {
                let outcome = backend.submit(&request).await;
                if let Some(seq) = settle_submission(form, pipeline, outcome) {
                    schedule_banner_hide(pipeline, seq);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &backend);
        }
    };

    let pending = move || pipeline.get().is_pending();

    view! {
        <form class="contact-form" novalidate on:submit=on_submit>
            <div class="form-row">
                <FormField form=form field=FieldName::FirstName control=Control::Input("text")/>
                <FormField form=form field=FieldName::LastName control=Control::Input("text")/>
            </div>
            <FormField form=form field=FieldName::Email control=Control::Input("email")/>

            <div class="form-group">
                <label for="subject">"Subject"</label>
                <select
                    id="subject"
                    name="subject"
                    prop:value=move || form.get().subject
                    on:change=move |ev| form.update(|f| f.subject = event_target_value(&ev))
                >
                    {SUBJECTS
                        .iter()
                        .map(|opt| view! { <option value=opt.value>{opt.label}</option> })
                        .collect_view()}
                </select>
            </div>

            <FormField form=form field=FieldName::Message control=Control::TextArea/>

            <div class="form-group form-group--checkbox">
                <label>
                    <input
                        type="checkbox"
                        name="newsletter"
                        prop:checked=move || form.get().newsletter
                        on:change=move |ev| form.update(|f| f.newsletter = event_target_checked(&ev))
                    />
                    "Subscribe to my newsletter"
                </label>
            </div>

            <button type="submit" class="submit-btn" disabled=pending>
                <span class="btn-text" style:display=move || if pending() { "none" } else { "block" }>
                    "Send Message"
                </span>
                <span class="btn-loading" style:display=move || if pending() { "flex" } else { "none" }>
                    <span class="spinner"></span>
                    "Sending..."
                </span>
            </button>

            <StatusBanner pipeline=pipeline/>
        </form>
    }
}

/// One validated input with its label and inline error.
#[component]
fn FormField(form: RwSignal<ContactForm>, field: FieldName, control: Control) -> impl IntoView {
    let id = field.as_str();
    let focused = RwSignal::new(false);

    let state_class = move || form.with(|f| f.state(field).css_class());
    let error = move || form.with(|f| f.state(field).error_message());
    let value = move || form.with(|f| f.value(field).to_owned());

    let set_value = move |raw: String| form.update(|f| f.input(field, raw));
    let on_blur = move |_| {
        focused.set(false);
        form.update(|f| {
            f.validate(field);
        });
    };
    let on_focus = move |_| focused.set(true);

    let input = match control {
        Control::Input(kind) => view! {
            <input
                id=id
                name=id
                type=kind
                class=state_class
                prop:value=value
                on:input=move |ev| set_value(event_target_value(&ev))
                on:blur=on_blur
                on:focus=on_focus
            />
        }
        .into_any(),
        Control::TextArea => {
            let textarea_ref = NodeRef::<leptos::html::Textarea>::new();
            let auto_resize = move || {
                #[cfg(feature = "hydrate")]
                {
                    if let Some(el) = textarea_ref.get_untracked() {
                        let style = web_sys::HtmlElement::style(&el);
                        let _ = style.set_property("height", "auto");
                        let _ = style.set_property("height", &format!("{}px", el.scroll_height()));
                    }
                }
            };
            view! {
                <textarea
                    id=id
                    name=id
                    rows="6"
                    class=state_class
                    node_ref=textarea_ref
                    prop:value=value
                    on:input=move |ev| {
                        set_value(event_target_value(&ev));
                        auto_resize();
                    }
                    on:blur=on_blur
                    on:focus=on_focus
                ></textarea>
                <CharCounter form=form/>
            }
            .into_any()
        }
    };

    view! {
        <div class="form-group" class:focused=move || focused.get()>
            <label for=id>{field.label()} " *"</label>
            {input}
            <span class="error-message" class:show=move || error().is_some()>
                {move || error().unwrap_or_default()}
            </span>
        </div>
    }
}

/// `n / 1000` counter under the message field.
#[component]
fn CharCounter(form: RwSignal<ContactForm>) -> impl IntoView {
    let len = move || form.with(ContactForm::message_len);
    let level = move || char_count_level(len());

    view! {
        <div
            class="char-counter"
            class:warning=move || level() == CharCountLevel::Warning
            class:error=move || level() == CharCountLevel::Error
        >
            <span class="char-count">{len}</span>
            {format!(" / {MESSAGE_MAX_CHARS}")}
        </div>
    }
}

#[component]
fn StatusBanner(pipeline: RwSignal<SubmissionPipeline>) -> impl IntoView {
    let banner = move || pipeline.with(|p| p.banner().cloned());
    let class = move || match banner() {
        Some(b) => format!("form-status show {}", b.kind.css_class()),
        None => "form-status".to_owned(),
    };

    view! {
        <div
            class=class
            role="status"
            aria-live="polite"
            title="Click to dismiss"
            on:click=move |_| pipeline.update(SubmissionPipeline::dismiss)
        >
            {move || banner().map(|b| b.text).unwrap_or_default()}
        </div>
    }
}

/// Apply a backend outcome to the form and pipeline signals.
///
/// The visitor may navigate away while a submission is in flight, which
/// disposes both signals; the outcome is then dropped. Returns the new
/// banner's sequence number.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn settle_submission(
    form: RwSignal<ContactForm>,
    pipeline: RwSignal<SubmissionPipeline>,
    outcome: Result<String, String>,
) -> Option<u64> {
    let mut draft = form.try_get_untracked()?;
    let seq = pipeline.try_update(|p| p.finish(&mut draft, outcome)).flatten()?;
    let _ = form.try_set(draft);
    Some(seq)
}

fn schedule_banner_hide(pipeline: RwSignal<SubmissionPipeline>, seq: u64) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(crate::state::submission::BANNER_AUTO_HIDE_MS, move || {
            pipeline.update(|p| {
                p.hide_banner(seq);
            });
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (pipeline, seq);
    }
}
