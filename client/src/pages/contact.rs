//! Contact page: the validated contact form plus direct contact details.

use leptos::prelude::*;

use crate::components::{contact_form::ContactFormCard, copy_email::CopyEmail, reveal::Reveal};

const CONTACT_EMAIL: &str = "hello@alexmorgan.dev";

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <section id="contact" class="contact">
            <Reveal class="contact-header">
                <h1>"Let's Work Together"</h1>
                <p>"Have a project in mind or just want to say hi? Send me a message."</p>
            </Reveal>

            <div class="contact-content">
                <Reveal class="form-section">
                    <ContactFormCard/>
                </Reveal>

                <Reveal class="contact-info">
                    <div class="contact-method">
                        <h3>"Email"</h3>
                        <div class="contact-details">
                            <CopyEmail email=CONTACT_EMAIL/>
                        </div>
                    </div>
                    <div class="contact-method">
                        <h3>"Response Time"</h3>
                        <div class="contact-details">
                            <p>"Within 24 hours"</p>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
