use super::*;

fn request() -> ContactRequest {
    ContactRequest {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        subject: "collaboration".to_owned(),
        message: "I would love to work with you.".to_owned(),
        newsletter: true,
    }
}

#[test]
fn check_accepts_valid_request() {
    assert!(check(&request()).is_ok());
}

#[test]
fn check_reports_first_violation_in_field_order() {
    let mut req = request();
    req.email = "not-an-email".to_owned();
    req.message = "hello".to_owned();
    let Err(ContactError::Invalid { field, message }) = check(&req) else {
        panic!("expected invalid");
    };
    assert_eq!(field, FieldName::Email);
    assert_eq!(message, "Please enter a valid email address");
}

#[test]
fn invalid_error_displays_rule_message() {
    let err = ContactError::Invalid { field: FieldName::Message, message: "Message is required" };
    assert_eq!(err.to_string(), "Message is required");
}

#[test]
fn subject_falls_back_to_general() {
    let mut req = request();
    assert_eq!(email_subject(&req), "Portfolio contact (collaboration) from Ada Lovelace");
    req.subject = "  ".to_owned();
    assert_eq!(email_subject(&req), "Portfolio contact (general) from Ada Lovelace");
}

#[test]
fn rendered_email_escapes_user_text() {
    let mut req = request();
    req.message = "<script>alert('x')</script> & more".to_owned();
    let html = render_contact_email(&req);
    assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; more"));
    assert!(!html.contains("<script>"));
    assert!(html.contains("Ada Lovelace"));
    assert!(html.contains("<td>yes</td>"));
    assert!(!html.contains("{{"));
}

#[test]
fn sink_follows_delivery_config() {
    assert!(matches!(ContactSink::from_delivery(&Delivery::Log), ContactSink::Log));
    let email = Delivery::Email { api_key: "k".to_owned(), from: "a@b.co".to_owned(), to: "c@d.co".to_owned() };
    assert!(matches!(ContactSink::from_delivery(&email), ContactSink::Resend { .. }));
}

#[tokio::test]
async fn log_sink_always_delivers() {
    assert!(ContactSink::Log.deliver(&request()).await.is_ok());
}
