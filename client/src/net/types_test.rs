use super::*;

#[test]
fn contact_request_uses_camel_case_keys() {
    let req = ContactRequest {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        subject: "project".to_owned(),
        message: "Hello there, nice site.".to_owned(),
        newsletter: true,
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["firstName"], "Ada");
    assert_eq!(json["lastName"], "Lovelace");
    assert_eq!(json["newsletter"], true);
    assert!(json.get("first_name").is_none());
}

#[test]
fn contact_request_defaults_optional_fields() {
    let req: ContactRequest = serde_json::from_str(
        r#"{"firstName":"Ada","lastName":"Lovelace","email":"a@b.co","message":"0123456789"}"#,
    )
    .unwrap();
    assert_eq!(req.subject, "");
    assert!(!req.newsletter);
}

#[test]
fn accepted_response_omits_error_keys() {
    let json = serde_json::to_value(ContactResponse::accepted("thanks")).unwrap();
    assert_eq!(json, serde_json::json!({ "ok": true, "message": "thanks" }));
}

#[test]
fn rejected_response_carries_field() {
    let resp = ContactResponse::rejected("Email address is required", Some("email"));
    assert!(!resp.ok);
    assert_eq!(resp.field.as_deref(), Some("email"));
    assert_eq!(resp.message, None);
}
