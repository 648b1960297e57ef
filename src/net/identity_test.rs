use super::*;

// =============================================================
// Error body parsing
// =============================================================

#[test]
fn error_body_prefers_msg_then_error_description_then_message() {
    let body = r#"{"msg":"m1","error_description":"m2","message":"m3"}"#;
    assert_eq!(error_body_message(body), Some("m1".to_owned()));

    let body = r#"{"error_description":"m2","message":"m3"}"#;
    assert_eq!(error_body_message(body), Some("m2".to_owned()));

    let body = r#"{"message":"m3"}"#;
    assert_eq!(error_body_message(body), Some("m3".to_owned()));
}

#[test]
fn error_body_none_for_garbage() {
    assert_eq!(error_body_message("not json"), None);
    assert_eq!(error_body_message(r#"{"code":400}"#), None);
}

#[test]
fn service_error_falls_back_to_generic_message() {
    let err = service_error(500, "");
    assert_eq!(err.message, "identity service request failed (500)");

    let err = service_error(422, r#"{"msg":"User not found"}"#);
    assert_eq!(err.message, "User not found");
}

// =============================================================
// Request payloads
// =============================================================

#[test]
fn otp_payload_never_auto_creates_accounts() {
    let payload = OtpPayload::new("a@b.test");
    assert!(!payload.create_user);

    let json = serde_json::to_value(&payload).expect("serialize");
    assert_eq!(json["email"], "a@b.test");
    assert_eq!(json["create_user"], false);
}

#[test]
fn signup_payload_carries_profile_metadata() {
    let profile = crate::net::types::SignUpProfile {
        name: "Asha".to_owned(),
        email: "asha@example.test".to_owned(),
        phone: "+91-555".to_owned(),
        country: "IN".to_owned(),
        city: "Pune".to_owned(),
    };
    let json = serde_json::to_value(signup_payload(&profile, "pw")).expect("serialize");

    assert_eq!(json["email"], "asha@example.test");
    assert_eq!(json["password"], "pw");
    assert_eq!(json["data"]["name"], "Asha");
    assert_eq!(json["data"]["phone"], "+91-555");
    assert_eq!(json["data"]["country"], "IN");
    assert_eq!(json["data"]["city"], "Pune");
    // Email lives at the top level, not in metadata.
    assert!(json["data"].get("email").is_none());
}

#[test]
fn placeholder_password_is_random_and_opaque() {
    let a = placeholder_password();
    let b = placeholder_password();
    assert_eq!(a.len(), 32);
    assert_ne!(a, b);
}

// =============================================================
// Redirect fragment parsing
// =============================================================

#[test]
fn redirect_fragment_parses_tokens() {
    let tokens = parse_redirect_fragment(
        "#access_token=at123&expires_at=1700000000&refresh_token=rt456&token_type=bearer",
    )
    .expect("tokens");

    assert_eq!(tokens.access_token, "at123");
    assert_eq!(tokens.refresh_token.as_deref(), Some("rt456"));
    assert_eq!(tokens.token_type, "bearer");
    assert_eq!(tokens.expires_at, Some(1_700_000_000));
}

#[test]
fn redirect_fragment_defaults_token_type() {
    let tokens = parse_redirect_fragment("access_token=at").expect("tokens");
    assert_eq!(tokens.token_type, "bearer");
    assert_eq!(tokens.refresh_token, None);
    assert_eq!(tokens.expires_at, None);
}

#[test]
fn redirect_fragment_without_access_token_is_none() {
    assert_eq!(parse_redirect_fragment(""), None);
    assert_eq!(parse_redirect_fragment("#/some/route"), None);
    assert_eq!(parse_redirect_fragment("#error=access_denied"), None);
}
