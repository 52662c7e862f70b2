use serde_json::json;

use super::*;
use crate::test_support::make_token;

// =============================================================
// read_token
// =============================================================

#[test]
fn read_token_finds_named_cookie() {
    let cookies = "theme=dark; token=abc.def.ghi; lang=en";
    assert_eq!(read_token(cookies, "token"), Some("abc.def.ghi".to_owned()));
}

#[test]
fn read_token_absent_or_empty_is_none() {
    assert_eq!(read_token("", "token"), None);
    assert_eq!(read_token("theme=dark", "token"), None);
    assert_eq!(read_token("token=; theme=dark", "token"), None);
}

#[test]
fn read_token_prefers_last_duplicate() {
    assert_eq!(read_token("token=root; theme=dark; token=scoped", "token"), Some("scoped".to_owned()));
    assert_eq!(read_token("token=stale; token=", "token"), None);
}

#[test]
fn read_token_does_not_match_prefixes() {
    assert_eq!(read_token("old_token=x; tokens=y", "token"), None);
}

#[test]
fn session_reflects_cookie_presence() {
    let session = Session::from_cookies("token=t.u.v", "token");
    assert!(session.is_logged_in());
    assert_eq!(session.token(), Some("t.u.v"));

    let anonymous = Session::from_cookies("", "token");
    assert!(!anonymous.is_logged_in());
    assert_eq!(anonymous.subject(), None);
}

// =============================================================
// subject_from_token
// =============================================================

#[test]
fn subject_from_user_id_string() {
    let token = make_token(&json!({ "user_id": "u-1" }));
    assert_eq!(subject_from_token(&token), Some("u-1".to_owned()));
}

#[test]
fn subject_from_user_id_object() {
    let token = make_token(&json!({ "user_id": { "id": "u-2", "is_admin": false } }));
    assert_eq!(subject_from_token(&token), Some("u-2".to_owned()));
}

#[test]
fn subject_from_sub_string() {
    let token = make_token(&json!({ "sub": "u-3", "exp": 1_700_000_000 }));
    assert_eq!(subject_from_token(&token), Some("u-3".to_owned()));
}

#[test]
fn subject_from_sub_object() {
    let token = make_token(&json!({ "sub": { "id": "u-4", "is_admin": true } }));
    assert_eq!(subject_from_token(&token), Some("u-4".to_owned()));
}

#[test]
fn user_id_takes_precedence_over_sub() {
    let token = make_token(&json!({ "user_id": "from-user-id", "sub": "from-sub" }));
    assert_eq!(subject_from_token(&token), Some("from-user-id".to_owned()));
}

#[test]
fn object_without_id_falls_through_to_sub() {
    let token = make_token(&json!({ "user_id": { "is_admin": true }, "sub": "u-5" }));
    assert_eq!(subject_from_token(&token), Some("u-5".to_owned()));
}

#[test]
fn null_user_id_fails_closed_even_with_sub() {
    let token = make_token(&json!({ "user_id": null, "sub": "abc" }));
    assert_eq!(subject_from_token(&token), None);
}

#[test]
fn null_sub_after_unusable_user_id_fails_closed() {
    let token = make_token(&json!({ "user_id": { "is_admin": true }, "sub": null }));
    assert_eq!(subject_from_token(&token), None);
}

#[test]
fn numeric_object_id_is_stringified() {
    let token = make_token(&json!({ "sub": { "id": 42 } }));
    assert_eq!(subject_from_token(&token), Some("42".to_owned()));
}

#[test]
fn padded_standard_alphabet_payload_decodes() {
    let payload = data_encoding::BASE64.encode(br#"{"sub":"u-6???"}"#);
    let token = format!("h.{payload}.s");
    assert_eq!(subject_from_token(&token), Some("u-6???".to_owned()));
}

#[test]
fn malformed_tokens_fail_closed() {
    assert_eq!(subject_from_token(""), None);
    assert_eq!(subject_from_token("no-dots"), None);
    assert_eq!(subject_from_token("a..c"), None);
    assert_eq!(subject_from_token("a.!!!.c"), None);
    let not_json = BASE64URL_NOPAD.encode(b"not json");
    assert_eq!(subject_from_token(&format!("a.{not_json}.c")), None);
    let array = BASE64URL_NOPAD.encode(b"[1,2]");
    assert_eq!(subject_from_token(&format!("a.{array}.c")), None);
}

#[test]
fn claims_without_subject_yield_none() {
    let token = make_token(&json!({ "exp": 1, "user_id": 7, "sub": null }));
    assert_eq!(subject_from_token(&token), None);
}

// =============================================================
// cookie strings
// =============================================================

#[test]
fn login_cookie_is_strict_and_secure() {
    assert_eq!(login_cookie("token", "abc"), "token=abc; path=/; Secure; SameSite=Strict");
}

#[test]
fn logout_cookie_expires_in_the_past() {
    assert_eq!(logout_cookie("token"), "token=; expires=Thu, 01 Jan 1970 00:00:00 UTC; path=/;");
}
