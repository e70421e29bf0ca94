use super::*;

#[test]
fn error_with_description() {
    assert_eq!(
        parse_pending_error("?error=access_denied&error_description=user+cancelled"),
        Some(PendingError { code: "access_denied".into(), description: "user cancelled".into() })
    );
}

#[test]
fn error_without_description_uses_unknown() {
    assert_eq!(
        parse_pending_error("?error=access_denied"),
        Some(PendingError { code: "access_denied".into(), description: UNKNOWN_DESCRIPTION.into() })
    );
}

#[test]
fn no_error_parameters() {
    assert_eq!(parse_pending_error("?foo=bar"), None);
    assert_eq!(parse_pending_error(""), None);
    assert_eq!(parse_pending_error("?"), None);
}

#[test]
fn description_alone_is_not_an_error() {
    assert_eq!(parse_pending_error("?error_description=oops"), None);
}

#[test]
fn empty_error_is_ignored() {
    assert_eq!(parse_pending_error("?error=&error_description=x"), None);
}

#[test]
fn empty_description_uses_unknown() {
    let pending = parse_pending_error("?error=invalid_request&error_description=").unwrap();
    assert_eq!(pending.description, UNKNOWN_DESCRIPTION);
}

#[test]
fn leading_question_mark_is_optional() {
    assert_eq!(
        parse_pending_error("error=invalid_request").map(|p| p.code),
        Some("invalid_request".to_owned())
    );
}

#[test]
fn percent_encoding_is_decoded() {
    let pending = parse_pending_error("?error=server_error&error_description=Bad%20state%3A%20retry").unwrap();
    assert_eq!(pending.description, "Bad state: retry");
}

#[test]
fn other_parameters_are_ignored() {
    let pending = parse_pending_error("?state=abc&error=access_denied&code=xyz").unwrap();
    assert_eq!(pending.code, "access_denied");
}

#[test]
fn repeated_keys_keep_first_value() {
    assert_eq!(
        parse_pending_error("?error=access_denied&error=server_error&error_description=x&error_description=y"),
        Some(PendingError { code: "access_denied".into(), description: "x".into() })
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn read_pending_error_outside_browser_is_none() {
    assert_eq!(read_pending_error(), None);
}
