use super::*;

#[test]
fn extracts_token_after_bearer_scheme() {
    assert_eq!(bearer_token("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
}

#[test]
fn matches_scheme_case_insensitively() {
    assert_eq!(bearer_token("bearer token").unwrap(), "token");
    assert_eq!(bearer_token("BEARER token").unwrap(), "token");
}

#[test]
fn accepts_runs_of_spaces_and_tabs() {
    assert_eq!(bearer_token("Bearer \t  token").unwrap(), "token");
    assert_eq!(bearer_token("  Bearer\ttoken").unwrap(), "token");
}

#[test]
fn rejects_other_schemes() {
    let result = bearer_token("Basic dXNlcjpwYXNz");

    assert!(matches!(result, Err(AuthError::InvalidScheme(scheme)) if scheme == "Basic"));
}

#[test]
fn rejects_empty_header() {
    assert!(matches!(
        bearer_token(""),
        Err(AuthError::InvalidScheme(_))
    ));
}

#[test]
fn rejects_scheme_without_token() {
    assert!(matches!(bearer_token("Bearer"), Err(AuthError::MissingToken)));
    assert!(matches!(
        bearer_token("Bearer   "),
        Err(AuthError::MissingToken)
    ));
}
