use super::*;

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(
        validate_login_input("  alice  ", "hunter2!"),
        Ok(("alice".to_owned(), "hunter2!".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "hunter2!"), Err("Enter both username and password."));
    assert_eq!(validate_login_input("alice", ""), Err("Enter both username and password."));
    assert_eq!(validate_login_input("   ", "hunter2!"), Err("Enter both username and password."));
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    assert_eq!(
        validate_login_input("alice", "  spaces kept  "),
        Ok(("alice".to_owned(), "  spaces kept  ".to_owned()))
    );
}
