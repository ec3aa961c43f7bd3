use super::*;

fn make_state(user_id: Option<i64>) -> SessionState {
    SessionState {
        user: user_id.map(|id| User {
            id,
            username: "alice".to_owned(),
            disabled: false,
            is_admin: true,
        }),
        is_admin: user_id.is_some(),
        is_authenticated: user_id.is_some(),
    }
}

#[test]
fn user_delete_endpoint_formats_expected_path() {
    assert_eq!(user_delete_endpoint(3), "/users/3");
}

#[test]
fn is_current_user_matches_signed_in_account() {
    let state = make_state(Some(3));
    assert!(is_current_user(&state, 3));
    assert!(!is_current_user(&state, 4));
}

#[test]
fn is_current_user_false_when_no_identity_loaded() {
    let state = make_state(None);
    assert!(!is_current_user(&state, 3));
}

#[test]
fn validate_new_user_input_trims_and_requires_both_fields() {
    assert_eq!(
        validate_new_user_input(" bob ", "S3cure!pw"),
        Ok(("bob".to_owned(), "S3cure!pw".to_owned()))
    );
    assert_eq!(validate_new_user_input("", "S3cure!pw"), Err("Enter both username and password."));
    assert_eq!(validate_new_user_input("bob", ""), Err("Enter both username and password."));
}
