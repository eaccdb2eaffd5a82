use super::*;
use crate::error::{Error, ValidationError};

fn assert_idle(session: &SessionState) {
    assert!(!session.has_result());
    assert!(session.password().is_none());
    assert_eq!(&CategorySet::default(), session.categories());
}

#[test]
fn new_session_is_idle() {
    let session = SessionState::new();

    assert_idle(&session);
    assert!(!session.can_generate());
}

#[test]
fn generate_stores_result() {
    let mut session = SessionState::new();
    session.toggle(Category::Lowercase);

    let password = session.generate("8").unwrap().clone();

    assert!(session.has_result());
    assert_eq!(Some(&password), session.password());
    assert_eq!(8, password.len());
    assert!(password.as_str().chars().all(|c| c.is_ascii_lowercase()));
}

#[test]
fn generate_too_short_leaves_state_untouched() {
    let mut session = SessionState::new();
    session.toggle(Category::Numbers);

    let result = session.generate("3");

    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::TooShort))
    ));
    assert!(!session.has_result());
    assert!(session.categories().numbers);
}

#[test]
fn generate_too_long_keeps_previous_result() {
    let mut session = SessionState::new();
    session.toggle(Category::Numbers);
    let previous = session.generate("4").unwrap().clone();

    let result = session.generate("20");

    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::TooLong))
    ));
    assert_eq!(Some(&previous), session.password());
}

#[test]
fn generate_required() {
    let mut session = SessionState::new();
    session.toggle(Category::Numbers);

    let result = session.generate("");

    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::Required))
    ));
    assert!(!session.has_result());
}

#[test]
fn generate_without_categories_fails() {
    let mut session = SessionState::new();

    let result = session.generate("10");

    assert!(matches!(result, Err(Error::EmptyAlphabet)));
    assert_idle(&session);
}

#[test]
fn generate_length_digits_only() {
    let mut session = SessionState::new();
    session.set_category(Category::Numbers, true);

    let password = session
        .generate_length(PasswordLength::new(4).unwrap())
        .unwrap();

    assert_eq!(4, password.len());
    assert!(password.as_str().chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn toggle_after_generate_keeps_result() {
    let mut session = SessionState::new();
    session.toggle(Category::Uppercase);
    let password = session.generate("10").unwrap().clone();

    session.toggle(Category::Uppercase);

    assert!(session.has_result());
    assert_eq!(Some(&password), session.password());
    assert!(!session.can_generate());
}

#[test]
fn reset_after_generate() {
    let mut session = SessionState::new();
    session.toggle(Category::Uppercase);
    session.toggle(Category::Symbols);
    session.generate("8").unwrap();

    session.reset();

    assert_idle(&session);
}

#[test]
fn reset_is_idempotent() {
    let mut session = SessionState::new();
    session.toggle(Category::Lowercase);
    session.generate("16").unwrap();

    session.reset();
    session.reset();

    assert_idle(&session);
}

#[test]
fn can_generate_follows_categories() {
    let mut session = SessionState::new();
    assert!(!session.can_generate());

    session.toggle(Category::Symbols);
    assert!(session.can_generate());

    session.toggle(Category::Symbols);
    assert!(!session.can_generate());
}
