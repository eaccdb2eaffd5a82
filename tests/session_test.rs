use passgen::{
    generate, validate_length, Alphabet, Category, CategorySet, Error, SessionState,
    ValidationError,
};

// Lowercase only, length 8
#[test]
fn lowercase_password() {
    let mut session = SessionState::new();
    session.toggle(Category::Lowercase);

    let password = session.generate("8").unwrap();

    assert_eq!(8, password.len());
    assert!(password
        .as_str()
        .chars()
        .all(|c| "abcdefghijklmnopqrstuvwxyz".contains(c)));
}

// Digits only, shortest length
#[test]
fn digits_password() {
    let mut session = SessionState::new();
    session.toggle(Category::Numbers);

    let password = session.generate("4").unwrap();

    assert_eq!(4, password.len());
    assert!(password.as_str().chars().all(|c| "0123456789".contains(c)));
}

// Out of range lengths never reach the generator
#[test]
fn out_of_range_lengths() {
    assert_eq!(Err(ValidationError::TooShort), validate_length("3"));
    assert_eq!(Err(ValidationError::TooLong), validate_length("20"));
}

// Nothing selected
#[test]
fn no_categories() {
    let alphabet = Alphabet::build(&CategorySet::new());
    let length = validate_length("10").unwrap();

    assert!(matches!(
        generate(length, &alphabet),
        Err(Error::EmptyAlphabet)
    ));
}

// Generate then reset returns to the initial state
#[test]
fn generate_then_reset() {
    let mut session = SessionState::new();
    session.toggle(Category::Uppercase);
    session.toggle(Category::Symbols);
    session.generate("8").unwrap();
    assert!(session.has_result());

    session.reset();

    assert!(!session.has_result());
    assert!(session.password().is_none());
    assert_eq!(&CategorySet::default(), session.categories());
}
