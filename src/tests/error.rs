use super::*;

#[test]
fn error_display() {
    assert_eq!(
        format!("{}", Error::from(ValidationError::TooShort)),
        "Should be min of 4 characters"
    );
    assert_eq!(
        format!("{}", Error::EmptyAlphabet),
        "At least one character category must be selected"
    );
    assert_eq!(
        format!("{}", Error::from(config::ConfigError::Frozen)),
        "configuration is frozen"
    );
    assert_eq!(
        format!(
            "{}",
            Error::from(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
        ),
        "disk full"
    );
    assert_eq!(format!("{}", Error::Generic("generic")), "generic");
}

#[test]
fn poisoned_session_lock() {
    let session = std::sync::Arc::new(std::sync::Mutex::new(SessionState::new()));
    let s2 = session.clone();
    let _ = std::thread::spawn(move || {
        let _guard = s2.lock().unwrap();
        panic!("poison the lock");
    })
    .join();

    let err = Error::from(session.lock().unwrap_err());

    assert_eq!(format!("{}", err), "Error obtaining lock");
}
