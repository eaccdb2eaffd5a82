use std::{rc::Rc, sync::atomic::AtomicU64};

use cursive::{
    view::Nameable,
    views::EditView,
};
use passgen::ValidationError;

use crate::helpers::{
    get_value_from_input, is_latest_copy, next_copy_generation, validation_message,
};

#[test]
fn test_get_value_from_input() {
    let mut siv = cursive::default();

    let ev = EditView::new()
        .content("unit test content")
        .with_name("input");

    siv.add_layer(ev);

    assert_eq!(
        Some(Rc::new(String::from("unit test content"))),
        get_value_from_input(&mut siv, "input")
    );
}

#[test]
fn test_get_value_from_input_missing() {
    let mut siv = cursive::default();

    assert_eq!(None, get_value_from_input(&mut siv, "input"));
}

#[test]
fn validation_message_untranslated() {
    // tests run without a translation catalog for the current locale
    if crate::CATALOG.gettext("Length is required") != "Length is required" {
        return;
    }

    assert_eq!(
        "Should be max of 16 characters",
        validation_message(&ValidationError::TooLong)
    );
}

#[test]
fn newer_copy_supersedes_older() {
    let copies = AtomicU64::new(0);

    let first = next_copy_generation(&copies);
    assert!(is_latest_copy(&copies, first));

    let second = next_copy_generation(&copies);
    assert!(!is_latest_copy(&copies, first));
    assert!(is_latest_copy(&copies, second));
}
