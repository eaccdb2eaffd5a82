/*  Passgen - a simple password generator
    Copyright (C) 2024 Joakim Lundborg, Alexander Kjäll

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use std::{
    rc::Rc,
    sync::atomic::{AtomicU64, Ordering},
};

use cursive::{
    event::Key,
    views::{Dialog, EditView, OnEventView, TextView},
    Cursive,
};

use passgen::{Error, ValidationError};

/// Displays an error in a cursive dialog
pub fn errorbox(ui: &mut Cursive, err: &Error) {
    let text = match err {
        Error::Validation(err) => validation_message(err),
        _ => format!("{err}"),
    };

    let d = Dialog::around(TextView::new(text))
        .dismiss_button(super::CATALOG.gettext("Ok"))
        .title(super::CATALOG.gettext("Error"));

    let ev = OnEventView::new(d).on_event(Key::Esc, |s| {
        s.pop_layer();
    });

    ui.add_layer(ev);
}

/// The translated message for a rejected length.
pub fn validation_message(err: &ValidationError) -> String {
    let msgid = err.to_string();
    super::CATALOG.gettext(&msgid).to_string()
}

/// Gets the value of an edit view, `None` if no view has that name.
pub fn get_value_from_input(s: &mut Cursive, input_name: &str) -> Option<Rc<String>> {
    let mut value = None;
    s.call_on_name(input_name, |e: &mut EditView| {
        value = Some(e.get_content());
    });
    value
}

/// Registers a new copy to the clipboard and returns its generation.
pub fn next_copy_generation(copies: &AtomicU64) -> u64 {
    copies.fetch_add(1, Ordering::SeqCst) + 1
}

/// True if no copy has been made since the one with `generation`.
pub fn is_latest_copy(copies: &AtomicU64, generation: u64) -> bool {
    copies.load(Ordering::SeqCst) == generation
}

#[cfg(test)]
#[path = "tests/helpers.rs"]
mod helpers_tests;
