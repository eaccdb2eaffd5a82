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
    path::PathBuf,
    process,
    sync::{atomic::AtomicU64, Arc, Mutex},
    thread, time,
};

use cursive::{
    direction::Orientation,
    event::{Event, Key},
    traits::*,
    views::{
        Button, Checkbox, Dialog, DummyView, EditView, HideableView, LinearLayout, TextView,
    },
    Cursive,
};
use passgen::{
    settings, validate_length, Category, PasswordLength, SessionState, Settings, ValidationError,
};
use unic_langid::LanguageIdentifier;
use zeroize::Zeroizing;

mod helpers;

#[macro_use]
extern crate lazy_static;

lazy_static! {
    static ref CATALOG: gettext::Catalog = get_translation_catalog();
}

type SessionStateType = Arc<Mutex<SessionState>>;

/// Runs `f` on the locked session, shows an error box if the lock is poisoned.
fn with_session<T>(
    ui: &mut Cursive,
    session: &SessionStateType,
    f: impl FnOnce(&mut SessionState) -> T,
) -> Option<T> {
    match session.lock() {
        Ok(mut s) => Some(f(&mut s)),
        Err(err) => {
            helpers::errorbox(ui, &passgen::Error::from(err));
            None
        }
    }
}

fn category_label(category: Category) -> &'static str {
    match category {
        Category::Uppercase => CATALOG.gettext("Include uppercase"),
        Category::Lowercase => CATALOG.gettext("Include lowercase"),
        Category::Numbers => CATALOG.gettext("Include numbers"),
        Category::Symbols => CATALOG.gettext("Include symbols"),
    }
}

fn set_length_error(ui: &mut Cursive, err: Option<ValidationError>) {
    let text = match err {
        Some(err) => helpers::validation_message(&err),
        None => String::new(),
    };
    ui.call_on_name("length_error", |l: &mut TextView| {
        l.set_content(text);
    });
}

/// Generation is only offered when a category is selected and the length is valid.
fn refresh_generate_button(ui: &mut Cursive, session: &SessionStateType) {
    let can_generate = with_session(ui, session, |s| s.can_generate()).unwrap_or(false);
    let length_ok = helpers::get_value_from_input(ui, "password_length")
        .map(|raw| validate_length(&raw).is_ok())
        .unwrap_or(false);

    ui.call_on_name("generate_button", |b: &mut Button| {
        b.set_enabled(can_generate && length_ok);
    });
}

fn length_edited(ui: &mut Cursive, session: &SessionStateType, content: &str) {
    set_length_error(ui, validate_length(content).err());
    refresh_generate_button(ui, session);
}

fn category_changed(
    ui: &mut Cursive,
    session: &SessionStateType,
    category: Category,
    enabled: bool,
) {
    if with_session(ui, session, |s| s.set_category(category, enabled)).is_some() {
        refresh_generate_button(ui, session);
    }
}

fn show_result(ui: &mut Cursive, password: Option<&str>) {
    ui.call_on_name("result", |l: &mut TextView| {
        l.set_content(password.unwrap_or_default());
    });
    ui.call_on_name("result_card", |l: &mut HideableView<Dialog>| {
        l.set_visible(password.is_some());
    });
}

fn generate(ui: &mut Cursive, session: &SessionStateType) {
    let raw_length = match helpers::get_value_from_input(ui, "password_length") {
        Some(raw_length) => raw_length,
        None => return,
    };

    let result = with_session(ui, session, |s| {
        s.generate(&raw_length)
            .map(|password| Zeroizing::new(password.as_str().to_owned()))
    });

    match result {
        Some(Ok(password)) => {
            set_length_error(ui, None);
            show_result(ui, Some(password.as_str()));
            ui.call_on_name("status_bar", |l: &mut TextView| {
                l.set_content("");
            });
        }
        Some(Err(passgen::Error::Validation(err))) => set_length_error(ui, Some(err)),
        Some(Err(err)) => helpers::errorbox(ui, &err),
        None => {}
    }
}

fn reset(ui: &mut Cursive, session: &SessionStateType, default_length: PasswordLength) {
    if with_session(ui, session, |s| s.reset()).is_none() {
        return;
    }

    // the returned callbacks are dropped so the checkboxes don't report back
    for category in Category::ALL {
        ui.call_on_name(category.name(), |c: &mut Checkbox| {
            let _ = c.set_checked(false);
        });
    }
    ui.call_on_name("password_length", |e: &mut EditView| {
        let _ = e.set_content(default_length.to_string());
    });

    set_length_error(ui, None);
    show_result(ui, None);
    ui.call_on_name("status_bar", |l: &mut TextView| {
        l.set_content("");
    });
    refresh_generate_button(ui, session);
}

fn copy(
    ui: &mut Cursive,
    session: &SessionStateType,
    copies: &Arc<AtomicU64>,
    clipboard_timeout: u64,
) {
    let password = match with_session(ui, session, |s| {
        s.password()
            .map(|password| Zeroizing::new(password.as_str().to_owned()))
    }) {
        Some(Some(password)) => password,
        _ => return,
    };

    if let Err(err) = || -> passgen::Result<()> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(password.as_str())?;
        Ok(())
    }() {
        helpers::errorbox(ui, &err);
        return;
    }

    let generation = helpers::next_copy_generation(copies);
    let copies = copies.clone();
    thread::spawn(move || {
        thread::sleep(time::Duration::from_secs(clipboard_timeout));
        // a later copy owns the clipboard and its own timer
        if !helpers::is_latest_copy(&copies, generation) {
            return;
        }
        match arboard::Clipboard::new() {
            Ok(mut clipboard) => {
                if let Err(err) = clipboard.set_text(String::new()) {
                    log::warn!("failed to clear clipboard: {err}");
                }
            }
            Err(err) => log::warn!("failed to clear clipboard: {err}"),
        }
    });

    ui.call_on_name("status_bar", |l: &mut TextView| {
        l.set_content(
            CATALOG
                .gettext("Copied password to copy buffer for {} seconds")
                .replace("{}", &clipboard_timeout.to_string()),
        );
    });
}

fn category_row(session: &SessionStateType, category: Category) -> LinearLayout {
    let session = session.clone();
    let checkbox = Checkbox::new()
        .on_change(move |ui: &mut Cursive, checked| {
            category_changed(ui, &session, category, checked)
        })
        .with_name(category.name());

    LinearLayout::new(Orientation::Horizontal)
        .child(checkbox)
        .child(TextView::new(format!(" {}", category_label(category))))
}

/// Adds the generator form, the result card and the status bar to `ui`.
fn build_ui(ui: &mut Cursive, session: SessionStateType, settings: &Settings) {
    let default_length = settings.default_length;
    let clipboard_timeout = settings.clipboard_timeout;

    ui.add_global_callback(Event::CtrlChar('y'), {
        let session = session.clone();
        let copies = Arc::new(AtomicU64::new(0));
        move |ui: &mut Cursive| copy(ui, &session, &copies, clipboard_timeout)
    });

    let length_input = EditView::new()
        .content(default_length.to_string())
        .on_edit({
            let session = session.clone();
            move |ui: &mut Cursive, content, _| length_edited(ui, &session, content)
        })
        .on_submit({
            let session = session.clone();
            move |ui: &mut Cursive, _| generate(ui, &session)
        })
        .with_name("password_length")
        .fixed_width(4);

    let mut form = LinearLayout::new(Orientation::Vertical)
        .child(
            LinearLayout::new(Orientation::Horizontal)
                .child(TextView::new(CATALOG.gettext("Password length ")))
                .child(length_input),
        )
        .child(TextView::new("").with_name("length_error"));

    // lowercase is listed first in the form
    for category in [
        Category::Lowercase,
        Category::Uppercase,
        Category::Numbers,
        Category::Symbols,
    ] {
        form.add_child(category_row(&session, category));
    }

    let generate_button = Button::new(CATALOG.gettext("Generate password"), {
        let session = session.clone();
        move |ui: &mut Cursive| generate(ui, &session)
    })
    .disabled()
    .with_name("generate_button");

    let reset_button = Button::new(CATALOG.gettext("Reset password"), {
        let session = session.clone();
        move |ui: &mut Cursive| reset(ui, &session, default_length)
    });

    form.add_child(DummyView);
    form.add_child(
        LinearLayout::new(Orientation::Horizontal)
            .child(generate_button)
            .child(DummyView)
            .child(reset_button),
    );

    let result_card = HideableView::new(
        Dialog::around(
            LinearLayout::new(Orientation::Vertical)
                .child(TextView::new(CATALOG.gettext("Press ctrl-y to copy")))
                .child(TextView::new("").with_name("result")),
        )
        .title(CATALOG.gettext("Result")),
    )
    .hidden()
    .with_name("result_card");

    ui.add_layer(
        LinearLayout::new(Orientation::Vertical)
            .child(Dialog::around(form).title(CATALOG.gettext("Password Generator")))
            .child(result_card)
            .child(
                LinearLayout::new(Orientation::Horizontal)
                    .child(TextView::new(CATALOG.gettext("Esc: Quit | ctrl-y: Copy | ")))
                    .child(TextView::new("").with_name("status_bar"))
                    .full_width(),
            ),
    );

    refresh_generate_button(ui, &session);
}

fn help() {
    println!("{}", CATALOG.gettext("A password generator

Usage: passgen-cursive [-h|--help]

Choose a length between 4 and 16 and at least one character category, then press
\"Generate password\". \"Reset password\" clears the result and all categories.

Keybindings:
 ctrl-y: Copy the generated password to the clipboard
 Esc: Quit

Environment:
 PASSGEN_DEFAULT_LENGTH: length shown in the form at startup
 PASSGEN_CLIPBOARD_TIMEOUT: seconds before a copied password is cleared"));
}

fn get_translation_catalog() -> gettext::Catalog {
    let locale = locale_config::Locale::current();

    let mut translation_locations = vec!["/usr/share/passgen"];
    if let Some(path) = option_env!("TRANSLATION_INPUT_PATH") {
        translation_locations.insert(0, path);
    }

    for preferred in locale.tags_for("messages") {
        for loc in &translation_locations {
            let langid_res: Result<LanguageIdentifier, _> = format!("{}", preferred).parse();

            if let Ok(langid) = langid_res {
                let file = std::fs::File::open(format!("{}/{}.mo", loc, langid.language));
                if let Ok(file) = file {
                    if let Ok(catalog) = gettext::Catalog::parse(file) {
                        return catalog;
                    }
                }
            }
        }
    }

    gettext::Catalog::empty()
}

fn read_settings() -> passgen::Result<Settings> {
    let home = std::env::var("HOME").ok().map(PathBuf::from);
    let xdg_config_home = std::env::var("XDG_CONFIG_HOME").ok().map(PathBuf::from);
    let default_length = std::env::var("PASSGEN_DEFAULT_LENGTH").ok();
    let clipboard_timeout = std::env::var("PASSGEN_CLIPBOARD_TIMEOUT").ok();

    let (config, location) =
        settings::read_config(&default_length, &clipboard_timeout, &home, &xdg_config_home)?;
    log::debug!("settings file: {}", location.display());

    Settings::from_config(&config)
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    match args.len() {
        1 => (),
        2 if args[1] == "-h" || args[1] == "--help" => {
            help();
            process::exit(0);
        }
        _ => {
            eprintln!(
                "{}",
                CATALOG.gettext("Unknown argument, usage: passgen-cursive [-h|--help]")
            );
            process::exit(1);
        }
    }

    let settings = match read_settings() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("Error {}", err);
            process::exit(1);
        }
    };

    let session: SessionStateType = Arc::new(Mutex::new(SessionState::new()));

    let mut ui = cursive::default();

    if let Err(err) = ui.load_toml(include_str!("../res/style.toml")) {
        log::warn!("failed to load theme: {:?}", err);
    }

    ui.add_global_callback(Key::Esc, |s| s.quit());

    build_ui(&mut ui, session, &settings);

    ui.run();
}

#[cfg(test)]
#[path = "tests/main.rs"]
mod main_tests;
