use std::path::{Path, PathBuf};

use crate::{
    error::{Error, Result},
    length::{validate_length, PasswordLength, DEFAULT_LENGTH},
};

/// Seconds a copied password stays on the clipboard.
pub const DEFAULT_CLIPBOARD_TIMEOUT: i64 = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub default_length: PasswordLength,
    pub clipboard_timeout: u64,
}

impl Settings {
    /// Extracts the settings from a merged configuration, validating the values.
    pub fn from_config(settings: &config::Config) -> Result<Settings> {
        let default_length = validate_length(&settings.get_str("default_length")?)?;

        let clipboard_timeout = settings.get_int("clipboard_timeout")?;
        if clipboard_timeout < 0 {
            return Err(Error::Generic("clipboard_timeout can't be negative"));
        }

        Ok(Settings {
            default_length,
            clipboard_timeout: clipboard_timeout as u64,
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            default_length: PasswordLength::default(),
            clipboard_timeout: DEFAULT_CLIPBOARD_TIMEOUT as u64,
        }
    }
}

fn home_settings(home: &Path) -> PathBuf {
    home.join(".config").join("passgen").join("settings.toml")
}

/// Location of the settings file, `$XDG_CONFIG_HOME/passgen/settings.toml`
/// if that is set, otherwise under `$HOME/.config`.
pub fn xdg_config_file_location(
    home: &Option<PathBuf>,
    xdg_config_home: &Option<PathBuf>,
) -> Result<PathBuf> {
    match xdg_config_home {
        Some(p) => Ok(p.join("passgen").join("settings.toml")),
        None => match home {
            Some(h) => Ok(home_settings(h)),
            None => Err(Error::Generic("no home directory set")),
        },
    }
}

pub fn file_settings(config_file: &Path) -> config::File<config::FileSourceFile> {
    config::File::from(config_file)
        .format(config::FileFormat::Toml)
        .required(false)
}

/// Reads the settings file and applies the environment overrides on top of
/// it. Returns the merged configuration and the path of the settings file.
pub fn read_config(
    default_length_env: &Option<String>,
    clipboard_timeout_env: &Option<String>,
    home: &Option<PathBuf>,
    xdg_config_home: &Option<PathBuf>,
) -> Result<(config::Config, PathBuf)> {
    let mut settings = config::Config::default();
    settings.set_default("default_length", DEFAULT_LENGTH as i64)?;
    settings.set_default("clipboard_timeout", DEFAULT_CLIPBOARD_TIMEOUT)?;

    let config_file_location = xdg_config_file_location(home, xdg_config_home)?;
    if config_file_location.exists() {
        settings.merge(file_settings(&config_file_location))?;
    } else {
        log::warn!(
            "no settings file at {}, using defaults",
            config_file_location.display()
        );
    }

    if let Some(length) = default_length_env {
        settings.set("default_length", length.as_str())?;
    }
    if let Some(timeout) = clipboard_timeout_env {
        settings.set("clipboard_timeout", timeout.as_str())?;
    }

    Ok((settings, config_file_location))
}

/// Writes `settings` as toml to `config_file`, creating the directory if needed.
pub fn save_config(settings: &Settings, config_file: &Path) -> Result<()> {
    let mut table = toml::Table::new();
    table.insert(
        "default_length".to_owned(),
        toml::Value::Integer(settings.default_length.get() as i64),
    );
    let clipboard_timeout = i64::try_from(settings.clipboard_timeout)
        .map_err(|_| Error::Generic("clipboard_timeout is too large"))?;
    table.insert(
        "clipboard_timeout".to_owned(),
        toml::Value::Integer(clipboard_timeout),
    );

    let contents = toml::to_string_pretty(&table)?;

    if let Some(parent) = config_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(config_file, contents)?;

    Ok(())
}

#[cfg(test)]
#[path = "tests/settings.rs"]
mod settings_tests;
