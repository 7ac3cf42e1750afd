use std::{
    env,
    io::{Error, ErrorKind},
    path::PathBuf,
};

/// Locations of the tool's own files.
///
/// Follows the XDG Base Directory specification for settings.
pub struct SettingsPaths;

impl SettingsPaths {
    /// Settings directory.
    ///
    /// `$XDG_CONFIG_HOME/appwrap`, falling back to `$HOME/.config/appwrap`.
    ///
    /// # Errors
    /// Returns an error if neither `XDG_CONFIG_HOME` nor `HOME` is set.
    pub fn config_dir() -> Result<PathBuf, Error> {
        let config_home = env::var("XDG_CONFIG_HOME")
            .or_else(|_| env::var("HOME").map(|home| format!("{home}/.config")))
            .map_err(|_| {
                Error::new(
                    ErrorKind::NotFound,
                    "Neither XDG_CONFIG_HOME nor HOME environment variable found",
                )
            })?;

        Ok(PathBuf::from(config_home).join("appwrap"))
    }

    /// The settings file.
    ///
    /// # Errors
    /// Returns an error if the settings directory cannot be determined.
    pub fn config_file() -> Result<PathBuf, Error> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Where store configurations are kept when no `data_dir` is configured.
    ///
    /// # Errors
    /// Returns an error if `HOME` is not set.
    pub fn default_data_dir() -> Result<PathBuf, Error> {
        let home = env::var("HOME")
            .map_err(|_| Error::new(ErrorKind::NotFound, "HOME environment variable not found"))?;

        Ok(PathBuf::from(home).join(".appwrap").join("stores"))
    }
}
