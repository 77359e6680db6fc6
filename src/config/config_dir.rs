use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use tracing::debug;

use super::error::{ConfigError, ConfigResult};

pub fn find_config_file(use_local: bool) -> PathBuf {
    if use_local {
        return PathBuf::from("./config.toml");
    }

    find_config_file_in(config_home())
}

/// Per-user configuration root: `$HOME/.config` on unix, `%APPDATA%` on windows.
fn config_home() -> Option<PathBuf> {
    #[cfg(unix)]
    let home = std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"));
    #[cfg(windows)]
    let home = std::env::var_os("APPDATA").map(PathBuf::from);
    #[cfg(not(any(unix, windows)))]
    let home = None;

    home
}

fn find_config_file_in(config_home: Option<PathBuf>) -> PathBuf {
    if let Some(home) = config_home {
        let path = home.join(crate::APPLICATION_NAME).join("config.toml");
        if path.exists() {
            return path;
        }
    }

    PathBuf::from("./config.toml")
}

pub fn read_config(use_local: bool) -> ConfigResult<Vec<u8>> {
    read_config_from(find_config_file(use_local))
}

pub fn read_config_from(filename: impl AsRef<Path>) -> ConfigResult<Vec<u8>> {
    let filename = filename.as_ref();

    tracing::trace!("looking for config at: {}", filename.display());
    if !filename.exists() {
        return Err(ConfigError::ConfigNotFound);
    }

    let filename = filename.canonicalize()?;
    debug!("using {} as configuration file", filename.display());

    let mut fd = File::open(filename)?;
    let mut buf = Vec::new();
    fd.read_to_end(&mut buf)?;

    Ok(buf)
}
