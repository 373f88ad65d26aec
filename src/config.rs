//! External Configuration

use crate::record::RecordLayout;
use ievio_serialization_utils::{UnsupportedWordWidth, WordWidth};
use log::debug;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &'static str = "ievio.toml";
/// Environment variable naming a config file to use instead of [`DEFAULT_CONFIG_PATH`].
pub const CONFIG_PATH_ENV: &'static str = "IEVIO_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("reading {path:?}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
    #[error("parsing config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    WordWidth(#[from] UnsupportedWordWidth),
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Device used when none is given on the command line
    pub device: Option<PathBuf>,
    /// Overrides the native record layout (32 or 64)
    pub word_width: Option<u32>,
    #[serde(default = "default_color")]
    pub color: bool,
}
fn default_color() -> bool {
    true
}
impl Default for Config {
    fn default() -> Self {
        Config { device: None, word_width: None, color: default_color() }
    }
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.layout()?;

        Ok(config)
    }

    pub fn load<P: AsRef<Path> + ?Sized>(path: &P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io { path: path.to_owned(), source })?;
        debug!("loaded config from {}", path.display());

        Self::from_toml(&content)
    }

    /// Loads the file named by `IEVIO_CONFIG`, else `ievio.toml` if it exists, else defaults.
    pub fn load_default() -> Result<Self, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Self::load(&path);
        }

        match Self::load(DEFAULT_CONFIG_PATH) {
            Err(ConfigError::Io { ref source, .. }) if source.kind() == ErrorKind::NotFound => Ok(Self::default()),
            r => r,
        }
    }

    pub fn layout(&self) -> Result<RecordLayout, ConfigError> {
        let width = match self.word_width {
            Some(bits) => WordWidth::from_bits(bits)?,
            None => WordWidth::native(),
        };

        Ok(RecordLayout::new(width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let c = Config::from_toml("").expect("parse");
        assert_eq!(c, Config::default());
        assert!(c.color);
        assert_eq!(c.layout().expect("layout"), RecordLayout::native());
    }

    #[test]
    fn reads_every_key() {
        let c = Config::from_toml("device = \"/dev/input/event3\"\nword-width = 32\ncolor = false\n").expect("parse");
        assert_eq!(c.device.as_deref(), Some(Path::new("/dev/input/event3")));
        assert_eq!(c.layout().expect("layout").record_size(), 16);
        assert!(!c.color);
    }

    #[test]
    fn rejects_bad_word_width_and_unknown_keys() {
        assert!(matches!(Config::from_toml("word-width = 16"), Err(ConfigError::WordWidth(_))));
        assert!(matches!(Config::from_toml("devcie = \"x\""), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let missing = std::env::temp_dir().join("ievio-no-such-config.toml");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io { .. })));
    }
}
