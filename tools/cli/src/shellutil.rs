//! Shell Output Helper

use anyhow::Context;
use ievio::config::Config;
use ievio::{RecordLayout, WordWidth};
use std::path::Path;

pub fn exit_with_error(e: &anyhow::Error) -> ! {
    log::debug!("{:?}", e);
    eprintln!("{}: {:#}", console::style("ERROR").bold().fg(console::Color::Red), e);
    std::process::exit(1);
}

/// Loads the default configuration. Only subcommands that touch a device need it.
pub fn load_config() -> anyhow::Result<Config> {
    Config::load_default().context("loading configuration")
}

/// The device named on the command line, else the configured one.
pub fn resolve_device<'s>(arg: Option<&'s Path>, config: &'s Config) -> anyhow::Result<&'s Path> {
    arg.or(config.device.as_deref())
        .ok_or_else(|| anyhow::anyhow!("no device given and none configured"))
}

/// Command line word width, else the configured one, else native.
pub fn resolve_layout(arg: Option<WordWidth>, config: &Config) -> anyhow::Result<RecordLayout> {
    match arg {
        Some(w) => Ok(RecordLayout::new(w)),
        None => Ok(config.layout()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn command_line_wins_over_config() {
        let config = Config {
            device: Some(PathBuf::from("/dev/input/event1")),
            word_width: Some(32),
            ..Config::default()
        };
        let arg = PathBuf::from("/dev/input/event7");

        assert_eq!(resolve_device(Some(&arg), &config).expect("device"), arg.as_path());
        assert_eq!(resolve_device(None, &config).expect("device"), Path::new("/dev/input/event1"));
        assert_eq!(resolve_layout(Some(WordWidth::W64), &config).expect("layout").record_size(), 24);
        assert_eq!(resolve_layout(None, &config).expect("layout").record_size(), 16);
    }

    #[test]
    fn missing_device_is_reported() {
        assert!(resolve_device(None, &Config::default()).is_err());
    }
}
