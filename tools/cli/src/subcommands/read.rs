use crate::shellutil::{resolve_device, resolve_layout};
use anyhow::Context;
use ievio::config::Config;
use ievio::{InputEvent, WordWidth};
use std::path::PathBuf;
use structopt::StructOpt;

/// Prints events read from a device until end of stream
#[derive(StructOpt, Debug)]
pub struct Args {
    /// Event device (default: configured device)
    device: Option<PathBuf>,
    /// Record word width in bits, 32 or 64 (default: native)
    #[structopt(long, short = "w")]
    word_width: Option<WordWidth>,
}

fn styled(e: &InputEvent) -> String {
    format!(
        "{}, {}, {}, {}",
        console::style(e.time).dim(),
        console::style(e.event_type).cyan(),
        console::style(e.code).bold(),
        e.value
    )
}

pub fn run(args: Args, config: &Config) -> anyhow::Result<()> {
    let device = resolve_device(args.device.as_deref(), config)?;
    let layout = resolve_layout(args.word_width, config)?;
    let color = config.color && console::colors_enabled();

    ievio::read(device, layout, |e| {
        if color {
            println!("{}", styled(e));
        } else {
            println!("{}", e);
        }
    })
    .with_context(|| format!("reading events from {}", device.display()))
}
