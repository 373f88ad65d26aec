use crate::shellutil::{resolve_device, resolve_layout};
use anyhow::Context;
use ievio::config::Config;
use ievio::WordWidth;
use std::path::PathBuf;
use structopt::StructOpt;

/// Writes a single event to a device
///
/// TYPE, CODE and VALUE are decimal, 0x-prefixed hexadecimal, or (TYPE and CODE) a
/// symbolic name such as EV_KEY or KEY_A.
#[derive(StructOpt, Debug)]
pub struct Args {
    /// Event device (default: configured device)
    #[structopt(long, short = "d")]
    device: Option<PathBuf>,
    /// Record word width in bits, 32 or 64 (default: native)
    #[structopt(long, short = "w")]
    word_width: Option<WordWidth>,
    /// Event type
    #[structopt(name = "TYPE")]
    event_type: String,
    /// Event code
    #[structopt(name = "CODE")]
    code: String,
    /// Event value
    #[structopt(name = "VALUE", allow_hyphen_values = true)]
    value: String,
}

pub fn run(args: Args, config: &Config) -> anyhow::Result<()> {
    let device = resolve_device(args.device.as_deref(), config)?;
    let layout = resolve_layout(args.word_width, config)?;

    let event = ievio::write(device, layout, &args.event_type, &args.code, &args.value)
        .with_context(|| format!("writing event to {}", device.display()))?;
    println!("{}", event);

    Ok(())
}
