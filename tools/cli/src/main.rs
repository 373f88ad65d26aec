mod shellutil;
mod subcommands;

use structopt::StructOpt;

/// Reads and writes kernel input event records
#[derive(StructOpt)]
#[structopt(name = "ievio")]
pub enum SubCommands {
    Read(subcommands::read::Args),
    Write(subcommands::write::Args),
    List(subcommands::list::Args),
}

fn main() {
    env_logger::init();

    let r = match SubCommands::from_args() {
        SubCommands::Read(a) => shellutil::load_config().and_then(|c| subcommands::read::run(a, &c)),
        SubCommands::Write(a) => shellutil::load_config().and_then(|c| subcommands::write::run(a, &c)),
        SubCommands::List(a) => subcommands::list::run(a),
    };
    if let Err(e) = r {
        shellutil::exit_with_error(&e);
    }
}
