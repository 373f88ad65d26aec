use ievio::{Code, EventType};
use structopt::StructOpt;

/// Lists event types, or the named codes of one event type
#[derive(StructOpt, Debug)]
pub struct Args {
    /// Event type whose codes to list
    #[structopt(name = "TYPE")]
    event_type: Option<String>,
}

pub fn run(args: Args) -> anyhow::Result<()> {
    let event_type = match args.event_type {
        None => {
            for t in EventType::known() {
                let marker = if t.has_code_space() { "" } else { " (no codes)" };
                println!("{}{}", t, marker);
            }
            return Ok(());
        }
        Some(text) => ievio::codes::parse_type(&text)?,
    };

    if !event_type.has_code_space() {
        anyhow::bail!("{} defines no codes", event_type);
    }
    for c in Code::known(event_type) {
        println!("{}", c);
    }

    Ok(())
}
