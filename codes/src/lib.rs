//! Registry of event types and their code spaces
//!
//! Every raw `(type, code)` pair read from a device resolves to something printable:
//! named values render as `NAME(0x%04x)`, unnamed ones as `UNKNOWN(0x%04x)`, and types
//! that define no code space keep the raw code in [`EventCode::Unrepresented`].

#[macro_use]
mod macros;

mod code;
mod event_type;
mod parse;
mod spaces;

pub use self::code::{Code, EventCode};
pub use self::event_type::EventType;
pub use self::parse::{parse, parse_number, parse_type, parse_value, resolve, resolve_type, ParseError, ParseResult};
pub use self::spaces::*;
