//! Reading and writing kernel input event records
//!
//! ```no_run
//! ievio::read("/dev/input/event0", ievio::RecordLayout::native(), |e| println!("{}", e))?;
//! # Ok::<(), ievio::Error>(())
//! ```

pub extern crate ievio_codes as codes;
pub extern crate ievio_serialization_utils as serialization_utils;

pub mod config;
mod device;
mod error;
mod event;
mod record;

pub use self::codes::{Code, EventCode, EventType, ParseError};
pub use self::device::{read, write, EventDevice};
pub use self::error::{DecodeError, EncodeError, Error, Field, Result};
pub use self::event::{InputEvent, KeyState, Timestamp};
pub use self::record::{decode, encode, RecordLayout, RECORD_SIZE};
pub use self::serialization_utils::WordWidth;
