//! Fixed-size kernel input record codec
//!
//! A record is laid out as
//!
//! | field        | offset    | width     |
//! |--------------|-----------|-----------|
//! | seconds      | 0         | word      |
//! | microseconds | word      | word      |
//! | event type   | 2 * word  | 16 bits   |
//! | code         | +2        | 16 bits   |
//! | value        | +4        | 32 bits   |
//!
//! where *word* is 4 or 8 bytes. Every field is little-endian, whatever the host; on
//! big-endian hosts this is not the kernel's native-order layout.

use crate::error::{DecodeError, EncodeError, Field};
use crate::event::{InputEvent, Timestamp};
use ievio_codes as codes;
use ievio_serialization_utils::{read_word, write_word, LeField, WordWidth};
use log::trace;

/// Record size for the compilation target.
pub const RECORD_SIZE: usize = RecordLayout::native().record_size();

/// Byte layout of one record for a given word width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordLayout {
    pub width: WordWidth,
}
impl RecordLayout {
    pub const fn new(width: WordWidth) -> Self {
        RecordLayout { width }
    }
    pub const fn native() -> Self {
        Self::new(WordWidth::native())
    }

    /// 16 bytes for 32-bit words, 24 for 64-bit. Independent of type and code.
    pub const fn record_size(&self) -> usize {
        self.type_offset() + 8
    }
    pub const fn seconds_offset(&self) -> usize {
        0
    }
    pub const fn microseconds_offset(&self) -> usize {
        self.width.bytes()
    }
    pub const fn type_offset(&self) -> usize {
        self.width.bytes() * 2
    }
    pub const fn code_offset(&self) -> usize {
        self.type_offset() + 2
    }
    pub const fn value_offset(&self) -> usize {
        self.type_offset() + 4
    }

    fn check_length(&self, actual: usize) -> Result<(), DecodeError> {
        let expected = self.record_size();
        if actual == expected {
            Ok(())
        } else {
            Err(DecodeError::LengthMismatch { expected, actual })
        }
    }

    /// Decodes exactly one record.
    ///
    /// Unknown types and codes decode fine; codes of types without a code space come back
    /// as [`EventCode::Unrepresented`](codes::EventCode::Unrepresented).
    pub fn decode(&self, buf: &[u8]) -> Result<InputEvent, DecodeError> {
        self.check_length(buf.len())?;

        let time = Timestamp::new(
            read_word(self.width, &buf[self.seconds_offset()..]),
            read_word(self.width, &buf[self.microseconds_offset()..]),
        );
        let event_type = codes::resolve_type(u16::read_le(&buf[self.type_offset()..]));
        let code = codes::resolve(event_type, u16::read_le(&buf[self.code_offset()..]));
        let value = i32::read_le(&buf[self.value_offset()..]);

        let event = InputEvent { time, event_type, code, value };
        trace!("decoded {}-bit record: {}", self.width, event);

        Ok(event)
    }

    /// Serializes `event` into `out`, which must be exactly one record long.
    ///
    /// Events whose code is unrepresented, or whose code belongs to another type's code
    /// space, are refused, so every record this writes decodes back to the same event.
    pub fn write_event(&self, event: &InputEvent, out: &mut [u8]) -> Result<(), EncodeError> {
        if !event.code.is_represented() {
            return Err(EncodeError::UnsupportedEventType(event.event_type));
        }
        if event.code.event_type() != event.event_type {
            return Err(EncodeError::CodeTypeMismatch {
                event_type: event.event_type,
                code_type: event.code.event_type(),
            });
        }
        let expected = self.record_size();
        if out.len() != expected {
            return Err(EncodeError::LengthMismatch { expected, actual: out.len() });
        }

        write_word(self.width, event.time.seconds, &mut out[self.seconds_offset()..]);
        write_word(self.width, event.time.microseconds, &mut out[self.microseconds_offset()..]);
        event.event_type.raw().write_le(&mut out[self.type_offset()..]);
        event.code.raw().write_le(&mut out[self.code_offset()..]);
        event.value.write_le(&mut out[self.value_offset()..]);
        trace!("encoded {}-bit record: {}", self.width, event);

        Ok(())
    }

    pub fn encode_event(&self, event: &InputEvent) -> Result<Vec<u8>, EncodeError> {
        let mut buf = vec![0u8; self.record_size()];
        self.write_event(event, &mut buf)?;

        Ok(buf)
    }

    /// Parses the three textual fields and encodes them stamped with `time`.
    pub fn encode_at(
        &self,
        event_type: &str,
        code: &str,
        value: &str,
        time: Timestamp,
    ) -> Result<(Vec<u8>, InputEvent), EncodeError> {
        let event_type = codes::parse_type(event_type).map_err(EncodeError::field(Field::EventType))?;
        if !event_type.has_code_space() {
            return Err(EncodeError::UnsupportedEventType(event_type));
        }
        let code = codes::parse(event_type, code).map_err(EncodeError::field(Field::Code))?;
        let value = codes::parse_value(value).map_err(EncodeError::field(Field::Value))?;

        let event = InputEvent { time, event_type, code, value };
        self.encode_event(&event).map(move |buf| (buf, event))
    }

    /// [`encode_at`](Self::encode_at) stamped with the current wall-clock time.
    pub fn encode(&self, event_type: &str, code: &str, value: &str) -> Result<(Vec<u8>, InputEvent), EncodeError> {
        self.encode_at(event_type, code, value, Timestamp::now())
    }
}

/// Decodes one record with the native layout.
pub fn decode(buf: &[u8]) -> Result<InputEvent, DecodeError> {
    RecordLayout::native().decode(buf)
}

/// Encodes one record with the native layout.
pub fn encode(event_type: &str, code: &str, value: &str) -> Result<(Vec<u8>, InputEvent), EncodeError> {
    RecordLayout::native().encode(event_type, code, value)
}
