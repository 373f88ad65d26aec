//! Textual tokens: decimal, `0x`-prefixed hexadecimal, or a symbolic name

use crate::code::{Code, EventCode};
use crate::event_type::EventType;
use log::trace;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),
    #[error("unknown name {name:?} in {space}")]
    UnknownName { name: String, space: &'static str },
}
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses an unsigned number that must fit in `bits` bits.
///
/// A case-insensitive `0x` prefix selects hexadecimal; anything else is decimal.
/// Signs, whitespace and an empty digit string are rejected.
pub fn parse_number(text: &str, bits: u32) -> ParseResult<u64> {
    let invalid = || ParseError::InvalidNumber(text.to_owned());
    let (digits, radix) = match text.get(..2) {
        Some(p) if p.eq_ignore_ascii_case("0x") => (&text[2..], 16),
        _ => (text, 10),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(invalid());
    }

    let v = u64::from_str_radix(digits, radix).map_err(|_| invalid())?;
    if bits < 64 && v >> bits != 0 {
        return Err(invalid());
    }

    Ok(v)
}

/// Parses an event value. Negative decimal or hexadecimal input is accepted, and
/// unsigned input up to `u32::MAX` wraps into the signed range.
pub fn parse_value(text: &str) -> ParseResult<i32> {
    match text.strip_prefix('-') {
        Some(magnitude) => {
            let m = parse_number(magnitude, 32).map_err(|_| ParseError::InvalidNumber(text.to_owned()))?;
            if m > 1 << 31 {
                return Err(ParseError::InvalidNumber(text.to_owned()));
            }
            Ok((-(m as i64)) as i32)
        }
        None => parse_number(text, 32).map(|v| v as u32 as i32),
    }
}

fn looks_symbolic(text: &str) -> bool {
    text.chars().next().map_or(false, |c| c.is_ascii_alphabetic() || c == '_')
}

/// Always succeeds; unassigned values render as `UNKNOWN`.
pub fn resolve_type(raw: u16) -> EventType {
    EventType(raw)
}

/// Total over every `(event_type, raw)` pair. See [`EventCode::resolve`].
pub fn resolve(event_type: EventType, raw: u16) -> EventCode {
    EventCode::resolve(event_type, raw)
}

pub fn parse_type(text: &str) -> ParseResult<EventType> {
    if looks_symbolic(text) {
        trace!("looking up event type name {:?}", text);
        return EventType::from_name(text).ok_or_else(|| ParseError::UnknownName {
            name: text.to_owned(),
            space: "EV",
        });
    }

    parse_number(text, 16).map(|v| resolve_type(v as u16))
}

/// Parses a code token in the code space of `event_type`.
///
/// Numeric tokens are accepted for every type, including types without a code space,
/// which yield [`EventCode::Unrepresented`]. Symbolic tokens need a code space.
pub fn parse(event_type: EventType, text: &str) -> ParseResult<EventCode> {
    if looks_symbolic(text) {
        trace!("looking up code name {:?} for {}", text, event_type);
        return Code::from_name(event_type, text)
            .map(EventCode::Typed)
            .ok_or_else(|| ParseError::UnknownName {
                name: text.to_owned(),
                space: event_type.code_space_name().unwrap_or("an event type without codes"),
            });
    }

    parse_number(text, 16).map(|v| resolve(event_type, v as u16))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spaces::{KeyCode, SynCode};

    #[test]
    fn hex_and_decimal_agree() {
        assert_eq!(parse_type("0x01"), Ok(EventType::EV_KEY));
        assert_eq!(parse_type("1"), Ok(EventType::EV_KEY));
        assert_eq!(parse_type("0X1"), Ok(EventType::EV_KEY));
        assert_eq!(parse(EventType::EV_KEY, "0x1e"), parse(EventType::EV_KEY, "30"));
    }

    #[test]
    fn rejects_malformed_numbers() {
        for text in ["", "0x", "+1", "-1", " 1", "1 ", "0x1g", "12a", "٣"].iter() {
            assert_eq!(parse_number(text, 16), Err(ParseError::InvalidNumber(text.to_string())), "{:?}", text);
        }
    }

    #[test]
    fn rejects_out_of_range_numbers() {
        assert_eq!(parse_number("65535", 16), Ok(65535));
        assert!(parse_number("65536", 16).is_err());
        assert!(parse_number("0x10000", 16).is_err());
        assert!(parse_type("70000").is_err());
        assert!(parse(EventType::EV_KEY, "0x1ffff").is_err());
    }

    #[test]
    fn parses_symbolic_names() {
        assert_eq!(parse_type("EV_REL"), Ok(EventType::EV_REL));
        assert_eq!(parse(EventType::EV_KEY, "KEY_A"), Ok(EventCode::Typed(Code::Key(KeyCode::KEY_A))));
        assert_eq!(parse(EventType::EV_SYN, "SYN_REPORT"), Ok(EventCode::Typed(Code::Syn(SynCode::SYN_REPORT))));
        assert_eq!(
            parse(EventType::EV_REL, "KEY_A"),
            Err(ParseError::UnknownName { name: "KEY_A".into(), space: "REL" })
        );
        assert!(matches!(parse_type("EV_NOPE"), Err(ParseError::UnknownName { .. })));
    }

    #[test]
    fn numeric_codes_for_types_without_code_space() {
        assert_eq!(
            parse(EventType::EV_FF, "3"),
            Ok(EventCode::Unrepresented { event_type: EventType::EV_FF, raw: 3 })
        );
        assert!(matches!(parse(EventType::EV_PWR, "KEY_A"), Err(ParseError::UnknownName { .. })));
    }

    #[test]
    fn parses_values() {
        assert_eq!(parse_value("1"), Ok(1));
        assert_eq!(parse_value("-5"), Ok(-5));
        assert_eq!(parse_value("-2147483648"), Ok(i32::MIN));
        assert_eq!(parse_value("2147483647"), Ok(i32::MAX));
        assert_eq!(parse_value("0xffffffff"), Ok(-1));
        assert_eq!(parse_value("4294967295"), Ok(-1));
        assert!(parse_value("4294967296").is_err());
        assert!(parse_value("-2147483649").is_err());
        assert!(parse_value("--1").is_err());
        assert!(parse_value("one").is_err());
    }
}
