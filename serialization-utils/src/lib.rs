//! Little-endian fixed-width field access
//!
//! Kernel input records carry their time fields in the platform's native word width,
//! so every reader and writer here is parameterized by [`WordWidth`].

use std::fmt;
use std::str::FromStr;

/// Width of a native machine word in a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordWidth {
    W32,
    W64,
}
impl WordWidth {
    /// Word width of the compilation target.
    pub const fn native() -> Self {
        if cfg!(target_pointer_width = "64") {
            WordWidth::W64
        } else {
            WordWidth::W32
        }
    }

    pub const fn bytes(self) -> usize {
        match self {
            WordWidth::W32 => 4,
            WordWidth::W64 => 8,
        }
    }

    pub const fn bits(self) -> u32 {
        self.bytes() as u32 * 8
    }

    pub fn from_bits(bits: u32) -> Result<Self, UnsupportedWordWidth> {
        match bits {
            32 => Ok(WordWidth::W32),
            64 => Ok(WordWidth::W64),
            n => Err(UnsupportedWordWidth(n.to_string())),
        }
    }
}
impl Default for WordWidth {
    fn default() -> Self {
        Self::native()
    }
}
impl fmt::Display for WordWidth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}
impl FromStr for WordWidth {
    type Err = UnsupportedWordWidth;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "32" => Ok(WordWidth::W32),
            "64" => Ok(WordWidth::W64),
            other => Err(UnsupportedWordWidth(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported word width: {0} (expected 32 or 64)")]
pub struct UnsupportedWordWidth(pub String);

/// A primitive stored little-endian at a fixed width.
///
/// `read_le` and `write_le` panic when the slice is shorter than `WIDTH`;
/// callers validate the record length before touching any field.
pub trait LeField: Sized + Copy {
    const WIDTH: usize;

    fn read_le(bytes: &[u8]) -> Self;
    fn write_le(self, out: &mut [u8]);
}
macro_rules! le_field {
    ($($t: ty),*) => {
        $(
            impl LeField for $t {
                const WIDTH: usize = std::mem::size_of::<$t>();

                fn read_le(bytes: &[u8]) -> Self {
                    let mut sink = [0u8; std::mem::size_of::<$t>()];
                    sink.copy_from_slice(&bytes[..Self::WIDTH]);
                    <$t>::from_le_bytes(sink)
                }
                fn write_le(self, out: &mut [u8]) {
                    out[..Self::WIDTH].copy_from_slice(&self.to_le_bytes());
                }
            }
        )*
    };
}
le_field!(u16, u32, u64, i16, i32, i64);

/// Reads a signed native word. 32-bit words are sign-extended.
pub fn read_word(width: WordWidth, bytes: &[u8]) -> i64 {
    match width {
        WordWidth::W32 => i32::read_le(bytes) as i64,
        WordWidth::W64 => i64::read_le(bytes),
    }
}

/// Writes a signed native word. On 32-bit layouts only the low 32 bits survive.
pub fn write_word(width: WordWidth, value: i64, out: &mut [u8]) {
    match width {
        WordWidth::W32 => (value as i32).write_le(out),
        WordWidth::W64 => value.write_le(out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_width_follows_pointer_width() {
        assert_eq!(WordWidth::native().bytes(), std::mem::size_of::<usize>());
    }

    #[test]
    fn fields_are_little_endian() {
        let mut buf = [0u8; 8];
        0x1234u16.write_le(&mut buf);
        assert_eq!(&buf[..2], &[0x34, 0x12]);

        (-2i32).write_le(&mut buf);
        assert_eq!(&buf[..4], &[0xfe, 0xff, 0xff, 0xff]);
        assert_eq!(i32::read_le(&buf), -2);
        assert_eq!(u16::read_le(&[0x1e, 0x00]), 0x1e);
    }

    #[test]
    fn short_words_sign_extend() {
        let buf = [0xff, 0xff, 0xff, 0xff];
        assert_eq!(read_word(WordWidth::W32, &buf), -1);

        let mut out = [0u8; 8];
        write_word(WordWidth::W64, -1, &mut out);
        assert_eq!(out, [0xff; 8]);
        assert_eq!(read_word(WordWidth::W64, &out), -1);
    }

    #[test]
    fn short_words_truncate_on_write() {
        let mut out = [0u8; 4];
        write_word(WordWidth::W32, 0x1_0000_0002, &mut out);
        assert_eq!(out, [2, 0, 0, 0]);
    }

    #[test]
    fn parses_word_width() {
        assert_eq!("32".parse::<WordWidth>(), Ok(WordWidth::W32));
        assert_eq!(" 64".parse::<WordWidth>(), Ok(WordWidth::W64));
        assert!("16".parse::<WordWidth>().is_err());
        assert_eq!(WordWidth::from_bits(64), Ok(WordWidth::W64));
        assert_eq!(WordWidth::W32.to_string(), "32");
    }
}
