//! Structured input events

use ievio_codes::{Code, EventCode, EventType, SynCode};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Seconds and microseconds since the Unix epoch, as carried by a kernel `timeval`.
///
/// Microseconds are not normalized; whatever a record carries is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp {
    pub seconds: i64,
    pub microseconds: i64,
}
impl Timestamp {
    pub const EPOCH: Self = Timestamp { seconds: 0, microseconds: 0 };

    pub const fn new(seconds: i64, microseconds: i64) -> Self {
        Timestamp { seconds, microseconds }
    }

    /// Current wall-clock time. A clock set before the epoch reads as negative seconds.
    pub fn now() -> Self {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(d) => Timestamp::new(d.as_secs() as i64, d.subsec_micros() as i64),
            Err(e) => {
                let d = e.duration();
                Timestamp::new(-(d.as_secs() as i64), -(d.subsec_micros() as i64))
            }
        }
    }
}
impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // fields are not normalized, so render their sum with a single sign
        let total = i128::from(self.seconds) * 1_000_000 + i128::from(self.microseconds);
        let sign = if total < 0 { "-" } else { "" };
        let total = total.abs();
        write!(f, "{}{}.{:06}", sign, total / 1_000_000, total % 1_000_000)
    }
}

/// How a key event's value reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Released,
    Pressed,
    Repeated,
    Other(i32),
}
impl From<i32> for KeyState {
    fn from(v: i32) -> Self {
        match v {
            0 => KeyState::Released,
            1 => KeyState::Pressed,
            2 => KeyState::Repeated,
            v => KeyState::Other(v),
        }
    }
}

/// One record, decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputEvent {
    pub time: Timestamp,
    pub event_type: EventType,
    pub code: EventCode,
    pub value: i32,
}
impl InputEvent {
    /// Builds an event from a typed code; the event type follows the code.
    pub fn new(time: Timestamp, code: Code, value: i32) -> Self {
        InputEvent { time, event_type: code.event_type(), code: EventCode::Typed(code), value }
    }

    pub fn is_sync_report(&self) -> bool {
        self.code == EventCode::Typed(Code::Syn(SynCode::SYN_REPORT))
    }

    /// `None` unless this is an `EV_KEY` event.
    pub fn key_state(&self) -> Option<KeyState> {
        if self.event_type == EventType::EV_KEY {
            Some(KeyState::from(self.value))
        } else {
            None
        }
    }
}
impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {}, {}, {}", self.time, self.event_type, self.code, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ievio_codes::KeyCode;

    #[test]
    fn renders_like_the_read_loop_prints() {
        let e = InputEvent::new(Timestamp::new(1500000000, 42), Code::Key(KeyCode::KEY_A), 1);
        assert_eq!(e.to_string(), "1500000000.000042, EV_KEY(0x0001), KEY_A(0x001e), 1");
    }

    #[test]
    fn timestamps_render_with_one_sign() {
        assert_eq!(Timestamp::new(0, -5).to_string(), "-0.000005");
        assert_eq!(Timestamp::new(-1, 0).to_string(), "-1.000000");
        assert_eq!(Timestamp::new(-1, -250000).to_string(), "-1.250000");
        assert_eq!(Timestamp::new(3, -5).to_string(), "2.999995");
        assert_eq!(Timestamp::new(1, 1_500_000).to_string(), "2.500000");
        assert_eq!(Timestamp::new(i64::MIN, i64::MIN).to_string().chars().filter(|&c| c == '-').count(), 1);
    }

    #[test]
    fn key_states() {
        let mut e = InputEvent::new(Timestamp::EPOCH, Code::Key(KeyCode::KEY_ESC), 2);
        assert_eq!(e.key_state(), Some(KeyState::Repeated));
        e.value = 7;
        assert_eq!(e.key_state(), Some(KeyState::Other(7)));

        let sync = InputEvent::new(Timestamp::EPOCH, Code::Syn(SynCode::SYN_REPORT), 0);
        assert!(sync.is_sync_report());
        assert_eq!(sync.key_state(), None);
    }

    #[test]
    fn now_is_after_epoch() {
        let t = Timestamp::now();
        assert!(t.seconds > 0);
        assert!((0..1_000_000).contains(&t.microseconds));
    }
}
