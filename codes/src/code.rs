//! Type-dependent interpretation of the code field

use crate::event_type::EventType;
use crate::spaces::*;
use std::fmt;

/// A code tagged with the code space of its event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Code {
    Syn(SynCode),
    Key(KeyCode),
    Rel(RelCode),
    Abs(AbsCode),
    Msc(MscCode),
    Sw(SwCode),
    Led(LedCode),
    Snd(SndCode),
    Rep(RepCode),
}
impl Code {
    /// Interprets `raw` in the code space of `event_type`, if that type has one.
    pub fn new(event_type: EventType, raw: u16) -> Option<Self> {
        Some(match event_type {
            EventType::EV_SYN => Code::Syn(SynCode(raw)),
            EventType::EV_KEY => Code::Key(KeyCode(raw)),
            EventType::EV_REL => Code::Rel(RelCode(raw)),
            EventType::EV_ABS => Code::Abs(AbsCode(raw)),
            EventType::EV_MSC => Code::Msc(MscCode(raw)),
            EventType::EV_SW => Code::Sw(SwCode(raw)),
            EventType::EV_LED => Code::Led(LedCode(raw)),
            EventType::EV_SND => Code::Snd(SndCode(raw)),
            EventType::EV_REP => Code::Rep(RepCode(raw)),
            _ => return None,
        })
    }

    /// Looks a symbolic name up in the code space of `event_type`.
    pub fn from_name(event_type: EventType, name: &str) -> Option<Self> {
        let raw = match event_type {
            EventType::EV_SYN => SynCode::from_name(name)?.raw(),
            EventType::EV_KEY => KeyCode::from_name(name)?.raw(),
            EventType::EV_REL => RelCode::from_name(name)?.raw(),
            EventType::EV_ABS => AbsCode::from_name(name)?.raw(),
            EventType::EV_MSC => MscCode::from_name(name)?.raw(),
            EventType::EV_SW => SwCode::from_name(name)?.raw(),
            EventType::EV_LED => LedCode::from_name(name)?.raw(),
            EventType::EV_SND => SndCode::from_name(name)?.raw(),
            EventType::EV_REP => RepCode::from_name(name)?.raw(),
            _ => return None,
        };

        Self::new(event_type, raw)
    }

    /// Every named code of `event_type`; empty for types without a code space.
    pub fn known(event_type: EventType) -> Vec<Self> {
        let raws: Vec<u16> = match event_type {
            EventType::EV_SYN => SynCode::known().map(SynCode::raw).collect(),
            EventType::EV_KEY => KeyCode::known().map(KeyCode::raw).collect(),
            EventType::EV_REL => RelCode::known().map(RelCode::raw).collect(),
            EventType::EV_ABS => AbsCode::known().map(AbsCode::raw).collect(),
            EventType::EV_MSC => MscCode::known().map(MscCode::raw).collect(),
            EventType::EV_SW => SwCode::known().map(SwCode::raw).collect(),
            EventType::EV_LED => LedCode::known().map(LedCode::raw).collect(),
            EventType::EV_SND => SndCode::known().map(SndCode::raw).collect(),
            EventType::EV_REP => RepCode::known().map(RepCode::raw).collect(),
            _ => Vec::new(),
        };

        raws.into_iter().filter_map(|r| Self::new(event_type, r)).collect()
    }

    pub fn event_type(&self) -> EventType {
        match self {
            Code::Syn(_) => EventType::EV_SYN,
            Code::Key(_) => EventType::EV_KEY,
            Code::Rel(_) => EventType::EV_REL,
            Code::Abs(_) => EventType::EV_ABS,
            Code::Msc(_) => EventType::EV_MSC,
            Code::Sw(_) => EventType::EV_SW,
            Code::Led(_) => EventType::EV_LED,
            Code::Snd(_) => EventType::EV_SND,
            Code::Rep(_) => EventType::EV_REP,
        }
    }

    pub fn raw(&self) -> u16 {
        match *self {
            Code::Syn(c) => c.raw(),
            Code::Key(c) => c.raw(),
            Code::Rel(c) => c.raw(),
            Code::Abs(c) => c.raw(),
            Code::Msc(c) => c.raw(),
            Code::Sw(c) => c.raw(),
            Code::Led(c) => c.raw(),
            Code::Snd(c) => c.raw(),
            Code::Rep(c) => c.raw(),
        }
    }

    /// Canonical name within the code space, `None` when the value is not in the table.
    pub fn name(&self) -> Option<&'static str> {
        match *self {
            Code::Syn(c) => c.name(),
            Code::Key(c) => c.name(),
            Code::Rel(c) => c.name(),
            Code::Abs(c) => c.name(),
            Code::Msc(c) => c.name(),
            Code::Sw(c) => c.name(),
            Code::Led(c) => c.name(),
            Code::Snd(c) => c.name(),
            Code::Rep(c) => c.name(),
        }
    }
}
impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}(0x{:04x})", self.name().unwrap_or("UNKNOWN"), self.raw())
    }
}

/// The code field of a record as the registry understands it.
///
/// Types without a code space keep their raw code so a decoded record loses nothing,
/// but they never pose as a [`Code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventCode {
    Typed(Code),
    Unrepresented { event_type: EventType, raw: u16 },
}
impl EventCode {
    /// Total over every `(event_type, raw)` pair.
    pub fn resolve(event_type: EventType, raw: u16) -> Self {
        match Code::new(event_type, raw) {
            Some(c) => EventCode::Typed(c),
            None => EventCode::Unrepresented { event_type, raw },
        }
    }

    pub fn code(&self) -> Option<&Code> {
        match self {
            EventCode::Typed(c) => Some(c),
            EventCode::Unrepresented { .. } => None,
        }
    }

    pub fn is_represented(&self) -> bool {
        self.code().is_some()
    }

    pub fn event_type(&self) -> EventType {
        match self {
            EventCode::Typed(c) => c.event_type(),
            &EventCode::Unrepresented { event_type, .. } => event_type,
        }
    }

    pub fn raw(&self) -> u16 {
        match self {
            EventCode::Typed(c) => c.raw(),
            &EventCode::Unrepresented { raw, .. } => raw,
        }
    }
}
impl From<Code> for EventCode {
    fn from(c: Code) -> Self {
        EventCode::Typed(c)
    }
}
impl fmt::Display for EventCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EventCode::Typed(c) => fmt::Display::fmt(c, f),
            &EventCode::Unrepresented { raw, .. } => write!(f, "NONE(0x{:04x})", raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_key_a() {
        let code = EventCode::resolve(EventType::EV_KEY, 0x1e);
        assert_eq!(code, EventCode::Typed(Code::Key(KeyCode::KEY_A)));
        assert_eq!(code.to_string(), "KEY_A(0x001e)");
    }

    #[test]
    fn aliased_values_render_every_name() {
        assert_eq!(KeyCode::KEY_HANGUEL.to_string(), "KEY_HANGEUL|KEY_HANGUEL(0x007a)");
        assert_eq!(KeyCode::BTN_A.to_string(), "BTN_GAMEPAD|BTN_SOUTH|BTN_A(0x0130)");
        assert_eq!(KeyCode::KEY_MIN_INTERESTING.to_string(), "KEY_MUTE|KEY_MIN_INTERESTING(0x0071)");
        assert_eq!(SwCode::SW_RADIO.to_string(), "SW_RFKILL_ALL|SW_RADIO(0x0003)");
        assert_eq!(RepCode::REP_MAX.to_string(), "REP_PERIOD|REP_MAX(0x0001)");
    }

    #[test]
    fn boundary_names_render() {
        assert_eq!(SynCode::SYN_MAX.to_string(), "SYN_MAX(0x000f)");
        assert_eq!(AbsCode::ABS_CNT.to_string(), "ABS_CNT(0x0040)");
        assert_eq!(KeyCode::KEY_MAX.to_string(), "KEY_MAX(0x02ff)");
    }

    #[test]
    fn resolution_is_total() {
        for t in EventType::known().chain(vec![EventType(0x06), EventType(0xffff)]) {
            for raw in 0..=u16::MAX {
                let code = EventCode::resolve(t, raw);
                assert_eq!(code.raw(), raw);
                assert_eq!(code.event_type(), t);
                assert_eq!(code.is_represented(), t.has_code_space());
                let rendered = code.to_string();
                assert!(rendered.ends_with(&format!("(0x{:04x})", raw)), "{}", rendered);
            }
        }
    }

    #[test]
    fn unknown_codes_render_unknown() {
        assert_eq!(Code::new(EventType::EV_REL, 0x0a).map(|c| c.to_string()), Some("UNKNOWN(0x000a)".into()));
        assert_eq!(Code::new(EventType::EV_KEY, 0xffff).and_then(|c| c.name()), None);
    }

    #[test]
    fn types_without_code_space_stay_unrepresented() {
        for t in [EventType::EV_FF, EventType::EV_PWR, EventType::EV_FF_STATUS, EventType::EV_MAX, EventType::EV_CNT].iter() {
            let code = EventCode::resolve(*t, 0x50);
            assert_eq!(code, EventCode::Unrepresented { event_type: *t, raw: 0x50 });
            assert_eq!(code.code(), None);
            assert_eq!(code.to_string(), "NONE(0x0050)");
        }
    }

    #[test]
    fn names_resolve_within_their_space_only() {
        assert_eq!(Code::from_name(EventType::EV_KEY, "BTN_LEFT"), Some(Code::Key(KeyCode(0x110))));
        assert_eq!(Code::from_name(EventType::EV_KEY, "BTN_MOUSE|BTN_LEFT"), Some(Code::Key(KeyCode(0x110))));
        assert_eq!(Code::from_name(EventType::EV_REL, "KEY_A"), None);
        assert_eq!(Code::from_name(EventType::EV_FF, "KEY_A"), None);
    }

    #[test]
    fn lists_known_codes_in_order() {
        let rels = Code::known(EventType::EV_REL);
        assert_eq!(rels.first(), Some(&Code::Rel(RelCode::REL_X)));
        assert!(rels.windows(2).all(|w| w[0].raw() < w[1].raw()));
        assert!(Code::known(EventType::EV_PWR).is_empty());
    }
}
