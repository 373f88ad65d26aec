//! Event types

code_space! {
    /// Top-level class of an input event record.
    pub struct EventType;

    EV_SYN = 0x0000;
    EV_KEY = 0x0001;
    EV_REL = 0x0002;
    EV_ABS = 0x0003;
    EV_MSC = 0x0004;
    EV_SW = 0x0005;
    EV_LED = 0x0011;
    EV_SND = 0x0012;
    EV_REP = 0x0014;
    EV_FF = 0x0015;
    EV_PWR = 0x0016;
    EV_FF_STATUS = 0x0017;
    EV_MAX = 0x001f;
    EV_CNT = 0x0020;
}

impl EventType {
    /// Whether records of this type carry a code from one of the registry's code spaces.
    ///
    /// `EV_FF`, `EV_PWR`, `EV_FF_STATUS`, the `EV_MAX` / `EV_CNT` boundaries and every
    /// unassigned value do not.
    pub fn has_code_space(self) -> bool {
        self.code_space_name().is_some()
    }

    /// Name prefix shared by the codes of this type (`"KEY"` for `EV_KEY`).
    pub fn code_space_name(self) -> Option<&'static str> {
        Some(match self {
            EventType::EV_SYN => "SYN",
            EventType::EV_KEY => "KEY",
            EventType::EV_REL => "REL",
            EventType::EV_ABS => "ABS",
            EventType::EV_MSC => "MSC",
            EventType::EV_SW => "SW",
            EventType::EV_LED => "LED",
            EventType::EV_SND => "SND",
            EventType::EV_REP => "REP",
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::EventType;

    #[test]
    fn renders_known_and_unknown_types() {
        assert_eq!(EventType::EV_KEY.to_string(), "EV_KEY(0x0001)");
        assert_eq!(EventType::EV_FF_STATUS.to_string(), "EV_FF_STATUS(0x0017)");
        assert_eq!(EventType(0x06).to_string(), "UNKNOWN(0x0006)");
        assert_eq!(EventType(0xffff).to_string(), "UNKNOWN(0xffff)");
    }

    #[test]
    fn code_spaces_exist_for_nine_types() {
        let with_codes: Vec<_> = EventType::known().filter(|t| t.has_code_space()).collect();
        assert_eq!(with_codes.len(), 9);
        assert!(!EventType::EV_FF.has_code_space());
        assert!(!EventType::EV_PWR.has_code_space());
        assert!(!EventType::EV_CNT.has_code_space());
        assert!(!EventType(0x10).has_code_space());
    }

    #[test]
    fn looks_up_by_name() {
        assert_eq!(EventType::from_name("EV_ABS"), Some(EventType::EV_ABS));
        assert_eq!(EventType::from_name("EV_NOPE"), None);
    }
}
