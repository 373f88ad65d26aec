//! Character device channel
//!
//! Hands exactly one record's worth of bytes to the codec per read, and writes exactly one
//! record per submission.

use crate::error::{DecodeError, EncodeError, Result};
use crate::event::InputEvent;
use crate::record::RecordLayout;
use log::{debug, warn};
use std::fs::{File, OpenOptions};
use std::io::prelude::{Read, Write};
use std::io::ErrorKind;
use std::path::Path;

pub struct EventDevice {
    file: File,
    layout: RecordLayout,
    buf: Vec<u8>,
    failed: bool,
}
impl EventDevice {
    fn new(file: File, layout: RecordLayout) -> Self {
        EventDevice { file, layout, buf: vec![0u8; layout.record_size()], failed: false }
    }

    /// Opens `path` read-only.
    pub fn open_read<P: AsRef<Path>>(path: P, layout: RecordLayout) -> Result<Self> {
        debug!("opening {} for reading ({}-bit records)", path.as_ref().display(), layout.width);
        let file = File::open(path)?;

        Ok(Self::new(file, layout))
    }

    /// Opens `path` write-only in append mode.
    pub fn open_append<P: AsRef<Path>>(path: P, layout: RecordLayout) -> Result<Self> {
        debug!("opening {} for appending ({}-bit records)", path.as_ref().display(), layout.width);
        let file = OpenOptions::new().append(true).open(path)?;

        Ok(Self::new(file, layout))
    }

    pub fn layout(&self) -> RecordLayout {
        self.layout
    }

    /// Reads the next record. `Ok(None)` is end of stream at a record boundary.
    pub fn read_event(&mut self) -> Result<Option<InputEvent>> {
        let mut filled = 0;
        while filled < self.buf.len() {
            match self.file.read(&mut self.buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        match filled {
            0 => Ok(None),
            n if n == self.buf.len() => self.layout.decode(&self.buf).map(Some).map_err(From::from),
            n => Err(DecodeError::LengthMismatch { expected: self.buf.len(), actual: n }.into()),
        }
    }

    /// Writes one already-encoded record and flushes it to the device.
    pub fn write_record(&mut self, record: &[u8]) -> Result<()> {
        let expected = self.layout.record_size();
        if record.len() != expected {
            return Err(EncodeError::LengthMismatch { expected, actual: record.len() }.into());
        }

        self.file.write_all(record)?;
        if let Err(e) = self.file.sync_all() {
            // character devices commonly reject fsync
            warn!("sync after write failed: {}", e);
        }

        Ok(())
    }

    /// Encodes the textual fields and writes the record.
    pub fn write(&mut self, event_type: &str, code: &str, value: &str) -> Result<InputEvent> {
        let (record, event) = self.layout.encode(event_type, code, value)?;
        self.write_record(&record)?;

        Ok(event)
    }
}
/// Yields events until end of stream. The first error is yielded once and ends the
/// iteration, since the stream position after a failed read is not on a record boundary.
impl Iterator for EventDevice {
    type Item = Result<InputEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let r = self.read_event().transpose();
        if let Some(Err(_)) = r {
            self.failed = true;
        }

        r
    }
}

/// Reads events from `dev` until end of stream, calling `handler` for each.
pub fn read<P, F>(dev: P, layout: RecordLayout, mut handler: F) -> Result<()>
where
    P: AsRef<Path>,
    F: FnMut(&InputEvent),
{
    let mut device = EventDevice::open_read(dev, layout)?;
    while let Some(event) = device.read_event()? {
        handler(&event);
    }
    debug!("end of event stream");

    Ok(())
}

/// Submits one event to `dev` and returns what was written.
pub fn write<P: AsRef<Path>>(dev: P, layout: RecordLayout, event_type: &str, code: &str, value: &str) -> Result<InputEvent> {
    EventDevice::open_append(dev, layout)?.write(event_type, code, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::event::Timestamp;
    use ievio_codes::{Code, EventCode, EventType, KeyCode, SynCode};
    use ievio_serialization_utils::WordWidth;
    use std::path::PathBuf;

    struct TempDevice(PathBuf);
    impl TempDevice {
        fn new(name: &str, contents: &[u8]) -> Self {
            let path = std::env::temp_dir().join(format!("ievio-{}-{}", std::process::id(), name));
            std::fs::write(&path, contents).expect("creating temp device");
            TempDevice(path)
        }
    }
    impl Drop for TempDevice {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
        }
    }

    fn records(layout: RecordLayout, events: &[InputEvent]) -> Vec<u8> {
        events.iter().flat_map(|e| layout.encode_event(e).expect("encode")).collect()
    }

    #[test]
    fn reads_until_end_of_stream() {
        let layout = RecordLayout::new(WordWidth::W64);
        let events = [
            InputEvent::new(Timestamp::new(10, 1), Code::Key(KeyCode::KEY_A), 1),
            InputEvent::new(Timestamp::new(10, 2), Code::Syn(SynCode::SYN_REPORT), 0),
            InputEvent::new(Timestamp::new(10, 3), Code::Key(KeyCode::KEY_A), 0),
        ];
        let dev = TempDevice::new("read", &records(layout, &events));

        let mut seen = Vec::new();
        read(&dev.0, layout, |e| seen.push(*e)).expect("read");
        assert_eq!(seen, events);
    }

    #[test]
    fn empty_stream_is_not_an_error() {
        let dev = TempDevice::new("empty", &[]);
        let mut device = EventDevice::open_read(&dev.0, RecordLayout::native()).expect("open");
        assert!(device.read_event().expect("read").is_none());
        assert!(device.next().is_none());
    }

    #[test]
    fn truncated_record_is_a_decode_error() {
        let layout = RecordLayout::new(WordWidth::W32);
        let mut bytes = records(layout, &[InputEvent::new(Timestamp::EPOCH, Code::Key(KeyCode::KEY_B), 1)]);
        bytes.extend_from_slice(&[0u8; 5]);
        let dev = TempDevice::new("truncated", &bytes);

        let mut device = EventDevice::open_read(&dev.0, layout).expect("open");
        assert!(device.read_event().expect("first record").is_some());
        match device.read_event() {
            Err(Error::Decode(DecodeError::LengthMismatch { expected: 16, actual: 5 })) => (),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn iteration_ends_after_first_error() {
        let layout = RecordLayout::new(WordWidth::W32);
        let mut bytes = records(layout, &[InputEvent::new(Timestamp::EPOCH, Code::Key(KeyCode::KEY_B), 1)]);
        bytes.extend_from_slice(&[0u8; 5]);
        let dev = TempDevice::new("iter-error", &bytes);

        let mut device = EventDevice::open_read(&dev.0, layout).expect("open");
        assert!(matches!(device.next(), Some(Ok(_))));
        assert!(matches!(device.next(), Some(Err(Error::Decode(DecodeError::LengthMismatch { .. })))));
        assert!(device.next().is_none());
        assert!(device.next().is_none());
    }

    #[test]
    fn writes_append_records() {
        let layout = RecordLayout::native();
        let dev = TempDevice::new("write", &[]);

        let first = write(&dev.0, layout, "EV_KEY", "0x1e", "1").expect("write");
        let second = write(&dev.0, layout, "1", "30", "0").expect("write");
        assert_eq!(first.code, EventCode::from(Code::Key(KeyCode::KEY_A)));

        let back: Vec<_> = EventDevice::open_read(&dev.0, layout)
            .expect("open")
            .collect::<Result<_>>()
            .expect("read back");
        assert_eq!(back, vec![first, second]);
    }

    #[test]
    fn refused_write_leaves_device_untouched() {
        let dev = TempDevice::new("refused", &[]);
        match write(&dev.0, RecordLayout::native(), "0x15", "0", "1") {
            Err(Error::Encode(EncodeError::UnsupportedEventType(t))) => assert_eq!(t, EventType::EV_FF),
            other => panic!("unexpected: {:?}", other),
        }
        assert_eq!(std::fs::metadata(&dev.0).expect("metadata").len(), 0);
    }

    #[test]
    fn missing_device_is_an_io_error() {
        let missing = std::env::temp_dir().join("ievio-no-such-device");
        assert!(matches!(read(&missing, RecordLayout::native(), |_| ()), Err(Error::Io(_))));
    }
}
