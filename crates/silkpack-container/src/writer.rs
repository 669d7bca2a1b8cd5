use std::io::{ErrorKind, Write};

use bytes::BytesMut;

use crate::error::{ContainerError, Result};
use crate::frame::{write_end_marker, write_frame};
use crate::header::write_header;

const INITIAL_BUFFER_CAPACITY: usize = 4 * 1024;

/// Writes a complete container to any `Write` stream.
///
/// The header (vendor-prefixed form) is emitted before the first frame;
/// [`ContainerWriter::finish`] emits the end marker and flushes. Dropping the
/// writer without calling `finish` leaves the container unterminated.
pub struct ContainerWriter<W> {
    inner: W,
    buf: BytesMut,
    started: bool,
    frames: u64,
}

impl<W: Write> ContainerWriter<W> {
    /// Create a new container writer.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
            started: false,
            frames: 0,
        }
    }

    /// Write one compressed-frame payload (blocking).
    ///
    /// Empty payloads are skipped: a zero-length record is the end marker,
    /// which only `finish` may write.
    pub fn write_frame(&mut self, payload: &[u8]) -> Result<()> {
        if payload.is_empty() {
            return Ok(());
        }

        self.buf.clear();
        if !self.started {
            write_header(&mut self.buf, true);
            self.started = true;
        }
        write_frame(&mut self.buf, payload)?;
        self.frames += 1;
        self.drain_buffer()
    }

    /// Write the end marker, flush, and return the inner stream.
    ///
    /// A container with no frames still gets a header, so the output is
    /// always a well-formed (possibly empty) container.
    pub fn finish(mut self) -> Result<W> {
        self.buf.clear();
        if !self.started {
            write_header(&mut self.buf, true);
            self.started = true;
        }
        write_end_marker(&mut self.buf);
        self.drain_buffer()?;
        self.flush()?;
        Ok(self.inner)
    }

    /// Number of frame records written so far.
    pub fn frames_written(&self) -> u64 {
        self.frames
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    fn drain_buffer(&mut self) -> Result<()> {
        let mut offset = 0usize;
        while offset < self.buf.len() {
            match self.inner.write(&self.buf[offset..]) {
                Ok(0) => return Err(ContainerError::StreamClosed),
                Ok(n) => offset += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(ContainerError::Io(err)),
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        loop {
            match self.inner.flush() {
                Ok(()) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(ContainerError::Io(err)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::frame::FrameIter;
    use crate::header::parse_header;

    #[test]
    fn writes_header_frames_and_end_marker() {
        let mut writer = ContainerWriter::new(Cursor::new(Vec::<u8>::new()));
        writer.write_frame(b"alpha").unwrap();
        writer.write_frame(b"beta").unwrap();
        let wire = writer.finish().unwrap().into_inner();

        let body = parse_header(&wire).unwrap();
        let mut iter = FrameIter::new(&wire[body..]);
        assert_eq!(iter.next(), Some(b"alpha".as_ref()));
        assert_eq!(iter.next(), Some(b"beta".as_ref()));
        assert_eq!(iter.next(), None);
        assert_eq!(&wire[wire.len() - 2..], &[0x00, 0x00]);
    }

    #[test]
    fn no_frames_still_yields_valid_container() {
        let writer = ContainerWriter::new(Cursor::new(Vec::<u8>::new()));
        let wire = writer.finish().unwrap().into_inner();
        assert_eq!(wire, b"\x02#!SILK_V3\x00\x00");
    }

    #[test]
    fn empty_payloads_are_skipped() {
        let mut writer = ContainerWriter::new(Cursor::new(Vec::<u8>::new()));
        writer.write_frame(b"").unwrap();
        writer.write_frame(b"kept").unwrap();
        writer.write_frame(b"").unwrap();
        assert_eq!(writer.frames_written(), 1);
        let wire = writer.finish().unwrap().into_inner();

        let body = parse_header(&wire).unwrap();
        let frames: Vec<_> = FrameIter::new(&wire[body..]).collect();
        assert_eq!(frames, vec![b"kept".as_ref()]);
    }

    #[test]
    fn oversized_frame_rejected() {
        let mut writer = ContainerWriter::new(Cursor::new(Vec::<u8>::new()));
        let payload = vec![0u8; crate::frame::MAX_PAYLOAD + 1];
        let err = writer.write_frame(&payload).unwrap_err();
        assert!(matches!(err, ContainerError::FrameTooLarge { .. }));
    }

    #[test]
    fn stream_closed_when_write_returns_zero() {
        struct ZeroWriter;

        impl Write for ZeroWriter {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Ok(0)
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut writer = ContainerWriter::new(ZeroWriter);
        let err = writer.write_frame(b"x").unwrap_err();
        assert!(matches!(err, ContainerError::StreamClosed));
    }

    #[test]
    fn handles_interrupted_write_and_flush() {
        struct InterruptedOnce {
            wrote_once: bool,
            flushed_once: bool,
            data: Vec<u8>,
        }

        impl Write for InterruptedOnce {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                if !self.wrote_once {
                    self.wrote_once = true;
                    return Err(std::io::Error::from(ErrorKind::Interrupted));
                }
                self.data.extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                if !self.flushed_once {
                    self.flushed_once = true;
                    return Err(std::io::Error::from(ErrorKind::Interrupted));
                }
                Ok(())
            }
        }

        let mut writer = ContainerWriter::new(InterruptedOnce {
            wrote_once: false,
            flushed_once: false,
            data: Vec::new(),
        });
        writer.write_frame(b"retry").unwrap();
        let inner = writer.finish().unwrap();
        assert!(!inner.data.is_empty());
    }
}
