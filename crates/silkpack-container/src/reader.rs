use std::io::{ErrorKind, Read};

use bytes::{Buf, Bytes, BytesMut};

use crate::error::{ContainerError, Result};
use crate::frame::LENGTH_SIZE;
use crate::header::{MAGIC, VENDOR_PREFIX};

const INITIAL_BUFFER_CAPACITY: usize = 4 * 1024;
const READ_CHUNK_SIZE: usize = 4 * 1024;

/// Reads complete frame payloads from any `Read` stream carrying a container.
///
/// Handles partial reads internally. The end-of-stream policy matches the
/// slice-level [`FrameIter`](crate::FrameIter): a zero-length record, a ragged
/// end, or a truncated final record all end iteration cleanly; only a missing
/// or mismatched header is an error.
pub struct ContainerReader<R> {
    inner: R,
    buf: BytesMut,
    header_parsed: bool,
    done: bool,
    truncated: bool,
    eof: bool,
}

impl<R: Read> ContainerReader<R> {
    /// Create a new container reader.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
            header_parsed: false,
            done: false,
            truncated: false,
            eof: false,
        }
    }

    /// Read the next complete frame payload (blocking).
    ///
    /// Returns `Ok(None)` once the container ends, for any of the tolerant
    /// end conditions.
    pub fn next_frame(&mut self) -> Result<Option<Bytes>> {
        if self.done {
            return Ok(None);
        }

        if !self.header_parsed {
            self.parse_header()?;
        }

        loop {
            if self.buf.len() >= LENGTH_SIZE {
                let len = u16::from_le_bytes([self.buf[0], self.buf[1]]) as usize;
                if len == 0 {
                    self.done = true;
                    return Ok(None);
                }
                if self.buf.len() >= LENGTH_SIZE + len {
                    self.buf.advance(LENGTH_SIZE);
                    return Ok(Some(self.buf.split_to(len).freeze()));
                }
                if self.eof {
                    tracing::debug!(
                        declared = len,
                        available = self.buf.len() - LENGTH_SIZE,
                        "container stream truncated mid-frame"
                    );
                    self.truncated = true;
                    self.done = true;
                    return Ok(None);
                }
            } else if self.eof {
                // Ragged end: fewer than two bytes where a length belongs.
                self.done = true;
                return Ok(None);
            }

            self.fill_buffer()?;
        }
    }

    /// True once the stream ended inside a frame record's payload.
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Consume the reader and return the inner stream.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn parse_header(&mut self) -> Result<()> {
        loop {
            // Up to 10 bytes are needed to tell the vendor-prefixed form
            // from a mismatch.
            if let Some(skip) = self.match_header() {
                self.buf.advance(skip);
                self.header_parsed = true;
                return Ok(());
            }
            if self.buf.len() > MAGIC.len() || self.eof {
                return Err(ContainerError::InvalidHeader);
            }
            self.fill_buffer()?;
        }
    }

    fn match_header(&self) -> Option<usize> {
        if self.buf.len() >= 1 + MAGIC.len()
            && self.buf[0] == VENDOR_PREFIX
            && self.buf[1..1 + MAGIC.len()] == MAGIC
        {
            return Some(1 + MAGIC.len());
        }
        if self.buf.len() >= MAGIC.len() && self.buf[..MAGIC.len()] == MAGIC {
            return Some(MAGIC.len());
        }
        None
    }

    fn fill_buffer(&mut self) -> Result<()> {
        let mut chunk = [0u8; READ_CHUNK_SIZE];
        loop {
            match self.inner.read(&mut chunk) {
                Ok(0) => {
                    self.eof = true;
                    return Ok(());
                }
                Ok(n) => {
                    self.buf.extend_from_slice(&chunk[..n]);
                    return Ok(());
                }
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(ContainerError::Io(err)),
            }
        }
    }
}
